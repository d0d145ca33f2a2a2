//! Utilities to run agents against each other and report the results.
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use crate::ai::PlayerAgent;
use crate::board::{Outcome, Player};
use crate::game::{GameSession, Score};
use crate::replay::MoveLog;
use crate::reversi::Layout;
use crate::wdl::WDL;

/// Run agents built by `agent_l` against agents built by `agent_r`, starting from `start`.
///
/// `games_per_side` games are run with the left agent as player one, except if `both_sides` is true, in
/// which case every game is played twice with the players switching sides.
/// The factories receive the seat the agent will play.
///
/// `callback` is called after every game with the running tally from the POV of the left agent.
///
/// Panics if a game stalls because an agent did not produce a legal move.
#[must_use]
pub fn run<L: PlayerAgent + 'static, R: PlayerAgent + 'static>(
    start: Layout,
    agent_l: impl Fn(Player) -> L,
    agent_r: impl Fn(Player) -> R,
    games_per_side: u32,
    both_sides: bool,
    callback: impl Fn(WDL<u32>, &Replay),
) -> BotGameResult {
    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };

    let mut partial_wdl = WDL::<u32>::default();
    let mut replays = vec![];

    for game_i in 0..game_count {
        let flip = both_sides && game_i % 2 == 1;
        let player_l = if flip { Player::Two } else { Player::One };

        let replay = play_single_game(start, player_l, agent_l(player_l), agent_r(player_l.other()));

        partial_wdl += replay.outcome.pov(player_l).to_wdl();
        callback(partial_wdl, &replay);
        replays.push(replay);
    }

    let total_moves: usize = replays.iter().map(|r| r.log.len()).sum();

    BotGameResult {
        game_count,
        average_game_length: total_moves as f32 / game_count.max(1) as f32,
        wdl_l: partial_wdl,
        replays,
    }
}

fn play_single_game<L: PlayerAgent + 'static, R: PlayerAgent + 'static>(
    start: Layout,
    player_l: Player,
    agent_l: L,
    agent_r: R,
) -> Replay {
    assert_eq!(player_l, agent_l.player(), "agent_l was built for the wrong player");
    let debug_l = format!("{:?}", agent_l);
    let debug_r = format!("{:?}", agent_r);

    let start_time = Instant::now();
    let mut session = GameSession::with_start(start);
    if let Err(e) = session.reset(Box::new(agent_l), Box::new(agent_r)) {
        panic!("agent factories must build agents for the requested player: {}", e);
    }
    let duration = start_time.elapsed().as_secs_f32();

    let outcome = match session.state().outcome() {
        Some(outcome) => outcome,
        None => panic!(
            "game stalled after {} moves, {:?} did not produce a legal move",
            session.log().len(),
            session.current_player()
        ),
    };

    Replay {
        player_l,
        log: session.log().clone(),
        outcome,
        score: session.score(),
        duration,
        debug_l,
        debug_r,
    }
}

/// A single finished game played by [run].
#[derive(Debug, Clone)]
pub struct Replay {
    pub player_l: Player,

    pub log: MoveLog,
    pub outcome: Outcome,
    pub score: Score,

    /// The time the game took in seconds.
    pub duration: f32,

    pub debug_l: String,
    pub debug_r: String,
}

/// Structure returned by [run].
pub struct BotGameResult {
    pub game_count: u32,
    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,
    pub replays: Vec<Replay>,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l)?;
        writeln!(f, "  left      {:.3?}", self.wdl_l.to_fractions())?;
        if let Some(replay) = self.replays.first() {
            writeln!(f, "  left:     {}", replay.debug_l)?;
            writeln!(f, "  right:    {}", replay.debug_r)?;
        }
        writeln!(f, "}}")?;

        Ok(())
    }
}
