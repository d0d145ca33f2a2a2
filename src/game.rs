//! The game controller: turn order, pass and finish detection, and dispatching turns to the seated agents.
use std::fmt::{Debug, Display, Formatter};

use tracing::{debug, info, warn};

use crate::ai::PlayerAgent;
use crate::board::{Outcome, Player};
use crate::error::{Error, Result};
use crate::replay::MoveLog;
use crate::reversi::{Coord, Layout, Move, ReversiBoard};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameState {
    AwaitingMove(Player),
    Finished(Outcome),
}

/// The number of pieces each player has on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Score {
    pub one: u8,
    pub two: u8,
}

/// Read-only view of a session, handed to observers after every state change.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Snapshot {
    pub tiles: [Option<Player>; Coord::AREA],
    pub score: Score,
    pub current_player: Option<Player>,
    pub outcome: Option<Outcome>,
}

pub type Observer = Box<dyn FnMut(&Snapshot)>;

/// A single game between two seated agents.
///
/// The board is never modified directly: every change goes through the move log, and undo re-derives the board by
/// replaying what's left of it.
pub struct GameSession {
    log: MoveLog,
    board: ReversiBoard,
    state: GameState,
    seats: [Option<Box<dyn PlayerAgent>>; 2],
    observers: Vec<Observer>,
}

impl GameState {
    fn of(board: &ReversiBoard) -> GameState {
        match board.next_player() {
            Some(player) => GameState::AwaitingMove(player),
            None => GameState::Finished(Outcome::from_counts(
                board.score(Player::One),
                board.score(Player::Two),
            )),
        }
    }

    pub fn current_player(self) -> Option<Player> {
        match self {
            GameState::AwaitingMove(player) => Some(player),
            GameState::Finished(_) => None,
        }
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameState::AwaitingMove(_) => None,
            GameState::Finished(outcome) => Some(outcome),
        }
    }
}

impl Score {
    pub fn of(board: &ReversiBoard) -> Score {
        Score {
            one: board.score(Player::One),
            two: board.score(Player::Two),
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.one, self.two)
    }
}

impl Snapshot {
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        self.outcome.and_then(Outcome::winner)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

impl Debug for GameSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("log", &self.log)
            .field("board", &self.board)
            .field("state", &self.state)
            .field("seats", &self.seats)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// A session on the standard layout without any agents seated.
    pub fn new() -> Self {
        GameSession::with_start(Layout::standard())
    }

    /// A session that starts from a custom `layout`.
    pub fn with_start(layout: Layout) -> Self {
        let log = MoveLog::with_start(layout);
        let board = log.replay_all();
        let state = GameState::of(&board);
        GameSession {
            log,
            board,
            state,
            seats: [None, None],
            observers: vec![],
        }
    }

    /// Register a callback that receives a [Snapshot] after every state change.
    pub fn add_observer(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Start a new game from the start layout with the given agents, and let them play until
    /// an agent waits for external input or the game is finished.
    ///
    /// Each agent is seated as the player it reports through [PlayerAgent::player], so the order of the arguments
    /// doesn't matter. Fails with [Error::SeatTaken] if both agents want to play as the same player, the session is
    /// left unchanged in that case.
    pub fn reset(&mut self, agent_a: Box<dyn PlayerAgent>, agent_b: Box<dyn PlayerAgent>) -> Result<()> {
        let player = agent_a.player();
        if agent_b.player() == player {
            return Err(Error::SeatTaken { player });
        }

        let mut seats = [None, None];
        seats[player.index()] = Some(agent_a);
        seats[player.other().index()] = Some(agent_b);

        self.log = MoveLog::with_start(*self.log.start());
        self.board = self.log.replay_all();
        self.state = GameState::of(&self.board);
        self.seats = seats;
        debug!(state = ?self.state, "reset game");

        self.notify_observers();
        if let GameState::Finished(outcome) = self.state {
            self.notify_game_over(outcome);
        }
        self.drive();
        Ok(())
    }

    /// Submit a move on behalf of `player`, typically from an interactive agent. Returns whether the move was
    /// accepted, a rejected move leaves the session unchanged.
    pub fn submit_move(&mut self, coord: Coord, player: Player) -> bool {
        match self.try_submit_move(coord, player) {
            Ok(()) => true,
            Err(e) => {
                debug!(%e, "rejected submitted move");
                false
            }
        }
    }

    /// Same as [GameSession::submit_move] but reports why a move was rejected.
    pub fn try_submit_move(&mut self, coord: Coord, player: Player) -> Result<()> {
        self.apply_move(coord, player)?;
        self.drive();
        Ok(())
    }

    fn apply_move(&mut self, coord: Coord, player: Player) -> Result<()> {
        let current = match self.state {
            GameState::Finished(_) => return Err(Error::GameFinished),
            GameState::AwaitingMove(current) => current,
        };
        if player != current {
            return Err(Error::OutOfTurn { player });
        }

        self.board.play(coord, player)?;
        let mv = Move::new(coord, player);
        self.log.record(mv);
        debug!(%mv, player = player.number(), moves = self.log.len(), "applied move");

        self.state = GameState::of(&self.board);
        match self.state {
            GameState::AwaitingMove(next) if next == player => {
                debug!(passing = player.other().number(), "player has no moves and passes");
            }
            GameState::AwaitingMove(_) => {}
            GameState::Finished(outcome) => {
                let score = Score::of(&self.board);
                info!(%outcome, %score, moves = self.log.len(), "game finished");
            }
        }

        self.notify_observers();
        if let GameState::Finished(outcome) = self.state {
            self.notify_game_over(outcome);
        }
        Ok(())
    }

    /// Ask the agent to act for its move until one of them waits for external input or the game is finished.
    fn drive(&mut self) {
        while let GameState::AwaitingMove(player) = self.state {
            let log = &self.log;
            let agent = match &mut self.seats[player.index()] {
                Some(agent) => agent,
                None => break,
            };

            agent.notify_turn(log);
            let choice = agent.choose_move();

            match choice {
                Ok(Some(coord)) => {
                    if let Err(e) = self.apply_move(coord, player) {
                        warn!(%e, player = player.number(), "agent produced a rejected move");
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(%e, player = player.number(), "agent failed to choose a move");
                    break;
                }
            }
        }
    }

    fn notify_observers(&mut self) {
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }

    fn notify_game_over(&mut self, outcome: Outcome) {
        for agent in self.seats.iter_mut().flatten() {
            agent.notify_game_over(outcome);
        }
    }

    /// Take back the last move. The board and turn are re-derived by replay, agents are not asked to act,
    /// call [GameSession::resume] for that. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.log.is_empty() {
            return false;
        }

        self.log.truncate_to(self.log.len() - 1);
        self.board = self.log.replay_all();
        self.state = GameState::of(&self.board);
        debug!(moves = self.log.len(), state = ?self.state, "undid move");

        self.notify_observers();
        true
    }

    /// Let the seated agents continue playing, for example after an [GameSession::undo].
    pub fn resume(&mut self) {
        self.drive();
    }

    pub fn board(&self) -> &ReversiBoard {
        &self.board
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn tiles(&self) -> &[Option<Player>; Coord::AREA] {
        self.board.tiles()
    }

    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    pub fn current_player(&self) -> Option<Player> {
        self.state.current_player()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    /// The winner of a finished game, `None` while the game is running or if it ended in a draw.
    pub fn winner(&self) -> Option<Player> {
        self.state.outcome().and_then(Outcome::winner)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tiles: *self.board.tiles(),
            score: self.score(),
            current_player: self.current_player(),
            outcome: self.state.outcome(),
        }
    }
}
