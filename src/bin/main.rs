use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use reversi_ai::ai::config::SearchConfig;
use reversi_ai::ai::minimax::MinimaxAgent;
use reversi_ai::ai::simple::RandomAgent;
use reversi_ai::ai::PlayerAgent;
use reversi_ai::board::Player;
use reversi_ai::heuristic::reversi::HybridHeuristic;
use reversi_ai::reversi::Layout;
use reversi_ai::util::bot_game;
use reversi_ai::util::tiny::seeded_rng;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Opponent {
    /// Another minimax agent with the same configuration
    Minimax,
    /// An agent that plays uniformly random moves
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(version, about = "Play headless Reversi games between the minimax agent and an opponent", long_about = None)]
struct Cli {
    /// Who the minimax agent plays against
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Number of games per side
    #[arg(long, short = 'g', default_value_t = 1)]
    games: u32,

    /// Also play every game with the sides switched
    #[arg(long)]
    both_sides: bool,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop deepening the decision tree once it holds this many nodes
    #[arg(long, default_value_t = SearchConfig::default().node_budget)]
    nodes: usize,

    /// Maximum search depth in plies
    #[arg(long, default_value_t = SearchConfig::default().max_depth)]
    depth: u32,

    /// Chance of playing the second best move
    #[arg(long, default_value_t = SearchConfig::default().second_best_probability)]
    second_best: f64,

    /// Start layout as a board diagram with its 8 rows separated by '/', defaults to the standard opening
    #[arg(long)]
    start: Option<String>,
}

fn main() -> Result<(), reversi_ai::error::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let start = match &cli.start {
        Some(diagram) => diagram.replace('/', "\n").parse::<Layout>()?,
        None => Layout::standard(),
    };

    let config = SearchConfig::default()
        .with_node_budget(cli.nodes)
        .with_max_depth(cli.depth)
        .with_second_best_probability(cli.second_best);
    let seed = cli.seed;

    let minimax = |player: Player| -> Box<dyn PlayerAgent> {
        Box::new(MinimaxAgent::new(
            player,
            HybridHeuristic,
            config,
            seeded_rng(seed.wrapping_add(player.index() as u64)),
        ))
    };
    let opponent = |player: Player| -> Box<dyn PlayerAgent> {
        match cli.opponent {
            Opponent::Minimax => minimax(player),
            Opponent::Random => Box::new(RandomAgent::new(player, seeded_rng(seed.wrapping_add(2)))),
        }
    };

    let result = bot_game::run(start, &minimax, opponent, cli.games, cli.both_sides, |wdl, replay| {
        println!(
            "{} after {} moves ({}), running tally {:?}",
            replay.outcome,
            replay.log.len(),
            replay.score,
            wdl
        );
    });

    if let Some(replay) = result.replays.last() {
        println!("{}", replay.log);
        println!("{}", replay.log.replay_all());
    }
    println!("{:?}", result);

    Ok(())
}
