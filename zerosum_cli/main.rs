use std::fmt::Display;
use std::str::FromStr;
use std::time::Instant;

use structopt::StructOpt;

use zerosum::errors::EngineError;
use zerosum::game::Game;
use zerosum::games::{Hexapawn, TicTacToe};
use zerosum::ByPlayer;
use zerosum_search::play::{GameRunner, PlayerController, RandomController, SearchController};
use zerosum_search::{MinimaxConfig, MinimaxSearch};

#[derive(Debug, Copy, Clone)]
pub enum GameChoice {
    TicTacToe,
    Hexapawn,
}

impl FromStr for GameChoice {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tictactoe" | "ttt" => Ok(Self::TicTacToe),
            "hexapawn" => Ok(Self::Hexapawn),
            _ => Err("expected tictactoe|hexapawn"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub enum ControllerChoice {
    Engine,
    Random,
}

impl FromStr for ControllerChoice {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "engine" => Ok(Self::Engine),
            "random" => Ok(Self::Random),
            _ => Err("expected engine|random"),
        }
    }
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "zerosum - adversarial game-tree search")]
pub struct Opts {
    #[structopt(
        short = "g",
        long = "--game",
        default_value = "tictactoe",
        help = "tictactoe|hexapawn: game to play"
    )]
    pub game: GameChoice,

    #[structopt(long = "--cols", default_value = "3", help = "Hexapawn: board columns")]
    pub cols: u8,

    #[structopt(long = "--rows", default_value = "3", help = "Hexapawn: board rows")]
    pub rows: u8,

    #[structopt(
        long = "--p1",
        default_value = "engine",
        help = "engine|random: controller for the first player"
    )]
    pub p1: ControllerChoice,

    #[structopt(
        long = "--p2",
        default_value = "engine",
        help = "engine|random: controller for the second player"
    )]
    pub p2: ControllerChoice,

    #[structopt(short = "d", long = "--depth", help = "Depth cap for the search")]
    pub depth: Option<u8>,

    #[structopt(long = "--plain", help = "Plain minimax: disable alpha-beta pruning")]
    pub plain: bool,

    #[structopt(long = "--no-table", help = "Disable the transposition table")]
    pub no_table: bool,

    #[structopt(long = "--seed", default_value = "42", help = "Seed for random controllers")]
    pub seed: u64,

    #[structopt(long = "--debug", help = "Print per-iteration search progress")]
    pub debug: bool,
}

impl Opts {
    fn minimax_config(&self) -> MinimaxConfig {
        MinimaxConfig {
            depth_limit: self.depth,
            alpha_beta: !self.plain,
            use_transposition_table: !self.no_table,
            debug: self.debug,
            ..MinimaxConfig::default()
        }
    }

    fn controller<G: Game + 'static>(&self, choice: ControllerChoice, seed: u64) -> Box<dyn PlayerController<G>> {
        match choice {
            ControllerChoice::Engine => Box::new(SearchController::new(MinimaxSearch::new(self.minimax_config()))),
            ControllerChoice::Random => Box::new(RandomController::seeded(seed)),
        }
    }
}

fn analyze<G: Game>(game: &G, opts: &Opts) -> Result<(), EngineError> {
    let mut engine = MinimaxSearch::new(opts.minimax_config());
    let state = game.initial_state();
    let start = Instant::now();
    let result = engine.find_best_action(game, &state, None)?;
    let dt_ns = start.elapsed().as_nanos();
    println!(
        "analysis: eval={:?} action={:?} {:?} depth={} nodes={} tt_hits={} [{}]",
        result.eval,
        result.best_action,
        result.resolution,
        result.counter.last_depth,
        result.counter.nodes_expanded,
        result.counter.tt_hits,
        result.counter.summary(dt_ns),
    );
    Ok(())
}

fn play_one<G: Game + 'static>(game: &G, opts: &Opts) -> Result<(), EngineError>
where
    G::State: Display,
{
    analyze(game, opts)?;

    let mut p1 = opts.controller::<G>(opts.p1, opts.seed);
    let mut p2 = opts.controller::<G>(opts.p2, opts.seed.wrapping_add(1));
    let mut controllers: ByPlayer<&mut dyn PlayerController<G>> = ByPlayer::new(p1.as_mut(), p2.as_mut());
    let playout = GameRunner::default().play(game, &mut controllers)?;

    println!("moves: {}", playout.transcript());
    println!("{}", playout.final_state);
    println!("outcome: {:?} after {} plies", playout.outcome, playout.history.len());
    Ok(())
}

fn main() -> Result<(), EngineError> {
    let opts = Opts::from_args();
    match opts.game {
        GameChoice::TicTacToe => play_one(&TicTacToe, &opts),
        GameChoice::Hexapawn => play_one(&Hexapawn::new(opts.cols, opts.rows), &opts),
    }
}
