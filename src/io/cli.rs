//! Command-line interface and solve runner

use crate::algorithm::pile::Pile;
use crate::algorithm::solver::{SolveObserver, Solver};
use crate::io::configuration::{
    ANIMATION_SUFFIX, DEFAULT_BOARD_SIZE, DEFAULT_SEED, DEFAULT_STEP_DELAY_MS, DEMO_BOARD_SIZE,
    DEMO_CENTER_TILE, DEMO_TILES, GIF_FRAME_DELAY_MS,
};
use crate::io::console::ConsoleReporter;
use crate::io::error::{Result, SolverError};
use crate::io::progress::ProgressObserver;
use crate::io::tileset;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::board::Board;
use crate::spatial::tile::Tile;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "tilewave")]
#[command(
    author,
    version,
    about = "Place edge-matching tiles via constraint-guided backtracking"
)]
/// Command-line arguments for the tile solver
pub struct Cli {
    /// Tile-set file, one 4-character descriptor (F, C, S, R) per line
    #[arg(value_name = "TILES", required_unless_present_any = ["random", "demo"])]
    pub tiles: Option<PathBuf>,

    /// Generate this many random tiles instead of loading a file
    #[arg(short, long, value_name = "N", conflicts_with = "tiles")]
    pub random: Option<usize>,

    /// Random seed for reproducible tile generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of board rows
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub rows: usize,

    /// Number of board columns
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub cols: usize,

    /// Pacing between console snapshots, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub delay_ms: u64,

    /// Suppress console snapshots and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Export the placement history as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Solve the built-in 3x3 fixture instead of loading a file
    #[arg(long, conflicts_with_all = ["tiles", "random"])]
    pub demo: bool,
}

/// Fans events out to every attached observer, in order
#[derive(Default)]
struct ObserverChain<'a> {
    observers: Vec<&'a mut dyn SolveObserver>,
}

impl SolveObserver for ObserverChain<'_> {
    fn placement(&mut self, row: usize, col: usize, tile: &Tile, depth: usize) {
        for observer in &mut self.observers {
            observer.placement(row, col, tile, depth);
        }
    }

    fn backtrack(&mut self, row: usize, col: usize, tile: &Tile, depth: usize) {
        for observer in &mut self.observers {
            observer.backtrack(row, col, tile, depth);
        }
    }

    fn success(&mut self) {
        for observer in &mut self.observers {
            observer.success();
        }
    }

    fn failure(&mut self, remaining_tiles: usize) {
        for observer in &mut self.observers {
            observer.failure(remaining_tiles);
        }
    }
}

/// Builds the pile and board from CLI arguments and drives one solve
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load or generate the pile, seed the board, and run the solver
    ///
    /// The first pile tile is placed at the board center before the search
    /// starts so the growing region has an anchor.
    ///
    /// # Errors
    ///
    /// Returns ingestion errors before solving begins,
    /// [`SolverError::NoSolutionFound`] when the search is exhausted, and
    /// export errors if the animation cannot be written.
    // Allow print for user-facing summary output
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<()> {
        let mut pile = self.build_pile()?;
        let mut board = self.build_board()?;

        if board.placed_count() == 0 && !pile.is_empty() {
            let first = pile.pop_front()?;
            board.place(board.rows() / 2, board.cols() / 2, first);
        }

        let total_tiles = (pile.len() + board.placed_count()) as u64;
        if !self.cli.quiet {
            println!(
                "Placing {} tiles on a {}x{} board",
                pile.len(),
                board.rows(),
                board.cols()
            );
        }

        // Step-by-step console output only when the user asked for pacing;
        // the progress bar covers the common case.
        let mut reporter = (self.cli.delay_ms > 0 && !self.cli.quiet).then(|| {
            ConsoleReporter::new(board.clone(), Duration::from_millis(self.cli.delay_ms), false)
        });
        let mut progress = (!self.cli.quiet)
            .then(|| ProgressObserver::new(total_tiles, board.placed_count() as u64));
        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(board.clone()));

        let mut solver = Solver::new(board, pile);
        let outcome = {
            let mut chain = ObserverChain::default();
            if let Some(ref mut reporter) = reporter {
                chain.observers.push(reporter);
            }
            if let Some(ref mut progress) = progress {
                chain.observers.push(progress);
            }
            if let Some(ref mut capture) = capture {
                chain.observers.push(capture);
            }
            solver.solve(&mut chain)
        };

        println!("{}", solver.board());

        if let Some(capture) = capture {
            let path = self.animation_path();
            let path_text = path
                .to_str()
                .ok_or_else(|| SolverError::FileSystem {
                    path: path.clone(),
                    operation: "resolve animation path",
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "path is not valid UTF-8",
                    ),
                })?;
            capture.export_gif(path_text, GIF_FRAME_DELAY_MS)?;
            if !self.cli.quiet {
                println!("Animation written to {}", path.display());
            }
        }

        outcome
    }

    fn build_pile(&self) -> Result<Pile> {
        if self.cli.demo {
            return Pile::from_descriptors(&DEMO_TILES);
        }
        if let Some(count) = self.cli.random {
            return Ok(tileset::random_pile(count, self.cli.seed));
        }
        match &self.cli.tiles {
            Some(path) => tileset::load_from_path(path),
            // Unreachable: clap requires one of tiles, --random, --demo
            None => Ok(Pile::default()),
        }
    }

    fn build_board(&self) -> Result<Board> {
        if self.cli.demo {
            let mut board = Board::new(DEMO_BOARD_SIZE, DEMO_BOARD_SIZE);
            let center: Tile = DEMO_CENTER_TILE.parse()?;
            board.place(DEMO_BOARD_SIZE / 2, DEMO_BOARD_SIZE / 2, center);
            return Ok(board);
        }
        Ok(Board::new(self.cli.rows, self.cli.cols))
    }

    fn animation_path(&self) -> PathBuf {
        match &self.cli.tiles {
            Some(path) => {
                let stem = path.file_stem().unwrap_or_default();
                let name = format!("{}{ANIMATION_SUFFIX}.gif", stem.to_string_lossy());
                path.parent()
                    .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
            }
            None => PathBuf::from(format!("tilewave{ANIMATION_SUFFIX}.gif")),
        }
    }
}
