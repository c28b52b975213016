//! Runtime configuration defaults

/// Default board side length
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// Fixed seed for reproducible random pile generation
pub const DEFAULT_SEED: u64 = 42;

/// Default pacing between console snapshots, in milliseconds (0 = off)
pub const DEFAULT_STEP_DELAY_MS: u64 = 0;

// Output settings
/// Suffix added to animation filenames
pub const ANIMATION_SUFFIX: &str = "_solve";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Side length of one rendered cell in animation frames, in pixels
pub const CELL_PIXELS: u32 = 7;

/// Tile descriptors for the built-in demo fixture
pub const DEMO_TILES: [&str; 3] = ["FFFF", "CCFF", "RCRC"];
/// Center tile for the built-in demo fixture
pub const DEMO_CENTER_TILE: &str = "RCCC";
/// Side length of the built-in demo board
pub const DEMO_BOARD_SIZE: usize = 3;
