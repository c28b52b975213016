//! Placement history capture and GIF export
//!
//! Records placement and backtrack events during a solve, then replays them
//! over the initial board to render one animation frame per step. Each cell
//! becomes a pixel block whose border rows and columns are colored by edge
//! type, so matched edges read as continuous bands of color.

use crate::algorithm::solver::SolveObserver;
use crate::io::configuration::{CELL_PIXELS, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SolverError};
use crate::spatial::board::Board;
use crate::spatial::tile::{Edge, Tile};
use image::{Frame, Rgba, RgbaImage};

/// Color of an empty cell
const EMPTY_COLOR: [u8; 4] = [220, 220, 220, 255];
/// Color of a placed cell's interior
const INTERIOR_COLOR: [u8; 4] = [245, 240, 225, 255];

/// Border color for an edge type
const fn edge_color(edge: Edge) -> [u8; 4] {
    match edge {
        Edge::Field => [106, 168, 79, 255],
        Edge::City => [139, 94, 60, 255],
        Edge::Stream => [61, 133, 198, 255],
        Edge::Road => [128, 128, 128, 255],
    }
}

/// Single placement or backtrack event
#[derive(Debug, Clone, Copy)]
struct StepRecord {
    row: usize,
    col: usize,
    /// The placed tile, or `None` for a backtrack
    tile: Option<Tile>,
}

/// Captures solve steps for post-hoc animation
pub struct VisualizationCapture {
    initial: Board,
    steps: Vec<StepRecord>,
}

impl VisualizationCapture {
    /// Start a capture from the board's pre-search state
    pub const fn new(initial: Board) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Number of recorded steps
    pub const fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Export the capture as a GIF, skipping frames when the requested rate
    /// exceeds what viewers support
    ///
    /// If `frame_delay_ms` is below the viewer minimum, only every n-th step
    /// is rendered so the apparent animation speed is preserved. The final
    /// board state is always shown, held for an extended delay.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation, file creation, or GIF
    /// encoding fails.
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS && frame_delay_ms > 0 {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|source| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }

        let file =
            std::fs::File::create(output_path).map_err(|source| SolverError::FileSystem {
                path: output_path.into(),
                operation: "create file",
                source,
            })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|source| SolverError::ImageExport {
                path: output_path.into(),
                source,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut board = self.initial.clone();
        let mut frames = vec![render_frame(&board, delay_ms)];

        for (index, step) in self.steps.iter().enumerate() {
            match step.tile {
                Some(tile) => board.place(step.row, step.col, tile),
                None => board.clear(step.row, step.col),
            }

            if (index + 1) % skip_factor == 0 {
                frames.push(render_frame(&board, delay_ms));
            }
        }

        if self.steps.len() % skip_factor != 0 {
            frames.push(render_frame(&board, delay_ms));
        }

        // Hold the final state longer for visibility
        frames.push(render_frame(&board, delay_ms * 25));
        frames
    }
}

impl SolveObserver for VisualizationCapture {
    fn placement(&mut self, row: usize, col: usize, tile: &Tile, _depth: usize) {
        self.steps.push(StepRecord {
            row,
            col,
            tile: Some(*tile),
        });
    }

    fn backtrack(&mut self, row: usize, col: usize, _tile: &Tile, _depth: usize) {
        self.steps.push(StepRecord {
            row,
            col,
            tile: None,
        });
    }
}

/// Render the board as one frame, cells as bordered pixel blocks
fn render_frame(board: &Board, delay_ms: u32) -> Frame {
    let width = board.cols() as u32 * CELL_PIXELS;
    let height = board.rows() as u32 * CELL_PIXELS;
    let mut img = RgbaImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = (y / CELL_PIXELS) as usize;
        let col = (x / CELL_PIXELS) as usize;
        let py = y % CELL_PIXELS;
        let px = x % CELL_PIXELS;

        let color = match board.get(row, col) {
            None => EMPTY_COLOR,
            Some(tile) => {
                if py == 0 {
                    edge_color(tile.top())
                } else if py == CELL_PIXELS - 1 {
                    edge_color(tile.bottom())
                } else if px == 0 {
                    edge_color(tile.left())
                } else if px == CELL_PIXELS - 1 {
                    edge_color(tile.right())
                } else {
                    INTERIOR_COLOR
                }
            }
        };
        *pixel = Rgba(color);
    }

    Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_replays_steps_into_frames() {
        let board = Board::new(2, 2);
        let mut capture = VisualizationCapture::new(board);

        let tile: Tile = "FCSR".parse().unwrap();
        capture.placement(0, 0, &tile, 0);
        capture.backtrack(0, 0, &tile, 0);
        capture.placement(1, 1, &tile, 0);
        assert_eq!(capture.step_count(), 3);

        let frames = capture.generate_frames(VIEWER_MIN_FRAME_DELAY_MS, 1);
        // Initial frame + one per step + held final frame
        assert_eq!(frames.len(), 5);
    }

    #[test]
    fn test_frame_pixels_follow_edge_colors() {
        let mut board = Board::new(1, 1);
        let tile: Tile = "FCSR".parse().unwrap();
        board.place(0, 0, tile);

        let frame = render_frame(&board, VIEWER_MIN_FRAME_DELAY_MS);
        let buffer = frame.buffer();

        assert_eq!(buffer.get_pixel(3, 0).0, edge_color(Edge::Field));
        assert_eq!(buffer.get_pixel(CELL_PIXELS - 1, 3).0, edge_color(Edge::City));
        assert_eq!(buffer.get_pixel(3, CELL_PIXELS - 1).0, edge_color(Edge::Stream));
        assert_eq!(buffer.get_pixel(0, 3).0, edge_color(Edge::Road));
        assert_eq!(buffer.get_pixel(3, 3).0, INTERIOR_COLOR);
    }

    #[test]
    fn test_gif_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("steps.gif");

        let mut capture = VisualizationCapture::new(Board::new(2, 2));
        let tile: Tile = "FFFF".parse().unwrap();
        capture.placement(0, 0, &tile, 0);

        capture
            .export_gif(path.to_str().unwrap(), 5)
            .unwrap();
        assert!(path.exists());
    }
}
