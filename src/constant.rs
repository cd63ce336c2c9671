use std::time::Duration;

use ggez::graphics::Color;

use lang_component::{HEIGHT as GRID_HEIGHT, WIDTH as GRID_WIDTH};

pub const FONT_SIZE: f32 = 16.0;
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 18.0;
pub const MARGIN: f32 = 12.0;

pub const LOG_ROWS: usize = 10;
pub const LOG_CAPACITY: usize = 2000;

// header + grid + status + log + prompt
pub const TEXT_ROWS: usize = 1 + GRID_HEIGHT + 1 + LOG_ROWS + 1;

pub const WIDTH: f32 = MARGIN * 2.0 + CELL_WIDTH * GRID_WIDTH as f32;
pub const HEIGHT: f32 = MARGIN * 2.0 + CELL_HEIGHT * TEXT_ROWS as f32;

pub const GRID_OFFSET_Y: f32 = MARGIN + CELL_HEIGHT;
pub const STATUS_ROW: usize = 1 + GRID_HEIGHT;
pub const LOG_ROW: usize = STATUS_ROW + 1;
pub const PROMPT_ROW: usize = LOG_ROW + LOG_ROWS;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(30);
pub const MAX_STEPS_PER_FRAME: usize = 10_000;

pub const BG_COLOR: Color = Color::new(0.0, 0.1, 0.1, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.85, 0.9, 0.9, 1.0);
pub const DIM_COLOR: Color = Color::new(0.45, 0.55, 0.6, 1.0);
pub const IP_COLOR: Color = Color::new(0.0, 0.6, 0.8, 1.0);
pub const WRITTEN_COLOR: Color = Color::new(0.9, 0.6, 0.2, 1.0);
pub const PROMPT_COLOR: Color = Color::new(1.0, 0.9, 0.4, 1.0);
