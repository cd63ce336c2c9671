pub mod grid;
pub mod vm;

pub use grid::{Grid, HEIGHT, WIDTH};
