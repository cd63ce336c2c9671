use crate::vm::Data;

pub const WIDTH: usize = 80;
pub const HEIGHT: usize = 25;

/// The program space: a fixed 80x25 torus of characters.
///
/// Every coordinate handed to [`Grid::read`] or [`Grid::write`] is wrapped,
/// so no access is ever out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[[char; WIDTH]; HEIGHT]>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: Box::new([[' '; WIDTH]; HEIGHT]),
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays `lines` out from the top-left corner. Lines past `HEIGHT` and
    /// characters past `WIDTH` are dropped; everything unfilled stays a space.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut grid = Self::new();
        for (y, line) in lines.into_iter().take(HEIGHT).enumerate() {
            for (x, ch) in line.chars().take(WIDTH).enumerate() {
                grid.cells[y][x] = ch;
            }
        }
        grid
    }

    pub fn wrap(x: Data, y: Data) -> (usize, usize) {
        (
            x.rem_euclid(WIDTH as Data) as usize,
            y.rem_euclid(HEIGHT as Data) as usize,
        )
    }

    pub fn read(&self, x: Data, y: Data) -> char {
        let (x, y) = Self::wrap(x, y);
        self.cells[y][x]
    }

    /// Stores `value mod 256` as a character and returns where it landed.
    pub fn write(&mut self, x: Data, y: Data, value: Data) -> (usize, usize, char) {
        let (x, y) = Self::wrap(x, y);
        let ch = char::from(value.rem_euclid(256) as u8);
        self.cells[y][x] = ch;
        (x, y, ch)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char; WIDTH]> {
        self.cells.iter()
    }
}
