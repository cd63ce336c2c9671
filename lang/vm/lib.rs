pub mod error;
mod interpret;
pub mod random;
mod run;
pub mod stack;

pub use error::*;
pub use random::{DirectionSource, WeightedDirections};
pub use run::*;
pub use stack::Stack;

use lang_component::{
    vm::{Direction, Event, InputKind},
    Grid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    AwaitingInput(InputKind),
    Halted,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendingReason {
    Continue(Event),
    AwaitingInput(InputKind),
    Halted,
    Interrupted,
}

impl SuspendingReason {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SuspendingReason::Halted | SuspendingReason::Interrupted)
    }
}

pub struct VM {
    grid: Grid,
    x: usize,
    y: usize,
    dir: Direction,
    stack: Stack,
    string_mode: bool,
    output: String,
    steps: u64,
    status: Status,
    interrupt: Interrupt,
}
