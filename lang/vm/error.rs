use thiserror::Error;

use crate::Status;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("no input is pending (engine is {0:?})")]
    NotAwaitingInput(Status),
}
