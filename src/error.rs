use std::{io, path::PathBuf};

use thiserror::Error;

use lang_vm::RuntimeError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read program {path}: {source}")]
    ReadProgram { path: PathBuf, source: io::Error },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
