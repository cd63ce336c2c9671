use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use tracing::{debug, warn};

use lang_component::vm::Event;
use lang_vm::SuspendingReason;

use crate::{error::AppError, session::Session};

const TERMINAL: &str = "/dev/tty";

pub fn reads_program_from_stdin(program: &Path) -> bool {
    program == Path::new("-")
}

/// Where `&` and `~` lines come from. When stdin already carried the program
/// they are read from the controlling terminal; without one, every request
/// gets an empty line.
pub fn input_lines(program: &Path) -> Box<dyn BufRead> {
    if !reads_program_from_stdin(program) {
        return Box::new(io::stdin().lock());
    }

    match File::open(TERMINAL) {
        Ok(tty) => Box::new(BufReader::new(tty)),
        Err(err) => {
            warn!(%err, terminal = TERMINAL, "no terminal for input, `&` and `~` read empty lines");
            Box::new(io::empty())
        }
    }
}

/// Runs the program without a window: output goes to `output` as it is
/// produced and input lines come from `input`. End of input answers every
/// further request with an empty line.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
    max_steps: Option<u64>,
) -> Result<SuspendingReason, AppError> {
    loop {
        if let Some(max) = max_steps {
            if session.vm().steps() >= max && !session.is_finished() {
                debug!(max, "step limit reached");
                session.interrupt();
            }
        }

        match session.advance() {
            SuspendingReason::Continue(Event::CharacterOutput(c)) => write!(output, "{}", c)?,
            SuspendingReason::Continue(Event::IntegerOutput(n)) => write!(output, "{} ", n)?,
            SuspendingReason::Continue(_) => {}
            SuspendingReason::AwaitingInput(kind) => {
                output.flush()?;
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    debug!(kind = kind.label(), "input exhausted");
                }
                session.supply(line.trim_end_matches(&['\r', '\n'][..]))?;
            }
            reason => {
                output.flush()?;
                return Ok(reason);
            }
        }
    }
}
