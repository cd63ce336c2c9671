use tracing::info;

use lang_component::{
    vm::{Event, InputKind},
    Grid, WIDTH,
};
use lang_vm::{RuntimeError, SuspendingReason, WeightedDirections, VM};

use crate::{constant, log::EventLog};

const OUTPUT_TAIL: usize = 40;

/// One run of a program as the front ends see it: the engine, the random
/// source feeding `?`, and the log of everything printed or read.
pub struct Session {
    vm: VM,
    random: WeightedDirections,
    log: EventLog,
    last_write: Option<(usize, usize)>,
    finished: bool,
}

impl Session {
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        let random = match seed {
            Some(seed) => WeightedDirections::seeded(seed),
            None => WeightedDirections::from_entropy(),
        };

        Self {
            vm: VM::new(grid),
            random,
            log: EventLog::new(constant::LOG_CAPACITY),
            last_write: None,
            finished: false,
        }
    }

    pub fn vm(&self) -> &VM {
        &self.vm
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn last_write(&self) -> Option<(usize, usize)> {
        self.last_write
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn awaiting(&self) -> Option<InputKind> {
        match self.vm.status() {
            lang_vm::Status::AwaitingInput(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn interrupt(&self) {
        self.vm.interrupt_handle().request();
    }

    /// Runs one instruction and records anything worth showing.
    pub fn advance(&mut self) -> SuspendingReason {
        let reason = self.vm.step(&mut self.random);
        self.record(&reason);
        reason
    }

    /// Hands a line of text to a pending `&` or `~`.
    pub fn supply(&mut self, line: &str) -> Result<SuspendingReason, RuntimeError> {
        let kind = self.awaiting();
        let reason = self.vm.resume(line)?;

        if let (Some(kind), SuspendingReason::Continue(Event::StackPushed(value))) = (kind, reason) {
            self.log.push(format!("Input({}) = {}", kind.label(), value));
        }
        Ok(reason)
    }

    fn record(&mut self, reason: &SuspendingReason) {
        self.last_write = None;

        match reason {
            SuspendingReason::Continue(Event::IntegerOutput(n)) => {
                self.log.push(format!("Output(int): {}", n));
            }
            SuspendingReason::Continue(Event::CellWritten { x, y, .. }) => {
                self.last_write = Some((*x, *y));
            }
            SuspendingReason::Halted if !self.finished => {
                info!(steps = self.vm.steps(), output = %self.vm.output(), "program halted");
                self.log.push("Halted.");
                self.finished = true;
            }
            SuspendingReason::Interrupted if !self.finished => {
                self.log.push("Interrupted (Ctrl+C).");
                self.finished = true;
            }
            _ => {}
        }
    }

    pub fn header(&self) -> String {
        format!("--- Step {} ---", self.vm.steps())
    }

    pub fn status_line(&self) -> String {
        let (x, y) = self.vm.position();
        let cmd = format!("{:?}", self.vm.current_cell());
        let mut line = format!(
            "IP:({:2},{:2}) Dir:{} Cmd:{:^3}",
            x,
            y,
            self.vm.direction(),
            cmd
        );

        let output = self.vm.output();
        if !output.is_empty() {
            let skip = output.chars().count().saturating_sub(OUTPUT_TAIL);
            let tail: String = output
                .chars()
                .skip(skip)
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
            line.push_str(" Output: ");
            line.push_str(&tail);
        }
        if self.vm.is_string_mode() {
            line.push_str(" (string mode)");
        }

        line.chars().take(WIDTH).collect()
    }
}

#[cfg(test)]
mod session_test {
    use lang_loader::load;

    use super::*;

    fn finish(session: &mut Session) -> SuspendingReason {
        loop {
            match session.advance() {
                SuspendingReason::Continue(_) => continue,
                reason => return reason,
            }
        }
    }

    #[test]
    fn test_logs_integer_output_and_halt() {
        let mut session = Session::new(load("55+.@"), Some(1));
        assert_eq!(SuspendingReason::Halted, finish(&mut session));
        assert!(session.is_finished());
        assert_eq!(
            vec!["Output(int): 10", "Halted."],
            session.log().tail(10).collect::<Vec<_>>()
        );

        // stepping a finished run does not log twice
        session.advance();
        assert_eq!(2, session.log().len());
    }

    #[test]
    fn test_logs_input() {
        let mut session = Session::new(load("&~@"), Some(1));
        assert_eq!(
            SuspendingReason::AwaitingInput(InputKind::Integer),
            finish(&mut session)
        );
        assert_eq!(Some(InputKind::Integer), session.awaiting());
        session.supply(" 12 ").unwrap();
        assert_eq!(None, session.awaiting());

        finish(&mut session);
        session.supply("A").unwrap();
        finish(&mut session);

        assert_eq!(
            vec!["Input(int) = 12", "Input(char) = 65", "Halted."],
            session.log().tail(10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_interrupt() {
        let mut session = Session::new(load("v\n>^"), None);
        for _ in 0..10 {
            session.advance();
        }
        session.interrupt();
        assert_eq!(SuspendingReason::Interrupted, session.advance());
        assert_eq!(
            vec!["Interrupted (Ctrl+C)."],
            session.log().tail(10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_last_write() {
        let mut session = Session::new(load("512p @"), Some(1));
        for _ in 0..3 {
            session.advance();
        }
        assert_eq!(None, session.last_write());
        session.advance();
        assert_eq!(Some((2, 1)), session.last_write());
        session.advance();
        assert_eq!(None, session.last_write());
    }

    #[test]
    fn test_header_and_status_line() {
        let mut session = Session::new(load("\"ih\",,\"x"), Some(1));
        assert_eq!("--- Step 0 ---", session.header());
        assert_eq!("IP:( 0, 0) Dir:(+1,+0) Cmd:'\"'", session.status_line());

        for _ in 0..6 {
            session.advance();
        }
        assert_eq!("--- Step 6 ---", session.header());
        assert_eq!(
            "IP:( 6, 0) Dir:(+1,+0) Cmd:'\"' Output: hi",
            session.status_line()
        );

        session.advance();
        assert!(session.status_line().ends_with(" (string mode)"));
    }

    #[test]
    fn test_status_line_keeps_output_tail() {
        let source = ",".repeat(50);
        let mut session = Session::new(load(&source), Some(1));
        for _ in 0..50 {
            session.advance();
        }
        assert_eq!(50, session.vm().output().chars().count());
        assert!(session.status_line().chars().count() <= WIDTH);
    }
}
