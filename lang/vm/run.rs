use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tracing::debug;

use lang_component::{
    vm::{Data, Direction, InputKind},
    Grid,
};
use lang_loader::{parse_character, parse_integer};

use crate::{error::RuntimeError, random::DirectionSource, Stack, Status, SuspendingReason, VM};

/// Advisory cancellation flag shared between the engine and whoever drives it.
/// It is only looked at before a step starts.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl VM {
    pub fn new(grid: Grid) -> Self {
        VM {
            grid,
            x: 0,
            y: 0,
            dir: Direction::East,
            stack: Stack::new(),
            string_mode: false,
            output: String::new(),
            steps: 0,
            status: Status::Running,
            interrupt: Interrupt::new(),
        }
    }

    pub fn interrupt_handle(&self) -> Interrupt {
        self.interrupt.clone()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn is_string_mode(&self) -> bool {
        self.string_mode
    }

    /// Everything written by `,` so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn current_cell(&self) -> char {
        self.grid.read(self.x as Data, self.y as Data)
    }

    /// Steps until the engine stops for input or terminates. A program that
    /// never halts keeps this looping until its interrupt is requested.
    pub fn run(&mut self, random: &mut dyn DirectionSource) -> SuspendingReason {
        loop {
            match self.step(random) {
                SuspendingReason::Continue(_) => continue,
                reason => return reason,
            }
        }
    }

    /// Completes the `&` or `~` the engine is suspended on with a line of text.
    pub fn resume(&mut self, line: &str) -> Result<SuspendingReason, RuntimeError> {
        let kind = match self.status {
            Status::AwaitingInput(kind) => kind,
            status => return Err(RuntimeError::NotAwaitingInput(status)),
        };

        let value = match kind {
            InputKind::Integer => parse_integer(line),
            InputKind::Character => parse_character(line),
        };
        debug!(kind = kind.label(), value, "input supplied");

        self.status = Status::Running;
        let event = self.push(value);
        self.finish_step();

        Ok(SuspendingReason::Continue(event))
    }
}

#[cfg(test)]
mod run_test {
    use lang_component::vm::Event;
    use lang_loader::load;

    use super::*;

    fn no_random() -> Direction {
        panic!("`?` was not expected")
    }

    #[test]
    fn test_initial_state() {
        let vm = VM::new(load(">"));
        assert_eq!((0, 0), vm.position());
        assert_eq!(Direction::East, vm.direction());
        assert!(vm.stack().is_empty());
        assert!(!vm.is_string_mode());
        assert_eq!("", vm.output());
        assert_eq!(0, vm.steps());
        assert_eq!(Status::Running, vm.status());
        assert_eq!('>', vm.current_cell());
    }

    #[test]
    fn test_run_until_halt() {
        let mut vm = VM::new(load("\"olleh\",,,,,@"));
        assert_eq!(SuspendingReason::Halted, vm.run(&mut no_random));
        assert_eq!("hello", vm.output());
        assert_eq!(Status::Halted, vm.status());
    }

    #[test]
    fn test_integer_input() {
        let mut vm = VM::new(load("&.@"));
        assert_eq!(
            SuspendingReason::AwaitingInput(InputKind::Integer),
            vm.run(&mut no_random)
        );
        assert_eq!((0, 0), vm.position());
        assert_eq!(
            SuspendingReason::AwaitingInput(InputKind::Integer),
            vm.step(&mut no_random)
        );

        assert_eq!(
            Ok(SuspendingReason::Continue(Event::StackPushed(-42))),
            vm.resume("  -42 \n")
        );
        assert_eq!((1, 0), vm.position());
        assert_eq!(1, vm.steps());
        assert_eq!(
            SuspendingReason::Continue(Event::IntegerOutput(-42)),
            vm.step(&mut no_random)
        );
    }

    #[test]
    fn test_malformed_integer_input_is_zero() {
        let mut vm = VM::new(load("&@"));
        vm.run(&mut no_random);
        assert_eq!(
            Ok(SuspendingReason::Continue(Event::StackPushed(0))),
            vm.resume("twelve")
        );
    }

    #[test]
    fn test_character_input() {
        let mut vm = VM::new(load("~~@"));
        assert_eq!(
            SuspendingReason::AwaitingInput(InputKind::Character),
            vm.run(&mut no_random)
        );
        vm.resume("xyz").unwrap();
        assert_eq!(
            SuspendingReason::AwaitingInput(InputKind::Character),
            vm.run(&mut no_random)
        );
        vm.resume("").unwrap();
        assert_eq!(SuspendingReason::Halted, vm.run(&mut no_random));
        assert_eq!(&['x' as Data, 0], vm.stack().as_slice());
    }

    #[test]
    fn test_resume_without_pending_input() {
        let mut vm = VM::new(load("@"));
        assert_eq!(
            Err(RuntimeError::NotAwaitingInput(Status::Running)),
            vm.resume("1")
        );
        vm.run(&mut no_random);
        assert_eq!(
            Err(RuntimeError::NotAwaitingInput(Status::Halted)),
            vm.resume("1")
        );
    }

    #[test]
    fn test_interrupt_stops_endless_program() {
        let mut vm = VM::new(load(">"));
        let interrupt = vm.interrupt_handle();
        for _ in 0..200 {
            assert!(matches!(vm.step(&mut no_random), SuspendingReason::Continue(_)));
        }
        interrupt.request();
        let before = (vm.position(), vm.steps());

        assert_eq!(SuspendingReason::Interrupted, vm.step(&mut no_random));
        assert_eq!(Status::Interrupted, vm.status());
        assert_eq!(before, (vm.position(), vm.steps()));
        assert_eq!(SuspendingReason::Interrupted, vm.run(&mut no_random));
    }

    #[test]
    fn test_interrupt_while_awaiting_input() {
        let mut vm = VM::new(load("&@"));
        vm.run(&mut no_random);
        vm.interrupt_handle().request();
        assert_eq!(SuspendingReason::Interrupted, vm.step(&mut no_random));
        assert!(vm.resume("3").is_err());
        assert!(vm.stack().is_empty());
    }

    #[test]
    fn test_interrupt_from_another_thread() {
        let mut vm = VM::new(load(" "));
        let interrupt = vm.interrupt_handle();
        std::thread::spawn(move || interrupt.request())
            .join()
            .unwrap();
        assert_eq!(SuspendingReason::Interrupted, vm.run(&mut no_random));
    }

    #[test]
    fn test_halted_engine_stays_halted() {
        let mut vm = VM::new(load("@"));
        assert_eq!(SuspendingReason::Halted, vm.step(&mut no_random));
        vm.interrupt_handle().request();
        assert_eq!(SuspendingReason::Halted, vm.step(&mut no_random));
        assert_eq!((0, 0), vm.position());
        assert_eq!(0, vm.steps());
    }
}
