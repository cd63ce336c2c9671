use tracing::{debug, info, trace};

use lang_component::{
    vm::{Data, Direction, Event, InputKind, Inst},
    Grid,
};

use crate::{random::DirectionSource, Status, SuspendingReason, VM};

fn to_flag(b: bool) -> Data {
    if b {
        1
    } else {
        0
    }
}

fn to_char(d: Data) -> char {
    u32::try_from(d)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// `b / a`, rounding toward negative infinity.
fn floor_div(b: Data, a: Data) -> Data {
    let q = b.wrapping_div(a);
    if b.wrapping_rem(a) != 0 && ((b < 0) != (a < 0)) {
        q.wrapping_sub(1)
    } else {
        q
    }
}

/// `b mod a`, taking the sign of `a`.
fn floor_mod(b: Data, a: Data) -> Data {
    let r = b.wrapping_rem(a);
    if r != 0 && ((r < 0) != (a < 0)) {
        r + a
    } else {
        r
    }
}

impl VM {
    pub fn step(&mut self, random: &mut dyn DirectionSource) -> SuspendingReason {
        match self.status {
            Status::Halted => return SuspendingReason::Halted,
            Status::Interrupted => return SuspendingReason::Interrupted,
            Status::Running | Status::AwaitingInput(_) => {}
        }

        if self.interrupt.is_requested() {
            self.status = Status::Interrupted;
            info!(steps = self.steps, "interrupted");
            return SuspendingReason::Interrupted;
        }

        if let Status::AwaitingInput(kind) = self.status {
            return SuspendingReason::AwaitingInput(kind);
        }

        let cmd = self.current_cell();

        if self.string_mode {
            let event = if cmd == '"' {
                self.string_mode = false;
                Event::StringMode(false)
            } else {
                self.push(cmd as Data)
            };
            self.finish_step();
            return SuspendingReason::Continue(event);
        }

        let inst = Inst::from(cmd);
        trace!(x = self.x, y = self.y, ?cmd, ?inst, "execute");

        let event = match inst {
            Inst::Right => self.turn(Direction::East),
            Inst::Left => self.turn(Direction::West),
            Inst::Up => self.turn(Direction::North),
            Inst::Down => self.turn(Direction::South),
            Inst::Random => self.turn(random.next_direction()),
            Inst::HorizontalIf => {
                if self.stack.pop() == 0 {
                    self.turn(Direction::East)
                } else {
                    self.turn(Direction::West)
                }
            }
            Inst::VerticalIf => {
                if self.stack.pop() == 0 {
                    self.turn(Direction::South)
                } else {
                    self.turn(Direction::North)
                }
            }
            Inst::StringMode => {
                self.string_mode = true;
                Event::StringMode(true)
            }
            Inst::Digit(n) => self.push(n as Data),
            Inst::Add | Inst::Sub | Inst::Mul | Inst::Div | Inst::Mod | Inst::Greater => {
                let (a, b) = self.stack.pop_pair();
                self.push(match inst {
                    Inst::Add => b.wrapping_add(a),
                    Inst::Sub => b.wrapping_sub(a),
                    Inst::Mul => b.wrapping_mul(a),
                    Inst::Div if a == 0 => 0,
                    Inst::Div => floor_div(b, a),
                    Inst::Mod if a == 0 => 0,
                    Inst::Mod => floor_mod(b, a),
                    Inst::Greater => to_flag(b > a),
                    _ => unreachable!(),
                })
            }
            Inst::Not => {
                let a = self.stack.pop();
                self.push(to_flag(a == 0))
            }
            Inst::Dup => {
                let a = self.stack.peek();
                self.push(a)
            }
            Inst::Swap => {
                let (a, b) = self.stack.pop_pair();
                self.stack.push(a);
                self.push(b)
            }
            Inst::Drop => Event::StackPopped(self.stack.pop()),
            Inst::OutputInt => Event::IntegerOutput(self.stack.pop()),
            Inst::OutputChar => {
                let c = to_char(self.stack.pop());
                self.output.push(c);
                Event::CharacterOutput(c)
            }
            Inst::Bridge => {
                self.forward();
                Event::Bridge
            }
            Inst::Get => {
                let (a, b) = self.stack.pop_pair();
                let c = self.grid.read(a, b);
                self.push(c as Data)
            }
            Inst::Put => {
                let (a, b) = self.stack.pop_pair();
                let v = self.stack.pop();
                let (x, y, value) = self.grid.write(a, b, v);
                debug!(x, y, ?value, "cell written");
                Event::CellWritten { x, y, value }
            }
            Inst::InputInt => return self.await_input(InputKind::Integer),
            Inst::InputChar => return self.await_input(InputKind::Character),
            Inst::Halt => {
                self.status = Status::Halted;
                info!(steps = self.steps, "halted");
                return SuspendingReason::Halted;
            }
            Inst::Nop => Event::NoOp,
        };

        self.finish_step();
        SuspendingReason::Continue(event)
    }

    pub(crate) fn push(&mut self, d: Data) -> Event {
        self.stack.push(d);
        Event::StackPushed(d)
    }

    /// Moves the IP one cell along its heading, wrapping at the edges.
    pub(crate) fn forward(&mut self) {
        let (dx, dy) = self.dir.delta();
        let (x, y) = Grid::wrap(self.x as Data + dx, self.y as Data + dy);
        self.x = x;
        self.y = y;
    }

    pub(crate) fn finish_step(&mut self) {
        self.forward();
        self.steps += 1;
    }

    fn turn(&mut self, dir: Direction) -> Event {
        self.dir = dir;
        Event::DirectionChanged(dir)
    }

    fn await_input(&mut self, kind: InputKind) -> SuspendingReason {
        debug!(kind = kind.label(), x = self.x, y = self.y, "input requested");
        self.status = Status::AwaitingInput(kind);
        SuspendingReason::AwaitingInput(kind)
    }
}
