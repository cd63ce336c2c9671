use std::fmt;

pub type Data = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    pub fn delta(&self) -> (Data, Data) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dx, dy) = self.delta();
        write!(f, "({:+},{:+})", dx, dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    // direction
    Right,
    Left,
    Up,
    Down,
    Random,
    HorizontalIf,
    VerticalIf,
    // embedded data
    StringMode,
    Digit(u8),
    // arithmetics
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // logical
    Not,
    Greater,
    // stack operations
    Dup,
    Swap,
    Drop,
    // input/output
    OutputInt,
    OutputChar,
    InputInt,
    InputChar,
    // self-modification
    Get,
    Put,
    // control flows
    Bridge,
    Halt,
    Nop,
}

impl From<char> for Inst {
    fn from(c: char) -> Self {
        match c {
            '>' => Inst::Right,
            '<' => Inst::Left,
            '^' => Inst::Up,
            'v' => Inst::Down,
            '?' => Inst::Random,
            '_' => Inst::HorizontalIf,
            '|' => Inst::VerticalIf,
            '"' => Inst::StringMode,
            '0'..='9' => Inst::Digit(c as u8 - b'0'),
            '+' => Inst::Add,
            '-' => Inst::Sub,
            '*' => Inst::Mul,
            '/' => Inst::Div,
            '%' => Inst::Mod,
            '!' => Inst::Not,
            '`' => Inst::Greater,
            ':' => Inst::Dup,
            '\\' => Inst::Swap,
            '$' => Inst::Drop,
            '.' => Inst::OutputInt,
            ',' => Inst::OutputChar,
            '&' => Inst::InputInt,
            '~' => Inst::InputChar,
            'g' => Inst::Get,
            'p' => Inst::Put,
            '#' => Inst::Bridge,
            '@' => Inst::Halt,
            _ => Inst::Nop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Integer,
    Character,
}

impl InputKind {
    pub fn prompt(&self) -> &'static str {
        match self {
            InputKind::Integer => "Input(int): ",
            InputKind::Character => "Input(char): ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputKind::Integer => "int",
            InputKind::Character => "char",
        }
    }
}

/// What a completed step did, for whoever renders the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    DirectionChanged(Direction),
    StackPushed(Data),
    StackPopped(Data),
    CellWritten { x: usize, y: usize, value: char },
    IntegerOutput(Data),
    CharacterOutput(char),
    StringMode(bool),
    Bridge,
    NoOp,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::DirectionChanged(dir) => write!(f, "Direction: {}", dir),
            Event::StackPushed(d) => write!(f, "Push: {}", d),
            Event::StackPopped(d) => write!(f, "Pop: {}", d),
            Event::CellWritten { x, y, value } => write!(f, "Put: ({},{}) <- {:?}", x, y, value),
            Event::IntegerOutput(d) => write!(f, "Output(int): {}", d),
            Event::CharacterOutput(c) => write!(f, "Output(char): {:?}", c),
            Event::StringMode(on) => write!(f, "String mode: {}", if *on { "on" } else { "off" }),
            Event::Bridge => write!(f, "Bridge"),
            Event::NoOp => write!(f, "Nop"),
        }
    }
}

#[cfg(test)]
mod vm_test {
    use super::*;

    #[test]
    fn test_decode_instructions() {
        assert_eq!(Inst::Right, Inst::from('>'));
        assert_eq!(Inst::Digit(0), Inst::from('0'));
        assert_eq!(Inst::Digit(9), Inst::from('9'));
        assert_eq!(Inst::Swap, Inst::from('\\'));
        assert_eq!(Inst::Greater, Inst::from('`'));
        assert_eq!(Inst::Halt, Inst::from('@'));
    }

    #[test]
    fn test_unknown_characters_are_nops() {
        for c in [' ', 'a', 'V', 'x', '\t', 'é'] {
            assert_eq!(Inst::Nop, Inst::from(c));
        }
    }

    #[test]
    fn test_direction_display() {
        assert_eq!("(+1,+0)", Direction::East.to_string());
        assert_eq!("(+0,-1)", Direction::North.to_string());
    }

    #[test]
    fn test_event_display() {
        assert_eq!("Output(int): 10", Event::IntegerOutput(10).to_string());
    }
}
