use std::collections::VecDeque;

/// Bounded history of what the run printed and read. The oldest line is
/// dropped once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct EventLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(256)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The last `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &str> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod log_test {
    use super::*;

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = EventLog::new(3);
        for n in 0..5 {
            log.push(format!("line {}", n));
        }
        assert_eq!(3, log.len());
        assert_eq!(
            vec!["line 2", "line 3", "line 4"],
            log.tail(10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_tail() {
        let mut log = EventLog::new(10);
        assert!(log.is_empty());
        log.push("a");
        log.push("b");
        log.push("c");
        assert_eq!(vec!["b", "c"], log.tail(2).collect::<Vec<_>>());
        assert_eq!(0, log.tail(0).count());
    }
}
