use lang_component::vm::Data;

/// Operand stack. Popping or peeking an empty stack yields 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack(Vec<Data>);

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, d: Data) {
        self.0.push(d);
    }

    pub fn pop(&mut self) -> Data {
        self.0.pop().unwrap_or(0)
    }

    /// Pops the top (`a`) and then the next (`b`).
    pub fn pop_pair(&mut self) -> (Data, Data) {
        let a = self.pop();
        let b = self.pop();
        (a, b)
    }

    pub fn peek(&self) -> Data {
        self.0.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Data] {
        &self.0
    }
}

#[cfg(test)]
mod stack_test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pop_empty() {
        let mut stack = Stack::new();
        assert_eq!(0, stack.pop());
        assert_eq!(0, stack.peek());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_pair_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!((2, 1), stack.pop_pair());
        assert_eq!((0, 0), stack.pop_pair());
        assert!(stack.is_empty());
    }

    proptest! {
        #[test]
        fn test_pops_past_bottom_yield_zero(values in proptest::collection::vec(any::<i64>(), 0..16), extra in 1usize..8) {
            let mut stack = Stack::new();
            for v in values.iter() {
                stack.push(*v);
            }
            for v in values.iter().rev() {
                prop_assert_eq!(*v, stack.pop());
            }
            for _ in 0..extra {
                prop_assert_eq!(0, stack.pop());
                prop_assert!(stack.is_empty());
            }
        }
    }
}
