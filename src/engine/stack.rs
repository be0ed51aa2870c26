//! The operand stack
//!
//! A LIFO stack of f64 values. Operators pop their operands from here and
//! push their result back. The stack is owned by one engine instance and
//! survives across evaluations within a session.

use super::error::{EvalError, EvalResult};

/// Operand stack for RPN evaluation
#[derive(Debug, Clone, Default)]
pub struct ValueStack {
    values: Vec<f64>,
}

impl ValueStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Push a value on top of the stack
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pop the top value
    pub fn pop(&mut self) -> EvalResult<f64> {
        self.values.pop().ok_or(EvalError::StackUnderflow)
    }

    /// Read the top value without removing it
    pub fn peek(&self) -> EvalResult<f64> {
        self.values.last().copied().ok_or(EvalError::StackUnderflow)
    }

    /// Remove all values
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of values on the stack
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the stack holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current contents ordered top-to-bottom, without mutating the stack
    pub fn snapshot(&self) -> Vec<f64> {
        self.values.iter().rev().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo_order() {
        let mut stack = ValueStack::new();
        stack.push(1.0);
        stack.push(2.0);
        assert_eq!(stack.pop(), Ok(2.0));
        assert_eq!(stack.pop(), Ok(1.0));
    }

    #[test]
    fn test_pop_empty_is_underflow() {
        let mut stack = ValueStack::new();
        assert_eq!(stack.pop(), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn test_peek_empty_is_underflow() {
        let stack = ValueStack::new();
        assert_eq!(stack.peek(), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = ValueStack::new();
        stack.push(42.0);
        assert_eq!(stack.peek(), Ok(42.0));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_underflow_after_emptying() {
        let mut stack = ValueStack::new();
        stack.push(1.0);
        stack.push(2.0);
        stack.pop().unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn test_clear_empties_the_stack() {
        let mut stack = ValueStack::new();
        stack.push(1.0);
        stack.push(2.0);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_snapshot_is_top_to_bottom_and_non_destructive() {
        let mut stack = ValueStack::new();
        stack.push(1.0);
        stack.push(2.0);
        stack.push(3.0);
        assert_eq!(stack.snapshot(), vec![3.0, 2.0, 1.0]);
        assert_eq!(stack.snapshot(), vec![3.0, 2.0, 1.0]);
        assert_eq!(stack.len(), 3);
    }
}
