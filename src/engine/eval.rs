//! The evaluation engine
//!
//! Holds the operand stack and the session history, and evaluates one line
//! of RPN at a time. Tokens are processed strictly left to right:
//!
//! 1. a token that parses as a number (the whole token, no partial prefix)
//!    is pushed;
//! 2. `clear` and `display` dispatch to the stack primitives and report a
//!    [`Notice`] to the caller;
//! 3. anything else dispatches to the operator table, and an unrecognized
//!    name fails with `UnknownOperator`.
//!
//! The stack is NOT reset between lines: a session composes multi-line
//! calculations. Likewise, a failing token leaves the mutations of the
//! tokens before it in place. Both behaviors are intentional and tested.

use std::fmt;

use tracing::{debug, trace};

use super::error::{EvalError, EvalResult};
use super::history::{History, HistoryEntry};
use super::ops::Operator;
use super::stack::ValueStack;

/// A status report emitted by `clear`/`display`, distinct from the
/// evaluation result itself
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The stack was cleared
    Cleared,
    /// Current stack contents, ordered top-to-bottom
    Stack(Vec<f64>),
    /// `display` on an empty stack
    EmptyStack,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleared => write!(f, "stack cleared"),
            Self::Stack(values) => {
                write!(f, "stack (top -> bottom):")?;
                for value in values {
                    write!(f, " {}", value)?;
                }
                Ok(())
            }
            Self::EmptyStack => write!(f, "stack is empty"),
        }
    }
}

/// The RPN evaluation engine: operand stack plus session history
#[derive(Debug, Default)]
pub struct Engine {
    stack: ValueStack,
    history: History,
}

impl Engine {
    /// Create an engine with an empty stack and empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one line of RPN, discarding notices.
    ///
    /// See [`Engine::evaluate_with`] for the full semantics.
    pub fn evaluate(&mut self, line: &str) -> EvalResult<f64> {
        self.evaluate_with(line, |_| {})
    }

    /// Evaluate one line of RPN, reporting notices to `notify`.
    ///
    /// On success the result is the current stack top (not popped; trailing
    /// stack content stays for later lines) and `(line, result)` is appended
    /// to the history. On failure the evaluation stops at the offending
    /// token; the stack keeps whatever the earlier tokens did to it.
    pub fn evaluate_with<F>(&mut self, line: &str, mut notify: F) -> EvalResult<f64>
    where
        F: FnMut(Notice),
    {
        for token in line.split_whitespace() {
            // Strict numeric parse: the whole token or nothing, so "3abc"
            // falls through to operator handling.
            if let Ok(value) = token.parse::<f64>() {
                trace!(token, value, "push literal");
                self.stack.push(value);
                continue;
            }

            match token {
                "clear" => notify(self.clear()),
                "display" => notify(self.display()),
                _ => match Operator::from_token(token) {
                    Some(op) => {
                        trace!(token, "apply operator");
                        op.apply(&mut self.stack)?;
                    }
                    None => return Err(EvalError::UnknownOperator(token.to_string())),
                },
            }
        }

        let result = self
            .stack
            .peek()
            .map_err(|_| EvalError::EmptyResult)?;
        self.history.record(line, result);
        debug!(line, result, "evaluation complete");
        Ok(result)
    }

    /// Clear the stack, reporting the confirmation notice
    pub fn clear(&mut self) -> Notice {
        self.stack.clear();
        Notice::Cleared
    }

    /// Non-destructive view of the stack: contents top-to-bottom, or a
    /// distinct empty-stack notice
    pub fn display(&self) -> Notice {
        if self.stack.is_empty() {
            Notice::EmptyStack
        } else {
            Notice::Stack(self.stack.snapshot())
        }
    }

    /// Number of values currently on the stack
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    /// Stack contents top-to-bottom, without mutating the stack
    pub fn snapshot(&self) -> Vec<f64> {
        self.stack.snapshot()
    }

    /// Session history as a lazy, restartable sequence of
    /// `(1-based index, entry)` pairs
    pub fn show_history(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.history.iter()
    }

    /// Number of successful evaluations so far
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        let mut engine = Engine::new();
        assert_eq!(engine.evaluate("5 5 +"), Ok(10.0));
    }

    #[test]
    fn test_result_is_peeked_not_popped() {
        let mut engine = Engine::new();
        engine.evaluate("5 5 +").unwrap();
        assert_eq!(engine.size(), 1);
        // The retained top is an operand for the next line
        assert_eq!(engine.evaluate("2 *"), Ok(20.0));
    }

    #[test]
    fn test_stack_survives_across_lines() {
        let mut engine = Engine::new();
        engine.evaluate("1 2 3").unwrap();
        assert_eq!(engine.size(), 3);
        assert_eq!(engine.evaluate("+ +"), Ok(6.0));
    }

    #[test]
    fn test_partial_numeric_prefix_is_not_a_number() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.evaluate("3abc"),
            Err(EvalError::UnknownOperator("3abc".to_string()))
        );
    }

    #[test]
    fn test_unknown_operator_reports_the_token() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.evaluate("abc"),
            Err(EvalError::UnknownOperator("abc".to_string()))
        );
    }

    #[test]
    fn test_failure_keeps_earlier_mutations() {
        let mut engine = Engine::new();
        // "1 0 /" pops b = 0, fails the zero check, leaves a = 1 on the stack
        assert_eq!(engine.evaluate("1 0 /"), Err(EvalError::DivisionByZero));
        assert_eq!(engine.snapshot(), vec![1.0]);
    }

    #[test]
    fn test_failed_evaluation_records_no_history() {
        let mut engine = Engine::new();
        let _ = engine.evaluate("1 0 /");
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn test_empty_result_when_stack_ends_empty() {
        let mut engine = Engine::new();
        let mut notices = Vec::new();
        assert_eq!(
            engine.evaluate_with("1 2 + clear", |n| notices.push(n)),
            Err(EvalError::EmptyResult)
        );
        assert_eq!(notices, vec![Notice::Cleared]);
    }

    #[test]
    fn test_blank_line_on_empty_stack_is_empty_result() {
        let mut engine = Engine::new();
        assert_eq!(engine.evaluate("   "), Err(EvalError::EmptyResult));
    }

    #[test]
    fn test_display_token_reports_without_mutating() {
        let mut engine = Engine::new();
        let mut notices = Vec::new();
        let result = engine.evaluate_with("1 2 display +", |n| notices.push(n));
        assert_eq!(result, Ok(3.0));
        assert_eq!(notices, vec![Notice::Stack(vec![2.0, 1.0])]);
    }

    #[test]
    fn test_display_on_empty_stack() {
        let engine = Engine::new();
        assert_eq!(engine.display(), Notice::EmptyStack);
    }

    #[test]
    fn test_display_is_idempotent() {
        let mut engine = Engine::new();
        engine.evaluate("1 2 3").unwrap();
        let first = engine.display();
        let second = engine.display();
        assert_eq!(first, second);
        assert_eq!(engine.size(), 3);
    }

    #[test]
    fn test_history_reproduces_input_and_result() {
        let mut engine = Engine::new();
        engine.evaluate("5 5 +").unwrap();
        engine.evaluate("clear 10 fib").unwrap();

        let entries: Vec<_> = engine.show_history().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, 1);
        assert_eq!(entries[0].1.expression, "5 5 +");
        assert_eq!(entries[0].1.result, 10.0);
        assert_eq!(entries[1].0, 2);
        assert_eq!(entries[1].1.expression, "clear 10 fib");
        assert_eq!(entries[1].1.result, 55.0);
    }

    #[test]
    fn test_engine_recovers_after_failure() {
        let mut engine = Engine::new();
        let _ = engine.evaluate("sqrt");
        assert_eq!(engine.evaluate("9 sqrt"), Ok(3.0));
    }
}
