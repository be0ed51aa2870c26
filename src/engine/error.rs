//! Error types for the evaluation engine
//!
//! Every failure is recoverable: the engine aborts the current evaluation and
//! is immediately ready for the next line. Mutations made by tokens processed
//! before the failing one are retained (no rollback).

use std::fmt;

/// Result of an engine operation
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while evaluating an RPN expression
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator or pop/peek needed an operand that was not on the stack
    StackUnderflow,
    /// Division with a zero right-hand operand
    DivisionByZero,
    /// Operand outside an operator's domain (negative sqrt, invalid fib/pascal arguments)
    DomainError(String),
    /// A token that is neither a number nor a known operator
    UnknownOperator(String),
    /// The expression left the stack empty, so there is no result to report
    EmptyResult,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "stack underflow: not enough operands"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::DomainError(msg) => write!(f, "domain error: {}", msg),
            Self::UnknownOperator(name) => write!(f, "unknown operator '{}'", name),
            Self::EmptyResult => write!(f, "expression left the stack empty"),
        }
    }
}

impl std::error::Error for EvalError {}
