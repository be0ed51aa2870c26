// Evaluation engine for RPN expressions
//
// This module is the calculator core:
// - `stack`: the f64 operand stack with underflow-checked pop/peek
// - `ops`: the closed operator table (arithmetic, trig, fib, pascal)
// - `eval`: tokenizer/dispatcher and the per-line evaluation entry point
// - `history`: append-only log of successful evaluations
// - `error`: the recoverable error taxonomy

pub mod error;
pub mod eval;
pub mod history;
pub mod ops;
pub mod stack;

pub use error::{EvalError, EvalResult};
pub use eval::{Engine, Notice};
pub use history::{History, HistoryEntry};
pub use ops::{binomial, fibonacci, Operator, OPERATOR_NAMES};
pub use stack::ValueStack;
