//! rpncalc - Interactive RPN Calculator Library
//!
//! This library provides a stack-based calculator for expressions written in
//! Reverse Polish Notation, with arithmetic, trigonometric, and combinatorial
//! operators plus a session history.
//!
//! # Architecture
//!
//! The crate has two parts:
//!
//! 1. **Evaluation Engine** (`engine` module)
//!    - Splits an input line into whitespace-delimited tokens
//!    - Pushes numeric literals onto an f64 operand stack
//!    - Dispatches operator tokens against a closed operator table
//!    - Records `(expression, result)` pairs in an append-only history
//!
//! 2. **REPL** (`repl` module)
//!    - Rustyline-based interactive loop with operator name completion
//!    - Meta-commands (`help`, `history`, `quit`) handled before the engine
//!    - Fixed 6-decimal result formatting
//!
//! # Example
//!
//! ```rust
//! use rpncalc::engine::Engine;
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.evaluate("5 5 +"), Ok(10.0));
//!
//! // The stack survives across lines: the retained 10 is an operand here
//! assert_eq!(engine.evaluate("2 *"), Ok(20.0));
//! ```
//!
//! # Evaluation semantics
//!
//! - **Strict left-to-right**: tokens are processed in order, no backtracking
//! - **Persistent stack**: the stack is not reset between lines, so a
//!   session can compose multi-line calculations
//! - **No rollback**: a failing token leaves earlier mutations in place
//! - **Recoverable errors**: every failure is a structured [`engine::EvalError`];
//!   the engine stays usable afterwards

pub mod engine;
pub mod repl;

pub use engine::{Engine, EvalError, EvalResult, HistoryEntry, Notice, Operator};
