//! The operator table
//!
//! The operator set is closed and fixed at compile time, so dispatch is a
//! tagged enum rather than a dynamic lookup table. Each operator pops its
//! operands, computes, and pushes one result. For binary operators the top
//! of the stack is the right-hand operand `b`; the value beneath it is `a`.
//!
//! Arity violations are not pre-checked: they surface as `StackUnderflow`
//! from the underlying pops.

use super::error::{EvalError, EvalResult};
use super::stack::ValueStack;

/// A calculator operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Sqrt,
    Pow,
    Sin,
    Cos,
    Tan,
    Fib,
    Pascal,
}

/// All operator names, in help-text order
pub const OPERATOR_NAMES: &[&str] = &[
    "+", "-", "*", "/", "sqrt", "pow", "sin", "cos", "tan", "fib", "pascal",
];

impl Operator {
    /// Look up an operator by its token name
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "sqrt" => Some(Self::Sqrt),
            "pow" => Some(Self::Pow),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "fib" => Some(Self::Fib),
            "pascal" => Some(Self::Pascal),
            _ => None,
        }
    }

    /// The token name of this operator
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Sqrt => "sqrt",
            Self::Pow => "pow",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Fib => "fib",
            Self::Pascal => "pascal",
        }
    }

    /// Number of operands this operator consumes
    pub fn arity(&self) -> usize {
        match self {
            Self::Sqrt | Self::Sin | Self::Cos | Self::Tan | Self::Fib => 1,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow | Self::Pascal => 2,
        }
    }

    /// Pop operands, compute, push the result.
    ///
    /// Pops happen in operand order (b first for binary operators); a domain
    /// check that fails between pops leaves the earlier pops in place.
    pub fn apply(&self, stack: &mut ValueStack) -> EvalResult<()> {
        match self {
            Self::Add => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(a + b);
            }
            Self::Sub => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(a - b);
            }
            Self::Mul => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(a * b);
            }
            Self::Div => {
                let b = stack.pop()?;
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                let a = stack.pop()?;
                stack.push(a / b);
            }
            Self::Sqrt => {
                let a = stack.pop()?;
                if a < 0.0 {
                    return Err(EvalError::DomainError(
                        "square root of a negative number".to_string(),
                    ));
                }
                stack.push(a.sqrt());
            }
            Self::Pow => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(a.powf(b));
            }
            Self::Sin => {
                let a = stack.pop()?;
                stack.push(a.sin());
            }
            Self::Cos => {
                let a = stack.pop()?;
                stack.push(a.cos());
            }
            Self::Tan => {
                let a = stack.pop()?;
                stack.push(a.tan());
            }
            Self::Fib => {
                let a = stack.pop()?;
                stack.push(fibonacci(a as i64)?);
            }
            Self::Pascal => {
                let k = stack.pop()?;
                let n = stack.pop()?;
                stack.push(binomial(n as i64, k as i64)?);
            }
        }
        Ok(())
    }
}

/// nth Fibonacci number, iteratively: fib(0) = 0, fib(1) = 1.
///
/// Accumulates in f64, so very large indices lose integer exactness the same
/// way the rest of the calculator does.
pub fn fibonacci(n: i64) -> EvalResult<f64> {
    if n < 0 {
        return Err(EvalError::DomainError(
            "fibonacci index must be non-negative".to_string(),
        ));
    }
    let (mut a, mut b) = (0.0, 1.0);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    Ok(a)
}

/// Binomial coefficient C(n, k) via the multiplicative formula.
///
/// Uses the symmetry C(n, k) = C(n, n-k) to bound the iteration count.
/// f64 accumulation is exact for moderate n; large n may round.
pub fn binomial(n: i64, k: i64) -> EvalResult<f64> {
    if n < 0 || k < 0 || k > n {
        return Err(EvalError::DomainError(format!(
            "invalid pascal arguments: n = {}, k = {}",
            n, k
        )));
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    Ok(result)
}
