use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Type alias for operation handlers.
///
/// A handler receives its operands in application order and returns the
/// computed value. The slice length always matches the operation's arity.
type OperationFn = fn(&[f64]) -> EvalResult<f64>;

/// The number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand, such as `sqrt`.
    Unary,
    /// Two operands, such as `+` or `pow`.
    Binary,
}

impl Arity {
    /// Returns the operand count for this arity.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// A resolved operator: its token, arity and evaluation rule.
#[derive(Debug)]
pub struct Operation {
    /// The operator token as written in expressions.
    pub token: &'static str,
    /// How many operands the operation consumes.
    pub arity: Arity,
    func:      OperationFn,
}

/// Defines the operator table and the list of supported tokens.
///
/// Each entry provides a token, an arity and a function pointer. The macro
/// produces `OPERATION_TABLE` for lookup and the public `OPERATORS` list.
macro_rules! operations {
    (
        $(
            $token:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static OPERATION_TABLE: &[Operation] = &[
            $(
                Operation { token: $token, arity: $arity, func: $func },
            )*
        ];
        /// Every supported operator token, in lookup order.
        pub const OPERATORS: &[&str] = &[
            $($token,)*
        ];
    };
}

operations! {
    "+"    => { arity: Arity::Binary, func: |ops| Ok(ops[0] + ops[1]) },
    "-"    => { arity: Arity::Binary, func: |ops| Ok(ops[0] - ops[1]) },
    "*"    => { arity: Arity::Binary, func: |ops| Ok(ops[0] * ops[1]) },
    "/"    => { arity: Arity::Binary, func: divide },
    "sin"  => { arity: Arity::Unary,  func: |ops| Ok(ops[0].to_radians().sin()) },
    "cos"  => { arity: Arity::Unary,  func: |ops| Ok(ops[0].to_radians().cos()) },
    "log"  => { arity: Arity::Unary,  func: |ops| Ok(ops[0].ln()) },
    "sqrt" => { arity: Arity::Unary,  func: |ops| Ok(ops[0].sqrt()) },
    "pow"  => { arity: Arity::Binary, func: |ops| Ok(ops[0].powf(ops[1])) },
}

/// Divides the first operand by the second, rejecting a zero divisor.
///
/// # Parameters
/// - `ops`: The dividend and the divisor, in that order.
///
/// # Returns
/// - `Ok(f64)`: The quotient.
/// - `Err(EvalError::DivisionByZero)`: If the divisor is `0.0` or `-0.0`.
#[allow(clippy::float_cmp)]
fn divide(ops: &[f64]) -> EvalResult<f64> {
    if ops[1] == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(ops[0] / ops[1])
}

/// Looks up the operation for an operator token.
///
/// Resolution is a plain scan of the static operator table; nothing is
/// cached between calls.
///
/// # Errors
/// Returns `EvalError::UnsupportedOperation` naming the token when it is not
/// one of [`OPERATORS`].
///
/// # Example
/// ```
/// use prefix_eval::{
///     error::EvalError,
///     interpreter::operation::{Arity, resolve},
/// };
///
/// let pow = resolve("pow").unwrap();
/// assert_eq!(pow.arity, Arity::Binary);
/// assert_eq!(pow.apply(&[2.0, 10.0]), Ok(1024.0));
///
/// assert_eq!(resolve("tan").unwrap_err(),
///            EvalError::UnsupportedOperation { token: "tan".to_string() });
/// ```
pub fn resolve(token: &str) -> EvalResult<&'static Operation> {
    OPERATION_TABLE.iter()
                   .find(|op| op.token == token)
                   .ok_or_else(|| EvalError::UnsupportedOperation { token: token.to_string() })
}

impl Operation {
    /// Applies the operation to `operands`, given in application order.
    ///
    /// For binary operations the result is `operands[0] <op> operands[1]`.
    ///
    /// # Errors
    /// - `EvalError::MissingOperands` if fewer operands than the arity are
    ///   given.
    /// - `EvalError::SurplusOperands` if more operands than the arity are
    ///   given.
    /// - `EvalError::DivisionByZero` if `/` receives a zero divisor.
    ///
    /// # Example
    /// ```
    /// use prefix_eval::{error::EvalError, interpreter::operation::resolve};
    ///
    /// let div = resolve("/").unwrap();
    /// assert_eq!(div.apply(&[9.0, 3.0]), Ok(3.0));
    /// assert_eq!(div.apply(&[9.0, 0.0]), Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(&self, operands: &[f64]) -> EvalResult<f64> {
        let expected = self.arity.count();
        let found = operands.len();
        if found < expected {
            return Err(EvalError::MissingOperands { operator: self.token.to_string(),
                                                    expected,
                                                    found });
        }
        if found > expected {
            return Err(EvalError::SurplusOperands { operator: self.token.to_string(),
                                                    expected,
                                                    found });
        }
        (self.func)(operands)
    }
}
