/// Evaluation errors.
///
/// Defines every error that can be raised while a single prefix expression is
/// reduced: unknown operator tokens, division by zero and malformed operand
/// counts.
pub mod eval_error;
/// Script errors.
///
/// Wraps an evaluation error with the source line of the expression that
/// produced it.
pub mod script_error;

pub use eval_error::EvalError;
pub use script_error::ScriptError;
