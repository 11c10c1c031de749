use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// An evaluation error tagged with the script line it occurred on.
pub struct ScriptError {
    /// The 1-based source line of the failing expression.
    pub line:  usize,
    /// The underlying evaluation error.
    pub error: EvalError,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
