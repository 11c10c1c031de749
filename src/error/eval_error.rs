#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a prefix expression.
pub enum EvalError {
    /// A non-numeric token did not match any supported operator.
    UnsupportedOperation {
        /// The offending token.
        token: String,
    },
    /// The divisor of `/` was zero.
    DivisionByZero,
    /// An operator found fewer values on the stack than it consumes.
    MissingOperands {
        /// The operator token.
        operator: String,
        /// How many operands the operator consumes.
        expected: usize,
        /// How many values were available.
        found:    usize,
    },
    /// An operation was handed more operands than it consumes.
    SurplusOperands {
        /// The operator token.
        operator: String,
        /// How many operands the operator consumes.
        expected: usize,
        /// How many operands were given.
        found:    usize,
    },
    /// The expression contained no tokens.
    EmptyExpression,
    /// More than one value was left once every token had been consumed.
    UnconsumedOperands {
        /// The number of values left on the stack.
        count: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperation { token } => {
                write!(f, "Unsupported operation: '{token}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MissingOperands { operator,
                                    expected,
                                    found, } => write!(f,
                                                       "Operator '{operator}' expects {expected} operand(s), but found {found}."),
            Self::SurplusOperands { operator,
                                    expected,
                                    found, } => write!(f,
                                                       "Operator '{operator}' takes only {expected} operand(s), but was given {found}."),
            Self::EmptyExpression => write!(f, "Expression is empty."),
            Self::UnconsumedOperands { count } => write!(f,
                                                         "Expression left {count} values on the stack. Check for missing operators."),
        }
    }
}

impl std::error::Error for EvalError {}
