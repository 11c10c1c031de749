/// The evaluator module reduces prefix expressions to a single value.
///
/// The evaluator walks the tokens of an expression right to left over a value
/// stack, pushing numerals and applying operators to the values they find on
/// the stack.
///
/// # Responsibilities
/// - Distinguishes numerals from operator tokens.
/// - Pops operands in application order and pushes results.
/// - Reports unsupported operators, division by zero and malformed operand
///   counts.
pub mod evaluator;
/// The lexer module splits source text into whitespace-delimited words.
///
/// # Responsibilities
/// - Produces one token per word and one per line break.
/// - Tracks the current line for script error reporting.
pub mod lexer;
/// The operation module maps operator tokens to numeric operations.
///
/// Every supported operator is an entry of a static table holding its token,
/// its arity and a function pointer implementing it.
pub mod operation;
