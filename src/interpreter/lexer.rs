use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Prefix expressions are whitespace-delimited, so the lexer only separates
/// words from each other and counts lines. Whether a word is a numeral or an
/// operator is decided by the evaluator.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// A maximal run of non-whitespace characters, such as `+`, `sqrt` or
    /// `2.5e-3`.
    #[regex(r"[^\s]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Word(String),
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Any other whitespace, including Unicode spaces.
    #[regex(r"[\s&&[^\n]]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits `source` into tokens paired with the 1-based line they start on.
///
/// The word pattern covers every non-whitespace character, so no input is
/// rejected here. Should the lexer still report an error, the offending slice
/// is kept as a word and left for the evaluator to reject.
///
/// # Example
/// ```
/// use prefix_eval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("+ 1\n2");
/// assert_eq!(tokens,
///            vec![(Token::Word("+".to_string()), 1),
///                 (Token::Word("1".to_string()), 1),
///                 (Token::NewLine, 2),
///                 (Token::Word("2".to_string()), 2)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let tok = token.unwrap_or_else(|()| Token::Word(lexer.slice().to_string()));
        tokens.push((tok, lexer.extras.line));
    }

    tokens
}

/// Collects the words of `source`, treating line breaks as plain whitespace.
///
/// # Example
/// ```
/// use prefix_eval::interpreter::lexer::words;
///
/// assert_eq!(words("  * 2\t3 \n"), vec!["*", "2", "3"]);
/// ```
#[must_use]
pub fn words(source: &str) -> Vec<String> {
    tokenize(source).into_iter()
                    .filter_map(|(token, _)| match token {
                        Token::Word(word) => Some(word),
                        _ => None,
                    })
                    .collect()
}
