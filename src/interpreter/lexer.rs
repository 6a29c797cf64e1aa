use logos::Logos;

/// Represents a lexical token of a normalized expression.
///
/// The lexer only classifies characters; sign folding, implicit
/// multiplication and validation happen in the tokenizer, which needs to look
/// at the tokens already emitted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// A run of digits and dots such as `3`, `.5` or `1.2.3`. Whether the run
    /// is a well-formed number is decided by the tokenizer.
    #[regex(r"[0-9.]+")]
    Literal,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}
