use logos::Logos;
use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::RawToken, normalizer::normalize},
    token::{Operator, Token},
};

/// Converts an expression into the token sequence consumed by the evaluator.
///
/// The input is normalized first (see
/// [`normalize`](crate::interpreter::normalizer::normalize)), then scanned left
/// to right:
/// - a `+` or `-` at the start of the input, or right after an operator or
///   `(`, is folded into the number literal that follows it;
/// - a `*` is inserted between a number and a following `(`, and between a `)`
///   and a following number;
/// - every other character becomes one token.
///
/// Before returning, the sequence is validated: it must contain an operator,
/// fewer operators than operands, and as many `(` as `)`. Inserted `*`
/// operators count like written ones.
///
/// # Parameters
/// - `expression`: Raw input as typed by the user.
///
/// # Returns
/// The validated token sequence.
///
/// # Errors
/// - [`EvalError::MalformedExpression`] for unknown characters, invalid
///   literals, a missing operator, or too many operators.
/// - [`EvalError::UnbalancedParens`] when the paren counts differ.
///
/// # Example
/// ```
/// use infix::{
///     interpreter::tokenizer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("3(4 * -5)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Operator(Operator::Mul),
///                 Token::OpenParen,
///                 Token::Number(4.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Number(-5.0),
///                 Token::CloseParen]);
/// ```
pub fn tokenize(expression: &str) -> EvalResult<Vec<Token>> {
    let normalized = normalize(expression);
    let mut stream = TokenStream::default();
    let mut lexer = RawToken::lexer(&normalized);

    while let Some(raw) = lexer.next() {
        let Ok(raw) = raw else {
            return Err(EvalError::malformed(format!("unexpected character '{}'",
                                                    lexer.slice())));
        };
        match raw {
            RawToken::Literal => stream.push_literal(lexer.slice())?,
            RawToken::LParen => stream.push_open(),
            RawToken::RParen => stream.push_close(),
            RawToken::Plus => stream.push_operator(Operator::Add),
            RawToken::Minus => stream.push_operator(Operator::Sub),
            RawToken::Star => stream.push_operator(Operator::Mul),
            RawToken::Slash => stream.push_operator(Operator::Div),
            RawToken::Caret => stream.push_operator(Operator::Pow),
        }
    }

    let tokens = stream.finish()?;
    debug!(expression = %normalized, count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Tokens emitted so far, with the counts needed for validation.
#[derive(Default)]
struct TokenStream {
    tokens:       Vec<Token>,
    operators:    usize,
    operands:     usize,
    open_parens:  usize,
    close_parens: usize,
}

impl TokenStream {
    fn push_operator(&mut self, op: Operator) {
        self.operators += 1;
        self.tokens.push(Token::Operator(op));
    }

    fn push_open(&mut self) {
        self.open_parens += 1;
        if matches!(self.tokens.last(), Some(Token::Number(_))) {
            self.push_operator(Operator::Mul);
        }
        self.tokens.push(Token::OpenParen);
    }

    fn push_close(&mut self) {
        self.close_parens += 1;
        self.tokens.push(Token::CloseParen);
    }

    fn push_literal(&mut self, digits: &str) -> EvalResult<()> {
        self.operands += 1;

        if let Some(sign) = self.pending_sign() {
            self.tokens.pop();
            self.operators -= 1;
            let value = parse_literal(digits)?;
            self.tokens.push(Token::Number(if sign == Operator::Sub { -value } else { value }));
            return Ok(());
        }

        if matches!(self.tokens.last(), Some(Token::CloseParen)) {
            self.push_operator(Operator::Mul);
        }
        self.tokens.push(Token::Number(parse_literal(digits)?));
        Ok(())
    }

    /// Returns the sign that should be folded into the next literal, if the
    /// last token is a `+` or `-` in unary position.
    fn pending_sign(&self) -> Option<Operator> {
        let (last, before) = match self.tokens.as_slice() {
            [.., before, Token::Operator(last)] => (*last, Some(before)),
            [Token::Operator(last)] => (*last, None),
            _ => return None,
        };
        let unary_position = match before {
            None => true,
            Some(token) => matches!(token, Token::Operator(_) | Token::OpenParen),
        };
        (last.is_sign() && unary_position).then_some(last)
    }

    fn finish(self) -> EvalResult<Vec<Token>> {
        if self.operators == 0 {
            return Err(EvalError::malformed("no arithmetic operators detected"));
        }
        if self.operators >= self.operands {
            return Err(EvalError::malformed(format!("{} operators for {} operands",
                                                    self.operators, self.operands)));
        }
        if self.open_parens != self.close_parens {
            return Err(EvalError::UnbalancedParens);
        }
        Ok(self.tokens)
    }
}

/// Parses an unsigned literal made of digits and dots.
///
/// Accepts `12`, `1.5` and `.5`; rejects a trailing dot, a lone dot and more
/// than one dot.
fn parse_literal(digits: &str) -> EvalResult<f64> {
    let well_formed = match digits.split_once('.') {
        None => !digits.is_empty(),
        Some((_, fraction)) => !fraction.is_empty() && !fraction.contains('.'),
    };
    let invalid = || EvalError::malformed(format!("invalid number literal '{}'", preview(digits)));
    if !well_formed {
        return Err(invalid());
    }
    digits.parse::<f64>().map_err(|_| invalid())
}

/// Longest prefix of a rejected literal quoted back in an error message.
const PREVIEW_CHARS: usize = 32;

/// Shortens `text` to [`PREVIEW_CHARS`] characters, marking the cut with `…`.
fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
