/// The evaluator module reduces tokens to a number.
///
/// The evaluator walks the token sequence once, keeping an operand stack and
/// an operator stack, and applies operators as soon as precedence allows.
///
/// # Responsibilities
/// - Applies `+ - * / ^` with the right precedence and grouping.
/// - Matches every `)` against a pending `(`.
/// - Reports division by zero and broken invariants as typed errors.
pub mod evaluator;
/// The lexer module classifies the characters of a normalized expression.
///
/// The lexer reads the normalized text and produces number runs, operators and
/// parentheses. Anything else is reported as an unexpected character.
pub mod lexer;
/// The normalizer module rewrites raw input into canonical form.
///
/// # Responsibilities
/// - Removes whitespace and maps `[`/`]` to parentheses.
/// - Collapses sign pairs and doubled operators.
/// - Makes juxtaposed groups and a leading `-(` explicit.
pub mod normalizer;
/// The tokenizer module builds the validated token sequence.
///
/// The tokenizer runs the normalizer and the lexer, folds unary signs into
/// literals, inserts implicit multiplication, and checks operator, operand
/// and parenthesis counts before any arithmetic happens.
pub mod tokenizer;
