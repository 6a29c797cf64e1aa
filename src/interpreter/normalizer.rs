/// Operator sequences rewritten before tokenization, applied in order.
///
/// Each pair is a single left-to-right pass, so `---` becomes `+-` rather than
/// `-`.
const REWRITES: [(&str, &str); 7] = [("[", "("),
                                     ("]", ")"),
                                     ("+-", "-"),
                                     ("-+", "-"),
                                     ("--", "+"),
                                     ("**", "^"),
                                     ("//", "/")];

/// Rewrites human-typed input into the canonical form the tokenizer expects.
///
/// The passes run in a fixed order:
/// 1. all whitespace is removed;
/// 2. `[` and `]` become `(` and `)`;
/// 3. adjacent signs collapse (`+-` and `-+` to `-`, `--` to `+`);
/// 4. doubled operators collapse (`**` to `^`, `//` to `/`);
/// 5. `)(` becomes `)*(`;
/// 6. a leading `-(` gets a `0` in front so the minus has a left operand.
///
/// No validation happens here; the result may still be malformed.
///
/// # Parameters
/// - `expression`: Raw input as typed by the user.
///
/// # Returns
/// The normalized expression.
///
/// # Example
/// ```
/// use infix::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize(" [1 + 2] (3) "), "(1+2)*(3)");
/// assert_eq!(normalize("-(4)"), "0-(4)");
/// assert_eq!(normalize("2**3//4"), "2^3/4");
/// ```
#[must_use]
pub fn normalize(expression: &str) -> String {
    let mut normalized: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    for (from, to) in REWRITES {
        if normalized.contains(from) {
            normalized = normalized.replace(from, to);
        }
    }
    normalized = normalized.replace(")(", ")*(");

    if normalized.starts_with("-(") {
        normalized.insert(0, '0');
    }

    normalized
}
