//! Leaf value tokenizer
//!
//!     Splits the raw text after a leaf's colon into values.
//!
//!     The text is first cut by a logos lexer into quotes, commas, runs of blanks (spaces and
//!     tabs) and runs of anything else. A small state machine then walks those tokens:
//!
//!         - a quote toggles quoted mode and is dropped (there is no escaping);
//!         - in quoted mode every token is kept verbatim, commas and blanks included;
//!         - outside quotes a comma ends the current value, even an empty one;
//!         - outside quotes blanks are dropped while the current value is still empty and kept
//!           once it has content;
//!         - at the end, the current value is emitted only if it is not empty.
//!
//!     So `a,,b` gives `["a", "", "b"]` while `a,b,` gives `["a", "b"]`.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueToken {
    #[token("'")]
    Quote,

    #[token(",")]
    Comma,

    #[regex(r"[ \t]+")]
    Blank,

    #[regex(r"[^', \t]+")]
    Text,
}

/// Tokenize leaf value text into a new list.
pub fn tokenize_values(raw: &str) -> Vec<String> {
    let mut values = Vec::new();
    tokenize_values_into(raw, &mut values);
    values
}

/// Tokenize leaf value text, appending to `values`.
///
/// Used with recycled leaves so their value list keeps its allocation.
pub fn tokenize_values_into(raw: &str, values: &mut Vec<String>) {
    let mut lexer = ValueToken::lexer(raw);
    let mut quoted = false;
    let mut current = String::new();

    while let Some(token) = lexer.next() {
        let slice = lexer.slice();
        match token {
            Ok(ValueToken::Quote) => quoted = !quoted,
            _ if quoted => current.push_str(slice),
            Ok(ValueToken::Comma) => values.push(std::mem::take(&mut current)),
            Ok(ValueToken::Blank) if current.is_empty() => {}
            Ok(ValueToken::Blank) | Ok(ValueToken::Text) | Err(()) => current.push_str(slice),
        }
    }

    if !current.is_empty() {
        values.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a, b, 'c,d', ,e", &["a", "b", "c,d", "", "e"])]
    #[case("a,b,", &["a", "b"])]
    #[case("", &[])]
    #[case("a,,b", &["a", "", "b"])]
    #[case(",", &[""])]
    #[case("  spaced   out ,x", &["spaced   out ", "x"])]
    #[case("\tleading tab", &["leading tab"])]
    #[case("'  kept  '", &["  kept  "])]
    #[case("it''s", &["its"])]
    #[case("'', x", &["", "x"])]
    #[case("'a, b", &["a, b"])]
    #[case("1, 2", &["1", "2"])]
    fn test_tokenize_values(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize_values(raw), expected);
    }

    #[test]
    fn test_tokenize_into_appends() {
        let mut values = vec!["first".to_string()];
        tokenize_values_into("second, third", &mut values);
        assert_eq!(values, ["first", "second", "third"]);
    }

    #[test]
    fn test_lexer_tokens() {
        let tokens: Vec<_> = ValueToken::lexer("a b,'c'")
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(
            tokens,
            vec![
                ValueToken::Text,
                ValueToken::Blank,
                ValueToken::Text,
                ValueToken::Comma,
                ValueToken::Quote,
                ValueToken::Text,
                ValueToken::Quote,
            ]
        );
    }
}
