//! Ordered token collections.
//!
//! Output order is semantically meaningful: tokens appear in the order they
//! were first introduced, and a token introduced twice keeps its first
//! position. `TokenSet` wraps an insertion-ordered set and owns the one piece
//! of "parsing" the engine does: splitting raw token values on whitespace.

use crate::TokenValue;
use indexmap::IndexSet;

/// Ordered, duplicate-free collection of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TokenSet {
    tokens: IndexSet<String>,
}

impl TokenSet {
    /// Normalize a raw token value: split every member on whitespace, drop
    /// empty fragments, union in encounter order. `None` yields the empty set.
    pub fn from_value(value: Option<&TokenValue>) -> Self {
        let mut tokens = IndexSet::new();

        if let Some(value) = value {
            for member in value.members() {
                for fragment in regex!(r"\s+").split(member.trim()) {
                    if !fragment.is_empty() {
                        tokens.insert(fragment.to_string());
                    }
                }
            }
        }

        TokenSet { tokens }
    }

    /// Tokens in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenValue;

    fn normalize(value: TokenValue) -> Vec<String> {
        TokenSet::from_value(Some(&value)).iter().map(str::to_string).collect()
    }

    #[test]
    fn normalization_cases() {
        // Array of (expected tokens, input value)
        let cases: Vec<(Vec<&str>, TokenValue)> = vec![
            (vec![], "".into()),
            (vec![], "   ".into()),
            (vec!["a"], "a".into()),
            (vec!["a", "b"], "a b".into()),
            (vec!["a", "b"], "  a \t b ".into()),
            (vec!["dup"], "dup dup".into()),
            (vec![], TokenValue::Many(vec![])),
            (vec!["a", "b", "c"], vec!["a b", "", "c", "a"].into()),
            (vec!["x", "y"], vec!["x", "x y"].into()),
        ];

        for (expected, value) in cases {
            assert_eq!(normalize(value.clone()), expected, "input: {value:?}");
        }
    }

    #[test]
    fn absent_value_yields_empty_set() {
        assert_eq!(TokenSet::from_value(None).iter().count(), 0);
    }

    #[test]
    fn first_occurrence_wins() {
        let set = TokenSet::from_value(Some(&vec!["b a", "a b c"].into()));
        let tokens: Vec<&str> = set.iter().collect();
        assert_eq!(tokens, ["b", "a", "c"]);
    }
}
