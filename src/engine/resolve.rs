//! Per-call resolution.
//!
//! ```text
//! Selection ──▶ effective_selection() ──▶ accumulate ──▶ join(" ")
//!                (defaults overlaid)       base
//!                                          variant options
//!                                          compound rules
//! ```
//!
//! The accumulator is an insertion-ordered set: base tokens come first in
//! their declared order, then tokens contributed by each effective-selection
//! entry in merge order, then tokens from each matching compound rule in rule
//! order. A token that is already present is never moved or re-added, so the
//! first contribution of a token fixes its position for good.
//!
//! Unknown variant names and unknown option values are skipped with a warning
//! (see `diag.rs`); a resolution therefore always produces a string.

use super::compiled::CompiledSpec;
use super::diag;
use super::token_set::TokenSet;
use crate::Selection;
use indexmap::IndexSet;

/// Resolve `selection` against a compiled spec into the final token string.
pub(crate) fn resolve(spec: &CompiledSpec, selection: &Selection) -> String {
    let mut output: IndexSet<String> = spec.base.iter().map(str::to_string).collect();

    let effective = effective_selection(&spec.defaults, selection);

    for (variant, option) in effective.iter() {
        let Some(options) = spec.variants.get(variant) else {
            diag::warn_unknown_variant(variant);
            continue;
        };

        let option_name = option.option_name();
        let Some(tokens) = options.get(option_name) else {
            diag::warn_unknown_option(variant, option_name);
            continue;
        };

        append_missing(&mut output, tokens);
    }

    for (when, tokens) in &spec.compound {
        if matches_selection(&effective, when) {
            append_missing(&mut output, tokens);
        }
    }

    let parts: Vec<&str> = output.iter().map(String::as_str).collect();
    parts.join(" ")
}

/// Overlay the caller's selection onto the defaults.
///
/// Iteration order of the result: default variant names first, in their
/// declaration order, then variant names introduced only by the caller, in
/// selection order. Replacing a default's option keeps its position.
fn effective_selection(defaults: &Selection, selection: &Selection) -> Selection {
    let mut effective = defaults.clone();
    for (variant, option) in selection.iter() {
        effective.insert(variant, option.clone());
    }
    effective
}

/// A rule matches when every `when` entry names a variant present in the
/// effective selection with the same canonical option name. An empty `when`
/// matches every selection.
fn matches_selection(effective: &Selection, when: &Selection) -> bool {
    when.iter().all(|(variant, required)| {
        effective.get(variant).is_some_and(|chosen| chosen.option_name() == required.option_name())
    })
}

fn append_missing(output: &mut IndexSet<String>, tokens: &TokenSet) {
    for token in tokens.iter() {
        if !output.contains(token) {
            output.insert(token.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpecDefinition;

    fn compile(definition: SpecDefinition) -> CompiledSpec {
        CompiledSpec::new(definition)
    }

    fn two_axis() -> CompiledSpec {
        compile(
            SpecDefinition::new()
                .base("base")
                .variant("a", [("1", "a-1"), ("2", "a-2")])
                .variant("b", [("1", "b-1"), ("2", "b-2")])
                .default_option("a", "1")
                .default_option("b", "1"),
        )
    }

    #[test]
    fn effective_selection_orders_defaults_before_new_keys() {
        let defaults = selection! { a: "1", b: "1" };
        let chosen = selection! { c: "x", b: "2" };

        let effective = effective_selection(&defaults, &chosen);
        let entries: Vec<(&str, &str)> =
            effective.iter().map(|(variant, option)| (variant, option.option_name())).collect();

        // b keeps its default position even though the caller replaced it.
        assert_eq!(entries, vec![("a", "1"), ("b", "2"), ("c", "x")]);
    }

    #[test]
    fn variant_tokens_follow_processing_order() {
        let spec = two_axis();
        assert_eq!(resolve(&spec, &selection! {}), "base a-1 b-1");
        assert_eq!(resolve(&spec, &selection! { b: "2" }), "base a-1 b-2");
        assert_eq!(resolve(&spec, &selection! { a: "2", b: "2" }), "base a-2 b-2");
    }

    #[test]
    fn duplicate_tokens_keep_first_position() {
        let spec = compile(
            SpecDefinition::new()
                .base("shared x")
                .variant("a", [("1", "y shared z")])
                .default_option("a", "1"),
        );

        assert_eq!(resolve(&spec, &selection! {}), "shared x y z");
    }

    #[test]
    fn unknown_variant_equals_omission() {
        let spec = two_axis();
        let with_unknown = resolve(&spec, &selection! { ghost: "1", b: "2" });
        let without = resolve(&spec, &selection! { b: "2" });
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn unknown_option_displaces_the_default() {
        // The unknown value still occupies `a`'s slot in the effective
        // selection, so the default's tokens are not restored.
        let spec = two_axis();
        assert_eq!(resolve(&spec, &selection! { a: "3" }), "base b-1");
    }

    #[test]
    fn compound_requires_every_entry_to_match() {
        let spec = compile(
            SpecDefinition::new()
                .variant("a", [("1", "a-1"), ("2", "a-2")])
                .variant("b", [("1", "b-1"), ("2", "b-2")])
                .compound(selection! { a: "2", b: "2" }, "both-2"),
        );

        assert_eq!(resolve(&spec, &selection! { a: "2", b: "2" }), "a-2 b-2 both-2");
        assert_eq!(resolve(&spec, &selection! { a: "1", b: "2" }), "a-1 b-2");
        assert_eq!(resolve(&spec, &selection! { a: "2" }), "a-2");
    }

    #[test]
    fn compound_matching_uses_canonical_option_names() {
        let spec = compile(
            SpecDefinition::new()
                .variant("disabled", [("true", "is-disabled"), ("false", "")])
                .compound(selection! { disabled: "true" }, "pointer-events-none"),
        );

        // A boolean selection matches a string-typed `when` value.
        assert_eq!(resolve(&spec, &selection! { disabled: true }), "is-disabled pointer-events-none");
        assert_eq!(resolve(&spec, &selection! { disabled: false }), "");
    }

    #[test]
    fn non_matching_rule_does_not_short_circuit_later_rules() {
        let spec = compile(
            SpecDefinition::new()
                .variant("a", [("1", "a-1"), ("2", "a-2")])
                .default_option("a", "2")
                .compound(selection! { a: "1" }, "never")
                .compound(selection! { a: "2" }, "still-added"),
        );

        assert_eq!(resolve(&spec, &selection! {}), "a-2 still-added");
    }

    #[test]
    fn empty_when_matches_every_selection() {
        let spec = compile(SpecDefinition::new().base("base").compound(Selection::new(), "always"));

        assert_eq!(resolve(&spec, &selection! {}), "base always");
        assert_eq!(resolve(&spec, &selection! { anything: "x" }), "base always");
    }

    #[test]
    fn empty_spec_resolves_to_empty_string() {
        let spec = compile(SpecDefinition::new());
        assert_eq!(resolve(&spec, &selection! {}), "");
    }
}
