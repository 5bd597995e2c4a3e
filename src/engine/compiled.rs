//! Definition compilation.
//!
//! This module holds the *static* side of the engine: the lookup tables
//! derived once from a [`SpecDefinition`](crate::SpecDefinition) that every
//! subsequent call reads.
//!
//! Compilation is intentionally total: there is no failure path. Absent or
//! partial fields compile to empty tables, and a fully empty definition
//! compiles to a spec whose resolutions are all the empty string.
//!
//! ## Invariants
//!
//! - `variants` preserves variant and option declaration order; `compound`
//!   preserves rule declaration order. Both orders are significant downstream.
//! - No table is mutated after `CompiledSpec::new` returns, which is what
//!   makes a compiled spec freely shareable across threads.

use super::token_set::TokenSet;
use crate::{Selection, SpecDefinition};
use indexmap::IndexMap;

/// Normalized, immutable lookup tables for one definition.
#[derive(Debug, Clone)]
pub(crate) struct CompiledSpec {
    /// Tokens contributed to every resolution, in declaration order.
    pub base: TokenSet,
    /// Variant name -> option name -> normalized token set.
    pub variants: IndexMap<String, IndexMap<String, TokenSet>>,
    /// Retained verbatim; overlaid by the per-call selection.
    pub defaults: Selection,
    /// `(when, tokens)` pairs in rule declaration order.
    pub compound: Vec<(Selection, TokenSet)>,
}

impl CompiledSpec {
    /// Consume a definition and normalize every token value it contains.
    pub fn new(definition: SpecDefinition) -> Self {
        let base = TokenSet::from_value(definition.base.as_ref());

        let mut variants = IndexMap::new();
        for (name, options) in definition.variants {
            let table: IndexMap<String, TokenSet> = options
                .into_iter()
                .map(|(option, value)| (option, TokenSet::from_value(Some(&value))))
                .collect();
            variants.insert(name, table);
        }

        let compound = definition
            .compound
            .into_iter()
            .map(|rule| (rule.when, TokenSet::from_value(Some(&rule.value))))
            .collect();

        CompiledSpec { base, variants, defaults: definition.defaults, compound }
    }
}
