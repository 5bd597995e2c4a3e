//! Compile-once resolution of variant-driven class token strings.
//!
//! A [`SpecDefinition`] declares a `base` token value, named variants (each
//! mapping option names to token values), default option selections, and
//! compound rules that contribute extra tokens when an exact combination of
//! selections is active. [`create_spec`] compiles the definition once into a
//! [`Resolver`]; each call to [`Resolver::resolve`] merges a [`Selection`]
//! over the defaults and produces a stable, deduplicated, space-joined token
//! string.
//!
//! ```
//! use specced::{SpecDefinition, create_spec, selection};
//!
//! let button = create_spec(
//!     SpecDefinition::new()
//!         .base("btn")
//!         .variant("size", [("small", "btn-sm"), ("large", "btn-lg")])
//!         .variant("disabled", [("true", "btn-disabled"), ("false", "")])
//!         .default_option("size", "small")
//!         .default_option("disabled", false),
//! );
//!
//! assert_eq!(button.resolve_default(), "btn btn-sm");
//! assert_eq!(button.resolve(&selection! { size: "large", disabled: true }), "btn btn-lg btn-disabled");
//! ```

extern crate self as specced;

#[macro_use]
mod macros;
mod api;
mod engine;

pub use api::{Resolver, create_spec};

use indexmap::IndexMap;

// --- Definition types --------------------------------------------------------

/// Raw input form for a token set: a single string (possibly holding several
/// whitespace-separated tokens, possibly empty) or an ordered sequence of such
/// strings. Normalization splits on whitespace, drops empty fragments, and
/// unions in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    One(String),
    Many(Vec<String>),
}

impl TokenValue {
    pub(crate) fn members(&self) -> &[String] {
        match self {
            TokenValue::One(member) => std::slice::from_ref(member),
            TokenValue::Many(members) => members,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::One(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::One(value)
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(members: Vec<String>) -> Self {
        TokenValue::Many(members)
    }
}

impl From<Vec<&str>> for TokenValue {
    fn from(members: Vec<&str>) -> Self {
        TokenValue::Many(members.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TokenValue {
    fn from(members: [&str; N]) -> Self {
        TokenValue::Many(members.into_iter().map(str::to_string).collect())
    }
}

/// A chosen option for a variant: an option name, or a boolean that
/// canonicalizes to the option names `"true"` / `"false"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
}

impl OptionValue {
    /// Canonical option name. This single coercion rule is used both for
    /// variant-option lookup and for compound-rule matching, so a boolean
    /// selection always matches a `"true"`/`"false"` option name.
    pub fn option_name(&self) -> &str {
        match self {
            OptionValue::Str(name) => name,
            OptionValue::Bool(true) => "true",
            OptionValue::Bool(false) => "false",
        }
    }
}

impl From<&str> for OptionValue {
    fn from(name: &str) -> Self {
        OptionValue::Str(name.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(name: String) -> Self {
        OptionValue::Str(name)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

/// Insertion-ordered mapping from variant name to chosen option.
///
/// Used for per-call input, for a definition's defaults, and for the `when`
/// clause of a [`CompoundRule`]. Re-inserting an existing variant name
/// replaces its option but keeps its original position; the [`selection!`]
/// macro is the usual way to build one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: IndexMap<String, OptionValue>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn insert(&mut self, variant: impl Into<String>, option: impl Into<OptionValue>) {
        self.entries.insert(variant.into(), option.into());
    }

    /// Chainable form of [`insert`](Selection::insert).
    pub fn with(mut self, variant: impl Into<String>, option: impl Into<OptionValue>) -> Self {
        self.insert(variant, option);
        self
    }

    pub fn get(&self, variant: &str) -> Option<&OptionValue> {
        self.entries.get(variant)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(variant, option)| (variant.as_str(), option))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A conditional contribution: `value` is added only when every entry of
/// `when` is satisfied by the effective selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRule {
    pub when: Selection,
    pub value: TokenValue,
}

/// Declarative definition consumed by [`create_spec`].
///
/// All fields are optional; an empty definition is legal and compiles to a
/// resolver that always returns the empty string.
#[derive(Debug, Clone, Default)]
pub struct SpecDefinition {
    /// Tokens contributed to every resolution.
    pub base: Option<TokenValue>,
    /// Variant name -> option name -> token value.
    pub variants: IndexMap<String, IndexMap<String, TokenValue>>,
    /// Option selections applied when the caller omits a variant.
    pub defaults: Selection,
    /// Conditional contributions, evaluated in order.
    pub compound: Vec<CompoundRule>,
}

impl SpecDefinition {
    pub fn new() -> Self {
        SpecDefinition::default()
    }

    pub fn base(mut self, value: impl Into<TokenValue>) -> Self {
        self.base = Some(value.into());
        self
    }

    /// Add a variant with its option table. Option order is preserved.
    pub fn variant<K, V>(mut self, name: impl Into<String>, options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<TokenValue>,
    {
        let table: IndexMap<String, TokenValue> =
            options.into_iter().map(|(option, value)| (option.into(), value.into())).collect();
        self.variants.insert(name.into(), table);
        self
    }

    /// Select `option` for `variant` whenever the caller does not.
    pub fn default_option(mut self, variant: impl Into<String>, option: impl Into<OptionValue>) -> Self {
        self.defaults.insert(variant, option);
        self
    }

    /// Append a compound rule. Rule order is significant: later rules only
    /// add tokens that earlier contributions have not already introduced.
    pub fn compound(mut self, when: Selection, value: impl Into<TokenValue>) -> Self {
        self.compound.push(CompoundRule { when, value: value.into() });
        self
    }
}
