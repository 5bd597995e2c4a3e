//! Compilation and resolution engine.
//!
//! The engine is split into a *compile* phase that runs once per definition
//! and an *execute* phase that runs once per call:
//!
//! ```text
//! SpecDefinition ── CompiledSpec::new          (compiled.rs)
//!                     - normalize base/options (token_set.rs)
//!                     - build variant lookup table
//!                     - normalize compound values
//!                          │
//!                          v  (immutable, shared by all calls)
//! Selection ──────── resolve                   (resolve.rs)
//!                     - overlay defaults -> effective selection
//!                     - accumulate base + variant + compound tokens
//!                     - warn on unknown names  (diag.rs)
//!                          │
//!                          v
//!                     space-joined String
//! ```
//!
//! `CompiledSpec` holds only read-only tables, so a single compiled value can
//! serve concurrent callers without synchronization. Each `resolve` call owns
//! its accumulator and leaves no state behind.
//!
//! ## Responsibilities by module
//!
//! - `token_set.rs`: the ordered, duplicate-free token collection and the
//!   whitespace normalization that produces it from raw token values.
//! - `compiled.rs`: derives `CompiledSpec` lookup tables from a definition.
//! - `resolve.rs`: effective-selection merge, token accumulation, and output
//!   serialization.
//! - `diag.rs`: the non-fatal warning channel for unrecognized names.

mod compiled;
mod diag;
mod resolve;
mod token_set;

pub(crate) use compiled::CompiledSpec;
pub(crate) use resolve::resolve;
