//! Non-fatal warning channel.
//!
//! Unrecognized variant names and option values never fail a resolution; they
//! contribute nothing and are reported here. Warnings go to stderr and are
//! suppressed when `SPECCED_ENV=production`, mirroring how a consuming
//! application distinguishes development from production builds. The flag is
//! read once, at first use, and is read-only afterwards; it never affects the
//! returned value.

use once_cell::sync::Lazy;

static WARNINGS_ENABLED: Lazy<bool> =
    Lazy::new(|| std::env::var("SPECCED_ENV").map_or(true, |env| env != "production"));

pub(crate) fn warn_unknown_variant(variant: &str) {
    if *WARNINGS_ENABLED {
        eprintln!("[specced] unrecognized variant name: {variant}");
    }
}

pub(crate) fn warn_unknown_option(variant: &str, option: &str) {
    if *WARNINGS_ENABLED {
        eprintln!("[specced] unrecognized value for variant {variant}: {option}");
    }
}
