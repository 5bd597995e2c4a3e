#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`Selection`](crate::Selection) from `variant: option` pairs.
///
/// Keys are bare identifiers or string literals; values are anything
/// convertible to an option (`&str`, `String`, `bool`).
///
/// ```
/// use specced::selection;
///
/// let chosen = selection! { size: "large", disabled: true };
/// assert_eq!(chosen.get("disabled").unwrap().option_name(), "true");
/// ```
#[macro_export]
macro_rules! selection {
    () => {
        $crate::Selection::new()
    };
    ( $( $variant:tt : $option:expr ),+ $(,)? ) => {{
        let mut out = $crate::Selection::new();
        $( out.insert($crate::selection_key!($variant), $option); )+
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! selection_key {
    ($key:ident) => {
        stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}
