// crates/countrydb-core/src/text.rs

//! Key folding for the case-insensitive indices.
//!
//! Index keys and lookup inputs must pass through the same normalization,
//! so both sides share [`fold_key`].

/// Folds a name or code into its canonical index key (Unicode lowercase).
///
/// ```rust
/// use countrydb_core::text::fold_key;
///
/// assert_eq!(fold_key("SWEDEN"), "sweden");
/// assert_eq!(fold_key("Königreich Schweden"), "königreich schweden");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality on folded form.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
