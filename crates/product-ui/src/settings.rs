//! Library-wide naming configuration.
//!
//! Class names follow BEM: `{prefix}--{block}__{element}--{modifier}`.

/// Prefix for classes owned by this library.
pub const PREFIX: &str = "c4p";

/// Prefix for classes owned by the underlying primitive library.
pub const CARBON_PREFIX: &str = "cds";

/// Block class for a component of this library, e.g. `c4p--big-numbers-skeleton`.
pub fn block_class(block: &str) -> String {
    format!("{PREFIX}--{block}")
}

/// Block class for a primitive, e.g. `cds--skeleton__text`.
pub fn carbon_class(block: &str) -> String {
    format!("{CARBON_PREFIX}--{block}")
}
