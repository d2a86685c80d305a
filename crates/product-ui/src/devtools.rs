use dioxus::prelude::*;

use crate::settings::PREFIX;

/// Attribute name the devtools extension looks for.
pub const DEVTOOLS_ATTRIBUTE: &str = "data-carbon-devtools-id";

/// Identifier used to tag a component's root node for devtools.
pub fn devtools_id(component_name: &str) -> String {
    format!("{PREFIX}--{component_name}")
}

/// Debug attributes to merge into a component's root element.
pub fn devtools_attributes(component_name: &str) -> Vec<Attribute> {
    vec![Attribute::new(
        DEVTOOLS_ATTRIBUTE,
        devtools_id(component_name),
        None,
        false,
    )]
}
