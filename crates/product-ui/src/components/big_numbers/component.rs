use dioxus::prelude::*;

use super::size::{BigNumbersSize, ALL_SIZES};
use crate::components::skeleton::SkeletonText;
use crate::devtools::devtools_attributes;
use crate::settings::block_class;
use crate::utils::class_names;

const COMPONENT_NAME: &str = "BigNumbersSkeleton";
const BLOCK: &str = "big-numbers-skeleton";

/// Loading placeholder for the big numbers widget.
///
/// Renders a label line and a heading-sized value line at 80% width, with the
/// same outer footprint as the widget at the given `size`. Only the widget
/// itself is expected to render this while its data loads.
#[component]
pub fn BigNumbersSkeleton(
    #[props(default, into)] size: BigNumbersSize,
    /// Receives the root element once mounted.
    onmounted: Option<EventHandler<MountedEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let block = block_class(BLOCK);
    let base = vec![Attribute::new("class", root_class(&block, size), None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![
        base,
        attributes,
        devtools_attributes(COMPONENT_NAME),
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            onmounted: move |evt| forward_mounted(onmounted, evt),
            ..merged,
            SkeletonText { class: "{block}__label" }
            SkeletonText { heading: true, width: "80%", class: "{block}__value" }
        }
    }
}

fn forward_mounted(handler: Option<EventHandler<MountedEvent>>, evt: MountedEvent) {
    if let Some(handler) = handler {
        handler.call(evt);
    }
}

/// Block class plus the modifier for `size`, if it has one.
fn root_class(block: &str, size: BigNumbersSize) -> String {
    let modifiers = ALL_SIZES.iter().filter_map(|candidate| {
        candidate
            .modifier()
            .map(|m| (format!("{block}--{m}"), *candidate == size))
    });
    class_names(std::iter::once((block.to_string(), true)).chain(modifiers))
}
