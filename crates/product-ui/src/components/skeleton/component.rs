use dioxus::prelude::*;
use dioxus::core::AttributeValue;

use crate::settings::carbon_class;
use crate::utils::class_names;

/// Percentage points the last paragraph line is shortened by.
const LAST_LINE_STEP: u32 = 15;
const MIN_LINE_WIDTH: u32 = 10;

/// A shimmering text placeholder shown while content loads.
///
/// Renders a single line by default. With `paragraph` set, renders a plain
/// wrapper holding `line_count` lines, the last one slightly shorter. Caller
/// attributes land on every line, so a `class` styles each line. A caller
/// `style` is appended after the line width.
#[component]
pub fn SkeletonText(
    /// Use the taller heading line.
    #[props(default)]
    heading: bool,
    /// CSS width of each line, e.g. `"80%"` or `"12rem"`.
    #[props(default = "100%".to_string(), into)]
    width: String,
    #[props(default)] paragraph: bool,
    #[props(default = 3)] line_count: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let line_class = class_names([
        (carbon_class("skeleton__text"), true),
        (carbon_class("skeleton__heading"), heading),
    ]);

    if paragraph {
        let lines: Vec<Vec<Attribute>> = line_widths(&width, line_count)
            .iter()
            .map(|line_width| line_attributes(&line_class, line_width, &attributes))
            .collect();
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div {
                for (i, line) in lines.into_iter().enumerate() {
                    p {
                        key: "{i}",
                        ..line,
                    }
                }
            }
        };
    }

    let merged = line_attributes(&line_class, &width, &attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        p {
            ..merged,
        }
    }
}

/// Attributes for one line: base class and width, then the caller's attributes.
///
/// Text `style` values are folded into the width style instead of replacing it.
fn line_attributes(line_class: &str, width: &str, attributes: &[Attribute]) -> Vec<Attribute> {
    let mut style = format!("width: {width}");
    let mut rest = Vec::with_capacity(attributes.len());
    for attr in attributes {
        match &attr.value {
            AttributeValue::Text(extra) if attr.name == "style" && attr.namespace.is_none() => {
                let extra = extra.trim();
                if !extra.is_empty() {
                    style.push_str("; ");
                    style.push_str(extra);
                }
            }
            _ => rest.push(attr.clone()),
        }
    }

    let base = vec![
        Attribute::new("class", line_class.to_string(), None, false),
        Attribute::new("style", style, None, false),
    ];
    dioxus_primitives::merge_attributes(vec![base, rest])
}

/// Widths for each paragraph line. Only percentage widths get a shorter last line.
fn line_widths(width: &str, line_count: usize) -> Vec<String> {
    let mut widths = vec![width.to_string(); line_count];
    if line_count < 2 {
        return widths;
    }
    let shortened = width
        .strip_suffix('%')
        .and_then(|n| n.trim().parse::<u32>().ok())
        .map(|n| format!("{}%", n.saturating_sub(LAST_LINE_STEP).max(MIN_LINE_WIDTH)));
    if let (Some(last), Some(short)) = (widths.last_mut(), shortened) {
        *last = short;
    }
    widths
}
