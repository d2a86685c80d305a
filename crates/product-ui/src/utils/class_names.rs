/// Compose a class string from `(token, enabled)` pairs.
///
/// Disabled entries are skipped. A token may hold several space-separated
/// classes; each is kept once, in first-seen order.
pub fn class_names<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = (S, bool)>,
    S: AsRef<str>,
{
    let mut classes: Vec<String> = Vec::new();
    for (token, enabled) in entries {
        if !enabled {
            continue;
        }
        for class in token.as_ref().split_whitespace() {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_only_enabled_tokens() {
        let out = class_names([("block", true), ("block--lg", false), ("block--xl", true)]);
        assert_eq!(out, "block block--xl");
    }

    #[test]
    fn splits_and_dedups() {
        let out = class_names([("foo bar", true), ("bar", true), ("  baz  ", true)]);
        assert_eq!(out, "foo bar baz");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        let out = class_names(Vec::<(String, bool)>::new());
        assert_eq!(out, "");
        assert_eq!(class_names([("", true)]), "");
    }
}
