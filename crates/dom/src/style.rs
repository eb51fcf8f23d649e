//! Minimal `style` attribute processing.
//!
//! A resilient declaration-list parse, enough to read and rewrite single
//! properties on an element's inline style:
//! - Splits on semicolons into declaration items.
//! - Splits each item on the first colon into property and value.
//! - Trims ASCII whitespace; property names are lowercased.
//! - Skips empty or invalid items.
//!
//! No `!important` handling, no tokenizer-level error recovery.

/// A single declaration parsed from a `style` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase.
    pub property: String,
    /// Raw value trimmed of surrounding ASCII whitespace.
    pub value: String,
}

/// Parse the value of a `style` attribute into a list of declarations.
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim();
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property = raw_prop.trim();
        let value = raw_value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        out.push(Declaration {
            property: property.to_ascii_lowercase(),
            value: value.to_owned(),
        });
    }
    out
}

/// Look up a property in a declaration list. If it appears multiple times,
/// the last one wins, matching source-order behavior for duplicates.
pub fn get_property<'decls>(
    declarations: &'decls [Declaration],
    property: &str,
) -> Option<&'decls str> {
    declarations
        .iter()
        .rev()
        .find(|decl| decl.property == property)
        .map(|decl| decl.value.as_str())
}

/// Replace a property's value in a declaration list, or append it when
/// absent. Earlier duplicates are removed so the list stays canonical.
pub fn set_property(declarations: &mut Vec<Declaration>, property: &str, value: &str) {
    declarations.retain(|decl| decl.property != property);
    declarations.push(Declaration {
        property: property.to_ascii_lowercase(),
        value: value.to_owned(),
    });
}

/// Serialize a declaration list back into `style` attribute text.
pub fn serialize_declarations(declarations: &[Declaration]) -> String {
    let mut out = String::new();
    for decl in declarations {
        if !out.is_empty() {
            out.push_str("; ");
        }
        out.push_str(&decl.property);
        out.push_str(": ");
        out.push_str(&decl.value);
    }
    out
}

/// Parse a pixel length like `120px` (or a bare integer, covering the
/// unitless-zero case) into whole pixels. Anything else, including `auto`,
/// yields None.
pub fn parse_px_length(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix("px").map_or(trimmed, str::trim_end);
    digits.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_declarations_and_skips_invalid_items() {
        let decls = parse_style_attribute("color: red; ; height : 10px ; broken; :bad;");
        assert_eq!(
            decls,
            vec![
                Declaration {
                    property: "color".into(),
                    value: "red".into(),
                },
                Declaration {
                    property: "height".into(),
                    value: "10px".into(),
                },
            ]
        );
    }

    #[test]
    fn last_duplicate_wins_on_lookup() {
        let decls = parse_style_attribute("height: 10px; height: 20px");
        assert_eq!(get_property(&decls, "height"), Some("20px"));
    }

    #[test]
    fn set_property_replaces_and_appends() {
        let mut decls = parse_style_attribute("height: 10px; color: red; height: 20px");
        set_property(&mut decls, "height", "auto");
        assert_eq!(get_property(&decls, "height"), Some("auto"));
        // collapsed to a single height declaration
        assert_eq!(
            decls.iter().filter(|decl| decl.property == "height").count(),
            1
        );
        set_property(&mut decls, "width", "5px");
        assert_eq!(
            serialize_declarations(&decls),
            "color: red; height: auto; width: 5px"
        );
    }

    #[test]
    fn px_lengths() {
        assert_eq!(parse_px_length("120px"), Some(120));
        assert_eq!(parse_px_length(" 0 "), Some(0));
        assert_eq!(parse_px_length("0px"), Some(0));
        assert_eq!(parse_px_length("auto"), None);
        assert_eq!(parse_px_length("12em"), None);
        assert_eq!(parse_px_length("-3px"), None);
    }
}
