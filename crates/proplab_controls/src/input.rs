//! Raw control input and its conversion into property values
//!
//! UI controls speak strings and booleans. This module is the boundary where
//! that transport form is turned back into [`PropValue`]s: the `"null"`
//! option key becomes `Unset`, numeric text is parsed leniently, and text is
//! stored as-is.

use proplab_core::{option_key, PropKind, PropValue};

/// What a control hands back when the user edits it
#[derive(Clone, Debug, PartialEq)]
pub enum ControlInput {
    /// Toggle state
    Checked(bool),
    /// One option key
    Select(String),
    /// Several option keys, for multi-valued choices
    SelectMany(Vec<String>),
    /// Free text, also used for numeric fields
    Input(String),
}

impl ControlInput {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ControlInput::Checked(_) => "checked",
            ControlInput::Select(_) => "select",
            ControlInput::SelectMany(_) => "select-many",
            ControlInput::Input(_) => "input",
        }
    }
}

/// Convert an input for a property of `kind`.
///
/// Returns `None` when the input does not fit the control (a toggle state
/// sent to a text field, say).
pub fn coerce(kind: &PropKind, input: ControlInput) -> Option<PropValue> {
    match (kind, input) {
        (PropKind::Boolean, ControlInput::Checked(checked)) => Some(PropValue::Bool(checked)),
        (PropKind::Enum { options, multiple, .. }, ControlInput::Select(key)) => {
            let value = decode_option(options, &key);
            if *multiple {
                Some(PropValue::List(vec![value]))
            } else {
                Some(value)
            }
        }
        (PropKind::Enum { options, multiple: true, .. }, ControlInput::SelectMany(keys)) => Some(
            PropValue::List(keys.iter().map(|key| decode_option(options, key)).collect()),
        ),
        (PropKind::Number { .. }, ControlInput::Input(raw)) => {
            Some(PropValue::Num(parse_number(&raw)))
        }
        (PropKind::Text { .. }, ControlInput::Input(raw)) => Some(PropValue::Str(raw)),
        _ => None,
    }
}

/// Map an option key back to its value.
///
/// Keys that match no option are kept permissively: `"null"` becomes
/// `Unset`, anything else a string.
pub fn decode_option(options: &[PropValue], key: &str) -> PropValue {
    options
        .iter()
        .find(|option| option_key(option) == key)
        .cloned()
        .unwrap_or_else(|| {
            if key == "null" {
                PropValue::Unset
            } else {
                PropValue::Str(key.to_string())
            }
        })
}

/// Option keys for the current value of a choice control
pub fn selected_keys(value: &PropValue) -> Vec<String> {
    match value {
        PropValue::List(items) => items.iter().map(option_key).collect(),
        other => vec![option_key(other)],
    }
}

/// Parse the leading number in `raw`, falling back to `0`.
///
/// Accepts what a lenient float parser would: optional sign, digits, an
/// optional fraction and exponent; trailing garbage is ignored.
pub fn parse_number(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        mantissa_digits += cursor - fraction_start;
        if mantissa_digits > 0 {
            end = cursor;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_options() -> Vec<PropValue> {
        vec![PropValue::Unset, "light".into(), "dark".into()]
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("  -3.5"), -3.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("12px"), 12.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("."), 0.0);
    }

    #[test]
    fn test_null_sentinel_decodes_to_unset() {
        assert_eq!(decode_option(&theme_options(), "null"), PropValue::Unset);
        assert_eq!(decode_option(&theme_options(), "dark"), PropValue::from("dark"));
        // Unknown keys are kept
        assert_eq!(decode_option(&theme_options(), "sepia"), PropValue::from("sepia"));
        assert_eq!(decode_option(&[], "null"), PropValue::Unset);
    }

    #[test]
    fn test_numeric_options_keep_their_type() {
        let options = vec![PropValue::from(1), PropValue::from(2.5)];
        assert_eq!(decode_option(&options, "2.5"), PropValue::from(2.5));
        assert_eq!(decode_option(&options, "1"), PropValue::from(1));
    }

    #[test]
    fn test_coerce_multi_select_maps_each_sentinel() {
        let kind = PropKind::Enum {
            options: theme_options(),
            option_labels: Default::default(),
            multiple: true,
        };
        let value = coerce(
            &kind,
            ControlInput::SelectMany(vec!["light".into(), "null".into(), "dark".into()]),
        );
        assert_eq!(
            value,
            Some(PropValue::list([
                PropValue::from("light"),
                PropValue::Unset,
                PropValue::from("dark"),
            ]))
        );
        assert_eq!(
            coerce(&kind, ControlInput::Select("null".into())),
            Some(PropValue::list([PropValue::Unset]))
        );
    }

    #[test]
    fn test_coerce_rejects_mismatched_input() {
        let text = PropKind::Text { placeholder: None };
        assert_eq!(coerce(&text, ControlInput::Checked(true)), None);
        assert_eq!(coerce(&PropKind::Boolean, ControlInput::Input("true".into())), None);

        let single = PropKind::Enum {
            options: theme_options(),
            option_labels: Default::default(),
            multiple: false,
        };
        assert_eq!(coerce(&single, ControlInput::SelectMany(vec![])), None);
    }

    #[test]
    fn test_text_keeps_empty_string() {
        let text = PropKind::Text { placeholder: None };
        assert_eq!(coerce(&text, ControlInput::Input(String::new())), Some(PropValue::from("")));
    }

    #[test]
    fn test_selected_keys() {
        assert_eq!(selected_keys(&PropValue::Unset), ["null"]);
        assert_eq!(
            selected_keys(&PropValue::list(["file", "folder"])),
            ["file", "folder"]
        );
    }
}
