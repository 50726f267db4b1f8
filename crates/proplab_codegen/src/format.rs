//! Attribute formatting and tag layout

use proplab_core::{format_number, OverlayConfig, PropValue};

/// Indentation settings shared by attributes and strategies
#[derive(Clone, Debug)]
pub struct Layout {
    unit: String,
}

impl Layout {
    pub fn new(width: usize) -> Self {
        Self {
            unit: " ".repeat(width),
        }
    }

    /// One indentation step
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Prefix `line` with `depth` indentation steps
    pub fn indent(&self, depth: usize, line: &str) -> String {
        if line.is_empty() {
            return String::new();
        }
        format!("{}{}", self.unit.repeat(depth), line)
    }
}

/// A rendered attribute; continuation lines carry their own relative indent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub lines: Vec<String>,
}

impl Attribute {
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.lines.len() > 1
    }
}

/// Compact JSON text for a value, object keys sorted
pub fn json(value: &PropValue) -> String {
    value.to_json().to_string()
}

/// Quote a string as a JSX attribute value
fn quoted(text: &str) -> String {
    if text.contains(['"', '\n', '\r']) {
        format!("{{{}}}", json(&PropValue::from(text)))
    } else {
        format!("\"{}\"", text)
    }
}

/// Format one display attribute.
///
/// Returns `None` for values that are omitted (`Unset`).
pub fn attribute(
    name: &str,
    value: &PropValue,
    layout: &Layout,
    placeholder: &str,
) -> Option<Attribute> {
    let line = match value {
        PropValue::Unset => return None,
        PropValue::Bool(true) => name.to_string(),
        PropValue::Bool(false) => format!("{}={{false}}", name),
        PropValue::Str(text) => format!("{}={}", name, quoted(text)),
        PropValue::Num(n) => format!("{}={{{}}}", name, format_number(*n)),
        PropValue::List(_) | PropValue::Nested(_) => format!("{}={{{}}}", name, json(value)),
        PropValue::Opaque(handle) => format!("{}={{{}}}", name, handle.placeholder()),
        PropValue::Overlay(config) => {
            return Some(overlay_block(name, config, layout, placeholder))
        }
    };
    Some(Attribute::single(line))
}

/// Multi-line block for an overlay configuration.
///
/// The content is always the placeholder: the embedded renderable may hold
/// live closures that have no source form.
pub fn overlay_block(
    name: &str,
    config: &OverlayConfig,
    layout: &Layout,
    placeholder: &str,
) -> Attribute {
    let field = |key: &str, value: &str| {
        layout.indent(1, &format!("{}: {},", key, json(&PropValue::from(value))))
    };
    Attribute {
        lines: vec![
            format!("{}={{{{", name),
            field("trigger", &config.trigger),
            field("variant", &config.variant),
            field("position", &config.position),
            layout.indent(1, &format!("content: {}", placeholder)),
            "}}".to_string(),
        ],
    }
}

/// Lay out a tag.
///
/// - no attributes, no children: `<Id />`
/// - one single-line attribute: `<Id attr />`
/// - otherwise one attribute per line, `/>` on its own line
/// - children switch to an open/close pair with the children indented
pub fn assemble(
    id: &str,
    attributes: &[Attribute],
    children: Option<&[String]>,
    layout: &Layout,
) -> String {
    let multiline = attributes.len() > 1 || attributes.iter().any(Attribute::is_multiline);

    let mut out = format!("<{}", id);
    if multiline {
        for line in attributes.iter().flat_map(|a| a.lines.iter()) {
            out.push('\n');
            out.push_str(&layout.indent(1, line));
        }
        out.push('\n');
    } else if let Some(line) = attributes.first().and_then(|a| a.lines.first()) {
        out.push(' ');
        out.push_str(line);
    }

    match children {
        None if multiline => out.push_str("/>"),
        None => out.push_str(" />"),
        Some(lines) => {
            out.push('>');
            for line in lines {
                out.push('\n');
                out.push_str(&layout.indent(1, line));
            }
            out.push_str(&format!("\n</{}>", id));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proplab_core::Opaque;

    fn layout() -> Layout {
        Layout::new(2)
    }

    fn attr(name: &str, value: PropValue) -> Option<String> {
        attribute(name, &value, &layout(), "<YourContent />").map(|a| a.lines.join("\n"))
    }

    #[test]
    fn test_attribute_by_type() {
        assert_eq!(attr("disabled", true.into()).unwrap(), "disabled");
        assert_eq!(attr("disabled", false.into()).unwrap(), "disabled={false}");
        assert_eq!(attr("color", "primary".into()).unwrap(), "color=\"primary\"");
        assert_eq!(attr("max", 99.into()).unwrap(), "max={99}");
        assert_eq!(attr("ratio", 0.5.into()).unwrap(), "ratio={0.5}");
        assert_eq!(
            attr("tags", PropValue::list(["a", "b"])).unwrap(),
            r#"tags={["a","b"]}"#
        );
        assert_eq!(
            attr("style", PropValue::nested([("gap", 4)])).unwrap(),
            r#"style={{"gap":4}}"#
        );
        assert_eq!(
            attr("style", PropValue::nested([("gap", 4), ("align", 1)])).unwrap(),
            r#"style={{"align":1,"gap":4}}"#
        );
        assert_eq!(attr("theme", PropValue::Unset), None);
    }

    #[test]
    fn test_string_with_quotes_is_braced() {
        assert_eq!(
            attr("title", "Say \"hi\"".into()).unwrap(),
            r#"title={"Say \"hi\""}"#
        );
    }

    #[test]
    fn test_opaque_placeholder() {
        let handler = PropValue::Opaque(Opaque::new("callback", ()));
        assert_eq!(attr("handler", handler).unwrap(), "handler={/* callback */}");

        let nested = PropValue::list([PropValue::Opaque(Opaque::new("renderItem", ()))]);
        assert_eq!(attr("rows", nested).unwrap(), r#"rows={["/* renderItem */"]}"#);
    }

    #[test]
    fn test_assemble_layouts() {
        let l = layout();
        assert_eq!(assemble("Badge", &[], None, &l), "<Badge />");
        assert_eq!(
            assemble("Badge", &[Attribute::single("color=\"primary\"")], None, &l),
            "<Badge color=\"primary\" />"
        );
        assert_eq!(
            assemble(
                "Badge",
                &[Attribute::single("dot"), Attribute::single("max={9}")],
                None,
                &l
            ),
            "<Badge\n  dot\n  max={9}\n/>"
        );
        assert_eq!(
            assemble("Alert", &[], Some(&["Saved.".to_string()][..]), &l),
            "<Alert>\n  Saved.\n</Alert>"
        );
        assert_eq!(
            assemble(
                "Button",
                &[Attribute::single("disabled")],
                Some(&["Go".to_string()][..]),
                &l
            ),
            "<Button disabled>\n  Go\n</Button>"
        );
    }

    #[test]
    fn test_multiline_attribute_forces_block_layout() {
        let block = Attribute {
            lines: vec!["items={[".into(), "  1,".into(), "]}".into()],
        };
        assert_eq!(
            assemble("List", &[block], None, &layout()),
            "<List\n  items={[\n    1,\n  ]}\n/>"
        );
    }

    #[test]
    fn test_indent_skips_empty_lines() {
        assert_eq!(layout().indent(2, ""), "");
        assert_eq!(layout().indent(2, "x"), "    x");
    }
}
