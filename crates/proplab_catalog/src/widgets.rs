//! Text renderers used as live-preview widgets
//!
//! Each widget turns the current property bag into a one- or few-line
//! terminal sketch of the component.

use std::sync::Arc;

use proplab_core::{PropValue, PropertyBag, WidgetRef};

fn text<'a>(props: &'a PropertyBag, key: &str) -> &'a str {
    props.get(key).and_then(PropValue::as_str).unwrap_or("")
}

fn flag(props: &PropertyBag, key: &str) -> bool {
    props.get(key).and_then(PropValue::as_bool).unwrap_or(false)
}

fn number(props: &PropertyBag, key: &str) -> f64 {
    props.get(key).and_then(PropValue::as_num).unwrap_or(0.0)
}

fn count(props: &PropertyBag, key: &str) -> usize {
    props
        .get(key)
        .and_then(PropValue::as_list)
        .map_or(0, <[PropValue]>::len)
}

/// Suffix listing the active state flags, e.g. ` (disabled)`
fn states(props: &PropertyBag, keys: &[&str]) -> String {
    let active: Vec<&str> = keys.iter().copied().filter(|k| flag(props, k)).collect();
    if active.is_empty() {
        String::new()
    } else {
        format!(" ({})", active.join(", "))
    }
}

/// Suffix describing an attached overlay, e.g. ` +popover@click`
fn overlay_hint(props: &PropertyBag) -> String {
    match props.get("overlay").and_then(PropValue::as_overlay) {
        Some(config) => format!(" +{}@{}", config.variant, config.trigger),
        None => String::new(),
    }
}

pub fn button() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let label = text(props, "children");
        let body = match text(props, "variant") {
            "outlined" => format!("( {} )", label),
            "text" => label.to_string(),
            _ => format!("[ {} ]", label),
        };
        format!(
            "{}{}{}",
            body,
            states(props, &["disabled", "fullWidth"]),
            overlay_hint(props)
        )
    })
}

pub fn badge() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        if flag(props, "invisible") {
            return "Inbox".to_string();
        }
        if flag(props, "dot") {
            return "Inbox •".to_string();
        }
        let content = text(props, "content");
        let max = number(props, "max");
        match content.parse::<f64>() {
            Ok(n) if max > 0.0 && n > max => format!("Inbox ({}+)", max),
            _ => format!("Inbox ({})", content),
        }
    })
}

pub fn avatar() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let initials: String = text(props, "alt")
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect();
        match text(props, "variant") {
            "square" => format!("[{}]", initials),
            _ => format!("({})", initials),
        }
    })
}

pub fn alert() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let title = text(props, "title");
        let heading = if title.is_empty() {
            text(props, "severity").to_uppercase()
        } else {
            format!("{}: {}", text(props, "severity").to_uppercase(), title)
        };
        let close = if flag(props, "closable") { "  [x]" } else { "" };
        format!("! {}{}\n  {}", heading, close, text(props, "children"))
    })
}

pub fn card() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        format!(
            "+ {} / {}{}\n| {}\n+ elevation {}",
            text(props, "title"),
            text(props, "subtitle"),
            overlay_hint(props),
            text(props, "children"),
            number(props, "elevation")
        )
    })
}

pub fn container() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let width = props
            .get("maxWidth")
            .and_then(PropValue::as_str)
            .unwrap_or("fluid");
        format!(
            "<{} pad {}{}> {}",
            width,
            number(props, "padding"),
            overlay_hint(props),
            text(props, "children")
        )
    })
}

pub fn button_group() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let separator = if text(props, "orientation") == "vertical" {
            "\n"
        } else {
            " "
        };
        ["One", "Two", "Three"]
            .iter()
            .map(|label| format!("[ {} ]", label))
            .collect::<Vec<_>>()
            .join(separator)
    })
}

pub fn floating_action_button() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let label = if flag(props, "extended") {
            format!(" {}", text(props, "label"))
        } else {
            String::new()
        };
        format!(
            "(+{}{}) @{}{}",
            text(props, "icon"),
            label,
            text(props, "position"),
            overlay_hint(props)
        )
    })
}

pub fn switch() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let knob = if flag(props, "checked") { "[ o]" } else { "[o ]" };
        format!("{} {}{}", knob, text(props, "label"), states(props, &["disabled"]))
    })
}

pub fn slider() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        const TRACK: usize = 20;
        let (min, max) = (number(props, "min"), number(props, "max"));
        let value = number(props, "value");
        let span = (max - min).max(f64::EPSILON);
        let filled = (((value - min) / span).clamp(0.0, 1.0) * TRACK as f64).round() as usize;
        let mut out = format!("|{}{}|", "=".repeat(filled), "-".repeat(TRACK - filled));
        if flag(props, "showValue") {
            out.push_str(&format!(" {}", value));
        }
        out
    })
}

pub fn input() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let value = text(props, "value");
        let shown = if value.is_empty() {
            text(props, "placeholder").to_string()
        } else if text(props, "type") == "password" {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let mut out = format!("{}: [{}]", text(props, "label"), shown);
        if flag(props, "error") {
            out.push_str(" !");
        }
        if let Some(helper) = props.get("helperText").and_then(PropValue::as_str) {
            out.push_str(&format!("\n  {}", helper));
        }
        out
    })
}

pub fn tabs() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let active = number(props, "activeIndex").max(0.0) as usize;
        let labels: Vec<String> = props
            .get("items")
            .and_then(PropValue::as_list)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let label = item.as_str().unwrap_or("?");
                if i == active {
                    format!("*{}*", label)
                } else {
                    label.to_string()
                }
            })
            .collect();
        labels.join(" | ")
    })
}

pub fn animated_text() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let body = text(props, "text");
        match text(props, "animation") {
            "typewriter" => {
                let cursor = if flag(props, "cursor") { "_" } else { "" };
                format!("{}{}  ~{} cps", body, cursor, number(props, "typingSpeed"))
            }
            "split" => {
                let split_by = props
                    .get_path(&"animationConfig.splitBy".into())
                    .and_then(PropValue::as_str)
                    .unwrap_or("words");
                let parts: Vec<String> = match split_by {
                    "chars" => body.chars().map(String::from).collect(),
                    "lines" => body.lines().map(String::from).collect(),
                    _ => body.split_whitespace().map(String::from).collect(),
                };
                parts.join(" / ")
            }
            "none" | "" => body.to_string(),
            other => format!("{} ~{}", body, other),
        }
    })
}

pub fn data() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let rows = count(props, "data");
        format!(
            "{} with {} rows, page size {}{}{}",
            text(props, "variant"),
            rows,
            number(props, "pageSize"),
            states(props, &["striped", "dense", "sortable", "selectable"]),
            overlay_hint(props)
        )
    })
}

pub fn tree_view() -> WidgetRef {
    Arc::new(|props: &PropertyBag| {
        let mut lines = Vec::new();
        if let Some(items) = props.get("items").and_then(PropValue::as_list) {
            draw_tree(items, 0, flag(props, "expandAll"), &mut lines);
        }
        let mut out = lines.join("\n");
        out.push_str(&overlay_hint(props));
        out
    })
}

fn draw_tree(items: &[PropValue], depth: usize, expand: bool, lines: &mut Vec<String>) {
    for item in items {
        let Some(node) = item.as_nested() else {
            continue;
        };
        let label = node.get("label").and_then(PropValue::as_str).unwrap_or("?");
        let children = node
            .get("children")
            .and_then(PropValue::as_list)
            .unwrap_or(&[]);
        let marker = match (children.is_empty(), expand) {
            (true, _) => "-",
            (false, true) => "v",
            (false, false) => ">",
        };
        lines.push(format!("{}{} {}", "  ".repeat(depth), marker, label));
        if expand {
            draw_tree(children, depth + 1, expand, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_states() {
        let props = PropertyBag::new()
            .with("children", "Save")
            .with("variant", "contained")
            .with("disabled", true);
        assert_eq!(button().render(&props), "[ Save ] (disabled)");
    }

    #[test]
    fn test_badge_overflow() {
        let props = PropertyBag::new().with("content", "120").with("max", 99);
        assert_eq!(badge().render(&props), "Inbox (99+)");
    }

    #[test]
    fn test_slider_track() {
        let props = PropertyBag::new()
            .with("min", 0)
            .with("max", 100)
            .with("value", 50)
            .with("showValue", true);
        assert_eq!(slider().render(&props), format!("|{}{}| 50", "=".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn test_tree_collapsed_and_expanded() {
        let items = crate::fixtures::file_tree();
        let collapsed = PropertyBag::new().with("items", items.clone());
        assert_eq!(tree_view().render(&collapsed), "> src\n> docs\n- Cargo.toml");

        let expanded = PropertyBag::new().with("items", items).with("expandAll", true);
        assert!(tree_view().render(&expanded).contains("    - button.rs"));
    }

    #[test]
    fn test_split_text() {
        let props = PropertyBag::new()
            .with("text", "Hello there")
            .with("animation", "split")
            .with("animationConfig", PropValue::nested([("splitBy", "words")]));
        assert_eq!(animated_text().render(&props), "Hello / there");
    }
}
