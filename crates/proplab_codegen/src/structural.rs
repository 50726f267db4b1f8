//! Component-specific structural rendering
//!
//! Some components are defined by a payload that the generic attribute
//! formatting would dump wholesale (a list of records, a recursive tree) or
//! by fixed children that do not come from the bag at all. A
//! [`StructuralStrategy`] renders those parts in a bounded, readable form.
//! Strategies are looked up by component id, so new special cases are added
//! by registering a strategy rather than editing the serializer.

use std::sync::Arc;

use proplab_core::{PropValue, PropertyBag};
use rustc_hash::FxHashMap;

use crate::format::{json, Attribute, Layout};

/// Extra output contributed by a strategy
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Structural {
    /// Attributes appended after the generic ones
    pub attributes: Vec<Attribute>,
    /// Children replacing any children taken from the bag
    pub children: Option<Vec<String>>,
}

pub trait StructuralStrategy: Send + Sync {
    fn render(&self, bag: &PropertyBag, layout: &Layout) -> Structural;
}

/// Strategy table keyed by component id
pub type StrategyMap = FxHashMap<String, Arc<dyn StructuralStrategy>>;

fn ellipsis(remaining: usize) -> String {
    let noun = if remaining == 1 { "item" } else { "items" };
    format!("// ... {} more {}", remaining, noun)
}

/// Wrap rendered entries in `name={[ ... ]}`, followed by an ellipsis
/// comment for the entries left out
fn bounded_attribute(
    name: &str,
    first: Vec<String>,
    remaining: usize,
    layout: &Layout,
) -> Attribute {
    let mut lines = vec![format!("{}={{[", name)];
    let last = first.len().saturating_sub(1);
    for (i, line) in first.into_iter().enumerate() {
        if i == last && remaining > 0 {
            lines.push(layout.indent(1, &format!("{},", line)));
        } else {
            lines.push(layout.indent(1, &line));
        }
    }
    if remaining > 0 {
        lines.push(layout.indent(1, &ellipsis(remaining)));
    }
    lines.push("]}".to_string());
    Attribute { lines }
}

/// Shows the first element of a list payload in full and counts the rest
#[derive(Clone, Debug)]
pub struct BoundedList {
    key: String,
}

impl BoundedList {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl StructuralStrategy for BoundedList {
    fn render(&self, bag: &PropertyBag, layout: &Layout) -> Structural {
        let Some(items) = bag.get(&self.key).and_then(PropValue::as_list) else {
            return Structural::default();
        };
        let attribute = match items.split_first() {
            None => Attribute::single(format!("{}={{[]}}", self.key)),
            Some((first, rest)) => {
                bounded_attribute(&self.key, vec![json(first)], rest.len(), layout)
            }
        };
        Structural {
            attributes: vec![attribute],
            children: None,
        }
    }
}

/// Shows the shape of the first top-level branch of a tree payload:
/// its type tag plus placeholders for metadata and children
#[derive(Clone, Debug)]
pub struct BoundedTree {
    key: String,
    discriminant: String,
}

impl BoundedTree {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            discriminant: "type".to_string(),
        }
    }

    fn branch_shape(&self, branch: &PropValue, layout: &Layout) -> Vec<String> {
        let Some(node) = branch.as_nested() else {
            return vec![json(branch)];
        };

        let mut fields = Vec::new();
        if let Some(tag) = node.get(&self.discriminant) {
            fields.push(format!("{}: {}", self.discriminant, json(tag)));
        }
        if node.contains_key("metadata") {
            fields.push("metadata: { /* item metadata */ }".to_string());
        }
        match node.get("children").and_then(PropValue::as_list) {
            Some([]) => fields.push("children: []".to_string()),
            Some(_) => fields.push("children: [ /* nested items */ ]".to_string()),
            None => {}
        }

        let last = fields.len().saturating_sub(1);
        let mut lines = vec!["{".to_string()];
        for (i, field) in fields.into_iter().enumerate() {
            let line = if i == last { field } else { format!("{},", field) };
            lines.push(layout.indent(1, &line));
        }
        lines.push("}".to_string());
        lines
    }
}

impl StructuralStrategy for BoundedTree {
    fn render(&self, bag: &PropertyBag, layout: &Layout) -> Structural {
        let Some(branches) = bag.get(&self.key).and_then(PropValue::as_list) else {
            return Structural::default();
        };
        let attribute = match branches.split_first() {
            None => Attribute::single(format!("{}={{[]}}", self.key)),
            Some((first, rest)) => {
                let shape = self.branch_shape(first, layout);
                bounded_attribute(&self.key, shape, rest.len(), layout)
            }
        };
        Structural {
            attributes: vec![attribute],
            children: None,
        }
    }
}

/// Canonical sample children, independent of the bag
#[derive(Clone, Debug)]
pub struct FixedChildren {
    lines: Vec<String>,
}

impl FixedChildren {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(lines: I) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl StructuralStrategy for FixedChildren {
    fn render(&self, _bag: &PropertyBag, _layout: &Layout) -> Structural {
        Structural {
            attributes: Vec::new(),
            children: Some(self.lines.clone()),
        }
    }
}

/// Strategies for the built-in collection and grouping components
pub fn builtin_strategies() -> StrategyMap {
    let mut map: StrategyMap = FxHashMap::default();
    map.insert("Data".to_string(), Arc::new(BoundedList::new("data")));
    map.insert("Tabs".to_string(), Arc::new(BoundedList::new("items")));
    map.insert("TreeView".to_string(), Arc::new(BoundedTree::new("items")));
    map.insert(
        "ButtonGroup".to_string(),
        Arc::new(FixedChildren::new([
            "<Button>One</Button>",
            "<Button>Two</Button>",
            "<Button>Three</Button>",
        ])),
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: i32) -> PropValue {
        PropValue::list((1..=n).map(|id| PropValue::nested([("id", id)])))
    }

    #[test]
    fn test_bounded_list_counts_remaining() {
        let bag = PropertyBag::new().with("data", rows(5));
        let out = BoundedList::new("data").render(&bag, &Layout::new(2));
        assert_eq!(
            out.attributes[0].lines,
            ["data={[", r#"  {"id":1},"#, "  // ... 4 more items", "]}"]
        );
        assert!(out.children.is_none());
    }

    #[test]
    fn test_bounded_list_edges() {
        let layout = Layout::new(2);
        let single = PropertyBag::new().with("data", rows(1));
        assert_eq!(
            BoundedList::new("data").render(&single, &layout).attributes[0].lines,
            ["data={[", r#"  {"id":1}"#, "]}"]
        );

        let two = PropertyBag::new().with("data", rows(2));
        assert_eq!(
            BoundedList::new("data").render(&two, &layout).attributes[0].lines[2],
            "  // ... 1 more item"
        );

        let empty = PropertyBag::new().with("data", rows(0));
        assert_eq!(
            BoundedList::new("data").render(&empty, &layout).attributes,
            [Attribute::single("data={[]}")]
        );

        let missing = BoundedList::new("data").render(&PropertyBag::new(), &layout);
        assert_eq!(missing, Structural::default());
    }

    #[test]
    fn test_bounded_tree_shows_first_branch_shape() {
        let leaf = PropValue::nested([
            ("type", PropValue::from("file")),
            ("children", PropValue::list(Vec::<PropValue>::new())),
        ]);
        let branch = PropValue::nested([
            ("label", PropValue::from("src")),
            ("type", PropValue::from("folder")),
            ("metadata", PropValue::nested([("items", 1)])),
            ("children", PropValue::list([leaf.clone()])),
        ]);
        let bag = PropertyBag::new().with("items", PropValue::list([branch, leaf.clone(), leaf]));

        let out = BoundedTree::new("items").render(&bag, &Layout::new(2));
        assert_eq!(
            out.attributes[0].lines,
            [
                "items={[",
                "  {",
                r#"    type: "folder","#,
                "    metadata: { /* item metadata */ },",
                "    children: [ /* nested items */ ]",
                "  },",
                "  // ... 2 more items",
                "]}",
            ]
        );
    }

    #[test]
    fn test_fixed_children_ignore_bag() {
        let strategy = FixedChildren::new(["<Button>One</Button>"]);
        let a = strategy.render(&PropertyBag::new(), &Layout::new(2));
        let b = strategy.render(&PropertyBag::new().with("children", "ignored"), &Layout::new(2));
        assert_eq!(a, b);
        assert_eq!(a.children.unwrap(), ["<Button>One</Button>"]);
    }
}
