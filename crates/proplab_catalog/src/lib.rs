//! # Proplab Component Catalog
//!
//! The built-in set of demoable design-system components. Each entry is a
//! [`ComponentDescriptor`] with default props, an editable schema and, for
//! overlay-capable components, a [`DerivedSlot`](proplab_core::DerivedSlot)
//! whose factory rebuilds the overlay for a trigger mode.
//!
//! ## Example
//!
//! ```rust
//! let registry = proplab_catalog::builtin_registry().unwrap();
//! let button = registry.clone_defaults("Button").unwrap();
//! assert_eq!(button.get("children").and_then(|v| v.as_str()), Some("Click Me"));
//! ```
//!
//! ## Components
//!
//! Selector order: Button, Badge, Avatar, Alert, Card, Container, ButtonGroup,
//! FloatingActionButton, Switch, Slider, Input, Tabs, AnimatedText, Data,
//! TreeView.

pub mod components;
pub mod fixtures;
pub mod options;
pub mod overlay;
pub mod widgets;

use proplab_core::{ComponentDescriptor, Registry, RegistryBuilder};

/// Every built-in descriptor, in selector order
pub fn descriptors() -> Vec<ComponentDescriptor> {
    use components::*;

    vec![
        button(),
        badge(),
        avatar(),
        alert(),
        card(),
        container(),
        button_group(),
        floating_action_button(),
        switch(),
        slider(),
        input(),
        tabs(),
        animated_text(),
        data(),
        tree_view(),
    ]
}

/// Build the registry of built-in components
pub fn builtin_registry() -> proplab_core::Result<Registry> {
    let descriptors = descriptors();
    tracing::debug!("loading {} built-in components", descriptors.len());
    descriptors
        .into_iter()
        .fold(RegistryBuilder::new(), RegistryBuilder::register)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proplab_core::{PropValue, Severity};

    #[test]
    fn test_builtin_registry_order() {
        let registry = builtin_registry().unwrap();
        let ids: Vec<&str> = registry.component_ids().collect();
        assert_eq!(ids.first(), Some(&"Button"));
        assert_eq!(ids.last(), Some(&"TreeView"));
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_builtin_registry_is_consistent() {
        let registry = builtin_registry().unwrap();
        let problems: Vec<_> = registry
            .audit()
            .into_iter()
            .filter(|f| f.severity > Severity::Info)
            .collect();
        assert!(problems.is_empty(), "audit findings: {:?}", problems);
    }

    #[test]
    fn test_button_defaults() {
        let registry = builtin_registry().unwrap();
        let bag = registry.clone_defaults("Button").unwrap();
        assert_eq!(bag.get("color"), Some(&PropValue::from("primary")));
        assert_eq!(bag.get("disabled"), Some(&PropValue::from(false)));
        assert_eq!(bag.get("children"), Some(&PropValue::from("Click Me")));
    }

    #[test]
    fn test_overlay_slots() {
        let registry = builtin_registry().unwrap();
        for id in ["Button", "Card", "Container", "Data", "FloatingActionButton", "TreeView"] {
            assert!(registry.derived_slot(id).is_some(), "{} has no overlay slot", id);
        }
        assert!(registry.derived_slot("Badge").is_none());

        let fab = registry.clone_defaults("FloatingActionButton").unwrap();
        let overlay = fab.get("overlay").and_then(PropValue::as_overlay).unwrap();
        assert_eq!(overlay.trigger, "click");
    }

    #[test]
    fn test_defaults_isolated_across_components() {
        let registry = builtin_registry().unwrap();
        let mut data = registry.clone_defaults("Data").unwrap();
        let mut tree = registry.clone_defaults("TreeView").unwrap();

        if let Some(PropValue::List(rows)) = data.remove("data") {
            let mut rows = rows;
            rows.truncate(1);
            data.insert("data", rows);
        }
        tree.set_path(&"items".into(), PropValue::list(Vec::<PropValue>::new()));

        let fresh_data = registry.clone_defaults("Data").unwrap();
        let fresh_tree = registry.clone_defaults("TreeView").unwrap();
        assert_eq!(fresh_data.get("data").and_then(PropValue::as_list).map(|r| r.len()), Some(5));
        assert_eq!(fresh_tree.get("items").and_then(PropValue::as_list).map(|r| r.len()), Some(3));
    }
}
