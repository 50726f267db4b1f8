//! Code preview serializer
//!
//! [`CodeSerializer`] renders the declaration of a configured component:
//!
//! ```text
//! <Button
//!   variant="contained"
//!   color="primary"
//!   disabled
//! >
//!   Click Me
//! </Button>
//! ```
//!
//! Output is a pure function of the component id and the bag. Attribute order
//! follows the component's schema, then any extra keys alphabetically, so
//! equal bags always produce identical text.

use std::sync::Arc;

use proplab_core::{
    is_structural_key, ComponentDescriptor, PropPath, PropValue, PropertyBag, Registry,
};

use crate::format::{assemble, attribute, overlay_block, Attribute, Layout};
use crate::structural::{builtin_strategies, StrategyMap, StructuralStrategy};

/// Placeholder shown in place of overlay content
pub const DEFAULT_CONTENT_PLACEHOLDER: &str = "<YourContent />";

/// Rendering options
#[derive(Clone, Debug)]
pub struct SerializerOptions {
    /// Spaces per indentation step
    pub indent: usize,
    /// Text standing in for embedded renderables
    pub content_placeholder: String,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            content_placeholder: DEFAULT_CONTENT_PLACEHOLDER.to_string(),
        }
    }
}

pub struct CodeSerializer<'r> {
    registry: &'r Registry,
    options: SerializerOptions,
    layout: Layout,
    strategies: StrategyMap,
}

impl<'r> CodeSerializer<'r> {
    /// Serializer with default options and the built-in strategies
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_options(registry, SerializerOptions::default())
    }

    pub fn with_options(registry: &'r Registry, options: SerializerOptions) -> Self {
        Self {
            registry,
            layout: Layout::new(options.indent),
            options,
            strategies: builtin_strategies(),
        }
    }

    /// Register (or replace) the structural strategy for a component
    pub fn with_strategy(
        mut self,
        id: impl Into<String>,
        strategy: impl StructuralStrategy + 'static,
    ) -> Self {
        self.strategies.insert(id.into(), Arc::new(strategy));
        self
    }

    pub fn options(&self) -> &SerializerOptions {
        &self.options
    }

    /// Render the declaration for `id` with the given props.
    ///
    /// Unknown ids render as an empty string.
    pub fn serialize(&self, id: &str, bag: &PropertyBag) -> String {
        let Some(descriptor) = self.registry.descriptor(id) else {
            tracing::debug!("no code preview for unknown component '{}'", id);
            return String::new();
        };

        let mut attributes = self.display_attributes(descriptor, bag);

        if let Some(slot) = &descriptor.derived {
            if let Some(config) = bag.get(&slot.config_key).and_then(PropValue::as_overlay) {
                attributes.push(overlay_block(
                    &slot.config_key,
                    config,
                    &self.layout,
                    &self.options.content_placeholder,
                ));
            }
        }

        let mut children = None;
        if let Some(strategy) = self.strategies.get(id) {
            let structural = strategy.render(bag, &self.layout);
            attributes.extend(structural.attributes);
            children = structural.children;
        }
        let children = children.or_else(|| text_children(bag));

        assemble(id, &attributes, children.as_deref(), &self.layout)
    }

    /// Plain `key=value` attributes, in schema order then alphabetically
    fn display_attributes(
        &self,
        descriptor: &ComponentDescriptor,
        bag: &PropertyBag,
    ) -> Vec<Attribute> {
        let slot = descriptor.derived.as_ref();
        let is_display = |key: &str| {
            !is_structural_key(key) && !slot.is_some_and(|slot| slot.owns(key))
        };

        let mut keys: Vec<&str> = Vec::new();
        for key in descriptor.schema.keys() {
            let root = PropPath::new(key.as_str()).root().to_string();
            if let Some((root, _)) = bag.as_map().get_key_value(&root) {
                if !keys.contains(&root.as_str()) {
                    keys.push(root.as_str());
                }
            }
        }
        let mut extra: Vec<&str> = bag.keys().filter(|key| !keys.contains(key)).collect();
        extra.sort_unstable();
        keys.extend(extra);

        keys.into_iter()
            .filter(|key| is_display(*key))
            .filter_map(|key| {
                let value = bag.get(key)?;
                attribute(key, value, &self.layout, &self.options.content_placeholder)
            })
            .collect()
    }
}

/// Children from a non-empty text `children` value, falling back to text
/// `content`
fn text_children(bag: &PropertyBag) -> Option<Vec<String>> {
    ["children", "content"].into_iter().find_map(|key| {
        bag.get(key)
            .and_then(PropValue::as_str)
            .filter(|text| !text.is_empty())
            .map(|text| text.lines().map(str::to_string).collect())
    })
}
