//! Component registry
//!
//! The registry maps a component id to its [`ComponentDescriptor`]: the
//! widget that renders it, its default property bag and the schema of its
//! editable properties. It is assembled once through [`RegistryBuilder`] and
//! is immutable afterwards; consumers borrow it.
//!
//! ```rust
//! use std::sync::Arc;
//! use proplab_core::prelude::*;
//!
//! let badge = ComponentDescriptor::new("Badge", Arc::new(|_: &PropertyBag| "(4)".to_string()))
//!     .default("color", "primary")
//!     .prop("color", PropertyDescriptor::choice("Color", ["primary", "secondary"]));
//!
//! let registry = RegistryBuilder::new().register(badge).build().unwrap();
//! assert_eq!(registry.component_ids().collect::<Vec<_>>(), ["Badge"]);
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::bag::{PropPath, PropertyBag};
use crate::error::{RegistryError, Result};
use crate::overlay::DerivedSlot;
use crate::schema::{PropKind, PropertyDescriptor};
use crate::value::PropValue;

/// Keys that hold content, callbacks or bulk collections rather than plain
/// configuration. They never appear as generic `key=value` attributes.
pub const STRUCTURAL_KEYS: &[&str] = &[
    "children",
    "content",
    "data",
    "items",
    "columns",
    "options",
    "renderItem",
];

/// Whether a top-level key is structural (including `onXxx` event handlers)
pub fn is_structural_key(key: &str) -> bool {
    STRUCTURAL_KEYS.contains(&key) || is_event_handler(key)
}

fn is_event_handler(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next() == Some('o')
        && chars.next() == Some('n')
        && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Renders a component for the live preview.
///
/// The registry never looks inside a widget; it only hands it the bag.
pub trait Widget: Send + Sync {
    fn render(&self, props: &PropertyBag) -> String;
}

impl<F> Widget for F
where
    F: Fn(&PropertyBag) -> String + Send + Sync,
{
    fn render(&self, props: &PropertyBag) -> String {
        self(props)
    }
}

/// Shared handle to a widget
pub type WidgetRef = Arc<dyn Widget>;

/// Registry entry for one demoable component
#[derive(Clone)]
pub struct ComponentDescriptor {
    pub id: String,
    pub description: String,
    pub widget: WidgetRef,
    pub defaults: PropertyBag,
    pub schema: IndexMap<String, PropertyDescriptor>,
    pub derived: Option<DerivedSlot>,
}

impl ComponentDescriptor {
    pub fn new(id: impl Into<String>, widget: WidgetRef) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            widget,
            defaults: PropertyBag::new(),
            schema: IndexMap::new(),
            derived: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.defaults.insert(key, value);
        self
    }

    pub fn prop(mut self, key: impl Into<String>, descriptor: PropertyDescriptor) -> Self {
        self.schema.insert(key.into(), descriptor);
        self
    }

    pub fn derived(mut self, slot: DerivedSlot) -> Self {
        self.derived = Some(slot);
        self
    }

    /// Whether a default key is covered by the schema, directly or as the
    /// root of a dotted schema key
    fn schema_covers(&self, key: &str) -> bool {
        self.schema.contains_key(key)
            || self
                .schema
                .keys()
                .any(|k| PropPath::new(k.as_str()).root() == key)
    }

    /// Check the descriptor's defaults against its schema
    pub fn audit(&self) -> Vec<AuditFinding> {
        let mut findings = Vec::new();
        let finding = |key: &str, severity: Severity, message: String| AuditFinding {
            component: self.id.clone(),
            key: key.to_string(),
            severity,
            message,
        };

        for (key, _) in self.defaults.iter() {
            let owned = self.derived.as_ref().is_some_and(|slot| slot.owns(key));
            if !self.schema_covers(key) && !is_structural_key(key) && !owned {
                findings.push(finding(
                    key,
                    Severity::Warning,
                    "default has no schema entry and cannot be edited".to_string(),
                ));
            }
        }

        for (key, descriptor) in &self.schema {
            let path = PropPath::new(key.as_str());
            let current = self.defaults.get_path(&path);

            if current.is_none() && !path.is_nested() {
                findings.push(finding(key, Severity::Info, "no default value".to_string()));
            }

            match (&descriptor.kind, current) {
                (PropKind::Enum { options, multiple, .. }, Some(value)) => {
                    let selected: Vec<&PropValue> = match (multiple, value) {
                        (true, PropValue::List(items)) => items.iter().collect(),
                        _ => vec![value],
                    };
                    for item in selected {
                        if !options.contains(item) {
                            findings.push(finding(
                                key,
                                Severity::Warning,
                                format!("default {:?} is not one of the options", item),
                            ));
                        }
                    }
                }
                (PropKind::Number { min, max, .. }, Some(PropValue::Num(n))) => {
                    let below = min.is_some_and(|lo| *n < lo);
                    let above = max.is_some_and(|hi| *n > hi);
                    if below || above {
                        findings.push(finding(
                            key,
                            Severity::Warning,
                            format!("default {} is outside the declared range", n),
                        ));
                    }
                }
                _ => {}
            }

            if let Some(predicate) = &descriptor.applies_when {
                let target = predicate.key.as_str();
                let known = self.schema.contains_key(target)
                    || self.defaults.get_path(&predicate.key).is_some();
                if !known {
                    findings.push(finding(
                        key,
                        Severity::Error,
                        format!("applicability refers to unknown property '{}'", target),
                    ));
                }
            }
        }

        if let Some(slot) = &self.derived {
            match self.schema.get(&slot.trigger_key).map(|d| &d.kind) {
                Some(PropKind::Enum { .. }) => {}
                _ => findings.push(finding(
                    &slot.trigger_key,
                    Severity::Error,
                    "trigger property must be an enum in the schema".to_string(),
                )),
            }
            match self.schema.get(&slot.toggle_key).map(|d| &d.kind) {
                Some(PropKind::Boolean) => {}
                _ => findings.push(finding(
                    &slot.toggle_key,
                    Severity::Error,
                    "overlay toggle must be a boolean in the schema".to_string(),
                )),
            }
        }

        findings
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("id", &self.id)
            .field("defaults", &self.defaults)
            .field("schema", &self.schema.keys().collect::<Vec<_>>())
            .field("derived", &self.derived)
            .finish_non_exhaustive()
    }
}

/// Severity of an audit finding
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A schema/default consistency problem
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditFinding {
    pub component: String,
    pub key: String,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.component, self.key, self.message)
    }
}

/// Collects descriptors and validates them into a [`Registry`]
#[derive(Default)]
pub struct RegistryBuilder {
    components: Vec<ComponentDescriptor>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, descriptor: ComponentDescriptor) -> Self {
        self.components.push(descriptor);
        self
    }

    /// Validate and freeze the registry.
    ///
    /// Fails on duplicate ids, an empty registry, or any error-severity audit
    /// finding. Warnings are logged and tolerated.
    pub fn build(self) -> Result<Registry> {
        if self.components.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut components = IndexMap::with_capacity(self.components.len());
        for descriptor in self.components {
            if components.contains_key(&descriptor.id) {
                return Err(RegistryError::DuplicateComponent(descriptor.id));
            }
            components.insert(descriptor.id.clone(), descriptor);
        }

        let registry = Registry { components };
        for finding in registry.audit() {
            match finding.severity {
                Severity::Error => {
                    return Err(RegistryError::Inconsistent {
                        component: finding.component,
                        message: format!("{}: {}", finding.key, finding.message),
                    });
                }
                Severity::Warning => tracing::warn!("registry audit: {}", finding),
                Severity::Info => tracing::trace!("registry audit: {}", finding),
            }
        }

        tracing::debug!("registry built with {} components", registry.len());
        Ok(registry)
    }
}

/// Immutable table of demoable components, in registration order
#[derive(Clone, Debug)]
pub struct Registry {
    components: IndexMap<String, ComponentDescriptor>,
}

impl Registry {
    /// Component ids in registration order
    pub fn component_ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Look up a descriptor; unknown ids are a normal outcome
    pub fn descriptor(&self, id: &str) -> Option<&ComponentDescriptor> {
        self.components.get(id)
    }

    /// Deep copy of a component's defaults
    pub fn clone_defaults(&self, id: &str) -> Option<PropertyBag> {
        self.descriptor(id).map(|d| d.defaults.clone())
    }

    pub fn derived_slot(&self, id: &str) -> Option<&DerivedSlot> {
        self.descriptor(id).and_then(|d| d.derived.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.values()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Audit every descriptor, in registration order
    pub fn audit(&self) -> Vec<AuditFinding> {
        self.iter().flat_map(ComponentDescriptor::audit).collect()
    }
}
