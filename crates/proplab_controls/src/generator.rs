//! Property control generator
//!
//! For every schema entry of the selected component, the generator decides
//! whether a control applies to the current bag and, if so, produces a
//! [`BoundControl`]: the control's widget description, its current value and
//! a change handler that writes edits back into the bag.
//!
//! # Example
//!
//! ```ignore
//! use proplab_controls::{ControlGenerator, ControlInput};
//!
//! let registry = proplab_catalog::builtin_registry()?;
//! let generator = ControlGenerator::new(&registry);
//! let mut bag = registry.clone_defaults("Button").unwrap();
//!
//! let controls = generator.generate("Button", &bag);
//! let disabled = controls.iter().find(|c| c.key.as_str() == "disabled").unwrap();
//! disabled.change(&mut bag, ControlInput::Checked(true));
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use proplab_core::{
    DerivedSlot, PropKind, PropPath, PropValue, PropertyBag, PropertyDescriptor, Registry,
};

use crate::input::{coerce, selected_keys, ControlInput};

/// Trigger used when an overlay is attached before any trigger was chosen
pub const DEFAULT_TRIGGER: &str = "click";

/// One selectable option of a choice control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Transport key (`"null"` for the unset option)
    pub key: String,
    pub label: String,
}

/// Which control to draw
#[derive(Clone, Debug, PartialEq)]
pub enum ControlWidget {
    Toggle,
    Choice {
        options: Vec<ChoiceOption>,
        multiple: bool,
    },
    /// Bounds are hints for the UI; edits outside them are stored as-is
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Text {
        placeholder: Option<String>,
    },
}

type ChangeHandler = Arc<dyn Fn(&mut PropertyBag, ControlInput) + Send + Sync>;

/// A control bound to one property of the current bag
#[derive(Clone)]
pub struct BoundControl {
    pub key: PropPath,
    pub label: String,
    pub group: String,
    /// Value at generation time
    pub value: PropValue,
    pub widget: ControlWidget,
    on_change: ChangeHandler,
}

impl BoundControl {
    /// Apply an edit to `bag`.
    ///
    /// The bag is fully updated, derived overlay included, before this
    /// returns.
    pub fn change(&self, bag: &mut PropertyBag, input: ControlInput) {
        (self.on_change)(bag, input)
    }

    /// Option keys matching the current value (choice controls)
    pub fn selected_keys(&self) -> Vec<String> {
        selected_keys(&self.value)
    }
}

impl fmt::Debug for BoundControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundControl")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("group", &self.group)
            .field("value", &self.value)
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}

/// Builds bound controls from a registry's schemas
#[derive(Clone, Copy, Debug)]
pub struct ControlGenerator<'r> {
    registry: &'r Registry,
}

impl<'r> ControlGenerator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Controls for component `id`, in schema order.
    ///
    /// Unknown ids yield no controls. Properties whose applicability
    /// predicate fails against `bag` are left out entirely.
    pub fn generate(&self, id: &str, bag: &PropertyBag) -> Vec<BoundControl> {
        let Some(descriptor) = self.registry.descriptor(id) else {
            tracing::debug!("no controls for unknown component '{}'", id);
            return Vec::new();
        };

        descriptor
            .schema
            .iter()
            .filter(|(_, property)| property.applies(bag))
            .map(|(key, property)| bind(key, property, descriptor.derived.as_ref(), bag))
            .collect()
    }
}

fn bind(
    key: &str,
    property: &PropertyDescriptor,
    slot: Option<&DerivedSlot>,
    bag: &PropertyBag,
) -> BoundControl {
    let path = PropPath::new(key);
    let value = bag.get_path(&path).cloned().unwrap_or_default();

    let widget = match &property.kind {
        PropKind::Boolean => ControlWidget::Toggle,
        PropKind::Enum {
            options, multiple, ..
        } => ControlWidget::Choice {
            options: options
                .iter()
                .map(|option| ChoiceOption {
                    key: proplab_core::option_key(option),
                    label: property.option_label(option),
                })
                .collect(),
            multiple: *multiple,
        },
        PropKind::Number { min, max, step } => ControlWidget::Number {
            min: *min,
            max: *max,
            step: *step,
        },
        PropKind::Text { placeholder } => ControlWidget::Text {
            placeholder: placeholder.clone(),
        },
    };

    let on_change: ChangeHandler = {
        let path = path.clone();
        let kind = property.kind.clone();
        let slot = slot.cloned();
        Arc::new(move |bag: &mut PropertyBag, input: ControlInput| {
            apply_change(&path, &kind, slot.as_ref(), bag, input)
        })
    };

    BoundControl {
        key: path,
        label: property.label.clone(),
        group: property.group.clone(),
        value,
        widget,
        on_change,
    }
}

fn apply_change(
    path: &PropPath,
    kind: &PropKind,
    slot: Option<&DerivedSlot>,
    bag: &mut PropertyBag,
    input: ControlInput,
) {
    let input_kind = input.kind_name();
    let Some(value) = coerce(kind, input) else {
        tracing::warn!(
            "ignoring {} input for {} property '{}'",
            input_kind,
            kind.name(),
            path
        );
        return;
    };

    tracing::trace!("set {} = {:?}", path, value);
    bag.set_path(path, value);

    if let Some(slot) = slot {
        refresh_overlay(slot, path, bag);
    }
}

/// Keep the derived overlay in step with its governing properties.
///
/// A trigger change rebuilds the overlay from the factory, replacing the old
/// one wholesale; it is a no-op when no overlay is attached. Toggling the
/// slot attaches a freshly built overlay or detaches it.
fn refresh_overlay(slot: &DerivedSlot, path: &PropPath, bag: &mut PropertyBag) {
    let key = path.as_str();

    if key == slot.trigger_key {
        let attached = bag
            .get(&slot.config_key)
            .and_then(PropValue::as_overlay)
            .is_some();
        if !attached {
            return;
        }
        let trigger = current_trigger(slot, bag);
        tracing::debug!("rebuilding '{}' for trigger '{}'", slot.config_key, trigger);
        let rebuilt = slot.build(&trigger);
        bag.insert(slot.config_key.clone(), rebuilt);
    } else if key == slot.toggle_key {
        let enabled = bag.get(&slot.toggle_key).is_some_and(PropValue::is_truthy);
        if enabled {
            let trigger = current_trigger(slot, bag);
            tracing::debug!("attaching '{}' with trigger '{}'", slot.config_key, trigger);
            let attached = slot.build(&trigger);
            bag.insert(slot.config_key.clone(), attached);
        } else {
            tracing::debug!("detaching '{}'", slot.config_key);
            bag.insert(slot.config_key.clone(), PropValue::Unset);
        }
    }
}

fn current_trigger(slot: &DerivedSlot, bag: &PropertyBag) -> String {
    match bag.get(&slot.trigger_key) {
        Some(PropValue::Str(trigger)) => trigger.clone(),
        Some(PropValue::Unset) | None => DEFAULT_TRIGGER.to_string(),
        Some(other) => proplab_core::option_key(other),
    }
}

/// Group controls by display group, groups in first-seen order
pub fn group_controls(controls: &[BoundControl]) -> IndexMap<&str, Vec<&BoundControl>> {
    let mut groups: IndexMap<&str, Vec<&BoundControl>> = IndexMap::new();
    for control in controls {
        groups.entry(control.group.as_str()).or_default().push(control);
    }
    groups
}
