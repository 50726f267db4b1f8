//! Editable-property schema
//!
//! A [`PropertyDescriptor`] tells the control generator how a property is
//! edited: which kind of control, its label and group, and optionally an
//! [`Applicability`] predicate that hides the control unless a sibling
//! property has a matching value.
//!
//! ```rust
//! use proplab_core::schema::PropertyDescriptor;
//!
//! let speed = PropertyDescriptor::number("Typing Speed")
//!     .group("Animation")
//!     .range(10.0, 200.0, 10.0)
//!     .when_equals("animation", "typewriter");
//! assert!(speed.applies_when.is_some());
//! ```

use indexmap::IndexMap;

use crate::bag::{PropPath, PropertyBag};
use crate::value::{format_number, PropValue};

/// Default display group for descriptors that do not set one
pub const DEFAULT_GROUP: &str = "General";

/// Kind of control a property is edited with
#[derive(Clone, Debug, PartialEq)]
pub enum PropKind {
    Boolean,
    Enum {
        /// Allowed values, in display order. May contain `Unset`.
        options: Vec<PropValue>,
        /// Display label per option key; falls back to the key itself
        option_labels: IndexMap<String, String>,
        /// Whether the property holds a list of selected options
        multiple: bool,
    },
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Text {
        placeholder: Option<String>,
    },
}

impl PropKind {
    pub fn name(&self) -> &'static str {
        match self {
            PropKind::Boolean => "boolean",
            PropKind::Enum { .. } => "enum",
            PropKind::Number { .. } => "number",
            PropKind::Text { .. } => "text",
        }
    }
}

/// Condition checked against the current value of a sibling property
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Equals(PropValue),
    OneOf(Vec<PropValue>),
    IsTruthy,
}

/// Applicability predicate: the property is only editable when `key`
/// satisfies `condition`
#[derive(Clone, Debug, PartialEq)]
pub struct Applicability {
    pub key: PropPath,
    pub condition: Condition,
}

impl Applicability {
    pub fn evaluate(&self, bag: &PropertyBag) -> bool {
        let current = bag.get_path(&self.key).unwrap_or(&PropValue::Unset);
        match &self.condition {
            Condition::Equals(expected) => current == expected,
            Condition::OneOf(candidates) => candidates.iter().any(|c| c == current),
            Condition::IsTruthy => current.is_truthy(),
        }
    }
}

/// How one property is edited
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDescriptor {
    pub label: String,
    pub group: String,
    pub kind: PropKind,
    pub applies_when: Option<Applicability>,
}

impl PropertyDescriptor {
    fn with_kind(label: impl Into<String>, kind: PropKind) -> Self {
        Self {
            label: label.into(),
            group: DEFAULT_GROUP.to_string(),
            kind,
            applies_when: None,
        }
    }

    pub fn boolean(label: impl Into<String>) -> Self {
        Self::with_kind(label, PropKind::Boolean)
    }

    pub fn choice<V, I>(label: impl Into<String>, options: I) -> Self
    where
        V: Into<PropValue>,
        I: IntoIterator<Item = V>,
    {
        Self::with_kind(
            label,
            PropKind::Enum {
                options: options.into_iter().map(Into::into).collect(),
                option_labels: IndexMap::new(),
                multiple: false,
            },
        )
    }

    pub fn number(label: impl Into<String>) -> Self {
        Self::with_kind(
            label,
            PropKind::Number {
                min: None,
                max: None,
                step: None,
            },
        )
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::with_kind(label, PropKind::Text { placeholder: None })
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Display labels for enum options, keyed by option key
    /// (see [`option_key`]; `Unset` is keyed `"null"`)
    pub fn labels<K, L, I>(mut self, labels: I) -> Self
    where
        K: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = (K, L)>,
    {
        if let PropKind::Enum { option_labels, .. } = &mut self.kind {
            option_labels.extend(labels.into_iter().map(|(k, l)| (k.into(), l.into())));
        }
        self
    }

    /// Mark an enum property as multi-valued
    pub fn multiple(mut self) -> Self {
        if let PropKind::Enum { multiple, .. } = &mut self.kind {
            *multiple = true;
        }
        self
    }

    pub fn range(mut self, lo: f64, hi: f64, increment: f64) -> Self {
        if let PropKind::Number { min, max, step } = &mut self.kind {
            *min = Some(lo);
            *max = Some(hi);
            *step = Some(increment);
        }
        self
    }

    pub fn placeholder(mut self, hint: impl Into<String>) -> Self {
        if let PropKind::Text { placeholder } = &mut self.kind {
            *placeholder = Some(hint.into());
        }
        self
    }

    pub fn when_equals(mut self, key: impl Into<PropPath>, value: impl Into<PropValue>) -> Self {
        self.applies_when = Some(Applicability {
            key: key.into(),
            condition: Condition::Equals(value.into()),
        });
        self
    }

    pub fn when_one_of<V, I>(mut self, key: impl Into<PropPath>, values: I) -> Self
    where
        V: Into<PropValue>,
        I: IntoIterator<Item = V>,
    {
        self.applies_when = Some(Applicability {
            key: key.into(),
            condition: Condition::OneOf(values.into_iter().map(Into::into).collect()),
        });
        self
    }

    pub fn when_truthy(mut self, key: impl Into<PropPath>) -> Self {
        self.applies_when = Some(Applicability {
            key: key.into(),
            condition: Condition::IsTruthy,
        });
        self
    }

    /// Whether a control should be shown for the current bag
    pub fn applies(&self, bag: &PropertyBag) -> bool {
        self.applies_when
            .as_ref()
            .map_or(true, |predicate| predicate.evaluate(bag))
    }

    /// Display label for an enum option
    pub fn option_label(&self, option: &PropValue) -> String {
        let key = option_key(option);
        match &self.kind {
            PropKind::Enum { option_labels, .. } => {
                option_labels.get(&key).cloned().unwrap_or(key)
            }
            _ => key,
        }
    }
}

/// String key for an option value, as carried by string-based UI controls.
///
/// `Unset` maps to the literal `"null"`.
pub fn option_key(option: &PropValue) -> String {
    match option {
        PropValue::Unset => "null".to_string(),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Num(n) => format_number(*n),
        PropValue::Str(s) => s.clone(),
        other => other.kind_name().to_string(),
    }
}
