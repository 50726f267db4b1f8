//! Tagged property values
//!
//! Every entry of a [`PropertyBag`](crate::bag::PropertyBag) holds a
//! [`PropValue`]. The variant set is closed so that consumers (the control
//! generator, the code serializer) can match exhaustively instead of probing
//! runtime types:
//!
//! - `Unset` - the null/undefined sentinel ("inherit", "not configured")
//! - `Bool`, `Num`, `Str` - primitives
//! - `List`, `Nested` - collections and nested configuration objects
//! - `Overlay` - a derived overlay configuration, see [`crate::overlay`]
//! - `Opaque` - callbacks and renderables that cannot be printed as data

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::overlay::OverlayConfig;

/// Insertion-ordered map of property values
pub type PropMap = IndexMap<String, PropValue>;

/// A single property value
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PropValue {
    /// No value; omitted from generated code
    #[default]
    Unset,
    Bool(bool),
    Num(f64),
    Str(String),
    List(Vec<PropValue>),
    Nested(PropMap),
    /// Derived overlay configuration, replaced wholesale on rebuild
    Overlay(Arc<OverlayConfig>),
    /// Callback or renderable handle
    Opaque(Opaque),
}

impl PropValue {
    /// Build a nested value from `(key, value)` pairs, keeping their order
    pub fn nested<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<PropValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        PropValue::Nested(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a list value
    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<PropValue>,
        I: IntoIterator<Item = V>,
    {
        PropValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, PropValue::Unset)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            PropValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&PropMap> {
        match self {
            PropValue::Nested(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_overlay(&self) -> Option<&Arc<OverlayConfig>> {
        match self {
            PropValue::Overlay(config) => Some(config),
            _ => None,
        }
    }

    /// Truthiness used by applicability predicates
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Unset => false,
            PropValue::Bool(b) => *b,
            PropValue::Num(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Str(s) => !s.is_empty(),
            PropValue::List(_)
            | PropValue::Nested(_)
            | PropValue::Overlay(_)
            | PropValue::Opaque(_) => true,
        }
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropValue::Unset => "unset",
            PropValue::Bool(_) => "bool",
            PropValue::Num(_) => "number",
            PropValue::Str(_) => "string",
            PropValue::List(_) => "list",
            PropValue::Nested(_) => "object",
            PropValue::Overlay(_) => "overlay",
            PropValue::Opaque(_) => "opaque",
        }
    }

    /// Convert into a JSON value.
    ///
    /// Integral numbers become JSON integers, `Unset` and non-finite numbers
    /// become `null`, opaque handles become a marked placeholder string.
    /// Object keys come out sorted, so equal values give equal JSON text.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|err| {
            tracing::warn!("unserializable {} value: {}", self.kind_name(), err);
            serde_json::Value::Null
        })
    }
}

/// Format a number the way a source literal would read.
///
/// Integral values print without a fractional part (`3`, not `3.0`);
/// integers beyond the exactly representable range use exponent form.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n.fract() == 0.0 {
        if n.abs() < MAX_SAFE_INTEGER {
            // -0.0 prints as 0
            return format!("{}", n as i64);
        }
        return format!("{:e}", n);
    }
    format!("{}", n)
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Unset => serializer.serialize_none(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Num(n) => {
                if !n.is_finite() {
                    serializer.serialize_none()
                } else if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            PropValue::Str(s) => serializer.serialize_str(s),
            PropValue::List(items) => items.serialize(serializer),
            PropValue::Nested(map) => {
                // Map equality ignores order; the output must too
                let mut entries: Vec<(&String, &PropValue)> = map.iter().collect();
                entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            PropValue::Overlay(config) => {
                let mut out = serializer.serialize_map(Some(4))?;
                out.serialize_entry("trigger", &config.trigger)?;
                out.serialize_entry("variant", &config.variant)?;
                out.serialize_entry("position", &config.position)?;
                out.serialize_entry("content", &config.content.placeholder())?;
                out.end()
            }
            PropValue::Opaque(handle) => serializer.serialize_str(&handle.placeholder()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Num(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Num(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        PropValue::List(value)
    }
}

impl From<PropMap> for PropValue {
    fn from(value: PropMap) -> Self {
        PropValue::Nested(value)
    }
}

impl From<OverlayConfig> for PropValue {
    fn from(value: OverlayConfig) -> Self {
        PropValue::Overlay(Arc::new(value))
    }
}

impl From<Opaque> for PropValue {
    fn from(value: Opaque) -> Self {
        PropValue::Opaque(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PropValue::Unset)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Opaque handles
// ─────────────────────────────────────────────────────────────────────────────

type RenderFn = dyn Fn() -> String + Send + Sync;

/// Stored inside an [`Opaque`] created with [`Opaque::renderable`]
struct Renderable(Box<RenderFn>);

/// A callback or renderable that has no printable data representation.
///
/// Equality is handle identity: two opaque values are equal only if they
/// share the same allocation.
#[derive(Clone)]
pub struct Opaque {
    label: Arc<str>,
    handle: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    /// Wrap an arbitrary value
    pub fn new<T: Any + Send + Sync>(label: impl Into<String>, value: T) -> Self {
        Self {
            label: Arc::from(label.into()),
            handle: Arc::new(value),
        }
    }

    /// Wrap a content closure that renders to text
    pub fn renderable<F>(label: impl Into<String>, render: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::new(label, Renderable(Box::new(render)))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Render the handle if it was created with [`Opaque::renderable`]
    pub fn render(&self) -> Option<String> {
        self.handle
            .downcast_ref::<Renderable>()
            .map(|renderable| (renderable.0)())
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.handle.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }

    /// Comment-style marker used wherever the handle would otherwise be
    /// printed, e.g. `/* onSelect */`
    pub fn placeholder(&self) -> String {
        format!("/* {} */", self.label)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-12.5), "-12.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_beyond_safe_integers() {
        assert_eq!(format_number(9_007_199_254_740_990.0), "9007199254740990");
        assert_eq!(format_number(1e21), "1e21");
        assert_eq!(format_number(-1e21), "-1e21");
        assert_eq!(format_number(9_007_199_254_740_992.0), "9.007199254740992e15");
    }

    #[test]
    fn test_to_json_compact_integers() {
        let value = PropValue::nested([
            ("id", PropValue::from(1)),
            ("ratio", PropValue::from(0.5)),
            ("name", PropValue::from("Alice")),
            ("tag", PropValue::Unset),
        ]);
        assert_eq!(
            value.to_json().to_string(),
            r#"{"id":1,"name":"Alice","ratio":0.5,"tag":null}"#
        );
    }

    #[test]
    fn test_to_json_ignores_insertion_order() {
        let forward = PropValue::nested([("splitBy", "words"), ("direction", "top")]);
        let backward = PropValue::nested([("direction", "top"), ("splitBy", "words")]);
        assert_eq!(forward, backward);
        assert_eq!(forward.to_json().to_string(), backward.to_json().to_string());

        let deep = PropValue::list([PropValue::nested([
            ("b", PropValue::nested([("y", 2), ("x", 1)])),
            ("a", PropValue::from(0)),
        ])]);
        assert_eq!(deep.to_json().to_string(), r#"[{"a":0,"b":{"x":1,"y":2}}]"#);
    }

    #[test]
    fn test_opaque_equality_is_identity() {
        let a = Opaque::renderable("content", || "hi".to_string());
        let b = a.clone();
        let c = Opaque::renderable("content", || "hi".to_string());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.render().as_deref(), Some("hi"));
        assert_eq!(Opaque::new("handler", 5u32).render(), None);
        assert_eq!(a.placeholder(), "/* content */");
    }

    #[test]
    fn test_opaque_serializes_as_placeholder() {
        let value = PropValue::list([PropValue::Opaque(Opaque::new("onSelect", ()))]);
        assert_eq!(value.to_json().to_string(), r#"["/* onSelect */"]"#);
    }

    #[test]
    fn test_truthiness() {
        assert!(!PropValue::Unset.is_truthy());
        assert!(!PropValue::from("").is_truthy());
        assert!(PropValue::from("x").is_truthy());
        assert!(!PropValue::from(0).is_truthy());
        assert!(PropValue::list(Vec::<PropValue>::new()).is_truthy());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(PropValue::from(None::<&str>), PropValue::Unset);
        assert_eq!(PropValue::from(Some("a")), PropValue::from("a"));
    }
}
