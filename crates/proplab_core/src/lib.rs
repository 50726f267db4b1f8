//! Proplab Core
//!
//! Data model shared by every Proplab crate:
//!
//! - **Values**: [`PropValue`], a closed tagged value for component properties
//! - **Property Bags**: [`PropertyBag`], the live state of one component, with
//!   dotted-path reads and merging writes
//! - **Schema**: [`PropertyDescriptor`], how a property is edited and when it
//!   applies
//! - **Overlays**: [`OverlayConfig`] and [`DerivedSlot`], configurations that are
//!   rebuilt rather than patched when their trigger changes
//! - **Registry**: [`Registry`], the immutable table of demoable components
//!
//! # Example
//!
//! ```rust
//! use proplab_core::prelude::*;
//!
//! let mut bag = PropertyBag::new().with(
//!     "animationConfig",
//!     PropValue::nested([("splitBy", "words"), ("direction", "top")]),
//! );
//! bag.set_path(&"animationConfig.direction".into(), "bottom".into());
//!
//! assert_eq!(
//!     bag.get("animationConfig"),
//!     Some(&PropValue::nested([("splitBy", "words"), ("direction", "bottom")])),
//! );
//! ```

pub mod bag;
pub mod error;
pub mod overlay;
pub mod registry;
pub mod schema;
pub mod value;

pub use bag::{PropPath, PropertyBag};
pub use error::{RegistryError, Result};
pub use overlay::{DerivedFactory, DerivedSlot, OverlayConfig};
pub use registry::{
    is_structural_key, AuditFinding, ComponentDescriptor, Registry, RegistryBuilder, Severity,
    Widget, WidgetRef, STRUCTURAL_KEYS,
};
pub use schema::{option_key, Applicability, Condition, PropKind, PropertyDescriptor};
pub use value::{format_number, Opaque, PropMap, PropValue};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::bag::{PropPath, PropertyBag};
    pub use crate::overlay::{DerivedFactory, DerivedSlot, OverlayConfig};
    pub use crate::registry::{ComponentDescriptor, Registry, RegistryBuilder, Widget, WidgetRef};
    pub use crate::schema::{PropKind, PropertyDescriptor};
    pub use crate::value::{Opaque, PropMap, PropValue};
}
