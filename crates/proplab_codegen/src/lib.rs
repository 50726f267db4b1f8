//! Proplab Code Preview
//!
//! Deterministic, copy-pasteable JSX-style declarations of a configured
//! component.
//!
//! - **Attributes**: `true` renders as the bare name, `false` as
//!   `name={false}`, strings quoted, numbers braced, lists and objects as
//!   braced JSON; unset values are omitted
//! - **Structural keys**: children, collections and callbacks never render as
//!   plain attributes; per-component [`StructuralStrategy`]s render them in
//!   bounded form
//! - **Overlays**: rendered as a block with a content placeholder
//!
//! # Example
//!
//! ```rust
//! use proplab_codegen::CodeSerializer;
//!
//! let registry = proplab_catalog::builtin_registry().unwrap();
//! let mut props = registry.clone_defaults("Button").unwrap();
//! props.insert("disabled", true);
//!
//! let code = CodeSerializer::new(&registry).serialize("Button", &props);
//! assert!(code.starts_with("<Button\n"));
//! assert!(code.contains("\n  disabled\n"));
//! ```

pub mod format;
pub mod serializer;
pub mod structural;

pub use format::{Attribute, Layout};
pub use serializer::{CodeSerializer, SerializerOptions, DEFAULT_CONTENT_PLACEHOLDER};
pub use structural::{
    builtin_strategies, BoundedList, BoundedTree, FixedChildren, StrategyMap, Structural,
    StructuralStrategy,
};
