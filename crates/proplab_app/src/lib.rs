//! Proplab Playground
//!
//! Ties the registry, control generator and code serializer into one editing
//! session. A host (the `proplab` CLI, or any UI shell) drives it:
//!
//! ```rust
//! use proplab_app::Playground;
//! use proplab_controls::ControlInput;
//!
//! let registry = proplab_catalog::builtin_registry().unwrap();
//! let mut playground = Playground::new(&registry);
//!
//! playground.select("Button");
//! playground.edit("disabled", ControlInput::Checked(true));
//!
//! assert!(playground.code().contains("\n  disabled\n"));
//! assert_eq!(playground.preview().unwrap().render(), "[ Click Me ] (disabled)");
//! ```
//!
//! Selecting a component always starts from a fresh copy of its defaults;
//! nothing carries over from the previous selection.

pub mod error;
pub mod playground;

pub use error::{PlaygroundError, Result};
pub use playground::{Playground, Preview};
