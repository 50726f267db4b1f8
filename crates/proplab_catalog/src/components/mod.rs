//! Built-in component descriptors
//!
//! Each component follows a consistent pattern:
//! - A constructor function returning a fresh `ComponentDescriptor`
//! - Defaults first, then the editable schema, then the overlay slot (if any)
//! - A text widget from [`crate::widgets`] for the live preview

pub mod actions;
pub mod collections;
pub mod display;
pub mod inputs;
pub mod layout;

pub use actions::{button, button_group, floating_action_button};
pub use collections::{data, tree_view};
pub use display::{alert, animated_text, avatar, badge};
pub use inputs::{input, slider, switch};
pub use layout::{card, container, tabs};
