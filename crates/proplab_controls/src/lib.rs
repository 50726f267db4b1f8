//! Proplab Control Generator
//!
//! Turns a component's property schema into bound editing controls:
//!
//! - **Generation**: [`ControlGenerator`] walks the schema, drops controls whose
//!   applicability predicate fails, and binds the rest to the current bag
//! - **Input**: [`ControlInput`] is what a UI control hands back; conversion
//!   into property values (option keys, lenient numbers) lives in [`input`]
//! - **Derived overlays**: editing a component's trigger rebuilds its overlay
//!   through the registry's factory instead of patching it

pub mod generator;
pub mod input;

pub use generator::{
    group_controls, BoundControl, ChoiceOption, ControlGenerator, ControlWidget, DEFAULT_TRIGGER,
};
pub use input::{coerce, decode_option, parse_number, ControlInput};
