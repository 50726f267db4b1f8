//! Option lists shared by several components
//!
//! Each list is built on demand so descriptors never share storage.

use proplab_core::PropValue;

pub fn colors() -> Vec<PropValue> {
    strs(&["primary", "secondary", "success", "warning", "error", "info"])
}

pub fn sizes() -> Vec<PropValue> {
    strs(&["small", "medium", "large"])
}

pub fn triggers() -> Vec<PropValue> {
    strs(&["click", "hover", "contextmenu"])
}

pub fn orientations() -> Vec<PropValue> {
    strs(&["horizontal", "vertical"])
}

pub fn button_variants() -> Vec<PropValue> {
    strs(&["contained", "outlined", "text"])
}

pub(crate) fn strs(values: &[&str]) -> Vec<PropValue> {
    values.iter().map(|v| PropValue::from(*v)).collect()
}
