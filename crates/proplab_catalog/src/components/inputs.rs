//! Input components: Switch, Slider, Input

use proplab_core::{ComponentDescriptor, PropValue, PropertyDescriptor};

use crate::options::{colors, orientations, strs};
use crate::widgets;

pub fn switch() -> ComponentDescriptor {
    ComponentDescriptor::new("Switch", widgets::switch())
        .description("On/off toggle")
        .default("checked", false)
        .default("disabled", false)
        .default("label", "Enable notifications")
        .default("size", "medium")
        .default("color", "primary")
        .prop("checked", PropertyDescriptor::boolean("Checked").group("State"))
        .prop("disabled", PropertyDescriptor::boolean("Disabled").group("State"))
        .prop(
            "label",
            PropertyDescriptor::text("Label")
                .group("Content")
                .placeholder("Switch label"),
        )
        .prop(
            "size",
            PropertyDescriptor::choice("Size", strs(&["small", "medium"])).group("Appearance"),
        )
        .prop("color", PropertyDescriptor::choice("Color", colors()).group("Appearance"))
}

pub fn slider() -> ComponentDescriptor {
    ComponentDescriptor::new("Slider", widgets::slider())
        .description("Pick a value from a range")
        .default("value", 40)
        .default("min", 0)
        .default("max", 100)
        .default("step", 1)
        .default("orientation", "horizontal")
        .default("showValue", true)
        .default("marks", false)
        .default("disabled", false)
        .prop(
            "value",
            PropertyDescriptor::number("Value")
                .group("State")
                .range(0.0, 100.0, 1.0),
        )
        .prop("min", PropertyDescriptor::number("Minimum").group("Range"))
        .prop("max", PropertyDescriptor::number("Maximum").group("Range"))
        .prop(
            "step",
            PropertyDescriptor::number("Step")
                .group("Range")
                .range(0.1, 50.0, 0.1),
        )
        .prop(
            "orientation",
            PropertyDescriptor::choice("Orientation", orientations()).group("Layout"),
        )
        .prop("showValue", PropertyDescriptor::boolean("Show Value").group("Appearance"))
        .prop("marks", PropertyDescriptor::boolean("Marks").group("Appearance"))
        .prop("disabled", PropertyDescriptor::boolean("Disabled").group("State"))
}

pub fn input() -> ComponentDescriptor {
    ComponentDescriptor::new("Input", widgets::input())
        .description("Single-line text field")
        .default("label", "Email")
        .default("value", "")
        .default("placeholder", "you@example.com")
        .default("type", "email")
        .default("helperText", PropValue::Unset)
        .default("error", false)
        .default("disabled", false)
        .default("clearable", false)
        .prop(
            "label",
            PropertyDescriptor::text("Label")
                .group("Content")
                .placeholder("Field label"),
        )
        .prop(
            "value",
            PropertyDescriptor::text("Value")
                .group("State")
                .placeholder("Current value"),
        )
        .prop(
            "placeholder",
            PropertyDescriptor::text("Placeholder").group("Content"),
        )
        .prop(
            "type",
            PropertyDescriptor::choice("Type", strs(&["text", "password", "email", "number"]))
                .group("Behavior"),
        )
        .prop(
            "helperText",
            PropertyDescriptor::text("Helper Text")
                .group("Content")
                .placeholder("Shown below the field"),
        )
        .prop("error", PropertyDescriptor::boolean("Error").group("State"))
        .prop("disabled", PropertyDescriptor::boolean("Disabled").group("State"))
        .prop("clearable", PropertyDescriptor::boolean("Clearable").group("Behavior"))
}
