//! Action components: Button, ButtonGroup, FloatingActionButton

use proplab_core::{ComponentDescriptor, PropValue, PropertyDescriptor};

use crate::options::{button_variants, colors, orientations, sizes, strs, triggers};
use crate::overlay::{button_overlay, fab_overlay, slot};
use crate::widgets;

pub fn button() -> ComponentDescriptor {
    ComponentDescriptor::new("Button", widgets::button())
        .description("Clickable button with variants, colors and an optional overlay")
        .default("variant", "contained")
        .default("color", "primary")
        .default("size", "medium")
        .default("disabled", false)
        .default("fullWidth", false)
        .default("children", "Click Me")
        .default("interactive", false)
        .default("trigger", "click")
        .default("overlay", PropValue::Unset)
        .prop(
            "variant",
            PropertyDescriptor::choice("Variant", button_variants()).group("Appearance"),
        )
        .prop("color", PropertyDescriptor::choice("Color", colors()).group("Appearance"))
        .prop("size", PropertyDescriptor::choice("Size", sizes()).group("Appearance"))
        .prop("disabled", PropertyDescriptor::boolean("Disabled").group("State"))
        .prop("fullWidth", PropertyDescriptor::boolean("Full Width").group("Layout"))
        .prop(
            "children",
            PropertyDescriptor::text("Label")
                .group("Content")
                .placeholder("Button text"),
        )
        .prop(
            "interactive",
            PropertyDescriptor::boolean("Attach Overlay").group("Overlay"),
        )
        .prop(
            "trigger",
            PropertyDescriptor::choice("Trigger", triggers())
                .group("Overlay")
                .labels([("contextmenu", "Right click")])
                .when_truthy("interactive"),
        )
        .derived(slot(button_overlay))
}

pub fn button_group() -> ComponentDescriptor {
    ComponentDescriptor::new("ButtonGroup", widgets::button_group())
        .description("Row or column of related buttons")
        .default("orientation", "horizontal")
        .default("variant", "outlined")
        .default("size", "medium")
        .default("color", "primary")
        .default("disabled", false)
        .prop(
            "orientation",
            PropertyDescriptor::choice("Orientation", orientations()).group("Layout"),
        )
        .prop(
            "variant",
            PropertyDescriptor::choice("Variant", button_variants()).group("Appearance"),
        )
        .prop("size", PropertyDescriptor::choice("Size", sizes()).group("Appearance"))
        .prop("color", PropertyDescriptor::choice("Color", colors()).group("Appearance"))
        .prop("disabled", PropertyDescriptor::boolean("Disabled").group("State"))
}

pub fn floating_action_button() -> ComponentDescriptor {
    ComponentDescriptor::new("FloatingActionButton", widgets::floating_action_button())
        .description("Floating primary action with a quick-actions menu")
        .default("icon", "add")
        .default("position", "bottom-right")
        .default("color", "primary")
        .default("size", "large")
        .default("extended", false)
        .default("label", "Create")
        .default("interactive", true)
        .default("trigger", "click")
        .default("overlay", fab_overlay("click"))
        .prop(
            "icon",
            PropertyDescriptor::choice("Icon", strs(&["add", "edit", "share", "favorite"]))
                .group("Content"),
        )
        .prop(
            "position",
            PropertyDescriptor::choice(
                "Position",
                strs(&["bottom-right", "bottom-left", "top-right", "top-left"]),
            )
            .group("Layout"),
        )
        .prop("color", PropertyDescriptor::choice("Color", colors()).group("Appearance"))
        .prop("size", PropertyDescriptor::choice("Size", sizes()).group("Appearance"))
        .prop("extended", PropertyDescriptor::boolean("Extended").group("Content"))
        .prop(
            "label",
            PropertyDescriptor::text("Label")
                .group("Content")
                .placeholder("Action label")
                .when_truthy("extended"),
        )
        .prop(
            "interactive",
            PropertyDescriptor::boolean("Attach Overlay").group("Overlay"),
        )
        .prop(
            "trigger",
            PropertyDescriptor::choice("Trigger", triggers())
                .group("Overlay")
                .when_truthy("interactive"),
        )
        .derived(slot(fab_overlay))
}
