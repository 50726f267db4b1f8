//! Layout components: Card, Container, Tabs

use proplab_core::{ComponentDescriptor, PropValue, PropertyDescriptor};

use crate::options::{orientations, strs, triggers};
use crate::overlay::{card_overlay, container_overlay, slot};
use crate::widgets;

pub fn card() -> ComponentDescriptor {
    ComponentDescriptor::new("Card", widgets::card())
        .description("Surface grouping related content")
        .default("title", "Card Title")
        .default("subtitle", "Subtitle")
        .default("variant", "elevated")
        .default("elevation", 1)
        .default("children", "Card content goes here.")
        .default("interactive", false)
        .default("trigger", "hover")
        .default("overlay", PropValue::Unset)
        .prop(
            "title",
            PropertyDescriptor::text("Title")
                .group("Content")
                .placeholder("Card title"),
        )
        .prop(
            "subtitle",
            PropertyDescriptor::text("Subtitle")
                .group("Content")
                .placeholder("Optional subtitle"),
        )
        .prop(
            "variant",
            PropertyDescriptor::choice("Variant", strs(&["elevated", "outlined"]))
                .group("Appearance"),
        )
        .prop(
            "elevation",
            PropertyDescriptor::number("Elevation")
                .group("Appearance")
                .range(0.0, 24.0, 1.0)
                .when_equals("variant", "elevated"),
        )
        .prop("children", PropertyDescriptor::text("Body").group("Content"))
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
        .derived(slot(card_overlay))
}

pub fn container() -> ComponentDescriptor {
    let mut widths = strs(&["sm", "md", "lg", "xl"]);
    widths.push(PropValue::Unset);

    ComponentDescriptor::new("Container", widgets::container())
        .description("Centered, width-constrained wrapper")
        .default("maxWidth", "lg")
        .default("padding", 16)
        .default("centered", true)
        .default("children", "Container content")
        .default("interactive", false)
        .default("trigger", "contextmenu")
        .default("overlay", PropValue::Unset)
        .prop(
            "maxWidth",
            PropertyDescriptor::choice("Max Width", widths)
                .group("Layout")
                .labels([("null", "None (fluid)")]),
        )
        .prop(
            "padding",
            PropertyDescriptor::number("Padding")
                .group("Layout")
                .range(0.0, 64.0, 4.0),
        )
        .prop("centered", PropertyDescriptor::boolean("Centered").group("Layout"))
        .prop("children", PropertyDescriptor::text("Content").group("Content"))
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
        .derived(slot(container_overlay))
}

pub fn tabs() -> ComponentDescriptor {
    ComponentDescriptor::new("Tabs", widgets::tabs())
        .description("Switch between related views")
        .default("items", PropValue::list(["Overview", "Activity", "Settings"]))
        .default("variant", "line")
        .default("orientation", "horizontal")
        .default("activeIndex", 0)
        .default("fullWidth", false)
        .prop(
            "variant",
            PropertyDescriptor::choice("Variant", strs(&["line", "pills", "enclosed"]))
                .group("Appearance"),
        )
        .prop(
            "orientation",
            PropertyDescriptor::choice("Orientation", orientations()).group("Layout"),
        )
        .prop(
            "activeIndex",
            PropertyDescriptor::number("Active Tab")
                .group("State")
                .range(0.0, 2.0, 1.0),
        )
        .prop("fullWidth", PropertyDescriptor::boolean("Full Width").group("Layout"))
}
