//! Display components: Badge, Avatar, Alert, AnimatedText

use proplab_core::{ComponentDescriptor, PropValue, PropertyDescriptor};

use crate::options::{colors, sizes, strs};
use crate::widgets;

pub fn badge() -> ComponentDescriptor {
    let mut themes = vec![PropValue::Unset];
    themes.extend(strs(&["light", "dark"]));

    ComponentDescriptor::new("Badge", widgets::badge())
        .description("Small count or status indicator")
        .default("content", "4")
        .default("color", "primary")
        .default("theme", PropValue::Unset)
        .default("max", 99)
        .default("dot", false)
        .default("invisible", false)
        .prop(
            "content",
            PropertyDescriptor::text("Content")
                .group("Content")
                .placeholder("Badge content"),
        )
        .prop("color", PropertyDescriptor::choice("Color", colors()).group("Appearance"))
        .prop(
            "theme",
            PropertyDescriptor::choice("Theme", themes)
                .group("Appearance")
                .labels([("null", "Inherit")]),
        )
        .prop(
            "max",
            PropertyDescriptor::number("Max Count")
                .group("Content")
                .range(1.0, 999.0, 1.0),
        )
        .prop("dot", PropertyDescriptor::boolean("Dot Only").group("Appearance"))
        .prop("invisible", PropertyDescriptor::boolean("Invisible").group("State"))
}

pub fn avatar() -> ComponentDescriptor {
    ComponentDescriptor::new("Avatar", widgets::avatar())
        .description("User picture with initials fallback")
        .default("alt", "Jane Doe")
        .default("src", PropValue::Unset)
        .default("size", "medium")
        .default("variant", "circular")
        .default("color", "secondary")
        .prop(
            "alt",
            PropertyDescriptor::text("Name")
                .group("Content")
                .placeholder("Full name"),
        )
        .prop(
            "src",
            PropertyDescriptor::text("Image URL")
                .group("Content")
                .placeholder("https://"),
        )
        .prop("size", PropertyDescriptor::choice("Size", sizes()).group("Appearance"))
        .prop(
            "variant",
            PropertyDescriptor::choice("Shape", strs(&["circular", "rounded", "square"]))
                .group("Appearance"),
        )
        .prop("color", PropertyDescriptor::choice("Color", colors()).group("Appearance"))
}

pub fn alert() -> ComponentDescriptor {
    ComponentDescriptor::new("Alert", widgets::alert())
        .description("Inline status message")
        .default("severity", "info")
        .default("variant", "standard")
        .default("title", "Heads up")
        .default("closable", false)
        .default("children", "This is an alert message.")
        .prop(
            "severity",
            PropertyDescriptor::choice("Severity", strs(&["info", "success", "warning", "error"]))
                .group("Appearance"),
        )
        .prop(
            "variant",
            PropertyDescriptor::choice("Variant", strs(&["standard", "filled", "outlined"]))
                .group("Appearance"),
        )
        .prop(
            "title",
            PropertyDescriptor::text("Title")
                .group("Content")
                .placeholder("Optional title"),
        )
        .prop(
            "children",
            PropertyDescriptor::text("Message").group("Content"),
        )
        .prop("closable", PropertyDescriptor::boolean("Closable").group("State"))
}

pub fn animated_text() -> ComponentDescriptor {
    ComponentDescriptor::new("AnimatedText", widgets::animated_text())
        .description("Text with entrance animations")
        .default("text", "Hello, playground!")
        .default("animation", "typewriter")
        .default("typingSpeed", 50)
        .default("cursor", true)
        .default("duration", 600)
        .default(
            "animationConfig",
            PropValue::nested([("splitBy", "words"), ("direction", "top")]),
        )
        .default("loop", false)
        .prop(
            "text",
            PropertyDescriptor::text("Text")
                .group("Content")
                .placeholder("Text to animate"),
        )
        .prop(
            "animation",
            PropertyDescriptor::choice(
                "Animation",
                strs(&["none", "fade", "slide", "typewriter", "split"]),
            )
            .group("Animation"),
        )
        .prop(
            "typingSpeed",
            PropertyDescriptor::number("Typing Speed")
                .group("Animation")
                .range(10.0, 200.0, 10.0)
                .when_equals("animation", "typewriter"),
        )
        .prop(
            "cursor",
            PropertyDescriptor::boolean("Blinking Cursor")
                .group("Animation")
                .when_equals("animation", "typewriter"),
        )
        .prop(
            "duration",
            PropertyDescriptor::number("Duration (ms)")
                .group("Animation")
                .range(100.0, 3000.0, 100.0)
                .when_one_of("animation", ["fade", "slide", "split"]),
        )
        .prop(
            "animationConfig.splitBy",
            PropertyDescriptor::choice("Split By", strs(&["words", "chars", "lines"]))
                .group("Animation")
                .when_equals("animation", "split"),
        )
        .prop(
            "animationConfig.direction",
            PropertyDescriptor::choice("Direction", strs(&["top", "bottom", "left", "right"]))
                .group("Animation")
                .when_equals("animation", "split"),
        )
        .prop("loop", PropertyDescriptor::boolean("Loop").group("Animation"))
}
