//! Collection components: Data, TreeView

use proplab_core::{ComponentDescriptor, Opaque, PropValue, PropertyDescriptor};

use crate::fixtures::{file_tree, sample_columns, sample_rows};
use crate::options::{strs, triggers};
use crate::overlay::{data_overlay, slot, tree_overlay};
use crate::widgets;

pub fn data() -> ComponentDescriptor {
    ComponentDescriptor::new("Data", widgets::data())
        .description("Tabular or list display of records")
        .default("data", sample_rows())
        .default("columns", sample_columns())
        .default("variant", "table")
        .default("striped", true)
        .default("dense", false)
        .default("sortable", true)
        .default("selectable", false)
        .default("pageSize", 10)
        .default("interactive", false)
        .default("trigger", "contextmenu")
        .default("overlay", PropValue::Unset)
        .prop(
            "variant",
            PropertyDescriptor::choice("Variant", strs(&["table", "list", "grid"]))
                .group("Appearance"),
        )
        .prop("striped", PropertyDescriptor::boolean("Striped Rows").group("Appearance"))
        .prop("dense", PropertyDescriptor::boolean("Dense").group("Appearance"))
        .prop("sortable", PropertyDescriptor::boolean("Sortable").group("Behavior"))
        .prop("selectable", PropertyDescriptor::boolean("Selectable").group("Behavior"))
        .prop(
            "pageSize",
            PropertyDescriptor::number("Page Size")
                .group("Behavior")
                .range(5.0, 100.0, 5.0),
        )
        .prop(
            "interactive",
            PropertyDescriptor::boolean("Row Menu").group("Overlay"),
        )
        .prop(
            "trigger",
            PropertyDescriptor::choice("Trigger", triggers())
                .group("Overlay")
                .when_truthy("interactive"),
        )
        .derived(slot(data_overlay))
}

pub fn tree_view() -> ComponentDescriptor {
    ComponentDescriptor::new("TreeView", widgets::tree_view())
        .description("Hierarchical list with expandable branches")
        .default("items", file_tree())
        .default("multiSelect", false)
        .default("expandAll", false)
        .default("selectableTypes", PropValue::list(["file"]))
        .default("indent", 16)
        .default("onSelect", Opaque::new("onSelect", ()))
        .default("interactive", false)
        .default("trigger", "contextmenu")
        .default("overlay", PropValue::Unset)
        .prop("multiSelect", PropertyDescriptor::boolean("Multi Select").group("Behavior"))
        .prop("expandAll", PropertyDescriptor::boolean("Expand All").group("Behavior"))
        .prop(
            "selectableTypes",
            PropertyDescriptor::choice("Selectable Types", strs(&["folder", "file"]))
                .group("Behavior")
                .multiple(),
        )
        .prop(
            "indent",
            PropertyDescriptor::number("Indent")
                .group("Appearance")
                .range(0.0, 48.0, 4.0),
        )
        .prop(
            "interactive",
            PropertyDescriptor::boolean("Node Menu").group("Overlay"),
        )
        .prop(
            "trigger",
            PropertyDescriptor::choice("Trigger", triggers())
                .group("Overlay")
                .when_truthy("interactive"),
        )
        .derived(slot(tree_overlay))
}
