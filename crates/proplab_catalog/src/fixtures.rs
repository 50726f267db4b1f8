//! Sample payloads for collection components
//!
//! Built by functions rather than statics: every call returns an independent
//! value.

use proplab_core::PropValue;

/// Five sample user rows for the `Data` component
pub fn sample_rows() -> PropValue {
    let rows = [
        (1, "Alice Martin", "alice@example.com", "admin", "active"),
        (2, "Bruno Silva", "bruno@example.com", "editor", "active"),
        (3, "Chen Wei", "chen@example.com", "viewer", "invited"),
        (4, "Dana Kowalski", "dana@example.com", "editor", "suspended"),
        (5, "Emeka Obi", "emeka@example.com", "viewer", "active"),
    ];
    PropValue::list(rows.iter().map(|(id, name, email, role, status)| {
        PropValue::nested([
            ("id", PropValue::from(*id)),
            ("name", PropValue::from(*name)),
            ("email", PropValue::from(*email)),
            ("role", PropValue::from(*role)),
            ("status", PropValue::from(*status)),
        ])
    }))
}

/// Column definitions matching [`sample_rows`]
pub fn sample_columns() -> PropValue {
    PropValue::list(["id", "name", "email", "role", "status"].iter().map(|key| {
        PropValue::nested([
            ("key", PropValue::from(*key)),
            ("header", PropValue::from(header(key))),
        ])
    }))
}

fn header(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn file(id: &str, label: &str, size: i32) -> PropValue {
    PropValue::nested([
        ("id", PropValue::from(id)),
        ("label", PropValue::from(label)),
        ("type", PropValue::from("file")),
        (
            "metadata",
            PropValue::nested([("size", PropValue::from(size)), ("modified", "2024-03-01".into())]),
        ),
        ("children", PropValue::list(Vec::<PropValue>::new())),
    ])
}

fn folder(id: &str, label: &str, children: Vec<PropValue>) -> PropValue {
    PropValue::nested([
        ("id", PropValue::from(id)),
        ("label", PropValue::from(label)),
        ("type", PropValue::from("folder")),
        (
            "metadata",
            PropValue::nested([("items", PropValue::from(children.len() as i32))]),
        ),
        ("children", PropValue::List(children)),
    ])
}

/// A small project tree with three top-level branches
pub fn file_tree() -> PropValue {
    PropValue::list([
        folder(
            "src",
            "src",
            vec![
                file("src/main.rs", "main.rs", 1_204),
                file("src/lib.rs", "lib.rs", 3_876),
                folder(
                    "src/components",
                    "components",
                    vec![
                        file("src/components/button.rs", "button.rs", 2_310),
                        file("src/components/card.rs", "card.rs", 1_742),
                    ],
                ),
            ],
        ),
        folder(
            "docs",
            "docs",
            vec![file("docs/guide.md", "guide.md", 8_120)],
        ),
        file("Cargo.toml", "Cargo.toml", 642),
    ])
}
