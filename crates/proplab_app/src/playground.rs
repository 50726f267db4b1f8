//! Playground session
//!
//! A [`Playground`] owns the state of one editing session: which component is
//! selected and its live property bag. Every operation runs synchronously, so
//! an edit (derived overlay rebuild included) is complete before the next
//! preview or code render reads the bag.

use proplab_codegen::{CodeSerializer, SerializerOptions};
use proplab_controls::{BoundControl, ControlGenerator, ControlInput};
use proplab_core::{PropertyBag, Registry, WidgetRef};

use crate::error::{PlaygroundError, Result};

/// Live preview of the selected component
pub struct Preview<'a> {
    pub id: &'a str,
    pub widget: &'a WidgetRef,
    pub props: &'a PropertyBag,
}

impl Preview<'_> {
    /// Hand the current bag to the widget
    pub fn render(&self) -> String {
        self.widget.render(self.props)
    }
}

/// One editing session over a registry
pub struct Playground<'r> {
    registry: &'r Registry,
    generator: ControlGenerator<'r>,
    serializer: CodeSerializer<'r>,
    selected: Option<String>,
    props: PropertyBag,
}

impl<'r> Playground<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_options(registry, SerializerOptions::default())
    }

    pub fn with_options(registry: &'r Registry, options: SerializerOptions) -> Self {
        Self {
            registry,
            generator: ControlGenerator::new(registry),
            serializer: CodeSerializer::with_options(registry, options),
            selected: None,
            props: PropertyBag::new(),
        }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Component ids in selector order
    pub fn component_ids(&self) -> impl Iterator<Item = &'r str> {
        self.registry.component_ids()
    }

    /// Select a component, replacing the bag with a fresh copy of its
    /// defaults.
    ///
    /// An unknown id clears the selection and returns `false`.
    pub fn select(&mut self, id: &str) -> bool {
        match self.registry.clone_defaults(id) {
            Some(defaults) => {
                tracing::debug!("selected '{}'", id);
                self.selected = Some(id.to_string());
                self.props = defaults;
                true
            }
            None => {
                tracing::debug!("unknown component '{}', selection cleared", id);
                self.selected = None;
                self.props = PropertyBag::new();
                false
            }
        }
    }

    /// Like [`select`](Self::select), reporting unknown ids as an error
    pub fn try_select(&mut self, id: &str) -> Result<()> {
        if self.select(id) {
            Ok(())
        } else {
            Err(PlaygroundError::UnknownComponent(id.to_string()))
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn props(&self) -> &PropertyBag {
        &self.props
    }

    /// Controls for the current selection, bound to the current bag
    pub fn controls(&self) -> Vec<BoundControl> {
        match &self.selected {
            Some(id) => self.generator.generate(id, &self.props),
            None => Vec::new(),
        }
    }

    /// Edit property `key` through its control.
    ///
    /// Returns `false` when nothing is selected or the property has no
    /// control right now (unknown, or suppressed by its applicability rule).
    pub fn edit(&mut self, key: &str, input: ControlInput) -> bool {
        self.try_edit(key, input).is_ok()
    }

    pub fn try_edit(&mut self, key: &str, input: ControlInput) -> Result<()> {
        let Some(id) = self.selected.as_deref() else {
            return Err(PlaygroundError::NoSelection);
        };
        let control = self
            .controls()
            .into_iter()
            .find(|control| control.key.as_str() == key)
            .ok_or_else(|| PlaygroundError::NoSuchControl {
                component: id.to_string(),
                key: key.to_string(),
            })?;

        tracing::trace!("edit {}.{}", id, key);
        control.change(&mut self.props, input);
        Ok(())
    }

    /// Live preview, or `None` with nothing selected
    pub fn preview(&self) -> Option<Preview<'_>> {
        let id = self.selected.as_deref()?;
        let descriptor = self.registry.descriptor(id)?;
        Some(Preview {
            id,
            widget: &descriptor.widget,
            props: &self.props,
        })
    }

    /// Code preview; empty with nothing selected
    pub fn code(&self) -> String {
        match &self.selected {
            Some(id) => self.serializer.serialize(id, &self.props),
            None => String::new(),
        }
    }

    /// Discard edits, restoring the selection's defaults
    pub fn reset(&mut self) {
        if let Some(id) = &self.selected {
            if let Some(defaults) = self.registry.clone_defaults(id) {
                tracing::debug!("reset '{}'", id);
                self.props = defaults;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proplab_catalog::builtin_registry;
    use proplab_controls::ControlWidget;
    use proplab_core::PropValue;
    use std::sync::Arc;

    fn control<'a>(controls: &'a [BoundControl], key: &str) -> Option<&'a BoundControl> {
        controls.iter().find(|c| c.key.as_str() == key)
    }

    #[test]
    fn test_button_end_to_end() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        assert!(playground.select("Button"));

        let props = playground.props();
        assert_eq!(props.get("color"), Some(&PropValue::from("primary")));
        assert_eq!(props.get("disabled"), Some(&PropValue::from(false)));
        assert_eq!(props.get("children"), Some(&PropValue::from("Click Me")));

        let controls = playground.controls();
        let disabled = control(&controls, "disabled").unwrap();
        assert_eq!(disabled.widget, ControlWidget::Toggle);
        assert_eq!(disabled.value, PropValue::from(false));

        disabled.change(&mut playground.props, ControlInput::Checked(true));
        assert_eq!(playground.props().get("disabled"), Some(&PropValue::from(true)));

        let code = playground.code();
        assert!(code.lines().any(|line| line.trim() == "disabled"));
        assert!(!code.contains("disabled={false}"));
    }

    #[test]
    fn test_select_discards_previous_bag() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Button");
        assert!(playground.edit("children", ControlInput::Input("Save".into())));

        playground.select("Badge");
        assert!(playground.props().get("children").is_none());

        playground.select("Button");
        assert_eq!(playground.props().get("children"), Some(&PropValue::from("Click Me")));
    }

    #[test]
    fn test_unknown_component() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Button");

        assert!(!playground.select("Carousel"));
        assert_eq!(playground.selected(), None);
        assert!(playground.props().is_empty());
        assert!(playground.controls().is_empty());
        assert!(playground.preview().is_none());
        assert_eq!(playground.code(), "");
        assert_eq!(
            playground.try_select("Carousel"),
            Err(PlaygroundError::UnknownComponent("Carousel".into()))
        );
    }

    #[test]
    fn test_try_edit_errors() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        assert_eq!(
            playground.try_edit("disabled", ControlInput::Checked(true)),
            Err(PlaygroundError::NoSelection)
        );

        playground.select("Button");
        // Suppressed until the overlay toggle is on
        assert_eq!(
            playground.try_edit("trigger", ControlInput::Select("hover".into())),
            Err(PlaygroundError::NoSuchControl {
                component: "Button".into(),
                key: "trigger".into(),
            })
        );
    }

    #[test]
    fn test_default_bags_are_isolated() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("AnimatedText");
        playground.edit("animation", ControlInput::Select("split".into()));
        playground.edit("animationConfig.splitBy", ControlInput::Select("chars".into()));

        let pristine = registry.clone_defaults("AnimatedText").unwrap();
        assert_eq!(
            pristine.get("animationConfig"),
            Some(&PropValue::nested([("splitBy", "words"), ("direction", "top")]))
        );
        assert_eq!(
            registry.descriptor("AnimatedText").unwrap().defaults,
            pristine
        );
    }

    #[test]
    fn test_applicability_follows_governing_field() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("AnimatedText");

        let keys = |p: &Playground| -> Vec<String> {
            p.controls().iter().map(|c| c.key.to_string()).collect()
        };
        assert!(keys(&playground).contains(&"typingSpeed".to_string()));
        assert!(!keys(&playground).contains(&"duration".to_string()));

        assert!(playground.edit("animation", ControlInput::Select("fade".into())));
        assert!(!keys(&playground).contains(&"typingSpeed".to_string()));
        assert!(keys(&playground).contains(&"duration".to_string()));
        assert!(!playground.edit("typingSpeed", ControlInput::Input("90".into())));
    }

    #[test]
    fn test_dotted_edit_merges() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("AnimatedText");
        playground.edit("animation", ControlInput::Select("split".into()));
        let direction = ControlInput::Select("bottom".into());
        assert!(playground.edit("animationConfig.direction", direction));

        assert_eq!(
            playground.props().get("animationConfig"),
            Some(&PropValue::nested([("splitBy", "words"), ("direction", "bottom")]))
        );
    }

    #[test]
    fn test_trigger_change_rebuilds_overlay() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Button");
        assert!(playground.edit("interactive", ControlInput::Checked(true)));

        let overlay = |p: &Playground| {
            p.props()
                .get("overlay")
                .and_then(PropValue::as_overlay)
                .cloned()
        };
        let before = overlay(&playground).unwrap();
        assert_eq!(before.trigger, "click");

        assert!(playground.edit("trigger", ControlInput::Select("hover".into())));
        let after = overlay(&playground).unwrap();
        assert_eq!(after.trigger, "hover");
        assert!(!Arc::ptr_eq(&before, &after));

        let code = playground.code();
        assert!(code.contains("trigger: \"hover\""));
        assert!(code.contains("content: <YourContent />"));
        assert!(playground.preview().unwrap().render().contains("+popover@hover"));
    }

    #[test]
    fn test_preview_reflects_edits() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        assert!(playground.preview().is_none());

        playground.select("Button");
        assert_eq!(playground.preview().unwrap().render(), "[ Click Me ]");
        playground.edit("disabled", ControlInput::Checked(true));
        let preview = playground.preview().unwrap();
        assert_eq!(preview.id, "Button");
        assert_eq!(preview.render(), "[ Click Me ] (disabled)");
    }

    #[test]
    fn test_lenient_number_edit() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Badge");
        assert!(playground.edit("max", ControlInput::Input("12px".into())));
        assert_eq!(playground.props().get("max"), Some(&PropValue::from(12)));
        assert!(playground.edit("max", ControlInput::Input("lots".into())));
        assert_eq!(playground.props().get("max"), Some(&PropValue::from(0)));
    }

    #[test]
    fn test_null_option_round_trip() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Badge");

        playground.edit("theme", ControlInput::Select("dark".into()));
        assert!(playground.code().contains("theme=\"dark\""));

        let controls = playground.controls();
        let theme = control(&controls, "theme").unwrap();
        assert_eq!(theme.selected_keys(), ["dark"]);

        playground.edit("theme", ControlInput::Select("null".into()));
        assert_eq!(playground.props().get("theme"), Some(&PropValue::Unset));
        assert!(!playground.code().contains("theme"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Button");
        let defaults = playground.props().clone();

        playground.edit("children", ControlInput::Input("Save".into()));
        playground.edit("interactive", ControlInput::Checked(true));
        assert_ne!(playground.props(), &defaults);

        playground.reset();
        assert_eq!(playground.props(), &defaults);
        assert_eq!(playground.selected(), Some("Button"));
    }

    #[test]
    fn test_bounded_data_code() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        playground.select("Data");
        let code = playground.code();
        assert!(code.contains("// ... 4 more items"));
        assert_eq!(code, playground.code());
    }

    #[test]
    fn test_every_component_selectable() {
        let registry = builtin_registry().unwrap();
        let mut playground = Playground::new(&registry);
        let ids: Vec<&str> = playground.component_ids().collect();
        assert_eq!(ids.len(), 15);
        for id in ids {
            assert!(playground.select(id));
            assert!(!playground.controls().is_empty(), "{}", id);
            assert!(playground.code().starts_with(&format!("<{}", id)));
            assert!(playground.preview().is_some());
        }
    }
}
