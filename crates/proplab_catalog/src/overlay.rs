//! Overlay factories, one per overlay-capable component
//!
//! Each factory captures the trigger inside the content closure, so a
//! rebuilt overlay never renders with the previous trigger.

use proplab_core::{DerivedSlot, Opaque, OverlayConfig};

fn overlay(trigger: &str, variant: &str, position: &str, body: &'static str) -> OverlayConfig {
    let captured = trigger.to_string();
    OverlayConfig {
        trigger: trigger.to_string(),
        variant: variant.to_string(),
        position: position.to_string(),
        content: Opaque::renderable("overlay content", move || {
            format!("{} (opens on {})", body, captured)
        }),
    }
}

pub fn button_overlay(trigger: &str) -> OverlayConfig {
    overlay(trigger, "popover", "bottom", "Button details")
}

pub fn card_overlay(trigger: &str) -> OverlayConfig {
    overlay(trigger, "popover", "right", "Card preview")
}

pub fn container_overlay(trigger: &str) -> OverlayConfig {
    overlay(trigger, "menu", "bottom-start", "Container actions")
}

pub fn data_overlay(trigger: &str) -> OverlayConfig {
    overlay(trigger, "menu", "cursor", "Row actions")
}

pub fn fab_overlay(trigger: &str) -> OverlayConfig {
    overlay(trigger, "menu", "top", "Quick actions")
}

pub fn tree_overlay(trigger: &str) -> OverlayConfig {
    overlay(trigger, "menu", "right", "Node actions")
}

/// Slot for a component, using the conventional keys
pub(crate) fn slot(factory: fn(&str) -> OverlayConfig) -> DerivedSlot {
    DerivedSlot::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_embed_trigger() {
        for factory in [
            button_overlay,
            card_overlay,
            container_overlay,
            data_overlay,
            fab_overlay,
            tree_overlay,
        ] {
            let config = factory("hover");
            assert_eq!(config.trigger, "hover");
            assert!(config.render_content().unwrap().ends_with("(opens on hover)"));
        }
    }

    #[test]
    fn test_factory_is_repeatable() {
        let a = button_overlay("click");
        let b = button_overlay("click");
        assert_eq!(a.variant, b.variant);
        assert_eq!(a.position, b.position);
        assert_eq!(a.render_content(), b.render_content());
    }
}
