//! Derived overlay configurations
//!
//! Some components carry an interactive overlay (popover, tooltip, menu)
//! whose shape embeds the trigger mode twice: once as the `trigger` field
//! and once inside the content closure, which is built for that trigger.
//! Patching the field alone would leave a stale closure behind, so an
//! overlay is always rebuilt from its [`DerivedFactory`] when the trigger
//! changes.

use std::fmt;
use std::sync::Arc;

use crate::value::Opaque;

/// Interactive overlay attached to a component
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Interaction that opens the overlay (`click`, `hover`, `contextmenu`)
    pub trigger: String,
    /// Display variant (`popover`, `tooltip`, `menu`, ...)
    pub variant: String,
    /// Placement relative to the anchor
    pub position: String,
    /// Content renderable, built for `trigger`
    pub content: Opaque,
}

impl OverlayConfig {
    /// Render the embedded content, if it is renderable
    pub fn render_content(&self) -> Option<String> {
        self.content.render()
    }
}

/// Builds an [`OverlayConfig`] for a trigger mode.
///
/// Implementations must be pure: the same trigger yields an equivalent
/// configuration every time.
pub trait DerivedFactory: Send + Sync {
    fn build(&self, trigger: &str) -> OverlayConfig;
}

impl<F> DerivedFactory for F
where
    F: Fn(&str) -> OverlayConfig + Send + Sync,
{
    fn build(&self, trigger: &str) -> OverlayConfig {
        self(trigger)
    }
}

/// Where a component keeps its derived overlay and what governs it
#[derive(Clone)]
pub struct DerivedSlot {
    /// Boolean property that attaches/detaches the overlay
    pub toggle_key: String,
    /// Trigger-mode property whose change forces a rebuild
    pub trigger_key: String,
    /// Bag key holding the [`OverlayConfig`]
    pub config_key: String,
    pub factory: Arc<dyn DerivedFactory>,
}

impl DerivedSlot {
    /// Slot using the conventional `interactive` / `trigger` / `overlay` keys
    pub fn new(factory: impl DerivedFactory + 'static) -> Self {
        Self {
            toggle_key: "interactive".to_string(),
            trigger_key: "trigger".to_string(),
            config_key: "overlay".to_string(),
            factory: Arc::new(factory),
        }
    }

    pub fn build(&self, trigger: &str) -> OverlayConfig {
        self.factory.build(trigger)
    }

    /// Whether `key` is one of the slot's bookkeeping keys
    pub fn owns(&self, key: &str) -> bool {
        key == self.toggle_key || key == self.config_key
    }
}

impl fmt::Debug for DerivedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedSlot")
            .field("toggle_key", &self.toggle_key)
            .field("trigger_key", &self.trigger_key)
            .field("config_key", &self.config_key)
            .finish_non_exhaustive()
    }
}
