use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::breakpoints::{classify, Adaptivity, AdaptivityOverrides, SizeType};

/// Root class toggled on the host surface while horizontal density is regular
pub const SIZE_X_REGULAR_CLASS: &str = "vkui-sizeX-regular";

/// Owner of the authoritative adaptivity snapshot
///
/// The snapshot is an `Arc` that is replaced, never mutated, whenever a
/// recomputation changes any of its four fields. Dependents either hold a
/// clone of the `Arc` from [`current`](Self::current) or follow changes
/// through [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct AdaptivityProvider {
    current: Arc<Adaptivity>,
    overrides: AdaptivityOverrides,
    has_mouse: bool,
    tx: watch::Sender<Arc<Adaptivity>>,
}

impl AdaptivityProvider {
    pub fn new(
        width: u32,
        height: u32,
        is_landscape: bool,
        has_mouse: bool,
        overrides: AdaptivityOverrides,
    ) -> Self {
        let current = Arc::new(classify(width, height, is_landscape, has_mouse, &overrides));
        let (tx, _) = watch::channel(current.clone());
        Self {
            current,
            overrides,
            has_mouse,
            tx,
        }
    }

    /// Current shared snapshot
    pub fn current(&self) -> Arc<Adaptivity> {
        self.current.clone()
    }

    /// Receiver that observes every published replacement
    pub fn subscribe(&self) -> watch::Receiver<Arc<Adaptivity>> {
        self.tx.subscribe()
    }

    /// Whether the host reports a mouse-capable pointer
    pub fn has_mouse(&self) -> bool {
        self.has_mouse
    }

    pub fn overrides(&self) -> &AdaptivityOverrides {
        &self.overrides
    }

    /// Class the host surface should carry for the current snapshot
    pub fn root_class(&self) -> Option<&'static str> {
        (self.current.size_x == SizeType::Regular).then_some(SIZE_X_REGULAR_CLASS)
    }

    /// Recompute after a resize; returns `true` when dependents were notified
    pub fn on_resize(&mut self, width: u32, height: u32, is_landscape: bool) -> bool {
        let calculated = classify(width, height, is_landscape, self.has_mouse, &self.overrides);
        self.publish(calculated)
    }

    /// Replace caller overrides and recompute against the given viewport
    pub fn set_overrides(
        &mut self,
        overrides: AdaptivityOverrides,
        width: u32,
        height: u32,
        is_landscape: bool,
    ) -> bool {
        self.overrides = overrides;
        self.on_resize(width, height, is_landscape)
    }

    fn publish(&mut self, calculated: Adaptivity) -> bool {
        if *self.current == calculated {
            return false;
        }

        debug!(
            view_width = %calculated.view_width,
            view_height = %calculated.view_height,
            size_x = %calculated.size_x,
            size_y = %calculated.size_y,
            "adaptivity changed"
        );
        self.current = Arc::new(calculated);
        self.tx.send_replace(self.current.clone());
        true
    }
}
