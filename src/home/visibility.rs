use tracing::debug;

pub const HERO_SECTION_ID: &str = "hero-section";

/// Share of the hero section's area that must be in the viewport for it
/// to count as visible.
pub const HERO_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Tracks whether the hero section is on screen.
///
/// The observation is released on `unobserve` or when the observer is
/// dropped, whichever comes first.
#[derive(Debug)]
pub struct HeroObserver {
    threshold: f64,
    target: Option<String>,
}

impl Default for HeroObserver {
    fn default() -> Self {
        Self::new(HERO_VISIBILITY_THRESHOLD)
    }
}

impl HeroObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            target: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, target: impl Into<String>) {
        let target = target.into();
        debug!("observing #{} at threshold {}", target, self.threshold);
        self.target = Some(target);
    }

    pub fn unobserve(&mut self) -> Option<String> {
        let target = self.target.take();
        if let Some(target) = &target {
            debug!("stopped observing #{}", target);
        }
        target
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_observing(&self) -> bool {
        self.target.is_some()
    }

    /// Maps an intersection ratio (0.0 to 1.0) to a visibility flag.
    /// Returns `None` once the observer has been released.
    pub fn on_intersection(&self, ratio: f64) -> Option<bool> {
        self.target.as_ref()?;
        Some(ratio >= self.threshold)
    }
}

impl Drop for HeroObserver {
    fn drop(&mut self) {
        self.unobserve();
    }
}
