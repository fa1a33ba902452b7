//! Optional lifecycle callbacks for the countdown widget.

/// A zero-argument lifecycle notification.
pub type Hook = Box<dyn Fn() + Send>;

/// Callback slots fired at countdown transitions.
///
/// Every slot is optional; an unset slot is a safe no-op. Hooks run
/// synchronously inside the transition that triggers them, so they must
/// not block.
#[derive(Default)]
pub struct Hooks {
    on_start: Option<Hook>,
    on_pause: Option<Hook>,
    on_finish: Option<Hook>,
}

impl Hooks {
    /// Creates an empty set of hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook fired when the countdown enters the running state,
    /// both on a fresh start and on resume.
    pub fn set_on_start(&mut self, hook: Hook) {
        self.on_start = Some(hook);
    }

    /// Sets the hook fired when the countdown is paused.
    pub fn set_on_pause(&mut self, hook: Hook) {
        self.on_pause = Some(hook);
    }

    /// Sets the hook fired when the countdown reaches zero, as the alarm
    /// sequence begins.
    pub fn set_on_finish(&mut self, hook: Hook) {
        self.on_finish = Some(hook);
    }

    pub(crate) fn fire_start(&self) {
        Self::fire(&self.on_start);
    }

    pub(crate) fn fire_pause(&self) {
        Self::fire(&self.on_pause);
    }

    pub(crate) fn fire_finish(&self) {
        Self::fire(&self.on_finish);
    }

    fn fire(slot: &Option<Hook>) {
        if let Some(hook) = slot {
            hook();
        }
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("on_start", &self.on_start.is_some())
            .field("on_pause", &self.on_pause.is_some())
            .field("on_finish", &self.on_finish.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_unset_hooks_are_noops() {
        let hooks = Hooks::new();
        hooks.fire_start();
        hooks.fire_pause();
        hooks.fire_finish();
    }

    #[test]
    fn test_set_hooks_fire() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut hooks = Hooks::new();

        let c = count.clone();
        hooks.set_on_start(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        hooks.fire_start();
        hooks.fire_start();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        // other slots remain unset and silent
        hooks.fire_pause();
        hooks.fire_finish();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
