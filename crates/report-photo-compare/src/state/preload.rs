//! Hide the loader once both photos are available.

use crate::PaneSide;

/// Tracks which image of the pair has finished loading.
///
/// The gate opens exactly once. Later load signals, for example after a
/// thumbnail swapped the photos, are recorded but never reopen it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadGate {
    before: bool,
    after: bool,
    open: bool,
}

impl PreloadGate {
    /// Start from the completion state observed at attach time.
    pub fn new(before_complete: bool, after_complete: bool) -> Self {
        Self {
            before: before_complete,
            after: after_complete,
            open: false,
        }
    }

    /// Record a load on `side`. Returns true if this signal opened the gate.
    pub fn mark(&mut self, side: PaneSide) -> bool {
        match side {
            PaneSide::Before => self.before = true,
            PaneSide::After => self.after = true,
        }
        self.check()
    }

    /// Open the gate if both sides are complete. Returns true only on the
    /// transition.
    pub fn check(&mut self) -> bool {
        if self.open || !(self.before && self.after) {
            return false;
        }
        self.open = true;
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_after_both_in_any_order() {
        let mut gate = PreloadGate::new(false, false);
        assert!(!gate.mark(PaneSide::After));
        assert!(gate.mark(PaneSide::Before));
        assert!(gate.is_open());

        let mut gate = PreloadGate::new(false, false);
        assert!(!gate.mark(PaneSide::Before));
        assert!(gate.mark(PaneSide::After));
    }

    #[test]
    fn test_already_complete_opens_on_check() {
        let mut gate = PreloadGate::new(true, true);
        assert!(!gate.is_open());
        assert!(gate.check());
        assert!(!gate.check());
    }

    #[test]
    fn test_repeated_loads_do_not_reopen() {
        let mut gate = PreloadGate::new(true, false);
        assert!(gate.mark(PaneSide::After));
        assert!(!gate.mark(PaneSide::After));
        assert!(!gate.mark(PaneSide::Before));
    }
}
