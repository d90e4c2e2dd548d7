// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams to the collaborators around the engine.

/// Reports whether a modal or dialog currently owns interaction.
///
/// Consulted at the start of every touch callback; while it returns `true`
/// the engine changes no state.
///
/// Blocked events are dropped, not replayed. A touch-end swallowed by the
/// gate leaves the gesture in progress until a later unblocked touch ends it,
/// and any snap-back waits with it.
pub trait ModalGate {
    /// Returns `true` if gestures must be ignored.
    fn is_interaction_blocked(&self) -> bool;
}

/// A gate that never blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverBlocked;

impl ModalGate for NeverBlocked {
    fn is_interaction_blocked(&self) -> bool {
        false
    }
}

impl<F: Fn() -> bool> ModalGate for F {
    fn is_interaction_blocked(&self) -> bool {
        self()
    }
}

/// Receives zoom-state notifications, typically for back-button integration.
pub trait ZoomObserver {
    /// Called after every committed transform change.
    ///
    /// `zoomed_out` is `true` while the view is below native resolution.
    fn on_zoom_state_changed(&mut self, zoomed_out: bool);
}

/// An observer that ignores notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ZoomObserver for NoopObserver {
    fn on_zoom_state_changed(&mut self, _zoomed_out: bool) {}
}

impl<F: FnMut(bool)> ZoomObserver for F {
    fn on_zoom_state_changed(&mut self, zoomed_out: bool) {
        self(zoomed_out);
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::{ModalGate, NeverBlocked, NoopObserver, ZoomObserver};

    #[test]
    fn closures_act_as_gate_and_observer() {
        let open = Cell::new(false);
        let gate = || open.get();
        assert!(!gate.is_interaction_blocked());
        open.set(true);
        assert!(gate.is_interaction_blocked());

        let mut seen = None;
        let mut observer = |z: bool| seen = Some(z);
        observer.on_zoom_state_changed(true);
        assert_eq!(seen, Some(true));
    }

    #[test]
    fn defaults_are_inert() {
        assert!(!NeverBlocked.is_interaction_blocked());
        NoopObserver.on_zoom_state_changed(true);
    }
}
