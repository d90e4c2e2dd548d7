// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::mem;

use kurbo::{Point, Size};

use crate::bridge::{ScrollSurface, enter_transform, exit_to_native};
use crate::clamp::EdgeClamp;
use crate::config::ZoomConfig;
use crate::gate::{ModalGate, NeverBlocked, NoopObserver, ZoomObserver};
use crate::gesture::{GesturePhase, PanContext, PinchContext, TouchPoint};
use crate::limits::compute_min_scale;
use crate::metrics::{MetricsError, ViewportMetrics};
use crate::transform::{TransformState, ViewTransform};

/// Whether the host should suppress the platform's default handling of a
/// touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchDisposition {
    /// The engine owns this event; call `preventDefault`.
    Consumed,
    /// Leave the event to native scrolling.
    PassThrough,
}

impl TouchDisposition {
    /// Returns `true` for [`TouchDisposition::Consumed`].
    #[must_use]
    pub fn prevents_default(self) -> bool {
        self == Self::Consumed
    }
}

/// Pinch-to-zoom and pan engine for a natively scrolled canvas.
///
/// The engine owns the [`TransformState`] and the active gesture. Touch
/// callbacks take the full list of contacts currently on the surface (not just
/// the changed ones), in viewport coordinates.
///
/// Every committed frame satisfies the edge clamp for its scale. Transitions
/// between native scrolling and the explicit transform go through
/// [`enter_transform`] / [`exit_to_native`], which complete within the call.
#[derive(Debug)]
pub struct ZoomEngine<S, G = NeverBlocked, O = NoopObserver> {
    config: ZoomConfig,
    metrics: Option<ViewportMetrics>,
    clamp: Option<EdgeClamp>,
    state: TransformState,
    phase: GesturePhase,
    surface: S,
    gate: G,
    observer: O,
}

impl<S: ScrollSurface, G: ModalGate, O: ZoomObserver> ZoomEngine<S, G, O> {
    /// Creates an engine in native mode with no metrics yet.
    ///
    /// Gestures are ignored until [`ZoomEngine::set_metrics`] succeeds.
    #[must_use]
    pub fn new(config: ZoomConfig, surface: S, gate: G, observer: O) -> Self {
        Self {
            config: config.sanitized(),
            metrics: None,
            clamp: None,
            state: TransformState::NATIVE,
            phase: GesturePhase::Idle,
            surface,
            gate,
            observer,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the cached metrics, if any have been accepted.
    #[must_use]
    pub fn metrics(&self) -> Option<&ViewportMetrics> {
        self.metrics.as_ref()
    }

    /// Returns the edge clamp for the current metrics.
    #[must_use]
    pub fn edge_clamp(&self) -> Option<&EdgeClamp> {
        self.clamp.as_ref()
    }

    /// Returns `true` once metrics are available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.clamp.is_some()
    }

    /// Returns the current transform and presentation mode.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Returns the active gesture.
    #[must_use]
    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    /// Returns the render target.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the render target mutably.
    ///
    /// Writing to it directly bypasses the engine's hand-off bookkeeping.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Smallest permitted scale, or `1.0` before metrics are known.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.clamp.map_or(1.0, |c| c.min_scale())
    }

    /// Zoom level as a fraction of the available range: `0` fully zoomed
    /// out, `1` at native resolution.
    #[must_use]
    pub fn current_zoom_fraction(&self) -> f64 {
        let min = self.min_scale();
        let span = 1.0 - min;
        if span <= f64::EPSILON {
            return 1.0;
        }
        ((self.state.scale() - min) / span).clamp(0.0, 1.0)
    }

    /// Returns `true` while an explicit transform shows the content below
    /// native resolution.
    #[must_use]
    pub fn is_zoomed_out(&self) -> bool {
        self.state.is_transformed() && self.state.scale() < self.config.zoomed_threshold
    }

    /// Accepts new viewport and content sizes (initialization, resize,
    /// orientation change or content reflow).
    ///
    /// Recomputes the minimum scale. When transformed, the scale is clamped
    /// into the new range and the offset re-derived so that the content under
    /// the viewport center stays there, then clamped. An in-flight gesture is
    /// re-based so its next frame continues from the corrected transform.
    ///
    /// Invalid sizes are rejected and the previous metrics kept.
    pub fn set_metrics(&mut self, viewport: Size, content: Size) -> Result<(), MetricsError> {
        let metrics = ViewportMetrics::new(viewport, content).inspect_err(|err| {
            log::warn!("ignoring viewport metrics {viewport:?} / {content:?}: {err}");
        })?;
        if self.metrics == Some(metrics) {
            return Ok(());
        }
        let min_scale = compute_min_scale(viewport, content, self.config.edge_padding);
        let clamp = EdgeClamp::new(&metrics, min_scale, &self.config);
        let old_viewport = self.metrics.map_or(viewport, |m| m.viewport());
        self.metrics = Some(metrics);
        self.clamp = Some(clamp);
        log::debug!("metrics {viewport:?} / {content:?}, min scale {min_scale}");

        if self.state.is_transformed() {
            self.rederive(&clamp, old_viewport, viewport);
        }
        Ok(())
    }

    /// Drops any gesture and returns to native scrolling at identity.
    ///
    /// Used when the underlying content is replaced wholesale. If the view was
    /// transformed, the scroll position is restored from the offset the same
    /// way a snap-back does.
    pub fn reset_to_identity(&mut self) {
        self.phase = GesturePhase::Idle;
        if exit_to_native(&mut self.surface, &mut self.state).is_some() {
            self.observer.on_zoom_state_changed(false);
        }
    }

    /// Handles a touch-start; `touches` lists every contact now down.
    pub fn on_touch_start(&mut self, touches: &[TouchPoint]) -> TouchDisposition {
        if self.gate.is_interaction_blocked() {
            return TouchDisposition::Consumed;
        }
        match touches {
            [] => self.finish_gesture(),
            [touch] => {
                // A lone new contact means every earlier finger has lifted.
                if self.phase.is_active() {
                    self.finish_gesture();
                }
                self.begin_pan(touch)
            }
            [a, b] => self.begin_pinch(a, b),
            _ => self.ignore(),
        }
    }

    /// Handles a touch-move; `touches` lists every contact still down.
    pub fn on_touch_move(&mut self, touches: &[TouchPoint]) -> TouchDisposition {
        if self.gate.is_interaction_blocked() {
            return TouchDisposition::Consumed;
        }
        match (self.phase, touches) {
            (GesturePhase::Pinching(pinch), [a, b]) => self.pinch_move(pinch, a, b),
            (GesturePhase::Panning(pan), [touch]) => self.pan_move(pan, touch),
            (GesturePhase::Idle, _) => TouchDisposition::PassThrough,
            _ => TouchDisposition::Consumed,
        }
    }

    /// Handles a touch-end; `touches` lists the contacts that remain down.
    pub fn on_touch_end(&mut self, touches: &[TouchPoint]) -> TouchDisposition {
        if self.gate.is_interaction_blocked() {
            return TouchDisposition::Consumed;
        }
        match (self.phase, touches) {
            // Down to two from a contact count that was being ignored.
            (GesturePhase::Idle | GesturePhase::Panning(_), [a, b]) => self.begin_pinch(a, b),
            (GesturePhase::Idle, _) => TouchDisposition::PassThrough,
            (GesturePhase::Pinching(pinch), [a, b]) => {
                // Down from three contacts: keep going, re-anchoring if the
                // pair that was driving the pinch lost a finger.
                if pinch.tracked_pair(touches).is_none() {
                    self.rebase_pinch(a, b);
                }
                TouchDisposition::Consumed
            }
            (GesturePhase::Pinching(_), rest) if rest.len() > 2 => TouchDisposition::Consumed,
            (GesturePhase::Panning(pan), [touch]) if touch.id == pan.touch_id => {
                TouchDisposition::Consumed
            }
            _ => {
                self.finish_gesture();
                TouchDisposition::Consumed
            }
        }
    }

    /// Handles a touch-cancel exactly like a touch-end.
    pub fn on_touch_cancel(&mut self, touches: &[TouchPoint]) -> TouchDisposition {
        self.on_touch_end(touches)
    }

    fn ignore(&self) -> TouchDisposition {
        if self.phase.is_active() || self.state.is_transformed() {
            TouchDisposition::Consumed
        } else {
            TouchDisposition::PassThrough
        }
    }

    fn begin_pan(&mut self, touch: &TouchPoint) -> TouchDisposition {
        if !self.is_ready() || !self.is_zoomed_out() {
            return TouchDisposition::PassThrough;
        }
        self.phase = GesturePhase::Panning(PanContext::begin(touch, self.state.offset()));
        log::trace!("pan start at {:?}", touch.position);
        TouchDisposition::Consumed
    }

    fn begin_pinch(&mut self, a: &TouchPoint, b: &TouchPoint) -> TouchDisposition {
        if !self.is_ready() {
            return TouchDisposition::PassThrough;
        }
        enter_transform(&mut self.surface, &mut self.state);
        self.rebase_pinch(a, b);
        log::trace!("pinch start at scale {}", self.state.scale());
        TouchDisposition::Consumed
    }

    fn rebase_pinch(&mut self, a: &TouchPoint, b: &TouchPoint) {
        self.phase = GesturePhase::Pinching(PinchContext::begin(a, b, self.state.scale()));
    }

    fn pinch_move(
        &mut self,
        mut pinch: PinchContext,
        a: &TouchPoint,
        b: &TouchPoint,
    ) -> TouchDisposition {
        let Some(clamp) = self.clamp else {
            return TouchDisposition::Consumed;
        };
        let pair = [*a, *b];
        let Some((a, b)) = pinch.tracked_pair(&pair) else {
            self.rebase_pinch(a, b);
            return TouchDisposition::Consumed;
        };

        let current = self.state.transform;
        let midpoint = a.position.midpoint(b.position);
        let distance = a.position.distance(b.position);
        let min_distance = self.config.min_pinch_distance;
        let usable = |d: f64| d >= min_distance;

        // Degenerate start distance: capture a usable reference on the first
        // frame that has one, without changing scale on this frame.
        if !usable(pinch.initial_distance) {
            pinch.initial_distance = distance;
            pinch.initial_scale = current.scale;
        }
        let new_scale = if usable(pinch.initial_distance) {
            let s = pinch.initial_scale * distance / pinch.initial_distance;
            if s.is_finite() {
                s.clamp(clamp.min_scale(), 1.0)
            } else {
                current.scale
            }
        } else {
            current.scale
        };

        let anchor = current.screen_to_content(pinch.previous_midpoint);
        let candidate = midpoint.to_vec2() - anchor.to_vec2() * new_scale;
        let offset = clamp.clamp(candidate, new_scale);

        pinch.previous_midpoint = midpoint;
        pinch.last_distance = distance;
        self.phase = GesturePhase::Pinching(pinch);
        self.commit(ViewTransform::new(offset, new_scale));
        TouchDisposition::Consumed
    }

    fn pan_move(&mut self, mut pan: PanContext, touch: &TouchPoint) -> TouchDisposition {
        let Some(clamp) = self.clamp else {
            return TouchDisposition::Consumed;
        };
        if touch.id != pan.touch_id {
            self.phase = GesturePhase::Panning(PanContext::begin(touch, self.state.offset()));
            return TouchDisposition::Consumed;
        }
        let scale = self.state.scale();
        let offset = clamp.clamp(pan.candidate_offset(touch.position), scale);
        pan.last_position = touch.position;
        self.phase = GesturePhase::Panning(pan);
        self.commit(ViewTransform::new(offset, scale));
        TouchDisposition::Consumed
    }

    fn finish_gesture(&mut self) -> TouchDisposition {
        match mem::take(&mut self.phase) {
            GesturePhase::Pinching(_) => {
                self.end_pinch();
                TouchDisposition::Consumed
            }
            GesturePhase::Panning(_) => {
                self.end_pan();
                TouchDisposition::Consumed
            }
            GesturePhase::Idle => TouchDisposition::PassThrough,
        }
    }

    fn end_pinch(&mut self) {
        let scale = self.state.scale();
        if self.state.is_transformed() && scale > self.config.snap_back_threshold {
            log::debug!("pinch ended at scale {scale}, snapping back to native");
            exit_to_native(&mut self.surface, &mut self.state);
        } else {
            log::trace!("pinch ended at scale {scale}");
        }
        self.observer.on_zoom_state_changed(self.is_zoomed_out());
    }

    /// A pan never changes scale, but a resize during it may have pushed the
    /// scale to native resolution.
    fn end_pan(&mut self) {
        let scale = self.state.scale();
        if self.state.is_transformed() && scale >= self.config.zoomed_threshold {
            log::debug!("pan ended at scale {scale}, handing back to native");
            exit_to_native(&mut self.surface, &mut self.state);
            self.observer.on_zoom_state_changed(false);
        } else {
            log::trace!("pan end");
        }
    }

    fn rederive(&mut self, clamp: &EdgeClamp, old_viewport: Size, new_viewport: Size) {
        let current = self.state.transform;
        let scale = current.scale.clamp(clamp.min_scale(), 1.0);
        let anchor = current.screen_to_content(center_of(old_viewport));
        let candidate = center_of(new_viewport).to_vec2() - anchor.to_vec2() * scale;
        let offset = clamp.clamp(candidate, scale);

        match &mut self.phase {
            GesturePhase::Pinching(pinch) => {
                pinch.initial_distance = pinch.last_distance;
                pinch.initial_scale = scale;
            }
            GesturePhase::Panning(pan) => {
                pan.start = pan.last_position;
                pan.offset_at_start = offset;
            }
            GesturePhase::Idle => {}
        }

        if !self.phase.is_active() && scale >= self.config.zoomed_threshold {
            // Nothing left to zoom out of: hand back to native scrolling.
            self.state.transform = ViewTransform::new(offset, scale);
            exit_to_native(&mut self.surface, &mut self.state);
            self.observer.on_zoom_state_changed(false);
        } else {
            self.commit(ViewTransform::new(offset, scale));
        }
    }

    fn commit(&mut self, transform: ViewTransform) {
        self.state.transform = transform;
        self.surface.apply_transform(&transform);
        self.observer.on_zoom_state_changed(self.is_zoomed_out());
    }
}

fn center_of(size: Size) -> Point {
    Point::new(size.width / 2.0, size.height / 2.0)
}
