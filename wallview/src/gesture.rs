// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch points and per-gesture reference state.

use kurbo::{Point, Vec2};

/// A single contact point in viewport (screen) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Identifier that stays stable for the lifetime of the contact.
    pub id: i32,
    /// Position in viewport pixels.
    pub position: Point,
}

impl TouchPoint {
    /// Creates a touch point.
    #[must_use]
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// Reference values captured when a two-finger pinch begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchContext {
    /// Identifiers of the two contacts driving the pinch.
    pub touch_ids: [i32; 2],
    /// Finger distance at pinch start.
    pub initial_distance: f64,
    /// Scale at pinch start.
    pub initial_scale: f64,
    /// Finger distance on the most recent frame.
    pub last_distance: f64,
    /// Midpoint of the two contacts on the previous frame.
    pub previous_midpoint: Point,
}

impl PinchContext {
    /// Captures a pinch reference from a pair of contacts at `scale`.
    #[must_use]
    pub fn begin(a: &TouchPoint, b: &TouchPoint, scale: f64) -> Self {
        let distance = a.position.distance(b.position);
        Self {
            touch_ids: [a.id, b.id],
            initial_distance: distance,
            initial_scale: scale,
            last_distance: distance,
            previous_midpoint: a.position.midpoint(b.position),
        }
    }

    /// Finds the two tracked contacts in `touches`, in tracking order.
    #[must_use]
    pub fn tracked_pair<'a>(
        &self,
        touches: &'a [TouchPoint],
    ) -> Option<(&'a TouchPoint, &'a TouchPoint)> {
        let find = move |id: i32| touches.iter().find(|t| t.id == id);
        Some((find(self.touch_ids[0])?, find(self.touch_ids[1])?))
    }
}

/// Reference values captured when a single-finger pan begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanContext {
    /// Identifier of the panning contact.
    pub touch_id: i32,
    /// Contact position at pan start.
    pub start: Point,
    /// Offset at pan start.
    pub offset_at_start: Vec2,
    /// Contact position on the most recent frame.
    pub last_position: Point,
}

impl PanContext {
    /// Captures a pan reference for `touch` at `offset`.
    #[must_use]
    pub fn begin(touch: &TouchPoint, offset: Vec2) -> Self {
        Self {
            touch_id: touch.id,
            start: touch.position,
            offset_at_start: offset,
            last_position: touch.position,
        }
    }

    /// Unclamped offset for the contact now at `position`.
    #[must_use]
    pub fn candidate_offset(&self, position: Point) -> Vec2 {
        self.offset_at_start + (position - self.start)
    }
}

/// What the active touch sequence is doing.
///
/// Exactly one gesture is active at a time; the engine's transition table
/// enforces this.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Two-finger pinch in progress.
    Pinching(PinchContext),
    /// Single-finger pan in progress.
    Panning(PanContext),
}

impl GesturePhase {
    /// Returns `true` unless idle.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
