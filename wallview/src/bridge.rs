// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hand-off between native scrolling and explicit-transform presentation.
//!
//! Both directions run to completion inside a single call with no callbacks
//! into the host other than the [`ScrollSurface`] writes themselves, so the
//! renderer never observes a half-switched state.

use kurbo::Vec2;

use crate::transform::{PresentationMode, TransformState, ViewTransform};

/// The render target: a natively scrollable container whose content can also
/// be positioned by an explicit transform.
///
/// Implementations are thin adapters over the host UI (see `wallview_web` for
/// the DOM). All methods are expected to take effect before the next frame is
/// painted.
pub trait ScrollSurface {
    /// Current native scroll position of the container.
    fn scroll_position(&self) -> Vec2;

    /// Disables native scrolling and zeroes the container's scroll position,
    /// leaving the transform solely responsible for placement.
    fn lock_native_scroll(&mut self);

    /// Scrolls the container to `position` and re-enables native scrolling.
    fn unlock_native_scroll(&mut self, position: Vec2);

    /// Renders `transform` on the content.
    fn apply_transform(&mut self, transform: &ViewTransform);

    /// Removes any transform from the content.
    fn clear_transform(&mut self);
}

/// Switches `state` from native scrolling to an equivalent explicit transform.
///
/// The current scroll position `(sx, sy)` becomes the offset `(-sx, -sy)` at
/// scale `1`, so the first transformed frame is pixel-identical to the last
/// scrolled one. Does nothing if already transformed.
///
/// The offset is not clamped. On an axis where the content is narrower than
/// the padded viewport, the native layout is not centered, so this first
/// frame sits outside the clamped range and the next clamped frame moves the
/// content to the centered offset.
pub fn enter_transform<S: ScrollSurface + ?Sized>(surface: &mut S, state: &mut TransformState) {
    if state.mode == PresentationMode::Transform {
        return;
    }
    let scroll = surface.scroll_position();
    let transform = ViewTransform::new(-scroll, 1.0);
    surface.lock_native_scroll();
    surface.apply_transform(&transform);
    *state = TransformState {
        transform,
        mode: PresentationMode::Transform,
    };
    log::debug!("native -> transform at scroll ({}, {})", scroll.x, scroll.y);
}

/// Switches `state` back to native scrolling.
///
/// The scroll position is restored from the current offset as
/// `(-offset_x, -offset_y)`. The scale is not consulted; callers only hand
/// off once the view is at (or is being snapped to) native resolution.
/// Returns the scroll position handed to the surface, or `None` if the state
/// was already native.
pub fn exit_to_native<S: ScrollSurface + ?Sized>(
    surface: &mut S,
    state: &mut TransformState,
) -> Option<Vec2> {
    if state.mode == PresentationMode::Native {
        return None;
    }
    let scroll = -state.transform.offset;
    surface.clear_transform();
    surface.unlock_native_scroll(scroll);
    *state = TransformState::NATIVE;
    log::debug!("transform -> native at scroll ({}, {})", scroll.x, scroll.y);
    Some(scroll)
}
