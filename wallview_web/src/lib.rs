// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM adapter for the `wallview` zoom engine.
//!
//! When targeting `wasm32` this crate provides:
//! - `ElementSurface`: a [`wallview::ScrollSurface`] over a scroll container
//!   and the content element inside it. Native scrolling is locked with
//!   `overflow: hidden`; the transform is written as a CSS `transform` with
//!   `transform-origin: 0 0`.
//! - `touch_points`: normalizes a `TouchList` into container-relative
//!   [`TouchPoint`]s.
//! - `attach_touch_listeners`: subscribes an engine to
//!   `touchstart`/`touchmove`/`touchend`/`touchcancel` with `passive: false`
//!   and calls `preventDefault` whenever the engine consumes an event.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn wire(
//!     container: web_sys::HtmlElement,
//!     content: web_sys::HtmlElement,
//! ) -> Result<wallview_web::TouchListeners, wasm_bindgen::JsValue> {
//!     use std::cell::RefCell;
//!     use std::rc::Rc;
//!
//!     let surface = wallview_web::ElementSurface::new(container, content);
//!     let (viewport, wall) = surface.measure();
//!     let mut engine = wallview::ZoomEngine::new(
//!         wallview::ZoomConfig::default(),
//!         surface,
//!         wallview::NeverBlocked,
//!         wallview::NoopObserver,
//!     );
//!     let _ = engine.set_metrics(viewport, wall);
//!     wallview_web::attach_touch_listeners(Rc::new(RefCell::new(engine)))
//! }
//! ```
//!
//! Everything here is glue; the behavior lives in `wallview` and is tested
//! there.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{ElementSurface, TouchListeners, attach_touch_listeners, touch_points};

use kurbo::Point;
use wallview::TouchPoint;

/// Converts a contact reported in client coordinates into a touch point
/// relative to `origin`, the client position of the scroll container.
#[must_use]
pub fn local_touch(id: i32, client: Point, origin: Point) -> TouchPoint {
    TouchPoint {
        id,
        position: Point::new(client.x - origin.x, client.y - origin.y),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::local_touch;

    #[test]
    fn touches_are_relative_to_the_container() {
        let t = local_touch(4, Point::new(130.0, 90.0), Point::new(30.0, 40.0));
        assert_eq!(t.id, 4);
        assert_eq!(t.position, Point::new(100.0, 50.0));
    }
}
