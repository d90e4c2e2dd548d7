// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Size, Vec2};
use wallview::{
    ModalGate, ScrollSurface, TouchDisposition, TouchPoint, ViewTransform, ZoomEngine,
    ZoomObserver,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent, TouchList};

use crate::local_touch;

/// A scroll container and the content element it scrolls.
#[derive(Clone, Debug)]
pub struct ElementSurface {
    container: HtmlElement,
    content: HtmlElement,
}

impl ElementSurface {
    /// Wraps a scroll container and its content element.
    pub fn new(container: HtmlElement, content: HtmlElement) -> Self {
        set_style(&content, "transform-origin", "0 0");
        set_style(&container, "touch-action", "pan-x pan-y");
        Self { container, content }
    }

    /// The scroll container.
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// The transformed content element.
    pub fn content(&self) -> &HtmlElement {
        &self.content
    }

    /// Client position of the container's top-left corner.
    pub fn origin(&self) -> Point {
        let rect = self.container.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    /// Visible viewport size and unscaled content size, for
    /// [`ZoomEngine::set_metrics`].
    pub fn measure(&self) -> (Size, Size) {
        let viewport = Size::new(
            f64::from(self.container.client_width()),
            f64::from(self.container.client_height()),
        );
        let content = Size::new(
            f64::from(self.content.offset_width()),
            f64::from(self.content.offset_height()),
        );
        (viewport, content)
    }
}

impl ScrollSurface for ElementSurface {
    fn scroll_position(&self) -> Vec2 {
        Vec2::new(
            f64::from(self.container.scroll_left()),
            f64::from(self.container.scroll_top()),
        )
    }

    fn lock_native_scroll(&mut self) {
        set_style(&self.container, "overflow", "hidden");
        set_style(&self.container, "touch-action", "none");
        self.container.set_scroll_left(0);
        self.container.set_scroll_top(0);
    }

    fn unlock_native_scroll(&mut self, position: Vec2) {
        set_style(&self.container, "overflow", "auto");
        set_style(&self.container, "touch-action", "pan-x pan-y");
        self.container.scroll_to_with_x_and_y(position.x, position.y);
    }

    fn apply_transform(&mut self, transform: &ViewTransform) {
        set_style(&self.content, "transform", &transform.to_css());
    }

    fn clear_transform(&mut self) {
        if let Err(err) = self.content.style().remove_property("transform") {
            log::warn!("failed to clear transform: {err:?}");
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("failed to set {property}: {err:?}");
    }
}

/// Normalizes every contact in `list` relative to `origin`.
pub fn touch_points(list: &TouchList, origin: Point) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| {
            let client = Point::new(f64::from(t.client_x()), f64::from(t.client_y()));
            local_touch(t.identifier(), client, origin)
        })
        .collect()
}

#[derive(Clone, Copy)]
enum Phase {
    Start,
    Move,
    End,
    Cancel,
}

const EVENTS: [(&str, Phase); 4] = [
    ("touchstart", Phase::Start),
    ("touchmove", Phase::Move),
    ("touchend", Phase::End),
    ("touchcancel", Phase::Cancel),
];

type Listener = Closure<dyn FnMut(TouchEvent)>;

/// Live touch subscriptions; dropping this removes them.
pub struct TouchListeners {
    target: HtmlElement,
    listeners: Vec<(&'static str, Listener)>,
}

impl core::fmt::Debug for TouchListeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TouchListeners")
            .field("target", &self.target)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Drop for TouchListeners {
    fn drop(&mut self) {
        for (name, listener) in &self.listeners {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {name} listener: {err:?}");
            }
        }
    }
}

/// Feeds the container's touch events into `engine`.
///
/// Listeners are registered with `passive: false` so consumed events can
/// suppress the browser's own pinch and pan. Events that arrive while the
/// engine is already borrowed are dropped.
pub fn attach_touch_listeners<G, O>(
    engine: Rc<RefCell<ZoomEngine<ElementSurface, G, O>>>,
) -> Result<TouchListeners, JsValue>
where
    G: ModalGate + 'static,
    O: ZoomObserver + 'static,
{
    let target = engine.borrow().surface().container().clone();
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    let mut listeners = Vec::with_capacity(EVENTS.len());
    for (name, phase) in EVENTS {
        let engine = Rc::clone(&engine);
        let listener: Listener = Closure::new(move |event: TouchEvent| {
            let Ok(mut engine) = engine.try_borrow_mut() else {
                return;
            };
            let touches = touch_points(&event.touches(), engine.surface().origin());
            let disposition = match phase {
                Phase::Start => engine.on_touch_start(&touches),
                Phase::Move => engine.on_touch_move(&touches),
                Phase::End => engine.on_touch_end(&touches),
                Phase::Cancel => engine.on_touch_cancel(&touches),
            };
            if disposition == TouchDisposition::Consumed {
                event.prevent_default();
            }
        });
        target.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            listener.as_ref().unchecked_ref(),
            &options,
        )?;
        listeners.push((name, listener));
    }
    Ok(TouchListeners { target, listeners })
}
