// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the `wallview` integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use wallview::{ScrollSurface, TouchPoint, ViewTransform, ZoomConfig, ZoomEngine};

/// In-memory stand-in for a scroll container.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub scroll: Vec2,
    pub locked: bool,
    pub transform: Option<ViewTransform>,
    pub applied: usize,
}

impl ScrollSurface for RecordingSurface {
    fn scroll_position(&self) -> Vec2 {
        self.scroll
    }

    fn lock_native_scroll(&mut self) {
        self.locked = true;
        self.scroll = Vec2::ZERO;
    }

    fn unlock_native_scroll(&mut self, position: Vec2) {
        self.scroll = position;
        self.locked = false;
    }

    fn apply_transform(&mut self, transform: &ViewTransform) {
        self.transform = Some(*transform);
        self.applied += 1;
    }

    fn clear_transform(&mut self) {
        self.transform = None;
    }
}

pub type Gate = Box<dyn Fn() -> bool>;
pub type Observer = Box<dyn FnMut(bool)>;
pub type Engine = ZoomEngine<RecordingSurface, Gate, Observer>;

/// Engine plus handles onto its collaborators.
pub struct Harness {
    pub engine: Engine,
    pub blocked: Rc<Cell<bool>>,
    pub notifications: Rc<RefCell<Vec<bool>>>,
}

impl Harness {
    pub fn new(viewport: Size, content: Size) -> Self {
        let blocked = Rc::new(Cell::new(false));
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let gate: Gate = {
            let blocked = Rc::clone(&blocked);
            Box::new(move || blocked.get())
        };
        let observer: Observer = {
            let notifications = Rc::clone(&notifications);
            Box::new(move |zoomed_out| notifications.borrow_mut().push(zoomed_out))
        };
        let mut engine = ZoomEngine::new(
            ZoomConfig::default(),
            RecordingSurface::default(),
            gate,
            observer,
        );
        engine.set_metrics(viewport, content).unwrap();
        Self {
            engine,
            blocked,
            notifications,
        }
    }

    /// 800x600 viewport over a 2000x1500 wall.
    pub fn standard() -> Self {
        Self::new(Size::new(800.0, 600.0), Size::new(2000.0, 1500.0))
    }

    /// 800x600 viewport over a 4000x3000 wall; edges stay out of the way at
    /// moderate scales.
    pub fn roomy() -> Self {
        Self::new(Size::new(800.0, 600.0), Size::new(4000.0, 3000.0))
    }

    pub fn last_notification(&self) -> Option<bool> {
        self.notifications.borrow().last().copied()
    }
}

/// Two contacts on a horizontal line, `distance` apart, centered on `center`.
pub fn pair_at(ids: [i32; 2], center: Point, distance: f64) -> [TouchPoint; 2] {
    let half = distance / 2.0;
    [
        TouchPoint::new(ids[0], center.x - half, center.y),
        TouchPoint::new(ids[1], center.x + half, center.y),
    ]
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-7,
        "{what}: expected {expected}, got {actual}"
    );
}

pub fn assert_close_vec(actual: Vec2, expected: Vec2, what: &str) {
    assert_close(actual.x, expected.x, what);
    assert_close(actual.y, expected.y, what);
}
