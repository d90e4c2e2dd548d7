// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wallview: pinch-to-zoom and pan for a natively scrolled 2D canvas.
//!
//! A large canvas (the "wall") is normally shown with ordinary document
//! scrolling. This crate lets a touch user pinch out to see more of it and pan
//! around while zoomed out. It reconciles two presentation modes:
//! - **Native**: native scrolling, no transform, `scale = 1`.
//! - **Transform**: native scrolling locked, content placed by an explicit
//!   uniform scale + translation.
//!
//! Switching between them is a single-call hand-off that keeps the picture
//! pixel-identical, and every frame while transformed is clamped so the content
//! stays inside the padded viewport.
//!
//! The crate is headless. Callers:
//! - Implement [`ScrollSurface`] for their render target (see `wallview_web`
//!   for the DOM).
//! - Supply a [`ModalGate`] and a [`ZoomObserver`] (closures work).
//! - Feed normalized touch lists into [`ZoomEngine`] and honor the returned
//!   [`TouchDisposition`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use wallview::{
//!     NeverBlocked, ScrollSurface, TouchPoint, ViewTransform, ZoomConfig, ZoomEngine,
//! };
//!
//! #[derive(Default)]
//! struct Wall {
//!     scroll: Vec2,
//!     transform: Option<ViewTransform>,
//! }
//!
//! impl ScrollSurface for Wall {
//!     fn scroll_position(&self) -> Vec2 {
//!         self.scroll
//!     }
//!     fn lock_native_scroll(&mut self) {
//!         self.scroll = Vec2::ZERO;
//!     }
//!     fn unlock_native_scroll(&mut self, position: Vec2) {
//!         self.scroll = position;
//!     }
//!     fn apply_transform(&mut self, transform: &ViewTransform) {
//!         self.transform = Some(*transform);
//!     }
//!     fn clear_transform(&mut self) {
//!         self.transform = None;
//!     }
//! }
//!
//! let mut zoomed = false;
//! let mut engine = ZoomEngine::new(
//!     ZoomConfig::default(),
//!     Wall::default(),
//!     NeverBlocked,
//!     |z: bool| zoomed = z,
//! );
//! engine
//!     .set_metrics(Size::new(800.0, 600.0), Size::new(2000.0, 1500.0))
//!     .unwrap();
//!
//! // Two fingers 200px apart pinch in to 100px: half scale.
//! engine.on_touch_start(&[TouchPoint::new(0, 300.0, 300.0), TouchPoint::new(1, 500.0, 300.0)]);
//! engine.on_touch_move(&[TouchPoint::new(0, 350.0, 300.0), TouchPoint::new(1, 450.0, 300.0)]);
//! engine.on_touch_end(&[]);
//!
//! assert_eq!(engine.state().scale(), 0.5);
//! assert!(engine.is_zoomed_out());
//! drop(engine);
//! assert!(zoomed);
//! ```
//!
//! ## Design notes
//!
//! - The clamp is re-evaluated every frame from the unclamped, anchor-derived
//!   offset, never as a correction of the last clamped value. This is what
//!   keeps edges from snapping.
//! - The engine never zooms past native resolution and has no inertia.
//! - Only one- and two-finger gestures are recognized.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod bridge;
mod clamp;
mod config;
mod engine;
mod gate;
mod gesture;
mod limits;
mod metrics;
mod transform;

pub use bridge::{ScrollSurface, enter_transform, exit_to_native};
pub use clamp::EdgeClamp;
pub use config::ZoomConfig;
pub use engine::{TouchDisposition, ZoomEngine};
pub use gate::{ModalGate, NeverBlocked, NoopObserver, ZoomObserver};
pub use gesture::{GesturePhase, PanContext, PinchContext, TouchPoint};
pub use limits::{MIN_SCALE_FLOOR, compute_min_scale};
pub use metrics::{MetricsError, ViewportMetrics};
pub use transform::{PresentationMode, TransformState, ViewTransform};
