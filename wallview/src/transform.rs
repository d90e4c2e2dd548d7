// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point, Vec2};

/// Uniform scale plus translation mapping content space into screen space.
///
/// `offset` is where the unscaled content origin lands in viewport pixels, so
/// a content point `p` is drawn at `offset + scale * p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Screen position of the content origin.
    pub offset: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl ViewTransform {
    /// The identity transform: native resolution, no offset.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from an offset and a scale.
    #[must_use]
    pub const fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Maps a content-space point to screen space.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        Point::new(
            self.offset.x + self.scale * pt.x,
            self.offset.y + self.scale * pt.y,
        )
    }

    /// Maps a screen-space point back to content space.
    ///
    /// `scale` must be non-zero; the engine keeps it at or above the minimum
    /// scale, which is itself floored above zero.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset.x) / self.scale,
            (pt.y - self.offset.y) / self.scale,
        )
    }

    /// Returns the equivalent affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Formats the value of a CSS `transform` property for this transform.
    ///
    /// Assumes the target element uses `transform-origin: 0 0`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Which mechanism currently positions the content on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PresentationMode {
    /// Native document scrolling with no transform applied.
    #[default]
    Native,
    /// Native scrolling locked; an explicit transform positions the content.
    Transform,
}

/// The transform triple plus the presentation mode it is rendered through.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TransformState {
    /// Current transform. Identity whenever `mode` is native.
    pub transform: ViewTransform,
    /// Current presentation mode.
    pub mode: PresentationMode,
}

impl TransformState {
    /// Identity transform presented through native scrolling.
    pub const NATIVE: Self = Self {
        transform: ViewTransform::IDENTITY,
        mode: PresentationMode::Native,
    };

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.transform.offset
    }

    /// Returns `true` when presented through an explicit transform.
    #[must_use]
    pub fn is_transformed(&self) -> bool {
        self.mode == PresentationMode::Transform
    }
}
