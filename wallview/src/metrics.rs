// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Reasons a pair of viewport/content sizes cannot drive the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// A dimension was `NaN` or infinite.
    #[error("viewport or content dimension is not finite")]
    NonFinite,
    /// The viewport has zero or negative area.
    #[error("viewport has no area")]
    EmptyViewport,
    /// The content has zero or negative area.
    #[error("content has no area")]
    EmptyContent,
}

/// Cached viewport and native content sizes.
///
/// Both sizes are in CSS/device pixels as reported by the layout collaborator;
/// the content size is the unscaled size of the canvas at `scale = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    viewport: Size,
    content: Size,
}

impl ViewportMetrics {
    /// Validates and wraps a viewport size and a content size.
    pub fn new(viewport: Size, content: Size) -> Result<Self, MetricsError> {
        if !(viewport.is_finite() && content.is_finite()) {
            return Err(MetricsError::NonFinite);
        }
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Err(MetricsError::EmptyViewport);
        }
        if content.width <= 0.0 || content.height <= 0.0 {
            return Err(MetricsError::EmptyContent);
        }
        Ok(Self { viewport, content })
    }

    /// Visible viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Unscaled content size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }
}
