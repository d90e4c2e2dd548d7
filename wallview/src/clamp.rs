// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous edge clamping.
//!
//! The clamp is a pure function of the *candidate* offset and the scale. It is
//! re-evaluated every frame from the unclamped, anchor-derived value and never
//! applied as a correction to a previously clamped offset, so the result moves
//! continuously as the scale does.

use kurbo::{Rect, Size, Vec2};

use crate::config::ZoomConfig;
use crate::metrics::ViewportMetrics;

/// Keeps scaled content inside the padded viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeClamp {
    viewport: Size,
    content: Size,
    min_scale: f64,
    edge_padding: f64,
    min_padding_ratio: f64,
}

impl EdgeClamp {
    /// Creates a clamp for the given metrics, minimum scale and padding
    /// settings.
    #[must_use]
    pub fn new(metrics: &ViewportMetrics, min_scale: f64, config: &ZoomConfig) -> Self {
        Self {
            viewport: metrics.viewport(),
            content: metrics.content(),
            min_scale,
            edge_padding: config.edge_padding,
            min_padding_ratio: config.min_padding_ratio,
        }
    }

    /// Minimum scale the padding is interpolated against.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Padding in effect at `scale`.
    ///
    /// Full padding at `scale = 1`, `min_padding_ratio` of it at the minimum
    /// scale, linear in between. When the minimum scale is already `1` the
    /// full padding applies.
    #[must_use]
    pub fn padding_at(&self, scale: f64) -> f64 {
        let span = 1.0 - self.min_scale;
        let t = if span > f64::EPSILON {
            ((scale - self.min_scale) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let min_pad = self.edge_padding * self.min_padding_ratio;
        min_pad + (self.edge_padding - min_pad) * t
    }

    /// Returns the offset nearest to `candidate` that keeps content at `scale`
    /// within bounds. Each axis is handled independently.
    #[must_use]
    pub fn clamp(&self, candidate: Vec2, scale: f64) -> Vec2 {
        let pad = self.padding_at(scale);
        Vec2::new(
            clamp_axis(candidate.x, self.viewport.width, self.content.width * scale, pad),
            clamp_axis(candidate.y, self.viewport.height, self.content.height * scale, pad),
        )
    }

    /// Allowed offsets at `scale`, as a rectangle in offset space.
    ///
    /// An axis on which the content is centered has a zero-width interval.
    #[must_use]
    pub fn pannable_range(&self, scale: f64) -> Rect {
        let pad = self.padding_at(scale);
        let (x0, x1) = axis_range(self.viewport.width, self.content.width * scale, pad);
        let (y0, y1) = axis_range(self.viewport.height, self.content.height * scale, pad);
        Rect::new(x0, y0, x1, y1)
    }
}

fn axis_range(viewport_len: f64, scaled_len: f64, pad: f64) -> (f64, f64) {
    let available = viewport_len - 2.0 * pad;
    if available <= 0.0 || scaled_len <= available {
        let centered = (viewport_len - scaled_len) / 2.0;
        (centered, centered)
    } else {
        (viewport_len - pad - scaled_len, pad)
    }
}

fn clamp_axis(candidate: f64, viewport_len: f64, scaled_len: f64, pad: f64) -> f64 {
    let (lo, hi) = axis_range(viewport_len, scaled_len, pad);
    if lo == hi {
        // Fits: centered regardless of the candidate.
        return lo;
    }
    hi.min(lo.max(candidate))
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::EdgeClamp;
    use crate::config::ZoomConfig;
    use crate::limits::compute_min_scale;
    use crate::metrics::ViewportMetrics;

    fn wall() -> EdgeClamp {
        let metrics =
            ViewportMetrics::new(Size::new(800.0, 600.0), Size::new(2000.0, 1500.0)).unwrap();
        let config = ZoomConfig::default();
        let min_scale = compute_min_scale(metrics.viewport(), metrics.content(), config.edge_padding);
        EdgeClamp::new(&metrics, min_scale, &config)
    }

    #[test]
    fn padding_interpolates_from_half_to_full() {
        let clamp = wall();
        assert!((clamp.padding_at(1.0) - 20.0).abs() < 1e-12);
        assert!((clamp.padding_at(clamp.min_scale()) - 10.0).abs() < 1e-12);
        let mid = (1.0 + clamp.min_scale()) / 2.0;
        assert!((clamp.padding_at(mid) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn overflowing_axis_bounds_the_candidate() {
        let clamp = wall();
        // At scale 1 both axes overflow; the allowed range is [vw - pad - cw, pad].
        let out = clamp.clamp(Vec2::new(500.0, -5000.0), 1.0);
        assert_eq!(out, Vec2::new(20.0, 600.0 - 20.0 - 1500.0));
        let inside = clamp.clamp(Vec2::new(-300.0, -400.0), 1.0);
        assert_eq!(inside, Vec2::new(-300.0, -400.0));
    }

    #[test]
    fn fitting_axis_is_centered() {
        let clamp = wall();
        let s = clamp.min_scale();
        let out = clamp.clamp(Vec2::new(-999.0, 999.0), s);
        assert!((out.x - (800.0 - 2000.0 * s) / 2.0).abs() < 1e-9);
        assert!((out.y - (600.0 - 1500.0 * s) / 2.0).abs() < 1e-9);
        let range = clamp.pannable_range(s);
        assert_eq!(range.width(), 0.0);
        assert_eq!(range.height(), 0.0);
    }

    #[test]
    fn clamp_is_continuous_as_scale_changes() {
        let clamp = wall();
        let candidate = Vec2::new(400.0, 400.0);
        let mut prev = clamp.clamp(candidate, 1.0);
        let mut scale = 1.0;
        while scale > clamp.min_scale() {
            scale -= 0.001;
            let s = scale.max(clamp.min_scale());
            let next = clamp.clamp(candidate, s);
            assert!((next - prev).hypot() < 5.0, "jump at scale {s}");
            prev = next;
        }
    }

    #[test]
    fn degenerate_viewport_always_centers() {
        let metrics =
            ViewportMetrics::new(Size::new(30.0, 30.0), Size::new(1000.0, 1000.0)).unwrap();
        let config = ZoomConfig::default();
        let clamp = EdgeClamp::new(&metrics, 0.5, &config);
        let out = clamp.clamp(Vec2::new(-100.0, 7.0), 1.0);
        assert_eq!(out, Vec2::new(-485.0, -485.0));
    }
}
