// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunable constants for the zoom engine.
///
/// The defaults are empirically chosen values that feel right on phones and
/// tablets; they are exposed so hosts can adjust them rather than re-derive
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Padding kept between the content and the viewport edge at `scale = 1`,
    /// in viewport pixels.
    ///
    /// The minimum scale is derived with this full padding on every side.
    pub edge_padding: f64,
    /// Fraction of [`ZoomConfig::edge_padding`] that remains at the minimum
    /// scale. The padding is interpolated linearly in between.
    pub min_padding_ratio: f64,
    /// A pinch that ends above this scale returns to native scrolling.
    pub snap_back_threshold: f64,
    /// Scales below this count as zoomed out; single-finger panning is only
    /// handled by the engine below it.
    pub zoomed_threshold: f64,
    /// Finger distances shorter than this are treated as degenerate and never
    /// used as a pinch denominator.
    pub min_pinch_distance: f64,
}

impl ZoomConfig {
    /// Default padding at `scale = 1`.
    pub const DEFAULT_EDGE_PADDING: f64 = 20.0;
    /// Default padding fraction at the minimum scale.
    pub const DEFAULT_MIN_PADDING_RATIO: f64 = 0.5;
    /// Default snap-back threshold.
    pub const DEFAULT_SNAP_BACK_THRESHOLD: f64 = 0.95;
    /// Default zoomed-out threshold.
    pub const DEFAULT_ZOOMED_THRESHOLD: f64 = 0.999;
    /// Default degenerate pinch distance.
    pub const DEFAULT_MIN_PINCH_DISTANCE: f64 = 1.0;

    /// Returns a copy with every non-finite or out-of-range field replaced by
    /// its default.
    ///
    /// The engine sanitizes its configuration on construction so that no
    /// setting can ever feed `NaN` into the transform.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f64, ok: bool, fallback: f64| {
            if value.is_finite() && ok { value } else { fallback }
        };
        Self {
            edge_padding: pick(
                self.edge_padding,
                self.edge_padding >= 0.0,
                defaults.edge_padding,
            ),
            min_padding_ratio: pick(
                self.min_padding_ratio,
                (0.0..=1.0).contains(&self.min_padding_ratio),
                defaults.min_padding_ratio,
            ),
            snap_back_threshold: pick(
                self.snap_back_threshold,
                self.snap_back_threshold > 0.0 && self.snap_back_threshold <= 1.0,
                defaults.snap_back_threshold,
            ),
            zoomed_threshold: pick(
                self.zoomed_threshold,
                self.zoomed_threshold > 0.0 && self.zoomed_threshold <= 1.0,
                defaults.zoomed_threshold,
            ),
            min_pinch_distance: pick(
                self.min_pinch_distance,
                self.min_pinch_distance > 0.0,
                defaults.min_pinch_distance,
            ),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            edge_padding: Self::DEFAULT_EDGE_PADDING,
            min_padding_ratio: Self::DEFAULT_MIN_PADDING_RATIO,
            snap_back_threshold: Self::DEFAULT_SNAP_BACK_THRESHOLD,
            zoomed_threshold: Self::DEFAULT_ZOOMED_THRESHOLD,
            min_pinch_distance: Self::DEFAULT_MIN_PINCH_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomConfig;

    #[test]
    fn defaults_match_documented_constants() {
        let config = ZoomConfig::default();
        assert_eq!(config.edge_padding, 20.0);
        assert_eq!(config.min_padding_ratio, 0.5);
        assert_eq!(config.snap_back_threshold, 0.95);
        assert_eq!(config.zoomed_threshold, 0.999);
    }

    #[test]
    fn sanitized_keeps_valid_values() {
        let config = ZoomConfig {
            edge_padding: 8.0,
            min_padding_ratio: 1.0,
            snap_back_threshold: 0.9,
            zoomed_threshold: 0.99,
            min_pinch_distance: 4.0,
        };
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn sanitized_replaces_non_finite_and_out_of_range() {
        let config = ZoomConfig {
            edge_padding: f64::NAN,
            min_padding_ratio: 1.5,
            snap_back_threshold: 0.0,
            zoomed_threshold: f64::INFINITY,
            min_pinch_distance: -1.0,
        };
        assert_eq!(config.sanitized(), ZoomConfig::default());
    }
}
