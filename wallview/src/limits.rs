// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Lower bound on any computed minimum scale.
///
/// Keeps `scale > 0` for viewports smaller than twice the padding.
pub const MIN_SCALE_FLOOR: f64 = 1e-3;

/// Returns the "fit everything" scale.
///
/// This is the largest scale at which the whole content fits inside the
/// viewport with `padding` on every side, capped at `1.0` since the engine
/// never zooms past native resolution:
///
/// ```text
/// min((vw - 2p) / cw, (vh - 2p) / ch, 1)
/// ```
///
/// The result is never below [`MIN_SCALE_FLOOR`].
#[must_use]
pub fn compute_min_scale(viewport: Size, content: Size, padding: f64) -> f64 {
    let fit_x = (viewport.width - 2.0 * padding) / content.width;
    let fit_y = (viewport.height - 2.0 * padding) / content.height;
    let scale = fit_x.min(fit_y).min(1.0);
    if scale.is_finite() {
        scale.max(MIN_SCALE_FLOOR)
    } else {
        MIN_SCALE_FLOOR
    }
}
