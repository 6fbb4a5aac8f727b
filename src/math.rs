//! Scalar helpers shared by the range model, the snap animation and the
//! scale layer. Kept free of Floem types so they test without a window.

/// Linear interpolation between `a` and `b`; `t` is not clamped.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic ease-out over 0.0–1.0. Inputs outside that range are clamped.
pub(crate) fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Clamp that tolerates NaN by mapping it to `lo`.
pub(crate) fn clamp_or_low(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        lo
    } else {
        v.clamp(lo, hi)
    }
}

/// Shrink `size` so text measured `measured` wide at that size fits in
/// `available`. Text width is treated as linear in font size.
///
/// Never grows past `size` and never drops below `min_size`.
#[cfg(feature = "scale")]
pub(crate) fn fit_font_size(size: f32, measured: f64, available: f64, min_size: f32) -> f32 {
    if measured <= available || measured <= 0.0 {
        return size;
    }
    if available <= 0.0 {
        return min_size.min(size);
    }
    let fitted = (size as f64 * available / measured) as f32;
    fitted.max(min_size).min(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        // Ease-out runs ahead of linear in the first half.
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn clamp_maps_nan_to_low() {
        assert_eq!(clamp_or_low(f64::NAN, 1.0, 3.0), 1.0);
        assert_eq!(clamp_or_low(5.0, 1.0, 3.0), 3.0);
        assert_eq!(clamp_or_low(2.0, 1.0, 3.0), 2.0);
    }

    #[cfg(feature = "scale")]
    #[test]
    fn fit_font_size_only_shrinks() {
        assert_eq!(fit_font_size(16.0, 20.0, 40.0, 8.0), 16.0);
        let shrunk = fit_font_size(16.0, 80.0, 40.0, 8.0);
        assert!((shrunk - 8.0).abs() < 1e-6);
        let shrunk = fit_font_size(16.0, 50.0, 40.0, 8.0);
        assert!((shrunk - 12.8).abs() < 1e-4);
    }

    #[cfg(feature = "scale")]
    #[test]
    fn fit_font_size_respects_minimum() {
        assert_eq!(fit_font_size(16.0, 400.0, 40.0, 8.0), 8.0);
        assert_eq!(fit_font_size(16.0, 40.0, 0.0, 8.0), 8.0);
    }

    #[test]
    fn lerp_is_unclamped() {
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(10.0, 20.0, 1.5), 25.0);
    }
}
