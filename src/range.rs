//! The picker's value range and the arithmetic that ties scroll offsets to
//! values.
//!
//! Marker `i` sits `i * spacing` pixels into the scroll content, so offset 0
//! shows the minimum under the pointer and `steps * spacing` shows the
//! maximum.

use std::ops::RangeInclusive;

use crate::constants;
use crate::error::{PickerError, Result};
use crate::math;

/// A validated `min..=max` range divided into `steps` equal steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
    steps: usize,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: constants::DEFAULT_STEPS as f64,
            steps: constants::DEFAULT_STEPS,
        }
    }
}

impl ValueRange {
    /// Create a range, rejecting non-finite bounds, `min > max` and zero steps.
    pub fn new(min: f64, max: f64, steps: usize) -> Result<Self> {
        if !min.is_finite() {
            return Err(PickerError::NonFiniteBound(min));
        }
        if !max.is_finite() {
            return Err(PickerError::NonFiniteBound(max));
        }
        if min > max {
            return Err(PickerError::InvertedRange { min, max });
        }
        if steps == 0 {
            return Err(PickerError::ZeroSteps);
        }
        Ok(Self { min, max, steps })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Same range with a new minimum.
    pub fn with_min(self, min: f64) -> Result<Self> {
        Self::new(min, self.max, self.steps)
    }

    /// Same range with a new maximum.
    pub fn with_max(self, max: f64) -> Result<Self> {
        Self::new(self.min, max, self.steps)
    }

    /// Same bounds with a new step count.
    pub fn with_steps(self, steps: usize) -> Result<Self> {
        Self::new(self.min, self.max, steps)
    }

    /// Clamp `value` into the range. NaN becomes the minimum.
    pub fn clamp(&self, value: f64) -> f64 {
        math::clamp_or_low(value, self.min, self.max)
    }

    /// Value covered by a single step.
    pub fn step_value(&self) -> f64 {
        self.span() / self.steps as f64
    }

    /// Value at marker `step`; indices past the last marker clamp to it.
    pub fn value_at_step(&self, step: usize) -> f64 {
        let step = step.min(self.steps);
        if step == self.steps {
            // Avoid accumulating rounding error at the top end.
            return self.max;
        }
        self.min + step as f64 * self.step_value()
    }

    pub fn mid_point(&self) -> f64 {
        self.min + self.span() / 2.0
    }

    /// Pixels per value unit for markers `spacing` pixels apart.
    ///
    /// An empty span has no meaningful scale and reports 0.
    pub fn pixel_scale(&self, spacing: f64) -> f64 {
        let step_value = self.step_value();
        if step_value <= 0.0 {
            0.0
        } else {
            spacing / step_value
        }
    }

    /// Largest valid scroll offset.
    pub fn content_width(&self, spacing: f64) -> f64 {
        self.steps as f64 * spacing
    }

    pub fn clamp_offset(&self, offset: f64, spacing: f64) -> f64 {
        math::clamp_or_low(offset, 0.0, self.content_width(spacing))
    }

    /// Value under the pointer at scroll `offset`.
    pub fn value_for_offset(&self, offset: f64, spacing: f64) -> f64 {
        let scale = self.pixel_scale(spacing);
        if scale == 0.0 {
            return self.min;
        }
        let offset = self.clamp_offset(offset, spacing);
        self.clamp(self.min + offset / scale)
    }

    /// Scroll offset that puts `value` under the pointer.
    pub fn offset_for_value(&self, value: f64, spacing: f64) -> f64 {
        let scale = self.pixel_scale(spacing);
        (self.clamp(value) - self.min) * scale
    }

    /// Index of the marker closest to `offset`.
    pub fn nearest_step(&self, offset: f64, spacing: f64) -> usize {
        if spacing <= 0.0 {
            return 0;
        }
        let offset = self.clamp_offset(offset, spacing);
        ((offset / spacing).round() as usize).min(self.steps)
    }

    /// Offset of the marker closest to `offset`.
    pub fn snap_offset(&self, offset: f64, spacing: f64) -> f64 {
        self.nearest_step(offset, spacing) as f64 * spacing
    }

    /// Markers whose centres lie within `margin` of a viewport `width` wide
    /// scrolled to `offset`. The pointer sits at the viewport centre.
    ///
    /// Returns an empty range when nothing is visible.
    pub fn visible_steps(
        &self,
        offset: f64,
        width: f64,
        spacing: f64,
        margin: f64,
    ) -> RangeInclusive<usize> {
        if spacing <= 0.0 || width <= 0.0 {
            #[allow(clippy::reversed_empty_ranges)]
            return 1..=0;
        }
        let half = width / 2.0 + margin;
        let first = ((offset - half) / spacing).ceil().max(0.0);
        let last = ((offset + half) / spacing).floor().min(self.steps as f64);
        if last < first {
            #[allow(clippy::reversed_empty_ranges)]
            return 1..=0;
        }
        first as usize..=last as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACING: f64 = 32.0;

    fn range(min: f64, max: f64, steps: usize) -> ValueRange {
        ValueRange::new(min, max, steps).expect("valid range")
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert_eq!(
            ValueRange::new(5.0, 1.0, 4),
            Err(PickerError::InvertedRange { min: 5.0, max: 1.0 })
        );
        assert_eq!(ValueRange::new(0.0, 1.0, 0), Err(PickerError::ZeroSteps));
        assert!(matches!(
            ValueRange::new(f64::NAN, 1.0, 1),
            Err(PickerError::NonFiniteBound(_))
        ));
        assert!(ValueRange::new(0.0, f64::INFINITY, 1).is_err());
    }

    #[test]
    fn setters_keep_invariants() {
        let r = range(0.0, 10.0, 10);
        assert!(r.with_min(11.0).is_err());
        assert!(r.with_max(-1.0).is_err());
        assert!(r.with_steps(0).is_err());
        assert_eq!(r.with_max(20.0).unwrap().max(), 20.0);
    }

    #[test]
    fn clamps_values() {
        let r = range(-5.0, 5.0, 10);
        assert_eq!(r.clamp(-10.0), -5.0);
        assert_eq!(r.clamp(10.0), 5.0);
        assert_eq!(r.clamp(1.5), 1.5);
        assert_eq!(r.clamp(f64::NAN), -5.0);
    }

    #[test]
    fn scale_converts_offsets_and_values() {
        let r = range(0.0, 100.0, 10);
        // One step is 10 units across 32px.
        assert!((r.pixel_scale(SPACING) - 3.2).abs() < 1e-12);
        assert_eq!(r.content_width(SPACING), 320.0);
        assert!((r.value_for_offset(64.0, SPACING) - 20.0).abs() < 1e-9);
        assert!((r.offset_for_value(25.0, SPACING) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn offsets_outside_content_clamp() {
        let r = range(10.0, 20.0, 5);
        assert_eq!(r.value_for_offset(-50.0, SPACING), 10.0);
        assert_eq!(r.value_for_offset(10_000.0, SPACING), 20.0);
        assert_eq!(r.offset_for_value(99.0, SPACING), r.content_width(SPACING));
    }

    #[test]
    fn empty_span_is_degenerate_but_safe() {
        let r = range(3.0, 3.0, 4);
        assert_eq!(r.pixel_scale(SPACING), 0.0);
        assert_eq!(r.value_for_offset(40.0, SPACING), 3.0);
        assert_eq!(r.offset_for_value(3.0, SPACING), 0.0);
        assert_eq!(r.value_at_step(2), 3.0);
    }

    #[test]
    fn snaps_to_nearest_marker() {
        let r = range(0.0, 15.0, 15);
        assert_eq!(r.nearest_step(15.0, SPACING), 0);
        assert_eq!(r.nearest_step(17.0, SPACING), 1);
        assert_eq!(r.nearest_step(-20.0, SPACING), 0);
        assert_eq!(r.nearest_step(9_999.0, SPACING), 15);
        assert_eq!(r.snap_offset(70.0, SPACING), 64.0);
    }

    #[test]
    fn step_values_land_on_bounds() {
        let r = range(0.1, 0.7, 3);
        assert_eq!(r.value_at_step(0), 0.1);
        assert_eq!(r.value_at_step(3), 0.7);
        assert_eq!(r.value_at_step(99), 0.7);
        assert!((r.value_at_step(1) - 0.3).abs() < 1e-12);
        assert!((r.mid_point() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn visible_steps_cover_viewport() {
        let r = range(0.0, 15.0, 15);
        // 200px wide at offset 0: centre at marker 0, right edge 100px away.
        assert_eq!(r.visible_steps(0.0, 200.0, SPACING, 0.0), 0..=3);
        assert_eq!(r.visible_steps(160.0, 200.0, SPACING, 0.0), 2..=8);
        assert_eq!(r.visible_steps(480.0, 200.0, SPACING, 20.0), 12..=15);
        assert!(r.visible_steps(0.0, 0.0, SPACING, 0.0).is_empty());
        assert!(r.visible_steps(5_000.0, 100.0, SPACING, 0.0).is_empty());
    }
}
