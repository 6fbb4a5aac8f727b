//! Sizing, timing, and styling constants for the picker.

/// Horizontal distance between two adjacent markers
pub const MARKER_SPACING: f64 = 32.0;

/// Width reserved for a marker label
pub const MARKER_LABEL_WIDTH: f64 = 40.0;

/// Default step count when neither a range nor a delegate provides one
pub const DEFAULT_STEPS: usize = 15;

/// Default picker height
pub const PICKER_HEIGHT: f32 = 44.0;

/// Corner radius of the picker body
pub const RADIUS: f64 = 6.0;

/// Default label font size
pub const FONT_SIZE: f32 = 16.0;

/// Smallest font size a label is shrunk to
#[cfg(feature = "scale")]
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Line height as a multiple of the font size
#[cfg(feature = "scale")]
pub const LINE_HEIGHT: f64 = 1.2;

/// Pointer triangle width
pub const POINTER_WIDTH: f64 = 10.0;

/// Pointer triangle height
pub const POINTER_HEIGHT: f64 = 8.0;

/// Height of a major scale tick
#[cfg(feature = "scale")]
pub const SCALE_HEIGHT: f64 = 10.0;

/// Stroke width of a scale tick
#[cfg(feature = "scale")]
pub const SCALE_WIDTH: f64 = 1.0;

/// Scale ticks per step, including the major tick
#[cfg(feature = "scale")]
pub const TICKS_PER_STEP: usize = 4;

/// Duration of the animated snap, in milliseconds
pub const SNAP_DURATION_MS: u64 = 180;

/// Interval between snap animation frames, in milliseconds
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Idle time after the last wheel event before snapping, in milliseconds
pub const WHEEL_SETTLE_MS: u64 = 140;
