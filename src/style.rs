//! Visual configuration of the picker.

use floem::peniko::Color;

use crate::constants;

/// Colors, font and layout knobs for a [`HorizontalPicker`](crate::HorizontalPicker).
///
/// Built with the `with_*` methods on top of [`PickerStyle::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyle {
    border_color: Color,
    drop_shadow_color: Color,
    gradient_color: Color,
    back_color: Color,
    text_color: Color,
    pointer_color: Color,
    font_family: Option<String>,
    font_size: f32,
    show_scale: bool,
    corner_radius: f64,
    marker_spacing: f64,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            border_color: Color::rgb8(160, 160, 160),
            drop_shadow_color: Color::rgba8(0, 0, 0, 90),
            gradient_color: Color::rgb8(200, 200, 200),
            back_color: Color::rgb8(250, 250, 250),
            text_color: Color::rgb8(40, 40, 40),
            pointer_color: Color::rgb8(220, 60, 50),
            font_family: None,
            font_size: constants::FONT_SIZE,
            show_scale: cfg!(feature = "scale"),
            corner_radius: constants::RADIUS,
            marker_spacing: constants::MARKER_SPACING,
        }
    }
}

impl PickerStyle {
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_drop_shadow_color(mut self, color: Color) -> Self {
        self.drop_shadow_color = color;
        self
    }

    /// Color of the shading at the top and bottom edges.
    pub fn with_gradient_color(mut self, color: Color) -> Self {
        self.gradient_color = color;
        self
    }

    pub fn with_back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_pointer_color(mut self, color: Color) -> Self {
        self.pointer_color = color;
        self
    }

    /// Comma-separated family list, e.g. `"Inter, sans-serif"`.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Label font size. Non-positive sizes keep the default.
    pub fn with_font_size(mut self, size: f32) -> Self {
        if size.is_finite() && size > 0.0 {
            self.font_size = size;
        } else {
            log::warn!("ignoring font size {size}, keeping {}", self.font_size);
        }
        self
    }

    /// Draw ruler ticks under the labels. Without the `scale` feature the
    /// flag is accepted but has no effect.
    pub fn with_show_scale(mut self, show: bool) -> Self {
        self.show_scale = show;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Pixel distance between adjacent markers. Non-positive values keep the
    /// default.
    pub fn with_marker_spacing(mut self, spacing: f64) -> Self {
        if spacing.is_finite() && spacing > 0.0 {
            self.marker_spacing = spacing;
        } else {
            log::warn!(
                "ignoring marker spacing {spacing}, keeping {}",
                self.marker_spacing
            );
        }
        self
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn drop_shadow_color(&self) -> Color {
        self.drop_shadow_color
    }

    pub fn gradient_color(&self) -> Color {
        self.gradient_color
    }

    pub fn back_color(&self) -> Color {
        self.back_color
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn pointer_color(&self) -> Color {
        self.pointer_color
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn show_scale(&self) -> bool {
        self.show_scale
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn marker_spacing(&self) -> f64 {
        self.marker_spacing
    }
}
