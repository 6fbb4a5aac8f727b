//! Normalized component access for `peniko::Color`, used when deriving the
//! picker's gradient and shadow shades from the configured colors.

use floem::peniko::Color;

/// Color channels as f64 in the 0.0–1.0 range.
pub trait ColorComponents {
    /// Red component (0.0–1.0).
    fn red(&self) -> f64;
    /// Green component (0.0–1.0).
    fn green(&self) -> f64;
    /// Blue component (0.0–1.0).
    fn blue(&self) -> f64;
    /// Alpha component (0.0–1.0).
    fn alpha(&self) -> f64;
}

impl ColorComponents for Color {
    fn red(&self) -> f64 {
        self.r as f64 / 255.0
    }
    fn green(&self) -> f64 {
        self.g as f64 / 255.0
    }
    fn blue(&self) -> f64 {
        self.b as f64 / 255.0
    }
    fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

/// The same color with its alpha multiplied by `factor` (clamped to 0.0–1.0).
pub(crate) fn faded(color: Color, factor: f64) -> Color {
    let a = color.alpha() * factor.clamp(0.0, 1.0);
    Color::rgba(color.red(), color.green(), color.blue(), a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_normalized() {
        let c = Color::rgba8(255, 0, 51, 102);
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 0.0);
        assert!((c.blue() - 0.2).abs() < 1e-9);
        assert!((c.alpha() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn faded_scales_alpha_only() {
        let c = faded(Color::rgba8(10, 20, 30, 200), 0.5);
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
        assert_eq!(c.a, 100);
        assert_eq!(faded(Color::WHITE, 3.0).a, 255);
    }
}
