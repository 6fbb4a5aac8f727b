//! Ruler segment for a single step: the step's label over a band of tick
//! marks.
//!
//! A layer spans one marker cell. Its label area sits on top and the tick
//! band (the spacer) below it. Ticks are placed with normalized coordinates
//! inside the spacer, so the same layout works for any cell size.
//!
//! ```text
//!  |<----- label_size_per_step ----->|
//!  +---------------------------------+
//!  |              12.0               |
//!  +---------------------------------+
//!  |       '       |       '         |  spacer_size_per_step
//!  |   |   '   |   |   |   '   |     |
//!  +---------------------------------+
//! ```

use floem::context::PaintCx;
use floem::kurbo::{Line, Point, Rect, Size, Stroke};
use floem::peniko::Color;
use floem::text::{FamilyOwned, TextLayout};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;
use crate::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickKind {
    /// On the step itself, under the label.
    Major,
    /// Halfway between two steps.
    Half,
    Minor,
}

impl TickKind {
    /// Tick length as a fraction of the spacer height.
    fn length(self) -> f64 {
        match self {
            Self::Major => 1.0,
            Self::Half => 0.6,
            Self::Minor => 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TickMark {
    pub(crate) line: Line,
    pub(crate) kind: TickKind,
}

/// Default label box for `font_size`: one line tall, one marker label wide.
pub(crate) fn default_label_size_for_font(font_size: f32) -> Size {
    Size::new(
        constants::MARKER_LABEL_WIDTH,
        (font_size as f64 * constants::LINE_HEIGHT).ceil(),
    )
}

/// Map `normalized` (each component clamped to 0.0–1.0) into a rect of
/// `rect_size` anchored at the origin.
pub(crate) fn point_in_bounded_rect(rect_size: Size, normalized: Point) -> Point {
    Point::new(
        normalized.x.clamp(0.0, 1.0) * rect_size.width,
        normalized.y.clamp(0.0, 1.0) * rect_size.height,
    )
}

pub(crate) struct ScaleLayer {
    primary_label: String,
    label_color: Color,
    scale_color: Color,
    label_size_per_step: Size,
    spacer_size_per_step: Size,
    font_size: f32,
    families: Vec<FamilyOwned>,
    text: Option<TextLayout>,
}

impl ScaleLayer {
    pub(crate) fn new(
        primary_label: impl Into<String>,
        label_size_per_step: Size,
        spacer_size_per_step: Size,
        font_size: f32,
    ) -> Self {
        Self {
            primary_label: primary_label.into(),
            label_color: Color::BLACK,
            scale_color: Color::rgb8(120, 120, 120),
            label_size_per_step,
            spacer_size_per_step,
            font_size,
            families: Vec::new(),
            text: None,
        }
    }

    pub(crate) fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self.text = None;
        self
    }

    pub(crate) fn with_scale_color(mut self, color: Color) -> Self {
        self.scale_color = color;
        self
    }

    pub(crate) fn with_families(mut self, families: Vec<FamilyOwned>) -> Self {
        self.families = families;
        self.text = None;
        self
    }

    /// Bounding size of label plus tick band.
    pub(crate) fn frame_size(&self) -> Size {
        Size::new(
            self.label_size_per_step
                .width
                .max(self.spacer_size_per_step.width),
            self.label_size_per_step.height + self.spacer_size_per_step.height,
        )
    }

    /// Largest font size, up to the layer's own, at which `label` fits the
    /// per-step label width.
    pub(crate) fn font_size_for_primary_label(&self, label: &str) -> f32 {
        let layout = text::label_layout(label, self.font_size, self.label_color, &self.families);
        let measured = text::measure(&layout).width;
        math::fit_font_size(
            self.font_size,
            measured,
            self.label_size_per_step.width,
            constants::MIN_FONT_SIZE,
        )
    }

    /// Ticks in layer coordinates, left to right.
    pub(crate) fn tick_marks(&self) -> Vec<TickMark> {
        let spacer = self.spacer_size_per_step;
        let top = self.label_size_per_step.height;
        let n = constants::TICKS_PER_STEP.max(1);
        (0..n)
            .map(|k| {
                let kind = if 2 * k == n {
                    TickKind::Major
                } else if k == 0 {
                    TickKind::Half
                } else {
                    TickKind::Minor
                };
                let nx = k as f64 / n as f64;
                let start = point_in_bounded_rect(spacer, Point::new(nx, 1.0 - kind.length()));
                let end = point_in_bounded_rect(spacer, Point::new(nx, 1.0));
                TickMark {
                    line: Line::new((start.x, start.y + top), (end.x, end.y + top)),
                    kind,
                }
            })
            .collect()
    }

    /// Lay out the label at its fitted size, if not already done.
    pub(crate) fn prepare(&mut self) {
        if self.text.is_some() {
            return;
        }
        let size = self.font_size_for_primary_label(&self.primary_label);
        self.text = Some(text::label_layout(
            &self.primary_label,
            size,
            self.label_color,
            &self.families,
        ));
    }

    /// Paint with the layer's top-left corner at `origin`.
    pub(crate) fn paint(&mut self, cx: &mut PaintCx, origin: Point) {
        self.prepare();
        if let Some(layout) = &self.text {
            let size = text::measure(layout);
            let label_rect = Rect::from_origin_size(origin, self.label_size_per_step);
            let pos = Point::new(
                label_rect.center().x - size.width / 2.0,
                label_rect.center().y - size.height / 2.0,
            );
            cx.draw_text(layout, pos);
        }

        let minor = Stroke::new(constants::SCALE_WIDTH);
        let major = Stroke::new(constants::SCALE_WIDTH * 1.5);
        let offset = origin.to_vec2();
        for tick in self.tick_marks() {
            let line = Line::new(tick.line.p0 + offset, tick.line.p1 + offset);
            let stroke = if tick.kind == TickKind::Major { &major } else { &minor };
            cx.stroke(&line, self.scale_color, stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer() -> ScaleLayer {
        ScaleLayer::new("5.0", Size::new(32.0, 20.0), Size::new(32.0, 10.0), 16.0)
    }

    #[test]
    fn normalized_points_are_bounded() {
        let size = Size::new(40.0, 10.0);
        assert_eq!(point_in_bounded_rect(size, Point::new(0.5, 0.5)), Point::new(20.0, 5.0));
        assert_eq!(point_in_bounded_rect(size, Point::new(-1.0, 2.0)), Point::new(0.0, 10.0));
    }

    #[test]
    fn default_label_size_tracks_font() {
        assert_eq!(default_label_size_for_font(10.0), Size::new(40.0, 12.0));
        assert_eq!(default_label_size_for_font(16.0), Size::new(40.0, 20.0));
    }

    #[test]
    fn frame_stacks_label_over_spacer() {
        assert_eq!(layer().frame_size(), Size::new(32.0, 30.0));
    }

    #[test]
    fn major_tick_sits_under_the_label_centre() {
        let ticks = layer().tick_marks();
        assert_eq!(ticks.len(), constants::TICKS_PER_STEP);

        let major: Vec<_> = ticks.iter().filter(|t| t.kind == TickKind::Major).collect();
        assert_eq!(major.len(), 1);
        assert_eq!(major[0].line, Line::new((16.0, 20.0), (16.0, 30.0)));

        let half = ticks.iter().find(|t| t.kind == TickKind::Half).unwrap();
        assert_eq!(half.line.p0.x, 0.0);
        assert!((half.line.p0.y - 24.0).abs() < 1e-9);

        // Every tick reaches the bottom of the band.
        assert!(ticks.iter().all(|t| t.line.p1.y == 30.0));
    }
}
