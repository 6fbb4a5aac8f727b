//! The centre pointer: a small downward triangle on the top edge marking the
//! selected position.

use floem::context::PaintCx;
use floem::kurbo::{BezPath, Point, Rect, Vec2};
use floem::peniko::Color;
use floem_renderer::Renderer;

use crate::constants;

/// Triangle `width` wide and `height` tall hanging from the middle of the
/// top edge of `bounds`.
pub(crate) fn pointer_path(bounds: Rect, width: f64, height: f64) -> BezPath {
    let cx = bounds.center().x;
    let top = bounds.y0;
    let mut path = BezPath::new();
    path.move_to(Point::new(cx - width / 2.0, top));
    path.line_to(Point::new(cx + width / 2.0, top));
    path.line_to(Point::new(cx, top + height));
    path.close_path();
    path
}

/// Paint the pointer with a one pixel drop shadow.
pub(crate) fn paint_pointer(cx: &mut PaintCx, bounds: Rect, color: Color, shadow: Color) {
    let path = pointer_path(bounds, constants::POINTER_WIDTH, constants::POINTER_HEIGHT);
    let mut shadow_path = path.clone();
    shadow_path.apply_affine(floem::kurbo::Affine::translate(Vec2::new(0.0, 1.0)));
    cx.fill(&shadow_path, shadow, 0.0);
    cx.fill(&path, color, 0.0);

    // Hairline down the centre so the selection reads on the scale.
    let x = bounds.center().x;
    let line = floem::kurbo::Line::new((x, bounds.y0 + constants::POINTER_HEIGHT), (x, bounds.y1));
    cx.stroke(&line, color, &floem::kurbo::Stroke::new(1.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use floem::kurbo::Shape;

    #[test]
    fn pointer_is_centred_on_top_edge() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 40.0);
        let path = pointer_path(bounds, 10.0, 8.0);
        let bbox = path.bounding_box();
        assert_eq!(bbox, Rect::new(95.0, 0.0, 105.0, 8.0));
        assert!(path.contains(Point::new(100.0, 2.0)));
        assert!(!path.contains(Point::new(96.0, 7.0)));
    }
}
