//! Text layout helpers for marker labels.

use floem::kurbo::Size;
use floem::peniko::Color;
use floem::text::{Attrs, AttrsList, FamilyOwned, TextLayout};

/// Parse a comma-separated family list; an absent list means the default
/// system family.
pub(crate) fn parse_families(family: Option<&str>) -> Vec<FamilyOwned> {
    family
        .map(|f| FamilyOwned::parse_list(f).collect())
        .unwrap_or_default()
}

/// Lay out a single line of `text`.
pub(crate) fn label_layout(
    text: &str,
    font_size: f32,
    color: Color,
    families: &[FamilyOwned],
) -> TextLayout {
    let mut attrs = Attrs::new().color(color).font_size(font_size);
    if !families.is_empty() {
        attrs = attrs.family(families);
    }
    let mut layout = TextLayout::new();
    layout.set_text(text, AttrsList::new(attrs));
    layout
}

pub(crate) fn measure(layout: &TextLayout) -> Size {
    layout.size()
}
