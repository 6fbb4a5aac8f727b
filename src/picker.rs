//! The horizontal picker view.
//!
//! The view scrolls a strip of markers past a fixed centre pointer. Offset 0
//! puts the first marker under the pointer; every marker is
//! [`PickerStyle::marker_spacing`] pixels further along. Dragging or wheeling
//! moves the offset, the offset is converted to a value and published, and
//! when the interaction ends the offset snaps to the nearest marker.

use std::cell::Cell;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::time::{Duration, Instant};

use floem::action::exec_after;
use floem::kurbo::{Line, Point, Rect, Shape, Stroke};
use floem::peniko::{Color, Gradient};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::text::{FamilyOwned, TextLayout};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::faded;
use crate::constants;
use crate::delegate::{self, PickerDelegate};
use crate::pointer;
use crate::range::ValueRange;
#[cfg(feature = "scale")]
use crate::scale::{self, ScaleLayer};
use crate::snap::SnapAnimation;
use crate::style::PickerStyle;
use crate::text;

enum PickerUpdate {
    Value(f64),
    Range(ValueRange),
    AnimationFrame,
    WheelSettled(u64),
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_x: f64,
    start_offset: f64,
}

/// One step's label, built when the step scrolls into view.
struct Marker {
    label: String,
    color: Color,
    text: Option<TextLayout>,
    #[cfg(feature = "scale")]
    scale: Option<ScaleLayer>,
}

pub struct HorizontalPicker {
    id: ViewId,
    name: Option<String>,
    value: f64,
    /// Range supplied by the caller, before delegate overrides.
    base_range: ValueRange,
    range: ValueRange,
    offset: f64,
    drag: Option<Drag>,
    snap: Option<SnapAnimation>,
    wheel_generation: u64,
    size: floem::taffy::prelude::Size<f32>,
    style: PickerStyle,
    families: Vec<FamilyOwned>,
    delegate: Option<Rc<dyn PickerDelegate>>,
    /// Markers for the steps last painted, keyed by step index.
    markers: HashMap<usize, Marker>,
    markers_dirty: bool,
    on_change: Option<Box<dyn Fn(f64)>>,
}

/// Creates a horizontal picker bound to `value`.
///
/// The picker writes the value under its pointer to the signal while the user
/// drags, and the snapped step value when the drag ends. Writing the signal
/// from outside scrolls the picker; values outside the range are clamped and
/// the clamped value is written back.
pub fn horizontal_picker(value: RwSignal<f64>) -> HorizontalPicker {
    let id = ViewId::new();

    // Set while the picker itself writes the signal, so the write is not
    // echoed back as an external update.
    let writing = Rc::new(Cell::new(false));

    let guard = writing.clone();
    create_effect(move |prev: Option<()>| {
        let v = value.get();
        if prev.is_none() || guard.get() {
            return;
        }
        id.update_state(PickerUpdate::Value(v));
    });

    let range = ValueRange::default();
    let initial = value.get_untracked();
    let style = PickerStyle::default();

    let mut picker = HorizontalPicker {
        id,
        name: None,
        value: range.clamp(initial),
        base_range: range,
        range,
        offset: range.offset_for_value(initial, style.marker_spacing()),
        drag: None,
        snap: None,
        wheel_generation: 0,
        size: Default::default(),
        families: text::parse_families(style.font_family()),
        style,
        delegate: None,
        markers: HashMap::new(),
        markers_dirty: true,
        on_change: Some(Box::new(move |v| {
            writing.set(true);
            value.set(v);
            writing.set(false);
        })),
    };
    if picker.value != initial {
        picker.emit(picker.value);
    }

    picker.style(|s| {
        s.height(constants::PICKER_HEIGHT)
            .min_width(constants::MARKER_LABEL_WIDTH as f32 * 3.0)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HorizontalPicker {
    /// Name used to tell pickers apart in log output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Fixed range. Call before [`start_at_mid_point`](Self::start_at_mid_point).
    pub fn value_range(mut self, range: ValueRange) -> Self {
        self.base_range = range;
        self.reload_data();
        self
    }

    /// Range recomputed whenever the signals read by `range_fn` change.
    pub fn range_fn(mut self, range_fn: impl Fn() -> ValueRange + 'static) -> Self {
        self.base_range = range_fn();
        self.reload_data();

        let id = self.id;
        create_effect(move |prev: Option<()>| {
            let range = range_fn();
            if prev.is_some() {
                id.update_state(PickerUpdate::Range(range));
            }
        });
        self
    }

    /// Pass an `Rc` to keep a handle on the delegate.
    pub fn delegate(mut self, delegate: impl PickerDelegate + 'static) -> Self {
        self.delegate = Some(Rc::new(delegate));
        self.reload_data();
        self
    }

    pub fn picker_style(mut self, style: PickerStyle) -> Self {
        self.families = text::parse_families(style.font_family());
        let spacing_changed = style.marker_spacing() != self.style.marker_spacing();
        self.style = style;
        if spacing_changed {
            self.offset = self.range.offset_for_value(self.value, self.spacing());
        }
        self.markers_dirty = true;
        self
    }

    /// Select the middle of the range on creation.
    pub fn start_at_mid_point(mut self) -> Self {
        self.move_to_mid_point_value();
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Pixels per value unit at the current range and spacing.
    pub fn scale(&self) -> f64 {
        self.range.pixel_scale(self.spacing())
    }

    /// Clamp `value` into the range, scroll to it and publish it.
    pub fn set_value(&mut self, value: f64) {
        self.snap = None;
        let clamped = self.range.clamp(value);
        self.offset = self.range.offset_for_value(clamped, self.spacing());
        if clamped != value {
            log::debug!("{}: clamped {value} to {clamped}", self.label());
            if clamped == self.value {
                // The signal holds the unclamped value; write the clamped one back.
                self.emit(clamped);
            }
        }
        self.report_value(clamped);
        self.id.request_paint();
    }

    pub fn move_to_mid_point_value(&mut self) {
        self.set_value(self.range.mid_point());
    }

    /// Re-query the delegate for the range, rebuild the markers and pull the
    /// value back inside the range if it fell out.
    ///
    /// A delegate answer that does not form a valid range is logged and the
    /// previous range is kept.
    pub fn reload_data(&mut self) {
        let range = match &self.delegate {
            Some(d) => match delegate::resolve_range(self.base_range, d.as_ref()) {
                Ok(range) => range,
                Err(err) => {
                    log::warn!("{}: delegate range rejected: {err}", self.label());
                    self.range
                }
            },
            None => self.base_range,
        };
        log::debug!(
            "{}: range {}..={} in {} steps",
            self.label(),
            range.min(),
            range.max(),
            range.steps()
        );
        self.range = range;
        self.markers_dirty = true;
        self.snap = None;

        let clamped = range.clamp(self.value);
        self.offset = range.offset_for_value(clamped, self.spacing());
        if clamped != self.value {
            self.report_value(clamped);
        }
        self.id.request_paint();
    }

    /// Move to the marker nearest the current offset.
    pub fn snap_to_marker(&mut self, animated: bool) {
        let spacing = self.spacing();
        let step = self.range.nearest_step(self.offset, spacing);
        let target = step as f64 * spacing;
        log::debug!("{}: snapping to step {step}", self.label());

        if animated && (target - self.offset).abs() > 0.5 {
            self.snap = Some(SnapAnimation::new(
                self.offset,
                target,
                Instant::now(),
                Duration::from_millis(constants::SNAP_DURATION_MS),
            ));
            self.schedule_frame();
        } else {
            self.snap = None;
            self.offset = target;
            self.report_value(self.range.value_at_step(step));
        }
        self.id.request_paint();
    }

    /// Publish the value under the pointer at `offset`.
    pub fn call_delegate_with_new_value_from_offset(&mut self, offset: f64) {
        let value = self.range.value_for_offset(offset, self.spacing());
        self.report_value(value);
    }

    fn spacing(&self) -> f64 {
        self.style.marker_spacing()
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("picker")
    }

    fn emit(&self, value: f64) {
        if let Some(cb) = &self.on_change {
            cb(value);
        }
    }

    fn notify_delegate(&self, value: f64) {
        if let Some(d) = &self.delegate {
            d.did_select_value(value);
        }
    }

    fn report_value(&mut self, value: f64) {
        if value == self.value {
            return;
        }
        self.value = value;
        self.emit(value);
        self.notify_delegate(value);
    }

    fn scroll_to(&mut self, offset: f64) {
        self.offset = self.range.clamp_offset(offset, self.spacing());
        self.call_delegate_with_new_value_from_offset(self.offset);
        self.id.request_paint();
    }

    fn begin_drag(&mut self, x: f64) {
        self.snap = None;
        self.drag = Some(Drag {
            start_x: x,
            start_offset: self.offset,
        });
    }

    /// Content follows the pointer, so moving right scrolls back.
    fn drag_to(&mut self, x: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        self.scroll_to(drag.start_offset - (x - drag.start_x));
        true
    }

    fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.snap_to_marker(true);
        }
    }

    fn wheel(&mut self, dx: f64, dy: f64) {
        self.snap = None;
        let delta = if dx.abs() > dy.abs() { dx } else { dy };
        self.scroll_to(self.offset + delta);

        self.wheel_generation += 1;
        let generation = self.wheel_generation;
        let id = self.id;
        exec_after(
            Duration::from_millis(constants::WHEEL_SETTLE_MS),
            move |_| id.update_state(PickerUpdate::WheelSettled(generation)),
        );
    }

    fn schedule_frame(&self) {
        let id = self.id;
        exec_after(
            Duration::from_millis(constants::FRAME_INTERVAL_MS),
            move |_| id.update_state(PickerUpdate::AnimationFrame),
        );
    }

    fn advance_snap(&mut self, now: Instant) {
        let Some(anim) = self.snap else {
            return;
        };
        if anim.is_finished(now) {
            self.snap = None;
            let spacing = self.spacing();
            let step = self.range.nearest_step(anim.target(), spacing);
            self.offset = step as f64 * spacing;
            self.report_value(self.range.value_at_step(step));
        } else {
            self.offset = anim.offset_at(now);
            self.call_delegate_with_new_value_from_offset(self.offset);
            self.schedule_frame();
        }
        self.id.request_paint();
    }

    fn apply(&mut self, update: PickerUpdate) {
        match update {
            PickerUpdate::Value(v) => {
                if self.drag.is_none() && v != self.value {
                    self.set_value(v);
                }
            }
            PickerUpdate::Range(range) => {
                self.base_range = range;
                self.reload_data();
            }
            PickerUpdate::AnimationFrame => self.advance_snap(Instant::now()),
            PickerUpdate::WheelSettled(generation) => {
                if generation == self.wheel_generation && self.drag.is_none() {
                    self.snap_to_marker(true);
                }
            }
        }
    }

    fn build_marker(&self, step: usize) -> Marker {
        let delegate = self.delegate.as_deref();
        let value = self.range.value_at_step(step);
        let label = delegate::marker_label(delegate, step, value);
        let color = delegate
            .and_then(|d| d.marker_color(step, value))
            .unwrap_or(self.style.text_color());
        #[cfg(feature = "scale")]
        let scale = self.style.show_scale().then(|| {
            let spacing = self.spacing();
            let label_height = scale::default_label_size_for_font(self.style.font_size()).height;
            ScaleLayer::new(
                label.clone(),
                floem::kurbo::Size::new(spacing, label_height),
                floem::kurbo::Size::new(spacing, constants::SCALE_HEIGHT),
                self.style.font_size(),
            )
            .with_label_color(color)
            .with_scale_color(self.style.border_color())
            .with_families(self.families.clone())
        });
        Marker {
            label,
            color,
            text: None,
            #[cfg(feature = "scale")]
            scale,
        }
    }

    /// Keep markers for exactly the `visible` steps, building missing ones.
    fn ensure_markers(&mut self, visible: RangeInclusive<usize>) {
        if self.markers_dirty {
            self.markers.clear();
            self.markers_dirty = false;
        }
        self.markers.retain(|step, _| visible.contains(step));
        for step in visible {
            if !self.markers.contains_key(&step) {
                let marker = self.build_marker(step);
                self.markers.insert(step, marker);
            }
        }
    }

    fn paint_background(&self, cx: &mut PaintCx, rect: Rect) {
        let rrect = rect.to_rounded_rect(self.style.corner_radius());
        cx.fill(&rrect, self.style.back_color(), 0.0);

        // Shade toward both edges so the strip reads as a drum.
        let edge = self.style.gradient_color();
        let clear = faded(edge, 0.0);
        let gradient = Gradient::new_linear((0.0, rect.y0), (0.0, rect.y1))
            .with_stops([edge, clear, clear, edge]);
        let path = rrect.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
    }

    fn paint_frame(&self, cx: &mut PaintCx, rect: Rect) {
        let radius = self.style.corner_radius();
        // Inner shadow along the top edge.
        let shadow = Line::new((rect.x0 + radius, 1.0), (rect.x1 - radius, 1.0));
        cx.stroke(&shadow, self.style.drop_shadow_color(), &Stroke::new(2.0));

        let rrect = rect.to_rounded_rect(radius);
        cx.stroke(&rrect, self.style.border_color(), &Stroke::new(1.0));
    }
}

fn paint_marker(
    cx: &mut PaintCx,
    marker: &mut Marker,
    center_x: f64,
    height: f64,
    style: &PickerStyle,
    families: &[FamilyOwned],
) {
    #[cfg(feature = "scale")]
    if let Some(layer) = &mut marker.scale {
        let frame = layer.frame_size();
        let top = ((height - frame.height + constants::POINTER_HEIGHT) / 2.0).max(0.0);
        layer.paint(cx, Point::new(center_x - frame.width / 2.0, top));
        return;
    }

    let layout = marker.text.get_or_insert_with(|| {
        text::label_layout(&marker.label, style.font_size(), marker.color, families)
    });
    let size = text::measure(layout);
    let center_y = (height + constants::POINTER_HEIGHT) / 2.0;
    cx.draw_text(
        layout,
        Point::new(center_x - size.width / 2.0, center_y - size.height / 2.0),
    );
}

impl View for HorizontalPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PickerUpdate>() {
            self.apply(*update);
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.begin_drag(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.drag_to(e.pos.x) {
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.end_drag();
                EventPropagation::Continue
            }
            Event::PointerWheel(e) => {
                self.wheel(e.delta.x, e.delta.y);
                EventPropagation::Stop
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        self.paint_background(cx, rect);

        cx.save();
        cx.clip(&rect.to_rounded_rect(self.style.corner_radius()));
        let spacing = self.spacing();
        let visible = self
            .range
            .visible_steps(self.offset, w, spacing, constants::MARKER_LABEL_WIDTH);
        self.ensure_markers(visible.clone());
        for step in visible {
            let x = w / 2.0 + step as f64 * spacing - self.offset;
            if let Some(marker) = self.markers.get_mut(&step) {
                paint_marker(cx, marker, x, h, &self.style, &self.families);
            }
        }
        cx.restore();

        self.paint_frame(cx, rect);
        pointer::paint_pointer(
            cx,
            rect,
            self.style.pointer_color(),
            self.style.drop_shadow_color(),
        );
    }
}
