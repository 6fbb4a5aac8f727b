//! Standalone demo: opens a window with two pickers sharing a readout.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_ruler::{horizontal_picker, PickerDelegate, PickerStyle, ValueRange};

struct Percent;

impl PickerDelegate for Percent {
    fn maximum_value(&self) -> Option<f64> {
        Some(100.0)
    }

    fn step_count(&self) -> Option<usize> {
        Some(20)
    }

    fn display_string(&self, _step: usize, value: f64) -> Option<String> {
        Some(format!("{value:.0}"))
    }

    fn did_select_value(&self, value: f64) {
        log::info!("percent picker selected {value:.2}");
    }
}

fn main() {
    env_logger::init();

    let weight = RwSignal::new(70.0);
    let percent = RwSignal::new(0.0);
    let range = ValueRange::new(40.0, 120.0, 80).unwrap();

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    label(move || format!("{:.1} kg", weight.get())),
                    horizontal_picker(weight)
                        .name("weight")
                        .value_range(range)
                        .style(|s| s.width_full()),
                    label(move || format!("{:.0} %", percent.get())),
                    horizontal_picker(percent)
                        .name("percent")
                        .delegate(Percent)
                        .picker_style(
                            PickerStyle::default()
                                .with_show_scale(false)
                                .with_marker_spacing(40.0)
                                .with_pointer_color(Color::rgb8(40, 120, 220)),
                        )
                        .start_at_mid_point()
                        .style(|s| s.width_full()),
                ))
                .style(|s| s.gap(12.0).padding(16.0).size_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 220.0))
                    .title("floem-ruler"),
            ),
        )
        .run();
}
