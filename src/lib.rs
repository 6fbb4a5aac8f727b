//! # floem-ruler
//!
//! A horizontal scrolling value picker for [Floem](https://github.com/lapce/floem).
//!
//! The picker shows a ruler of labeled markers sliding under a fixed centre
//! pointer. Dragging or scrolling selects a value within a bounded range, and
//! releasing snaps to the nearest step.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_ruler::{horizontal_picker, ValueRange};
//!
//! let value = RwSignal::new(5.0);
//! let range = ValueRange::new(0.0, 10.0, 20).unwrap();
//! // Use `horizontal_picker(value).value_range(range)` in your Floem view tree.
//! ```

mod color;
mod constants;
mod delegate;
mod error;
mod math;
mod picker;
mod pointer;
mod range;
#[cfg(feature = "scale")]
mod scale;
mod snap;
mod style;
mod text;

pub use color::ColorComponents;
pub use delegate::PickerDelegate;
pub use error::{PickerError, Result};
pub use picker::{horizontal_picker, HorizontalPicker};
pub use range::ValueRange;
pub use style::PickerStyle;
