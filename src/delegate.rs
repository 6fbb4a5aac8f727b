//! Data source and selection observer for a picker.

use std::rc::Rc;

use floem::peniko::Color;

use crate::error::Result;
use crate::range::ValueRange;

/// Supplies the picker's range and labels, and hears about selections.
///
/// Every query is optional: returning `None` keeps the picker's own range
/// or default label for that item.
pub trait PickerDelegate {
    fn minimum_value(&self) -> Option<f64> {
        None
    }

    fn maximum_value(&self) -> Option<f64> {
        None
    }

    fn step_count(&self) -> Option<usize> {
        None
    }

    /// Label text for the marker at `step`, whose value is `value`.
    fn display_string(&self, _step: usize, _value: f64) -> Option<String> {
        None
    }

    /// Label color for one marker, overriding the style's text color.
    fn marker_color(&self, _step: usize, _value: f64) -> Option<Color> {
        None
    }

    /// Called whenever the value under the pointer changes.
    fn did_select_value(&self, value: f64);
}

impl<D: PickerDelegate + ?Sized> PickerDelegate for Rc<D> {
    fn minimum_value(&self) -> Option<f64> {
        (**self).minimum_value()
    }

    fn maximum_value(&self) -> Option<f64> {
        (**self).maximum_value()
    }

    fn step_count(&self) -> Option<usize> {
        (**self).step_count()
    }

    fn display_string(&self, step: usize, value: f64) -> Option<String> {
        (**self).display_string(step, value)
    }

    fn marker_color(&self, step: usize, value: f64) -> Option<Color> {
        (**self).marker_color(step, value)
    }

    fn did_select_value(&self, value: f64) {
        (**self).did_select_value(value)
    }
}

/// Overlay the delegate's answers on `base`.
pub(crate) fn resolve_range(base: ValueRange, delegate: &dyn PickerDelegate) -> Result<ValueRange> {
    ValueRange::new(
        delegate.minimum_value().unwrap_or(base.min()),
        delegate.maximum_value().unwrap_or(base.max()),
        delegate.step_count().unwrap_or(base.steps()),
    )
}

/// Text shown for marker `step`.
pub(crate) fn marker_label(delegate: Option<&dyn PickerDelegate>, step: usize, value: f64) -> String {
    delegate
        .and_then(|d| d.display_string(step, value))
        .unwrap_or_else(|| format!("{value:.1}"))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::PickerError;

    #[derive(Default)]
    struct Percent {
        selected: RefCell<Vec<f64>>,
    }

    impl PickerDelegate for Percent {
        fn maximum_value(&self) -> Option<f64> {
            Some(100.0)
        }

        fn step_count(&self) -> Option<usize> {
            Some(10)
        }

        fn display_string(&self, _step: usize, value: f64) -> Option<String> {
            Some(format!("{value:.0}%"))
        }

        fn did_select_value(&self, value: f64) {
            self.selected.borrow_mut().push(value);
        }
    }

    struct Silent;

    impl PickerDelegate for Silent {
        fn did_select_value(&self, _value: f64) {}
    }

    struct Broken;

    impl PickerDelegate for Broken {
        fn step_count(&self) -> Option<usize> {
            Some(0)
        }

        fn did_select_value(&self, _value: f64) {}
    }

    #[test]
    fn delegate_overrides_only_what_it_answers() {
        let base = ValueRange::new(20.0, 30.0, 5).unwrap();
        let resolved = resolve_range(base, &Percent::default()).unwrap();
        assert_eq!(resolved.min(), 20.0);
        assert_eq!(resolved.max(), 100.0);
        assert_eq!(resolved.steps(), 10);

        assert_eq!(resolve_range(base, &Silent).unwrap(), base);
    }

    #[test]
    fn invalid_delegate_answers_are_rejected() {
        let base = ValueRange::default();
        assert_eq!(resolve_range(base, &Broken), Err(PickerError::ZeroSteps));
    }

    #[test]
    fn labels_fall_back_to_one_decimal() {
        assert_eq!(marker_label(None, 3, 2.26), "2.3");
        assert_eq!(marker_label(Some(&Silent), 0, 7.0), "7.0");
        assert_eq!(marker_label(Some(&Percent::default()), 2, 20.0), "20%");
    }

    #[test]
    fn selections_reach_the_delegate() {
        let delegate = Percent::default();
        delegate.did_select_value(40.0);
        assert_eq!(*delegate.selected.borrow(), vec![40.0]);
    }

    #[test]
    fn shared_handles_forward_to_the_delegate() {
        let shared = Rc::new(Percent::default());
        let handle = shared.clone();
        let base = ValueRange::default();
        assert_eq!(
            resolve_range(base, &handle).unwrap(),
            resolve_range(base, shared.as_ref()).unwrap()
        );
        assert_eq!(marker_label(Some(&handle), 1, 10.0), "10%");
        handle.did_select_value(55.0);
        assert_eq!(*shared.selected.borrow(), vec![55.0]);
    }
}
