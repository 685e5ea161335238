//! Axis panning
//!
//! Panning shifts the visible window of an axis by a fraction of its own
//! width, clamped so the window never leaves the data range and never
//! changes size.

use tracing::trace;

use crate::chart::AxisAccess;
use crate::navigation::Direction;

/// Number of steps a full view is divided into when panning
pub const DEFAULT_PAN_GRANULARITY: u32 = 3;

/// Which axis family a pan applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    X,
    Y,
}

/// Current and absolute numeric range of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtremes {
    /// Visible minimum
    pub min: f64,

    /// Visible maximum
    pub max: f64,

    /// Smallest value in the underlying data
    pub data_min: f64,

    /// Largest value in the underlying data
    pub data_max: f64,
}

impl AxisExtremes {
    pub fn new(min: f64, max: f64, data_min: f64, data_max: f64) -> Self {
        Self {
            min,
            max,
            data_min,
            data_max,
        }
    }

    /// Width of the visible window
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `data_min <= min <= max <= data_max` holds with finite values
    pub fn is_consistent(&self) -> bool {
        [self.min, self.max, self.data_min, self.data_max]
            .iter()
            .all(|v| v.is_finite())
            && self.data_min <= self.min
            && self.min <= self.max
            && self.max <= self.data_max
    }
}

/// A single pan step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanRequest {
    pub direction: Direction,

    /// How many steps the visible window is divided into. Zero falls back
    /// to [`DEFAULT_PAN_GRANULARITY`].
    pub granularity: u32,
}

impl PanRequest {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            granularity: DEFAULT_PAN_GRANULARITY,
        }
    }

    pub fn with_granularity(mut self, granularity: u32) -> Self {
        self.granularity = granularity;
        self
    }

    fn effective_granularity(&self) -> u32 {
        if self.granularity == 0 {
            DEFAULT_PAN_GRANULARITY
        } else {
            self.granularity
        }
    }
}

/// Compute the panned window for `extremes`.
///
/// Returns `None` when the input window is inconsistent with its data
/// bounds, in which case the caller must leave the axis untouched.
pub fn pan_window(extremes: &AxisExtremes, request: PanRequest) -> Option<(f64, f64)> {
    if !extremes.is_consistent() {
        return None;
    }

    let size = extremes.size();
    if size >= extremes.data_max - extremes.data_min {
        // A window covering the whole data range has nowhere to go
        return Some((extremes.data_min, extremes.data_max));
    }

    let step = size / f64::from(request.effective_granularity()) * request.direction.signum();
    let mut new_min = extremes.min + step;
    let mut new_max = extremes.max + step;

    match request.direction {
        Direction::Backward if new_min < extremes.data_min => {
            new_min = extremes.data_min;
            new_max = new_min + size;
        }
        Direction::Forward if new_max > extremes.data_max => {
            new_max = extremes.data_max;
            new_min = new_max - size;
        }
        _ => {}
    }

    // Rounding in the clamp above can push the far end a few ulps past the data range
    Some((new_min.max(extremes.data_min), new_max.min(extremes.data_max)))
}

/// Pan the first axis of `kind` by one step.
///
/// Returns whether new extremes were applied. A missing axis or an
/// inconsistent window is a silent no-op.
pub fn pan_step<A: AxisAccess + ?Sized>(axis: &A, kind: AxisKind, request: PanRequest) -> bool {
    let Some(extremes) = axis.extremes(kind) else {
        trace!("No {:?} axis to pan", kind);
        return false;
    };

    match pan_window(&extremes, request) {
        Some((min, max)) => {
            trace!(
                "Panning {:?} axis {:?}: [{}, {}] -> [{}, {}]",
                kind,
                request.direction,
                extremes.min,
                extremes.max,
                min,
                max
            );
            axis.set_extremes(kind, min, max);
            true
        }
        None => {
            trace!("Skipping pan on inconsistent {:?} axis: {:?}", kind, extremes);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    struct SingleAxis {
        extremes: Mutex<Option<AxisExtremes>>,
    }

    impl AxisAccess for SingleAxis {
        fn extremes(&self, kind: AxisKind) -> Option<AxisExtremes> {
            match kind {
                AxisKind::X => *self.extremes.lock(),
                AxisKind::Y => None,
            }
        }

        fn set_extremes(&self, _kind: AxisKind, min: f64, max: f64) {
            if let Some(e) = self.extremes.lock().as_mut() {
                e.min = min;
                e.max = max;
            }
        }
    }

    #[test]
    fn test_pan_forward_without_clamp() {
        let extremes = AxisExtremes::new(0.0, 10.0, 0.0, 30.0);
        let (min, max) = pan_window(&extremes, PanRequest::new(Direction::Forward)).unwrap();
        assert!(close(min, 10.0 / 3.0));
        assert!(close(max, 10.0 + 10.0 / 3.0));
        assert!(close(max - min, 10.0));
    }

    #[test]
    fn test_pan_forward_clamps_to_data_max() {
        let extremes = AxisExtremes::new(25.0, 30.0, 0.0, 30.0);
        let (min, max) = pan_window(&extremes, PanRequest::new(Direction::Forward)).unwrap();
        assert!(close(max, 30.0));
        assert!(close(min, 25.0));
    }

    #[test]
    fn test_pan_backward_clamps_to_data_min() {
        let extremes = AxisExtremes::new(2.0, 8.0, 0.0, 30.0);
        let (min, max) = pan_window(&extremes, PanRequest::new(Direction::Backward)).unwrap();
        assert!(close(min, 0.0));
        assert!(close(max, 6.0));
    }

    #[test]
    fn test_pan_backward_without_clamp() {
        let extremes = AxisExtremes::new(12.0, 18.0, 0.0, 30.0);
        let (min, max) = pan_window(&extremes, PanRequest::new(Direction::Backward)).unwrap();
        assert!(close(min, 10.0));
        assert!(close(max, 16.0));
    }

    #[test]
    fn test_granularity_changes_step_size() {
        let extremes = AxisExtremes::new(0.0, 10.0, 0.0, 100.0);
        let request = PanRequest::new(Direction::Forward).with_granularity(5);
        let (min, max) = pan_window(&extremes, request).unwrap();
        assert!(close(min, 2.0));
        assert!(close(max, 12.0));

        let zero = PanRequest::new(Direction::Forward).with_granularity(0);
        let (min, _) = pan_window(&extremes, zero).unwrap();
        assert!(close(min, 10.0 / 3.0));
    }

    #[test]
    fn test_degenerate_window_is_noop() {
        let extremes = AxisExtremes::new(5.0, 5.0, 0.0, 10.0);
        assert_eq!(pan_window(&extremes, PanRequest::new(Direction::Forward)), Some((5.0, 5.0)));
    }

    #[test]
    fn test_inconsistent_windows_are_rejected() {
        let inverted = AxisExtremes::new(8.0, 2.0, 0.0, 10.0);
        assert_eq!(pan_window(&inverted, PanRequest::new(Direction::Forward)), None);

        let outside = AxisExtremes::new(-5.0, 5.0, 0.0, 10.0);
        assert_eq!(pan_window(&outside, PanRequest::new(Direction::Backward)), None);

        let nan = AxisExtremes::new(f64::NAN, 5.0, 0.0, 10.0);
        assert_eq!(pan_window(&nan, PanRequest::new(Direction::Backward)), None);
    }

    #[test]
    fn test_full_width_window_stays_consistent_after_pan() {
        let axis = SingleAxis {
            extremes: Mutex::new(Some(AxisExtremes::new(0.3, 1.0, 0.3, 1.0))),
        };
        assert!(pan_step(&axis, AxisKind::X, PanRequest::new(Direction::Forward)));
        let e = axis.extremes(AxisKind::X).unwrap();
        assert!(e.is_consistent(), "{:?}", e);
        assert_eq!((e.min, e.max), (0.3, 1.0));

        // Further pans must still apply
        assert!(pan_step(&axis, AxisKind::X, PanRequest::new(Direction::Backward)));
        assert!(pan_step(&axis, AxisKind::X, PanRequest::new(Direction::Forward)));

        let narrow = AxisExtremes::new(0.1, 0.3, 0.1, 0.3);
        let (min, max) = pan_window(&narrow, PanRequest::new(Direction::Backward)).unwrap();
        assert!(AxisExtremes::new(min, max, 0.1, 0.3).is_consistent());
        assert_eq!((min, max), (0.1, 0.3));
    }

    #[test]
    fn test_pan_step_writes_axis() {
        let axis = SingleAxis {
            extremes: Mutex::new(Some(AxisExtremes::new(0.0, 10.0, 0.0, 30.0))),
        };
        assert!(pan_step(&axis, AxisKind::X, PanRequest::new(Direction::Forward)));
        let e = axis.extremes(AxisKind::X).unwrap();
        assert!(close(e.min, 10.0 / 3.0));

        // No y axis on this chart
        assert!(!pan_step(&axis, AxisKind::Y, PanRequest::new(Direction::Forward)));
    }
}
