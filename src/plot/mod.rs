//! # Plot Support
//!
//! Objects that can be drawn on a plot (fit results, likelihood curves, ...)
//! carry a y-axis description: a label, plus the range of y values seen so
//! far. This module provides that bookkeeping and the [`Plotable`] trait that
//! exposes it.
//!
//! ```rust
//! use genvector::plot::YAxis;
//!
//! let mut axis = YAxis::with_label("Events / 0.1");
//! for y in [3.0, 12.5, -1.0] {
//!     axis.update_limits(y);
//! }
//! assert_eq!(axis.min(), -1.0);
//! assert_eq!(axis.max(), 12.5);
//! ```

/// Label and running value range of a plot's y axis
///
/// Both limits start at zero, so the range always includes zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YAxis {
    label: String,
    min: f64,
    max: f64,
}

impl YAxis {
    /// Creates an unlabelled axis with both limits at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an axis with the given label
    pub fn with_label(label: impl Into<String>) -> Self {
        YAxis {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Widens the range so that it contains `y`
    pub fn update_limits(&mut self, y: f64) {
        if y > self.max {
            self.max = y;
        }
        if y < self.min {
            self.min = y;
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Something that can be placed on a plot
pub trait Plotable {
    /// The y-axis description of this object
    fn y_axis(&self) -> &YAxis;

    /// Mutable access to the y-axis description
    fn y_axis_mut(&mut self) -> &mut YAxis;

    fn y_axis_label(&self) -> &str {
        self.y_axis().label()
    }

    fn set_y_axis_label(&mut self, label: impl Into<String>)
    where
        Self: Sized,
    {
        self.y_axis_mut().set_label(label);
    }

    /// Record a y value that this object will draw
    fn update_y_axis_limits(&mut self, y: f64) {
        self.y_axis_mut().update_limits(y);
    }

    fn y_axis_min(&self) -> f64 {
        self.y_axis().min()
    }

    fn y_axis_max(&self) -> f64 {
        self.y_axis().max()
    }
}
