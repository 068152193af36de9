//! # Substitutability: Rectangle and Square
//!
//! Code written against [`Resizable`] assumes width and height change
//! independently. [`Rectangle`] honours that. [`Square`] keeps its sides equal
//! by making each setter change both, so it cannot stand in for a rectangle:
//! [`use_it`] reports the mismatch between the area the caller expected and the
//! area it got.
//!
//! The square's behavior is the point of the example and is left as is.

use serde::Serialize;
use tracing::debug;

pub trait Resizable {
    fn name(&self) -> &'static str;
    fn width(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn height(&self) -> u32;
    fn set_height(&mut self, height: u32);

    /// Widened so that no pair of `u32` sides can overflow.
    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Resizable for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    width: u32,
    height: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl Resizable for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn width(&self) -> u32 {
        self.width
    }

    // Setting either side sets both.
    fn set_width(&mut self, width: u32) {
        self.width = width;
        self.height = width;
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
        self.width = height;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaReport {
    pub shape: &'static str,
    pub expected: u64,
    pub actual: u64,
}

impl AreaReport {
    /// True when the shape behaved like a rectangle.
    pub fn is_consistent(&self) -> bool {
        self.expected == self.actual
    }
}

/// Height [`use_it`] resizes to.
pub const RESIZE_HEIGHT: u32 = 10;

/// Set the height to [`RESIZE_HEIGHT`] and compare the resulting area with what
/// a rectangle would give.
pub fn use_it(shape: &mut dyn Resizable) -> AreaReport {
    let width = shape.width();
    shape.set_height(RESIZE_HEIGHT);
    let report = AreaReport {
        shape: shape.name(),
        expected: u64::from(RESIZE_HEIGHT) * u64::from(width),
        actual: shape.area(),
    };
    debug!(shape = report.shape, expected = report.expected, actual = report.actual, "area check");
    report
}
