//! Visual test cases organized by category

pub mod clipping;
pub mod gradients;
pub mod shapes;

use crate::runner::TestSuite;

/// Create all test suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![
        shapes::suite(),
        strokes::suite(),
        dashes::suite(),
        gradients::suite(),
        transforms::suite(),
        clipping::suite(),
        images::suite(),
    ]
}
