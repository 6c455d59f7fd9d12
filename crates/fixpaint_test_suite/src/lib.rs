//! Fixpaint Visual Test Suite
//!
//! Visual regression testing for the fixpaint rasterizer. Each test draws on
//! a software surface, exports it as a PNG and compares it pixel by pixel
//! against a stored reference image.
//!
//! # Test Categories
//!
//! - **shapes**: filled primitives and fill rules
//! - **strokes**: widths, caps and joins
//! - **dashes**: dash patterns on lines and closed shapes
//! - **gradients**: linear and radial brushes with each fill mode
//! - **transforms**: canvas matrices and XOR painting
//! - **clipping**: clip rectangles
//! - **images**: ARGB image blits

pub mod harness;
pub mod runner;
pub mod tests;

pub use harness::{TestContext, TestHarness, TestHarnessConfig, TestResult};
pub use runner::{RunResult, TestRunner, TestSuite};
