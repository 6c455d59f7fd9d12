//! Fixpaint Parser
//!
//! Text parsers producing fixed-point values:
//!
//! - [`parse_number_list`]: separated number lists such as `"1, 2.5 -3e1"`
//! - [`parse_transform_list`]: SVG-style transform lists such as
//!   `"translate(10 20) rotate(45)"`, folded into one [`Matrix`]
//!
//! # Example
//!
//! ```ignore
//! use fixpaint_parser::{parse_number_list, parse_transform_list};
//!
//! let dash = parse_number_list("4, 2", ',')?;
//! let matrix = parse_transform_list("translate(50 50) scale(2)")?;
//! ```
//!
//! [`Matrix`]: fixpaint_core::Matrix

pub mod error;
pub mod number_list;
pub mod scanner;
pub mod transform;

pub use error::{ParseError, Result};
pub use number_list::parse_number_list;
pub use scanner::Scanner;
pub use transform::parse_transform_list;
