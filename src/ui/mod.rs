//! User Interface module
//!
//! Plain line-based console play.

pub mod console;

pub use console::{describe, report, Console};
