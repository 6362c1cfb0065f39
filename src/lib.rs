//! Functional core for the wellness product landing page
//!
//! Implements the behavioral surface of the page: the BMI calculator,
//! the hosted image-generation request cycle, and the page state machine
//! that ties user actions to both.

pub mod app;
pub mod bmi;
pub mod content;
pub mod error;
pub mod imagegen;
pub mod models;
pub mod page;

pub use error::{Error, Result};
