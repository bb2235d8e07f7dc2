//! Scoring functions organized by shape
//!
//! - `unimodal`: single optimum, minimized or maximized
//! - `multimodal`: many local optima
//! - `surrogate`: stand-ins for a cross-validated model metric

pub mod multimodal;
pub mod surrogate;
pub mod unimodal;

pub use multimodal::*;
pub use surrogate::*;
pub use unimodal::*;
