//! Data models for correlation measurements.

mod enums;
mod params;
mod trace;

pub use enums::{FunctionalKind, TaperType, WindowStrategy};
pub use params::{GeometryMode, WindowParams};
pub use trace::CorrelationTrace;
