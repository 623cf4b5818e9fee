mod types;

pub use types::{FillRule, Point, Size, SweepDirection};
