//! Planar Euclidean geometry (points, lines, circles).
//!
//! Purpose
//! - Provide the small set of Euclidean primitives the disk model is built
//!   from: orientation tests, lines with reflection, circles with inversion,
//!   and the perpendicular-circle construction.
//! - Keep every tolerance explicit (`GeomCfg`, or an `eps` argument).
//!
//! Conventions
//! - `Point` is `nalgebra::Vector2<f64>`; no separate point/vector split.
//! - Counterclockwise is the positive orientation (standard math axes, y up).
//!
//! Code cross-refs: `Line`, `Circle`, `circle_through_points_perpendicular_to_circle`,
//! `orientation`, `GeomCfg`

mod circle;
mod line;
mod types;
mod util;

pub use circle::{circle_through_points_perpendicular_to_circle, Circle};
pub use line::Line;
pub use types::{GeomCfg, GeomError, Orientation, Point};
pub use util::{
    bounding_box_area, distance, lex_cmp, orientation, points_close, rotate_around_origin,
};
