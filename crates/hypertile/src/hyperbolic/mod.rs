//! Hyperbolic primitives in the Poincaré disk model.
//!
//! Purpose
//! - Represent hyperbolic lines as a tagged union (`DiskLine::{Diameter, Arc}`)
//!   with a single `reflect` operation, the isometry used by the tessellation engine.
//! - Provide `PoincareDisk::line_through`, which takes the diameter branch for
//!   points collinear with the center and the perpendicular-circle branch otherwise.
//!   A pair the circle construction rejects as degenerate also gets the diameter.
//! - Solve the {p,q} fundamental triangle in closed form.
//!
//! Code cross-refs: `geom2::{Circle, Line, circle_through_points_perpendicular_to_circle}`,
//! `tessellation::TessellationConfig`

mod disk;
mod triangle;

pub use disk::{DiskLine, PoincareDisk};
pub use triangle::fundamental_triangle;
