//! Closed-form fundamental triangle of a {p,q} tessellation.
//!
//! Derivation
//! - B = (b_x, b_y) lies on the ray y = tan(π/p) x and on a circle C
//!   perpendicular to the unit circle with center G = (g_x, 0).
//! - The hyperbolic angle at B is π/q exactly when the tangent to C at B has
//!   slope tan(π/p + π/q). With `-(b_x - g_x)/b_y` for that slope and
//!   Z = tan(π/p + π/q)·tan(π/p) this gives g_x = b_x (Z + 1).
//! - Orthogonality of C and the unit circle: 1 + r² = g_x², with
//!   r² = (b_x - g_x)² + b_y². Solving yields b_x = sqrt(1 / (1 + 2Z - tan²(π/p))).
//! - D = (d_x, 0) is where C meets the segment from the origin to G: d_x = g_x - r.

use std::f64::consts::PI;

use crate::geom2::Point;
use crate::tessellation::TessellationConfig;

/// Vertices `[A, B, D]` of the fundamental triangle in the unit disk.
///
/// - `A` is the origin (angle π/p),
/// - `B` is the top vertex (hyperbolic angle π/q),
/// - `D` is on the positive x-axis (right angle; the midpoint of a polygon edge).
pub fn fundamental_triangle(config: &TessellationConfig) -> [Point; 3] {
    let p = config.p() as f64;
    let q = config.q() as f64;
    let tan_p = (PI / p).tan();
    let z = (PI / p + PI / q).tan() * tan_p;

    let b_x = (1.0 / (1.0 + 2.0 * z - tan_p * tan_p)).sqrt();
    let b_y = b_x * tan_p;
    let g_x = b_x * (z + 1.0);
    let d_x = g_x - (b_y * b_y + (b_x - g_x) * (b_x - g_x)).sqrt();

    [Point::zeros(), Point::new(b_x, b_y), Point::new(d_x, 0.0)]
}
