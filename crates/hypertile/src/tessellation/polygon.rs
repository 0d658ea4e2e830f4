//! Polygons of the tiling and the processed-set used for deduplication.

use crate::geom2::{bounding_box_area, lex_cmp, points_close, Point};
use crate::hyperbolic::DiskLine;

/// How two vertex lists are matched when deciding polygon near-equality.
///
/// - `Unordered`: every vertex of each list has a partner within `eps` in the
///   other list. Quadratic in the vertex count, immune to sort ties.
/// - `Sorted`: sort both lists lexicographically and compare pointwise. Opt-in
///   only. Vertices whose x coordinates tie up to rounding (e.g. ±1e-16 on the
///   y axis) may sort in different orders, so copies of one polygon fail to
///   match. The closure then re-emits and re-expands them and may never
///   terminate, as {4,5} does at `DEFAULT_MIN_AREA`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VertexMatching {
    #[default]
    Unordered,
    Sorted,
}

impl VertexMatching {
    fn matches(self, a: &[Point], b: &[Point], eps: f64) -> bool {
        match self {
            VertexMatching::Sorted => sorted_close(a, b, eps),
            VertexMatching::Unordered => unordered_close(a, b, eps),
        }
    }
}

/// Ordered vertex list, read cyclically.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive vertex pairs, wrapping around from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    #[inline]
    pub fn bounding_box_area(&self) -> f64 {
        bounding_box_area(&self.vertices)
    }

    /// Vertices in lexicographic order; the canonical form for comparisons.
    pub fn sorted_vertices(&self) -> Vec<Point> {
        let mut v = self.vertices.clone();
        v.sort_by(lex_cmp);
        v
    }

    /// Same vertex set up to `eps`, ignoring labeling and orientation.
    pub fn is_close_to(&self, other: &Polygon, eps: f64) -> bool {
        self.matches(other, eps, VertexMatching::default())
    }

    pub fn matches(&self, other: &Polygon, eps: f64, matching: VertexMatching) -> bool {
        matching.matches(&self.sorted_vertices(), &other.sorted_vertices(), eps)
    }

    /// Image of this polygon under the reflection across `line`.
    pub fn reflected(&self, line: &DiskLine) -> Polygon {
        Polygon::new(self.vertices.iter().map(|&p| line.reflect(p)).collect())
    }

    /// Euclidean centroid of the vertices.
    pub fn centroid(&self) -> Point {
        if self.vertices.is_empty() {
            return Point::zeros();
        }
        self.vertices.iter().sum::<Point>() / self.vertices.len() as f64
    }
}

#[inline]
fn sorted_close(a: &[Point], b: &[Point], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| points_close(x, y, eps))
}

fn unordered_close(a: &[Point], b: &[Point], eps: f64) -> bool {
    let covered = |xs: &[Point], ys: &[Point]| {
        xs.iter()
            .all(|&x| ys.iter().any(|&y| points_close(x, y, eps)))
    };
    a.len() == b.len() && covered(a, b) && covered(b, a)
}

/// Already-visited polygons, stored in canonical (sorted) form.
///
/// Membership is a linear scan with near-equality, since floating-point
/// images of the same polygon never match exactly.
#[derive(Clone, Debug, Default)]
pub struct PolygonSet {
    canonical: Vec<Vec<Point>>,
    matching: VertexMatching,
}

impl PolygonSet {
    pub fn new(matching: VertexMatching) -> Self {
        Self {
            canonical: Vec::new(),
            matching,
        }
    }

    pub fn add_polygon(&mut self, polygon: &Polygon) {
        self.canonical.push(polygon.sorted_vertices());
    }

    pub fn contains_polygon(&self, polygon: &Polygon, eps: f64) -> bool {
        let key = polygon.sorted_vertices();
        self.canonical
            .iter()
            .any(|c| self.matching.matches(c, &key, eps))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
