use std::fmt;

/// Why a (p, q) pair cannot describe a hyperbolic tessellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Polygons need at least three sides and three polygons must meet per vertex.
    TooFewSides { p: usize, q: usize },
    /// `(p-2)(q-2) <= 4`: the tiling is spherical or Euclidean.
    NotHyperbolic { p: usize, q: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewSides { p, q } => write!(
                f,
                "configuration {{{p}, {q}}} needs at least 3 sides and 3 polygons per vertex"
            ),
            ConfigError::NotHyperbolic { p, q } => {
                write!(f, "configuration {{{p}, {q}}} is not hyperbolic")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// `(p-2)(q-2) > 4`.
#[inline]
pub fn is_hyperbolic(p: usize, q: usize) -> bool {
    p >= 3 && q >= 3 && (p - 2) * (q - 2) > 4
}

/// A validated {p,q} pair: regular p-gons, q meeting at every vertex.
///
/// Invariant: `p >= 3`, `q >= 3`, `(p-2)(q-2) > 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TessellationConfig {
    num_polygon_sides: usize,
    num_polygons_per_vertex: usize,
}

impl TessellationConfig {
    pub fn new(num_polygon_sides: usize, num_polygons_per_vertex: usize) -> Result<Self, ConfigError> {
        let (p, q) = (num_polygon_sides, num_polygons_per_vertex);
        if p < 3 || q < 3 {
            return Err(ConfigError::TooFewSides { p, q });
        }
        if !is_hyperbolic(p, q) {
            return Err(ConfigError::NotHyperbolic { p, q });
        }
        Ok(Self {
            num_polygon_sides: p,
            num_polygons_per_vertex: q,
        })
    }

    /// Number of polygon sides.
    #[inline]
    pub fn p(&self) -> usize {
        self.num_polygon_sides
    }

    /// Number of polygons meeting at each vertex.
    #[inline]
    pub fn q(&self) -> usize {
        self.num_polygons_per_vertex
    }
}

impl fmt::Display for TessellationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.p(), self.q())
    }
}
