use super::*;
use crate::geom2::{rotate_around_origin, GeomCfg, Point};
use crate::hyperbolic::{fundamental_triangle, PoincareDisk};
use nalgebra::vector;
use std::f64::consts::PI;

const TOL: f64 = 1e-8;

fn config(p: usize, q: usize) -> TessellationConfig {
    TessellationConfig::new(p, q).unwrap()
}

fn center(p: usize, q: usize) -> Polygon {
    compute_center_polygon(&config(p, q), &PoincareDisk::unit()).unwrap()
}

#[test]
fn valid_configurations() {
    for (p, q) in [(6, 4), (4, 5), (7, 3), (3, 7)] {
        let c = TessellationConfig::new(p, q).unwrap();
        assert_eq!((c.p(), c.q()), (p, q));
    }
    assert_eq!(config(6, 4).to_string(), "{6, 4}");
}

#[test]
fn invalid_configurations() {
    assert_eq!(
        TessellationConfig::new(4, 4),
        Err(ConfigError::NotHyperbolic { p: 4, q: 4 })
    );
    assert_eq!(
        TessellationConfig::new(6, 3),
        Err(ConfigError::NotHyperbolic { p: 6, q: 3 })
    );
    assert_eq!(
        TessellationConfig::new(2, 10),
        Err(ConfigError::TooFewSides { p: 2, q: 10 })
    );
    assert!(!is_hyperbolic(3, 6));
    assert!(is_hyperbolic(3, 7));
}

#[test]
fn center_polygon_6_4() {
    let poly = center(6, 4);
    assert_eq!(poly.len(), 6);
    let [_, top, _] = fundamental_triangle(&config(6, 4));
    assert!((poly.vertices[0] - top).norm() < TOL);
    for (i, v) in poly.vertices.iter().enumerate() {
        assert!((v.norm() - 0.517_638_090_205_041_5).abs() < TOL, "vertex {i}");
        let next = poly.vertices[(i + 1) % 6];
        assert!((rotate_around_origin(PI / 3.0, *v) - next).norm() < TOL);
    }
    assert!(poly.centroid().norm() < TOL);
}

#[test]
fn center_polygons_are_regular() {
    for (p, q) in [(4, 5), (7, 3), (3, 7), (5, 4), (8, 3)] {
        let poly = center(p, q);
        assert_eq!(poly.len(), p);
        let r = poly.vertices[0].norm();
        let step = 2.0 * PI / p as f64;
        for (i, v) in poly.vertices.iter().enumerate() {
            assert!((v.norm() - r).abs() < TOL, "{{{p},{q}}} vertex {i}");
            let next = poly.vertices[(i + 1) % p];
            assert!((rotate_around_origin(step, *v) - next).norm() < 1e-7);
        }
    }
}

#[test]
fn polygon_set_ignores_labeling() {
    let poly = center(5, 4);
    let mut set = PolygonSet::default();
    assert!(set.is_empty());
    set.add_polygon(&poly);

    let mut rotated = poly.vertices.clone();
    rotated.rotate_left(2);
    let mut reversed = poly.vertices.clone();
    reversed.reverse();
    let eps = DEFAULT_MATCH_EPS;
    assert!(set.contains_polygon(&Polygon::new(rotated), eps));
    assert!(set.contains_polygon(&Polygon::new(reversed), eps));

    let shifted = Polygon::new(poly.vertices.iter().map(|v| v + vector![1e-3, 0.0]).collect());
    assert!(!set.contains_polygon(&shifted, eps));
    assert!(!poly.is_close_to(&Polygon::new(poly.vertices[1..].to_vec()), eps));
}

#[test]
fn polygon_edges_wrap_around() {
    let poly = Polygon::new(vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]]);
    let edges: Vec<_> = poly.edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2], (vector![0.0, 1.0], vector![0.0, 0.0]));
}

#[test]
fn tessellate_rejects_non_positive_cutoff() {
    let disk = PoincareDisk::unit();
    let poly = center(6, 4);
    for bad in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            tessellate(&poly, &disk, bad),
            Err(TessellationError::NonPositiveMinArea { .. })
        ));
    }
}

#[test]
fn cutoff_above_center_area_yields_nothing() {
    let disk = PoincareDisk::unit();
    let out = tessellate(&center(6, 4), &disk, 10.0).unwrap();
    assert!(out.is_empty());
}

#[test]
fn cutoff_between_center_and_neighbors_yields_center_only() {
    // Center bounding box ≈ 0.928; its neighbors are all below 0.33.
    let disk = PoincareDisk::unit();
    let poly = center(6, 4);
    let out = tessellate(&poly, &disk, 0.9).unwrap();
    assert_eq!(out, vec![poly]);
}

#[test]
fn tessellation_6_4_contains_center_and_neighbors() {
    let t = HyperbolicTessellation::new(config(6, 4), 0.01).unwrap();
    assert_eq!(t.polygons[0], t.center_polygon);
    assert!(t.len() > 7);
    for poly in &t.polygons {
        assert_eq!(poly.len(), 6);
        assert!(poly.vertices.iter().all(|&v| t.disk.contains_interior(v)));
    }
    for (u, v) in t.center_polygon.edges() {
        let line = t.disk.line_through(u, v).unwrap();
        let neighbor = t.center_polygon.reflected(&line);
        assert!(
            t.polygons
                .iter()
                .any(|p| p.is_close_to(&neighbor, DEFAULT_MATCH_EPS)),
            "missing neighbor across edge {u:?} → {v:?}"
        );
    }
}

const CONFIGS: [(usize, usize); 5] = [(6, 4), (4, 5), (7, 3), (3, 7), (5, 4)];

fn run_with(p: usize, q: usize, run: TessellateCfg) -> HyperbolicTessellation {
    HyperbolicTessellation::with_cfg(config(p, q), GeomCfg::default(), run)
        .unwrap_or_else(|e| panic!("{{{p},{q}}}: {e}"))
}

fn count_matching_pairs(polygons: &[Polygon], eps: f64, matching: VertexMatching) -> usize {
    let mut n = 0;
    for (i, a) in polygons.iter().enumerate() {
        n += polygons[i + 1..]
            .iter()
            .filter(|b| a.matches(b, eps, matching))
            .count();
    }
    n
}

/// Both lists hold the same tiles, up to order.
fn assert_same_tiles(a: &[Polygon], b: &[Polygon], label: &str) {
    assert_eq!(a.len(), b.len(), "{label}");
    for poly in a {
        assert!(
            b.iter().any(|other| other.is_close_to(poly, DEFAULT_MATCH_EPS)),
            "{label}: tile at {:?} missing",
            poly.centroid()
        );
    }
}

#[test]
fn default_cutoff_closure_is_complete_and_distinct() {
    for (p, q) in CONFIGS {
        let t = HyperbolicTessellation::new(config(p, q), DEFAULT_MIN_AREA)
            .unwrap_or_else(|e| panic!("{{{p},{q}}}: {e}"));
        assert!(t.len() > 100, "{{{p},{q}}}: only {} tiles", t.len());
        assert_eq!(
            count_matching_pairs(&t.polygons, DEFAULT_MATCH_EPS, VertexMatching::Unordered),
            0,
            "{{{p},{q}}}"
        );
        for poly in &t.polygons {
            assert_eq!(poly.len(), p);
            assert!(poly.bounding_box_area() >= DEFAULT_MIN_AREA);
            assert!(poly.vertices.iter().all(|&v| t.disk.contains_interior(v)));
            // Every neighbor above the cutoff was emitted too.
            for (u, v) in poly.edges() {
                let neighbor = poly.reflected(&t.disk.line_through(u, v).unwrap());
                if neighbor.bounding_box_area() >= DEFAULT_MIN_AREA {
                    assert!(
                        t.polygons
                            .iter()
                            .any(|x| x.is_close_to(&neighbor, DEFAULT_MATCH_EPS)),
                        "{{{p},{q}}}: neighbor at {:?} missing",
                        neighbor.centroid()
                    );
                }
            }
        }
    }
}

#[test]
fn traversal_order_does_not_change_the_tiling() {
    for (p, q) in [(6, 4), (4, 5), (7, 3), (3, 7)] {
        let depth = run_with(p, q, TessellateCfg::default());
        let breadth = run_with(
            p,
            q,
            TessellateCfg {
                traversal: Traversal::BreadthFirst,
                ..TessellateCfg::default()
            },
        );
        assert_same_tiles(&depth.polygons, &breadth.polygons, &format!("{{{p},{q}}}"));
        assert_same_tiles(&breadth.polygons, &depth.polygons, &format!("{{{p},{q}}}"));
    }
}

#[test]
fn closure_from_any_emitted_tile_reaches_the_same_tiling() {
    let disk = PoincareDisk::unit();
    for (p, q) in [(6, 4), (3, 7)] {
        let from_center = tessellate(&center(p, q), &disk, DEFAULT_MIN_AREA).unwrap();
        let seed = from_center.last().unwrap();
        assert!(!seed.is_close_to(&center(p, q), DEFAULT_MATCH_EPS));
        let from_seed = tessellate(seed, &disk, DEFAULT_MIN_AREA).unwrap();
        assert_same_tiles(&from_center, &from_seed, &format!("{{{p},{q}}}"));
    }
}

#[test]
fn sorted_matching_reemits_tie_copies() {
    // {6,4} polygons have vertices on the y axis whose x coordinates are
    // ±1e-16, which sorted matching can order inconsistently. The cutoff is
    // coarse enough for the sorted closure to stop.
    let sorted = run_with(
        6,
        4,
        TessellateCfg {
            min_area: 0.02,
            matching: VertexMatching::Sorted,
            ..TessellateCfg::default()
        },
    );
    let unordered = run_with(6, 4, TessellateCfg::with_min_area(0.02));
    assert_eq!(
        count_matching_pairs(&unordered.polygons, DEFAULT_MATCH_EPS, VertexMatching::Unordered),
        0
    );
    assert!(unordered.len() <= sorted.len());
    for poly in &sorted.polygons {
        assert!(unordered
            .polygons
            .iter()
            .any(|u| u.is_close_to(poly, DEFAULT_MATCH_EPS)));
    }
}

#[test]
fn invalid_match_eps_is_rejected() {
    let disk = PoincareDisk::unit();
    for bad in [-1e-6, f64::NAN, f64::INFINITY] {
        let run = TessellateCfg {
            match_eps: bad,
            ..TessellateCfg::default()
        };
        assert!(matches!(
            tessellate_with(&center(6, 4), &disk, run),
            Err(TessellationError::InvalidMatchEps { .. })
        ));
    }
}

#[test]
fn tolerances_are_threaded_through() {
    let cfg = GeomCfg::uniform(1e-10);
    let run = TessellateCfg {
        min_area: 0.05,
        match_eps: 1e-6,
        ..TessellateCfg::default()
    };
    let t = HyperbolicTessellation::with_cfg(config(5, 4), cfg, run).unwrap();
    assert_eq!(t.disk.cfg(), cfg);
    assert!(!t.is_empty());
    assert_eq!(
        count_matching_pairs(&t.polygons, 1e-6, VertexMatching::Unordered),
        0
    );
}

#[test]
fn center_polygon_segments_are_counterclockwise_arcs() {
    let disk = PoincareDisk::unit();
    let segs = polygon_segments(&center(6, 4), &disk).unwrap();
    assert_eq!(segs.len(), 6);
    for seg in segs {
        match seg {
            EdgeSegment::Arc {
                counterclockwise,
                center,
                radius,
                ..
            } => {
                assert!(counterclockwise);
                assert!((center.norm_squared() - 1.0 - radius * radius).abs() < TOL);
            }
            EdgeSegment::Straight { .. } => panic!("center polygon edges are not diameters"),
        }
    }
}

#[test]
fn diameter_edges_render_straight() {
    let disk = PoincareDisk::unit();
    let [a, b, d] = fundamental_triangle(&config(6, 4));
    let segs = polygon_segments(&Polygon::new(vec![a, b, d]), &disk).unwrap();
    assert!(matches!(segs[0], EdgeSegment::Straight { .. }));
    assert!(matches!(segs[1], EdgeSegment::Arc { .. }));
    assert!(matches!(segs[2], EdgeSegment::Straight { .. }));
    assert_eq!(segs[1].endpoints(), (b, d));
}

#[test]
fn rendered_coordinates_flip_y() {
    let coords = RenderedCoords::new(500.0);
    assert_eq!(coords.point(Point::zeros()), vector![250.0, 250.0]);
    assert_eq!(coords.point(vector![1.0, 0.0]), vector![500.0, 250.0]);
    assert_eq!(coords.point(vector![0.0, 1.0]), vector![250.0, 0.0]);
    assert_eq!(coords.length(0.5), 125.0);

    let seg = EdgeSegment::Arc {
        from: vector![0.0, 0.5],
        to: vector![0.5, 0.0],
        radius: 0.5,
        center: vector![0.5, 0.5],
        counterclockwise: false,
    };
    match seg.to_rendered(&coords) {
        EdgeSegment::Arc { from, radius, center, .. } => {
            assert_eq!(from, vector![250.0, 125.0]);
            assert_eq!(radius, 125.0);
            assert_eq!(center, vector![375.0, 125.0]);
        }
        EdgeSegment::Straight { .. } => panic!("arc became straight"),
    }
}
