//! SVG drawing of a tessellation: boundary circle plus one path per polygon.

use anyhow::Result;
use hypertile::api::{
    polygon_segments, EdgeSegment, HyperbolicTessellation, PoincareDisk, Polygon, RenderedCoords,
};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};
use svg::Document;

/// Full SVG document of `tiling` on a `width` × `width` canvas.
pub fn render_tessellation(tiling: &HyperbolicTessellation, width: f64) -> Result<Document> {
    let coords = RenderedCoords::new(width);
    let center = coords.point(tiling.disk.center());
    let boundary = Circle::new()
        .set("cx", center.x as f32)
        .set("cy", center.y as f32)
        .set("r", coords.length(tiling.disk.radius()) as f32)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 1);

    let w = width as f32;
    let mut doc = Document::new()
        .set("width", w)
        .set("height", w)
        .set("viewBox", (0.0f32, 0.0f32, w, w))
        .add(boundary);
    for polygon in &tiling.polygons {
        let path = Path::new()
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", 1)
            .set("d", polygon_data(polygon, &tiling.disk, &coords)?);
        doc = doc.add(path);
    }
    Ok(doc)
}

/// Closed path (move, then one line or arc per edge) in canvas coordinates.
///
/// Arcs are never the large arc; the sweep flag is the segment's
/// counterclockwise flag, which the y flip turns into the positive SVG sweep.
pub fn polygon_data(
    polygon: &Polygon,
    disk: &PoincareDisk,
    coords: &RenderedCoords,
) -> Result<Data> {
    let mut data = Data::new();
    for (i, segment) in polygon_segments(polygon, disk)?.iter().enumerate() {
        let segment = segment.to_rendered(coords);
        let (from, to) = segment.endpoints();
        if i == 0 {
            data = data.move_to((from.x as f32, from.y as f32));
        }
        data = match segment {
            EdgeSegment::Straight { .. } => data.line_to((to.x as f32, to.y as f32)),
            EdgeSegment::Arc {
                radius,
                counterclockwise,
                ..
            } => {
                let r = radius as f32;
                let sweep: f32 = if counterclockwise { 1.0 } else { 0.0 };
                data.elliptical_arc_to((r, r, 0.0f32, 0.0f32, sweep, to.x as f32, to.y as f32))
            }
        };
    }
    if !data.is_empty() {
        data = data.close();
    }
    Ok(data)
}
