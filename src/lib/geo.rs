use super::geojson::{Feature, Geometry, Ring};
use geo::prelude::*;
use geo_types::{LineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Bounds {
    pub e: f64,
    pub n: f64,
    pub s: f64,
    pub w: f64,
}

impl From<Bounds> for [f64; 4] {
    fn from(bounds: Bounds) -> Self {
        [bounds.w, bounds.s, bounds.e, bounds.n]
    }
}

fn get_polygon(rings: &[Ring]) -> Option<Polygon<f64>> {
    let (exterior, interiors) = rings.split_first()?;
    let exterior: LineString<f64> = exterior.clone().into();
    let interiors = interiors.iter().map(|ring| ring.clone().into()).collect();
    Some(Polygon::new(exterior, interiors))
}

fn get_multi_polygon(geometry: &Geometry) -> MultiPolygon<f64> {
    let polygons: Vec<Polygon<f64>> = geometry
        .polygons()
        .into_iter()
        .filter_map(get_polygon)
        .collect();
    MultiPolygon(polygons)
}

/// Bounding box of all positions of a geometry, `None` if there are none.
pub fn get_bounds(geometry: &Geometry) -> Option<Bounds> {
    let rect = get_multi_polygon(geometry).bounding_rect()?;
    Some(Bounds {
        e: rect.max().x,
        n: rect.max().y,
        s: rect.min().y,
        w: rect.min().x,
    })
}

impl Feature {
    /// Attach a GeoJSON `bbox` member (`[west, south, east, north]`).
    pub fn with_bbox(mut self) -> Self {
        self.bbox = get_bounds(&self.geometry).map(Into::into);
        self
    }
}
