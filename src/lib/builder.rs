use super::geojson::{Geometry, Position, Ring};
use log::debug;

/// Growing geometry of a polygon file.
///
/// Internally this is always a list of polygons, each a list of rings with
/// the outer boundary first. It only becomes a `Polygon` or `MultiPolygon`
/// when [`GeometryBuilder::build`] is called.
#[derive(Debug)]
pub struct GeometryBuilder {
    polygons: Vec<Vec<Ring>>,
    promoted: bool,
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        GeometryBuilder {
            polygons: vec![vec![]],
            promoted: false,
        }
    }
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_ring(&mut self) {
        if let Some(polygon) = self.polygons.last_mut() {
            polygon.push(vec![]);
        }
    }

    pub fn open_polygon(&mut self) {
        self.polygons.push(vec![vec![]]);
    }

    pub fn append_vertex(&mut self, position: Position) {
        if let Some(polygon) = self.polygons.last_mut() {
            if polygon.is_empty() {
                polygon.push(vec![]);
            }
            if let Some(ring) = polygon.last_mut() {
                ring.push(position);
            }
        }
    }

    pub fn current_ring_mut(&mut self) -> Option<&mut Ring> {
        self.polygons.last_mut()?.last_mut()
    }

    pub fn promote_to_multi_polygon(&mut self) {
        if self.promoted {
            return;
        }
        debug!(
            "promoting polygon with {} ring(s) to multipolygon",
            self.polygons.first().map_or(0, Vec::len)
        );
        self.promoted = true;
    }

    pub fn is_multi_polygon(&self) -> bool {
        self.promoted
    }

    pub fn build(mut self) -> Geometry {
        if self.promoted {
            Geometry::MultiPolygon {
                coordinates: self.polygons,
            }
        } else {
            let coordinates = self.polygons.pop().unwrap_or_default();
            Geometry::Polygon { coordinates }
        }
    }
}
