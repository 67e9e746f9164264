use serde::{Deserialize, Serialize};

/// A `(lon, lat)` pair in WGS84 degrees.
pub type Position = (f64, f64);
pub type Ring = Vec<Position>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl Geometry {
    /// Rings grouped by polygon, regardless of the variant.
    pub fn polygons(&self) -> Vec<&[Ring]> {
        match self {
            Geometry::Polygon { coordinates } => vec![coordinates.as_slice()],
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().map(|rings| rings.as_slice()).collect()
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Properties {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    pub fn new(name: String, geometry: Geometry) -> Self {
        Feature {
            bbox: None,
            geometry,
            properties: Properties { name },
        }
    }

    pub fn name(&self) -> &str {
        &self.properties.name
    }
}
