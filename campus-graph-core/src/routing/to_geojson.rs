use geo::{Coord, LineString};
use geojson::{Feature, Geometry, GeometryValue};
use serde_json::json;

use super::{RoutePath, StreetNetwork};
use crate::Error;

impl RoutePath {
    /// Converts the path to a `GeoJSON` `Feature` with a `LineString`
    /// through the positions of its nodes.
    pub fn to_feature(&self, network: &StreetNetwork) -> Result<Feature, Error> {
        let coords = self
            .nodes
            .iter()
            .map(|&id| {
                network
                    .position(id)
                    .map(|[x, y]| Coord { x, y })
                    .ok_or(Error::UnknownNode(id))
            })
            .collect::<Result<Vec<Coord<f64>>, _>>()?;

        let geometry = Geometry::new(GeometryValue::from(&LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "cost": self.cost,
                "node_count": self.nodes.len(),
                "nodes": self.nodes,
            }
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self, network: &StreetNetwork) -> Result<String, Error> {
        serde_json::to_string(&self.to_feature(network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
