use serde_json::{Map, Value};

use crate::{Error, model::Layer};

/// `highway` values routed to the roads layer
pub const ROAD_HIGHWAYS: [&str; 4] = ["primary", "secondary", "tertiary", "residential"];

/// `highway` values routed to the footpaths layer
pub const FOOTPATH_HIGHWAYS: [&str; 4] = ["footway", "path", "steps", "pedestrian"];

/// Destination of a single feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub layer: Layer,
    /// The feature carries a `highway` property, whatever its value
    pub highway: bool,
}

/// Determines the layer of a feature from its properties.
///
/// Returns `Ok(None)` for features whose geometry has no `coordinates`
/// member; those are dropped from every layer and from the graph.
/// `highway` is checked before `building`, and anything else lands in
/// [`Layer::Others`].
pub fn classify(feature: &Value) -> Result<Option<Classification>, Error> {
    let Value::Object(feature) = feature else {
        return Err(Error::InvalidData(format!(
            "Feature is not an object: {feature}"
        )));
    };

    if !has_coordinates(feature) {
        return Ok(None);
    }

    let classification = match properties(feature) {
        Some(props) if props.contains_key("highway") => Classification {
            layer: highway_layer(&props["highway"]),
            highway: true,
        },
        Some(props) if props.contains_key("building") => Classification {
            layer: Layer::Buildings,
            highway: false,
        },
        _ => Classification {
            layer: Layer::Others,
            highway: false,
        },
    };

    Ok(Some(classification))
}

fn highway_layer(value: &Value) -> Layer {
    match value.as_str() {
        Some(highway) if ROAD_HIGHWAYS.contains(&highway) => Layer::Roads,
        Some(highway) if FOOTPATH_HIGHWAYS.contains(&highway) => Layer::Footpaths,
        _ => Layer::Others,
    }
}

fn has_coordinates(feature: &Map<String, Value>) -> bool {
    match feature.get("geometry") {
        Some(Value::Object(geometry)) => geometry.contains_key("coordinates"),
        _ => false,
    }
}

// Missing or null properties behave like an empty mapping
fn properties(feature: &Map<String, Value>) -> Option<&Map<String, Value>> {
    feature.get("properties").and_then(Value::as_object)
}
