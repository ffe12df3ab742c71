use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::write_pretty;
use crate::{
    Error,
    model::{Layer, LayerSet},
};

/// `FeatureCollection` wrapper around borrowed features
#[derive(Serialize)]
struct FeatureCollectionRef<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: &'a [Value],
}

/// Writes `features` as a `FeatureCollection`
pub fn write_layer(path: &Path, features: &[Value]) -> Result<(), Error> {
    write_pretty(
        path,
        &FeatureCollectionRef {
            kind: "FeatureCollection",
            features,
        },
    )
}

pub fn write_layers(dir: &Path, layers: &LayerSet) -> Result<(), Error> {
    for layer in Layer::ALL {
        write_layer(&dir.join(layer.file_name()), layers.get(layer))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_write_layer_wraps_features() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roads.geojson");
        let features = vec![json!({"type": "Feature", "properties": {"highway": "primary"}})];

        write_layer(&path, &features).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let expected = "{\n  \"type\": \"FeatureCollection\",\n  \"features\": [\n    {\n      \"type\": \"Feature\",\n      \"properties\": {\n        \"highway\": \"primary\"\n      }\n    }\n  ]\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_layers_creates_every_file() {
        let dir = tempfile::tempdir().unwrap();

        write_layers(dir.path(), &LayerSet::default()).unwrap();

        for layer in Layer::ALL {
            let text = std::fs::read_to_string(dir.path().join(layer.file_name())).unwrap();
            let value: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value, json!({"type": "FeatureCollection", "features": []}));
        }
    }
}
