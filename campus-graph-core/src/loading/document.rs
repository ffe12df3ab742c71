use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::Error;

/// Reads a GeoJSON `FeatureCollection` and returns its `features` array.
///
/// The whole document is loaded into memory; features are left as opaque
/// JSON values.
pub fn read_features(path: &Path) -> Result<Vec<Value>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;
    features_of(document)
}

/// Takes the `features` array out of a parsed document
pub fn features_of(document: Value) -> Result<Vec<Value>, Error> {
    let Value::Object(mut document) = document else {
        return Err(Error::InvalidData(
            "GeoJSON document is not an object".to_string(),
        ));
    };

    match document.remove("features") {
        Some(Value::Array(features)) => Ok(features),
        Some(other) => Err(Error::InvalidData(format!(
            "`features` is not an array: {other}"
        ))),
        None => Err(Error::InvalidData(
            "GeoJSON document has no `features` member".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_features_of_collection() {
        let document = json!({
            "type": "FeatureCollection",
            "features": [{"type": "Feature"}, {"type": "Feature"}]
        });

        let features = features_of(document).unwrap();
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_features_of_rejects_missing_features() {
        let result = features_of(json!({"type": "FeatureCollection"}));
        assert!(matches!(result, Err(Error::InvalidData(_))));

        let result = features_of(json!([1, 2, 3]));
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_read_features_missing_file() {
        let result = read_features(Path::new("this/file/does/not/exist.geojson"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
