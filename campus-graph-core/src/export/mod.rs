//! Writing of the layer collections and graph tables.
//!
//! Every file is UTF-8 JSON pretty-printed with a 2-space indent.

mod graph;
mod layers;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

pub use graph::write_graph;
pub use layers::{write_layer, write_layers};

use crate::{Error, loading::PipelineOutput};

/// Writes the four layer files followed by `nodes.json`, `edges.json` and
/// `weights.json` into `dir`
pub fn write_outputs(dir: &Path, output: &PipelineOutput) -> Result<(), Error> {
    write_layers(dir, &output.layers)?;
    write_graph(dir, &output.graph)
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to create file '{}': {}", path.display(), e),
        )
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    info!("Wrote {}", path.display());
    Ok(())
}
