use std::path::Path;

use tracing::instrument;

use crate::{
    documents::{ReleaseEvent, Timeline},
    Status,
};

#[instrument(name = "timeline::read", level = "trace")]
pub fn read(path: &Path) -> Result<Vec<ReleaseEvent>, Status> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[instrument(name = "timeline::write", level = "trace", skip(timeline))]
pub fn write(path: &Path, timeline: &Timeline) -> Result<(), Status> {
    Ok(std::fs::write(path, serde_json::to_string(timeline)?)?)
}
