use std::path::Path;

use tracing::instrument;

use crate::{documents::PlannerItem, Status};

#[instrument(name = "planner::read", level = "trace")]
pub fn read(path: &Path) -> Result<Vec<PlannerItem>, Status> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
