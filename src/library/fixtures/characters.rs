use std::path::Path;

use tracing::instrument;

use crate::{
    documents::{CharacterSet, CharacterTable},
    Status,
};

#[instrument(name = "characters::read", level = "trace")]
pub fn read(path: &Path) -> Result<CharacterSet, Status> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[instrument(name = "characters::write_table", level = "trace", skip(table))]
pub fn write_table(path: &Path, table: &CharacterTable) -> Result<(), Status> {
    Ok(std::fs::write(path, serde_json::to_string(table)?)?)
}
