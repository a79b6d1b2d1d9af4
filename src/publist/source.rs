//! Loading `publications.json`.

use std::fs;
use std::path::Path;

use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Publication;

/// Read and parse the data file. The top level must be a JSON array.
pub fn load_publications(path: &Path) -> Result<Vec<Publication>> {
    let raw = fs::read_to_string(path)?;
    let publications = serde_json::from_str(&raw)?;
    Ok(publications)
}

/// The page policy: a data file that cannot be read or parsed is reported
/// and treated as an empty list. Used by the interactive session, where
/// dying on a bad file would be worse than showing nothing.
pub fn load_or_empty(path: &Path) -> (Vec<Publication>, Vec<CmdMessage>) {
    match load_publications(path) {
        Ok(publications) => (publications, Vec::new()),
        Err(e) => (
            Vec::new(),
            vec![CmdMessage::error(format!(
                "Failed to load publications from {}: {}",
                path.display(),
                e
            ))],
        ),
    }
}
