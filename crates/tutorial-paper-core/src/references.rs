use std::fs;
use std::io;
use std::path::Path;

use crate::error::PaperResult;
use crate::fs::write_output;
use crate::templates::{GALAXY_CITATION, TRAINING_NETWORK_CITATION};

/// Tutorial-local entries followed by the platform and training network citations.
pub fn aggregate_references(existing: Option<&str>) -> String {
    let existing = existing.unwrap_or_default();
    let mut text = String::with_capacity(
        existing.len() + GALAXY_CITATION.len() + TRAINING_NETWORK_CITATION.len(),
    );
    text.push_str(existing);
    text.push_str(GALAXY_CITATION);
    text.push_str(TRAINING_NETWORK_CITATION);
    text
}

/// Read `tutorial_bib` when present and overwrite `references_bib` with the
/// aggregated bibliography. Returns whether a tutorial bibliography was found.
pub fn write_references(tutorial_bib: &Path, references_bib: &Path) -> PaperResult<bool> {
    let existing = match fs::read_to_string(tutorial_bib) {
        Ok(content) => Some(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(err.into()),
    };
    log::debug!(
        "tutorial bibliography {}: {}",
        tutorial_bib.display(),
        if existing.is_some() { "found" } else { "absent" }
    );

    write_output(references_bib, &aggregate_references(existing.as_deref()))?;
    log::info!("wrote references to {}", references_bib.display());
    Ok(existing.is_some())
}
