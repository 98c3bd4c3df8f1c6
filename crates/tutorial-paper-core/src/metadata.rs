use serde::Serialize;

use crate::contributors::ContributorDirectory;
use crate::error::{PaperError, PaperResult};
use crate::frontmatter::TutorialMetadata;
use crate::templates::{
    ABSTRACT_PLATFORM, ABSTRACT_REQUIREMENTS, AIM_PLACEHOLDER, BIBLIOGRAPHY_FILE,
};

/// Front matter of the generated paper, serialized in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperMetadata {
    pub title: String,
    pub author: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub bibliography: String,
}

impl PaperMetadata {
    pub fn build(
        tutorial: &TutorialMetadata,
        contributors: &ContributorDirectory,
    ) -> PaperResult<Self> {
        let author = tutorial
            .contributors
            .iter()
            .map(|id| contributors.display_name(id).to_string())
            .collect();

        Ok(Self {
            title: tutorial.title.clone(),
            author,
            abstract_text: build_abstract(tutorial)?,
            bibliography: BIBLIOGRAPHY_FILE.to_string(),
        })
    }

    pub fn to_yaml(&self) -> PaperResult<String> {
        serde_yaml::to_string(self).map_err(PaperError::RenderMetadata)
    }
}

/// Assemble the abstract paragraph from the tutorial's questions, objectives
/// and time estimation.
pub fn build_abstract(tutorial: &TutorialMetadata) -> PaperResult<String> {
    let objectives = tutorial
        .objectives
        .iter()
        .map(|objective| lowercase_first(objective))
        .collect::<Vec<_>>()
        .join(", ");

    let mut text = format!("{AIM_PLACEHOLDER}. {ABSTRACT_PLATFORM}");
    text.push_str(&format!(
        "In this tutorial we focus on {} questions: {} ",
        tutorial.questions.len(),
        tutorial.questions.join(" ")
    ));
    text.push_str(&format!(
        "After finishing this tutorial you will be able to {objectives}."
    ));
    text.push_str(ABSTRACT_REQUIREMENTS);
    text.push_str(&format!(
        "The estimated duration of this tutorial is around {}.",
        expand_duration(&tutorial.time_estimation)?
    ));

    Ok(text)
}

/// Spell out the unit of a time estimation such as `1h` or `30m`.
///
/// Units are tried in the order `h`, `H`, `m`, `M`; every occurrence of the
/// first one present is replaced.
pub fn expand_duration(time: &str) -> PaperResult<String> {
    const UNITS: [(char, &str); 4] = [
        ('h', " hours"),
        ('H', " hours"),
        ('m', " minutes"),
        ('M', " minutes"),
    ];

    UNITS
        .iter()
        .find(|(unit, _)| time.contains(*unit))
        .map(|(unit, word)| time.replace(*unit, word))
        .ok_or_else(|| PaperError::UnrecognizedDuration(time.to_string()))
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
