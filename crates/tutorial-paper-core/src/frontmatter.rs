//! Front matter of a tutorial document.
//!
//! A tutorial opens with a YAML block delimited by `---` lines:
//!
//! ```markdown
//! ---
//! title: Mapping
//! contributors: [alice, bob]
//! questions:
//!   - What is mapping?
//! objectives:
//!   - Run a mapper.
//! time_estimation: 1h
//! zenodo_link: https://zenodo.org/record/1
//! ---
//!
//! # Introduction
//! ```
//!
//! Only the keys consumed by the paper are modelled; anything else in the
//! block is ignored.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PaperError, PaperResult};

const DELIMITER: &str = "---";

/// Fields of the tutorial front matter used to build the paper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TutorialMetadata {
    pub title: String,
    pub contributors: Vec<String>,
    pub questions: Vec<String>,
    pub objectives: Vec<String>,
    pub time_estimation: String,
    pub zenodo_link: String,
}

impl TutorialMetadata {
    pub fn from_yaml(yaml: &str) -> PaperResult<Self> {
        serde_yaml::from_str(yaml).map_err(PaperError::FrontMatter)
    }
}

/// A tutorial split into its raw front matter and body lines.
#[derive(Debug, Clone)]
pub struct TutorialDocument {
    pub front_matter: String,
    pub body: Vec<String>,
}

impl TutorialDocument {
    /// Split `lines` at the front matter delimiters.
    ///
    /// The first line must be `---`; the block ends at the next line starting
    /// with `---`. `path` is only used to report a missing block.
    pub fn split(lines: Vec<String>, path: &Path) -> PaperResult<Self> {
        let missing = || PaperError::MissingFrontMatter {
            path: path.to_path_buf(),
        };

        let opens = lines
            .first()
            .is_some_and(|first| first.trim_end() == DELIMITER);
        if !opens {
            return Err(missing());
        }

        let closing = lines
            .iter()
            .skip(1)
            .position(|line| line.starts_with(DELIMITER))
            .map(|offset| offset + 1)
            .ok_or_else(missing)?;

        let front_matter = lines[1..closing].concat();
        let body = lines.into_iter().skip(closing + 1).collect();

        Ok(Self { front_matter, body })
    }

    pub fn metadata(&self) -> PaperResult<TutorialMetadata> {
        TutorialMetadata::from_yaml(&self.front_matter)
    }
}
