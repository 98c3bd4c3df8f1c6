//! File locations derived from a tutorial directory.
//!
//! ```text
//! <dir>/tutorial.md          input document
//! <dir>/tutorial.bib         optional tutorial bibliography
//! <dir>/article/article.md   paper draft
//! <dir>/article/references.bib
//! CONTRIBUTORS.yaml          contributor directory, relative to the working directory
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PaperError, PaperResult};

pub const DEFAULT_CONTRIBUTORS: &str = "CONTRIBUTORS.yaml";
const DOCUMENT_NAME: &str = "tutorial.md";
const TUTORIAL_BIB_NAME: &str = "tutorial.bib";
const ARTICLE_DIR_NAME: &str = "article";
const ARTICLE_NAME: &str = "article.md";
const REFERENCES_NAME: &str = "references.bib";

/// Inputs from which a [`TutorialLayout`] is derived.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub tutorial_dir: PathBuf,
    pub contributors: PathBuf,
}

impl LayoutOptions {
    pub fn new(tutorial_dir: impl Into<PathBuf>) -> Self {
        Self {
            tutorial_dir: tutorial_dir.into(),
            contributors: PathBuf::from(DEFAULT_CONTRIBUTORS),
        }
    }

    /// Override the contributor directory location.
    pub fn with_contributors(mut self, path: impl Into<PathBuf>) -> Self {
        self.contributors = path.into();
        self
    }
}

/// Every path read or written while formatting one tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialLayout {
    pub tutorial_dir: PathBuf,
    pub document: PathBuf,
    pub tutorial_bib: PathBuf,
    pub article_dir: PathBuf,
    pub article: PathBuf,
    pub references_bib: PathBuf,
    pub contributors: PathBuf,
}

impl TutorialLayout {
    pub fn from_options(options: LayoutOptions) -> Self {
        let LayoutOptions {
            tutorial_dir,
            contributors,
        } = options;
        let article_dir = tutorial_dir.join(ARTICLE_DIR_NAME);

        Self {
            document: tutorial_dir.join(DOCUMENT_NAME),
            tutorial_bib: tutorial_dir.join(TUTORIAL_BIB_NAME),
            article: article_dir.join(ARTICLE_NAME),
            references_bib: article_dir.join(REFERENCES_NAME),
            article_dir,
            tutorial_dir,
            contributors,
        }
    }

    /// Fail with [`PaperError::MissingPath`] for the first required input that
    /// does not exist.
    pub fn check_inputs(&self) -> PaperResult<()> {
        check_exists("tutorial directory", &self.tutorial_dir)?;
        check_exists("tutorial document", &self.document)?;
        check_exists("contributor directory", &self.contributors)?;
        Ok(())
    }

    /// Create the article directory, including missing parents.
    pub fn create_article_dir(&self) -> PaperResult<()> {
        fs::create_dir_all(&self.article_dir)?;
        Ok(())
    }
}

fn check_exists(what: &'static str, path: &Path) -> PaperResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(PaperError::MissingPath {
            what,
            path: path.to_path_buf(),
        })
    }
}
