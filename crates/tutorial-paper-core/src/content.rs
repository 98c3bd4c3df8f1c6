use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::frontmatter::TutorialMetadata;
use crate::state::filter_lines;
use crate::templates::{INTRODUCTION, REFERENCES_HEADING, ZENODO_PLACEHOLDER};

/// Paper body produced from a tutorial body.
#[derive(Debug, Clone)]
pub struct FormattedContent {
    pub text: String,
    pub kept: usize,
    pub dropped: usize,
}

/// Any icon tag plus one following space.
static ICON_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{% icon [a-z_-]+ %\} ?").expect("ICON_TAG: hardcoded regex is valid")
});

static CITE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{% cite ([a-z0-9_-]+) %\}").expect("CITE_TAG: hardcoded regex is valid")
});

/// Filter the tutorial body, wrap it in the paper introduction and references
/// heading, then resolve the remaining template tags.
///
/// `tutorial_path` is the tutorial document as named on the command line; the
/// introduction links to its rendered `.html` page.
pub fn format_content<I, S>(
    body: I,
    metadata: &TutorialMetadata,
    tutorial_path: &Path,
) -> FormattedContent
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filtered = filter_lines(body);
    let kept = filtered.lines.len();

    let mut text = introduction(tutorial_path);
    text.push_str(&filtered.lines.concat());
    text.push_str(REFERENCES_HEADING);

    let text = text.replace(ZENODO_PLACEHOLDER, &metadata.zenodo_link);
    let text = strip_icons(&text);
    let text = rewrite_citations(&text);

    FormattedContent {
        text,
        kept,
        dropped: filtered.dropped,
    }
}

pub fn introduction(tutorial_path: &Path) -> String {
    format!(
        "{INTRODUCTION}{}.\n\n",
        tutorial_path.with_extension("html").display()
    )
}

/// Remove every `{% icon name %}` tag along with one following space.
pub fn strip_icons(text: &str) -> String {
    ICON_TAG.replace_all(text, "").into_owned()
}

/// `{% cite key %}` becomes `[@key]`.
pub fn rewrite_citations(text: &str) -> String {
    CITE_TAG.replace_all(text, "[@${1}]").into_owned()
}
