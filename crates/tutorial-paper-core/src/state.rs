use std::sync::LazyLock;

use regex::Regex;

use crate::templates::DATA_DESCRIPTION_HEADING;

const INCLUDE_TAG: &str = "{% include";
const AGENDA_HEADING: &str = "### Agenda";
const HANDS_ON_ICON: &str = "{% icon hands_on %}";
const HANDS_ON_OPENING: &str = "> ### {% icon hands_on %} ";
const HANDS_ON_CLOSING: &str = "{: .hands_on}";
const INTRODUCTION_HEADING: &str = "# Introduction";
const BOLD: &str = "***";

/// Whether the filter is currently inside a box that is dropped from the paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterState {
    #[default]
    Passing,
    Suppressing,
}

/// What happens to a single body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Drop,
    Emit(String),
}

/// Opening line of a box that is left out of the paper.
static SUPPRESSED_BOX_ICON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{% icon (question|details|comment|tip|warning) %\}")
        .expect("SUPPRESSED_BOX_ICON: hardcoded regex is valid")
});

/// Kramdown class annotation closing a suppressed box.
static SUPPRESSED_BOX_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{: ?\.(question|details|comment|tip|warning|agenda)\}")
        .expect("SUPPRESSED_BOX_END: hardcoded regex is valid")
});

static NO_TOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{: ?\.no_toc\}").expect("NO_TOC: hardcoded regex is valid")
});

impl FilterState {
    /// Classify `line` and return the next state with the action to take.
    ///
    /// Rules are checked in a fixed order and the first match decides.
    pub fn step(self, line: &str) -> (FilterState, LineAction) {
        use FilterState::{Passing, Suppressing};
        use LineAction::{Drop, Emit};

        if line.contains(INCLUDE_TAG) {
            return (self, Drop);
        }
        if SUPPRESSED_BOX_ICON.is_match(line) || line.contains(AGENDA_HEADING) {
            return (Suppressing, Drop);
        }
        if self == Suppressing {
            let next = if SUPPRESSED_BOX_END.is_match(line) {
                Passing
            } else {
                Suppressing
            };
            return (next, Drop);
        }
        if line.contains(HANDS_ON_ICON) {
            return (Passing, Emit(bold_hands_on_title(line)));
        }
        if line.contains(HANDS_ON_CLOSING) {
            return (Passing, Drop);
        }
        if let Some(rest) = line.strip_prefix("> ") {
            return (Passing, Emit(rest.to_string()));
        }
        if line.starts_with('>') || NO_TOC.is_match(line) {
            return (Passing, Drop);
        }
        if line.contains(INTRODUCTION_HEADING) {
            return (Passing, Emit(DATA_DESCRIPTION_HEADING.to_string()));
        }
        (Passing, Emit(line.to_string()))
    }
}

/// `> ### {% icon hands_on %} Title\n` becomes `***Title***\n`.
///
/// The last character of the line (normally its newline) is replaced by the
/// closing emphasis.
fn bold_hands_on_title(line: &str) -> String {
    let mut title = line.replace(HANDS_ON_OPENING, BOLD);
    title.pop();
    title.push_str(BOLD);
    title.push('\n');
    title
}

/// Lines kept by [`filter_lines`] together with drop statistics.
#[derive(Debug, Clone, Default)]
pub struct FilteredBody {
    pub lines: Vec<String>,
    pub dropped: usize,
    pub final_state: FilterState,
}

/// Run every body line through [`FilterState::step`], starting in
/// [`FilterState::Passing`].
pub fn filter_lines<I, S>(lines: I) -> FilteredBody
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(FilteredBody::default(), |mut body, line| {
            let (next, action) = body.final_state.step(line.as_ref());
            body.final_state = next;
            match action {
                LineAction::Emit(text) => body.lines.push(text),
                LineAction::Drop => body.dropped += 1,
            }
            body
        })
}
