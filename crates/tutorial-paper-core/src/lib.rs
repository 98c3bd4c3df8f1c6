pub mod content;
pub mod contributors;
pub mod engine;
pub mod error;
pub mod frontmatter;
pub mod fs;
pub mod layout;
pub mod line;
pub mod metadata;
pub mod references;
pub mod state;
pub mod templates;

pub use content::{format_content, FormattedContent};
pub use contributors::{Contributor, ContributorDirectory};
pub use engine::{format_tutorial, render_article, FormatOutcome, FormatRequest};
pub use error::{ExitCode, PaperError, PaperResult};
pub use frontmatter::{TutorialDocument, TutorialMetadata};
pub use layout::{LayoutOptions, TutorialLayout};
pub use metadata::{build_abstract, expand_duration, PaperMetadata};
pub use references::{aggregate_references, write_references};
pub use state::{filter_lines, FilterState, LineAction};
