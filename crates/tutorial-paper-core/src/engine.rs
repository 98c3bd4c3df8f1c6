use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::content::format_content;
use crate::contributors::ContributorDirectory;
use crate::error::PaperResult;
use crate::frontmatter::TutorialDocument;
use crate::fs::write_output;
use crate::layout::TutorialLayout;
use crate::line::read_lines;
use crate::metadata::PaperMetadata;
use crate::references::write_references;

#[derive(Debug, Clone)]
pub struct FormatRequest {
    pub layout: TutorialLayout,
}

#[derive(Debug)]
pub struct FormatOutcome {
    pub article: PathBuf,
    pub references: PathBuf,
    pub metadata: PaperMetadata,
    pub lines_kept: usize,
    pub lines_dropped: usize,
    pub tutorial_bib_found: bool,
}

/// Convert a tutorial directory into `article/article.md` and
/// `article/references.bib`.
pub fn format_tutorial(request: FormatRequest) -> PaperResult<FormatOutcome> {
    let layout = request.layout;
    layout.check_inputs()?;
    layout.create_article_dir()?;
    log::debug!("formatting {:?}", layout);

    let mut reader = BufReader::new(File::open(&layout.document)?);
    let document = TutorialDocument::split(read_lines(&mut reader)?, &layout.document)?;
    let tutorial = document.metadata()?;

    let contributors = ContributorDirectory::load(&layout.contributors)?;
    let metadata = PaperMetadata::build(&tutorial, &contributors)?;
    let content = format_content(&document.body, &tutorial, &layout.document);
    log::debug!(
        "kept {} of {} body lines",
        content.kept,
        content.kept + content.dropped
    );

    write_output(&layout.article, &render_article(&metadata, &content.text)?)?;
    log::info!("wrote paper draft to {}", layout.article.display());

    let tutorial_bib_found = write_references(&layout.tutorial_bib, &layout.references_bib)?;

    Ok(FormatOutcome {
        article: layout.article,
        references: layout.references_bib,
        metadata,
        lines_kept: content.kept,
        lines_dropped: content.dropped,
        tutorial_bib_found,
    })
}

/// Paper front matter followed by the formatted body.
pub fn render_article(metadata: &PaperMetadata, content: &str) -> PaperResult<String> {
    Ok(format!("---\n{}---\n{content}", metadata.to_yaml()?))
}
