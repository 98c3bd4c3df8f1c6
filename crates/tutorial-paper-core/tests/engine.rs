use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tutorial_paper_core::templates::{GALAXY_CITATION, TRAINING_NETWORK_CITATION};
use tutorial_paper_core::{
    format_tutorial, ExitCode, FormatRequest, LayoutOptions, PaperError, TutorialLayout,
};

const TUTORIAL: &str = r#"---
layout: tutorial_hands_on
title: "Mapping reads"
zenodo_link: "https://zenodo.org/record/1324070"
questions:
  - How does X work?
objectives:
  - Explain X.
time_estimation: "1h"
key_points:
  - Mapping is fun
contributors:
  - alice
  - ghost
---

# Introduction
{:.no_toc}

Reads come from {{ page.zenodo_link }} {% cite smith2019 %}.

> ### Agenda
>
> 1. TOC
> {:toc}
>
{: .agenda}

{% include snippets/warning.md %}

> ### {% icon hands_on %} Step 1
>
> 1. {% icon galaxy-upload %} Upload the data
>
>    > ### {% icon tip %} Tip: uploading
>    > Use the paste option.
>    {: .tip}
{: .hands_on}

> ### {% icon question %} Questions
> 1. Why?
{: .question}

Done.
"#;

const CONTRIBUTORS: &str = "alice:\n  name: Alice Liddell\nbob:\n  name: Bob\n";

fn setup(dir: &Path, bib: Option<&str>) -> TutorialLayout {
    let tutorial_dir = dir.join("topics/sequence-analysis/tutorials/mapping");
    fs::create_dir_all(&tutorial_dir).unwrap();
    fs::write(tutorial_dir.join("tutorial.md"), TUTORIAL).unwrap();
    if let Some(bib) = bib {
        fs::write(tutorial_dir.join("tutorial.bib"), bib).unwrap();
    }
    let contributors = dir.join("CONTRIBUTORS.yaml");
    fs::write(&contributors, CONTRIBUTORS).unwrap();

    TutorialLayout::from_options(
        LayoutOptions::new(tutorial_dir).with_contributors(contributors),
    )
}

#[test]
fn formats_tutorial_into_article() {
    let dir = tempdir().unwrap();
    let layout = setup(dir.path(), None);

    let outcome = format_tutorial(FormatRequest {
        layout: layout.clone(),
    })
    .unwrap();

    assert_eq!(outcome.metadata.author, vec!["Alice Liddell", "ghost"]);
    assert_eq!(outcome.metadata.title, "Mapping reads");
    assert!(!outcome.tutorial_bib_found);

    let article = fs::read_to_string(&layout.article).unwrap();
    assert!(article.starts_with("---\ntitle: Mapping reads\nauthor:\n- Alice Liddell\n- ghost\n"));
    assert!(article.contains("bibliography: references.bib\n---\n\n# Introduction\n"));

    let intro_link = format!(
        "https://training.galaxyproject.org/{}.\n\n",
        layout.document.with_extension("html").display()
    );
    let body = article.split(&intro_link).nth(1).unwrap();
    assert_eq!(
        body,
        "\n\
# Description of the data\n\
\n\
Reads come from https://zenodo.org/record/1324070 [@smith2019].\n\
\n\
\n\
\n\
***Step 1***\n\
1. Upload the data\n\
\n\
\n\
Done.\n\
\n# References\n\n"
    );
}

#[test]
fn abstract_is_built_from_front_matter() {
    let dir = tempdir().unwrap();
    let layout = setup(dir.path(), None);

    let outcome = format_tutorial(FormatRequest { layout }).unwrap();
    let text = &outcome.metadata.abstract_text;

    assert!(text.contains("we focus on 1 questions: How does X work?"));
    assert!(text.contains("you will be able to explain X.."));
    assert!(text.ends_with("The estimated duration of this tutorial is around 1 hours."));
}

#[test]
fn references_are_rebuilt_from_tutorial_bibliography_each_run() {
    let dir = tempdir().unwrap();
    let layout = setup(dir.path(), Some("@misc{x}"));
    let expected = format!("@misc{{x}}{GALAXY_CITATION}{TRAINING_NETWORK_CITATION}");

    for _ in 0..2 {
        let outcome = format_tutorial(FormatRequest {
            layout: layout.clone(),
        })
        .unwrap();
        assert!(outcome.tutorial_bib_found);
        assert_eq!(fs::read_to_string(&layout.references_bib).unwrap(), expected);
    }
}

#[test]
fn missing_front_matter_field_names_the_field() {
    let dir = tempdir().unwrap();
    let layout = setup(dir.path(), None);
    fs::write(
        &layout.document,
        "---\ntitle: x\ncontributors: []\nquestions: []\nobjectives: []\nzenodo_link: ''\n---\nbody\n",
    )
    .unwrap();

    let err = format_tutorial(FormatRequest { layout }).unwrap_err();
    assert_eq!(err.exit_code(), ExitCode::InvalidDocument);
    assert!(err.to_string().contains("time_estimation"), "{err}");
}

#[test]
fn unitless_time_estimation_is_rejected() {
    let dir = tempdir().unwrap();
    let layout = setup(dir.path(), None);
    let document = TUTORIAL.replace("time_estimation: \"1h\"", "time_estimation: \"90\"");
    fs::write(&layout.document, document).unwrap();

    let err = format_tutorial(FormatRequest { layout }).unwrap_err();
    assert!(matches!(err, PaperError::UnrecognizedDuration(ref value) if value == "90"));
    assert_eq!(err.exit_code(), ExitCode::InvalidMetadata);
}

#[test]
fn missing_contributor_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let layout = setup(dir.path(), None);
    fs::remove_file(&layout.contributors).unwrap();

    let err = format_tutorial(FormatRequest { layout }).unwrap_err();
    assert!(matches!(
        err,
        PaperError::MissingPath {
            what: "contributor directory",
            ..
        }
    ));
}

#[test]
fn crlf_document_produces_lf_article() {
    let dir = tempdir().unwrap();
    let layout = setup(dir.path(), None);
    fs::write(&layout.document, TUTORIAL.replace('\n', "\r\n")).unwrap();

    let outcome = format_tutorial(FormatRequest {
        layout: layout.clone(),
    })
    .unwrap();
    assert_eq!(outcome.metadata.title, "Mapping reads");

    let article = fs::read_to_string(&layout.article).unwrap();
    assert!(!article.contains('\r'));
    assert!(article.contains("\n***Step 1***\n1. Upload the data\n"));
}
