//! Fixed text blocks written into every paper draft.

/// Placeholder the authors replace with the aim of the tutorial.
pub const AIM_PLACEHOLDER: &str = "<why/aim (1st paragraph of the introduction)>";

/// Platform sentences that follow the aim placeholder in the abstract.
pub const ABSTRACT_PLATFORM: &str = "This tutorial is developed for the data analysis platform Galaxy. \
The Galaxy's concept makes high-throughput sequencing data analysis a structured, \
reproducible and transparent process. ";

/// Prerequisite sentence of the abstract.
pub const ABSTRACT_REQUIREMENTS: &str = "Requirements for this tutorial is a minimal Galaxy experience and \
a Galaxy account on the Galaxy Europe server. ";

/// Introduction prepended to the body. The online tutorial path and `.\n\n`
/// are appended to it.
pub const INTRODUCTION: &str = "\n# Introduction\n\n\
<why/aim (1st paragraph of the introduction)>.\n\n\
This tutorial provides a detailed workflow for <outputs> from <inputs> using Galaxy.\
Galaxy [@afgan2018galaxy] is a data analysis platform that provides access to hundreds \
of tools used in a wide variety of analysis scenarios. os. It features a web-based user \
interface while automatically and transparently managing underlying computation details. \
The Galaxy's concept makes high-throughput sequencing data analysis a structured, \
reproducible and transparent process.\n\n\
The tutorial starts from <inputs>. It runs first a <overview of each step (1 sentence) of the \
workflow with tool names in bold and citation.>\n\n\
The entire analysis described this article can be conducted efficiently on any Galaxy server \
which has the needed tools. However, to be sure, the authors recommend to use the Galaxy \
Europe server (https://usegalaxy.eu/).\n\n\
The tutorial presented in this article has been developed by the Galaxy Training Network \
[@batut2018community] and is available online at https://training.galaxyproject.org/";

/// Heading appended after the body; the typesetter renders the bibliography below it.
pub const REFERENCES_HEADING: &str = "\n# References\n\n";

/// Heading that replaces the tutorial's own `# Introduction`.
pub const DATA_DESCRIPTION_HEADING: &str = "# Description of the data\n";

/// Placeholder for the tutorial's Zenodo record.
pub const ZENODO_PLACEHOLDER: &str = "{{ page.zenodo_link }}";

/// Bibliography file named in the paper's front matter.
pub const BIBLIOGRAPHY_FILE: &str = "references.bib";

/// Citation for the Galaxy platform.
pub const GALAXY_CITATION: &str = r#"@article{afgan2018galaxy,
  title={The Galaxy platform for accessible, reproducible and collaborative biomedical analyses: 2018 update},
  author={Afgan, Enis and Baker, Dannon and Batut, B{\'e}r{\'e}nice and Van Den Beek, Marius and Bouvier, Dave and {\v{C}}ech, Martin and Chilton, John and Clements, Dave and Coraor, Nate and Gr{\"u}ning, Bj{\"o}rn A and others},
  journal={Nucleic acids research},
  volume={46},
  number={W1},
  pages={W537--W544},
  year={2018},
  publisher={Oxford University Press}
}

"#;

/// Citation for the Galaxy Training Network.
pub const TRAINING_NETWORK_CITATION: &str = r#"@article{batut2018community,
  title={Community-driven data analysis training for biology},
  author={Batut, B{\'e}r{\'e}nice and Hiltemann, Saskia and Bagnacani, Andrea and Baker, Dannon and Bhardwaj, Vivek and Blank, Clemens and Bretaudeau, Anthony and Brillet-Gu{\'e}guen, Loraine and {\v{C}}ech, Martin and Chilton, John and others},
  journal={Cell systems},
  volume={6},
  number={6},
  pages={752--758},
  year={2018},
  publisher={Elsevier}
}
"#;
