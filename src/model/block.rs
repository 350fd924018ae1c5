//! Section-labelled text blocks.

use serde::{Deserialize, Serialize};

use super::run::TextRun;

/// Coarse résumé section label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    /// Candidate name or banner
    Header,
    /// Work experience
    Experience,
    /// Education and degrees
    Education,
    /// Skills and expertise
    Skills,
    /// Contact details
    Contact,
    /// Languages and certifications
    Languages,
    /// Projects
    Projects,
    /// Hobbies and interests
    Interests,
    /// A heading with no recognized label
    SectionTitle,
    /// Body text
    Content,
}

impl SectionType {
    /// Every label, in declaration order.
    pub const ALL: [SectionType; 10] = [
        SectionType::Header,
        SectionType::Experience,
        SectionType::Education,
        SectionType::Skills,
        SectionType::Contact,
        SectionType::Languages,
        SectionType::Projects,
        SectionType::Interests,
        SectionType::SectionTitle,
        SectionType::Content,
    ];

    /// Wire label, e.g. `SECTION_TITLE`.
    pub fn label(self) -> &'static str {
        match self {
            SectionType::Header => "HEADER",
            SectionType::Experience => "EXPERIENCE",
            SectionType::Education => "EDUCATION",
            SectionType::Skills => "SKILLS",
            SectionType::Contact => "CONTACT",
            SectionType::Languages => "LANGUAGES",
            SectionType::Projects => "PROJECTS",
            SectionType::Interests => "INTERESTS",
            SectionType::SectionTitle => "SECTION_TITLE",
            SectionType::Content => "CONTENT",
        }
    }

    /// Check if this is one of the named résumé sections.
    pub fn is_named_section(self) -> bool {
        !matches!(
            self,
            SectionType::Header | SectionType::SectionTitle | SectionType::Content
        )
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A text run annotated with its section label and title flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedBlock {
    /// The underlying run
    #[serde(flatten)]
    pub run: TextRun,
    /// Detected section label
    pub section_type: SectionType,
    /// Whether the run is a heading
    pub is_title: bool,
}

impl ClassifiedBlock {
    /// Create a classified block.
    pub fn new(run: TextRun, section_type: SectionType, is_title: bool) -> Self {
        Self {
            run,
            section_type,
            is_title,
        }
    }

    /// Text content of the block.
    pub fn text(&self) -> &str {
        &self.run.text
    }
}
