//! Heuristic section classification for résumé text runs.
//!
//! Classification looks only at a run's text, font size and weight. It is
//! deliberately lossy: anything that is not clearly a heading falls back to
//! [`SectionType::Content`].

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::model::{ClassifiedBlock, FontWeight, SectionType, TextRun};

use super::options::LayoutOptions;

/// Keyword groups tried in order; the first match wins.
const SECTION_PATTERNS: [(SectionType, &str); 7] = [
    (
        SectionType::Experience,
        r"exp[ée]rience|work|emploi|career|professionnel",
    ),
    (
        SectionType::Education,
        r"formation|education|dipl[ôo]me|studies|academic",
    ),
    (
        SectionType::Skills,
        r"comp[ée]tence|skills|technical|expertise|savoir",
    ),
    (
        SectionType::Contact,
        r"contact|coordonn[ée]es|email|phone|t[ée]l[ée]phone|mobile",
    ),
    (SectionType::Languages, r"langue|language|certif"),
    (SectionType::Projects, r"projet|project|r[ée]alisation"),
    (SectionType::Interests, r"loisir|hobby|interest|passion"),
];

/// Assigns a section label and title flag to text runs.
#[derive(Debug, Clone)]
pub struct SectionClassifier {
    options: LayoutOptions,
    patterns: Vec<(SectionType, Regex)>,
}

impl SectionClassifier {
    /// Create a classifier with default thresholds.
    pub fn new() -> Self {
        Self::with_options(LayoutOptions::default())
    }

    /// Create a classifier with custom thresholds.
    pub fn with_options(options: LayoutOptions) -> Self {
        let patterns = SECTION_PATTERNS
            .iter()
            .map(|(section, pattern)| {
                let re = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap();
                (*section, re)
            })
            .collect();

        Self { options, patterns }
    }

    /// The thresholds in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Classify a run from its text, size and weight.
    pub fn classify(
        &self,
        text: &str,
        font_size: f64,
        font_weight: FontWeight,
    ) -> (SectionType, bool) {
        let normalized = text.trim().to_lowercase();
        let is_large_and_bold =
            font_size > self.options.title_min_font_size && font_weight.is_bold();
        let is_very_large = font_size > self.options.header_min_font_size;

        // The largest text on the canvas is taken to be the candidate's name.
        if is_very_large {
            return (SectionType::Header, true);
        }

        // Length in UTF-16 code units of the untrimmed text.
        if is_large_and_bold && text.encode_utf16().count() < self.options.max_title_chars {
            let section = self
                .patterns
                .iter()
                .find(|(_, re)| re.is_match(&normalized))
                .map(|(section, _)| *section)
                .unwrap_or(SectionType::SectionTitle);
            log::debug!("Heading {:?} classified as {}", text, section);
            return (section, true);
        }

        (SectionType::Content, false)
    }

    /// Classify a run into a block.
    pub fn classify_run(&self, run: TextRun) -> ClassifiedBlock {
        let (section_type, is_title) = self.classify(&run.text, run.font_size, run.font_weight);
        ClassifiedBlock::new(run, section_type, is_title)
    }

    /// Classify every run, preserving input order.
    pub fn classify_runs(&self, runs: Vec<TextRun>) -> Vec<ClassifiedBlock> {
        runs.into_iter().map(|run| self.classify_run(run)).collect()
    }
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn default_classifier() -> &'static SectionClassifier {
    static CLASSIFIER: OnceLock<SectionClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(SectionClassifier::new)
}

/// Classify with the default thresholds.
pub fn classify(text: &str, font_size: f64, font_weight: FontWeight) -> (SectionType, bool) {
    default_classifier().classify(text, font_size, font_weight)
}

/// Classify runs with the default thresholds.
pub fn classify_runs(runs: Vec<TextRun>) -> Vec<ClassifiedBlock> {
    default_classifier().classify_runs(runs)
}
