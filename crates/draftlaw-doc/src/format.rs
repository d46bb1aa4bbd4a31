//! Line classifier turning generated contract text into document blocks.
//!
//! Single forward pass. Markup is stripped from the whole text first, the
//! first line mentioning "agreement" is lifted out as the title, and every
//! remaining non-empty line goes through the classifiers below in priority
//! order (first match wins, body text otherwise).

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::block::{BlockKind, DocumentBlock};

static MARKDOWN_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid markdown bold regex"));

static TAG_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

static ARTICLE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^article\s+\d+").expect("Invalid article heading regex"));

/// Lowercase form of the closing disclaimer sentence.
const DISCLAIMER_NEEDLE: &str =
    "this document is a template and should be reviewed by a legal professional";

/// Lowercase marker identifying the title line.
const TITLE_NEEDLE: &str = "agreement";

type Classifier = (fn(&str) -> bool, fn(&str) -> DocumentBlock);

/// Priority-ordered classifiers for trimmed, non-empty lines.
const CLASSIFIERS: &[Classifier] = &[
    (is_article_heading, DocumentBlock::heading),
    (is_disclaimer, DocumentBlock::disclaimer),
];

/// Format generated contract text into ordered blocks.
///
/// `fallback_title` is used only when no line of the text mentions
/// "agreement"; an empty fallback means no title block at all.
pub fn format_contract(generated: &str, fallback_title: &str) -> Vec<DocumentBlock> {
    let cleaned = clean_text(generated);
    let mut lines: Vec<&str> = cleaned.split('\n').collect();

    let discovered_title = take_title_line(&mut lines);
    let fallback_title = Some(fallback_title.trim()).filter(|t| !t.is_empty());
    let title = discovered_title.or(fallback_title);

    let mut blocks = Vec::with_capacity(lines.len() + 2);
    if let Some(title) = title {
        blocks.push(DocumentBlock::title(title));
        blocks.push(DocumentBlock::spacer());
    }

    blocks.extend(
        lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(classify_line),
    );

    debug!(
        blocks = blocks.len(),
        discovered_title = discovered_title.is_some(),
        headings = blocks.iter().filter(|b| b.kind == BlockKind::Heading).count(),
        "formatted contract text"
    );
    blocks
}

/// Remove markdown bold markers and tag-like markup, then trim.
pub fn clean_text(text: &str) -> String {
    let unbolded = MARKDOWN_BOLD.replace_all(text, "$1");
    let untagged = TAG_LIKE.replace_all(&unbolded, "");
    untagged.trim().to_string()
}

/// Classify one trimmed, non-empty line.
pub fn classify_line(line: &str) -> DocumentBlock {
    CLASSIFIERS
        .iter()
        .find(|(matches, _)| matches(line))
        .map(|(_, build)| build(line))
        .unwrap_or_else(|| DocumentBlock::body(line))
}

/// Remove the first line mentioning "agreement" and return it trimmed.
fn take_title_line<'a>(lines: &mut Vec<&'a str>) -> Option<&'a str> {
    let idx = lines
        .iter()
        .position(|line| line.to_lowercase().contains(TITLE_NEEDLE))?;
    Some(lines.remove(idx).trim())
}

fn is_article_heading(line: &str) -> bool {
    ARTICLE_HEADING.is_match(line)
}

fn is_disclaimer(line: &str) -> bool {
    line.to_lowercase().contains(DISCLAIMER_NEEDLE)
}
