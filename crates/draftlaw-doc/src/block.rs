//! Paragraph-level document model.

/// Role a block plays in the contract layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Title,
    /// Empty paragraph after the title.
    Spacer,
    Heading,
    Disclaimer,
    Body,
}

/// Font size class. Sizes are in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Title,
    Heading,
    Body,
}

impl FontSize {
    pub fn points(&self) -> u16 {
        match self {
            Self::Title => 16,
            Self::Heading => 13,
            Self::Body => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// One formatted paragraph.
///
/// Spacing is in points; `None` leaves the document default in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentBlock {
    pub kind: BlockKind,
    pub text: String,
    pub bold: bool,
    pub size: FontSize,
    pub alignment: Alignment,
    pub space_before: Option<u16>,
    pub space_after: Option<u16>,
}

impl DocumentBlock {
    /// Upper-cased, bold, centred title.
    pub fn title(text: &str) -> Self {
        Self {
            kind: BlockKind::Title,
            text: text.trim().to_uppercase(),
            bold: true,
            size: FontSize::Title,
            alignment: Alignment::Center,
            space_before: None,
            space_after: None,
        }
    }

    pub fn spacer() -> Self {
        Self {
            kind: BlockKind::Spacer,
            text: String::new(),
            bold: false,
            size: FontSize::Body,
            alignment: Alignment::Left,
            space_before: None,
            space_after: None,
        }
    }

    /// Article heading, upper-cased.
    pub fn heading(text: &str) -> Self {
        Self {
            kind: BlockKind::Heading,
            text: text.to_uppercase(),
            bold: true,
            size: FontSize::Heading,
            alignment: Alignment::Left,
            space_before: Some(10),
            space_after: Some(4),
        }
    }

    /// Bold closing disclaimer. Case is preserved.
    pub fn disclaimer(text: &str) -> Self {
        Self {
            kind: BlockKind::Disclaimer,
            text: text.to_string(),
            bold: true,
            size: FontSize::Body,
            alignment: Alignment::Left,
            space_before: Some(10),
            space_after: Some(10),
        }
    }

    pub fn body(text: &str) -> Self {
        Self {
            kind: BlockKind::Body,
            text: text.to_string(),
            bold: false,
            size: FontSize::Body,
            alignment: Alignment::Left,
            space_before: Some(0),
            space_after: Some(4),
        }
    }
}
