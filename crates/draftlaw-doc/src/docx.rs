//! Minimal WordprocessingML (`.docx`) writer.
//!
//! A `.docx` file is a zip package of XML parts. Only the parts Word needs to
//! open a styled document are written: content types, package relationships,
//! the main document, its relationships, and a style sheet whose defaults set
//! the body font.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::DocError;
use crate::block::{Alignment, BlockKind, DocumentBlock};
use crate::format::format_contract;

/// MIME type for downloads of the generated file.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document-wide default font.
pub const DEFAULT_FONT: &str = "Times New Roman";
pub const DEFAULT_FONT_POINTS: u16 = 12;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A4 page with one-inch margins, in twentieths of a point.
const SECTION_PROPERTIES: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#;

/// Format generated text and write it to `path` as a `.docx` file.
///
/// Returns the path written. Write failures propagate.
pub fn string_to_docx(
    generated: &str,
    path: &Path,
    fallback_title: &str,
) -> Result<PathBuf, DocError> {
    let blocks = format_contract(generated, fallback_title);
    write_docx(&blocks, path)?;
    Ok(path.to_path_buf())
}

/// Serialise blocks into a `.docx` package at `path`.
pub fn write_docx(blocks: &[DocumentBlock], path: &Path) -> Result<(), DocError> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", PACKAGE_RELS.to_string()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS.to_string()),
        ("word/styles.xml", styles_xml()),
        ("word/document.xml", document_xml(blocks)),
    ];
    for (name, body) in parts {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
    }
    zip.finish()?;

    info!(path = %path.display(), blocks = blocks.len(), "wrote docx");
    Ok(())
}

/// File name for a generated contract: `{title_with_underscores}_{YYYYMMDD_HHMMSS}.docx`.
pub fn docx_file_name(title: &str, at: NaiveDateTime) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{stem}_{}.docx", at.format("%Y%m%d_%H%M%S"))
}

// ── XML parts ──

fn styles_xml() -> String {
    let half_points = DEFAULT_FONT_POINTS * 2;
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{W_NS}"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{DEFAULT_FONT}" w:hAnsi="{DEFAULT_FONT}" w:eastAsia="{DEFAULT_FONT}" w:cs="{DEFAULT_FONT}"/><w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/><w:rPr><w:rFonts w:ascii="{DEFAULT_FONT}" w:hAnsi="{DEFAULT_FONT}" w:cs="{DEFAULT_FONT}"/><w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr></w:style></w:styles>"#
    )
}

fn document_xml(blocks: &[DocumentBlock]) -> String {
    let mut body = String::new();
    for block in blocks {
        push_paragraph(&mut body, block);
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}"><w:body>{body}{SECTION_PROPERTIES}</w:body></w:document>"#
    )
}

fn push_paragraph(out: &mut String, block: &DocumentBlock) {
    if block.kind == BlockKind::Spacer {
        out.push_str("<w:p/>");
        return;
    }

    out.push_str("<w:p><w:pPr>");
    if block.space_before.is_some() || block.space_after.is_some() {
        out.push_str("<w:spacing");
        // Spacing is stored in points; WordprocessingML wants twentieths.
        if let Some(before) = block.space_before {
            out.push_str(&format!(r#" w:before="{}""#, u32::from(before) * 20));
        }
        if let Some(after) = block.space_after {
            out.push_str(&format!(r#" w:after="{}""#, u32::from(after) * 20));
        }
        out.push_str("/>");
    }
    let jc = match block.alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
    };
    out.push_str(&format!(r#"<w:jc w:val="{jc}"/></w:pPr>"#));

    let half_points = block.size.points() * 2;
    out.push_str("<w:r><w:rPr>");
    if block.bold {
        out.push_str("<w:b/><w:bCs/>");
    }
    out.push_str(&format!(
        r#"<w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr>"#
    ));
    out.push_str(r#"<w:t xml:space="preserve">"#);
    escape_into(out, &block.text);
    out.push_str("</w:t></w:r></w:p>");
}

/// Escape text for XML character data, dropping characters XML 1.0 forbids.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Read;

    fn read_part(path: &Path, name: &str) -> String {
        let file = File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut xml = String::new();
        entry.read_to_string(&mut xml).unwrap();
        xml
    }

    fn sample_blocks() -> Vec<DocumentBlock> {
        vec![
            DocumentBlock::title("Rental Agreement"),
            DocumentBlock::spacer(),
            DocumentBlock::heading("Article 1: Definitions"),
            DocumentBlock::body("Rent & deposit <due> on the 1st."),
        ]
    }

    #[test]
    fn package_contains_required_parts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.docx");
        write_docx(&sample_blocks(), &path).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/styles.xml",
            ]
        );
        assert!(archive.by_name("word/document.xml").unwrap().size() > 0);
    }

    #[test]
    fn document_renders_blocks_in_order_with_styles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.docx");
        write_docx(&sample_blocks(), &path).unwrap();

        let xml = read_part(&path, "word/document.xml");
        let title = xml.find("RENTAL AGREEMENT").unwrap();
        let heading = xml.find("ARTICLE 1: DEFINITIONS").unwrap();
        let body = xml.find("Rent &amp; deposit &lt;due&gt; on the 1st.").unwrap();
        assert!(title < heading && heading < body);

        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="32"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="26"/>"#));
        assert!(xml.contains(r#"<w:spacing w:before="200" w:after="80"/>"#));
        assert!(xml.contains(r#"<w:spacing w:before="0" w:after="80"/>"#));
        assert!(xml.contains("<w:p/>"));
        assert_eq!(xml.matches("<w:b/>").count(), 2);
    }

    #[test]
    fn styles_set_default_body_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.docx");
        write_docx(&[], &path).unwrap();

        let styles = read_part(&path, "word/styles.xml");
        assert!(styles.contains(r#"w:ascii="Times New Roman""#));
        assert!(styles.contains(r#"<w:sz w:val="24"/>"#));
    }

    #[test]
    fn string_to_docx_returns_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        let text = "SERVICE AGREEMENT\nARTICLE 1: SCOPE\nThe provider shall serve.";
        let written = string_to_docx(text, &path, "Service Contract").unwrap();
        assert_eq!(written, path);

        let xml = read_part(&path, "word/document.xml");
        assert!(xml.contains("SERVICE AGREEMENT"));
        assert!(xml.contains("The provider shall serve."));
    }

    #[test]
    fn write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.docx");
        let err = write_docx(&sample_blocks(), &path).unwrap_err();
        assert!(matches!(err, DocError::Io(_)));
    }

    #[test]
    fn file_name_uses_underscores_and_timestamp() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        assert_eq!(
            docx_file_name("Rental Agreement", at),
            "Rental_Agreement_20250307_090501.docx"
        );
        assert_eq!(
            docx_file_name("Sale/Purchase Deed", at),
            "Sale_Purchase_Deed_20250307_090501.docx"
        );
    }

    #[test]
    fn control_characters_are_dropped() {
        let mut out = String::new();
        escape_into(&mut out, "a\u{0b}b\u{0}c\"'");
        assert_eq!(out, "abc&quot;&apos;");
    }
}
