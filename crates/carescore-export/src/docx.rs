use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::debug;

use crate::error::ExportError;
use crate::styles::{parse_priority_tag, priority_color, DocumentStyles};

/// Convert a rendered Markdown report into a DOCX document.
///
/// Recognised line forms:
/// - `#`, `##`, `###` headings
/// - `- [CRITICAL] text` priority bullets (tag coloured by priority)
/// - `- text` plain bullets
/// - `> text` the disclaimer, in italics
/// - `---` a blank separator paragraph
/// - `**bold**` inline
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut paragraphs = 0usize;
    for line in rendered.lines() {
        let paragraph = line_paragraph(line.trim(), styles);
        docx = docx.add_paragraph(paragraph);
        paragraphs += 1;
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    debug!(paragraphs, "docx generated");
    Ok(buf.into_inner())
}

fn line_paragraph(line: &str, styles: &DocumentStyles) -> Paragraph {
    if line.is_empty() || line == "---" {
        return Paragraph::new();
    }
    if let Some(text) = line.strip_prefix("### ") {
        return heading_paragraph(text, "Heading3", styles);
    }
    if let Some(text) = line.strip_prefix("## ") {
        return heading_paragraph(text, "Heading2", styles);
    }
    if let Some(text) = line.strip_prefix("# ") {
        return heading_paragraph(text, "Heading1", styles);
    }
    if let Some(text) = line.strip_prefix("> ") {
        return Paragraph::new()
            .align(AlignmentType::Both)
            .add_run(body_run(text, styles).italic());
    }
    if let Some(item) = line.strip_prefix("- ") {
        return bullet_paragraph(item, styles);
    }

    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(line, styles) {
        para = para.add_run(run);
    }
    para
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(item: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));

    let rest = match split_priority_tag(item) {
        Some((tag, rest)) => {
            let color = parse_priority_tag(tag).map(priority_color).unwrap_or("000000");
            para = para.add_run(body_run(&format!("{tag} "), styles).bold().color(color));
            rest
        }
        None => item,
    };

    for run in parse_inline(rest, styles) {
        para = para.add_run(run);
    }
    para
}

/// `"[HIGH] rest"` → `("HIGH", "rest")`.
fn split_priority_tag(item: &str) -> Option<(&str, &str)> {
    let inner = item.strip_prefix('[')?;
    let end = inner.find(']')?;
    let tag = &inner[..end];
    parse_priority_tag(tag)?;
    Some((tag, inner[end + 1..].trim_start()))
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `**bold**` segments into runs. An unclosed `**` is kept as text.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after = &remaining[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            runs.push(body_run(&remaining[..start], styles));
        }
        if end > 0 {
            runs.push(body_run(&after[..end], styles).bold());
        }
        remaining = &after[end + 2..];
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }
    runs
}
