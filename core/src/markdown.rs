//! Line-oriented markdown renderer for generated readings.
//!
//! The upstream prompt only asks the model for headers, bullet lists
//! and bold spans, so this classifier handles exactly that subset and
//! nothing more: each line is classified independently, with no nested
//! structures (nested lists, blockquotes, tables, code blocks).

/// One inline run within a renderable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

/// One fully-materialized display block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`, `##` or `###` heading, marker stripped. `level` is 1-3.
    Heading { level: u8, text: String },
    /// `- ` or `* ` bullet, marker stripped, inline styling applied.
    ListItem(Vec<Inline>),
    /// Whitespace-only line, rendered as fixed vertical spacing.
    Spacer,
    Paragraph(Vec<Inline>),
}

/// Convert a markdown-flavored string into display blocks.
pub fn render(text: &str) -> Vec<Block> {
    text.lines().map(classify_line).collect()
}

fn classify_line(line: &str) -> Block {
    // Longest heading marker first so "###" is not matched as "#".
    if let Some(rest) = line.strip_prefix("### ") {
        return Block::Heading { level: 3, text: rest.to_string() };
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::Heading { level: 2, text: rest.to_string() };
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return Block::Heading { level: 1, text: rest.to_string() };
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Block::ListItem(parse_inline(rest));
    }
    if line.trim().is_empty() {
        return Block::Spacer;
    }
    Block::Paragraph(parse_inline(line))
}

/// Split a line into plain and `**bold**` runs.
///
/// An unmatched `**` leaves the remainder of the line untouched.
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut runs = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find("**") {
        match rest[start + 2..].find("**") {
            Some(len) => {
                if start > 0 {
                    runs.push(Inline::Text(rest[..start].to_string()));
                }
                runs.push(Inline::Bold(rest[start + 2..start + 2 + len].to_string()));
                rest = &rest[start + 2 + len + 2..];
            }
            // No closing marker: the rest is plain text.
            None => break,
        }
    }
    if !rest.is_empty() {
        runs.push(Inline::Text(rest.to_string()));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn bold(s: &str) -> Inline {
        Inline::Bold(s.to_string())
    }

    #[test]
    fn test_reading_structure() {
        let blocks = render("# Title\n## Section\n- item one\n**bold** text");
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 1, text: "Title".into() },
                Block::Heading { level: 2, text: "Section".into() },
                Block::ListItem(vec![text("item one")]),
                Block::Paragraph(vec![bold("bold"), text(" text")]),
            ]
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            render("### Deep"),
            vec![Block::Heading { level: 3, text: "Deep".into() }]
        );
        // A bare "#" with no space is just a paragraph.
        assert_eq!(render("#Title"), vec![Block::Paragraph(vec![text("#Title")])]);
    }

    #[test]
    fn test_star_bullets() {
        assert_eq!(
            render("* starred item"),
            vec![Block::ListItem(vec![text("starred item")])]
        );
    }

    #[test]
    fn test_blank_lines_are_spacers() {
        let blocks = render("one\n\n   \ntwo");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![text("one")]),
                Block::Spacer,
                Block::Spacer,
                Block::Paragraph(vec![text("two")]),
            ]
        );
    }

    #[test]
    fn test_bold_inside_list_item() {
        assert_eq!(
            render("- your **Sun** sign"),
            vec![Block::ListItem(vec![text("your "), bold("Sun"), text(" sign")])]
        );
    }

    #[test]
    fn test_multiple_bold_spans() {
        assert_eq!(
            parse_inline("**a** and **b**"),
            vec![bold("a"), text(" and "), bold("b")]
        );
    }

    #[test]
    fn test_unmatched_marker_left_alone() {
        assert_eq!(parse_inline("lone ** marker"), vec![text("lone ** marker")]);
        assert_eq!(
            parse_inline("**closed** and ** open"),
            vec![bold("closed"), text(" and ** open")]
        );
    }

    #[test]
    fn test_empty_bold_span() {
        assert_eq!(parse_inline("a **** b"), vec![text("a "), bold(""), text(" b")]);
    }
}
