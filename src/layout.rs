// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prose layout classification.
//!
//! Legal text arrives as plain lines; rendering wants headings bolded and
//! list levels indented. Each line is classified by an explicit, ordered
//! rule table - first matching rule wins, in table order - so the contract
//! is auditable without reading the renderer.
//!
//! Classification is purely presentational: it carries no correctness
//! weight beyond the rule order, and a line that matches nothing is plain
//! body text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Short capitalized line with no leading digit, e.g.
    /// "Permission to be exempt from requirement".
    static ref HEADING: Regex = Regex::new(r"^[A-Z][a-zA-Z]+(\s[a-z]+)*$").unwrap();
    /// Leading digit.
    static ref LEADING_DIGIT: Regex = Regex::new(r"^\d").unwrap();
    /// Section-number opener with a subsection, e.g. "5 (1)" or "2.3 (2)".
    static ref SECTION_OPENER_SUBSECTION: Regex = Regex::new(r"^\d+(\.\d+)?\s*\(\d+\)").unwrap();
    /// Bare section-number opener, e.g. "15 Records".
    static ref SECTION_OPENER_BARE: Regex = Regex::new(r"^\d+(\.\d+)?\s").unwrap();
    /// Numbered list item, e.g. "1. maintain books".
    static ref NUMBERED_ITEM: Regex = Regex::new(r"^\d+\.").unwrap();
    /// Lettered subsection, e.g. "(a)".
    static ref LETTERED_ITEM: Regex = Regex::new(r"^\([a-z]\)").unwrap();
    /// Roman-numeral subsection, e.g. "(i)", "(iv)", "(ix)".
    static ref ROMAN_ITEM: Regex =
        Regex::new(r"^\((?:i{1,3}|iv|vi{0,3}|ix|xi{0,2})\)").unwrap();
}

/// How a line should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only line; renders as vertical spacing.
    Blank,
    /// Bold standalone heading.
    Heading,
    /// A line opening with a section number.
    SectionHeading,
    /// Indented numbered list item.
    NumberedItem,
    /// Lettered subsection item "(a)".
    LetteredItem,
    /// Roman-numeral subsection item "(i)".
    RomanItem,
    /// Generic indented continuation line.
    Indented,
    /// Ordinary body text.
    Plain,
}

/// Maximum length for a line to still read as a heading.
const HEADING_MAX_LEN: usize = 100;

fn is_heading(trimmed: &str, _indent: usize) -> bool {
    HEADING.is_match(trimmed)
        && trimmed.len() < HEADING_MAX_LEN
        && !LEADING_DIGIT.is_match(trimmed)
}

fn is_section_heading(trimmed: &str, _indent: usize) -> bool {
    SECTION_OPENER_SUBSECTION.is_match(trimmed)
        || (SECTION_OPENER_BARE.is_match(trimmed) && trimmed.len() < HEADING_MAX_LEN)
}

fn is_numbered_item(trimmed: &str, indent: usize) -> bool {
    NUMBERED_ITEM.is_match(trimmed) && indent >= 2
}

fn is_lettered_item(trimmed: &str, _indent: usize) -> bool {
    LETTERED_ITEM.is_match(trimmed)
}

fn is_roman_item(trimmed: &str, _indent: usize) -> bool {
    ROMAN_ITEM.is_match(trimmed)
}

fn is_indented(_trimmed: &str, indent: usize) -> bool {
    indent >= 2
}

/// The classification rules, in evaluation order. First match wins.
///
/// Order matters: "(i)" is both a lettered and a roman candidate, and the
/// lettered rule deliberately wins; a numbered item at the margin is a
/// section heading, not a list item.
pub const LAYOUT_RULES: &[(fn(&str, usize) -> bool, LineClass)] = &[
    (is_heading, LineClass::Heading),
    (is_section_heading, LineClass::SectionHeading),
    (is_numbered_item, LineClass::NumberedItem),
    (is_lettered_item, LineClass::LetteredItem),
    (is_roman_item, LineClass::RomanItem),
    (is_indented, LineClass::Indented),
];

/// Classify one raw (untrimmed) line.
pub fn classify_line(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    let indent = line.len() - line.trim_start().len();

    for (applies, class) in LAYOUT_RULES {
        if applies(trimmed, indent) {
            return *class;
        }
    }
    LineClass::Plain
}

/// Rendering treatment for a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treatment {
    /// Leading spaces when rendering to a plain-text surface.
    pub indent: usize,
    /// Render with heading weight.
    pub bold: bool,
    /// Insert a blank line before this one.
    pub leading_gap: bool,
}

impl LineClass {
    /// Map a class (plus the line's own indentation) to its treatment.
    pub fn treatment(self, source_indent: usize) -> Treatment {
        match self {
            LineClass::Blank => Treatment {
                indent: 0,
                bold: false,
                leading_gap: false,
            },
            LineClass::Heading => Treatment {
                indent: 0,
                bold: true,
                leading_gap: true,
            },
            LineClass::SectionHeading => Treatment {
                indent: 0,
                bold: false,
                leading_gap: true,
            },
            LineClass::NumberedItem => Treatment {
                indent: 4,
                bold: false,
                leading_gap: false,
            },
            LineClass::LetteredItem => Treatment {
                indent: 3,
                bold: false,
                leading_gap: false,
            },
            LineClass::RomanItem => Treatment {
                indent: 6,
                bold: false,
                leading_gap: false,
            },
            LineClass::Indented => Treatment {
                indent: source_indent.min(8),
                bold: false,
                leading_gap: false,
            },
            LineClass::Plain => Treatment {
                indent: 0,
                bold: false,
                leading_gap: false,
            },
        }
    }
}
