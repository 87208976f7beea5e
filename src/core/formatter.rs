//! Rewrites model output into the line convention the downstream consumer reads.
//!
//! Each line gets the first rule that matches:
//!
//! 1. `**Label**` becomes `Label:`
//! 2. `- Source: ...` becomes `Source: ...`
//! 3. anything else is kept as-is
//!
//! The heading match is exact: `**Label**  ` with trailing spaces is not a
//! heading and passes through untouched.

use crate::domain::model::TextDocument;
use std::borrow::Cow;

const BOLD_DELIMITER: &str = "**";
const BULLET_SOURCE_PREFIX: &str = "- Source:";
const SOURCE_PREFIX: &str = "Source:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Heading,
    Source,
    Passthrough,
}

pub fn classify_line(line: &str) -> LineRule {
    if line.starts_with(BOLD_DELIMITER) && line.ends_with(BOLD_DELIMITER) {
        LineRule::Heading
    } else if line.starts_with(BULLET_SOURCE_PREFIX) {
        LineRule::Source
    } else {
        LineRule::Passthrough
    }
}

pub fn format_line(line: &str) -> Cow<'_, str> {
    match classify_line(line) {
        // 去掉兩端所有的 '*'，因此 "***Gold***" 也會變成 "Gold:"
        LineRule::Heading => Cow::Owned(format!("{}:", line.trim_matches('*'))),
        LineRule::Source => Cow::Owned(format!(
            "{}{}",
            SOURCE_PREFIX,
            &line[BULLET_SOURCE_PREFIX.len()..]
        )),
        LineRule::Passthrough => Cow::Borrowed(line),
    }
}

pub fn format_document(text: &str) -> TextDocument {
    let lines = text
        .trim()
        .split('\n')
        .map(|line| format_line(line).into_owned())
        .collect();

    TextDocument::new(lines)
}

pub fn clean_response(text: &str) -> String {
    format_document(text).render()
}
