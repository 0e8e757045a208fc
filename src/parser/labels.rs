use std::sync::LazyLock;

use regex::Regex;

// Label word at the start of the line, then any run of separator characters.
// The separator run is optional, so "Named" still carries the Name label.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^name[\s:.\-]*").unwrap());
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:title|role|position)[\s:.\-]*").unwrap());
static COMPANY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:company|organization)[\s:.\-]*").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^email[\s:.\-]*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Name,
    Title,
    Company,
    Email,
    None,
}

impl Label {
    /// Matchers are tried in this order; the first hit labels the line.
    pub const PRECEDENCE: [Label; 4] = [Label::Name, Label::Title, Label::Company, Label::Email];

    fn pattern(self) -> Option<&'static Regex> {
        match self {
            Label::Name => Some(&*NAME_RE),
            Label::Title => Some(&*TITLE_RE),
            Label::Company => Some(&*COMPANY_RE),
            Label::Email => Some(&*EMAIL_RE),
            Label::None => None,
        }
    }
}

/// A line tagged with its label and the value left after the label prefix.
/// Unlabeled lines keep the whole (trimmed) line as the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatch {
    pub label: Label,
    pub remainder: String,
}

impl LabelMatch {
    /// Value this line offers for the Email field.
    ///
    /// Email-labeled lines offer their remainder, unlabeled lines offer
    /// themselves. Either way the candidate must contain an `@`; anything
    /// else is dropped without complaint.
    pub fn email_candidate(&self) -> Option<&str> {
        match self.label {
            Label::Email | Label::None => Some(self.remainder.as_str()).filter(|c| c.contains('@')),
            _ => None,
        }
    }
}

pub fn classify(line: &str) -> LabelMatch {
    for label in Label::PRECEDENCE {
        if let Some(m) = label.pattern().and_then(|re| re.find(line)) {
            return LabelMatch {
                label,
                remainder: line[m.end()..].trim().to_string(),
            };
        }
    }
    LabelMatch {
        label: Label::None,
        remainder: line.trim().to_string(),
    }
}
