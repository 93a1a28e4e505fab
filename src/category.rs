//! Category mapping
//!
//! Maps free-text classification labels onto the fixed business categories.
//! The rules are an ordered table evaluated top to bottom, first substring
//! match wins; anything unmatched falls back to a title-cased copy of the
//! raw text so nothing is silently merged.

use std::fmt;

/// Business category of an order row.
///
/// Only the four canonical variants appear in the final report; `Other` and
/// `Unknown` are computed but dropped by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    GoldJewellery,
    Silver,
    DiamondJewellery18k,
    StandardBar,
    /// Unmapped label, title-cased.
    Other(String),
    /// Missing source value.
    Unknown,
}

/// Ordered mapping table. Patterns are lowercase substrings tested against
/// the trimmed, lowercased label; order decides when a label could match more
/// than one pattern.
pub const CATEGORY_RULES: [(&str, Category); 7] = [
    ("gold jewellery 22k", Category::GoldJewellery),
    ("gold jewellery 18k", Category::GoldJewellery),
    ("diamond jewellery 18k", Category::DiamondJewellery18k),
    ("silver", Category::Silver),
    ("standard bar", Category::StandardBar),
    ("coin gold", Category::StandardBar),
    ("gold bar", Category::StandardBar),
];

/// Presentation order of the final report. Categories not listed here never
/// reach the output.
pub const REPORT_ORDER: [Category; 4] = [
    Category::GoldJewellery,
    Category::Silver,
    Category::DiamondJewellery18k,
    Category::StandardBar,
];

impl Category {
    /// Position in [`REPORT_ORDER`], `None` for non-canonical categories.
    pub fn priority(&self) -> Option<usize> {
        REPORT_ORDER.iter().position(|c| c == self)
    }

    pub fn is_canonical(&self) -> bool {
        self.priority().is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::GoldJewellery => write!(f, "Gold Jewellery"),
            Category::Silver => write!(f, "Silver"),
            Category::DiamondJewellery18k => write!(f, "Diamond Jewellery 18karat"),
            Category::StandardBar => write!(f, "Standard Bar"),
            Category::Other(label) => write!(f, "{}", label),
            Category::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Map a raw classification value to its category.
pub fn map_category(raw: Option<&str>) -> Category {
    let raw = match raw {
        Some(raw) => raw,
        None => return Category::Unknown,
    };

    let text = raw.trim().to_lowercase();
    for (pattern, category) in &CATEGORY_RULES {
        if text.contains(pattern) {
            return category.clone();
        }
    }

    Category::Other(title_case(&text))
}

/// Capitalize every letter that follows a non-letter. Hyphenated and
/// slash-joined words get capitalized on both sides ("gold-plated" →
/// "Gold-Plated"); spacing is preserved as-is.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() && !prev_is_letter {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_letter = ch.is_alphabetic();
    }
    out
}
