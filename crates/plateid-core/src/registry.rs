//! # Country Grammar Registry
//!
//! The ordered table of plate grammars. Each [`CountryPattern`] binds a
//! country to a *shape* (a sequence of letter or digit runs with fixed or
//! bounded widths) and to the separators used when the plate is displayed.
//!
//! ## Ordering Invariant
//!
//! Several countries share a digits-letters-digits skeleton with different
//! widths, and some shapes overlap outright (KG and the alternate UZ layout
//! are identical; the primary AM layout is a subset of AZ). The registry is
//! therefore an ordered slice, and detection takes the *first* matching
//! entry. Reordering [`REGISTRY`] silently reclassifies stored plates.
//!
//! | # | Country | Shape | Display |
//! |---|---------|-------|---------|
//! |  1 | UA | L2 D4 L2 | `АА 1234 ВВ` |
//! |  2 | BY | D4 L2 D1 | `1234 АВ-1` |
//! |  3 | KZ | D3 L3 D2 | `123 АВС 45` |
//! |  4 | AZ | D2..3 L2 D3 | `99-АВ-123` |
//! |  5 | KG | D2 D3 L3 | `01 123 АВС` |
//! |  6 | UZ | D2 L1 D3 L2 | `01 А 123 ВС` |
//! |  7 | UZ (alt) | D2 D3 L3 | `01 123 АВС` |
//! |  8 | AM | D2 L2 D3 | `12 АВ 345` |
//! |  9 | AM (alt) | D3 L2 D2 | `123 АВ 45` |
//! | 10 | TJ | D4 L2 D2 | `1234 АВ 01` |
//! | 11 | MD | L3 D3 | `АВС 123` |
//! | 12 | RUS | L1 D3 L2 D0..3 | `А123ВС 77` |
//!
//! RUS is the only grammar with a variable-length tail and must stay last.

use crate::country::CountryCode;

/// Character class of a plate position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Any alphabetic character (Cyrillic after normalization).
    Letter,
    /// An ASCII digit.
    Digit,
}

impl CharClass {
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Letter => c.is_alphabetic(),
            Self::Digit => c.is_ascii_digit(),
        }
    }
}

/// A run of `min..=max` characters of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub class: CharClass,
    pub min: usize,
    pub max: usize,
}

const fn letters(n: usize) -> Segment {
    Segment { class: CharClass::Letter, min: n, max: n }
}

const fn digits(n: usize) -> Segment {
    Segment { class: CharClass::Digit, min: n, max: n }
}

const fn digits_between(min: usize, max: usize) -> Segment {
    Segment { class: CharClass::Digit, min, max }
}

/// Whether a pattern is a country's main layout or a fallback one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Primary,
    Alternate,
}

/// One grammar entry: a country, its shape, and its display separators.
///
/// `separators[i]` is placed between segment `i` and segment `i + 1`.
#[derive(Debug)]
pub struct CountryPattern {
    pub country: CountryCode,
    pub layout: Layout,
    pub segments: &'static [Segment],
    pub separators: &'static [&'static str],
}

impl CountryPattern {
    /// Split `body` into one group per segment, or `None` if the shape
    /// does not consume the whole body.
    ///
    /// Bounded segments are matched greedily with backtracking, so
    /// `"123АВ456"` takes three digits for a `D2..3` run while `"12АВ345"`
    /// takes two.
    pub fn split<'a>(&self, body: &'a str) -> Option<Vec<&'a str>> {
        let mut groups = Vec::with_capacity(self.segments.len());
        split_segments(self.segments, body, &mut groups).then_some(groups)
    }

    pub fn matches(&self, body: &str) -> bool {
        self.split(body).is_some()
    }

    /// Render `body` with this pattern's separators, if the shape fits.
    ///
    /// An empty group (an optional tail that is absent) drops the
    /// separator in front of it.
    pub fn render(&self, body: &str) -> Option<String> {
        let groups = self.split(body)?;
        let mut out = String::with_capacity(body.len() + self.separators.len() * 2);
        for (i, group) in groups.iter().enumerate() {
            if group.is_empty() {
                continue;
            }
            if i > 0 {
                out.push_str(self.separators[i - 1]);
            }
            out.push_str(group);
        }
        Some(out)
    }
}

fn split_segments<'a>(segments: &[Segment], rest: &'a str, groups: &mut Vec<&'a str>) -> bool {
    let Some((segment, tail)) = segments.split_first() else {
        return rest.is_empty();
    };

    // boundaries[k] is the byte offset just past the first k accepted chars.
    let mut boundaries = vec![0];
    let mut offset = 0;
    for c in rest.chars().take(segment.max) {
        if !segment.class.accepts(c) {
            break;
        }
        offset += c.len_utf8();
        boundaries.push(offset);
    }

    for taken in (segment.min..boundaries.len()).rev() {
        let end = boundaries[taken];
        groups.push(&rest[..end]);
        if split_segments(tail, &rest[end..], groups) {
            return true;
        }
        groups.pop();
    }
    false
}

const UA_SHAPE: &[Segment] = &[letters(2), digits(4), letters(2)];
const BY_SHAPE: &[Segment] = &[digits(4), letters(2), digits(1)];
const KZ_SHAPE: &[Segment] = &[digits(3), letters(3), digits(2)];
const AZ_SHAPE: &[Segment] = &[digits_between(2, 3), letters(2), digits(3)];
const KG_SHAPE: &[Segment] = &[digits(2), digits(3), letters(3)];
const UZ_SHAPE: &[Segment] = &[digits(2), letters(1), digits(3), letters(2)];
const UZ_ALT_SHAPE: &[Segment] = &[digits(2), digits(3), letters(3)];
const AM_SHAPE: &[Segment] = &[digits(2), letters(2), digits(3)];
const AM_ALT_SHAPE: &[Segment] = &[digits(3), letters(2), digits(2)];
const TJ_SHAPE: &[Segment] = &[digits(4), letters(2), digits(2)];
const MD_SHAPE: &[Segment] = &[letters(3), digits(3)];
const RUS_SHAPE: &[Segment] = &[letters(1), digits(3), letters(2), digits_between(0, 3)];

/// The Russian grammar, also used by the builder to locate the region tail.
pub const RUSSIAN: CountryPattern = CountryPattern {
    country: CountryCode::Rus,
    layout: Layout::Primary,
    segments: RUS_SHAPE,
    separators: &["", "", " "],
};

/// All grammars in tie-break priority order.
pub static REGISTRY: [CountryPattern; 12] = [
    CountryPattern {
        country: CountryCode::Ua,
        layout: Layout::Primary,
        segments: UA_SHAPE,
        separators: &[" ", " "],
    },
    CountryPattern {
        country: CountryCode::By,
        layout: Layout::Primary,
        segments: BY_SHAPE,
        separators: &[" ", "-"],
    },
    CountryPattern {
        country: CountryCode::Kz,
        layout: Layout::Primary,
        segments: KZ_SHAPE,
        separators: &[" ", " "],
    },
    CountryPattern {
        country: CountryCode::Az,
        layout: Layout::Primary,
        segments: AZ_SHAPE,
        separators: &["-", "-"],
    },
    CountryPattern {
        country: CountryCode::Kg,
        layout: Layout::Primary,
        segments: KG_SHAPE,
        separators: &[" ", " "],
    },
    CountryPattern {
        country: CountryCode::Uz,
        layout: Layout::Primary,
        segments: UZ_SHAPE,
        separators: &[" ", " ", " "],
    },
    CountryPattern {
        country: CountryCode::Uz,
        layout: Layout::Alternate,
        segments: UZ_ALT_SHAPE,
        separators: &[" ", " "],
    },
    CountryPattern {
        country: CountryCode::Am,
        layout: Layout::Primary,
        segments: AM_SHAPE,
        separators: &[" ", " "],
    },
    CountryPattern {
        country: CountryCode::Am,
        layout: Layout::Alternate,
        segments: AM_ALT_SHAPE,
        separators: &[" ", " "],
    },
    CountryPattern {
        country: CountryCode::Tj,
        layout: Layout::Primary,
        segments: TJ_SHAPE,
        separators: &[" ", " "],
    },
    CountryPattern {
        country: CountryCode::Md,
        layout: Layout::Primary,
        segments: MD_SHAPE,
        separators: &[" "],
    },
    RUSSIAN,
];

/// First registry entry whose shape matches `body`, with its 1-based priority.
pub fn first_match(body: &str) -> Option<(usize, &'static CountryPattern)> {
    REGISTRY
        .iter()
        .enumerate()
        .find(|(_, pattern)| pattern.matches(body))
        .map(|(index, pattern)| (index + 1, pattern))
}

/// Registry entries for one country, primary layout first.
pub fn patterns_for(country: CountryCode) -> impl Iterator<Item = &'static CountryPattern> {
    REGISTRY.iter().filter(move |pattern| pattern.country == country)
}
