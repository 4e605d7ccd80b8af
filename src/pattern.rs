//! Serial-range and wildcard name patterns.
//!
//! A raw pattern is compiled once into a [`NamePattern`] and then queried with
//! [`NamePattern::matches`]. Two dialects exist and never mix:
//!
//! * range: `Host001~010` accepts `Host001` through `Host010`. The width of the
//!   number right of `~` fixes the zero-padded width; trailing letters on the
//!   right become a suffix shared by every name.
//! * wildcard: `Web%` accepts anything starting with `Web`. `%` takes the place
//!   of `*`, which folder names and hostnames cannot contain.
//!
//! Strings matching neither grammar compile to [`NamePattern::Unavailable`],
//! which matches nothing.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

pub const RANGE_SEPARATOR: char = '~';
pub const WILDCARD: char = '%';

static RANGE_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+~[0-9]+[A-Za-z]*$").unwrap());

static WILDCARD_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-]*%[A-Za-z0-9\-%]*$").unwrap());

#[derive(Error, Debug, Clone)]
pub enum PatternError {
    #[error("'{raw}' is neither a range pattern nor a wildcard pattern")]
    Unrecognized { raw: String },
    #[error("left side '{left}' is shorter than the {needed} characters taken by the number and suffix")]
    RangeUnderflow { left: String, needed: usize },
    #[error("range end '{digits}' is too large")]
    RangeOverflow { digits: String },
    #[error("failed to build wildcard regex: {0}")]
    Regex(#[from] regex::Error),
}

/// An inclusive, zero-padded serial range: `pre_name`, a number, `suf_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangePattern {
    pre_name: String,
    suf_name: String,
    digit_width: usize,
    min_num: u64,
    max_num: u64,
}

impl RangePattern {
    pub fn new(
        pre_name: impl Into<String>,
        suf_name: impl Into<String>,
        digit_width: usize,
        min_num: u64,
        max_num: u64,
    ) -> Self {
        Self {
            pre_name: pre_name.into(),
            suf_name: suf_name.into(),
            digit_width,
            min_num,
            max_num,
        }
    }

    fn parse(raw: &str) -> Result<Self, PatternError> {
        let Some((left, right)) = raw.split_once(RANGE_SEPARATOR) else {
            return Err(PatternError::Unrecognized {
                raw: raw.to_string(),
            });
        };

        let digits_end = right
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(right.len());
        let max_digits = &right[..digits_end];
        let suffix_start = right
            .bytes()
            .rposition(|b| b.is_ascii_digit())
            .map_or(0, |i| i + 1);
        let suf_name = &right[suffix_start..];

        let digit_width = max_digits.len();
        let needed = digit_width + suf_name.len();
        if left.len() < needed {
            return Err(PatternError::RangeUnderflow {
                left: left.to_string(),
                needed,
            });
        }

        let pre_name = &left[..left.len() - needed];
        // A non-numeric tail on the left side silently starts the range at zero.
        let min_num = left[pre_name.len()..pre_name.len() + digit_width]
            .parse()
            .unwrap_or(0);
        let max_num = max_digits
            .parse()
            .map_err(|_| PatternError::RangeOverflow {
                digits: max_digits.to_string(),
            })?;

        Ok(Self::new(pre_name, suf_name, digit_width, min_num, max_num))
    }

    pub fn pre_name(&self) -> &str {
        &self.pre_name
    }

    pub fn suf_name(&self) -> &str {
        &self.suf_name
    }

    pub fn digit_width(&self) -> usize {
        self.digit_width
    }

    pub fn min_num(&self) -> u64 {
        self.min_num
    }

    pub fn max_num(&self) -> u64 {
        self.max_num
    }

    /// Number of names in the range, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        if self.max_num < self.min_num {
            return 0;
        }
        (self.max_num - self.min_num).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.max_num < self.min_num
    }

    /// The name the range produces for `n`. Numbers wider than `digit_width`
    /// are written out in full.
    pub fn name_at(&self, n: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.pre_name,
            n,
            self.suf_name,
            width = self.digit_width
        )
    }

    /// Equivalent to comparing `candidate` with `name_at(n)` for every `n` in
    /// the range, ignoring ASCII case.
    pub fn matches(&self, candidate: &str) -> bool {
        let name = candidate.as_bytes();
        let pre = self.pre_name.as_bytes();
        let suf = self.suf_name.as_bytes();
        if name.len() < pre.len() + suf.len() {
            return false;
        }

        let (head, rest) = name.split_at(pre.len());
        let (middle, tail) = rest.split_at(rest.len() - suf.len());
        if !head.eq_ignore_ascii_case(pre) || !tail.eq_ignore_ascii_case(suf) {
            return false;
        }

        self.accepts_number(middle)
    }

    fn accepts_number(&self, digits: &[u8]) -> bool {
        if digits.is_empty()
            || digits.len() < self.digit_width
            || !digits.iter().all(u8::is_ascii_digit)
        {
            return false;
        }
        // Padding only ever fills up to the width; anything wider is unpadded.
        if digits.len() > self.digit_width && digits.len() > 1 && digits[0] == b'0' {
            return false;
        }

        let value = digits.iter().try_fold(0u64, |acc, d| {
            acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
        });
        value.is_some_and(|n| (self.min_num..=self.max_num).contains(&n))
    }
}

impl fmt::Display for RangePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={}",
            self.name_at(self.min_num),
            self.name_at(self.max_num)
        )
    }
}

/// A `%` pattern translated into an anchored, ASCII case-insensitive regex.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    regex: Regex,
}

impl WildcardPattern {
    fn parse(raw: &str) -> Result<Self, PatternError> {
        let body = raw
            .split(WILDCARD)
            .map(|literal| {
                if literal.is_empty() {
                    String::new()
                } else {
                    format!("(?i-u:{})", regex::escape(literal))
                }
            })
            .collect::<Vec<_>>()
            .join("(?s:.*)");

        let regex = Regex::new(&format!("^{}$", body))?;
        Ok(Self { regex })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex.as_str())
    }
}

/// A compiled name pattern.
///
/// # Example
///
/// ```
/// use namepat::NamePattern;
///
/// let pattern = NamePattern::compile("Host001~010");
/// assert!(pattern.matches("host007"));
/// assert!(!pattern.matches("Host011"));
///
/// // Anything outside both grammars matches nothing.
/// assert!(!NamePattern::compile("Host*").matches("Host001"));
/// ```
#[derive(Debug, Clone)]
pub enum NamePattern {
    Unavailable,
    Range(RangePattern),
    Wildcard(WildcardPattern),
}

impl NamePattern {
    /// Compiles `raw`, falling back to `Unavailable` for anything unusable.
    pub fn compile(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(NamePattern::Unavailable)
    }

    /// Like [`NamePattern::compile`], but reports why `raw` is unusable.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if RANGE_GRAMMAR.is_match(raw) {
            return RangePattern::parse(raw).map(NamePattern::Range);
        }
        if WILDCARD_GRAMMAR.is_match(raw) {
            return WildcardPattern::parse(raw).map(NamePattern::Wildcard);
        }
        Err(PatternError::Unrecognized {
            raw: raw.to_string(),
        })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            NamePattern::Unavailable => false,
            NamePattern::Range(range) => range.matches(candidate),
            NamePattern::Wildcard(wildcard) => wildcard.matches(candidate),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, NamePattern::Unavailable)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NamePattern::Unavailable => "unavailable",
            NamePattern::Range(_) => "range",
            NamePattern::Wildcard(_) => "wildcard",
        }
    }
}

impl FromStr for NamePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePattern::Unavailable => write!(f, "unavailable"),
            NamePattern::Range(range) if range.is_empty() => {
                write!(f, "range {} (empty)", range)
            }
            NamePattern::Range(range) => write!(f, "range {} ({} names)", range, range.len()),
            NamePattern::Wildcard(wildcard) => write!(f, "wildcard {}", wildcard),
        }
    }
}
