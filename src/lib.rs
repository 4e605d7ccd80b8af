//! Host and folder name patterns.
//!
//! A pattern is either a serial range such as `Host001~010` or a wildcard such
//! as `Web%`. Anything else compiles to a pattern that matches nothing.
//!
//! # Example
//!
//! ```
//! use namepat::NamePattern;
//!
//! let pattern = NamePattern::compile("Host020a~030a");
//! assert!(pattern.matches("HOST025A"));
//! assert!(!pattern.matches("Host031a"));
//!
//! let pattern = NamePattern::compile("Host00%");
//! assert!(pattern.matches("host001"));
//! assert!(!pattern.matches("Host1"));
//! ```

pub mod cli;
pub mod error;
pub mod hostname;
pub mod output;
pub mod pattern;
pub mod scan;

pub use pattern::{
    NamePattern, PatternError, RangePattern, WildcardPattern, RANGE_SEPARATOR, WILDCARD,
};
