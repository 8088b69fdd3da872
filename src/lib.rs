//! calloutify - rewrite classed callout boxes in HTML into labeled
//! presentational wrappers.
//!
//! Every element carrying a rule's class token is re-emitted inside a
//! freshly built wrapper (a labeled `<blockquote>`, or a labeled
//! `<details>`/`<summary>` disclosure) at the exact position the element
//! occupied. Sibling order of untouched markup is preserved and the
//! element's own content is never altered. The document is scanned as raw
//! bytes; no DOM is built.
//!
//! # Example
//!
//! ```
//! use calloutify::{wrap, WrapRule, WrapStyle};
//!
//! let rule = WrapRule::new("challenge", "Try this:", WrapStyle::Quote);
//! let (out, n) = wrap(b"<div class=\"challenge\">Q</div>", &rule);
//! assert_eq!(n, 1);
//! assert_eq!(
//!     out,
//!     b"<blockquote><strong>Try this:</strong><div class=\"challenge\">Q</div></blockquote>"
//! );
//! ```

mod error;
mod scan;
mod wrap;

pub use error::Error;
pub use wrap::{rewrite_file, wrap, wrap_all, WrapRule, WrapStyle};
