// The wrap operation: reparent every element carrying a class token into a
// freshly built labeled wrapper, at the exact position the element occupied.

use std::fs;
use std::path::Path;

use memchr::memchr;
use tracing::{debug, trace};

use crate::error::Error;
use crate::scan::{
    find_tag_end, has_class_token, is_raw_text, is_void, parse_tag_info, raw_text_end,
    skip_comment,
};

/// How a matched element is framed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapStyle {
    /// `<blockquote><strong>LABEL</strong>` element `</blockquote>`
    Quote,
    /// `<blockquote><details><summary><strong>LABEL</strong></summary>`
    /// element `</details></blockquote>`
    Disclosure,
    /// `<details><summary><strong>LABEL</strong></summary>` element
    /// `</details>` — the disclosure without the outer quote.
    BareDisclosure,
}

impl WrapStyle {
    /// Map the plain-quote / collapsible-disclosure choice to a style.
    pub fn collapsible(collapsible: bool) -> Self {
        if collapsible {
            WrapStyle::Disclosure
        } else {
            WrapStyle::Quote
        }
    }
}

/// One transformation: every element carrying `class` is re-emitted inside a
/// wrapper labeled `label`, built per `style`.
#[derive(Clone, Debug)]
pub struct WrapRule {
    pub class: String,
    pub label: String,
    pub style: WrapStyle,
}

impl WrapRule {
    pub fn new(class: impl Into<String>, label: impl Into<String>, style: WrapStyle) -> Self {
        Self {
            class: class.into(),
            label: label.into(),
            style,
        }
    }
}

/// Run one rule over `src` as a single pass against a static snapshot of the
/// document: markup produced by the rewrite itself is never rematched within
/// the pass. Returns the rewritten document and the number of wrapped
/// elements. A zero-match pass returns the input byte-identically.
pub fn wrap(src: &[u8], rule: &WrapRule) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(src.len() + 256);
    let count = wrap_into(src, rule, &mut out);
    (out, count)
}

/// Run each rule as its own full pass, in order. A later pass observes the
/// document as the earlier passes left it, so two rules matching the same
/// class nest their wrappers.
pub fn wrap_all(src: &[u8], rules: &[WrapRule]) -> Vec<u8> {
    let mut doc = src.to_vec();
    for rule in rules {
        let (next, matched) = wrap(&doc, rule);
        debug!(class = %rule.class, matched, "pass complete");
        doc = next;
    }
    doc
}

/// Rewrite the document in `input`, writing to `output` (default: overwrite
/// `input`). The only failure mode is the document file being unavailable.
pub fn rewrite_file(input: &Path, output: Option<&Path>, rules: &[WrapRule]) -> Result<(), Error> {
    let src = fs::read(input).map_err(|source| Error::Environment {
        path: input.to_path_buf(),
        source,
    })?;

    let out = wrap_all(&src, rules);
    debug!(bytes_in = src.len(), bytes_out = out.len(), "rewrite complete");

    let out_path = output.unwrap_or(input);
    fs::write(out_path, out).map_err(|source| Error::Environment {
        path: out_path.to_path_buf(),
        source,
    })
}

/* ============================== Single pass ============================== */

fn wrap_into(src: &[u8], rule: &WrapRule, out: &mut Vec<u8>) -> usize {
    let n = src.len();
    let mut i = 0usize;
    let mut count = 0usize;
    let class = rule.class.as_bytes();

    while i < n {
        // Comments are opaque; markup inside them is never matched.
        if src[i..].starts_with(b"<!--") {
            match skip_comment(src, i) {
                Some(after) => {
                    out.extend_from_slice(&src[i..after]);
                    i = after;
                }
                None => {
                    out.extend_from_slice(&src[i..]);
                    return count;
                }
            }
            continue;
        }

        if src[i] == b'<' {
            let Some(j) = find_tag_end(src, i) else {
                out.extend_from_slice(&src[i..]);
                return count;
            };
            let tag = &src[i..=j];
            let ti = parse_tag_info(tag);

            if !ti.is_end && has_class_token(tag, class) {
                // Matched element: emit it inside a fresh wrapper at the
                // position it occupied.
                if ti.self_closing || is_void(ti.name) {
                    emit_open(rule, out);
                    out.extend_from_slice(tag);
                    emit_close(rule, out);
                    count += 1;
                    trace!(class = %rule.class, at = i, "wrapped element");
                    i = j + 1;
                    continue;
                }
                if is_raw_text(ti.name) {
                    match raw_text_end(src, j + 1, ti.name) {
                        Some((_, after)) => {
                            emit_open(rule, out);
                            out.extend_from_slice(&src[i..after]);
                            emit_close(rule, out);
                            count += 1;
                            trace!(class = %rule.class, at = i, "wrapped element");
                            i = after;
                        }
                        None => {
                            // never closed: leave it untouched
                            out.extend_from_slice(&src[i..]);
                            return count;
                        }
                    }
                    continue;
                }
                if let Some((inner_end, after)) = element_end(src, j + 1, ti.name) {
                    emit_open(rule, out);
                    out.extend_from_slice(tag);
                    // Matched descendants were in the same snapshot; wrap
                    // them too.
                    count += 1 + wrap_into(&src[j + 1..inner_end], rule, out);
                    out.extend_from_slice(&src[inner_end..after]);
                    emit_close(rule, out);
                    trace!(class = %rule.class, at = i, "wrapped element");
                    i = after;
                    continue;
                }
                // No matching end tag: leave the malformed element alone.
                out.extend_from_slice(tag);
                i = j + 1;
                continue;
            }

            out.extend_from_slice(tag);
            i = j + 1;

            // Raw-text content is opaque; copy it verbatim.
            if !ti.is_end && !ti.self_closing && is_raw_text(ti.name) {
                match raw_text_end(src, i, ti.name) {
                    Some((_, after)) => {
                        out.extend_from_slice(&src[i..after]);
                        i = after;
                    }
                    None => {
                        out.extend_from_slice(&src[i..]);
                        return count;
                    }
                }
            }
            continue;
        }

        // Text run
        let next_lt = memchr(b'<', &src[i..]).map(|off| i + off).unwrap_or(n);
        out.extend_from_slice(&src[i..next_lt]);
        i = next_lt;
    }
    count
}

/// Find the matching end tag for an element named `name` whose content
/// starts at `i`, tracking same-name nesting by depth and skipping comments
/// and raw-text spans. Returns (index of the end tag's '<', index just past
/// the end tag).
fn element_end(src: &[u8], mut i: usize, name: &[u8]) -> Option<(usize, usize)> {
    let n = src.len();
    let mut depth = 0usize;

    while i < n {
        if src[i..].starts_with(b"<!--") {
            i = skip_comment(src, i)?;
            continue;
        }
        if src[i] == b'<' {
            let j = find_tag_end(src, i)?;
            let ti = parse_tag_info(&src[i..=j]);

            if ti.name.eq_ignore_ascii_case(name) && !ti.self_closing && !is_void(ti.name) {
                if ti.is_end {
                    if depth == 0 {
                        return Some((i, j + 1));
                    }
                    depth -= 1;
                } else {
                    depth += 1;
                }
            }
            i = j + 1;

            if !ti.is_end && !ti.self_closing && is_raw_text(ti.name) {
                let (_, after) = raw_text_end(src, i, ti.name)?;
                i = after;
            }
            continue;
        }
        i = memchr(b'<', &src[i..]).map(|off| i + off).unwrap_or(n);
    }
    None
}

/* ============================ Wrapper markup ============================= */

fn emit_open(rule: &WrapRule, out: &mut Vec<u8>) {
    match rule.style {
        WrapStyle::Quote => {
            out.extend_from_slice(b"<blockquote><strong>");
            out.extend_from_slice(rule.label.as_bytes());
            out.extend_from_slice(b"</strong>");
        }
        WrapStyle::Disclosure => {
            out.extend_from_slice(b"<blockquote><details><summary><strong>");
            out.extend_from_slice(rule.label.as_bytes());
            out.extend_from_slice(b"</strong></summary>");
        }
        WrapStyle::BareDisclosure => {
            out.extend_from_slice(b"<details><summary><strong>");
            out.extend_from_slice(rule.label.as_bytes());
            out.extend_from_slice(b"</strong></summary>");
        }
    }
}

fn emit_close(rule: &WrapRule, out: &mut Vec<u8>) {
    match rule.style {
        WrapStyle::Quote => out.extend_from_slice(b"</blockquote>"),
        WrapStyle::Disclosure => out.extend_from_slice(b"</details></blockquote>"),
        WrapStyle::BareDisclosure => out.extend_from_slice(b"</details>"),
    }
}
