// Byte-level HTML scanning.
//
// The wrapper never builds a DOM: it walks the raw bytes of the document,
// quote-aware inside tags, and treats comments and raw-text elements
// (pre, textarea, script, style, xmp) as opaque spans.

use memchr::memchr;

/* =============================== Core sets =============================== */

pub(crate) fn is_void(name: &[u8]) -> bool {
    matches_ignore_ascii_case(
        name,
        &[
            b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
            b"param", b"source", b"track", b"wbr",
        ],
    )
}

pub(crate) fn is_raw_text(name: &[u8]) -> bool {
    matches_ignore_ascii_case(name, &[b"pre", b"textarea", b"script", b"style", b"xmp"])
}

/* ============================ Utility predicates ========================= */

#[inline]
fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

#[inline]
pub(crate) fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}

fn matches_ignore_ascii_case(name: &[u8], set: &[&[u8]]) -> bool {
    set.iter().any(|&s| name.eq_ignore_ascii_case(s))
}

/* =============================== Tag parsing ============================= */

#[derive(Clone, Copy, Debug)]
pub(crate) struct TagInfo<'a> {
    pub name: &'a [u8],
    pub is_end: bool,
    pub self_closing: bool,
}

/// Find the '>' for a tag starting at `i` (s[i] == '<'), being quote-aware.
pub(crate) fn find_tag_end(s: &[u8], mut i: usize) -> Option<usize> {
    let n = s.len();
    i += 1;
    let mut quote: u8 = 0;
    while i < n {
        let b = s[i];
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'"' || b == b'\'' {
            quote = b;
        } else if b == b'>' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Extract tag name, end/self-closing flags from raw `<...>` bytes.
pub(crate) fn parse_tag_info(tag: &[u8]) -> TagInfo<'_> {
    let n = tag.len();
    let mut i = 1;

    let mut is_end = false;
    if i < n && tag[i] == b'/' {
        is_end = true;
        i += 1;
    }
    while i < n && is_ws(tag[i]) {
        i += 1;
    }
    let start = i;
    while i < n && is_name_char(tag[i]) {
        i += 1;
    }
    let name = &tag[start..i];

    // self-closing? check before '>'
    let mut j = n - 1;
    while j > 0 && is_ws(tag[j - 1]) {
        j -= 1;
    }
    let self_closing = j >= 2 && tag[j - 1] == b'/';

    TagInfo {
        name,
        is_end,
        self_closing,
    }
}

/* ========================== class attribute scan ========================= */

/// Extract the raw value of the `class` attribute from `<...>` bytes, if any.
/// Attribute names match ASCII case-insensitively; quoted and unquoted
/// values are both handled. The first `class` attribute wins.
pub(crate) fn class_attr_value(tag: &[u8]) -> Option<&[u8]> {
    // Attribute scanner: [name] ( '=' [value] )?
    // The first token after '<' is the tag name; it parses as a valueless
    // attribute and falls through harmlessly.
    let len = tag.len();
    if len < 2 {
        return None;
    }
    let mut i = 1usize;

    while i < len && tag[i] != b'>' {
        // skip whitespace and slashes
        while i < len && (is_ws(tag[i]) || tag[i] == b'/') {
            i += 1;
        }
        if i >= len || tag[i] == b'>' {
            break;
        }

        // attribute name
        if !is_name_char(tag[i]) {
            // Not a valid name start; advance to avoid infinite loops.
            i += 1;
            continue;
        }
        let name_start = i;
        i += 1;
        while i < len && is_name_char(tag[i]) {
            i += 1;
        }
        let name = &tag[name_start..i];
        let is_class = name.eq_ignore_ascii_case(b"class");

        // skip whitespace
        while i < len && is_ws(tag[i]) {
            i += 1;
        }

        // optional "= value"
        if i < len && tag[i] == b'=' {
            i += 1;
            // skip whitespace
            while i < len && is_ws(tag[i]) {
                i += 1;
            }
            if i >= len || tag[i] == b'>' {
                break;
            }

            // quoted value
            if tag[i] == b'"' || tag[i] == b'\'' {
                let q = tag[i];
                i += 1;
                let value_start = i;
                while i < len && tag[i] != q {
                    i += 1;
                }
                if is_class {
                    return Some(&tag[value_start..i]);
                }
                if i < len && tag[i] == q {
                    i += 1;
                }
            } else {
                // unquoted value
                let value_start = i;
                while i < len && !is_ws(tag[i]) && tag[i] != b'>' {
                    i += 1;
                }
                if is_class {
                    return Some(&tag[value_start..i]);
                }
            }
        }
        // loop continues to parse next attribute
    }
    None
}

/// Whitespace-separated token match against the element's class attribute.
/// Token comparison is exact, like the DOM's class matching in standards mode.
pub(crate) fn has_class_token(tag: &[u8], class: &[u8]) -> bool {
    if class.is_empty() {
        return false;
    }
    match class_attr_value(tag) {
        Some(value) => value.split(|&b| is_ws(b)).any(|token| token == class),
        None => false,
    }
}

/* ======================= Comment / raw-text spans ======================== */

/// Skip a comment starting at `i` (src[i..] starts with "<!--"); return the
/// index just past "-->", or None if unterminated.
pub(crate) fn skip_comment(src: &[u8], i: usize) -> Option<usize> {
    let mut k = i + 4;
    while let Some(p) = memchr(b'-', &src[k..]) {
        let j = k + p;
        if j + 2 < src.len() && src[j + 1] == b'-' && src[j + 2] == b'>' {
            return Some(j + 3);
        }
        k = j + 1;
        if k >= src.len() {
            break;
        }
    }
    None
}

/// Scan raw-text content from `i` until the **matching** end tag `</name>`.
/// Returns (index of the end tag's '<', index just past the end tag), or
/// None if the element is never closed.
pub(crate) fn raw_text_end(src: &[u8], i: usize, name: &[u8]) -> Option<(usize, usize)> {
    let n = src.len();
    let mut j = i;
    loop {
        let pos = memchr(b'<', &src[j..]).map(|off| j + off)?;
        if pos + 2 >= n || src[pos + 1] != b'/' {
            // literal '<'
            j = pos + 1;
            continue;
        }
        match find_tag_end(src, pos) {
            Some(end) => {
                let ti = parse_tag_info(&src[pos..=end]);
                if ti.name.eq_ignore_ascii_case(name) {
                    return Some((pos, end + 1));
                }
                // Some other end tag; treat literally
                j = end + 1;
            }
            // Unterminated tag to EOF
            None => return None,
        }
    }
}
