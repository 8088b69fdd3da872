// Wrap semantics over in-memory documents.

use calloutify::{wrap, wrap_all, WrapRule, WrapStyle};

fn challenge() -> WrapRule {
    WrapRule::new("challenge", "Try this:", WrapStyle::Quote)
}

fn solution() -> WrapRule {
    WrapRule::new("solution", "Solution:", WrapStyle::Disclosure)
}

fn trick() -> WrapRule {
    WrapRule::new("callout-trick", "HELPFUL TRICK:", WrapStyle::Quote)
}

#[test]
fn challenge_becomes_labeled_blockquote() {
    let (out, n) = wrap(b"<div class=\"challenge\">Q</div>", &challenge());
    assert_eq!(n, 1);
    assert_eq!(
        out,
        b"<blockquote><strong>Try this:</strong><div class=\"challenge\">Q</div></blockquote>"
    );
}

#[test]
fn solution_becomes_quoted_disclosure() {
    let (out, n) = wrap(b"<div class=\"solution\">A</div>", &solution());
    assert_eq!(n, 1);
    let expected: &[u8] = b"<blockquote><details><summary><strong>Solution:</strong></summary><div class=\"solution\">A</div></details></blockquote>";
    assert_eq!(out, expected);
}

#[test]
fn bare_disclosure_drops_the_outer_quote() {
    let rule = WrapRule::new("solution", "Solution:", WrapStyle::BareDisclosure);
    let (out, n) = wrap(b"<div class=\"solution\">A</div>", &rule);
    assert_eq!(n, 1);
    let expected: &[u8] = b"<details><summary><strong>Solution:</strong></summary><div class=\"solution\">A</div></details>";
    assert_eq!(out, expected);
}

#[test]
fn sibling_order_is_preserved() {
    let (out, n) = wrap(
        b"<p>A</p><div class=\"challenge\">B</div><p>C</p>",
        &challenge(),
    );
    assert_eq!(n, 1);
    let expected: &[u8] = b"<p>A</p><blockquote><strong>Try this:</strong><div class=\"challenge\">B</div></blockquote><p>C</p>";
    assert_eq!(out, expected);
}

#[test]
fn empty_match_set_is_a_byte_identical_no_op() {
    let src: &[u8] = b"<h1>title</h1>\n<p class=\"callout\">not a trick</p>\n";
    let (out, n) = wrap(src, &trick());
    assert_eq!(n, 0);
    assert_eq!(out, src);
}

#[test]
fn second_run_nests_wrappers() {
    // The class survives the first wrap, so a second run wraps again.
    let (once, _) = wrap(b"<div class=\"challenge\">Q</div>", &challenge());
    let (twice, n) = wrap(&once, &challenge());
    assert_eq!(n, 1);
    let expected: &[u8] = b"<blockquote><strong>Try this:</strong><blockquote><strong>Try this:</strong><div class=\"challenge\">Q</div></blockquote></blockquote>";
    assert_eq!(twice, expected);
}

#[test]
fn same_class_under_two_rules_wraps_twice() {
    // Legacy trick/tip duplication: both rules match .callout-trick.
    let tip = WrapRule::new("callout-trick", "TIP:", WrapStyle::Quote);
    let out = wrap_all(b"<div class=\"callout-trick\">x</div>", &[trick(), tip]);
    let expected: &[u8] = b"<blockquote><strong>HELPFUL TRICK:</strong><blockquote><strong>TIP:</strong><div class=\"callout-trick\">x</div></blockquote></blockquote>";
    assert_eq!(out, expected);
}

#[test]
fn rules_run_as_independent_passes() {
    let out = wrap_all(
        b"<div class=\"challenge\"><div class=\"solution\">A</div></div>",
        &[challenge(), solution()],
    );
    let expected: &[u8] = b"<blockquote><strong>Try this:</strong><div class=\"challenge\"><blockquote><details><summary><strong>Solution:</strong></summary><div class=\"solution\">A</div></details></blockquote></div></blockquote>";
    assert_eq!(out, expected);
}

#[test]
fn nested_matches_are_each_wrapped() {
    let (out, n) = wrap(
        b"<div class=\"challenge\">outer<div class=\"challenge\">inner</div></div>",
        &challenge(),
    );
    assert_eq!(n, 2);
    let expected: &[u8] = b"<blockquote><strong>Try this:</strong><div class=\"challenge\">outer<blockquote><strong>Try this:</strong><div class=\"challenge\">inner</div></blockquote></div></blockquote>";
    assert_eq!(out, expected);
}

#[test]
fn class_matching_is_token_exact() {
    let src: &[u8] =
        b"<div class=\"challenged\">a</div><div class=\"challenge-extra\">b</div>";
    let (out, n) = wrap(src, &challenge());
    assert_eq!(n, 0);
    assert_eq!(out, src);

    let (out, n) = wrap(b"<div class=\"box challenge\">c</div>", &challenge());
    assert_eq!(n, 1);
    let expected: &[u8] =
        b"<blockquote><strong>Try this:</strong><div class=\"box challenge\">c</div></blockquote>";
    assert_eq!(out, expected);
}

#[test]
fn markup_inside_comments_and_raw_text_is_untouched() {
    let src: &[u8] = b"<!-- <div class=\"challenge\">no</div> --><script>var t = '<i class=\"challenge\">';</script>";
    let (out, n) = wrap(src, &challenge());
    assert_eq!(n, 0);
    assert_eq!(out, src);
}

#[test]
fn void_matched_element_is_wrapped_alone() {
    let (out, n) = wrap(b"<img class=\"challenge\" src=\"q.png\"><p>after</p>", &challenge());
    assert_eq!(n, 1);
    let expected: &[u8] = b"<blockquote><strong>Try this:</strong><img class=\"challenge\" src=\"q.png\"></blockquote><p>after</p>";
    assert_eq!(out, expected);
}

#[test]
fn unclosed_matched_element_is_left_alone() {
    let src: &[u8] = b"<div class=\"challenge\">Q";
    let (out, n) = wrap(src, &challenge());
    assert_eq!(n, 0);
    assert_eq!(out, src);
}

#[test]
fn same_name_nesting_finds_the_matching_end_tag() {
    let (out, n) = wrap(
        b"<div class=\"challenge\"><div>deep</div></div><div>tail</div>",
        &challenge(),
    );
    assert_eq!(n, 1);
    let expected: &[u8] = b"<blockquote><strong>Try this:</strong><div class=\"challenge\"><div>deep</div></div></blockquote><div>tail</div>";
    assert_eq!(out, expected);
}

#[test]
fn element_content_is_never_altered() {
    // Odd spacing and attribute quoting inside the element survive verbatim.
    let src: &[u8] = b"<div  class='challenge'\n data-x=\"a>b\">Q  <em>em</em>\n</div>";
    let (out, n) = wrap(src, &challenge());
    assert_eq!(n, 1);
    let mut expected = b"<blockquote><strong>Try this:</strong>".to_vec();
    expected.extend_from_slice(src);
    expected.extend_from_slice(b"</blockquote>");
    assert_eq!(out, expected);
}
