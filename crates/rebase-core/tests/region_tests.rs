//! Integration tests for the marker grammar and region extraction.

use rebase_core::{
    CommentNode, DEFAULT_FORMAT, Marker, MarkerGrammar, Region, extract_regions,
};

/// Helper to build a comment node.
fn comment(text: &str, line: usize) -> CommentNode {
    CommentNode {
        text: text.to_string(),
        line,
    }
}

/// Helper to build the default grammar.
fn grammar() -> MarkerGrammar {
    MarkerGrammar::new(DEFAULT_FORMAT).expect("default grammar compiles")
}

#[test]
fn accepts_valid_start_markers() {
    let grammar = grammar();
    let fixtures = [
        "region cssRebase:foo",
        " region cssRebase:foo",
        " region cssRebase:foo ",
        " region cssRebase: foo ",
        " region  cssRebase: foo ",
    ];

    for fixture in fixtures {
        match grammar.parse(&comment(fixture, 99)) {
            Some(Marker::Start { path, line }) => {
                assert_eq!(path, "foo", "path for {fixture:?}");
                assert_eq!(line, 99);
            }
            other => panic!("expected start marker for {fixture:?}, got {other:?}"),
        }
    }
}

#[test]
fn accepts_valid_end_markers() {
    let grammar = grammar();
    let fixtures = [
        "endregion cssRebase:foo",
        " endregion cssRebase:foo",
        " endregion cssRebase:foo ",
        " endregion cssRebase: foo ",
        " endregion  cssRebase: foo ",
    ];

    for fixture in fixtures {
        match grammar.parse(&comment(fixture, 99)) {
            Some(Marker::End { path, line }) => {
                assert_eq!(path, "foo", "path for {fixture:?}");
                assert_eq!(line, 99);
            }
            other => panic!("expected end marker for {fixture:?}, got {other:?}"),
        }
    }
}

#[test]
fn rejects_invalid_markers() {
    let grammar = grammar();
    let fixtures = [
        "regioncssRebase:foo",
        "region cssRebase foo",
        "region cssRebase:f oo",
        "endregioncssRebase:foo",
        "endregion cssRebase foo",
        "endregion cssRebase:f oo",
        "Region cssRebase:foo",
        "region cssrebase:foo",
        "just a comment",
        "",
    ];

    for fixture in fixtures {
        assert_eq!(
            grammar.parse(&comment(fixture, 99)),
            None,
            "expected no marker for {fixture:?}"
        );
    }
}

#[test]
fn supports_custom_format() {
    let grammar = MarkerGrammar::new("foo").expect("custom grammar compiles");

    match grammar.parse(&comment("region foo bar", 99)) {
        Some(Marker::Start { path, line }) => {
            assert_eq!(path, "bar");
            assert_eq!(line, 99);
        }
        other => panic!("expected start marker, got {other:?}"),
    }

    // The default token no longer matches under a custom format.
    assert_eq!(grammar.parse(&comment("region cssRebase:bar", 1)), None);
}

#[test]
fn format_token_is_taken_literally() {
    // Metacharacters in the token must not corrupt the pattern.
    let grammar = MarkerGrammar::new("rebase(v2):").expect("escaped grammar compiles");

    match grammar.parse(&comment("region rebase(v2):img", 3)) {
        Some(Marker::Start { path, .. }) => assert_eq!(path, "img"),
        other => panic!("expected start marker, got {other:?}"),
    }
}

#[test]
fn resolves_a_simple_pair() {
    let regions = extract_regions(
        &grammar(),
        &[
            comment(" region cssRebase:images ", 1),
            comment(" endregion cssRebase:images ", 5),
        ],
    );

    assert_eq!(
        regions,
        vec![Region {
            path: "images".to_string(),
            start: 1,
            end: 5,
        }]
    );
}

#[test]
fn nested_pairs_close_innermost_first() {
    let regions = extract_regions(
        &grammar(),
        &[
            comment(" region cssRebase:outer ", 1),
            comment(" region cssRebase:inner ", 3),
            comment(" endregion cssRebase:inner ", 5),
            comment(" endregion cssRebase:outer ", 7),
        ],
    );

    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].path, "inner");
    assert_eq!((regions[0].start, regions[0].end), (3, 5));
    assert_eq!(regions[1].path, "outer");
    assert_eq!((regions[1].start, regions[1].end), (1, 7));
}

#[test]
fn unmatched_start_is_dropped() {
    let regions = extract_regions(&grammar(), &[comment(" region cssRebase:images ", 1)]);
    assert!(regions.is_empty());
}

#[test]
fn orphan_end_is_dropped() {
    let regions = extract_regions(&grammar(), &[comment(" endregion cssRebase:images ", 9)]);
    assert!(regions.is_empty());
}

#[test]
fn mismatched_end_keeps_start_path() {
    let regions = extract_regions(
        &grammar(),
        &[
            comment(" region cssRebase:right ", 1),
            comment(" endregion cssRebase:wrong ", 4),
        ],
    );

    assert_eq!(
        regions,
        vec![Region {
            path: "right".to_string(),
            start: 1,
            end: 4,
        }]
    );
}

#[test]
fn duplicate_regions_are_all_retained() {
    let regions = extract_regions(
        &grammar(),
        &[
            comment(" region cssRebase:images ", 1),
            comment(" endregion cssRebase:images ", 3),
            comment(" region cssRebase:images ", 5),
            comment(" endregion cssRebase:images ", 7),
        ],
    );

    assert_eq!(regions.len(), 2);
    assert_eq!((regions[0].start, regions[0].end), (1, 3));
    assert_eq!((regions[1].start, regions[1].end), (5, 7));
}

#[test]
fn leftover_opens_after_interleaving_are_dropped() {
    // start, start, end resolves the inner pair only.
    let regions = extract_regions(
        &grammar(),
        &[
            comment(" region cssRebase:a ", 1),
            comment(" region cssRebase:b ", 3),
            comment(" endregion cssRebase:b ", 5),
        ],
    );

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].path, "b");
}
