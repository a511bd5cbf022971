use crate::ignore::IgnoreSet;

#[test]
fn scan_colon_list() {
    let set = IgnoreSet::scan(&["// @typescript-ignore: Foo, Bar"]);
    assert_eq!(set.len(), 2);
    assert!(set.contains("Foo"));
    assert!(set.contains("Bar"));
    assert!(!set.contains("Baz"));
}

#[test]
fn scan_without_colon() {
    let set = IgnoreSet::scan(&["// @typescript-ignore Foo"]);
    assert!(set.contains("Foo"));
    assert_eq!(set.len(), 1);
}

#[test]
fn scan_accumulates_across_comments() {
    let set = IgnoreSet::scan(&[
        "// Package docs.",
        "// @typescript-ignore:A",
        "/* unrelated */",
        "// @typescript-ignore: B,C",
    ]);
    assert_eq!(set.len(), 3);
    assert!(set.contains("A") && set.contains("B") && set.contains("C"));
}

#[test]
fn scan_block_comment_lines() {
    let set = IgnoreSet::scan(&["/*\n  @typescript-ignore: Left\n  @typescript-ignore: Right */"]);
    assert!(set.contains("Left"));
    assert!(set.contains("Right"));
    assert_eq!(set.len(), 2);
}

#[test]
fn scan_drops_empty_entries() {
    let set = IgnoreSet::scan(&["// @typescript-ignore: , Foo,,"]);
    assert_eq!(set.len(), 1);
    assert!(!set.contains(""));
}

#[test]
fn scan_without_directive() {
    let set = IgnoreSet::scan(&["// typescript-ignore: Foo", "// @typescript-ignore:"]);
    assert!(set.is_empty());
}
