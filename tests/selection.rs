use tgrab::select::expand_selection;

// Ids as the scan collects them: newest message first.
const KNOWN: &[i32] = &[120, 115, 110, 100];

#[test]
fn test_all_selects_everything() {
    let selected = expand_selection("all", KNOWN).unwrap();
    assert_eq!(selected, KNOWN);
}

#[test]
fn test_all_is_case_insensitive() {
    let selected = expand_selection("  ALL ", KNOWN).unwrap();
    assert_eq!(selected, KNOWN);
}

#[test]
fn test_comma_list_preserves_scan_order() {
    let selected = expand_selection("110, 120", KNOWN).unwrap();
    assert_eq!(selected, vec![120, 110]);
}

#[test]
fn test_comma_list_collapses_duplicates() {
    let selected = expand_selection("110,110", KNOWN).unwrap();
    assert_eq!(selected, vec![110]);
}

#[test]
fn test_comma_list_rejects_unknown_ids() {
    let err = expand_selection("110, 999", KNOWN).unwrap_err();
    assert!(err.to_string().contains("999"));
}

#[test]
fn test_range_is_inclusive() {
    let selected = expand_selection("100-115", KNOWN).unwrap();
    assert_eq!(selected, vec![115, 110, 100]);
}

#[test]
fn test_range_matching_nothing_is_rejected() {
    assert!(expand_selection("200-300", KNOWN).is_err());
}

#[test]
fn test_reversed_range_is_rejected() {
    let err = expand_selection("115-100", KNOWN).unwrap_err();
    assert!(err.to_string().contains("Invalid range"));
}

#[test]
fn test_garbage_is_rejected() {
    assert!(expand_selection("abc", KNOWN).is_err());
    assert!(expand_selection("12;13", KNOWN).is_err());
    assert!(expand_selection("110-", KNOWN).is_err());
    assert!(expand_selection("", KNOWN).is_err());
}

#[test]
fn test_single_id() {
    let selected = expand_selection("115", KNOWN).unwrap();
    assert_eq!(selected, vec![115]);
}
