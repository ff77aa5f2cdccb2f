use tgrab::sanitize::{sanitize_filename, unique_local_name};

#[test]
fn test_replaces_every_forbidden_character() {
    assert_eq!(
        sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#),
        "a_b_c_d_e_f_g_h_i_j"
    );
}

#[test]
fn test_replaces_control_characters() {
    assert_eq!(sanitize_filename("a\u{1}b\nc"), "a_b_c");
}

#[test]
fn test_clean_name_is_unchanged() {
    assert_eq!(sanitize_filename("report 2024.pdf"), "report 2024.pdf");
}

#[test]
fn test_unique_name_keeps_extension() {
    assert_eq!(unique_local_name("report.pdf", 42), "report_42.pdf");
}

#[test]
fn test_unique_name_splits_at_last_dot() {
    assert_eq!(unique_local_name("archive.tar.gz", 7), "archive.tar_7.gz");
}

#[test]
fn test_unique_name_without_extension() {
    assert_eq!(unique_local_name("README", 9), "README_9");
}

#[test]
fn test_leading_dot_is_not_an_extension() {
    assert_eq!(unique_local_name(".bashrc", 3), ".bashrc_3");
}

#[test]
fn test_unique_name_sanitizes_first() {
    assert_eq!(unique_local_name("a/b.txt", 1), "a_b_1.txt");
}
