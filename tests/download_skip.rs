use std::fs;
use tempfile::TempDir;
use tgrab::download::should_skip;

#[test]
fn test_equal_sizes_skip() {
    assert!(should_skip(1024, 1024));
    assert!(should_skip(0, 0));
}

#[test]
fn test_differing_sizes_do_not_skip() {
    assert!(!should_skip(1023, 1024));
    assert!(!should_skip(2048, 1024));
}

#[test]
fn test_negative_remote_size_never_skips() {
    assert!(!should_skip(0, -1));
}

// The pipeline feeds should_skip the on-disk size; a file matching the
// remote byte count is never downloaded again.
#[test]
fn test_local_file_matching_remote_size_skips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("video_42.mp4");
    fs::write(&path, vec![0u8; 4096]).unwrap();

    let local_size = fs::metadata(&path).unwrap().len();
    assert!(should_skip(local_size, 4096));
    assert!(!should_skip(local_size, 4097));
}
