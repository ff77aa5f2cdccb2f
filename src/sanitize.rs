use regex::Regex;

/// Replace characters that are invalid in filenames on common filesystems.
/// Control characters are replaced as well.
pub fn sanitize_filename(name: &str) -> String {
    let invalid = Regex::new(r#"[<>:"/\\|?*]"#).unwrap();
    invalid
        .replace_all(name, "_")
        .chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .collect()
}

/// Build the local filename for a download: sanitize the remote name and
/// insert the message id before the extension so same-named files from
/// different messages never collide.
pub fn unique_local_name(name: &str, message_id: i32) -> String {
    let sanitized = sanitize_filename(name);
    let (stem, extension) = split_extension(&sanitized);
    format!("{}_{}{}", stem, message_id, extension)
}

/// Split a filename into stem and extension at the last dot. A leading dot
/// (hidden files) does not start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 => name.split_at(pos),
        _ => (name, ""),
    }
}
