use crate::error::{Result, TgrabError};

/// Expand a selection string against the message ids found by the scan.
///
/// Accepted forms:
/// - `all` (case-insensitive) selects every id
/// - `110-120` selects every known id inside the inclusive range
/// - `12, 75, 110` selects exactly those ids
///
/// The result preserves scan order. Unknown ids in a comma list, reversed or
/// empty ranges, and anything unparseable are errors so the caller can
/// re-prompt.
pub fn expand_selection(input: &str, known_ids: &[i32]) -> Result<Vec<i32>> {
    let input = input.trim();

    if input.is_empty() {
        return Err(TgrabError::InvalidInput(
            "Empty selection. Enter 'all', a range, or comma-separated ids.".to_string(),
        ));
    }

    if input.eq_ignore_ascii_case("all") {
        return Ok(known_ids.to_vec());
    }

    if input.contains('-') {
        return expand_range(input, known_ids);
    }

    expand_id_list(input, known_ids)
}

fn expand_range(input: &str, known_ids: &[i32]) -> Result<Vec<i32>> {
    let parts: Vec<&str> = input.splitn(2, '-').collect();
    let start = parse_id(parts[0])?;
    let end = parse_id(parts[1])?;

    if start > end {
        return Err(TgrabError::InvalidInput(format!(
            "Invalid range: {} is greater than {}.",
            start, end
        )));
    }

    let selected: Vec<i32> = known_ids
        .iter()
        .copied()
        .filter(|id| (start..=end).contains(id))
        .collect();

    if selected.is_empty() {
        return Err(TgrabError::InvalidInput(format!(
            "No files with ids in range {}-{}.",
            start, end
        )));
    }

    Ok(selected)
}

fn expand_id_list(input: &str, known_ids: &[i32]) -> Result<Vec<i32>> {
    let requested = input
        .split(',')
        .map(parse_id)
        .collect::<Result<Vec<i32>>>()?;

    let unknown: Vec<String> = requested
        .iter()
        .filter(|id| !known_ids.contains(id))
        .map(|id| id.to_string())
        .collect();

    if !unknown.is_empty() {
        return Err(TgrabError::InvalidInput(format!(
            "The following file ids are not present: {}",
            unknown.join(", ")
        )));
    }

    // Filter the known ids rather than the request so duplicates collapse
    // and scan order is kept.
    Ok(known_ids
        .iter()
        .copied()
        .filter(|id| requested.contains(id))
        .collect())
}

fn parse_id(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| TgrabError::InvalidInput(format!("Invalid file id: '{}'", raw.trim())))
}
