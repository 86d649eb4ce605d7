/// Parse a page range string like "1,3-5" into a sorted list of 0-indexed
/// page positions.
///
/// Input is 1-indexed (user-facing). Output is 0-indexed (internal). Invalid
/// input (page 0, malformed numbers, pages past the end) is an error.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let mut pages = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start_str, end_str)) = part.split_once('-') {
            let start = parse_page(start_str.trim(), page_count)?;
            let end = parse_page(end_str.trim(), page_count)?;
            for p in start..=end {
                pages.push(p - 1);
            }
        } else {
            pages.push(parse_page(part, page_count)? - 1);
        }
    }

    pages.sort();
    pages.dedup();
    Ok(pages)
}

fn parse_page(text: &str, page_count: usize) -> Result<usize, String> {
    let page: usize = text
        .parse()
        .map_err(|_| format!("invalid page number: '{text}'"))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    if page > page_count {
        return Err(format!("page {page} exceeds page count ({page_count})"));
    }
    Ok(page)
}
