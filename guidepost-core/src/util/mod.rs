pub mod upload;
pub mod validate;

/// Normalizes a free-form tag list: splits on whitespace, strips the
/// reserved `#` character, lowercases, sorts and deduplicates.
pub fn prepare_tag_list<'a>(tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut tags: Vec<_> = tags
        .into_iter()
        .flat_map(|t| t.split_whitespace())
        .map(|t| t.replace('#', ""))
        .filter_map(|t| match t.trim() {
            t if t.is_empty() => None,
            t => Some(t.to_lowercase()),
        })
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tags() {
        assert_eq!(
            prepare_tag_list(["#Hiking", "food  WINE", "hiking", " "]),
            vec!["food", "hiking", "wine"]
        );
    }
}
