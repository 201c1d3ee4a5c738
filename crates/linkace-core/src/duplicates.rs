use crate::url_key::NormalizedUrlKey;

/// Returns the ids of `existing` URLs whose key contains `candidate`.
///
/// Matching is a substring test on the normalized keys, so broader URLs
/// (e.g. `ex.com/a/b` for a candidate of `ex.com/a`) match too. Existing URLs
/// without a key are skipped. A `None` candidate matches nothing.
///
/// Input order is preserved.
pub fn find_duplicates<I, U, T>(candidate: Option<&NormalizedUrlKey>, existing: T) -> Vec<I>
where
    T: IntoIterator<Item = (I, U)>,
    U: AsRef<str>,
{
    let Some(candidate) = candidate else {
        return Vec::new();
    };

    existing
        .into_iter()
        .filter(|(_, url)| {
            NormalizedUrlKey::parse(url.as_ref()).is_some_and(|key| key.contains(candidate))
        })
        .map(|(id, _)| id)
        .collect()
}

/// Normalizes `url` and searches `existing` for duplicates of it.
pub fn find_duplicates_of_url<I, U, T>(url: &str, existing: T) -> Vec<I>
where
    T: IntoIterator<Item = (I, U)>,
    U: AsRef<str>,
{
    find_duplicates(NormalizedUrlKey::parse(url).as_ref(), existing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_matches_nothing() {
        let existing = vec![(1, "http://ex.com/a"), (2, "not a url"), (3, "")];
        assert!(find_duplicates(None, existing).is_empty());
    }

    #[test]
    fn matches_by_host_and_path_only() {
        let existing = vec![(1, "http://ex.com/a/"), (2, "http://other.com/a")];
        let ids = find_duplicates_of_url("https://ex.com/a?x=1", existing);
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn substring_match_includes_broader_urls() {
        let existing = vec![
            (1, "https://ex.com/a/b"),
            (2, "https://ex.com/b"),
            (3, "https://sub.ex.com/a"),
        ];
        let ids = find_duplicates_of_url("http://ex.com/a", existing);
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unparseable_candidates_are_skipped() {
        let existing = vec![(1, "ex.com/a"), (2, "mailto:a@ex.com"), (3, "https://ex.com/a")];
        let ids = find_duplicates_of_url("https://ex.com/a", existing);
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn input_order_is_preserved() {
        let existing = vec![
            (9, "https://ex.com/a"),
            (2, "http://ex.com/a/"),
            (5, "https://ex.com/a#x"),
        ];
        let ids = find_duplicates_of_url("https://ex.com/a", existing);
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn owned_urls_are_accepted() {
        let existing: Vec<(u64, String)> = vec![(1, "https://ex.com/a".to_string())];
        let key = NormalizedUrlKey::parse("https://ex.com/a");
        assert_eq!(find_duplicates(key.as_ref(), existing), vec![1]);
    }
}
