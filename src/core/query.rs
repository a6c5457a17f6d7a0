// CreatorScope - core/query.rs
//
// Query orchestration: filter, then sort.

use crate::core::filter::{filter_creators, filtered_indices, QueryState};
use crate::core::model::CreatorRecord;
use crate::core::sort::{sort_creators, sort_indices};

/// Run `state` against `records`: filter, then order by `state.sort_key`.
///
/// Pure and total. The input slice is never reordered; the result is a new
/// vector of references into it.
pub fn query<'a>(records: &'a [CreatorRecord], state: &QueryState) -> Vec<&'a CreatorRecord> {
    let filtered = filter_creators(records, state);
    let ordered = sort_creators(&filtered, state.sort_key);
    tracing::debug!(
        total = records.len(),
        matched = ordered.len(),
        sort = %state.sort_key,
        "Query evaluated"
    );
    ordered
}

/// Same as [`query`], returning indices into `records`.
pub fn query_indices(records: &[CreatorRecord], state: &QueryState) -> Vec<usize> {
    let filtered = filtered_indices(records, state);
    sort_indices(records, &filtered, state.sort_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Analytics;

    fn make_creator(id: &str, platform: &str, followers: f64, pricing: Option<&str>) -> CreatorRecord {
        CreatorRecord {
            id: id.to_string(),
            name: id.to_string(),
            platform: Some(platform.to_string()),
            pricing: pricing.map(str::to_string),
            analytics: Some(Analytics {
                followers: Some(followers),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_platform_query_sorted_by_followers() {
        let records = vec![
            make_creator("A", "Instagram", 2_000_000.0, Some("$500")),
            make_creator("B", "YouTube", 50_000.0, Some("$50")),
            make_creator("C", "Instagram", 800_000.0, None),
        ];
        let state = QueryState {
            platform: "Instagram".to_string(),
            ..Default::default()
        };
        let ids: Vec<_> = query(&records, &state).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["A", "C"]);
        assert_eq!(query_indices(&records, &state), vec![0, 2]);
    }

    #[test]
    fn test_query_is_deterministic() {
        let records = vec![
            make_creator("x", "TikTok", 10.0, None),
            make_creator("y", "TikTok", 10.0, None),
            make_creator("z", "TikTok", 30.0, None),
        ];
        let state = QueryState::default();
        assert_eq!(query(&records, &state), query(&records, &state));
        assert_eq!(query_indices(&records, &state), vec![2, 0, 1]);
    }
}
