//! Relevance Scorer & Selector — ranks résumé chunks against a query and picks
//! the bounded working set injected into the prompt.
//!
//! No LLM calls, no state: every request gets a fresh scored copy of the store.

use crate::documents::DocumentStore;
use crate::models::chunk::Chunk;
use crate::retrieval::tokenizer::Query;

/// Limits and always-include ids for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Upper bound on primary (scored or fallback) chunks.
    pub max_matches: usize,
    /// Chunks appended to every selection, in this order.
    pub mandatory_ids: Vec<u32>,
    /// Hard cap on the final selection.
    pub max_total: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            max_matches: 5,
            mandatory_ids: vec![1, 2, 3],
            max_total: 8,
        }
    }
}

/// A chunk paired with its per-request term-frequency score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredChunk<'a> {
    pub chunk: &'a Chunk,
    pub score: u32,
}

/// Counts non-overlapping literal occurrences of `term`, scanning left to right.
///
/// This is substring matching: "audit" also counts inside "auditor".
pub fn count_occurrences(haystack: &str, term: &str) -> u32 {
    if term.is_empty() {
        return 0;
    }
    haystack.matches(term).count() as u32
}

/// Sum of occurrence counts of every query term in the chunk's searchable text.
pub fn score_chunk(chunk: &Chunk, query: &Query) -> u32 {
    if query.is_empty() {
        return 0;
    }
    let text = chunk.searchable_text();
    query
        .terms
        .iter()
        .map(|term| count_occurrences(&text, term))
        .sum()
}

/// Scores every chunk and sorts by descending score.
///
/// `sort_by` is stable, so chunks with equal scores keep store order.
pub fn rank_chunks<'a>(store: &'a DocumentStore, query: &Query) -> Vec<ScoredChunk<'a>> {
    let mut ranked: Vec<ScoredChunk<'a>> = store
        .chunks()
        .iter()
        .map(|chunk| ScoredChunk {
            chunk,
            score: score_chunk(chunk, query),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Selects the chunks to inject as context.
///
/// 1. Primary: top `max_matches` chunks with score > 0, by rank.
/// 2. Fallback: no match at all → first `max_matches` chunks in store order.
/// 3. Mandatory ids not already selected are appended (unknown ids are skipped).
/// 4. Cap at `max_total`. Mandatory chunks win: the lowest-ranked
///    non-mandatory primary chunks are dropped first. If the mandatory chunks
///    alone exceed the cap, the first `max_total` in configured order are kept.
pub fn select_chunks<'a>(
    store: &'a DocumentStore,
    query: &Query,
    policy: &SelectionPolicy,
) -> Vec<&'a Chunk> {
    let ranked = rank_chunks(store, query);

    let mut primary: Vec<&'a Chunk> = ranked
        .iter()
        .filter(|scored| scored.score > 0)
        .take(policy.max_matches)
        .map(|scored| scored.chunk)
        .collect();

    if primary.is_empty() {
        primary = store.chunks().iter().take(policy.max_matches).collect();
    }

    let mut appended: Vec<&'a Chunk> = Vec::new();
    for id in &policy.mandatory_ids {
        let already_selected = primary.iter().chain(appended.iter()).any(|c| c.id == *id);
        if already_selected {
            continue;
        }
        if let Some(chunk) = store.get(*id) {
            appended.push(chunk);
        }
    }

    let is_mandatory = |chunk: &Chunk| policy.mandatory_ids.contains(&chunk.id);

    let mut overflow = (primary.len() + appended.len()).saturating_sub(policy.max_total);
    let mut index = primary.len();
    while overflow > 0 && index > 0 {
        index -= 1;
        if !is_mandatory(primary[index]) {
            primary.remove(index);
            overflow -= 1;
        }
    }

    if primary.len() + appended.len() > policy.max_total {
        // Only mandatory chunks are left.
        return mandatory_in_order(store, policy);
    }

    let mut selection = primary;
    selection.extend(appended);
    selection
}

/// Known mandatory chunks in configured order, deduplicated, capped at `max_total`.
fn mandatory_in_order<'a>(store: &'a DocumentStore, policy: &SelectionPolicy) -> Vec<&'a Chunk> {
    let mut selection: Vec<&'a Chunk> = Vec::with_capacity(policy.max_total);
    for id in &policy.mandatory_ids {
        if selection.len() == policy.max_total {
            break;
        }
        if selection.iter().any(|c| c.id == *id) {
            continue;
        }
        if let Some(chunk) = store.get(*id) {
            selection.push(chunk);
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: u32, title: &str, text: &str) -> Chunk {
        Chunk {
            id,
            title: title.to_string(),
            text: Some(text.to_string()),
            text_it: None,
            text_en: None,
            text_sv: None,
        }
    }

    fn resume_store() -> DocumentStore {
        DocumentStore::new(vec![
            chunk(1, "Profile", "Finance graduate"),
            chunk(2, "Education", "Stockholm University"),
            chunk(3, "Education2", "Università Cattolica"),
            chunk(4, "Experience", "Audit at BDO Italia"),
        ])
        .unwrap()
    }

    fn ids(selection: &[&Chunk]) -> Vec<u32> {
        selection.iter().map(|c| c.id).collect()
    }

    fn policy(max_matches: usize, mandatory_ids: &[u32], max_total: usize) -> SelectionPolicy {
        SelectionPolicy {
            max_matches,
            mandatory_ids: mandatory_ids.to_vec(),
            max_total,
        }
    }

    #[test]
    fn test_count_occurrences_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("audit auditor", "audit"), 2);
        assert_eq!(count_occurrences("audit", ""), 0);
        assert_eq!(count_occurrences("", "audit"), 0);
    }

    #[test]
    fn test_bdo_audit_scenario() {
        let store = resume_store();
        let query = Query::parse("tell me about BDO audit experience");

        let ranked = rank_chunks(&store, &query);
        assert_eq!(ranked[0].chunk.id, 4);
        assert!(ranked[0].score >= 1);

        let selection = select_chunks(&store, &query, &policy(5, &[1, 2, 3], 8));
        assert_eq!(ids(&selection), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_no_overlap_falls_back_to_store_order() {
        let store = resume_store();
        let query = Query::parse("xyzxyz");

        assert!(rank_chunks(&store, &query).iter().all(|s| s.score == 0));

        let selection = select_chunks(&store, &query, &policy(2, &[1, 2, 3], 8));
        // Fallback [1, 2], then mandatory 3 appended; 1 and 2 already present
        assert_eq!(ids(&selection), vec![1, 2, 3]);
    }

    #[test]
    fn test_fallback_ignores_term_content() {
        let store = resume_store();
        let p = policy(3, &[], 8);
        let a = select_chunks(&store, &Query::parse("qqqq wwww"), &p);
        let b = select_chunks(&store, &Query::parse(""), &p);
        assert_eq!(ids(&a), vec![1, 2, 3]);
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_ties_keep_store_order() {
        let store = DocumentStore::new(vec![
            chunk(10, "A", "rust"),
            chunk(11, "B", "nothing"),
            chunk(12, "C", "rust"),
            chunk(13, "D", "rust rust"),
        ])
        .unwrap();
        let selection = select_chunks(&store, &Query::parse("rust"), &policy(5, &[], 8));
        assert_eq!(ids(&selection), vec![13, 10, 12]);
    }

    #[test]
    fn test_matches_rank_above_zero_score_chunks() {
        let store = DocumentStore::new(vec![
            chunk(1, "Profile", "generalist"),
            chunk(2, "Skills", "python python"),
            chunk(3, "Hobby", "python"),
        ])
        .unwrap();
        let selection = select_chunks(&store, &Query::parse("python"), &policy(5, &[], 8));
        // Score-0 chunk 1 is not pulled in when something matched
        assert_eq!(ids(&selection), vec![2, 3]);
    }

    #[test]
    fn test_primary_bounded_by_max_matches() {
        let store = DocumentStore::new((1..=10).map(|i| chunk(i, "Item", "audit")).collect())
            .unwrap();
        let selection = select_chunks(&store, &Query::parse("audit"), &policy(4, &[], 8));
        assert_eq!(ids(&selection), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_mandatory_id_skipped() {
        let store = resume_store();
        let selection =
            select_chunks(&store, &Query::parse("audit"), &policy(5, &[1, 99], 8));
        assert_eq!(ids(&selection), vec![4, 1]);
    }

    #[test]
    fn test_duplicate_mandatory_ids_appended_once() {
        let store = resume_store();
        let selection =
            select_chunks(&store, &Query::parse("audit"), &policy(5, &[2, 2], 8));
        assert_eq!(ids(&selection), vec![4, 2]);
    }

    #[test]
    fn test_cap_drops_lowest_ranked_primary_first() {
        let store = DocumentStore::new(vec![
            chunk(1, "Profile", "none"),
            chunk(2, "Education", "none"),
            chunk(3, "A", "audit audit audit"),
            chunk(4, "B", "audit audit"),
            chunk(5, "C", "audit"),
        ])
        .unwrap();
        let selection =
            select_chunks(&store, &Query::parse("audit"), &policy(3, &[1, 2], 3));
        assert_eq!(ids(&selection), vec![3, 1, 2]);
    }

    #[test]
    fn test_cap_keeps_mandatory_chunk_found_by_score() {
        let store = DocumentStore::new(vec![
            chunk(1, "Profile", "audit"),
            chunk(2, "Education", "none"),
            chunk(3, "A", "audit audit audit"),
            chunk(4, "B", "audit audit"),
        ])
        .unwrap();
        // Primary = [3, 4, 1]; 2 appended; cap 3 drops 4 (not 1, which is mandatory)
        let selection =
            select_chunks(&store, &Query::parse("audit"), &policy(5, &[1, 2], 3));
        assert_eq!(ids(&selection), vec![3, 1, 2]);
    }

    #[test]
    fn test_mandatory_alone_exceeding_cap_is_truncated() {
        let store = resume_store();
        let selection =
            select_chunks(&store, &Query::parse("xyzxyz"), &policy(0, &[3, 2, 1], 2));
        assert_eq!(ids(&selection), vec![3, 2]);
    }

    #[test]
    fn test_mandatory_overflow_follows_configured_order() {
        let store = DocumentStore::new(vec![
            chunk(1, "Profile", "audit"),
            chunk(2, "Education", "none"),
            chunk(3, "Education2", "none"),
        ])
        .unwrap();
        // Chunk 1 is selected by score, but configured order decides who survives the cap
        let selection =
            select_chunks(&store, &Query::parse("audit"), &policy(5, &[3, 2, 1], 2));
        assert_eq!(ids(&selection), vec![3, 2]);
    }

    #[test]
    fn test_selection_never_exceeds_cap() {
        let store = DocumentStore::new((1..=20).map(|i| chunk(i, "Item", "audit")).collect())
            .unwrap();
        for cap in 0..10 {
            let p = policy(6, &[1, 2, 3, 15, 20], cap);
            for query in ["audit", "xyzxyz", ""] {
                let selection = select_chunks(&store, &Query::parse(query), &p);
                assert!(selection.len() <= cap, "cap {cap} exceeded for {query:?}");
            }
        }
    }

    #[test]
    fn test_mandatory_ids_present_when_room() {
        let store = DocumentStore::new((1..=20).map(|i| chunk(i, "Item", "audit")).collect())
            .unwrap();
        let p = policy(6, &[15, 20], 8);
        let selection = select_chunks(&store, &Query::parse("audit"), &p);
        let selected = ids(&selection);
        assert_eq!(selected.len(), 8);
        assert!(selected.contains(&15));
        assert!(selected.contains(&20));
    }

    #[test]
    fn test_scoring_leaves_store_untouched() {
        let store = resume_store();
        let before = store.chunks().to_vec();
        let query = Query::parse("audit experience");
        let _ = select_chunks(&store, &query, &SelectionPolicy::default());
        assert_eq!(store.chunks(), before.as_slice());
    }

    #[test]
    fn test_empty_store_selects_nothing() {
        let store = DocumentStore::new(vec![]).unwrap();
        let selection = select_chunks(&store, &Query::parse("audit"), &SelectionPolicy::default());
        assert!(selection.is_empty());
    }
}
