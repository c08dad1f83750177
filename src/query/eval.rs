//! Query evaluation and ranking

use crate::index::Index;
use std::collections::{HashMap, HashSet};

/// A matching URL with its rank score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub url: String,
    pub score: u64,
}

/// Evaluates OR-groups of AND-words against an index
///
/// Each AND-group contributes its hits; a URL matched by several groups sums
/// their scores. Results come back sorted by descending score, ties broken
/// by URL so output is deterministic.
pub fn evaluate_query(groups: &[Vec<String>], index: &Index) -> Vec<Hit> {
    let mut scores: HashMap<String, u64> = HashMap::new();
    for group in groups {
        for hit in evaluate_and_group(group, index) {
            *scores.entry(hit.url).or_default() += hit.score;
        }
    }

    let mut hits: Vec<Hit> = scores
        .into_iter()
        .map(|(url, score)| Hit { url, score })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.url.cmp(&b.url)));
    hits
}

/// Evaluates a single AND-group
///
/// A URL matches when every include word appears on it and no negated word
/// does. The score is the minimum term frequency across the include words:
/// a conjunction is only as strong as its rarest term.
fn evaluate_and_group(group: &[String], index: &Index) -> Vec<Hit> {
    let mut excluded: HashSet<&str> = HashSet::new();
    let mut matched: HashMap<&str, usize> = HashMap::new();
    let mut include_words: Vec<&str> = Vec::new();

    for word in group {
        if let Some(negated) = word.strip_prefix('-') {
            if negated.len() < 3 {
                continue;
            }
            // How often a URL is "voted out" does not matter; once is enough.
            if let Some(urls) = index.postings(negated) {
                excluded.extend(urls.keys().map(String::as_str));
            }
        } else {
            if word.len() < 3 {
                continue;
            }
            include_words.push(word.as_str());
            match index.postings(word) {
                Some(urls) => {
                    for url in urls.keys() {
                        *matched.entry(url.as_str()).or_default() += 1;
                    }
                }
                // An absent word means no URL can satisfy the conjunction.
                None => return Vec::new(),
            }
        }
    }

    let mut hits = Vec::new();
    for (url, count) in matched {
        if count == include_words.len() && !excluded.contains(url) {
            let score = include_words
                .iter()
                .map(|word| index.count(word, url))
                .min()
                .unwrap_or(0);
            hits.push(Hit {
                url: url.to_string(),
                score,
            });
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> Index {
        let mut index = Index::new();
        // /a: rust x3, crawler x1
        for _ in 0..3 {
            index.record("rust", "https://x/a");
        }
        index.record("crawler", "https://x/a");
        // /b: rust x1, search x2
        index.record("rust", "https://x/b");
        index.record("search", "https://x/b");
        index.record("search", "https://x/b");
        index
    }

    fn groups(query: &[&[&str]]) -> Vec<Vec<String>> {
        query
            .iter()
            .map(|g| g.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_single_word_ranks_by_frequency() {
        let hits = evaluate_query(&groups(&[&["rust"]]), &sample_index());
        assert_eq!(
            hits,
            vec![
                Hit {
                    url: "https://x/a".to_string(),
                    score: 3
                },
                Hit {
                    url: "https://x/b".to_string(),
                    score: 1
                },
            ]
        );
    }

    #[test]
    fn test_and_takes_minimum_frequency() {
        let hits = evaluate_query(&groups(&[&["rust", "crawler"]]), &sample_index());
        assert_eq!(
            hits,
            vec![Hit {
                url: "https://x/a".to_string(),
                score: 1
            }]
        );
    }

    #[test]
    fn test_and_with_absent_word_matches_nothing() {
        let hits = evaluate_query(&groups(&[&["rust", "nonexistent"]]), &sample_index());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_negation_excludes_urls() {
        // Every page with "search" is excluded, leaving only /a.
        let hits = evaluate_query(&groups(&[&["rust", "-search"]]), &sample_index());
        assert_eq!(
            hits,
            vec![Hit {
                url: "https://x/a".to_string(),
                score: 3
            }]
        );
    }

    #[test]
    fn test_or_sums_group_scores() {
        // /b matches both groups: rust (1) + search (2).
        let hits = evaluate_query(&groups(&[&["rust"], &["search"]]), &sample_index());
        assert_eq!(
            hits,
            vec![
                Hit {
                    url: "https://x/a".to_string(),
                    score: 3
                },
                Hit {
                    url: "https://x/b".to_string(),
                    score: 3
                },
            ]
        );
    }

    #[test]
    fn test_short_words_ignored() {
        // "go" is below the length cutoff, so the group reduces to "rust".
        let hits = evaluate_query(&groups(&[&["go", "rust"]]), &sample_index());
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_only_negations_match_nothing() {
        let hits = evaluate_query(&groups(&[&["-rust"]]), &sample_index());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_index() {
        let hits = evaluate_query(&groups(&[&["anything"]]), &Index::new());
        assert!(hits.is_empty());
    }
}
