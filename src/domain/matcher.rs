//! Keyword-overlap scoring. Pure functions over already-extracted keywords.

use super::entities::FaqEntry;
use super::keywords::extract_keywords;

/// Winning entry and the score it won with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub entry: &'a FaqEntry,
    pub score: usize,
}

/// Number of user keywords found in `entry_keywords`.
///
/// Counted per user token, so a keyword the user repeats scores once per
/// repetition. Repeats on the entry side do not add anything.
pub fn match_score(user_keywords: &[String], entry_keywords: &[String]) -> usize {
    user_keywords
        .iter()
        .filter(|k| entry_keywords.contains(k))
        .count()
}

/// Scan `entries` in order and return the highest-scoring one.
///
/// Only a strictly higher score replaces the current best, so the first entry
/// wins a tie. Returns `None` when nothing scores above zero.
pub fn best_match<'a>(user_keywords: &[String], entries: &'a [FaqEntry]) -> Option<Match<'a>> {
    let mut best: Option<Match<'a>> = None;
    for entry in entries {
        let entry_keywords = extract_keywords(&entry.question);
        let score = match_score(user_keywords, &entry_keywords);
        if score > best.map_or(0, |m| m.score) {
            best = Some(Match { entry, score });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, question: &str, answer: &str) -> FaqEntry {
        FaqEntry {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_match_score_counts_user_multiplicity_only() {
        let entry_kw = kw(&["protein", "protein", "sources"]);
        assert_eq!(match_score(&kw(&["protein"]), &entry_kw), 1);
        assert_eq!(match_score(&kw(&["protein", "protein"]), &entry_kw), 2);
        assert_eq!(match_score(&kw(&["fiber"]), &entry_kw), 0);
        assert_eq!(match_score(&[], &entry_kw), 0);
    }

    #[test]
    fn test_best_match_balanced_diet_scenario() {
        let entries = vec![
            entry(1, "What is a balanced diet?", "A1"),
            entry(2, "How can I lose weight?", "A2"),
        ];
        let user = extract_keywords("what is balanced diet");
        assert_eq!(user, kw(&["balanced", "diet"]));

        let m = best_match(&user, &entries).unwrap();
        assert_eq!(m.entry.answer, "A1");
        assert_eq!(m.score, 2);
    }

    #[test]
    fn test_best_match_prefers_strictly_more_shared_keywords() {
        let entries = vec![
            entry(1, "Healthy breakfast ideas", "breakfast"),
            entry(2, "Healthy breakfast ideas for diabetics", "diabetic breakfast"),
        ];
        let user = extract_keywords("breakfast ideas for diabetics");
        let m = best_match(&user, &entries).unwrap();
        assert_eq!(m.entry.id, 2);
        assert_eq!(m.score, 3);
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let entries = vec![
            entry(1, "Sugar and weight", "first"),
            entry(2, "Weight and sugar", "second"),
            entry(3, "Sugar weight", "third"),
        ];
        let user = extract_keywords("sugar weight");
        let m = best_match(&user, &entries).unwrap();
        assert_eq!(m.entry.answer, "first");
    }

    #[test]
    fn test_best_match_none_when_all_zero() {
        let entries = vec![entry(1, "What is a balanced diet?", "A1")];
        assert!(best_match(&kw(&["hydration"]), &entries).is_none());
        assert!(best_match(&kw(&["hydration"]), &[]).is_none());
        assert!(best_match(&[], &entries).is_none());
    }

    #[test]
    fn test_best_match_entry_normalization_applies() {
        let entries = vec![entry(1, "  GLUTEN-free? Options!!", "gf")];
        let user = extract_keywords("glutenfree options");
        let m = best_match(&user, &entries).unwrap();
        assert_eq!(m.score, 2);
    }
}
