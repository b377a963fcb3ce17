//! Relevance scoring for a single term against a single field value.
//!
//! Fuzzy terms go through a skim/fzf-like scorer first; if that finds no
//! subsequence match, a bounded edit-distance check against the field's words
//! catches plain typos ("recat" for "react"). Both paths then receive the same
//! exact/prefix/substring bonuses so literal hits rank above scattered ones.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::extended::{Term, TermKind};

const EXACT_BONUS: i64 = 100_000;
const PREFIX_BONUS: i64 = 25_000;
const SUBSTRING_BONUS: i64 = 10_000;
const WORD_PREFIX_BONUS: i64 = 5_000;
const TYPO_BASE: i64 = 40;

pub(crate) fn matcher() -> SkimMatcherV2 {
    SkimMatcherV2::default().ignore_case()
}

/// Score `term` against one field value, or `None` when it does not match.
pub(crate) fn score_term(
    matcher: &SkimMatcherV2,
    term: &Term,
    text: &str,
    lower: &str,
) -> Option<i64> {
    match term.kind {
        TermKind::Fuzzy => {
            let base = matcher
                .fuzzy_match(text, &term.text)
                .or_else(|| typo_score(lower, &term.lower))?;
            Some(apply_match_bonuses(base, lower, text, &term.lower))
        }
        TermKind::Exact
        | TermKind::Include
        | TermKind::Prefix
        | TermKind::Suffix => {
            if !term.matches_literal(lower) {
                return None;
            }
            Some(apply_match_bonuses(0, lower, text, &term.lower))
        }
        TermKind::InverseInclude
        | TermKind::InversePrefix
        | TermKind::InverseSuffix => None,
    }
}

fn apply_match_bonuses(
    base_score: i64,
    lower: &str,
    text: &str,
    query_lower: &str,
) -> i64 {
    let mut score = base_score;

    if lower == query_lower {
        return score.saturating_add(EXACT_BONUS);
    }

    if lower.starts_with(query_lower) {
        score = score.saturating_add(PREFIX_BONUS);
    }

    if let Some(position) = lower.find(query_lower) {
        score = score.saturating_add(SUBSTRING_BONUS);
        score = score.saturating_add(2_000_i64.saturating_sub(position as i64));
    }

    if lower
        .split_whitespace()
        .any(|word| word.starts_with(query_lower))
    {
        score = score.saturating_add(WORD_PREFIX_BONUS);
    }

    // Mild length penalty so that shorter, tighter values win ties.
    score.saturating_sub(text.len().min(200) as i64)
}

/// Edits tolerated for a query word of `len` characters.
fn max_edits(len: usize) -> usize {
    match len {
        0..=3 => 0,
        4..=7 => 1,
        _ => 2,
    }
}

fn typo_score(lower: &str, query_lower: &str) -> Option<i64> {
    let query_len = query_lower.chars().count();
    let budget = max_edits(query_len);
    if budget == 0 {
        return None;
    }

    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .filter_map(|word| {
            let distance = edit_distance_bounded(word, query_lower, budget)?;
            Some(TYPO_BASE - (distance as i64) * 10)
        })
        .max()
}

/// Optimal string alignment distance (Levenshtein plus adjacent
/// transpositions), or `None` once it is known to exceed `limit`.
fn edit_distance_bounded(a: &str, b: &str, limit: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > limit {
        return None;
    }

    let width = b.len() + 1;
    let mut before_previous = vec![0; width];
    let mut previous: Vec<usize> = (0..width).collect();
    let mut current = vec![0; width];

    for i in 0..a.len() {
        current[0] = i + 1;
        let mut row_min = current[0];
        for j in 0..b.len() {
            let cost = usize::from(a[i] != b[j]);
            let mut best = (previous[j] + cost)
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
            if i > 0 && j > 0 && a[i] == b[j - 1] && a[i - 1] == b[j] {
                best = best.min(before_previous[j - 1] + 1);
            }
            current[j + 1] = best;
            row_min = row_min.min(best);
        }
        if row_min > limit {
            return None;
        }
        std::mem::swap(&mut before_previous, &mut previous);
        std::mem::swap(&mut previous, &mut current);
    }

    let distance = previous[b.len()];
    (distance <= limit).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::extended::parse;

    fn first_term(query: &str) -> Term {
        parse(query).groups.remove(0).remove(0)
    }

    fn score(query: &str, text: &str) -> Option<i64> {
        score_term(&matcher(), &first_term(query), text, &text.to_lowercase())
    }

    #[test]
    fn exact_beats_prefix_beats_scattered() {
        let exact = score("react", "React").unwrap();
        let prefix = score("react", "React Aria").unwrap();
        let scattered = score("rct", "Radix Components Toolkit").unwrap();
        assert!(exact > prefix);
        assert!(prefix > scattered);
    }

    #[test]
    fn typos_are_tolerated_for_longer_words() {
        assert!(score("recat", "React").is_some());
        assert!(score("tailwnid", "Tailwind CSS").is_some());
        // Three characters is too short to guess at.
        assert!(score("xyz", "abc").is_none());
    }

    #[test]
    fn literal_operators_require_literal_hits() {
        assert!(score("^tail", "Tailwind").is_some());
        assert!(score("^wind", "Tailwind").is_none());
        assert!(score("=tailwind", "Tailwind").is_some());
        assert!(score("=tail", "Tailwind").is_none());
        assert!(score("wind$", "Tailwind").is_some());
    }

    #[test]
    fn bounded_edit_distance() {
        assert_eq!(edit_distance_bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(edit_distance_bounded("kitten", "sitting", 2), None);
        assert_eq!(edit_distance_bounded("same", "same", 0), Some(0));
        // Adjacent swap is a single edit.
        assert_eq!(edit_distance_bounded("recat", "react", 1), Some(1));
    }
}
