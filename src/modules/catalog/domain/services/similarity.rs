use strsim::jaro_winkler;

/// Strategy for calculating similarity between two strings
///
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait SimilarityStrategy: Send + Sync {
    fn calculate(&self, query: &str, target: &str) -> f64;

    /// Get the name of this strategy for logging/debugging
    fn name(&self) -> &'static str;
}

/// Jaro-Winkler similarity strategy
///
/// Suited to short strings such as titles and author names; favours shared
/// prefixes.
#[derive(Debug, Clone)]
pub struct JaroWinklerStrategy;

impl SimilarityStrategy for JaroWinklerStrategy {
    fn calculate(&self, query: &str, target: &str) -> f64 {
        jaro_winkler(query, target)
    }

    fn name(&self) -> &'static str {
        "JaroWinkler"
    }
}

/// Best score of `query` against the whole field or any single word of it.
///
/// Word-level scoring lets a one-word query with a typo still find a long
/// title.
pub fn best_field_score(strategy: &dyn SimilarityStrategy, query: &str, field: &str) -> f64 {
    let field = field.to_lowercase();
    let whole = strategy.calculate(query, &field);

    field
        .split_whitespace()
        .map(|word| strategy.calculate(query, word))
        .fold(whole, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        let strategy = JaroWinklerStrategy;
        assert!((strategy.calculate("kingdom", "kingdom") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_word_level_match_beats_whole_title() {
        let strategy = JaroWinklerStrategy;
        let whole = strategy.calculate("samurei", "lost samurai legend");
        let best = best_field_score(&strategy, "samurei", "Lost Samurai Legend");
        assert!(best > whole);
        assert!(best > 0.9);
    }
}
