//! Serializable ranking records.

use serde::{Deserialize, Serialize};

use crate::backend::{Headline, Pun};

/// One pun's positions in an evaluator's two rankings of a headline.
///
/// Rank 0 is the funniest pun, and the pun most related to the headline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationRecord {
    /// Who produced the ranking.
    pub evaluator: String,
    /// Identifier of the ranked headline, in its string encoding.
    pub headline_id: String,
    /// Headline text at the time of ranking.
    pub headline: String,
    /// The ranked pun.
    pub pun: String,
    /// Zero-based position in the funniness ranking.
    pub funniness_rank: usize,
    /// Zero-based position in the similarity ranking.
    pub similarity_rank: usize,
}

/// A pun with its rank under both criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedPun<'a> {
    /// The ranked pun.
    pub pun: &'a Pun,
    /// Zero-based funniness rank.
    pub funniness_rank: usize,
    /// Zero-based similarity rank.
    pub similarity_rank: usize,
}

/// Builds one record per ranked pun, in iteration order.
#[must_use]
pub fn records_for_ranking<'a, I>(
    evaluator: &str,
    headline: &Headline,
    ranked_puns: I,
) -> Vec<EvaluationRecord>
where
    I: IntoIterator<Item = RankedPun<'a>>,
{
    ranked_puns
        .into_iter()
        .map(|ranked| EvaluationRecord {
            evaluator: evaluator.to_owned(),
            headline_id: headline.headline_id.to_string(),
            headline: headline.headline.clone(),
            pun: ranked.pun.generated.clone(),
            funniness_rank: ranked.funniness_rank,
            similarity_rank: ranked.similarity_rank,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::models::test_support::{headline, pun};

    #[test]
    fn records_carry_both_ranks() {
        let (best, worst) = (pun("best"), pun("worst"));
        let ranked = [
            RankedPun {
                pun: &best,
                funniness_rank: 0,
                similarity_rank: 1,
            },
            RankedPun {
                pun: &worst,
                funniness_rank: 1,
                similarity_rank: 0,
            },
        ];

        let records = records_for_ranking("ana", &headline("7", "News A"), ranked);

        let summary: Vec<_> = records
            .iter()
            .map(|r| (r.pun.as_str(), r.funniness_rank, r.similarity_rank))
            .collect();
        assert_eq!(summary, vec![("best", 0, 1), ("worst", 1, 0)]);
        assert!(records.iter().all(|r| r.headline_id == "7" && r.evaluator == "ana"));
    }
}
