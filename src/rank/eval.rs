//! Spearman rank correlation between a produced ranking and a golden one.

use crate::error::{Result, RetrievalError};
use std::collections::HashMap;

/// Spearman's coefficient `1 - 6 * sum(d^2) / (n * (n^2 - 1))`.
///
/// `d` is the distance between a document's golden position and its position
/// in `rank`. Golden ids missing from `rank` add nothing to the sum.
/// Both rankings need the same length, at least two entries, and no repeated ids.
pub fn calculate_spearman(rank: &[usize], golden_rank: &[usize]) -> Result<f64> {
    if rank.is_empty() {
        return Err(RetrievalError::EmptyInput("rank"));
    }
    if golden_rank.is_empty() {
        return Err(RetrievalError::EmptyInput("golden_rank"));
    }
    if rank.len() != golden_rank.len() {
        return Err(RetrievalError::LengthMismatch { left: rank.len(), right: golden_rank.len() });
    }
    let n = rank.len();
    if n < 2 {
        return Err(RetrievalError::TooFewItems(n));
    }

    let positions = position_map(rank)?;
    position_map(golden_rank)?;

    let squared: f64 = golden_rank
        .iter()
        .enumerate()
        .filter_map(|(golden_pos, doc_id)| {
            positions.get(doc_id).map(|&pos| {
                let d = pos as f64 - golden_pos as f64;
                d * d
            })
        })
        .sum();

    let n = n as f64;
    Ok(1.0 - (6.0 * squared) / (n * (n * n - 1.0)))
}

fn position_map(ranking: &[usize]) -> Result<HashMap<usize, usize>> {
    let mut positions = HashMap::with_capacity(ranking.len());
    for (pos, &doc_id) in ranking.iter().enumerate() {
        if positions.insert(doc_id, pos).is_some() {
            return Err(RetrievalError::DuplicateId(doc_id));
        }
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::calculate_spearman;
    use crate::error::RetrievalError;

    #[test]
    fn identical_rankings_correlate_perfectly() {
        assert_eq!(calculate_spearman(&[1, 2, 3], &[1, 2, 3]).unwrap(), 1.0);
    }

    #[test]
    fn reversed_rankings_anticorrelate() {
        assert_eq!(calculate_spearman(&[3, 2, 1], &[1, 2, 3]).unwrap(), -1.0);
    }

    #[test]
    fn partial_swap() {
        // d = [0, 1, 1, 0] -> 1 - 6 * 2 / (4 * 15) = 0.8
        let rho = calculate_spearman(&[0, 2, 1, 3], &[0, 1, 2, 3]).unwrap();
        assert!((rho - 0.8).abs() < 1e-12);
    }

    #[test]
    fn missing_ids_contribute_nothing() {
        // only id 1 is shared and sits at position 0 in both
        let rho = calculate_spearman(&[1, 7], &[1, 9]).unwrap();
        assert_eq!(rho, 1.0);
    }

    #[test]
    fn rejects_malformed_rankings() {
        assert!(matches!(calculate_spearman(&[], &[]), Err(RetrievalError::EmptyInput("rank"))));
        assert!(matches!(
            calculate_spearman(&[1, 2], &[1, 2, 3]),
            Err(RetrievalError::LengthMismatch { left: 2, right: 3 })
        ));
        assert!(matches!(calculate_spearman(&[4], &[4]), Err(RetrievalError::TooFewItems(1))));
        assert!(matches!(
            calculate_spearman(&[1, 1, 2], &[1, 2, 3]),
            Err(RetrievalError::DuplicateId(1))
        ));
    }
}
