#[cfg(test)]
mod tests;

use crate::text::vectorize::DocumentVector;

/// Cosine similarity of two vectors drawn from the same fitted vocabulary.
///
/// Vectors are unit length by construction, so this is a sparse dot
/// product. A zero vector scores 0.0 against everything.
#[inline]
pub fn cosine_similarity(a: &DocumentVector, b: &DocumentVector) -> f64 {
    a.dot(b)
}

/// Score every query against every candidate.
///
/// Returns a row-major matrix: `result[i][j]` is the similarity of query
/// `i` to candidate `j`.
#[inline]
pub fn similarity_matrix(
    queries: &[DocumentVector],
    candidates: &[DocumentVector],
) -> Vec<Vec<f64>> {
    queries
        .iter()
        .map(|query| {
            candidates
                .iter()
                .map(|candidate| query.dot(candidate))
                .collect()
        })
        .collect()
}

/// Rank candidates by descending similarity to a query.
///
/// Returns `(candidate_index, score)` pairs. The sort is stable, so equal
/// scores keep candidate insertion order.
#[inline]
pub fn rank_candidates(query: &DocumentVector, candidates: &[DocumentVector]) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| (idx, query.dot(candidate)))
        .collect();

    // Scores come from unit-vector dot products and are never NaN.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
}
