use rayon::prelude::*;

/// Cosine similarity between two equal-length vectors.
/// cosθ = A・B / (|A||B|)
/// Zero division safety with f64::EPSILON, so a zero vector scores 0 rather
/// than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut dot = 0f64;
    let mut norm_a = 0f64;
    let mut norm_b = 0f64;
    for (va, vb) in a.iter().zip(b.iter()) {
        let va = *va as f64;
        let vb = *vb as f64;
        dot += va * vb;
        norm_a += va * va;
        norm_b += vb * vb;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt() + f64::EPSILON)
}

/// Score a query vector against every row of the document matrix.
/// The matrix is read-only; rows are scanned in parallel and results come
/// back in corpus order.
pub fn score_rows(matrix: &[Vec<f32>], query: &[f32]) -> Vec<f64> {
    matrix
        .par_iter()
        .map(|row| cosine_similarity(query, row))
        .collect()
}

/// Index and value of the first maximum score.
/// Ties resolve to the lowest index because only a strictly greater score
/// displaces the current best.
pub fn first_max(scores: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![0.6f32, 0.8];
        let score = cosine_similarity(&v, &v);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn zero_vector_scores_zero_not_nan() {
        let score = cosine_similarity(&[0.0, 0.0], &[0.6, 0.8]);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn first_max_breaks_ties_low() {
        assert_eq!(first_max(&[0.2, 0.9, 0.9, 0.1]), Some((1, 0.9)));
        assert_eq!(first_max(&[]), None);
    }
}
