use super::*;
use crate::text::vectorize::TfidfVectorizer;

fn fitted() -> TfidfVectorizer {
    let mut vectorizer = TfidfVectorizer::new();
    vectorizer
        .fit(&[
            "rust systems programming",
            "python data science",
            "rust web services",
        ])
        .expect("fit should succeed");
    vectorizer
}

#[test]
fn cosine_is_symmetric_within_one_vocabulary() {
    let vectorizer = fitted();
    let v1 = vectorizer
        .transform("rust systems")
        .expect("transform should succeed");
    let v2 = vectorizer
        .transform("rust web")
        .expect("transform should succeed");

    assert!((cosine_similarity(&v1, &v2) - cosine_similarity(&v2, &v1)).abs() < 1e-12);
}

#[test]
fn cosine_bounds() {
    let vectorizer = fitted();
    let v1 = vectorizer
        .transform("rust systems programming")
        .expect("transform should succeed");
    let v2 = vectorizer
        .transform("python data science")
        .expect("transform should succeed");

    let self_sim = cosine_similarity(&v1, &v1);
    let cross_sim = cosine_similarity(&v1, &v2);

    assert!((self_sim - 1.0).abs() < 1e-9);
    assert!((0.0..=1.0).contains(&cross_sim));
}

#[test]
fn zero_vector_scores_zero() {
    let vectorizer = fitted();
    let zero = vectorizer
        .transform("completely unrelated vocabulary")
        .expect("transform should succeed");
    let v = vectorizer
        .transform("rust systems")
        .expect("transform should succeed");

    assert!(zero.is_zero());
    assert_eq!(cosine_similarity(&zero, &v), 0.0);
}

#[test]
fn matrix_dimensions_and_values() {
    let vectorizer = fitted();
    let queries = vectorizer
        .transform_batch(&["rust systems", "python data"])
        .expect("transform should succeed");
    let candidates = vectorizer
        .transform_batch(&["rust web services", "python data science", "rust systems programming"])
        .expect("transform should succeed");

    let matrix = similarity_matrix(&queries, &candidates);

    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix[0].len(), 3);
    // The rust query's best candidate is a rust document
    assert!(matrix[0][2] > matrix[0][1]);
    // The python query's best candidate is the python document
    assert!(matrix[1][1] > matrix[1][0]);
}

#[test]
fn ranking_is_descending_with_stable_ties() {
    let vectorizer = fitted();
    let query = vectorizer
        .transform("rust systems")
        .expect("transform should succeed");
    // Two identical candidates produce a tie; stable sort keeps the first
    // one first.
    let candidates = vectorizer
        .transform_batch(&["rust web", "rust web", "python data"])
        .expect("transform should succeed");

    let ranked = rank_candidates(&query, &candidates);

    assert_eq!(ranked.len(), 3);
    assert!(ranked[0].1 >= ranked[1].1);
    assert!(ranked[1].1 >= ranked[2].1);
    assert_eq!((ranked[0].0, ranked[1].0), (0, 1));
}
