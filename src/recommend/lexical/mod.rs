
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, Course, Student};
use crate::text::similarity::{rank_candidates, similarity_matrix};
use crate::text::vectorize::{DocumentVector, TfidfVectorizer};
use crate::Result;

/// Ranks catalog courses against student profiles or ad-hoc query text.
///
/// `fit` builds an immutable snapshot: one vocabulary over the union of all
/// profiles and course documents, plus the transformed vectors for both
/// sides. Recommendation requests share the snapshot read-only; refreshing
/// the catalog means fitting a new recommender and swapping it in, never
/// mutating this one.
#[derive(Debug, Clone)]
pub struct LexicalRecommender {
    catalog: Arc<Catalog>,
    vectorizer: TfidfVectorizer,
    student_vectors: Vec<DocumentVector>,
    course_vectors: Vec<DocumentVector>,
}

impl LexicalRecommender {
    /// Fit the vector space over the catalog and precompute both sides.
    ///
    /// The vocabulary is learned from profiles and course documents
    /// together. A fit restricted to one side would put queries and
    /// candidates in incompatible spaces, so the union corpus is not an
    /// optimization, it is the correctness condition.
    #[inline]
    pub fn fit(catalog: Arc<Catalog>) -> Result<Self> {
        let profiles: Vec<String> = catalog.students().iter().map(Student::profile).collect();
        let documents: Vec<String> = catalog.courses().iter().map(Course::document).collect();

        let mut corpus: Vec<&str> = Vec::with_capacity(profiles.len() + documents.len());
        corpus.extend(profiles.iter().map(String::as_str));
        corpus.extend(documents.iter().map(String::as_str));

        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&corpus)?;

        let student_vectors = vectorizer.transform_batch(&profiles)?;
        let course_vectors = vectorizer.transform_batch(&documents)?;

        debug!(
            "Fitted lexical recommender: {} terms, {} students, {} courses",
            vectorizer.vocabulary_size(),
            student_vectors.len(),
            course_vectors.len()
        );

        Ok(Self {
            catalog,
            vectorizer,
            student_vectors,
            course_vectors,
        })
    }

    /// Top course ids for a known student, by descending cosine similarity.
    ///
    /// Equal scores keep catalog order. Returns at most `top_n` ids, fewer
    /// when the catalog is smaller; `top_n == 0` is an empty list.
    #[inline]
    pub fn recommend_for_student(&self, student_id: &str, top_n: usize) -> Result<Vec<String>> {
        if top_n == 0 {
            return Ok(Vec::new());
        }
        let student_idx = self.catalog.student_index_of(student_id)?;
        Ok(self.top_course_ids(&self.student_vectors[student_idx], top_n))
    }

    /// Top course ids for ad-hoc profile text.
    ///
    /// The query is transformed through the already-fitted vocabulary;
    /// refitting per query would silently change dimensionality and
    /// invalidate every comparison.
    #[inline]
    pub fn recommend_for_text(&self, text: &str, top_n: usize) -> Result<Vec<String>> {
        if top_n == 0 {
            return Ok(Vec::new());
        }
        let query = self.vectorizer.transform(text)?;
        Ok(self.top_course_ids(&query, top_n))
    }

    /// Full students × courses similarity grid, recomputed from the
    /// snapshot.
    #[inline]
    pub fn similarity_matrix(&self) -> Vec<Vec<f64>> {
        similarity_matrix(&self.student_vectors, &self.course_vectors)
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    fn top_course_ids(&self, query: &DocumentVector, top_n: usize) -> Vec<String> {
        rank_candidates(query, &self.course_vectors)
            .into_iter()
            .take(top_n)
            .filter_map(|(idx, _)| self.catalog.course_id_at(idx))
            .map(str::to_string)
            .collect()
    }
}
