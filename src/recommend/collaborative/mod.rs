
use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::interactions::InteractionMatrix;
use crate::Result;

/// Jaccard index of two rated sets: |intersection| / |union|.
///
/// Two empty sets score 0.0, not NaN, so every pair is comparable.
#[inline]
pub fn jaccard_index(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Recommends courses by set overlap between students' rated courses.
///
/// Similarity between students is the Jaccard index of their rated sets;
/// ratings count as binary presence (weight > 0), magnitude is ignored.
#[derive(Debug, Clone)]
pub struct CollaborativeRecommender {
    catalog: Arc<Catalog>,
    interactions: InteractionMatrix,
}

impl CollaborativeRecommender {
    #[inline]
    pub fn new(catalog: Arc<Catalog>, interactions: InteractionMatrix) -> Self {
        Self {
            catalog,
            interactions,
        }
    }

    /// Nearest neighbors of a known student, excluding the student
    /// themself.
    ///
    /// Ordered by descending similarity; ties break by ascending student
    /// id. Returns at most `k` entries.
    #[inline]
    pub fn similar_students(&self, student_id: &str, k: usize) -> Result<Vec<(String, f64)>> {
        let own_set = self.interactions.rated_set(student_id)?;
        let mut neighbors = self.score_against_all(&own_set);
        neighbors.retain(|(id, _)| id != student_id);
        neighbors.truncate(k);
        Ok(neighbors)
    }

    /// Nearest neighbors of an ad-hoc rated set (a student with no row in
    /// the matrix).
    #[inline]
    pub fn similar_to_set(&self, rated: &HashSet<&str>, k: usize) -> Vec<(String, f64)> {
        let mut neighbors = self.score_against_all(rated);
        neighbors.truncate(k);
        neighbors
    }

    /// Full student × student Jaccard grid.
    ///
    /// Each output row depends only on the precomputed rated sets, so rows
    /// are computed on parallel workers with no shared mutable state.
    #[inline]
    pub fn pairwise_similarity(&self) -> Vec<Vec<f64>> {
        let sets: Vec<HashSet<&str>> = (0..self.interactions.student_count())
            .map(|row| self.interactions.rated_set_at(row))
            .collect();

        sets.par_iter()
            .map(|row_set| sets.iter().map(|other| jaccard_index(row_set, other)).collect())
            .collect()
    }

    /// Courses for a new student, propagated from the nearest neighbors of
    /// their rated set.
    ///
    /// Neighbors are walked in rank order; each neighbor contributes their
    /// rated courses in column order, minus courses the caller already
    /// rated, deduplicated on first occurrence, mapped to catalog ids, and
    /// truncated to `top_n`. Fewer candidates than `top_n` is a valid
    /// result. A course name with no catalog entry is skipped with a
    /// warning because it cannot be mapped to a stable id.
    #[inline]
    pub fn recommend_for_new_student(
        &self,
        rated: &[String],
        top_n: usize,
        neighborhood_size: usize,
    ) -> Vec<String> {
        if top_n == 0 {
            return Vec::new();
        }

        let rated_set: HashSet<&str> = rated.iter().map(String::as_str).collect();
        let neighbors = self.similar_to_set(&rated_set, neighborhood_size);

        debug!(
            "Aggregating recommendations from {} neighbors",
            neighbors.len()
        );

        let mut seen: HashSet<&str> = HashSet::new();
        let mut recommendations = Vec::new();
        'outer: for (neighbor_id, _) in &neighbors {
            let Ok(neighbor_courses) = self.interactions.rated_courses(neighbor_id) else {
                continue;
            };
            for course_name in neighbor_courses {
                if rated_set.contains(course_name) || !seen.insert(course_name) {
                    continue;
                }
                match self.catalog.course_id_by_name(course_name) {
                    Some(course_id) => {
                        recommendations.push(course_id.to_string());
                        if recommendations.len() == top_n {
                            break 'outer;
                        }
                    }
                    None => {
                        warn!(
                            "Skipping interaction course with no catalog entry: {}",
                            course_name
                        );
                    }
                }
            }
        }

        recommendations
    }

    #[inline]
    pub fn interactions(&self) -> &InteractionMatrix {
        &self.interactions
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Score a rated set against every student row, sorted descending with
    /// ascending-id tie-break.
    fn score_against_all(&self, rated: &HashSet<&str>) -> Vec<(String, f64)> {
        let mut scored: Vec<(String, f64)> = self
            .interactions
            .student_ids()
            .iter()
            .enumerate()
            .map(|(row, id)| {
                let other = self.interactions.rated_set_at(row);
                (id.clone(), jaccard_index(rated, &other))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored
    }
}
