#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::{RecError, Result};

/// Sparse student × course interaction grid.
///
/// Loaded from a wide table: the first column carries the student id and
/// every remaining column is named after a course. A cell greater than zero
/// means the student engaged with that course; the positive cells of a row
/// form the student's rated set.
#[derive(Debug, Clone)]
pub struct InteractionMatrix {
    student_ids: Vec<String>,
    course_names: Vec<String>,
    weights: Vec<Vec<f64>>,
    row_index: HashMap<String, usize>,
}

impl InteractionMatrix {
    /// Build a matrix from parallel rows.
    ///
    /// Every row must have one weight per course column; weights must be
    /// non-negative; student ids must be unique.
    #[inline]
    pub fn new(
        student_ids: Vec<String>,
        course_names: Vec<String>,
        weights: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if weights.len() != student_ids.len() {
            return Err(RecError::Data(format!(
                "Interaction matrix has {} rows for {} students",
                weights.len(),
                student_ids.len()
            )));
        }

        for (row, student_id) in weights.iter().zip(&student_ids) {
            if row.len() != course_names.len() {
                return Err(RecError::Data(format!(
                    "Interaction row for student {} has {} cells, expected {}",
                    student_id,
                    row.len(),
                    course_names.len()
                )));
            }
            if row.iter().any(|&w| w < 0.0 || !w.is_finite()) {
                return Err(RecError::Data(format!(
                    "Interaction row for student {} contains a negative or non-finite weight",
                    student_id
                )));
            }
        }

        let mut row_index = HashMap::with_capacity(student_ids.len());
        for (idx, student_id) in student_ids.iter().enumerate() {
            if row_index.insert(student_id.clone(), idx).is_some() {
                return Err(RecError::Data(format!(
                    "Duplicate student id in interaction matrix: {}",
                    student_id
                )));
            }
        }

        Ok(Self {
            student_ids,
            course_names,
            weights,
            row_index,
        })
    }

    /// Load a matrix from a wide CSV file.
    ///
    /// Headers after the first column are course names; cells parse as
    /// non-negative floats, with empty cells treated as zero.
    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open ratings file: {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read ratings header: {}", path.display()))?
            .clone();
        if headers.is_empty() {
            return Err(RecError::Data(format!(
                "Ratings file has no columns: {}",
                path.display()
            )));
        }
        let course_names: Vec<String> =
            headers.iter().skip(1).map(str::to_string).collect();

        let mut student_ids = Vec::new();
        let mut weights = Vec::new();
        for row in reader.records() {
            let record =
                row.with_context(|| format!("Malformed ratings row in {}", path.display()))?;
            let mut cells = record.iter();
            let student_id = cells
                .next()
                .ok_or_else(|| RecError::Data("Empty ratings row".to_string()))?
                .to_string();

            let mut parsed = Vec::with_capacity(course_names.len());
            for cell in cells {
                let trimmed = cell.trim();
                let weight = if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().map_err(|_| {
                        RecError::Data(format!(
                            "Invalid rating '{}' for student {}",
                            cell, student_id
                        ))
                    })?
                };
                parsed.push(weight);
            }

            student_ids.push(student_id);
            weights.push(parsed);
        }

        info!(
            "Loaded interaction matrix: {} students x {} courses",
            student_ids.len(),
            course_names.len()
        );

        Self::new(student_ids, course_names, weights)
    }

    /// Course names the student engaged with, in column order.
    #[inline]
    pub fn rated_courses(&self, student_id: &str) -> Result<Vec<&str>> {
        let row = self
            .row_index
            .get(student_id)
            .copied()
            .ok_or_else(|| RecError::StudentNotFound(student_id.to_string()))?;
        Ok(self.rated_courses_at(row))
    }

    /// Course names with weight > 0 in the given row, in column order.
    #[inline]
    pub fn rated_courses_at(&self, row: usize) -> Vec<&str> {
        self.weights[row]
            .iter()
            .zip(&self.course_names)
            .filter(|&(&weight, _)| weight > 0.0)
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// Rated set for a student, for overlap comparisons.
    #[inline]
    pub fn rated_set(&self, student_id: &str) -> Result<HashSet<&str>> {
        self.rated_courses(student_id)
            .map(|courses| courses.into_iter().collect())
    }

    #[inline]
    pub fn rated_set_at(&self, row: usize) -> HashSet<&str> {
        self.rated_courses_at(row).into_iter().collect()
    }

    #[inline]
    pub fn student_ids(&self) -> &[String] {
        &self.student_ids
    }

    #[inline]
    pub fn course_names(&self) -> &[String] {
        &self.course_names
    }

    #[inline]
    pub fn student_count(&self) -> usize {
        self.student_ids.len()
    }

    #[inline]
    pub fn contains_student(&self, student_id: &str) -> bool {
        self.row_index.contains_key(student_id)
    }
}
