// Catalog store
// Holds the recommendable courses and queryable students, with stable id
// lookups in both directions and derived profile/document text.

pub mod models;


use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::{RecError, Result};

pub use models::{Course, CourseRecord, SkillLevel, Student, StudentRecord};

/// In-memory store of students and courses.
///
/// Row order is preserved from the source tables; vector and similarity
/// computations rely on index `i` here meaning the same record everywhere.
#[derive(Debug, Clone)]
pub struct Catalog {
    students: Vec<Student>,
    courses: Vec<Course>,
    student_index: HashMap<String, usize>,
    course_index: HashMap<String, usize>,
    course_name_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-validated records.
    ///
    /// Fails with a data error when either side contains a duplicate id.
    #[inline]
    pub fn new(students: Vec<Student>, courses: Vec<Course>) -> Result<Self> {
        let mut student_index = HashMap::with_capacity(students.len());
        for (idx, student) in students.iter().enumerate() {
            if student_index.insert(student.id.clone(), idx).is_some() {
                return Err(RecError::Data(format!(
                    "Duplicate student id: {}",
                    student.id
                )));
            }
        }

        let mut course_index = HashMap::with_capacity(courses.len());
        let mut course_name_index = HashMap::with_capacity(courses.len());
        for (idx, course) in courses.iter().enumerate() {
            if course_index.insert(course.id.clone(), idx).is_some() {
                return Err(RecError::Data(format!("Duplicate course id: {}", course.id)));
            }
            // First occurrence wins when two courses share a name; lookups by
            // name are only used to map interaction columns to ids.
            course_name_index.entry(course.name.clone()).or_insert(idx);
        }

        Ok(Self {
            students,
            courses,
            student_index,
            course_index,
            course_name_index,
        })
    }

    /// Load a catalog from two CSV files.
    #[inline]
    pub fn load<P: AsRef<Path>>(students_path: P, courses_path: P) -> Result<Self> {
        let students = read_students(students_path.as_ref())?;
        let courses = read_courses(courses_path.as_ref())?;

        info!(
            "Loaded catalog: {} students, {} courses",
            students.len(),
            courses.len()
        );

        Self::new(students, courses)
    }

    /// Derived profile text for a student.
    #[inline]
    pub fn profile_of(&self, student_id: &str) -> Result<String> {
        self.student(student_id).map(Student::profile)
    }

    /// Derived document text for a course.
    #[inline]
    pub fn document_of(&self, course_id: &str) -> Result<String> {
        self.course(course_id).map(Course::document)
    }

    #[inline]
    pub fn student(&self, student_id: &str) -> Result<&Student> {
        self.student_index
            .get(student_id)
            .map(|&idx| &self.students[idx])
            .ok_or_else(|| RecError::StudentNotFound(student_id.to_string()))
    }

    #[inline]
    pub fn course(&self, course_id: &str) -> Result<&Course> {
        self.course_index
            .get(course_id)
            .map(|&idx| &self.courses[idx])
            .ok_or_else(|| RecError::CourseNotFound(course_id.to_string()))
    }

    /// Index of a student within row order.
    #[inline]
    pub fn student_index_of(&self, student_id: &str) -> Result<usize> {
        self.student_index
            .get(student_id)
            .copied()
            .ok_or_else(|| RecError::StudentNotFound(student_id.to_string()))
    }

    /// Index of a course within row order.
    #[inline]
    pub fn course_index_of(&self, course_id: &str) -> Result<usize> {
        self.course_index
            .get(course_id)
            .copied()
            .ok_or_else(|| RecError::CourseNotFound(course_id.to_string()))
    }

    /// Stable course id at a row index, if the index is in range.
    #[inline]
    pub fn course_id_at(&self, index: usize) -> Option<&str> {
        self.courses.get(index).map(|course| course.id.as_str())
    }

    /// Map a course display name to its stable id.
    ///
    /// Interaction tables are keyed by course name; a name with no catalog
    /// entry yields `None` and the caller decides whether to skip it.
    #[inline]
    pub fn course_id_by_name(&self, name: &str) -> Option<&str> {
        self.course_name_index
            .get(name)
            .map(|&idx| self.courses[idx].id.as_str())
    }

    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    #[inline]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[inline]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

fn read_students(path: &Path) -> Result<Vec<Student>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open students file: {}", path.display()))?;

    let mut students = Vec::new();
    for row in reader.deserialize::<StudentRecord>() {
        let record =
            row.with_context(|| format!("Malformed student row in {}", path.display()))?;
        students.push(Student::try_from(record)?);
    }

    Ok(students)
}

fn read_courses(path: &Path) -> Result<Vec<Course>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open courses file: {}", path.display()))?;

    let mut courses = Vec::new();
    for row in reader.deserialize::<CourseRecord>() {
        let record = row.with_context(|| format!("Malformed course row in {}", path.display()))?;
        courses.push(Course::from(record));
    }

    Ok(courses)
}
