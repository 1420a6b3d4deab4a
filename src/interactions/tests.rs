use std::fs;

use tempfile::TempDir;

use super::*;

fn sample_matrix() -> InteractionMatrix {
    InteractionMatrix::new(
        vec!["s1".to_string(), "s2".to_string(), "s3".to_string()],
        vec![
            "Intro to ML".to_string(),
            "Web Basics".to_string(),
            "Databases".to_string(),
        ],
        vec![
            vec![5.0, 0.0, 3.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ],
    )
    .expect("matrix should build")
}

#[test]
fn rated_set_honors_positive_threshold() {
    let matrix = sample_matrix();

    let s1 = matrix.rated_set("s1").expect("student should exist");
    assert_eq!(s1.len(), 2);
    assert!(s1.contains("Intro to ML"));
    assert!(s1.contains("Databases"));
    assert!(!s1.contains("Web Basics"));

    let s3 = matrix.rated_set("s3").expect("student should exist");
    assert!(s3.is_empty());
}

#[test]
fn rated_courses_preserve_column_order() {
    let matrix = sample_matrix();
    let courses = matrix.rated_courses("s1").expect("student should exist");
    assert_eq!(courses, vec!["Intro to ML", "Databases"]);
}

#[test]
fn unknown_student_fails() {
    let matrix = sample_matrix();
    assert!(matrix.rated_set("ghost").is_err());
    assert!(!matrix.contains_student("ghost"));
    assert!(matrix.contains_student("s1"));
}

#[test]
fn ragged_rows_rejected() {
    let result = InteractionMatrix::new(
        vec!["s1".to_string()],
        vec!["a".to_string(), "b".to_string()],
        vec![vec![1.0]],
    );
    assert!(result.is_err());
}

#[test]
fn negative_weights_rejected() {
    let result = InteractionMatrix::new(
        vec!["s1".to_string()],
        vec!["a".to_string()],
        vec![vec![-1.0]],
    );
    assert!(result.is_err());
}

#[test]
fn duplicate_student_rows_rejected() {
    let result = InteractionMatrix::new(
        vec!["s1".to_string(), "s1".to_string()],
        vec!["a".to_string()],
        vec![vec![1.0], vec![0.0]],
    );
    assert!(result.is_err());
}

#[test]
fn load_wide_csv() {
    let temp_dir = TempDir::new().expect("can create temp dir");
    let path = temp_dir.path().join("ratings.csv");
    fs::write(
        &path,
        "student_id,Intro to ML,Web Basics,Databases\n\
         s1,5,,3\n\
         s2,0,1,0\n",
    )
    .expect("can write ratings csv");

    let matrix = InteractionMatrix::load(&path).expect("load should succeed");

    assert_eq!(matrix.student_count(), 2);
    assert_eq!(matrix.course_names().len(), 3);

    // Empty cells read as zero
    let s1 = matrix.rated_set("s1").expect("student should exist");
    assert_eq!(s1.len(), 2);
    assert!(!s1.contains("Web Basics"));
}

#[test]
fn load_rejects_non_numeric_cell() {
    let temp_dir = TempDir::new().expect("can create temp dir");
    let path = temp_dir.path().join("ratings.csv");
    fs::write(&path, "student_id,a\ns1,lots\n").expect("can write ratings csv");

    assert!(InteractionMatrix::load(&path).is_err());
}
