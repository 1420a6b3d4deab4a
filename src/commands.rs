use std::sync::Arc;

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::interactions::InteractionMatrix;
use crate::recommend::{CollaborativeRecommender, LexicalRecommender};

/// Recommend courses for a known student or an ad-hoc profile text
#[inline]
pub fn recommend(
    config: &Config,
    student: Option<&str>,
    profile: Option<&str>,
    top_n: Option<usize>,
    json: bool,
) -> Result<()> {
    let top_n = top_n.unwrap_or(config.recommend.top_n);
    let catalog = load_catalog(config)?;
    let recommender = LexicalRecommender::fit(Arc::clone(&catalog))
        .context("Failed to fit the lexical recommender")?;

    let course_ids = match (student, profile) {
        (Some(student_id), None) => {
            info!("Recommending for student {}", student_id);
            recommender.recommend_for_student(student_id, top_n)?
        }
        (None, Some(text)) => {
            info!("Recommending for ad-hoc profile text");
            recommender.recommend_for_text(text, top_n)?
        }
        _ => bail!("Provide exactly one of --student or --profile"),
    };

    print_courses(&catalog, &course_ids, json)
}

/// Suggest courses for a new student based on the courses they already
/// rated
#[inline]
pub fn suggest(
    config: &Config,
    rated: &[String],
    top_n: Option<usize>,
    neighborhood: Option<usize>,
    json: bool,
) -> Result<()> {
    let top_n = top_n.unwrap_or(config.recommend.top_n);
    let neighborhood = neighborhood.unwrap_or(config.recommend.neighborhood_size);

    let catalog = load_catalog(config)?;
    let interactions = InteractionMatrix::load(config.ratings_path())?;
    let recommender = CollaborativeRecommender::new(Arc::clone(&catalog), interactions);

    info!(
        "Suggesting from {} rated courses over a neighborhood of {}",
        rated.len(),
        neighborhood
    );
    let course_ids = recommender.recommend_for_new_student(rated, top_n, neighborhood);

    print_courses(&catalog, &course_ids, json)
}

/// List the students most similar to the given student
#[inline]
pub fn similar(config: &Config, student_id: &str, k: Option<usize>) -> Result<()> {
    let k = k.unwrap_or(config.recommend.neighborhood_size);

    let catalog = load_catalog(config)?;
    let interactions = InteractionMatrix::load(config.ratings_path())?;
    let recommender = CollaborativeRecommender::new(catalog, interactions);

    let neighbors = recommender.similar_students(student_id, k)?;

    if neighbors.is_empty() {
        println!("No other students share rated courses with {}.", student_id);
        return Ok(());
    }

    println!("Students most similar to {}:", student_id);
    for (id, score) in &neighbors {
        println!("  {}  (similarity {:.3})", id, score);
    }

    Ok(())
}

/// Show a summary of the loaded catalog
#[inline]
pub fn show_catalog(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;

    println!(
        "Catalog: {} students, {} courses",
        catalog.student_count(),
        catalog.course_count()
    );
    println!();

    for course in catalog.courses().iter().take(10) {
        println!("  {}  {}", course.id, course.name);
    }
    if catalog.course_count() > 10 {
        println!("  ... and {} more", catalog.course_count() - 10);
    }

    Ok(())
}

/// Show the effective configuration
#[inline]
pub fn show_config(config: &Config) -> Result<()> {
    println!("Base directory: {}", config.get_base_dir().display());
    println!("Students: {}", config.students_path().display());
    println!("Courses: {}", config.courses_path().display());
    println!("Ratings: {}", config.ratings_path().display());
    println!(
        "Defaults: top_n = {}, neighborhood_size = {}",
        config.recommend.top_n, config.recommend.neighborhood_size
    );

    Ok(())
}

fn load_catalog(config: &Config) -> Result<Arc<Catalog>> {
    let catalog = Catalog::load(config.students_path(), config.courses_path())
        .context("Failed to load the catalog")?;
    Ok(Arc::new(catalog))
}

fn print_courses(catalog: &Catalog, course_ids: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(course_ids)?);
        return Ok(());
    }

    if course_ids.is_empty() {
        println!("No recommendations available.");
        return Ok(());
    }

    println!("Recommended courses: {}", course_ids.iter().join(", "));
    for id in course_ids {
        let course = catalog.course(id)?;
        println!("  {}  {}", course.id, course.name);
    }

    Ok(())
}
