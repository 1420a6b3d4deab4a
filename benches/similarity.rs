use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use coursematch::catalog::{Catalog, Course, SkillLevel, Student};
use coursematch::recommend::LexicalRecommender;

const DOMAINS: &[&str] = &[
    "machine learning",
    "web development",
    "database systems",
    "computer networks",
    "operating systems",
    "computer graphics",
    "distributed systems",
    "information security",
];

fn synthetic_catalog(n_students: usize, n_courses: usize) -> Arc<Catalog> {
    let students = (0..n_students)
        .map(|i| Student {
            id: format!("s{}", i),
            interested_domain: DOMAINS[i % DOMAINS.len()].to_string(),
            future_career: format!("specialist in {}", DOMAINS[(i + 3) % DOMAINS.len()]),
            projects: format!("capstone project on {}", DOMAINS[(i + 1) % DOMAINS.len()]),
            experience: String::new(),
            certifications: String::new(),
            technical_skills: format!("tooling for {}", DOMAINS[(i + 2) % DOMAINS.len()]),
            python: SkillLevel::Average,
            sql: SkillLevel::Strong,
            java: SkillLevel::Weak,
        })
        .collect();

    let courses = (0..n_courses)
        .map(|i| Course {
            id: format!("c{}", i),
            name: format!("Course {} on {}", i, DOMAINS[i % DOMAINS.len()]),
            about: format!("foundations of {}", DOMAINS[(i + 1) % DOMAINS.len()]),
            description: format!(
                "practical work covering {} and {}",
                DOMAINS[i % DOMAINS.len()],
                DOMAINS[(i + 2) % DOMAINS.len()]
            ),
        })
        .collect();

    Arc::new(Catalog::new(students, courses).expect("catalog should build"))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let catalog = synthetic_catalog(200, 500);

    c.bench_function("fit", |b| {
        b.iter(|| LexicalRecommender::fit(black_box(Arc::clone(&catalog))))
    });

    let recommender = LexicalRecommender::fit(Arc::clone(&catalog)).expect("fit should succeed");
    c.bench_function("recommend_for_text", |b| {
        b.iter(|| {
            recommender.recommend_for_text(
                black_box("capstone experience in distributed systems and security"),
                black_box(10),
            )
        })
    });

    c.bench_function("similarity_matrix", |b| {
        b.iter(|| recommender.similarity_matrix())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
