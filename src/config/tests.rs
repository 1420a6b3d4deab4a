use tempfile::TempDir;

use super::*;

#[test]
fn defaults_when_config_file_absent() {
    let temp_dir = TempDir::new().expect("can create temp dir");

    let config = Config::load(temp_dir.path()).expect("load should succeed");

    assert_eq!(config.recommend.top_n, 3);
    assert_eq!(config.recommend.neighborhood_size, 10);
    assert_eq!(config.data.students_path, PathBuf::from("students.csv"));
    assert_eq!(config.get_base_dir(), temp_dir.path());
}

#[test]
fn save_and_reload_round_trip() {
    let temp_dir = TempDir::new().expect("can create temp dir");

    let config = Config {
        data: DataConfig {
            students_path: PathBuf::from("data/students.csv"),
            courses_path: PathBuf::from("data/courses.csv"),
            ratings_path: PathBuf::from("data/ratings.csv"),
        },
        recommend: RecommendConfig {
            top_n: 5,
            neighborhood_size: 25,
        },
        base_dir: temp_dir.path().to_path_buf(),
    };
    config.save().expect("save should succeed");

    let reloaded = Config::load(temp_dir.path()).expect("load should succeed");
    assert_eq!(reloaded, config);
}

#[test]
fn relative_paths_resolve_against_base_dir() {
    let temp_dir = TempDir::new().expect("can create temp dir");
    let config = Config::load(temp_dir.path()).expect("load should succeed");

    assert_eq!(config.students_path(), temp_dir.path().join("students.csv"));
    assert_eq!(config.ratings_path(), temp_dir.path().join("ratings.csv"));
}

#[test]
fn absolute_paths_pass_through() {
    let temp_dir = TempDir::new().expect("can create temp dir");
    let absolute = temp_dir.path().join("elsewhere").join("students.csv");

    let config = Config {
        data: DataConfig {
            students_path: absolute.clone(),
            ..DataConfig::default()
        },
        recommend: RecommendConfig::default(),
        base_dir: temp_dir.path().to_path_buf(),
    };

    assert_eq!(config.students_path(), absolute);
}

#[test]
fn validation_bounds() {
    let valid = RecommendConfig {
        top_n: 1,
        neighborhood_size: 1000,
    };
    assert!(valid.validate().is_ok());

    let zero_top_n = RecommendConfig {
        top_n: 0,
        ..RecommendConfig::default()
    };
    assert!(matches!(
        zero_top_n.validate(),
        Err(ConfigError::InvalidTopN(0))
    ));

    let huge_neighborhood = RecommendConfig {
        neighborhood_size: 1001,
        ..RecommendConfig::default()
    };
    assert!(matches!(
        huge_neighborhood.validate(),
        Err(ConfigError::InvalidNeighborhoodSize(1001))
    ));
}

#[test]
fn invalid_config_file_fails_to_load() {
    let temp_dir = TempDir::new().expect("can create temp dir");
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "[recommend]\ntop_n = 0\n",
    )
    .expect("can write config file");

    assert!(Config::load(temp_dir.path()).is_err());
}
