use std::path::PathBuf;

use clap::{Parser, Subcommand};
use coursematch::Result;
use coursematch::commands::{recommend, show_catalog, show_config, similar, suggest};
use coursematch::config::{Config, get_config_dir};

#[derive(Parser)]
#[command(name = "coursematch")]
#[command(about = "Recommends learning resources from student profiles and course ratings")]
#[command(version)]
struct Cli {
    /// Override the configuration directory
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend courses matching a student profile
    Recommend {
        /// Student id whose stored profile is the query
        #[arg(long, conflicts_with = "profile")]
        student: Option<String>,
        /// Ad-hoc profile text to use as the query
        #[arg(long)]
        profile: Option<String>,
        /// Number of courses to return
        #[arg(long)]
        top_n: Option<usize>,
        /// Print course ids as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggest courses for a new student from the courses they rated
    Suggest {
        /// Course names the student has already rated
        #[arg(long, required = true, value_delimiter = ',')]
        rated: Vec<String>,
        /// Number of courses to return
        #[arg(long)]
        top_n: Option<usize>,
        /// Number of similar students to draw from
        #[arg(long)]
        neighborhood: Option<usize>,
        /// Print course ids as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the students most similar to a student
    Similar {
        /// Student id to find neighbors for
        student: String,
        /// Number of neighbors to list
        #[arg(short, long)]
        k: Option<usize>,
    },
    /// Show a summary of the loaded catalog
    Catalog,
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => get_config_dir().map_err(anyhow::Error::from)?,
    };
    let config = Config::load(&config_dir)?;

    match cli.command {
        Commands::Recommend {
            student,
            profile,
            top_n,
            json,
        } => {
            recommend(&config, student.as_deref(), profile.as_deref(), top_n, json)?;
        }
        Commands::Suggest {
            rated,
            top_n,
            neighborhood,
            json,
        } => {
            suggest(&config, &rated, top_n, neighborhood, json)?;
        }
        Commands::Similar { student, k } => {
            similar(&config, &student, k)?;
        }
        Commands::Catalog => {
            show_catalog(&config)?;
        }
        Commands::Config => {
            show_config(&config)?;
        }
    }

    Ok(())
}
