//! quizdeck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizdeck", version, about = "Timed multiple-choice quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog subjects
    Subjects {
        /// Catalog file or directory
        #[arg(long, default_value = "./catalog")]
        catalog: PathBuf,
    },

    /// List quizzes, optionally filtered
    Quizzes {
        /// Catalog file or directory
        #[arg(long, default_value = "./catalog")]
        catalog: PathBuf,

        /// Only quizzes belonging to this subject id
        #[arg(long)]
        subject: Option<u32>,

        /// Substring search over titles and descriptions
        #[arg(long)]
        search: Option<String>,
    },

    /// Take a quiz
    Take {
        /// Catalog file or directory
        #[arg(long, default_value = "./catalog")]
        catalog: PathBuf,

        /// Quiz id to take
        #[arg(long)]
        quiz: u32,

        /// Scripted answers as comma-separated option indexes
        /// (e.g. "1,0,2"); omit for an interactive timed session
        #[arg(long)]
        answers: Option<String>,

        /// User id; results are only saved when one is given
        #[arg(long)]
        user: Option<String>,

        /// Display name for the user
        #[arg(long)]
        user_name: Option<String>,

        /// History file path
        #[arg(long, default_value = "./quiz-history.json")]
        store: PathBuf,
    },

    /// Show past results
    History {
        /// Catalog file or directory
        #[arg(long, default_value = "./catalog")]
        catalog: PathBuf,

        /// History file path
        #[arg(long, default_value = "./quiz-history.json")]
        store: PathBuf,

        /// Only results for this user id
        #[arg(long)]
        user: Option<String>,

        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one result in full, with per-question review
    Show {
        /// Catalog file or directory
        #[arg(long, default_value = "./catalog")]
        catalog: PathBuf,

        /// History file path
        #[arg(long, default_value = "./quiz-history.json")]
        store: PathBuf,

        /// Result id
        #[arg(long)]
        result: uuid::Uuid,
    },

    /// Show aggregate statistics
    Stats {
        /// Catalog file or directory
        #[arg(long, default_value = "./catalog")]
        catalog: PathBuf,

        /// History file path
        #[arg(long, default_value = "./quiz-history.json")]
        store: PathBuf,

        /// Only results for this user id
        #[arg(long)]
        user: Option<String>,
    },

    /// Validate catalog TOML files
    Validate {
        /// Catalog file or directory
        #[arg(long, default_value = "./catalog")]
        catalog: PathBuf,
    },

    /// Erase all persisted history
    Clear {
        /// History file path
        #[arg(long, default_value = "./quiz-history.json")]
        store: PathBuf,

        /// Confirm the erase
        #[arg(long)]
        yes: bool,
    },

    /// Create a starter catalog
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdeck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Subjects { catalog } => commands::subjects::execute(catalog),
        Commands::Quizzes {
            catalog,
            subject,
            search,
        } => commands::quizzes::execute(catalog, subject, search),
        Commands::Take {
            catalog,
            quiz,
            answers,
            user,
            user_name,
            store,
        } => commands::take::execute(catalog, quiz, answers, user, user_name, store).await,
        Commands::History {
            catalog,
            store,
            user,
            limit,
        } => commands::history::execute(catalog, store, user, limit).await,
        Commands::Show {
            catalog,
            store,
            result,
        } => commands::show::execute(catalog, store, result).await,
        Commands::Stats {
            catalog,
            store,
            user,
        } => commands::stats::execute(catalog, store, user).await,
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Clear { store, yes } => commands::clear::execute(store, yes).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
