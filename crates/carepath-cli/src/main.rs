use std::path::PathBuf;

use carepath_cli::config::{self, LogFormat};
use carepath_cli::logging;
use carepath_cli::repository::FileRepository;
use carepath_core::models::questionnaire::ScoreMap;
use carepath_instruments::scoring::{InstrumentItem, ScoringStrategy};
use carepath_instruments::{Questionnaire, all_questionnaires, find_questionnaire};
use carepath_triage::Assessment;
use clap::{Parser, Subcommand};
use eyre::Result;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "carepath")]
#[command(about = "Score behavioral-health screening answers and resolve a triage disposition")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an exported assessment and print its triage summary
    Evaluate { file: PathBuf },
    /// Report answers in an exported assessment that do not fit their question
    Validate { file: PathBuf },
    /// List the questions to present, given the answers recorded so far
    Present { file: PathBuf },
    /// Describe the questionnaire catalog
    Catalog {
        /// Show a single questionnaire (e.g. "phq9")
        #[arg(long)]
        questionnaire: Option<String>,
    },
    /// Write the current config (with defaults filled in) back to disk
    InitConfig,
}

#[derive(Serialize)]
struct QuestionnaireDetail {
    id: String,
    name: String,
    clinical: bool,
    mandatory: bool,
    strategy: Option<ScoringStrategy>,
    items: Vec<&'static InstrumentItem>,
}

impl QuestionnaireDetail {
    fn from_questionnaire(q: &dyn Questionnaire) -> Self {
        Self {
            id: q.id().to_string(),
            name: q.name().to_string(),
            clinical: q.is_clinical(),
            mandatory: q.is_mandatory(),
            strategy: q.strategy(),
            items: q.items().to_vec(),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    logging::init(cli.log_format.unwrap_or(config.log_format), &config.log_filter)?;

    let pretty = cli.pretty || config.pretty_output;

    match cli.command {
        Commands::Evaluate { file } => {
            let assessment = open_assessment(&file)?;
            for error in assessment.validation_errors() {
                tracing::warn!(link_id = %error.link_id, "{error}");
            }
            print_json(&assessment.summary(), pretty)?;
        }
        Commands::Validate { file } => {
            let assessment = open_assessment(&file)?;
            print_json(&assessment.validation_errors(), pretty)?;
        }
        Commands::Present { file } => {
            let assessment = open_assessment(&file)?;
            let order = carepath_instruments::presentation_order(
                assessment.responses(),
                assessment.patient(),
                &ScoreMap::new(),
            );
            print_json(&order, pretty)?;
        }
        Commands::Catalog { questionnaire } => match questionnaire {
            Some(id) => {
                let q = find_questionnaire(&id)?;
                print_json(&QuestionnaireDetail::from_questionnaire(q.as_ref()), pretty)?;
            }
            None => {
                let details: Vec<_> = all_questionnaires()
                    .iter()
                    .map(|q| QuestionnaireDetail::from_questionnaire(q.as_ref()))
                    .collect();
                print_json(&details, pretty)?;
            }
        },
        Commands::InitConfig => {
            config::save_config(&config, &config_path)?;
        }
    }

    Ok(())
}

fn open_assessment(file: &std::path::Path) -> Result<Assessment> {
    let repository = FileRepository::open(file)?;
    let assessment = Assessment::load(&repository, &repository, repository.assessment_id())?;
    Ok(assessment)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
