use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schouw::source::{InMemorySubmissionSource, SubmissionSource};
use schouw::{ReportConfig, ReportGenerator, SubmissionId};
use std::path::PathBuf;
use std::sync::Arc;

/// Generate NEN2767 inspection reports.
#[derive(Parser, Debug)]
#[command(name = "schouw", version, about)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "SCHOUW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the PDF report and CSV export for one submission
    Generate {
        /// Submission id
        id: String,

        /// Read submissions from a JSON export instead of the database
        #[arg(long)]
        records: Option<PathBuf>,

        /// Directory the artifacts are written to
        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
        database_url: Option<String>,
    },

    /// Create the submissions table
    InitDb {
        #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = ReportConfig::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Command::Generate {
            id,
            records,
            output_dir,
            database_url,
        } => {
            if let Some(dir) = output_dir {
                config.storage.output_dir = dir;
            }
            generate(&config, SubmissionId::new(id), records, database_url).await
        }
        Command::InitDb { database_url } => init_db(&config, &database_url).await,
    }
}

async fn generate(
    config: &ReportConfig,
    id: SubmissionId,
    records: Option<PathBuf>,
    database_url: Option<String>,
) -> Result<()> {
    if let Some(path) = records {
        let source = InMemorySubmissionSource::from_json_file(&path)
            .with_context(|| format!("reading submissions from {}", path.display()))?;
        return run(config, Arc::new(source), &id).await;
    }

    let database_url = database_url
        .context("no --records file given and DATABASE_URL is not set")?;
    generate_from_database(config, &id, &database_url).await
}

#[cfg(feature = "postgres")]
async fn generate_from_database(
    config: &ReportConfig,
    id: &SubmissionId,
    database_url: &str,
) -> Result<()> {
    use schouw::source::PostgresSubmissionSource;

    let source = Arc::new(
        PostgresSubmissionSource::connect(database_url, config.database.max_connections).await?,
    );
    let result = run(config, source.clone(), id).await;
    source.close().await;
    result
}

#[cfg(not(feature = "postgres"))]
async fn generate_from_database(
    _config: &ReportConfig,
    _id: &SubmissionId,
    _database_url: &str,
) -> Result<()> {
    anyhow::bail!("built without the `postgres` feature; use --records")
}

async fn run(
    config: &ReportConfig,
    source: Arc<dyn SubmissionSource>,
    id: &SubmissionId,
) -> Result<()> {
    let generator = ReportGenerator::new(source, config);
    let artifacts = generator.generate_report(id).await?;

    println!("{}", serde_json::to_string_pretty(&artifacts)?);
    Ok(())
}

#[cfg(feature = "postgres")]
async fn init_db(config: &ReportConfig, database_url: &str) -> Result<()> {
    use schouw::source::PostgresSubmissionSource;

    let source =
        PostgresSubmissionSource::connect(database_url, config.database.max_connections).await?;
    source.health_check().await?;
    source.ensure_schema().await?;
    source.close().await;
    Ok(())
}

#[cfg(not(feature = "postgres"))]
async fn init_db(_config: &ReportConfig, _database_url: &str) -> Result<()> {
    anyhow::bail!("built without the `postgres` feature")
}
