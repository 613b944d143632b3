use std::path::PathBuf;

use carescore_cli::commands::{self, OutputFormat, Session};
use carescore_cli::config;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carescore")]
#[command(about = "Clinical risk scoring and care-plan generation")]
struct Cli {
    /// Facility name printed on reports, overriding the config file
    #[arg(long, global = true, env = "CARESCORE_FACILITY")]
    facility: Option<String>,

    /// Assessment store (backup-format JSON)
    #[arg(long, global = true, env = "CARESCORE_STORE")]
    store: Option<PathBuf>,

    /// Config file location
    #[arg(long, global = true, env = "CARESCORE_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a Braden assessment and generate a pressure-injury care plan
    Braden {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        #[arg(long)]
        output: Option<PathBuf>,
        /// Save the assessment to the store and include the patient's trend
        #[arg(long)]
        record: bool,
    },
    /// Score a Caprini VTE assessment and recommend prophylaxis
    Caprini {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Score Wells DVT criteria and choose a diagnostic pathway
    Wells {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Analyze a Braden assessment history (JSON array)
    Trend {
        #[arg(long)]
        history: PathBuf,
    },
    /// List instruments and their risk tiers
    Instruments,
    /// Export or import the assessment store
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum BackupAction {
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Import {
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    SetFacility { name: String },
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let store_path = match cli.store {
        Some(path) => path,
        None => config::default_store_path()?,
    };
    let loaded = config::load_or_default(&config_path)?;
    let session = Session {
        facility_name: config::effective_facility(&loaded, cli.facility.as_deref()),
        config: loaded,
        config_path,
        store_path,
    };

    match cli.command {
        Commands::Braden { input, format, output, record } => {
            commands::braden(&session, &input, format, output.as_deref(), record)
        }
        Commands::Caprini { input, format, output } => {
            commands::caprini(&session, &input, format, output.as_deref())
        }
        Commands::Wells { input, format, output } => {
            commands::wells(&session, &input, format, output.as_deref())
        }
        Commands::Trend { history } => commands::trend(&history),
        Commands::Instruments => commands::instruments(),
        Commands::Backup { action } => match action {
            BackupAction::Export { output } => commands::backup_export(&session, output.as_deref()),
            BackupAction::Import { input } => commands::backup_import(&session, &input),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&session),
            ConfigAction::SetFacility { name } => commands::config_set_facility(&session, &name),
        },
    }
}
