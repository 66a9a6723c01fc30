use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use jobscout_core::catalog::JobType;
use jobscout_core::session::SessionPatch;
use jobscout_infrastructure::paths::JobScoutPaths;

mod commands;
mod context;
mod logging;

use commands::session::RegisterArgs;
use context::AppContext;

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(about = "JobScout CLI - browse jobs and manage your JobScout session", long_about = None)]
struct Cli {
    /// Use this directory instead of the platform config directory
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and log in
    Register(RegisterCommand),
    /// Forget the current session
    Logout,
    /// Show the current session
    Whoami {
        #[arg(long)]
        json: bool,
    },
    /// Change profile fields of the current session
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Search job postings
    Jobs {
        /// Matched against title, description, requirements and company
        #[arg(short, long)]
        query: Option<String>,
        /// presencial, hibrido, remoto or estagio
        #[arg(short = 't', long = "type")]
        job_type: Option<JobType>,
    },
    /// Apply to a job posting
    Apply { job_id: i64 },
    /// List your applications
    Applications,
    /// List your skills
    Skills,
    /// List postings with their applicants (administrators only)
    AdminApplications,
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
struct RegisterCommand {
    email: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    cpf: String,
    /// Read from stdin when omitted
    #[arg(long)]
    password: Option<String>,
    /// Create a company administrator account
    #[arg(long)]
    admin: bool,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    work_area: Option<String>,
    #[arg(long)]
    education_level: Option<String>,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Update the given fields, keeping the rest
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        cpf: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        work_area: Option<String>,
        #[arg(long)]
        education_level: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = JobScoutPaths::new(cli.config_dir.as_deref());
    let logs_dir = paths.logs_dir().context("Failed to resolve log directory")?;
    let _log_guard = logging::init(&logs_dir, cli.verbose)?;

    let ctx = AppContext::build(&paths, cli.ephemeral)?;

    match cli.command {
        Commands::Login { email, password } => commands::session::login(&ctx, email, password).await?,
        Commands::Register(cmd) => {
            let args = RegisterArgs {
                email: cmd.email,
                password: cmd.password,
                name: cmd.name,
                cpf: cmd.cpf,
                admin: cmd.admin,
                phone: cmd.phone,
                work_area: cmd.work_area,
                education_level: cmd.education_level,
            };
            commands::session::register(&ctx, args).await?
        }
        Commands::Logout => commands::session::logout(&ctx)?,
        Commands::Whoami { json } => commands::session::whoami(&ctx, json)?,
        Commands::Profile { action } => match action {
            ProfileAction::Update {
                name,
                email,
                cpf,
                phone,
                work_area,
                education_level,
            } => {
                let patch = SessionPatch {
                    name,
                    email,
                    cpf,
                    phone,
                    work_area,
                    education_level,
                };
                commands::session::update_profile(&ctx, patch)?
            }
        },
        Commands::Jobs { query, job_type } => commands::jobs::search(&ctx, query, job_type).await?,
        Commands::Apply { job_id } => commands::jobs::apply(&ctx, job_id).await?,
        Commands::Applications => commands::jobs::applications(&ctx).await?,
        Commands::Skills => commands::jobs::skills(&ctx).await?,
        Commands::AdminApplications => commands::jobs::admin_applications(&ctx).await?,
        Commands::Config => println!("{}", serde_json::to_string_pretty(&ctx.config)?),
    }

    Ok(())
}
