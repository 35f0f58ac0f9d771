//! Projects Hub CLI - admin account and project management.
//!
//! # Usage
//!
//! ```bash
//! # Show whether the admin account exists
//! hub-cli admin status
//!
//! # Create the admin account (password from HUB_ADMIN_PASSWORD or stdin)
//! echo 's3cret!' | hub-cli admin create -u alice -e alice@example.com
//!
//! # Manage projects
//! hub-cli projects list
//! hub-cli projects add --name Hub --description "This site" --icon code --link https://example.com
//! hub-cli projects remove project-1718000000000
//! ```
//!
//! # Environment Variables
//!
//! - `HUB_DATA_DIR` - Data directory (overridden by `--data-dir`, default: data)
//! - `HUB_ADMIN_PASSWORD` - Password for `admin create` / `admin verify`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use projects_hub_core::{ProjectId, ProjectInput};

mod commands;

#[derive(Parser)]
#[command(name = "hub-cli")]
#[command(author, version, about = "Projects Hub CLI tools")]
struct Cli {
    /// Data directory holding admin.json and projects.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the admin account
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Show whether the admin account exists
    Status,
    /// Create the admin account (first-time setup)
    Create {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Admin email address
        #[arg(short, long)]
        email: String,
    },
    /// Check a password against the stored account
    Verify {
        /// Admin username
        #[arg(short, long)]
        username: String,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List projects in display order
    List,
    /// Add a project
    Add(ProjectFields),
    /// Replace a project's fields
    Update {
        /// Project id
        id: String,

        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Delete a project
    Remove {
        /// Project id
        id: String,
    },
}

#[derive(Args)]
struct ProjectFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    icon: String,
    #[arg(long)]
    link: String,
}

impl From<ProjectFields> for ProjectInput {
    fn from(fields: ProjectFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            icon: fields.icon,
            link: fields.link,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let data_dir = cli
        .data_dir
        .or_else(|| std::env::var_os("HUB_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"));

    match cli.command {
        Commands::Admin { action } => match action {
            AdminAction::Status => commands::admin::status(&data_dir).await,
            AdminAction::Create { username, email } => {
                let password = commands::admin::read_password().await?;
                commands::admin::create(&data_dir, &username, &email, password).await?;
            }
            AdminAction::Verify { username } => {
                let password = commands::admin::read_password().await?;
                commands::admin::verify(&data_dir, &username, &password).await?;
            }
        },
        Commands::Projects { action } => match action {
            ProjectAction::List => commands::projects::list(&data_dir).await,
            ProjectAction::Add(fields) => {
                commands::projects::add(&data_dir, fields.into()).await?;
            }
            ProjectAction::Update { id, fields } => {
                commands::projects::update(&data_dir, &ProjectId::from(id), fields.into()).await?;
            }
            ProjectAction::Remove { id } => {
                commands::projects::remove(&data_dir, &ProjectId::from(id)).await?;
            }
        },
    }
    Ok(())
}
