//! figshare - command-line access to the Figshare v2 API
//!
//! Every subcommand maps to one API call:
//! - create and update articles in your account
//! - read article details and versions
//! - list the files of an article and read file details

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figshare::config::Config;
use figshare::{ApiResponse, ArticleUpdate, FigshareClient};
use serde_json::Value as JsonValue;
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// figshare - Figshare v2 API client
#[derive(Parser, Debug)]
#[command(name = "figshare")]
#[command(about = "Create, update and inspect Figshare articles")]
#[command(version)]
struct Args {
    /// Figshare personal token
    #[arg(short, long, env = "FIGSHARE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Use account-scoped endpoints (requires a token)
    #[arg(short, long, conflicts_with = "public")]
    private: bool,

    /// Use public endpoints, even if the config file says private
    #[arg(long)]
    public: bool,

    /// API root, defaults to https://api.figshare.com/v2
    #[arg(long, env = "FIGSHARE_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    /// Visibility chosen on the command line, if any
    fn visibility(&self) -> Option<bool> {
        match (self.private, self.public) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new article and print its id
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// figure, media, dataset, fileset, poster, paper, presentation, thesis, code or metadata
        #[arg(long, default_value = "dataset")]
        defined_type: String,

        #[arg(long = "tag")]
        tags: Vec<String>,

        #[arg(long = "category")]
        categories: Vec<u64>,
    },

    /// Update an article with key=value attributes
    Update {
        article_id: u64,

        /// Attribute to set, e.g. title=Results or tags='["a","b"]'
        #[arg(long = "set", value_parser = parse_attribute)]
        attributes: Vec<(String, JsonValue)>,
    },

    /// Show the details of an article
    Details {
        article_id: u64,

        #[arg(long)]
        version: Option<u32>,
    },

    /// List the published versions of an article
    Versions { article_id: u64 },

    /// List the files of an article
    Files {
        article_id: u64,

        #[arg(long)]
        version: Option<u32>,
    },

    /// Show the details of a file
    File { article_id: u64, file_id: u64 },

    /// Store the given token and visibility in the config file
    SaveConfig,
}

/// Parse `key=value`, reading the value as JSON and falling back to a string
fn parse_attribute(raw: &str) -> std::result::Result<(String, JsonValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let value =
        serde_json::from_str(value).unwrap_or_else(|_| JsonValue::String(value.to_string()));
    Ok((key.trim().to_string(), value))
}

fn init_tracing() {
    // RUST_LOG controls verbosity; request failures are logged at error level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let visibility = args.visibility();
    let config = Config::load()?.merge(args.token, visibility, args.base_url);

    if let Command::SaveConfig = args.command {
        config.save()?;
        eprintln!("Saved {}", Config::config_path()?.display());
        return Ok(());
    }

    let client =
        FigshareClient::new(config.client_config()).context("Failed to create HTTP client")?;
    run(&client, args.command).await
}

async fn run(client: &FigshareClient, command: Command) -> Result<()> {
    let response = match command {
        Command::Create {
            title,
            description,
            defined_type,
            tags,
            categories,
        } => {
            let id = client
                .create_article(title, description, defined_type, tags, categories)
                .await
                .context("Failed to create article")?;
            match id {
                Some(id) => println!("{}", id),
                None => anyhow::bail!("Figshare reported an error while creating the article"),
            }
            return Ok(());
        }
        Command::Update {
            article_id,
            attributes,
        } => {
            let update = ArticleUpdate::from_attributes(attributes)?;
            if update.is_empty() {
                eprintln!("No updatable attributes given; sending an empty update");
            }
            client
                .update_article(article_id, &update)
                .await
                .with_context(|| format!("Failed to update article {}", article_id))?
        }
        Command::Details {
            article_id,
            version,
        } => client
            .get_article_details(article_id, version)
            .await
            .with_context(|| format!("Failed to get article {}", article_id))?,
        Command::Versions { article_id } => client
            .list_article_versions(article_id)
            .await
            .with_context(|| format!("Failed to list versions of article {}", article_id))?,
        Command::Files {
            article_id,
            version,
        } => client
            .list_files(article_id, version)
            .await
            .with_context(|| format!("Failed to list files of article {}", article_id))?,
        Command::File {
            article_id,
            file_id,
        } => client
            .get_file_details(article_id, file_id)
            .await
            .with_context(|| format!("Failed to get file {} of article {}", file_id, article_id))?,
        Command::SaveConfig => return Ok(()),
    };

    print_response(&response)
}

fn print_response(response: &ApiResponse) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match response {
        ApiResponse::Json(json) => writeln!(stdout, "{}", serde_json::to_string_pretty(json)?)?,
        ApiResponse::Raw(bytes) => stdout.write_all(bytes)?,
    }
    Ok(())
}
