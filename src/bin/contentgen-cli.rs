use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;

use contentgen::client::GatewayClient;
use contentgen::domain::category::ContentCategory;
use contentgen::domain::types::EntryId;
use contentgen::history::HistoryCache;
use contentgen::models::config::ProviderConfig;
use contentgen::provider::{GeminiProvider, ProviderCredentials};
use contentgen::repository::FileHistoryRepository;
use contentgen::studio::{DEFAULT_EXPORT_FILE, Studio};

#[derive(Parser)]
#[command(name = "contentgen-cli", about = "Generate content through the gateway")]
struct Cli {
    /// Base URL of the generation gateway.
    #[arg(long, env = "CONTENTGEN_GATEWAY_URL", default_value = "http://127.0.0.1:8080")]
    gateway: String,
    /// History file. Defaults to the platform data directory.
    #[arg(long, env = "CONTENTGEN_HISTORY")]
    history: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate content for a topic.
    Generate {
        #[arg(short, long, default_value = "Social Media Caption")]
        category: String,
        /// Also write the result to a file.
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
        output: Option<PathBuf>,
        #[arg(required = true)]
        prompt: Vec<String>,
    },
    /// List recent generations, newest first.
    History,
    /// Print a past generation again.
    Show { id: i64 },
    /// List the categories offered by the gateway.
    Categories,
    /// List provider models that can generate content.
    Models,
}

fn history_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("contentgen")
            .join("history.json")
    })
}

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let history = HistoryCache::load(FileHistoryRepository::new(history_path(cli.history)));
    let client = match GatewayClient::new(cli.gateway) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Generate {
            category,
            output,
            prompt,
        } => {
            let mut studio = Studio::new(client, history);
            studio.category = ContentCategory::from_label(&category);
            studio.prompt = prompt.join(" ");

            if !studio.submit().await {
                eprintln!("{}", studio.error().unwrap_or("Generation failed."));
                return ExitCode::FAILURE;
            }
            println!("{}", studio.result().unwrap_or_default());

            if let Some(path) = output {
                if let Err(e) = studio.export(&path) {
                    eprintln!("Failed to write {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::History => {
            for entry in history.entries() {
                println!(
                    "{}\t{}\t{}\t{}",
                    entry.id, entry.created_date, entry.category, entry.prompt
                );
            }
        }
        Command::Show { id } => {
            let Some(entry) = EntryId::new(id).ok().and_then(|id| history.select(id)) else {
                eprintln!("No history entry with id {id}");
                return ExitCode::FAILURE;
            };
            println!("{}", entry.result);
        }
        Command::Categories => match client.categories().await {
            Ok(labels) => labels.iter().for_each(|label| println!("{label}")),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        Command::Models => {
            let Some(api_key) = ProviderCredentials::from_env().api_key else {
                eprintln!("{} is not set", ProviderCredentials::ENV_VAR);
                return ExitCode::FAILURE;
            };
            let provider = match GeminiProvider::new(&ProviderConfig::default()) {
                Ok(provider) => provider,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            match provider.list_models(&api_key).await {
                Ok(models) => models.iter().for_each(|name| println!("{name}")),
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
