pub mod modules;
pub mod shared;

pub use modules::catalog::{
    application::CatalogService,
    domain::{DetailRecord, ListingItem, SearchAllResponse},
};
pub use shared::{AppError, AppResult, CatalogConfig};

use anyhow::Context;
use shared::domain::ContentKind;

const USAGE: &str = "usage:
  showcase popular <kind> [page]
  showcase trending <kind> [page]
  showcase search <kind> <query> [page]
  showcase detail <kind> <id>
  showcase search-all <query> [page]

kind: movie | tvshow | anime";

/// One runner invocation, parsed from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Popular { kind: ContentKind, page: u32 },
    Trending { kind: ContentKind, page: u32 },
    Search { kind: ContentKind, query: String, page: u32 },
    Detail { kind: ContentKind, id: u64 },
    SearchAll { query: String, page: u32 },
}

impl Command {
    pub fn parse(args: &[String]) -> AppResult<Self> {
        let arg = |index: usize| args.get(index).map(String::as_str);
        let page = |index: usize| -> AppResult<u32> {
            match arg(index) {
                Some(raw) => Ok(raw.parse()?),
                None => Ok(1),
            }
        };
        let kind = |index: usize| -> AppResult<ContentKind> {
            arg(index)
                .ok_or_else(|| AppError::InvalidInput("Missing content kind".to_string()))?
                .parse()
        };
        let text = |index: usize, what: &str| -> AppResult<String> {
            arg(index)
                .map(str::to_string)
                .ok_or_else(|| AppError::InvalidInput(format!("Missing {}", what)))
        };

        match arg(0) {
            Some("popular") => Ok(Command::Popular {
                kind: kind(1)?,
                page: page(2)?,
            }),
            Some("trending") => Ok(Command::Trending {
                kind: kind(1)?,
                page: page(2)?,
            }),
            Some("search") => Ok(Command::Search {
                kind: kind(1)?,
                query: text(2, "search query")?,
                page: page(3)?,
            }),
            Some("detail") => Ok(Command::Detail {
                kind: kind(1)?,
                id: text(2, "content id")?.parse()?,
            }),
            Some("search-all") => Ok(Command::SearchAll {
                query: text(1, "search query")?,
                page: page(2)?,
            }),
            Some(other) => Err(AppError::InvalidInput(format!(
                "Unknown command '{}'\n{}",
                other, USAGE
            ))),
            None => Err(AppError::InvalidInput(USAGE.to_string())),
        }
    }

    /// Execute against the service and render the result as pretty JSON
    pub async fn execute(&self, service: &CatalogService) -> AppResult<String> {
        let json = match self {
            Command::Popular { kind, page } => {
                serde_json::to_string_pretty(&service.list_popular(*kind, *page).await?)?
            }
            Command::Trending { kind, page } => {
                serde_json::to_string_pretty(&service.list_trending(*kind, *page).await?)?
            }
            Command::Search { kind, query, page } => {
                serde_json::to_string_pretty(&service.search(*kind, query, *page).await?)?
            }
            Command::Detail { kind, id } => {
                serde_json::to_string_pretty(&service.get_detail(*kind, *id).await?)?
            }
            Command::SearchAll { query, page } => {
                serde_json::to_string_pretty(&service.search_all(query, *page).await?)?
            }
        };
        Ok(json)
    }
}

/// Runner entry point: configuration, logging, one facade call, JSON on stdout
pub async fn run(args: Vec<String>) -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    shared::utils::init_logger();

    let command = Command::parse(&args)?;
    let config = CatalogConfig::from_env().context("Failed to load catalog configuration")?;
    let service = CatalogService::from_config(&config)?;

    log::info!("Running {:?}", command);
    let output = command.execute(&service).await?;
    println!("{}", output);
    Ok(())
}
