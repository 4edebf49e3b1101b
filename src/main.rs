use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tokio::task::JoinHandle;

use recipe_sync::config::Config;
use recipe_sync::fetch::{FetchClient, HttpFetchClient};
use recipe_sync::item::Item;
use recipe_sync::logging::init_tracing;
use recipe_sync::repository::ItemRepository;
use recipe_sync::ui::ListViewModel;

#[derive(Parser, Debug)]
#[command(name = "recipe-sync", version, about = "Browse and search the recipe collection")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the first page, then `--pages` more
    List {
        #[arg(long, default_value_t = 0)]
        pages: usize,
    },
    /// Search recipes; an empty query lists instead
    Search { query: String },
    /// Print one recipe from the first page in detail
    Show { id: u64 },
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let client = HttpFetchClient::new(&config.api).context("Failed to build HTTP client")?;
    let repository = Arc::new(ItemRepository::new(client, config.paging));
    let view_model = ListViewModel::new(repository);

    match cli.command {
        Command::List { pages } => {
            settle(&view_model, view_model.reload()).await?;
            for _ in 0..pages {
                settle(&view_model, view_model.load_more()).await?;
            }
            print_list(&view_model.snapshot().items);
        }
        Command::Search { query } => {
            settle(&view_model, view_model.refresh(query)).await?;
            print_list(&view_model.snapshot().items);
        }
        Command::Show { id } => {
            settle(&view_model, view_model.reload()).await?;
            let Some(item) = view_model.item(id) else {
                bail!(
                    "Recipe {} is not among the first {} recipes",
                    id,
                    config.paging.initial_page_size
                );
            };
            print_detail(&item);
        }
    }

    view_model.close();
    Ok(())
}

/// Wait for an action and surface its failure, if any.
async fn settle<C: FetchClient + 'static>(
    view_model: &ListViewModel<C>,
    handle: JoinHandle<()>,
) -> anyhow::Result<()> {
    handle.await.context("Action task failed")?;
    if let Some(err) = view_model.snapshot().error {
        view_model.reset_error();
        return Err(err.into());
    }
    Ok(())
}

fn print_list(items: &[Item]) {
    if items.is_empty() {
        println!("No recipes.");
        return;
    }
    for item in items {
        println!(
            "{:>4}  {:<40}  {:.1}  {:<6}  {}",
            item.id,
            item.title,
            item.rating,
            item.difficulty,
            item.tags.join(", ")
        );
    }
}

fn print_detail(item: &Item) {
    println!("{} (#{})", item.title, item.id);
    println!("Rating: {:.1}  Difficulty: {}", item.rating, item.difficulty);
    if let Some(minutes) = item.prep_time_minutes {
        println!("Prep time: {} min", minutes);
    }
    if !item.tags.is_empty() {
        println!("Tags: {}", item.tags.join(", "));
    }
    println!("Image: {}", item.image_ref);

    if let Some(ingredients) = &item.ingredients {
        println!("\nIngredients:");
        for ingredient in ingredients {
            println!("  - {}", ingredient);
        }
    }
    if let Some(instructions) = &item.instructions {
        println!("\nInstructions:");
        for (step, text) in instructions.iter().enumerate() {
            println!("  {}. {}", step + 1, text);
        }
    }
}
