use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dapur_client::{render, Command, GenerateOutcome, HttpRecipeApi, Kitchen, RecipeApi};
use dapur_core::KeyValueStore;
use dapur_db::{init_database, RedbKeyValueStore};

#[derive(Parser)]
#[command(name = "dapur-cli")]
#[command(about = "Pick ingredients and get recipe ideas from the Dapur server", long_about = None)]
struct Cli {
    /// Recipe server URL
    #[arg(long, env = "DAPUR_API_URL", default_value = "http://localhost:3001")]
    server: String,

    /// File holding saved favorites
    #[arg(long, env = "DAPUR_DATA_PATH", default_value = "dapur.redb")]
    data: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they do not interleave with the screen.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let db = init_database(&cli.data)
        .with_context(|| format!("opening {}", cli.data.display()))?;
    let store = RedbKeyValueStore::new(db);
    let api = HttpRecipeApi::new(cli.server.clone());

    let mut kitchen = Kitchen::new(api, store).context("loading favorites")?;
    tracing::info!("Using recipe server at {}", cli.server);

    println!("{}", render::render(&kitchen));
    println!("{}", dapur_client::command::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", dapur_client::command::HELP),
            Command::Show => println!("{}", render::render(&kitchen)),
            Command::Toggle(input) => {
                let name = resolve_ingredient(&kitchen, &input);
                kitchen.toggle_ingredient(&name);
                println!("{}", render::render_ingredient_panel(&kitchen));
            }
            Command::Add(text) => {
                kitchen.set_custom_input(text);
                if !kitchen.add_custom_ingredient() {
                    println!("Already selected: {}", kitchen.custom_input().trim());
                }
                println!("{}", render::render_ingredient_panel(&kitchen));
            }
            Command::Generate => generate(&mut kitchen).await,
            Command::Favorite(n) => match kitchen.recipes().get(n - 1).cloned() {
                Some(recipe) => {
                    kitchen.toggle_favorite(&recipe)?;
                    println!("{}", render::render(&kitchen));
                }
                None => println!("No generated recipe number {}", n),
            },
            Command::Unfavorite(n) => match kitchen.favorites().get(n - 1).cloned() {
                Some(recipe) => {
                    kitchen.toggle_favorite(&recipe)?;
                    println!("{}", render::render_favorites(kitchen.favorites()));
                }
                None => println!("No favorite number {}", n),
            },
        }
    }

    Ok(())
}

async fn generate<A: RecipeApi, S: KeyValueStore>(kitchen: &mut Kitchen<A, S>) {
    let Some(ingredients) = kitchen.start_generation() else {
        println!("Select at least one ingredient first.");
        return;
    };
    println!("{}", render::LOADING_MESSAGE);

    let result = kitchen.api().generate_recipes(&ingredients).await;
    match kitchen.finish_generation(result) {
        GenerateOutcome::Loaded(_) => println!("{}", render::render(kitchen)),
        GenerateOutcome::Failed(e) => {
            println!("{} ({})", render::FAILURE_MESSAGE, e);
            println!("{}", render::render_ingredient_panel(kitchen));
        }
        GenerateOutcome::Skipped => {}
    }
}

/// Map user input to an ingredient name: a catalog number, a catalog name in
/// any case, an already-selected custom name in any case, or the input as-is.
fn resolve_ingredient<A: RecipeApi, S: KeyValueStore>(
    kitchen: &Kitchen<A, S>,
    input: &str,
) -> String {
    if let Ok(n) = input.parse::<usize>() {
        if let Some(ingredient) = n.checked_sub(1).and_then(|i| kitchen.catalog().get(i)) {
            return ingredient.name.clone();
        }
    }

    kitchen
        .catalog()
        .iter()
        .map(|i| &i.name)
        .chain(kitchen.selection().as_slice())
        .find(|name| name.eq_ignore_ascii_case(input))
        .cloned()
        .unwrap_or_else(|| input.to_string())
}
