use clap::Parser;
use tracing::info;

use vcui_locators::{ids, snapshot, test_constants, Registry};

/// Locator registry inspection tool for registry authors.
#[derive(Parser, Debug)]
#[command(name = "locator-dump")]
struct CliArgs {
    /// Registry to read: "ids" or "test-constants"
    #[arg(short = 'r', long = "registry", default_value = "ids")]
    registry: String,

    /// Look up a single symbolic name instead of dumping everything
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Emit the dump as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vcui_locators=info".into()),
        )
        .init();

    let args = CliArgs::parse();

    let registry: &Registry = match args.registry.as_str() {
        "ids" => ids::registry(),
        "test-constants" => test_constants::registry(),
        other => anyhow::bail!("unknown registry: {other} (expected \"ids\" or \"test-constants\")"),
    };
    info!("{} registry loaded: {} entries", registry.label(), registry.len());

    if let Some(name) = args.name {
        let value = registry.get(&name)?;
        println!("{value}");
        return Ok(());
    }

    let snap = snapshot::snapshot(registry);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        for entry in &snap.entries {
            match &entry.recipe {
                Some(recipe) => println!("{} = {}  ({})", entry.name, entry.value, recipe),
                None => println!("{} = {}", entry.name, entry.value),
            }
        }
    }

    Ok(())
}
