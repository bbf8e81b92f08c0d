use clap::{Parser, Subcommand};
use recipe_index::{config, generate, output, types::IndexVariant};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-index")]
#[command(about = "Generate localized index pages for a directory of markdown recipes")]
#[command(long_about = "\
Generate localized index pages for a directory of markdown recipes

Recipes are named <slug>.<lang>.md. Files without a language tag belong to
the default language. One index.<lang>.md is written per language into the
recipes directory, linking to the language-neutral <slug>.md so the site's
i18n plugin can resolve it.

  docs/rezepte/
  ├── config.toml              # Optional (see 'recipe-index gen-config')
  ├── apfelkuchen.de.md
  ├── apple-pie.en.md
  ├── gulasch.md               # No tag → default language
  ├── index.de.md              # Generated
  └── index.en.md              # Generated

Metadata is read from a leading YAML block between '---' lines:
  title, cover, portions, time.prep, time.cook, difficulty, date

Title falls back to the file slug, date (YYYY-MM-DD, YYYY-MM, YYYY) to the
file modification time.")]
#[command(version)]
struct Cli {
    /// Root of the documentation sources
    #[arg(long, default_value = "docs", global = true)]
    root: PathBuf,

    /// Recipes directory, relative to the root
    #[arg(long, default_value = "rezepte", global = true)]
    recipes_dir: PathBuf,

    /// Index flavor (overrides config.toml)
    #[arg(long, value_enum, global = true)]
    variant: Option<IndexVariant>,

    /// Print every scanned recipe and written file
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan recipes and write the index pages (default)
    Build,
    /// Scan and sort recipes without writing anything
    Check,
    /// Print the sorted per-language catalog as JSON
    Catalog,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let recipes_dir = cli.root.join(&cli.recipes_dir);

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(&recipes_dir)?;
            let variant = cli.variant.unwrap_or(config.variant);
            let generated = generate::generate(&recipes_dir, &config, variant)?;
            if cli.verbose {
                output::print_scan_output(&generated.documents);
                output::print_write_output(&generated.indexes);
            }
            println!("{}", output::format_summary(&generated.catalog));
        }
        Command::Check => {
            let config = config::load_config(&recipes_dir)?;
            let variant = cli.variant.unwrap_or(config.variant);
            println!("==> Checking {}", recipes_dir.display());
            let (documents, catalog) = generate::collect(&recipes_dir, &config, variant)?;
            if cli.verbose {
                output::print_scan_output(&documents);
            }
            output::print_catalog(&catalog, variant);
            println!("==> Recipes are valid");
        }
        Command::Catalog => {
            let config = config::load_config(&recipes_dir)?;
            let variant = cli.variant.unwrap_or(config.variant);
            let (_, catalog) = generate::collect(&recipes_dir, &config, variant)?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
