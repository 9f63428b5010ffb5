use clap::{Parser, Subcommand};
use planted::{config, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planted")]
#[command(about = "Content pipeline for the Planted plant-care catalog")]
#[command(long_about = "\
Content pipeline for the Planted plant-care catalog

Your filesystem is the data source. Markdown documents with YAML
front-matter become validated records in a JSON manifest consumed by the
page renderer.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── plants/
  │   ├── bedroom/                 # Directory name = category slug
  │   │   ├── lavender.mdx         # category: bedroom (must match)
  │   │   └── snake-plant.mdx
  │   └── pet-safe/
  │       └── spider-plant.mdx
  └── guides/
      ├── getting-started.mdx
      └── low-light-plants.mdx

Every document is validated before it reaches the manifest. A failing
document fails the build with a report covering every broken field.

Run 'planted gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory for the manifest
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the content directory and write manifest.json
    Scan,
    /// Validate the content directory without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = run_scan(&cli.source)?;
            std::fs::create_dir_all(&cli.output)?;
            let manifest_path = cli.output.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);
            println!();
            println!("Manifest written to {}", manifest_path.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = run_scan(&cli.source)?;
            output::print_scan_output(&manifest);
            println!();
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Scan with the thread pool sized from config, printing the full
/// violation report when validation fails.
fn run_scan(source: &std::path::Path) -> Result<scan::Manifest, Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    init_thread_pool(&site_config.processing);

    match scan::scan(source) {
        Ok(manifest) => Ok(manifest),
        Err(scan::ScanError::Invalid(failures)) => {
            output::print_failure_report(&failures);
            Err("content validation failed".into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down,
/// not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
