use clap::{Parser, Subcommand};
use library_indexer::config::{self, IndexerConfig, Layout};
use library_indexer::{index, output};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "library-indexer")]
#[command(version)]
#[command(about = "Generate library.json from a Year/Arc/Artist image library")]
#[command(long_about = "\
Generate library.json from a Year/Arc/Artist image library

The folder tree is the data source. Every run rescans it and rewrites the
manifest; titles you edit in library.json are kept on the next run.

Library structure:

  library/
  ├── 2024/                        # Year (four digits)
  │   └── Arc1/                    # Arc (\"Arc\" + number, any case)
  │       ├── ArtistX/             # Artist
  │       │   ├── 01.png           # Image (png, jpg, jpeg, gif, svg)
  │       │   └── 02.jpg
  │       └── ArtistY/
  │           └── Sketches/        # Collection (layout = \"collection\" only)
  │               └── 01.png
  └── drafts/                      # Not a year: ignored

Run with no arguments to build. Run 'library-indexer gen-config' to print a
documented library.toml.")]
struct Cli {
    /// Project root holding library.toml, the library and the manifest
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Library directory, relative to the root (overrides library.toml)
    #[arg(long, global = true)]
    library: Option<String>,

    /// Manifest path, relative to the root (overrides library.toml)
    #[arg(long, global = true)]
    output: Option<String>,

    /// Which folder level holds the images (overrides library.toml)
    #[arg(long, value_enum, global = true)]
    layout: Option<Layout>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the library and write the manifest (default)
    Build,
    /// Scan the library and print the summary without writing
    Check,
    /// Print a stock library.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let config = resolve_config(&cli)?;
            let paths = index::Paths::resolve(&cli.root, &config);
            let manifest = index::run(&paths, &config)?;
            output::print_build_output(&manifest, &display_name(&paths.output));
        }
        Command::Check => {
            let config = resolve_config(&cli)?;
            let paths = index::Paths::resolve(&cli.root, &config);
            let manifest = index::build_manifest(&paths, &config)?;
            output::print_check_output(&manifest, &display_name(&paths.output));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `library.toml` from the root and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<IndexerConfig, config::ConfigError> {
    config::load_config(&cli.root)?.apply_overrides(
        cli.library.clone(),
        cli.output.clone(),
        cli.layout,
    )
}

/// File name shown in the summary line.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
