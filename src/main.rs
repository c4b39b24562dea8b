use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memmap2::Mmap;
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use sufx::index::{BuiltIndex, IndexBuilder, IndexConfig};
use sufx::output::{self, IndexReport};
use sufx::utils::{self, logging, naive, progress};

/// Texts up to this length also get the quadratic longest-repeat check
const QUADRATIC_LIMIT: usize = 2_000;

#[derive(Parser)]
#[command(name = "sufx")]
#[command(about = "Linear-time suffix arrays, LCP arrays and suffix trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the per-user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the suffix array, rank array and LCP array of a file
    Build {
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Find occurrences of a pattern
    Search {
        file: PathBuf,

        pattern: String,

        /// Maximum number of hits to print
        #[arg(short, long, default_value_t = 100)]
        limit: usize,

        /// Only print the number of hits
        #[arg(short, long)]
        count: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Print the longest repeated substring of a file
    Lrs {
        file: PathBuf,
    },
    /// Draw the suffix tree of a file
    Tree {
        file: PathBuf,
    },
    /// Show index statistics
    Stats {
        file: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Cross-check the index of each file against the reference implementation
    Verify {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration if no config file exists yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = utils::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { file, json } => {
            let built = load_index(&file, &config)?;
            if json {
                output::print_json(&built.suffix_array)?;
            } else {
                output::print_arrays(&built.suffix_array, true)?;
            }
        }
        Commands::Search {
            file,
            pattern,
            limit,
            count,
            no_color,
        } => {
            let built = load_index(&file, &config)?;
            let positions = built.positions(pattern.as_bytes());
            println!("{} matches", positions.len());
            if !count {
                let shown = &positions[..positions.len().min(limit)];
                output::print_matches(
                    built.text(),
                    shown,
                    pattern.len(),
                    config.search_context,
                    !no_color,
                )?;
            }
        }
        Commands::Lrs { file } => {
            let built = load_index(&file, &config)?;
            let range = built.suffix_array.longest_repeat_range();
            if range.is_empty() {
                println!("No repeated substring");
            } else {
                println!(
                    "{} (length {}, at offset {})",
                    output::display_bytes(&built.text()[range.clone()]),
                    range.len(),
                    range.start
                );
            }
        }
        Commands::Tree { file } => {
            let built = load_index(&file, &config)?;
            print!("{}", built.suffix_tree().render());
        }
        Commands::Stats { file, json } => {
            let built = load_index(&file, &config)?;
            let tree_nodes = config
                .build_tree
                .then(|| built.suffix_tree().node_count());
            let report = IndexReport {
                meta: built.meta(),
                distinct_substrings: built.suffix_array.distinct_substrings(),
                tree_nodes,
            };
            if json {
                output::print_json(&report)?;
            } else {
                output::print_stats(&report);
            }
        }
        Commands::Verify { files } => {
            verify_files(&files, &config)?;
        }
        Commands::Config { init } => {
            let path = match cli.config {
                Some(path) => path,
                None => utils::get_config_path()?,
            };
            if init && !path.exists() {
                utils::save_config(&config, &path)?;
                println!("Wrote {}", path.display());
            }
            output::print_json(&config)?;
        }
    }

    Ok(())
}

/// Memory-map `path` and hand its bytes to `f`
fn with_input<R>(path: &Path, f: impl FnOnce(&[u8]) -> R) -> Result<R> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    // Zero-length maps are rejected on some platforms
    if file.metadata()?.len() == 0 {
        return Ok(f(&[]));
    }

    let mmap = unsafe { Mmap::map(&file)? };
    Ok(f(&mmap))
}

fn load_index(path: &Path, config: &IndexConfig) -> Result<BuiltIndex> {
    let builder = IndexBuilder::new(config.clone());
    let built = with_input(path, |bytes| builder.build(bytes))?
        .with_context(|| format!("Failed to index {}", path.display()))?;
    log::debug!("indexed {} ({} bytes)", path.display(), built.text().len());
    Ok(built)
}

fn verify_files(files: &[PathBuf], config: &IndexConfig) -> Result<()> {
    let pb = progress::file_bar(files.len() as u64);

    let results: Vec<(&PathBuf, Result<Result<(), naive::Mismatch>>)> = files
        .par_iter()
        .map(|path| {
            let result = load_index(path, config)
                .map(|built| naive::verify(&built.suffix_array, QUADRATIC_LIMIT));
            pb.inc(1);
            (path, result)
        })
        .collect();

    pb.finish_and_clear();

    let mut failed = 0;
    for (path, result) in &results {
        match result {
            Ok(Ok(())) => println!("ok       {}", path.display()),
            Ok(Err(mismatch)) => {
                failed += 1;
                println!("MISMATCH {}: {}", path.display(), mismatch);
            }
            Err(e) => {
                failed += 1;
                println!("ERROR    {}: {:#}", path.display(), e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files failed verification", failed, results.len());
    }
    Ok(())
}
