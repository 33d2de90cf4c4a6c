use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use logainm_matchup::error::util::safe_create_file;
use logainm_matchup::osm::lint::{duplicate_registry_refs, report_duplicates};
use logainm_matchup::osm::writer::{plan_updates, write_tagged_file};
use logainm_matchup::registry::describe;
use logainm_matchup::{
    Category, InMemoryRegistry, MatchupConfig, MatchupInputs, OutcomeClass, RegistryId,
    load_relations,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON config file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every decision, not just the outcomes
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct RegistryArgs {
    /// Registry `names.csv`
    #[arg(long)]
    names: Option<PathBuf>,

    /// Registry `geometric_contains.csv`
    #[arg(long)]
    contains: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match boundaries to registry entries
    Match {
        #[command(flatten)]
        registry: RegistryArgs,

        /// Directory holding the extract CSVs
        #[arg(long)]
        extract_dir: Option<PathBuf>,

        /// Live boundaries as OSM XML
        #[arg(long)]
        osm: Option<PathBuf>,

        /// Levels to match, comma-separated, outermost first
        #[arg(long, value_delimiter = ',')]
        categories: Option<Vec<Category>>,

        /// Keep at most this many matches
        #[arg(long)]
        limit: Option<usize>,

        /// Write the matches here as JSON
        #[arg(long)]
        json_out: Option<PathBuf>,

        /// Write the OSM XML with registry tags added here; needs --osm
        #[arg(long)]
        osm_out: Option<PathBuf>,

        /// Show a progress bar per level
        #[arg(long)]
        progress: bool,
    },
    /// Report `logainm:ref` values shared by several relations
    Lint {
        /// Live boundaries as OSM XML
        osm: PathBuf,
    },
    /// Show a registry entry with its parents and children
    Inspect {
        #[command(flatten)]
        registry: RegistryArgs,

        id: RegistryId,
    },
}

fn load_config(path: Option<&Path>) -> Result<MatchupConfig> {
    match path {
        Some(path) => MatchupConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(MatchupConfig::default()),
    }
}

fn apply_registry_args(config: &mut MatchupConfig, args: RegistryArgs) {
    if let Some(names) = args.names {
        config.registry_names = names;
    }
    if let Some(contains) = args.contains {
        config.registry_contains = contains;
    }
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> Result<()> {
    let file = safe_create_file(path, "match output")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn run_match(
    mut config: MatchupConfig,
    osm: Option<PathBuf>,
    json_out: Option<PathBuf>,
    osm_out: Option<PathBuf>,
) -> Result<()> {
    config.validate()?;
    if osm_out.is_some() && osm.is_none() {
        bail!("--osm-out needs the input OSM XML given with --osm");
    }

    let inputs =
        MatchupInputs::load(&config, osm.as_deref()).context("Failed to load matchup inputs")?;
    let report = inputs.run(&config)?;

    let counts = report.class_counts();
    info!(
        "{} objects matched, {} ambiguous, {} unmatched; {} contested registry ids dropped; {} matches kept",
        counts.get(&OutcomeClass::Matched).unwrap_or(&0),
        counts.get(&OutcomeClass::Ambiguous).unwrap_or(&0),
        counts.get(&OutcomeClass::Unmatched).unwrap_or(&0),
        report.conflicts.len(),
        report.matches.len()
    );

    if let Some(path) = json_out {
        write_json(&path, &report.matches)?;
    }
    if let (Some(input), Some(output)) = (osm, osm_out) {
        let updates = plan_updates(&inputs.relations, &report.matches, &config);
        write_tagged_file(&input, &output, &updates)
            .with_context(|| format!("Failed to write tagged OSM XML to {}", output.display()))?;
    }
    if report.matches.is_empty() {
        warn!("No matches were made");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Match {
            registry,
            extract_dir,
            osm,
            categories,
            limit,
            json_out,
            osm_out,
            progress,
        } => {
            apply_registry_args(&mut config, registry);
            if let Some(dir) = extract_dir {
                config.extract_dir = dir;
            }
            if let Some(categories) = categories {
                config.categories = categories;
            }
            if limit.is_some() {
                config.limit = limit;
            }
            config.show_progress |= progress;
            run_match(config, osm, json_out, osm_out)
        }
        Command::Lint { osm } => {
            let relations = load_relations(&osm)?;
            let duplicates = duplicate_registry_refs(&relations);
            report_duplicates(&duplicates, |reference| {
                config.url_template.replace("{id}", reference)
            });
            Ok(())
        }
        Command::Inspect { registry, id } => {
            apply_registry_args(&mut config, registry);
            let store = InMemoryRegistry::load(&config.registry_names, &config.registry_contains)?;
            match describe(&store, id) {
                Some(description) => {
                    print!("{description}");
                    Ok(())
                }
                None => bail!("Registry id {id} not found"),
            }
        }
    }
}
