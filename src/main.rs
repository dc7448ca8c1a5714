use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use wisecat::catalog::{scan_catalog, YsoCandidate};
use wisecat::parse::CatalogReader;
use wisecat::schema::{allwise, dump_schema, write_atomic, DumpFormat};

#[derive(Parser)]
#[command(
    name = "wisecat",
    version,
    about = "Read and validate the AllWISE YSO-candidate fixed-width catalogs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stream-parse catalog files and report malformed records
    Validate {
        /// Files or glob patterns, e.g. `data/*.dat`
        patterns: Vec<String>,
    },
    /// Summarize one catalog file (row counts, absent fields, band stats)
    Stats {
        file: PathBuf,
        /// Write the summary here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Emit YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
    /// Print parsed records as JSON lines
    Export {
        file: PathBuf,
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Dump the built-in 354-byte layout
    Schema {
        /// Emit YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

fn main() -> Result<()> {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { patterns } => cmd_validate(&patterns),
        Command::Stats { file, out, yaml } => cmd_stats(&file, out.as_deref(), yaml),
        Command::Export { file, limit } => cmd_export(&file, limit),
        Command::Schema { yaml } => cmd_schema(yaml),
    }
}

fn cmd_validate(patterns: &[String]) -> Result<()> {
    // 1) expand every pattern; a literal path is a glob matching itself
    let mut paths: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        let matched: Vec<PathBuf> = glob(pattern)
            .with_context(|| format!("bad glob pattern '{}'", pattern))?
            .filter_map(|entry| entry.ok())
            .collect();
        if matched.is_empty() {
            bail!("nothing matches '{}'", pattern);
        }
        paths.extend(matched);
    }
    if paths.is_empty() {
        bail!("no catalog files given");
    }
    info!("{} file(s) to validate", paths.len());

    // 2) stream each file; keep going past a bad file, fail at the end
    let mut failed = 0usize;
    for path in &paths {
        match validate_file(path) {
            Ok(records) => {
                info!(path = %path.display(), records, "valid");
                println!("{}: {} records", path.display(), records);
            }
            Err(e) => {
                error!(path = %path.display(), "{e:#}");
                println!("{}: FAILED ({e:#})", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} file(s) failed validation", failed, paths.len());
    }
    Ok(())
}

fn validate_file(path: &Path) -> Result<u64> {
    let mut records = 0u64;
    for item in CatalogReader::open(path)? {
        item?;
        records += 1;
    }
    Ok(records)
}

fn cmd_stats(file: &Path, out: Option<&Path>, yaml: bool) -> Result<()> {
    let summary = scan_catalog(file)?;
    let mut text = if yaml {
        serde_yaml::to_string(&summary).context("serializing summary to YAML")?
    } else {
        serde_json::to_string_pretty(&summary).context("serializing summary to JSON")?
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match out {
        Some(path) => {
            write_atomic(path, &text)?;
            info!(path = %path.display(), "summary written");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_export(file: &Path, limit: Option<usize>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut written = 0usize;

    for item in CatalogReader::open(file)? {
        if limit.is_some_and(|n| written >= n) {
            break;
        }
        let record = item?;
        let candidate = YsoCandidate::from_record(&record)?;
        serde_json::to_writer(&mut out, &candidate)?;
        out.write_all(b"\n")?;
        written += 1;
    }

    info!(written, "export complete");
    Ok(())
}

fn cmd_schema(yaml: bool) -> Result<()> {
    let format = if yaml { DumpFormat::Yaml } else { DumpFormat::Json };
    print!("{}", dump_schema(allwise::layout(), format)?);
    Ok(())
}
