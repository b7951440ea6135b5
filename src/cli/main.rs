use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use metamerge::locale::LocaleTable;
use metamerge::probe::FsProbe;
use metamerge::{config, sidecar, ImageInfo};

#[derive(Parser, Debug)]
#[command(
    name = "metamerge",
    version,
    about = "Consolidate flat EXIF/IPTC/XMP sidecar metadata into one canonical record and flatten it back"
)]
struct Cli {
    /// Sidecar JSON files or directories to process
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Print the reconciled flat map as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Rewrite each sidecar in place with the reconciled flat map
    #[arg(long)]
    write: bool,

    /// Language for flat-map keys (overrides the config)
    #[arg(short, long, value_name = "LANG")]
    lang: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let config = config::Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => config::Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    if cli.paths.is_empty() {
        anyhow::bail!("No sidecar files or directories specified. Use --help for usage.");
    }

    let config = config::Config::load(cli.config.as_deref())?;
    let lang = cli.lang.clone().unwrap_or_else(|| config.language.clone());
    let locales = LocaleTable::builtin();

    let sidecars = collect_sidecars(&cli.paths);
    if sidecars.is_empty() {
        anyhow::bail!("No sidecar JSON files found in the specified paths.");
    }
    log::info!("Found {} sidecar(s) to process", sidecars.len());

    let total = sidecars.len();
    let mut failures = 0usize;

    for (i, sidecar_path) in sidecars.iter().enumerate() {
        log::info!("[{}/{}] Processing: {}", i + 1, total, sidecar_path.display());

        if let Err(e) = process_sidecar(sidecar_path, &cli, &config, &lang, &locales) {
            log::error!("  {e:#}");
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {total} sidecar(s) failed");
    }
    Ok(())
}

fn process_sidecar(
    sidecar_path: &Path,
    cli: &Cli,
    config: &config::Config,
    lang: &str,
    locales: &LocaleTable,
) -> Result<()> {
    let maps = sidecar::load(sidecar_path)?;
    let Some(tags) = maps.into_iter().next() else {
        anyhow::bail!("Sidecar contains no metadata object");
    };

    // Accept sidecars whose keys were written in a display language.
    let tags = locales.convert_from(&tags, lang);

    let image_path = image_path_for(sidecar_path);
    let info = ImageInfo::from_tags(&tags, &image_path, None, &FsProbe);
    let flat = info.to_tags();

    if cli.write {
        sidecar::save(&flat, sidecar_path)?;
        log::info!("  Rewrote: {}", sidecar_path.display());
        return Ok(());
    }

    if cli.json {
        println!("{}", sidecar::to_json(&locales.convert_to(&flat, lang))?);
        return Ok(());
    }

    println!("{}", info.file.display());
    for (label, value) in info.summary(true, &config.date_format) {
        println!("  {label}: {value}");
    }
    println!("  Copyright: {}", info.copyright_text());
    let label = info.labels.preferred(&config.label_preference);
    if !label.is_empty() {
        println!("  Label: {label}");
    }
    Ok(())
}

/// The image a sidecar describes: the sidecar path minus its `.json`
/// extension (`photo.jpg.json` → `photo.jpg`).
fn image_path_for(sidecar_path: &Path) -> PathBuf {
    sidecar_path.with_extension("")
}

/// Expand files and directories into the list of sidecar JSON files.
fn collect_sidecars(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut sidecars = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_sidecar(path) {
                sidecars.push(path.clone());
            } else {
                log::warn!("Skipping non-JSON file: {}", path.display());
            }
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let p = entry.path();
                if p.is_file() && is_sidecar(p) {
                    sidecars.push(p.to_path_buf());
                }
            }
        } else {
            log::warn!("Path does not exist: {}", path.display());
        }
    }

    sidecars
}

fn is_sidecar(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn sidecar_detection_is_case_insensitive() {
        assert!(is_sidecar(Path::new("photo.jpg.json")));
        assert!(is_sidecar(Path::new("photo.JSON")));
        assert!(!is_sidecar(Path::new("photo.jpg")));
        assert!(!is_sidecar(Path::new("photo")));
    }

    #[test]
    fn image_path_strips_json_extension() {
        assert_eq!(
            image_path_for(Path::new("photos/a.jpg.json")),
            PathBuf::from("photos/a.jpg")
        );
    }

    #[test]
    fn collect_walks_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.jpg.json"), "{}").unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.json"), "{}").unwrap();

        let found = collect_sidecars(&[dir.path().to_path_buf()]);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn collect_warns_but_skips_non_json_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("b.txt");
        fs::write(&file, "x").unwrap();
        assert!(collect_sidecars(&[file]).is_empty());
    }
}
