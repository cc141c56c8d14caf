use anyhow::Result;
use clap::Parser;

use relcut::config;
use relcut::fetch::HttpFetcher;
use relcut::generator::ChangelogGenerator;
use relcut::notes::TomlNotesStore;
use relcut::ui;
use relcut::version::{latest_tag, ReleaseVersion};

#[derive(clap::Parser)]
#[command(
    name = "relcut",
    about = "Generate release changelogs and manage release version identifiers"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Release version to generate a changelog for")]
    release: Option<String>,

    #[arg(long, help = "Mark the changelog as a development build with this version")]
    dev_version: Option<String>,

    #[arg(long, help = "Strictly parse a version string and print its parts")]
    check: Option<String>,

    #[arg(long, num_args = 1.., help = "Print the highest version among the given tags")]
    latest: Vec<String>,

    #[arg(short, long, help = "Write the changelog to a file instead of stdout")]
    output: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("relcut {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(version_str) = args.check.as_deref() {
        match ReleaseVersion::parse(version_str) {
            Ok(version) => {
                ui::display_parsed_version(&version.base, version.revision);
                return Ok(());
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    if !args.latest.is_empty() {
        match latest_tag(&args.latest) {
            Some(tag) => {
                println!("{}", tag);
                return Ok(());
            }
            None => {
                ui::display_error("No parseable version among the given tags");
                std::process::exit(1);
            }
        }
    }

    let Some(release) = args.release.as_deref() else {
        ui::display_error("Nothing to do: pass --release, --check or --latest (see --help)");
        std::process::exit(1);
    };

    // Release flows take a known-good version string; fail fast on junk
    if let Err(e) = ReleaseVersion::parse(release) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let generator = ChangelogGenerator::new(
        HttpFetcher::new(),
        TomlNotesStore::new(&config.notes.path),
        config.release.notes_url.clone(),
        config.fetch.max_attempts,
    );

    ui::display_status(&format!("Generating changelog for {}", release));
    let document = match generator.generate_changelog(
        release,
        args.dev_version.as_deref(),
        args.dev_version.is_some(),
    ) {
        Ok(document) => document,
        Err(e) => {
            ui::display_error(&format!("Failed to generate changelog: {}", e));
            std::process::exit(1);
        }
    };

    match args.output.as_deref() {
        Some(path) => {
            std::fs::write(path, &document)?;
            ui::display_success(&format!("Wrote changelog to {}", path));
        }
        None => {
            print!("{}", document);
        }
    }

    Ok(())
}
