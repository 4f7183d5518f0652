use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use debgate::{
    ChangelogChecker, CopyrightGenerator, DebgateConfig, GenerationStatus, ReleaseChecker,
};
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "debgate")]
#[command(version, about = "release checks for debian packaging trees", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// source directory containing debian/ (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    srcdir: PathBuf,

    /// configuration file (defaults to <srcdir>/debgate.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    /// increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// fail unless debian/changelog mentions the release version
    CheckChangelog {
        /// upstream version being released (e.g. 2.5.0 or 2.5.pre1)
        #[arg(value_name = "VERSION")]
        release_version: String,

        /// also lint the changelog
        #[arg(long)]
        lint: bool,
    },

    /// parse debian/changelog and report format problems
    LintChangelog,

    /// regenerate debian/copyright from its template and the authors list
    GenerateCopyright {
        /// only report whether the file is out of date, never write it
        #[arg(long)]
        check: bool,
    },

    /// verify every file in the dist manifest exists
    VerifyDist,

    /// run the changelog gate, the copyright check and the dist check together
    CheckRelease {
        /// upstream version being released
        #[arg(value_name = "VERSION")]
        release_version: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG still wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(srcdir: &Path, config: Option<&PathBuf>) -> Result<DebgateConfig> {
    match config {
        Some(path) => DebgateConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(DebgateConfig::load_or_default(srcdir)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli.srcdir, cli.config.as_ref())?;

    match cli.command {
        Commands::CheckChangelog {
            release_version,
            lint,
        } => {
            handle_check_changelog(&cli.srcdir, &cli.format, &config, &release_version, lint)?;
        }
        Commands::LintChangelog => {
            handle_lint_changelog(&cli.srcdir, &cli.format, &config)?;
        }
        Commands::GenerateCopyright { check } => {
            handle_generate_copyright(&cli.srcdir, &cli.format, &config, check)?;
        }
        Commands::VerifyDist => {
            handle_verify_dist(&cli.srcdir, &cli.format, &config)?;
        }
        Commands::CheckRelease { release_version } => {
            handle_check_release(&cli.srcdir, &cli.format, &config, &release_version)?;
        }
    }

    Ok(())
}

fn handle_check_changelog(
    srcdir: &Path,
    format: &OutputFormat,
    config: &DebgateConfig,
    release_version: &str,
    lint: bool,
) -> Result<()> {
    let mut changelog_config = config.changelog.clone();
    if lint {
        changelog_config = changelog_config.lint_on_check(true);
    }

    let report =
        ChangelogChecker::check(srcdir, &changelog_config, &config.severity, release_version)
            .context("failed to check changelog version")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            // success is silent, like the make rule it replaces
            for issue in &report.issues {
                println!("{}", issue.message);
            }
        }
    }

    if report.has_errors() {
        anyhow::bail!(
            "changelog check failed with {} error(s)",
            report.total_errors
        );
    }

    Ok(())
}

fn handle_lint_changelog(srcdir: &Path, format: &OutputFormat, config: &DebgateConfig) -> Result<()> {
    let report = ChangelogChecker::lint(srcdir, &config.changelog, &config.severity)
        .context("failed to lint changelog")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            report.display_table();
            report.display_issues();
        }
    }

    if report.has_errors() {
        if matches!(format, OutputFormat::Human) {
            println!(
                "validation failed: {} error(s), {} warning(s)",
                report.total_errors, report.total_warnings
            );
        }
        anyhow::bail!("validation failed with {} error(s)", report.total_errors);
    }

    Ok(())
}

fn handle_generate_copyright(
    srcdir: &Path,
    format: &OutputFormat,
    config: &DebgateConfig,
    check: bool,
) -> Result<()> {
    let outcome = if check {
        CopyrightGenerator::check(srcdir, &config.copyright)
            .context("failed to render copyright file")?
    } else {
        CopyrightGenerator::generate(srcdir, &config.copyright)
            .context("failed to generate copyright file")?
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Human => {
            let status = match outcome.status {
                GenerationStatus::Created => "created",
                GenerationStatus::Updated => "updated",
                GenerationStatus::Unchanged => "up to date",
                GenerationStatus::Stale => "out of date",
            };
            println!(
                "{}: {} ({} author lines)",
                outcome.output.display(),
                status,
                outcome.author_lines
            );
        }
    }

    // --check is a gate of its own; [severity] only grades staleness in check-release
    if outcome.is_stale() {
        anyhow::bail!("{} is out of date", outcome.output.display());
    }

    Ok(())
}

fn handle_verify_dist(srcdir: &Path, format: &OutputFormat, config: &DebgateConfig) -> Result<()> {
    let report = config.dist.verify(srcdir);
    let issues = report.issues(&config.severity);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "srcdir": srcdir,
                "present": report.present,
                "missing": report.missing,
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            report.display_table();
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        anyhow::bail!("{} dist file(s) missing", errors);
    }

    Ok(())
}

fn handle_check_release(
    srcdir: &Path,
    format: &OutputFormat,
    config: &DebgateConfig,
    release_version: &str,
) -> Result<()> {
    let report = ReleaseChecker::check(srcdir, config, release_version)
        .context("failed to run release checks")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            report.display_summary();
        }
    }

    if !report.passed() {
        if matches!(format, OutputFormat::Human) {
            println!(
                "release checks failed: {} error(s), {} warning(s)",
                report.total_errors, report.total_warnings
            );
        }
        anyhow::bail!("release checks failed with {} error(s)", report.total_errors);
    }

    Ok(())
}
