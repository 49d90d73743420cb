// Rust guideline compliant 2026-10-14

//! Gallery CLI Application
//!
//! Publishes artworks to the gallery site and announces them on Instagram.

use clap::Parser;
use gallery_app::{AppError, CreateRequest, ErrorCode, SiteContext};
use gallery_cli::commands;
use gallery_cli::logging::{init_tracing, parse_log_level};
use gallery_cli::terminal::{print_error, print_info, print_warning};
use gallery_cli::{emit_error, is_json_output, set_color_enabled, set_json_output, should_use_color};
use gallery_instagram::{ACCESS_TOKEN_VAR, ACCOUNT_ID_VAR};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "Usage: gallery --image <path> --title-he <title> --price <price> --size <size> --medium <medium> [--slug <slug>] [--body <text>] [--subjects <a,b>]\n       gallery --post-to-instagram --slug <slug>\n       gallery --check";

#[derive(Parser, Debug)]
#[command(
    name = "gallery",
    version,
    about = "Publish artworks to the gallery site and announce them on Instagram",
    long_about = "Creates an artwork record and copies its image into the site's public assets, or announces an existing record on Instagram with --post-to-instagram.",
    after_help = "Examples:\n  gallery --image ~/scans/cat.png --title-he \"חתול\" --price \"₪200\" --size \"30×40cm\" --medium \"צבעי מים\"\n  gallery --post-to-instagram --slug חתול\n  gallery --check\n"
)]
struct Cli {
    /// Source image to publish
    #[arg(long)]
    image: Option<PathBuf>,

    /// Display title
    #[arg(long)]
    title_he: Option<String>,

    /// Artwork slug (derived from the title when omitted in create mode)
    #[arg(long)]
    slug: Option<String>,

    /// Price, free text
    #[arg(long)]
    price: Option<String>,

    /// Physical size
    #[arg(long)]
    size: Option<String>,

    /// Medium
    #[arg(long)]
    medium: Option<String>,

    /// Description body
    #[arg(long)]
    body: Option<String>,

    /// Comma-separated subject tags
    #[arg(long)]
    subjects: Option<String>,

    /// Announce an existing record on Instagram
    #[arg(long, conflicts_with = "check")]
    post_to_instagram: bool,

    /// Validate every record against the content schema
    #[arg(long)]
    check: bool,

    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Site root (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

enum Mode {
    Create,
    Announce,
    Check,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.post_to_instagram {
            Mode::Announce
        } else {
            Mode::Create
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    set_json_output(cli.json);
    set_color_enabled(!cli.no_color && should_use_color());

    let mode = cli.mode();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            report(&err, &mode);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let level = parse_log_level(&cli.log_level)?;
    if !init_tracing(level) {
        print_warning("a tracing subscriber is already installed; keeping it");
    }

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    load_dotenv(&root);

    let site = SiteContext::discover(Some(&root))?;
    tracing::debug!(root = %site.root().display(), "site loaded");

    match cli.mode() {
        Mode::Check => commands::check::execute(&site),
        Mode::Announce => {
            let Some(slug) = cli.slug.as_deref() else {
                return Err(AppError::InvalidInput(
                    "--slug is required with --post-to-instagram".to_string(),
                )
                .into());
            };
            commands::announce::execute(&site, slug)?;
            Ok(true)
        }
        Mode::Create => {
            let request = CreateRequest {
                image: cli.image,
                title_he: cli.title_he,
                slug: cli.slug,
                price: cli.price,
                size: cli.size,
                medium: cli.medium,
                body: cli.body,
                subjects: cli.subjects,
            };
            commands::create::execute(&site, request)?;
            Ok(true)
        }
    }
}

fn report(err: &anyhow::Error, mode: &Mode) {
    let Some(app_err) = err.downcast_ref::<AppError>() else {
        print_error(&format!("{err:#}"));
        return;
    };

    if is_json_output() {
        emit_error(app_err);
        return;
    }

    print_error(&app_err.to_string());
    match (app_err.code(), mode) {
        (ErrorCode::ValidationError, Mode::Create) => eprintln!("{USAGE}"),
        (ErrorCode::ConfigurationError, Mode::Announce) => print_info(&format!(
            "Set {ACCESS_TOKEN_VAR} and {ACCOUNT_ID_VAR} in the environment or in the site's .env file"
        )),
        (ErrorCode::ExternalServiceError, _) => {
            if let AppError::ExternalService {
                creation_id: Some(creation_id),
                ..
            } = app_err
            {
                print_info(&format!(
                    "Media container {creation_id} was created but not published"
                ));
            }
        }
        _ => {}
    }
}

fn load_dotenv(root: &Path) {
    let path = root.join(".env");
    if !path.is_file() {
        return;
    }
    if let Err(err) = dotenvy::from_path(&path) {
        tracing::warn!(path = %path.display(), %err, "failed to load .env");
    }
}
