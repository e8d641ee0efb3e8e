//! handover CLI - shift handover documents from the command line

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use handover::{
    artifact_filename, format_timestamp, generate_document, read_form, GenerateOptions,
    HandoverForm, JsonFormat, LayoutProfile,
};

#[derive(Parser)]
#[command(name = "handover")]
#[command(version)]
#[command(about = "Turn shift handover notes into PDF, Markdown, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the printable handover PDF
    #[command(alias = "pdf")]
    Generate {
        /// Handover form (JSON)
        #[arg(value_name = "FORM")]
        input: PathBuf,

        /// Output file or directory (current directory if not specified)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Page layout
        #[arg(long, value_enum, default_value = "detailed", env = "HANDOVER_PROFILE")]
        profile: Profile,

        /// Leave names and review details out of the document
        #[arg(long)]
        print_safe: bool,

        /// Logo image (PNG or JPEG) for the header band
        #[arg(long, value_name = "IMAGE", env = "HANDOVER_LOGO")]
        logo: Option<PathBuf>,

        /// Generation time, "YYYY-MM-DD HH:MM" (now if not specified)
        #[arg(long, value_name = "TIME")]
        timestamp: Option<String>,
    },

    /// Print the on-screen summary
    #[command(alias = "md")]
    Summary {
        /// Handover form (JSON)
        #[arg(value_name = "FORM")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: SummaryFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Leave names and review details out of the summary
        #[arg(long)]
        print_safe: bool,

        /// Generation time, "YYYY-MM-DD HH:MM" (now if not specified)
        #[arg(long, value_name = "TIME")]
        timestamp: Option<String>,
    },

    /// Print the one-line briefing
    Briefing {
        /// Handover form (JSON)
        #[arg(value_name = "FORM")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Profile {
    /// Multi-page layout with every line
    Detailed,
    /// Single page with per-block line caps
    Condensed,
}

impl From<Profile> for LayoutProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Detailed => LayoutProfile::Detailed,
            Profile::Condensed => LayoutProfile::Condensed,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    /// Markdown summary
    Markdown,
    /// Pretty-printed JSON
    Json,
    /// Briefing plus plain item lists
    Text,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            profile,
            print_safe,
            logo,
            timestamp,
        } => cmd_generate(
            &input,
            output.as_deref(),
            profile.into(),
            print_safe,
            logo.as_deref(),
            timestamp.as_deref(),
        ),
        Commands::Summary {
            input,
            format,
            output,
            print_safe,
            timestamp,
        } => cmd_summary(
            &input,
            format,
            output.as_deref(),
            print_safe,
            timestamp.as_deref(),
        ),
        Commands::Briefing { input } => cmd_briefing(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_form(input: &Path, print_safe: bool) -> Result<HandoverForm, Box<dyn std::error::Error>> {
    let mut form = read_form(input).map_err(|e| format!("{}: {}", input.display(), e))?;
    if print_safe {
        form.metadata.print_safe = true;
    }
    Ok(form)
}

fn parse_timestamp(value: Option<&str>) -> Result<Option<NaiveDateTime>, Box<dyn std::error::Error>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let timestamp = NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M").map_err(|e| {
        format!(
            "Invalid timestamp '{}' (expected YYYY-MM-DD HH:MM): {}",
            value, e
        )
    })?;
    Ok(Some(timestamp))
}

/// Resolve the PDF path: a directory (or nothing) gets the suggested file name.
fn output_path(
    output: Option<&Path>,
    profile: LayoutProfile,
    print_safe: bool,
    timestamp: NaiveDateTime,
) -> PathBuf {
    let filename = artifact_filename("handover", profile, print_safe, timestamp);
    match output {
        Some(path) if path.is_dir() => path.join(filename),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(filename),
    }
}

fn cmd_generate(
    input: &Path,
    output: Option<&Path>,
    profile: LayoutProfile,
    print_safe: bool,
    logo: Option<&Path>,
    timestamp: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = load_form(input, print_safe)?;

    if let Some(path) = logo {
        let bytes = fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        form.metadata.logo = Some(bytes);
    }

    // Pin the clock once so the file name and the document agree.
    let options = GenerateOptions::new().with_profile(profile);
    let timestamp = parse_timestamp(timestamp)?.unwrap_or_else(|| options.timestamp());
    let options = options.with_timestamp(timestamp);
    log::debug!("Generation time pinned to {}", timestamp);

    let pdf = generate_document(&form, &options)?;

    let path = output_path(output, profile, form.metadata.print_safe, timestamp);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &pdf)?;
    log::debug!("Wrote {} bytes to {}", pdf.len(), path.display());

    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

fn cmd_summary(
    input: &Path,
    format: SummaryFormat,
    output: Option<&Path>,
    print_safe: bool,
    timestamp: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = load_form(input, print_safe)?;
    log::debug!("Loaded form from {}", input.display());
    let generated_at = format_timestamp(
        parse_timestamp(timestamp)?.unwrap_or_else(|| GenerateOptions::new().timestamp()),
    );

    let summary = match format {
        SummaryFormat::Markdown => handover::to_markdown(&form, &generated_at),
        SummaryFormat::Json => handover::to_json(&form, &generated_at, JsonFormat::Pretty)?,
        SummaryFormat::Text => handover::to_text(&form),
    };

    if let Some(path) = output {
        fs::write(path, &summary)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", summary);
    }

    Ok(())
}

fn cmd_briefing(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let form = load_form(input, false)?;
    println!("{}", handover::briefing_sentence(&form));
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "handover".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Shift handover documents: PDF, Markdown, JSON");
    println!();
    println!("License: MIT");
}
