//! CLI interface for resume lens

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Section words a real resume is expected to contain a few of.
const SECTION_WORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "project",
    "summary",
    "work",
    "employment",
    "certification",
];

#[derive(Parser)]
#[command(name = "resume-lens")]
#[command(about = "Role-aware resume quality analysis")]
#[command(
    long_about = "Analyze resume quality for a target role using a heuristic rule engine, \
                  with optional AI-assisted report generation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume for a target role
    Analyze {
        /// Path to the extracted resume text (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target role hint (omit or pass "auto-detect" to classify from text)
        #[arg(long)]
        role: Option<String>,

        /// Candidate email, passed through onto the report
        #[arg(short, long)]
        email: Option<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Skip the generative path even when a credential is configured
        #[arg(long)]
        no_ai: bool,
    },

    /// List the cataloged role profiles
    Roles,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Intake screening: reject inputs that do not look like a resume before the
/// engine runs. The engine itself assumes callers filter this.
pub fn validate_resume_text(
    text: &str,
    min_length: usize,
    min_section_hits: usize,
) -> Result<(), String> {
    if text.trim().len() < min_length {
        return Err(format!(
            "Text is too short to be a resume ({} characters, minimum {})",
            text.trim().len(),
            min_length
        ));
    }
    let lowered = text.to_lowercase();
    let hits = SECTION_WORDS.iter().filter(|w| lowered.contains(*w)).count();
    if hits < min_section_hits {
        return Err(format!(
            "This does not look like a resume: found only {} resume section words (need {})",
            hits, min_section_hits
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("cv.txt"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &["txt", "md"]).is_err());
    }

    #[test]
    fn test_short_text_disqualified() {
        let err = validate_resume_text("too short", 150, 3).unwrap_err();
        assert!(err.contains("too short"));
    }

    #[test]
    fn test_non_resume_text_disqualified() {
        let text = "lorem ipsum dolor sit amet ".repeat(20);
        let err = validate_resume_text(&text, 150, 3).unwrap_err();
        assert!(err.contains("does not look like a resume"));
    }

    #[test]
    fn test_plausible_resume_passes() {
        let text = format!(
            "{} Experience: built things. Education: a degree. Skills: many.",
            "filler text ".repeat(20)
        );
        assert!(validate_resume_text(&text, 150, 3).is_ok());
    }
}
