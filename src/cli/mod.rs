//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{ScanError, ScanErrorKind};
use crate::formatter::SectionGate;
use crate::inspection::ScanConfig;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonsift")]
#[command(about = "Find error objects and timezone fields in JSON documents")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input JSON sources (inline JSON, files, or directories)
    #[arg()]
    pub inputs: Vec<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively search directories for JSON files
    #[arg(long)]
    pub recursive: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Time zone name to report instead of this machine's zone
    #[arg(long)]
    pub timezone: Option<String>,

    /// Separator between keys of an error path (default: " > ")
    #[arg(long)]
    pub path_separator: Option<String>,

    /// Omit a section when none of its findings can be displayed
    #[arg(long)]
    pub hide_empty_sections: bool,

    /// Show documents that fail to decode as a SyntaxError entry
    #[arg(long)]
    pub show_decode_errors: bool,

    /// Maximum input size (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Deepest nesting level to scan (default: 1000)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Continue with other files when one file cannot be read
    #[arg(long)]
    pub continue_on_error: bool,

    /// Never color the section headers
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Report formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Section headers followed by list items
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub scan_config: ScanConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> CliResult<Self> {
        let scan_config = Self::create_scan_config(&args)?;

        Ok(Self { args, scan_config })
    }

    /// Create scan configuration from CLI arguments
    fn create_scan_config(args: &Args) -> CliResult<ScanConfig> {
        let mut config = ScanConfig::new()
            .with_memory_limit(parse_memory_limit(&args.memory_limit)?)
            .with_decode_errors(args.show_decode_errors);

        if args.hide_empty_sections {
            config = config.with_section_gate(SectionGate::PostFilter);
        }
        if let Some(separator) = &args.path_separator {
            config = config.with_path_separator(separator.clone());
        }
        if let Some(name) = &args.timezone {
            config = config.with_timezone(name.clone());
        }
        if let Some(depth) = args.max_depth {
            config = config.with_max_depth(Some(depth));
        }

        config
            .validate()
            .map_err(|e| ScanError::scan(ScanErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Whether section headers may be colored
    pub fn use_color(&self) -> bool {
        !self.args.no_color
            && self.args.output.is_none()
            && self.args.format == OutputFormat::Text
            && CliUtils::should_use_color()
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
fn parse_memory_limit(limit: &Option<String>) -> CliResult<usize> {
    let Some(limit_str) = limit else {
        return Ok(100 * 1024 * 1024); // 100MB default
    };

    let limit_str = limit_str.trim().to_uppercase();
    let invalid = || {
        ScanError::scan(ScanErrorKind::configuration(format!(
            "Invalid memory limit: {}",
            limit_str
        )))
    };

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        return size.trim().parse::<usize>().map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit_str.parse::<usize>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as usize)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        if let Ok(style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ScanError) {
    CliUtils::show_error(&error.user_message());

    match error {
        ScanError::Scan {
            kind: ScanErrorKind::InputTooLarge { .. },
            ..
        } => eprintln!("\nTip: Use --memory-limit to increase the allowed input size"),
        ScanError::Scan {
            kind: ScanErrorKind::NestingTooDeep { .. },
            ..
        } => eprintln!("\nTip: Use --max-depth to scan deeper documents"),
        _ => {}
    }

    eprintln!("\nTry 'jsonsift --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, ScanError>;
