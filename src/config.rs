use anyhow::{anyhow, Result};
use clap::Parser;
use clap_config_file::ClapConfigFile;
use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::defaults::{DEFAULT_OUTPUT_TEMPLATE, DEFAULT_PLATFORM_TEST_PATTERNS};

#[derive(Parser, ClapConfigFile, Clone)]
#[command(version, about = "Torg test organization tool")]
#[config_file_name = "torg"]
#[config_file_formats = "toml,yaml,json"]
pub struct TorgConfig {
    /// Test file paths to organize. Reads newline-separated paths from
    /// stdin when none are given.
    #[config_arg(positional)]
    pub paths: Vec<String>,

    /// Output template. Defaults to "TEST:TEST_NAME:FILE_PATH:CATEGORY"
    #[config_arg(default_value = DEFAULT_OUTPUT_TEMPLATE)]
    pub output_template: String,

    /// Enable JSON output
    #[config_arg()]
    #[arg(long)]
    pub json: bool,

    /// Enable debug output
    #[config_arg()]
    #[arg(long)]
    pub debug: bool,

    /// Output directory. If none is provided & stdout is a TTY, we pick a temp dir
    #[config_arg()]
    pub output_dir: Option<String>,

    /// Extra platform test patterns, appended to the built-in table
    #[config_arg(long = "platform-patterns", multi_value_behavior = "extend")]
    pub platform_patterns: Vec<String>,

    /// Glob patterns for test files to exclude from organization
    #[config_arg(long = "exclude", multi_value_behavior = "extend")]
    pub exclude: Vec<String>,

    /// True if we should stream output to stdout (computed)
    pub stream: bool,
}

impl Default for TorgConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            json: false,
            debug: false,
            output_dir: None,
            platform_patterns: DEFAULT_PLATFORM_TEST_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude: Vec::new(),
            // computed fields
            stream: false,
        }
    }
}

impl TorgConfig {
    /// Construct a config over a fixed path list, for library callers and tests
    pub fn extend_config_with_defaults(paths: Vec<String>, output_dir: String) -> Self {
        TorgConfig {
            paths,
            output_dir: Some(output_dir),
            ..Default::default()
        }
    }

    /// Ensure output directory exists and is valid. Returns the resolved output directory path.
    pub fn ensure_output_dir(&self) -> Result<String> {
        if self.stream {
            return Ok(String::new());
        }

        let output_dir = if let Some(dir) = &self.output_dir {
            dir.clone()
        } else {
            let temp_dir = std::env::temp_dir().join("torg-output");
            temp_dir.to_string_lossy().to_string()
        };

        let path = Path::new(&output_dir);
        if path.exists() && !path.is_dir() {
            return Err(anyhow!(
                "output_dir: '{}' exists but is not a directory",
                output_dir
            ));
        }

        fs::create_dir_all(path)
            .map_err(|e| anyhow!("output_dir: cannot create '{}': {}", output_dir, e))?;

        Ok(output_dir)
    }

    /// Parse from CLI + config file, fill in computed fields, and validate.
    pub fn init_config() -> Self {
        // Use a fixed argument list if the special environment variable is set.
        let mut cfg = if std::env::var("TORG_CLI_TEST").is_ok() {
            TorgConfig::parse_from(std::iter::once("torg"))
        } else {
            TorgConfig::parse()
        };

        // Compute derived fields:
        let force_tty = std::env::var("FORCE_TTY").is_ok();
        cfg.stream = !atty::is(atty::Stream::Stdout) && !force_tty;

        // Always start with the built-in platform patterns, then add user's:
        let mut patterns = DEFAULT_PLATFORM_TEST_PATTERNS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        patterns.extend(cfg.platform_patterns);
        cfg.platform_patterns = patterns;

        // If no output_template is provided (or it is empty), set it to default.
        if cfg.output_template.trim().is_empty() {
            cfg.output_template = DEFAULT_OUTPUT_TEMPLATE.to_string();
        }

        // Handle output directory setup
        if !cfg.stream {
            match cfg.ensure_output_dir() {
                Ok(dir) => cfg.output_dir = Some(dir),
                Err(e) => {
                    eprintln!("Warning: Failed to create output directory: {}", e);
                    cfg.stream = true; // Fall back to streaming mode
                }
            }
        }

        // Validate the config.
        if let Err(e) = cfg.validate() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }

        cfg
    }

    /// Compute a quick checksum over the input path list, used to name the
    /// output file so distinct lists do not clobber each other.
    pub fn get_checksum(paths: &[String]) -> String {
        let mut hasher = Sha256::new();
        for path in paths {
            hasher.update(path.as_bytes());
            hasher.update(b"\n");
        }
        let result = hasher.finalize();
        // Convert the 32-byte result to hex, but only keep the first 8 characters
        let hex = format!("{:x}", result);
        hex[..8].to_owned()
    }

    /// Validate the final config.
    pub fn validate(&self) -> Result<()> {
        if !self.output_template.contains("TEST_NAME")
            || !self.output_template.contains("FILE_PATH")
            || !self.output_template.contains("CATEGORY")
        {
            return Err(anyhow!(
                "output_template: must contain TEST_NAME, FILE_PATH and CATEGORY"
            ));
        }

        for pattern in &self.platform_patterns {
            if pattern.is_empty() {
                return Err(anyhow!(
                    "platform_patterns: empty pattern would match every test name"
                ));
            }
        }

        for pattern in &self.exclude {
            glob::Pattern::new(pattern)
                .map_err(|e| anyhow!("exclude: Invalid pattern '{}': {}", pattern, e))?;
        }

        if !self.stream {
            self.ensure_output_dir()?;
        }

        Ok(())
    }
}
