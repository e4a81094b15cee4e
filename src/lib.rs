use anyhow::{anyhow, Result};
use path_slash::PathBufExt;
use std::{
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
};
use tracing::debug;

pub mod category;
pub mod config;
pub mod defaults;
pub mod naming;

use category::{categorize_test, organize_tests_by_category, CategorizedTests};
use config::TorgConfig;
use naming::extract_test_name;

/// Normalize a test file path to POSIX separators.
///
/// Discovery steps on Windows may hand us backslash-separated paths;
/// classification rules only understand `/`.
pub fn normalize_test_path(path: &str) -> String {
    PathBuf::from(path).to_slash().unwrap_or_default().to_string()
}

/// Read a newline-separated path list, e.g. piped in from a discovery step.
/// Lines are trimmed; blank lines become empty entries the organizer skips.
pub fn read_path_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        paths.push(line.trim().to_string());
    }
    Ok(paths)
}

/// Main entrypoint for organization, used by CLI and tests
pub fn organize_tests(config: &TorgConfig) -> Result<(String, CategorizedTests)> {
    // Take paths from the CLI, or from stdin when none were given
    let raw_paths = if config.paths.is_empty() {
        read_path_list(io::stdin().lock())?
    } else {
        config.paths.clone()
    };

    let exclude_patterns = config
        .exclude
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    let paths: Vec<String> = raw_paths
        .iter()
        .map(|p| normalize_test_path(p))
        .filter(|p| !is_excluded(p, &exclude_patterns))
        .collect();

    let organized = organize_tests_by_category(&paths, &config.platform_patterns);

    if config.debug {
        debug!(
            "Organized {} of {} input paths into categories",
            organized.total(),
            raw_paths.len()
        );
    }

    let output = render_output(&paths, &organized, config)?;

    Ok((output, organized))
}

/// Exclusion patterns match either the whole path or just its final
/// segment, so bare-filename patterns keep working for nested tests.
fn is_excluded(test_file_path: &str, exclude_patterns: &[glob::Pattern]) -> bool {
    let file_name = test_file_path
        .rsplit('/')
        .next()
        .unwrap_or(test_file_path);
    exclude_patterns
        .iter()
        .any(|p| p.matches(test_file_path) || p.matches(file_name))
}

pub fn render_output(
    paths: &[String],
    organized: &CategorizedTests,
    config: &TorgConfig,
) -> Result<String> {
    if config.json {
        // JSON object mapping every category to its ordered path list
        Ok(serde_json::to_string_pretty(organized)?)
    } else {
        // Use the user-defined template, one line per test in input order
        Ok(paths
            .iter()
            .filter(|p| !p.is_empty())
            .map(|test_file_path| {
                let test_name = extract_test_name(test_file_path);
                let category =
                    categorize_test(&test_name, test_file_path, &config.platform_patterns);
                config
                    .output_template
                    .replace("TEST_NAME", &test_name)
                    .replace("FILE_PATH", test_file_path)
                    .replace("CATEGORY", category.name())
                    .replace("\\n", "\n") // replace literal "\n" with newline
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Write the rendered output under the configured output directory and
/// return the final file path. The file name carries a checksum of the
/// organized path list so runs over different lists do not clobber each
/// other.
pub fn write_output(
    output: &str,
    organized: &CategorizedTests,
    config: &TorgConfig,
) -> Result<String> {
    let all_paths: Vec<String> = organized
        .iter()
        .flat_map(|(_, group)| group.iter().cloned())
        .collect();
    let checksum = TorgConfig::get_checksum(&all_paths);

    let extension = if config.json { "json" } else { "txt" };
    let output_dir = config
        .output_dir
        .as_ref()
        .ok_or_else(|| anyhow!("Output directory is required when not in streaming mode."))?;

    let final_path = Path::new(output_dir)
        .join(format!("torg-output-{}.{}", checksum, extension))
        .to_string_lossy()
        .to_string();

    fs::write(&final_path, output.as_bytes())?;

    Ok(final_path)
}
