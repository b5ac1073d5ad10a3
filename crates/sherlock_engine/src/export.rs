use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sherlock_core::FoundSite;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Timestamp written under the header, if any.
    pub generated_utc: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("username {0:?} cannot be used as a file name")]
    InvalidUsername(String),
}

/// `<username>.txt`, refusing names that would escape the export directory.
pub fn export_filename(username: &str) -> Result<String, ExportError> {
    let trimmed = username.trim();
    let unusable = trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\', '\0']);
    if unusable {
        return Err(ExportError::InvalidUsername(username.to_string()));
    }
    Ok(format!("{trimmed}.txt"))
}

pub fn render_results_text(username: &str, results: &[FoundSite], options: &ExportOptions) -> String {
    let mut buffer = format!("Results for username: {}\n", username.trim());
    if let Some(generated) = &options.generated_utc {
        buffer.push_str(&format!("Generated: {generated}\n"));
    }
    buffer.push('\n');
    if results.is_empty() {
        buffer.push_str("No sites found.\n");
    }
    for site in results {
        buffer.push_str(&format!("{}: {}\n", site.name, site.url));
    }
    buffer
}

/// Writes the results to `{dir}/<username>.txt`, replacing any previous export.
pub fn export_results(
    dir: &Path,
    username: &str,
    results: &[FoundSite],
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let filename = export_filename(username)?;
    let content = render_results_text(username, results, options);
    ensure_export_dir(dir)?;
    write_atomically(dir, &filename, &content)
}

fn ensure_export_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Temp file in the same directory, then rename over the target.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|e| ExportError::Io(e.error))?;
    Ok(target)
}
