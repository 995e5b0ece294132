//! Download the generated project and extract it next to the working directory

use crate::generator::GeneratorClient;
use crate::project::{archive_path, ProjectDescriptor};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use url::Url;
use zip::ZipArchive;

/// Outcome of a successful download and extraction
#[derive(Debug, Clone)]
pub struct Materialized {
    /// URL the archive was requested from
    pub url: Url,
    /// Directory the project was extracted into
    pub target: PathBuf,
    /// Number of files written
    pub files: usize,
}

/// Request the project archive and extract it into `<cwd>/<outdir>`
pub async fn fetch_and_extract(
    client: &GeneratorClient,
    project: &ProjectDescriptor,
    cwd: &Path,
) -> Result<Materialized> {
    let (url, bytes) = client
        .download_app(project)
        .await
        .context("Failed to download the generated project")?;

    let target = project.target_dir(cwd);
    let files = materialize(&bytes, &target).await?;

    Ok(Materialized { url, target, files })
}

/// Write `bytes` to `<target>.zip`, extract it into `target`, then remove the zip
///
/// When extraction fails the zip file is left in place.
pub async fn materialize(bytes: &[u8], target: &Path) -> Result<usize> {
    let zip_file = archive_path(target);

    tokio::fs::write(&zip_file, bytes)
        .await
        .with_context(|| format!("Failed to download file {}", zip_file.display()))?;

    let files = extract(&zip_file, target)
        .with_context(|| format!("Failed to unzip new project file {}", zip_file.display()))?;

    tokio::fs::remove_file(&zip_file)
        .await
        .with_context(|| format!("Failed to remove {}", zip_file.display()))?;

    Ok(files)
}

/// Extract every entry of a zip file into `dest`, in archive order
///
/// Directories are created with the default mode. Files get the unix mode
/// recorded in the archive when there is one. Returns the number of files written.
pub fn extract(zip_file: &Path, dest: &Path) -> Result<usize> {
    let file =
        File::open(zip_file).with_context(|| format!("Failed to open {}", zip_file.display()))?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .with_context(|| format!("Failed to read zip archive {}", zip_file.display()))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to read entry {} of {}", i, zip_file.display()))?;

        let relative = entry.enclosed_name().ok_or_else(|| {
            anyhow::anyhow!(
                "Archive entry '{}' points outside of {}",
                entry.name(),
                dest.display()
            )
        })?;
        let path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut out = File::create(&path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        if let Some(mode) = entry.unix_mode() {
            apply_mode(&path, mode)?;
        }

        written += 1;
    }

    Ok(written)
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = mode & 0o7777;
    if mode == 0 {
        return Ok(());
    }
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
