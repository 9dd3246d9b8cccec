#[cfg(test)]
#[path = "downloads_test.rs"]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub async fn save_copy(source: &Path) -> Result<PathBuf> {
    let dir = PathBuf::from(Config::get(ConfigKey::DownloadDir));
    return save_copy_to(source, &dir).await;
}

/// Copies a media file into the given directory. The copy lands in a hidden
/// ".part" file first and is renamed once complete, so a reader never sees a
/// half-written file. Existing files are kept, the new copy gets a numbered
/// name.
pub async fn save_copy_to(source: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = match source.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => bail!("{} has no file name to save under", source.display()),
    };

    fs::create_dir_all(dir).await?;

    let unique_name = unique_name(dir, &file_name).await;
    let destination = dir.join(&unique_name);
    // The partial carries the destination name, not the source name, so two
    // saves of the same file never share it.
    let partial = dir.join(format!(".{unique_name}.part"));

    if let Err(err) = copy_through_partial(source, &partial, &destination).await {
        let _ = fs::remove_file(&partial).await;
        return Err(err);
    }

    return Ok(destination);
}

async fn copy_through_partial(source: &Path, partial: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, partial).await?;
    fs::rename(partial, destination).await?;
    return Ok(());
}

async fn unique_name(dir: &Path, file_name: &str) -> String {
    let mut name = file_name.to_string();
    let mut attempt = 1;

    while fs::try_exists(dir.join(&name)).await.unwrap_or(false) {
        let path = Path::new(file_name);
        let stem = path
            .file_stem()
            .map(|stem| return stem.to_string_lossy().to_string())
            .unwrap_or_else(|| return file_name.to_string());
        let extension = path
            .extension()
            .map(|ext| return format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        name = format!("{stem} ({attempt}){extension}");
        attempt += 1;
    }

    return name;
}
