use anyhow::Result;
use tempfile::tempdir;

use super::save_copy_to;

#[tokio::test]
async fn it_saves_a_copy_without_leaving_partials() -> Result<()> {
    let source_dir = tempdir()?;
    let download_dir = tempdir()?;
    let source = source_dir.path().join("talk.mp3");
    tokio::fs::write(&source, b"audio bytes").await?;

    let destination = save_copy_to(&source, download_dir.path()).await?;

    assert_eq!(destination, download_dir.path().join("talk.mp3"));
    assert_eq!(tokio::fs::read(&destination).await?, b"audio bytes");

    let mut entries = tokio::fs::read_dir(download_dir.path()).await?;
    let mut names = vec![];
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    assert_eq!(names, vec!["talk.mp3"]);
    return Ok(());
}

#[tokio::test]
async fn it_numbers_the_copy_when_the_name_is_taken() -> Result<()> {
    let source_dir = tempdir()?;
    let download_dir = tempdir()?;
    let source = source_dir.path().join("talk.mp3");
    tokio::fs::write(&source, b"take two").await?;
    tokio::fs::write(download_dir.path().join("talk.mp3"), b"take one").await?;

    let destination = save_copy_to(&source, download_dir.path()).await?;

    assert_eq!(destination, download_dir.path().join("talk (1).mp3"));
    assert_eq!(
        tokio::fs::read(download_dir.path().join("talk.mp3")).await?,
        b"take one"
    );
    assert_eq!(tokio::fs::read(&destination).await?, b"take two");
    return Ok(());
}

#[tokio::test]
async fn it_cleans_up_the_partial_when_the_copy_fails() -> Result<()> {
    let source_dir = tempdir()?;
    let download_dir = tempdir()?;
    // A directory as the source makes the copy itself fail.
    let source = source_dir.path().join("talk.mp3");
    tokio::fs::create_dir(&source).await?;

    let res = save_copy_to(&source, download_dir.path()).await;
    assert!(res.is_err());

    let mut entries = tokio::fs::read_dir(download_dir.path()).await?;
    assert!(entries.next_entry().await?.is_none());
    return Ok(());
}

#[tokio::test]
async fn it_fails_when_the_source_is_missing() -> Result<()> {
    let download_dir = tempdir()?;

    let res = save_copy_to("/tmp/does-not-exist.mp3".as_ref(), download_dir.path()).await;

    assert!(res.is_err());
    return Ok(());
}
