use std::path::Path;
use std::process::Stdio;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Child;
use tokio::process::Command;

use crate::domain::models::Player;
use crate::domain::models::PlayerName;

/// Plays media by spawning ffplay without a display window. Seeking is done
/// by restarting playback at the requested offset.
#[derive(Default)]
pub struct Ffplay {
    child: Option<Child>,
}

#[async_trait]
impl Player for Ffplay {
    fn name(&self) -> PlayerName {
        return PlayerName::Ffplay;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = Command::new("ffplay")
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        if res.is_err() {
            bail!("ffplay was not found on PATH");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn probe_duration(&self, path: &Path) -> Result<f64> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .await?;

        if !output.status.success() {
            bail!("ffprobe could not read {}", path.display());
        }

        let duration = String::from_utf8(output.stdout)?
            .trim()
            .parse::<f64>()
            .unwrap_or(0.0);

        return Ok(duration);
    }

    #[allow(clippy::implicit_return)]
    async fn play(&mut self, path: &Path, start_at: f64) -> Result<()> {
        self.stop().await?;

        let child = Command::new("ffplay")
            .args([
                "-nodisp",
                "-autoexit",
                "-loglevel",
                "quiet",
                "-ss",
                &format!("{start_at:.2}"),
            ])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        self.child = Some(child);
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn stop(&mut self) -> Result<()> {
        if let Some(mut child) = self.child.take() {
            child.kill().await?;
        }

        return Ok(());
    }
}
