#[cfg(test)]
#[path = "noop_test.rs"]
mod tests;

use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Player;
use crate::domain::models::PlayerName;

#[derive(Default)]
pub struct NoopPlayer {}

#[async_trait]
impl Player for NoopPlayer {
    fn name(&self) -> PlayerName {
        return PlayerName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn probe_duration(&self, _path: &Path) -> Result<f64> {
        return Ok(0.0);
    }

    #[allow(clippy::implicit_return)]
    async fn play(&mut self, _path: &Path, _start_at: f64) -> Result<()> {
        return Err(anyhow!(
            "The 'none' player cannot play media. Configure a real player such as 'ffplay' to audition files"
        ));
    }

    #[allow(clippy::implicit_return)]
    async fn stop(&mut self) -> Result<()> {
        return Ok(());
    }
}
