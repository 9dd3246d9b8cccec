use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter, strum::EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlayerName {
    Ffplay,
    None,
}

impl PlayerName {
    pub fn parse(text: String) -> Option<PlayerName> {
        match text.to_lowercase().as_str() {
            "ffplay" => return Some(PlayerName::Ffplay),
            "none" => return Some(PlayerName::None),
            _ => return None,
        }
    }
}

/// Media playback is delegated to an external binary behind this seam. The
/// transport widget owns position state, the player only starts and stops
/// real sound.
#[async_trait]
pub trait Player {
    fn name(&self) -> PlayerName;

    /// Verifies the player binary is available.
    async fn health_check(&self) -> Result<()>;

    /// Total length of the file in seconds, zero when unknown.
    async fn probe_duration(&self, path: &Path) -> Result<f64>;

    /// Begins playback at the given offset, replacing any prior playback.
    async fn play(&mut self, path: &Path, start_at: f64) -> Result<()>;

    async fn stop(&mut self) -> Result<()>;
}

pub type PlayerBox = Box<dyn Player + Send + Sync>;
