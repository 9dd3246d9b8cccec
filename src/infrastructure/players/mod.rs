pub mod ffplay;
pub mod noop;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::PlayerBox;
use crate::domain::models::PlayerName;

pub struct PlayerManager {}

impl PlayerManager {
    pub fn get(name: PlayerName) -> Result<PlayerBox> {
        if name == PlayerName::Ffplay {
            return Ok(Box::<ffplay::Ffplay>::default());
        }

        if name == PlayerName::None {
            return Ok(Box::<noop::NoopPlayer>::default());
        }

        bail!(format!("No player implemented for {name}"))
    }
}
