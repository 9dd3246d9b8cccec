mod action;
mod author;
mod content;
mod event;
mod gateway;
mod loading;
mod message;
mod outline;
mod player;
mod slash_commands;
mod textarea;
mod transport;

pub use action::*;
pub use author::*;
pub use content::*;
pub use event::*;
pub use gateway::*;
pub use loading::*;
pub use message::*;
pub use outline::*;
pub use player::*;
pub use slash_commands::*;
pub use textarea::*;
pub use transport::*;
