pub mod gateway;
pub mod players;
