//! Demo behaviors composed over the scripting surface

pub mod player;
pub mod spawner;
pub mod spinner;

pub use player::PlayerController;
pub use spawner::Spawner;
pub use spinner::Spinner;
