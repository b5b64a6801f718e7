mod env_version;
pub mod roster;

pub use env_version::env_version;
pub use roster::panel::roster_panel;
