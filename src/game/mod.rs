//! Core game module containing shared components, resources, events, sets and constants.

mod components;
mod constants;
mod events;
mod resources;
mod sets;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use resources::*;
pub use sets::*;
