//! Bearer token models and the shared token holder.

pub mod holder;
pub mod secret;

pub use holder::*;
pub use secret::*;
