//! Radar HUD core: data model, timing math, and hero-section state machines.
//!
//! Nothing in this crate touches a platform API. Hosts feed in timestamps and
//! viewport measurements; the renderer crate turns the results into draw calls.

pub mod anim;
pub mod config;
pub mod loader;
pub mod model;
pub mod typewriter;

pub use anim::{PingFrame, mesh_rotation_degrees, mesh_rotation_radians, ping_frame};
pub use config::HudConfig;
pub use loader::{LoaderPhase, LoadingSimulator, RandomSource};
pub use model::*;
pub use typewriter::{HeadlineCycler, TextReveal};
