pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{
    BlackHoleConfig, GalaxyConfig, PhysicsConfig, ShipConfig,
    MAX_PREDICTION_ITERATIONS,
};
pub use api::error::GalaxyError;
pub use api::types::{BodyKind, ShipInput, ShipStatus};
pub use components::black_hole::BlackHole;
pub use components::body::Body;
pub use components::ship::{Ship, ShipDynamics, Trajectory};
pub use components::star::Star;
pub use crate::core::galaxy::Galaxy;
pub use crate::core::time::FixedTimestep;
pub use crate::core::vector::{Bound, Vector2, VectorExt};
pub use systems::gravity::{ForceLaw, Response};
pub use systems::spawn::StarSpawner;
pub use input::queue::{InputEvent, InputQueue};
pub use input::keys::{KeyBindings, KeyState};
pub use bridge::snapshot::{BlackHoleInstance, ShipState, SnapshotBuffers, StarInstance};
