use serde::{Deserialize, Serialize};

/// Role of a body in the force model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// Stationary source of gravity (black holes). Never moves, never destroyed.
    Attractor,
    /// Moves under the pull of every attractor (stars, the ship).
    Attracted,
}

/// Ship engine state, read by the renderer to pick a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShipStatus {
    #[default]
    Idle,
    Thrusting,
}

impl ShipStatus {
    /// Numeric code written into flat buffers (0 = idle, 1 = thrusting).
    pub fn code(self) -> f32 {
        match self {
            ShipStatus::Idle => 0.0,
            ShipStatus::Thrusting => 1.0,
        }
    }
}

/// Intents held during one tick. Built by the input layer, consumed by `Ship::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShipInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
}

impl ShipInput {
    pub const NONE: ShipInput = ShipInput {
        rotate_left: false,
        rotate_right: false,
        thrust: false,
    };

    pub fn with_rotate_left(mut self, held: bool) -> Self {
        self.rotate_left = held;
        self
    }

    pub fn with_rotate_right(mut self, held: bool) -> Self {
        self.rotate_right = held;
        self
    }

    pub fn with_thrust(mut self, held: bool) -> Self {
        self.thrust = held;
        self
    }
}
