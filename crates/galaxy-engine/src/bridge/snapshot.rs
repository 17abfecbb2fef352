//! Flat per-frame buffers the JS renderer reads straight out of wasm memory.
//!
//! Layout (all values f32 / 4 bytes):
//! ```text
//! [Stars:       star_count × 4 floats]      x, y, size, brightness
//! [Black holes: black_hole_count × 4 floats] x, y, size, visible
//! [Ship:        9 floats]                   present, x, y, angle, size, status, show_path, path_len, speed
//! [Path:        path_len × 2 floats]        x, y
//! ```
//!
//! Positions are narrowed from the simulation's f64 to f32 here and nowhere else.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::body::Body;
use crate::core::galaxy::Galaxy;

/// One star as the renderer draws it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Speed relative to the fastest star this tick, in [0, 1].
    pub brightness: f32,
}

impl StarInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BlackHoleInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// 1.0 when the renderer should draw it.
    pub visible: f32,
}

impl BlackHoleInstance {
    pub const FLOATS: usize = 4;
}

/// Ship pose and preview metadata. `present` is 0.0 when no ship exists,
/// in which case every other field is zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ShipState {
    pub present: f32,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub size: f32,
    /// `ShipStatus::code`: 0 idle, 1 thrusting.
    pub status: f32,
    pub show_path: f32,
    /// Number of points in the path buffer.
    pub path_len: f32,
    /// Velocity magnitude.
    pub speed: f32,
}

impl ShipState {
    pub const FLOATS: usize = 9;
}

fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Reusable buffers rebuilt from a `Galaxy` once per frame.
#[derive(Debug, Default)]
pub struct SnapshotBuffers {
    stars: Vec<StarInstance>,
    black_holes: Vec<BlackHoleInstance>,
    ship: ShipState,
    path: Vec<Vec2>,
}

impl SnapshotBuffers {
    pub fn new() -> Self {
        Self {
            stars: Vec::with_capacity(512),
            ..Self::default()
        }
    }

    /// Overwrite every buffer with the galaxy's current state.
    ///
    /// The path is copied only while the ship's `show_path` is on, the
    /// preview itself is kept up to date either way.
    pub fn rebuild(&mut self, galaxy: &Galaxy) {
        let max_velocity = galaxy.max_velocity();

        self.stars.clear();
        self.stars.extend(galaxy.stars().iter().map(|star| {
            let pos = star.pos().as_vec2();
            StarInstance {
                x: pos.x,
                y: pos.y,
                size: star.size() as f32,
                brightness: star.brightness(max_velocity) as f32,
            }
        }));

        self.black_holes.clear();
        self.black_holes.extend(galaxy.black_holes().iter().map(|hole| {
            let pos = hole.pos().as_vec2();
            BlackHoleInstance {
                x: pos.x,
                y: pos.y,
                size: hole.size() as f32,
                visible: flag(hole.show),
            }
        }));

        self.path.clear();
        self.ship = match galaxy.ship() {
            Some(ship) => {
                if ship.show_path {
                    self.path.extend(ship.path().iter().map(|p| p.as_vec2()));
                }
                let pos = ship.pos().as_vec2();
                ShipState {
                    present: 1.0,
                    x: pos.x,
                    y: pos.y,
                    angle: ship.angle() as f32,
                    size: ship.size() as f32,
                    status: ship.status().code(),
                    show_path: flag(ship.show_path),
                    path_len: self.path.len() as f32,
                    speed: ship.speed() as f32,
                }
            }
            None => ShipState::default(),
        };
    }

    pub fn stars(&self) -> &[StarInstance] {
        &self.stars
    }

    pub fn black_holes(&self) -> &[BlackHoleInstance] {
        &self.black_holes
    }

    pub fn ship(&self) -> &ShipState {
        &self.ship
    }

    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Star buffer viewed as raw floats.
    pub fn star_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.stars)
    }

    pub fn path_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.path)
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn stars_ptr(&self) -> *const f32 {
        self.star_floats().as_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.stars.len() as u32
    }

    pub fn black_holes_ptr(&self) -> *const f32 {
        self.black_holes.as_ptr() as *const f32
    }

    pub fn black_hole_count(&self) -> u32 {
        self.black_holes.len() as u32
    }

    pub fn ship_ptr(&self) -> *const f32 {
        &self.ship as *const ShipState as *const f32
    }

    pub fn path_ptr(&self) -> *const f32 {
        self.path_floats().as_ptr()
    }

    pub fn path_len(&self) -> u32 {
        self.path.len() as u32
    }
}
