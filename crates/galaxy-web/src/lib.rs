pub mod runner;

pub use runner::GalaxyRunner;

use std::cell::RefCell;

use galaxy_engine::{GalaxyConfig, InputEvent, KeyBindings};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GalaxyRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GalaxyRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Galaxy not initialized. Call galaxy_init() first.");
        f(runner)
    })
}

/// Build the galaxy from a JSON config (empty string for defaults) and place the ship.
/// A rejected config is logged and replaced by the defaults.
#[wasm_bindgen]
pub fn galaxy_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = match GalaxyRunner::from_json(config_json) {
        Ok(runner) => runner,
        Err(err) => {
            log::error!("{} - falling back to the default galaxy", err);
            GalaxyRunner::new(GalaxyConfig::default()).expect("default galaxy config is valid")
        }
    };
    runner.spawn_default_ship();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("galaxy: initialized");
}

#[wasm_bindgen]
pub fn galaxy_tick(dt: f64) -> u32 {
    with_runner(|r| r.tick(dt))
}

#[wasm_bindgen]
pub fn galaxy_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn galaxy_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn galaxy_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Controls ----

#[wasm_bindgen]
pub fn galaxy_set_sim_speed(speed: f64) {
    with_runner(|r| r.set_sim_speed(speed));
}

#[wasm_bindgen]
pub fn galaxy_set_prediction_iterations(steps: u32) {
    with_runner(|r| r.set_prediction_iterations(steps as usize));
}

#[wasm_bindgen]
pub fn galaxy_set_key_bindings(rotate_left: u32, rotate_right: u32, thrust: u32) {
    with_runner(|r| {
        r.set_key_bindings(KeyBindings {
            rotate_left,
            rotate_right,
            thrust,
        })
    });
}

#[wasm_bindgen]
pub fn galaxy_set_show_path(show: bool) {
    with_runner(|r| r.set_show_path(show));
}

#[wasm_bindgen]
pub fn galaxy_set_black_hole_visible(index: u32, visible: bool) -> bool {
    with_runner(|r| r.set_black_hole_visible(index as usize, visible))
}

#[wasm_bindgen]
pub fn galaxy_repopulate(count: u32) {
    with_runner(|r| r.repopulate(count as usize));
}

#[wasm_bindgen]
pub fn galaxy_spawn_ship(x: f64, y: f64, size: f64) {
    with_runner(|r| r.spawn_ship(x, y, size));
}

#[wasm_bindgen]
pub fn galaxy_remove_ship() {
    with_runner(|r| r.remove_ship());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_stars_ptr() -> *const f32 {
    with_runner(|r| r.stars_ptr())
}

#[wasm_bindgen]
pub fn get_star_count() -> u32 {
    with_runner(|r| r.star_count())
}

#[wasm_bindgen]
pub fn get_black_holes_ptr() -> *const f32 {
    with_runner(|r| r.black_holes_ptr())
}

#[wasm_bindgen]
pub fn get_black_hole_count() -> u32 {
    with_runner(|r| r.black_hole_count())
}

#[wasm_bindgen]
pub fn get_ship_ptr() -> *const f32 {
    with_runner(|r| r.ship_ptr())
}

#[wasm_bindgen]
pub fn get_path_ptr() -> *const f32 {
    with_runner(|r| r.path_ptr())
}

#[wasm_bindgen]
pub fn get_path_len() -> u32 {
    with_runner(|r| r.path_len())
}

#[wasm_bindgen]
pub fn get_max_velocity() -> f64 {
    with_runner(|r| r.max_velocity())
}

#[wasm_bindgen]
pub fn get_alpha() -> f64 {
    with_runner(|r| r.alpha())
}

#[wasm_bindgen]
pub fn get_sim_speed() -> f64 {
    with_runner(|r| r.sim_speed())
}

#[wasm_bindgen]
pub fn get_tick_count() -> f64 {
    with_runner(|r| r.tick_count() as f64)
}
