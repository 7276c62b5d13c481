pub mod runner;

pub use runner::{SceneRunner, SharedBufferRenderer};

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_tick, input, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// orbit_web::export_scene!("my-scene");
/// // or with a JSON scene config baked in:
/// orbit_web::export_scene!("my-scene", include_str!("../scene.json"));
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`.
#[macro_export]
macro_rules! export_scene {
    ($scene_name:literal) => {
        $crate::export_scene!($scene_name, "");
    };

    ($scene_name:literal, $config_json:expr) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn scene_init() -> Result<(), JsError> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::SceneRunner::from_json($config_json).map_err(|err| {
                log::error!("{}: init failed: {}", $scene_name, err);
                JsError::new(&err.to_string())
            })?;
            runner.start();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized", $scene_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn scene_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32, device_pixel_ratio: f32) {
            with_runner(|r| r.resize(width, height, device_pixel_ratio));
        }

        #[wasm_bindgen]
        pub fn scene_rotate(dx: f32, dy: f32) {
            with_runner(|r| r.rotate(dx, dy));
        }

        #[wasm_bindgen]
        pub fn scene_zoom(factor: f32) {
            with_runner(|r| r.zoom(factor));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_buffer_ptr() -> *const f32 {
            with_runner(|r| r.buffer_ptr())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_sphere_count() -> u32 {
            with_runner(|r| r.sphere_count())
        }

        #[wasm_bindgen]
        pub fn get_elapsed() -> f32 {
            with_runner(|r| r.elapsed())
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter())
        }

        #[wasm_bindgen]
        pub fn get_scene_config() -> String {
            with_runner(|r| r.scene_config_json())
        }

        #[wasm_bindgen]
        pub fn get_last_error() -> String {
            with_runner(|r| r.last_error())
        }
    };
}
