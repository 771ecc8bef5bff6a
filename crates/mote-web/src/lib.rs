pub mod runner;

pub use runner::FieldRunner;

/// Generate all `#[wasm_bindgen]` exports for a particle field deployment.
///
/// This macro eliminates the per-deployment boilerplate by generating:
/// - `thread_local!` storage for the FieldRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (field_init, field_tick, input handlers,
///   data accessors, field_shutdown)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use mote_engine::*;
///
/// mod site;
/// use site::site_config;
///
/// mote_web::export_field!(site_config(), "my-background");
/// ```
///
/// # Arguments
///
/// - `$config_expr`: an expression yielding the deployment's `FieldConfig`
/// - `$field_name`: a string literal used in log messages
#[macro_export]
macro_rules! export_field {
    ($config_expr:expr, $field_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::FieldRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::FieldRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Field not initialized. Call field_init() first.");
                f(runner)
            })
        }

        fn install_runner(config: FieldConfig, width: f32, height: f32, seed: u32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = $crate::FieldRunner::new(config, width, height, seed as u64);
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $field_name);
        }

        #[wasm_bindgen]
        pub fn field_init(width: f32, height: f32, seed: u32) {
            install_runner($config_expr, width, height, seed);
        }

        #[wasm_bindgen]
        pub fn field_init_with_config(json: &str, width: f32, height: f32, seed: u32) {
            let config = match FieldConfig::from_json(json) {
                Ok(config) => config,
                Err(err) => {
                    // A broken page config should degrade, not blank the effect
                    let _ = console_log::init_with_level(log::Level::Info);
                    log::error!("{}: bad config, using defaults: {}", $field_name, err);
                    $config_expr
                }
            };
            install_runner(config, width, height, seed);
        }

        #[wasm_bindgen]
        pub fn field_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn field_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn field_touch_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::TouchMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn field_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn field_wave() {
            with_runner(|r| r.push_input(InputEvent::Wave));
        }

        /// Drop the runner. The wave schedule, clocks and particles go with
        /// it; nothing can fire after this returns.
        #[wasm_bindgen]
        pub fn field_shutdown() {
            RUNNER.with(|cell| {
                *cell.borrow_mut() = None;
            });
            log::info!("{}: shut down", $field_name);
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_circles_ptr() -> *const f32 {
            with_runner(|r| r.circles_ptr())
        }

        #[wasm_bindgen]
        pub fn get_circle_count() -> u32 {
            with_runner(|r| r.circle_count())
        }

        #[wasm_bindgen]
        pub fn get_segments_ptr() -> *const f32 {
            with_runner(|r| r.segments_ptr())
        }

        #[wasm_bindgen]
        pub fn get_segment_count() -> u32 {
            with_runner(|r| r.segment_count())
        }

        #[wasm_bindgen]
        pub fn get_field_width() -> f32 {
            with_runner(|r| r.field_width())
        }

        #[wasm_bindgen]
        pub fn get_field_height() -> f32 {
            with_runner(|r| r.field_height())
        }

        #[wasm_bindgen]
        pub fn get_particle_count() -> u32 {
            with_runner(|r| r.particle_count())
        }

        #[wasm_bindgen]
        pub fn get_pointer_moving() -> bool {
            with_runner(|r| r.pointer_moving())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_circles() -> u32 {
            with_runner(|r| r.max_circles())
        }

        #[wasm_bindgen]
        pub fn get_max_segments() -> u32 {
            with_runner(|r| r.max_segments())
        }

        #[wasm_bindgen]
        pub fn get_circle_floats() -> u32 {
            mote_engine::CIRCLE_FLOATS as u32
        }

        #[wasm_bindgen]
        pub fn get_segment_floats() -> u32 {
            mote_engine::SEGMENT_FLOATS as u32
        }
    };
}
