//! Slingshot entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use glam::Vec2;
    use slingshot::platform::{InputQueue, PointerEvent};
    use slingshot::renderer::{RenderState, scene};
    use slingshot::sim::{GameEvent, GamePhase, GameState, Snapshot, Tuning, fit_canvas, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: InputQueue,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        fn new(seed: u64, canvas: HtmlCanvasElement, tuning: Tuning) -> Self {
            let state = GameState::new(
                seed,
                canvas.width() as f32,
                canvas.height() as f32,
                tuning,
            );
            Self {
                state,
                render_state: None,
                input: InputQueue::new(),
                canvas,
            }
        }

        /// One simulation tick per animation frame
        fn update(&mut self) {
            let input = self.input.take();
            tick(&mut self.state, &input);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::TargetHit { .. } => pop_hud_level(),
                    GameEvent::GameOver { level, edge } => {
                        log::debug!("Run ended at level {} ({:?})", level, edge);
                    }
                    _ => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, snap: &Snapshot) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene::build(snap);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Refit the canvas to the window and relayout
        fn resize(&mut self, window_w: f32, window_h: f32) {
            let (width, height) = fit_canvas(window_w, window_h);
            if (width, height) == (self.canvas.width(), self.canvas.height()) {
                return;
            }
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.state.resize(width as f32, height as f32);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(snap: &Snapshot) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(el) = document.query_selector("#hud-level .hud-value").ok().flatten() {
            let text = snap.level.to_string();
            if el.text_content().as_deref() != Some(text.as_str()) {
                el.set_text_content(Some(&text));
            }
        }

        if let Some(el) = document.get_element_by_id("game-over") {
            if snap.phase == GamePhase::GameOver {
                let _ = el.set_attribute("class", "");
                if let Some(level_el) = document.get_element_by_id("final-level") {
                    level_el.set_text_content(Some(&snap.level.to_string()));
                }
            } else {
                let _ = el.set_attribute("class", "hidden");
            }
        }
    }

    /// Restart the level counter's pop animation
    fn pop_hud_level() {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("hud-level"))
        {
            let _ = el.set_attribute("class", "hud-item");
            // Force a layout so the browser sees the class removal
            let _ = el.get_bounding_client_rect();
            let _ = el.set_attribute("class", "hud-item pop");
        }
    }

    fn window_size(window: &web_sys::Window) -> (f32, f32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (w as f32, h as f32)
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Slingshot starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Letterbox to 3:2 inside the window
        let (window_w, window_h) = window_size(&window);
        let (width, height) = fit_canvas(window_w, window_h);
        canvas.set_width(width);
        canvas.set_height(height);

        let tuning = Tuning::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, canvas.clone(), tuning)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_err)?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, &canvas, game.clone());
        setup_resize_handler(&window, game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Slingshot running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        // Press: grab the ball, or restart after game over. Only the primary
        // pointer plays; a second finger is ignored.
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                if !event.is_primary() {
                    return;
                }
                event.prevent_default();
                // Keep receiving moves while dragging past the canvas edge
                let _ = canvas_clone.set_pointer_capture(event.pointer_id());
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().input.push(PointerEvent::Down(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drag
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                if !event.is_primary() {
                    return;
                }
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().input.push(PointerEvent::Move(pos));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release anywhere on the page, including outside the canvas
        for name in ["pointerup", "pointercancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                if event.is_primary() {
                    game.borrow_mut().input.push(PointerEvent::Up);
                }
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (w, h) = window_size(&window);
            game.borrow_mut().resize(w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            let snap = g.state.snapshot();
            g.render(&snap);
            update_hud(&snap);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Slingshot failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slingshot (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    headless_demo(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted pull and release on the reference surface, printing the final snapshot
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo(seed: u64) {
    use glam::Vec2;
    use slingshot::consts::{REF_HEIGHT, REF_WIDTH};
    use slingshot::platform::{InputQueue, PointerEvent};
    use slingshot::sim::{GamePhase, GameState, Tuning, tick};

    const MAX_FLIGHT_TICKS: u32 = 600;

    let mut state = GameState::new(seed, REF_WIDTH, REF_HEIGHT, Tuning::load());
    let mut input = InputQueue::new();

    // Aim back and slightly down so the shot arcs up toward the target
    let anchor = state.anchor_pos();
    let toward = (state.target.center() - anchor).normalize_or_zero();
    input.push(PointerEvent::Down(anchor));
    input.push(PointerEvent::Move(anchor - toward * 120.0 + Vec2::new(0.0, 30.0)));
    tick(&mut state, &input.take());
    input.push(PointerEvent::Up);
    tick(&mut state, &input.take());

    let mut ticks = 0;
    while state.phase == GamePhase::Launched && ticks < MAX_FLIGHT_TICKS {
        tick(&mut state, &input.take());
        ticks += 1;
    }

    for event in state.drain_events() {
        log::info!("{:?}", event);
    }
    println!("{}", state.snapshot().to_json());
}
