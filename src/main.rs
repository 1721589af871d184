//! Bug Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use bug_crossing::Settings;
    use bug_crossing::render::{Canvas, render};
    use bug_crossing::sim::{GameState, Input, Sprite, handle_input, tick};

    /// Longest frame step fed to the simulation (tab switches, hitches)
    const MAX_FRAME_DT: f32 = 0.1;

    /// HTML canvas 2D context plus the loaded images
    struct Canvas2d {
        ctx: CanvasRenderingContext2d,
        images: HashMap<Sprite, HtmlImageElement>,
    }

    impl Canvas2d {
        fn new(ctx: CanvasRenderingContext2d) -> Result<Self, JsValue> {
            let mut images = HashMap::new();
            for sprite in Sprite::ALL {
                let image = HtmlImageElement::new()?;
                image.set_src(sprite.path());
                images.insert(sprite, image);
            }
            ctx.set_font("20px sans-serif");
            Ok(Self { ctx, images })
        }

        fn clear(&self, width: f64, height: f64) {
            self.ctx.clear_rect(0.0, 0.0, width, height);
        }
    }

    impl Canvas for Canvas2d {
        fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2) {
            if let Some(image) = self.images.get(&sprite) {
                // Images still loading just don't show this frame
                let _ = self.ctx.draw_image_with_html_image_element(
                    image,
                    pos.x as f64,
                    pos.y as f64,
                );
            }
        }

        fn stroke_circle(&mut self, center: Vec2, radius: f32) {
            self.ctx.set_stroke_style_str("red");
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.stroke();
        }

        fn fill_text(&mut self, text: &str, pos: Vec2) {
            self.ctx.set_fill_style_str("white");
            let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        canvas: Canvas2d,
        /// Read every frame so resizes reach the simulation
        element: HtmlCanvasElement,
        last_time: Option<f64>,
    }

    impl Game {
        fn frame(&mut self, time_ms: f64) {
            let dt = match self.last_time {
                Some(last) => (((time_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
                None => 0.0,
            };
            self.last_time = Some(time_ms);

            let (width, height) = (self.element.width(), self.element.height());
            tick(&mut self.state, dt, width as f32);
            for event in self.state.drain_events() {
                log::debug!("{:?}", event);
            }

            self.canvas.clear(width as f64, height as f64);
            render(&self.state, &mut self.canvas, &self.settings);
        }
    }

    fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        window.request_animation_frame(f.as_ref().unchecked_ref())?;
        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let settings = Settings::default();
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        log::info!("Bug Crossing starting with seed {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::with_settings(seed, &settings),
            settings,
            canvas: Canvas2d::new(ctx)?,
            element: canvas,
            last_time: None,
        }));

        // Keyboard input
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = Input::from_key(&event.key()) {
                    event.prevent_default();
                    handle_input(&mut game.borrow_mut().state, input);
                }
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Frame loop
        let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next_cb = frame_cb.clone();
        *frame_cb.borrow_mut() = Some(Closure::new(move |time_ms: f64| {
            game.borrow_mut().frame(time_ms);
            if let Some(cb) = next_cb.borrow().as_ref() {
                if let Err(e) = request_animation_frame(cb) {
                    log::error!("Frame loop stopped: {:?}", e);
                }
            }
        }));
        if let Some(cb) = frame_cb.borrow().as_ref() {
            request_animation_frame(cb)?;
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session: pick a character, then walk toward the water
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use bug_crossing::Settings;
    use bug_crossing::render::{RecordingCanvas, render};
    use bug_crossing::sim::{GameEvent, GameState, Input, handle_input, tick};

    const FRAME_DT: f32 = 1.0 / 60.0;
    const FRAMES: u32 = 60 * 60;
    /// Frames between moves
    const MOVE_EVERY: u32 = 20;

    env_logger::init();
    log::info!("Bug Crossing (native) starting...");
    log::info!("Native mode runs a scripted headless session - build for wasm32 to play");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.seed_or(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
    );

    let mut state = GameState::with_settings(seed, &settings);
    if state.is_selecting() {
        handle_input(&mut state, Input::Right);
        handle_input(&mut state, Input::Confirm);
    }

    // Mostly up, with a sidestep now and then
    let script = [Input::Up, Input::Up, Input::Left, Input::Up, Input::Right, Input::Up];
    let mut canvas = RecordingCanvas::default();
    let (mut crossings, mut losses, mut gems, mut best) = (0u32, 0u32, 0u32, 0u32);

    for frame in 0..FRAMES {
        if frame % MOVE_EVERY == 0 {
            let step = (frame / MOVE_EVERY) as usize % script.len();
            handle_input(&mut state, script[step]);
        }
        tick(&mut state, FRAME_DT, settings.field_width);

        for event in state.drain_events() {
            match event {
                GameEvent::ReachedShore { .. } => crossings += 1,
                GameEvent::CaughtByEnemy { .. } => losses += 1,
                GameEvent::ItemCollected { .. } => gems += 1,
                _ => {}
            }
        }
        best = best.max(state.score());

        canvas.clear();
        render(&state, &mut canvas, &settings);
        if frame % 600 == 0 {
            log::debug!("Frame {}: {} draw calls", frame, canvas.calls.len());
        }
    }

    log::info!(
        "Session over after {} ticks: {} crossings, {} losses, {} gems, best score {}, final score {}",
        state.time_ticks,
        crossings,
        losses,
        gems,
        best,
        state.score()
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}
