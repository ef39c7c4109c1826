//! Egg Snake entry point
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

    use egg_snake::audio::{AudioManager, SoundEffect};
    use egg_snake::consts::*;
    use egg_snake::input::Key;
    use egg_snake::platform::LocalStore;
    use egg_snake::renderer::{CanvasRenderer, Renderer};
    use egg_snake::{App, AppEvent, Settings};

    /// Game instance holding all state
    struct Game {
        app: App<LocalStore>,
        renderer: CanvasRenderer,
        audio: AudioManager,
        accumulator: f64,
        last_time: f64,
    }

    impl Game {
        /// Run fixed frames for `dt` milliseconds of wall time
        fn update(&mut self, dt: f64) {
            let frame = FRAME_MS as f64;
            self.accumulator += dt.min(frame * MAX_SUBSTEPS as f64);

            let mut substeps = 0;
            while self.accumulator >= frame && substeps < MAX_SUBSTEPS {
                let events = self.app.frame();
                self.play(&events);
                self.accumulator -= frame;
                substeps += 1;
            }
        }

        fn render(&mut self) {
            let view = self.app.view();
            self.renderer.render(&view);
        }

        fn press(&mut self, key: Key) {
            let seed = js_sys::Date::now() as u64;
            let events = self.app.press(key, seed);
            self.play(&events);
        }

        fn play(&self, events: &[AppEvent]) {
            for event in events {
                if let AppEvent::LevelUp(level) = event {
                    log::info!("Level {}", level);
                }
                if let Some(effect) = SoundEffect::for_event(event) {
                    self.audio.play(effect);
                }
            }
        }
    }

    fn canvas(document: &web_sys::Document) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(el) = document.get_element_by_id("canvas") {
            return Ok(el.dyn_into()?);
        }

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id("canvas");
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&canvas)?;
        Ok(canvas)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Egg Snake starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let settings = Settings::load(&LocalStore);
        let canvas = canvas(&document)?;
        canvas.set_width(settings.canvas_size);
        canvas.set_height(settings.canvas_size);

        let renderer = CanvasRenderer::new(&canvas, settings.show_level)
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;

        let game = Rc::new(RefCell::new(Game {
            app: App::new(settings.grid(), LocalStore),
            renderer,
            audio: AudioManager::new(settings.effective_volume()),
            accumulator: 0.0,
            last_time: 0.0,
        }));

        setup_input_handlers(&window, game.clone())?;
        request_animation_frame(game);

        log::info!(
            "Egg Snake running on a {}x{} board",
            settings.board_width,
            settings.board_height
        );
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = Key::from_code(&event.code());
            if key != Key::Other {
                event.prevent_default();
            }
            game.borrow_mut().press(key);
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                FRAME_MS as f64
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: a greedy bot plays one round on the text renderer
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use egg_snake::consts::FRAME_MS;
    use egg_snake::input::Key;
    use egg_snake::platform::MemoryStore;
    use egg_snake::renderer::{Frame, Renderer, TextRenderer};
    use egg_snake::sim::{Direction, World};
    use egg_snake::{App, AppEvent, Scene, Settings};

    /// Step toward the nearest egg without turning back
    fn choose(world: &World, last: Option<Direction>) -> Direction {
        let head = world.snake().head;
        let target = world
            .eggs()
            .iter()
            .min_by_key(|egg| (**egg - head).abs().element_sum())
            .copied()
            .unwrap_or(head);

        Direction::ALL
            .into_iter()
            .filter(|d| last.is_none_or(|l| !d.is_opposite(l)))
            .min_by_key(|d| (target - (head + d.delta())).abs().element_sum())
            .unwrap_or(Direction::Up)
    }

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);
    log::info!("Egg Snake (native) starting with seed {}", seed);

    let settings = Settings::default();
    let mut app = App::new(settings.grid(), MemoryStore::new());
    let mut renderer = TextRenderer::new();
    app.press(Key::Space, seed);

    let mut last = None;
    let mut frames: u64 = 0;
    // Ten minutes of game time
    let max_frames = 10 * 60 * 1000 / FRAME_MS as u64;
    while frames < max_frames {
        let mut events = Vec::new();
        if let Scene::Playing(session) = app.scene() {
            let step = choose(session.world(), last.or(Some(Direction::Up)));
            if last != Some(step) {
                last = Some(step);
                events.extend(app.press(Key::Arrow(step), seed));
            }
        }
        events.extend(app.frame());
        frames += 1;

        for event in &events {
            match event {
                AppEvent::LevelUp(level) => log::info!("level {} at frame {}", level, frames),
                AppEvent::GameOver { score } => log::info!("game over with {} points", score),
                _ => {}
            }
        }

        if let Scene::GameOver(screen) = app.scene() {
            if screen.is_showing_results() {
                break;
            }
        }
    }

    if let Scene::Playing(session) = app.scene() {
        renderer.render(&app.view());
        println!("{}", renderer.output());
        log::info!("still alive after {} steps", session.ticks());
        return;
    }
    if let Scene::GameOver(screen) = app.scene() {
        renderer.render(&Frame::Play {
            world: screen.world(),
            level: screen.level(),
            grid: settings.grid(),
        });
        println!("{}", renderer.output());
    }
    renderer.render(&app.view());
    println!("{}", renderer.output());
}
