//! Skyflap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use skyflap::Tuning;
    use skyflap::render::{CanvasSurface, FrameView, RenderSurface};
    use skyflap::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: Option<CanvasSurface>,
        /// Flap queued by an input event since the last tick
        pending_flap: bool,
        // Track phase to react to game over once
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed, Tuning::default()),
                surface: None,
                pending_flap: false,
                last_phase: GamePhase::Idle,
            }
        }

        /// Run one simulation step for this display refresh
        fn update(&mut self, time: f64) {
            let input = TickInput {
                flap: std::mem::take(&mut self.pending_flap),
                now_ms: time,
            };
            tick(&mut self.state, &input);
        }

        /// Render the current frame (the last one stays up after game over)
        fn render(&mut self) {
            if let Some(ref mut surface) = self.surface {
                surface.present(&FrameView::from_state(&self.state));
            }
        }

        /// Show the game over screen when the phase flips
        fn update_dom(&mut self) {
            let current_phase = self.state.phase;
            if current_phase == self.last_phase {
                return;
            }
            self.last_phase = current_phase;
            if current_phase != GamePhase::GameOver {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            set_hidden(&document, "gameOverScreen", false);
            if let Some(el) = document.get_element_by_id("finalScore") {
                el.set_text_content(Some(&format!("Final Score: {}", self.state.score)));
            }
        }

        /// Start from the menu, or restart after a run
        fn begin(&mut self, restart: bool) {
            if restart || !self.state.start() {
                self.state.restart();
            }
            self.pending_flap = false;
            self.last_phase = self.state.phase;

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                set_hidden(&document, "menu", true);
                set_hidden(&document, "gameOverScreen", true);
            }
        }

        fn queue_flap(&mut self) {
            if self.state.phase == GamePhase::Running {
                self.pending_flap = true;
            }
        }
    }

    /// Add or remove the `hidden` class on an element
    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        match document.get_element_by_id(id) {
            Some(el) => {
                let classes = el.class_list();
                let _ = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
            }
            None => log::warn!("#{} not found", id),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Skyflap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        {
            let mut g = game.borrow_mut();
            canvas.set_width(g.state.tuning.canvas_width as u32);
            canvas.set_height(g.state.tuning.canvas_height as u32);
            match CanvasSurface::new(&canvas) {
                Ok(surface) => g.surface = Some(surface),
                Err(e) => log::error!("Canvas unavailable: {:?}", e),
            }
        }

        log::info!("Game initialized with seed: {}", seed);

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone());

        // Set up menu buttons
        setup_menu(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Skyflap running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.code().as_str(), "Space" | "ArrowUp") {
                    game.borrow_mut().queue_flap();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().queue_flap();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().queue_flap();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_menu(document: &Document, game: Rc<RefCell<Game>>) {
        // Start button
        if let Some(btn) = document.get_element_by_id("startBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().begin(false);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart button
        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().begin(true);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // How-to-play toggle
        if let Some(btn) = document.get_element_by_id("howToBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(el) = document.and_then(|d| d.get_element_by_id("instructions")) {
                    let _ = el.class_list().toggle("hidden");
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Autoplay toggle
        if let Some(btn) = document.get_element_by_id("autoplayBtn") {
            let label = btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let enabled = game.borrow_mut().state.toggle_autoplay();
                label.set_text_content(Some(&format!(
                    "Toggle Autoplay: {}",
                    if enabled { "ON" } else { "OFF" }
                )));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_dom();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use skyflap::Tuning;
    use skyflap::headless::{RunOptions, run};
    use skyflap::render::TraceSurface;

    env_logger::init();
    log::info!("Skyflap (native) starting...");

    let opts = RunOptions::parse();
    let tuning = match &opts.tuning {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path.display());
            tuning
        }
        None => Tuning::default(),
    };

    log::info!(
        "Headless run: seed {}, up to {} ticks, autoplay {}",
        opts.seed,
        opts.max_ticks,
        if opts.autoplay() { "ON" } else { "OFF" }
    );

    let mut surface = TraceSurface::new();
    let snapshot = run(&opts, tuning, &mut surface);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
