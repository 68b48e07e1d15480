//! Maze Chase entry point
//!
//! On the web: wires the canvas, keyboard and animation frames to the
//! simulation. Natively: runs a headless game with scripted input.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use maze_chase::renderer::{CanvasRenderer, Palette, draw};
    use maze_chase::sim::{GameEvent, GameState, tick};
    use maze_chase::{KeyState, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        keys: KeyState,
        renderer: CanvasRenderer,
        palette: Palette,
    }

    impl Game {
        /// One frame: freeze input, simulate, draw
        fn frame(&mut self) {
            let input = self.keys.snapshot(&self.state.tuning.bindings);
            for event in tick(&mut self.state, &input) {
                match event {
                    GameEvent::Won { score } => log::info!("You win! Score {}", score),
                    GameEvent::Lost { score } => log::info!("Game over. Score {}", score),
                    _ => {}
                }
            }
            draw(&self.state, &self.palette, &mut self.renderer);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Maze Chase starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Playfield follows the canvas size
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let tuning = Tuning::for_playfield(width, height);
        if let Err(e) = tuning.validate() {
            log::error!("Unusable canvas: {}", e);
            return;
        }

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(&tuning),
            keys: KeyState::new(),
            renderer: CanvasRenderer::new(ctx, width as f64, height as f64),
            palette: Palette::default(),
        }));

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Maze Chase running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.state.tuning.bindings.is_bound(&key) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
                g.keys.press(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - key-ups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), maze_chase::ConfigError> {
    use maze_chase::Tuning;

    env_logger::init();
    log::info!("Maze Chase (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in the browser");

    // Optional tuning file as the first argument
    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    headless::run(&tuning, 60 * 60);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use maze_chase::renderer::{CommandRecorder, FrameSnapshot, Palette, draw};
    use maze_chase::sim::{GameState, tick};
    use maze_chase::{KeyState, Tuning};

    /// Direction keys held in turn, switching every second
    const SCRIPT: [&str; 4] = ["ArrowRight", "ArrowDown", "ArrowLeft", "ArrowUp"];
    const FRAMES_PER_KEY: u64 = 60;

    pub fn run(tuning: &Tuning, max_frames: u64) {
        let mut state = GameState::new(tuning);
        let mut keys = KeyState::new();
        let mut recorder = CommandRecorder::default();
        let palette = Palette::default();

        for frame in 0..max_frames {
            let held = SCRIPT[(frame / FRAMES_PER_KEY) as usize % SCRIPT.len()];
            for key in SCRIPT {
                keys.set(key, key == held);
            }

            let input = keys.snapshot(&tuning.bindings);
            let events = tick(&mut state, &input);
            for event in &events {
                log::debug!("frame {}: {:?}", frame, event);
            }

            recorder.reset();
            draw(&state, &palette, &mut recorder);

            if state.is_over() {
                break;
            }
        }

        log::info!(
            "Finished after {} frames: outcome {:?}, score {}, lives {}, {} pickups left, {} draw calls in last frame",
            state.frame,
            state.outcome(),
            state.score,
            state.lives,
            state.pickups.len(),
            recorder.commands.len()
        );

        // Final frame, in the shapes a JS host would consume
        match FrameSnapshot::capture(&state).to_json() {
            Ok(json) => log::debug!("Final snapshot: {}", json),
            Err(e) => log::warn!("Snapshot serialization failed: {}", e),
        }
        match recorder.to_json() {
            Ok(json) => log::trace!("Final draw commands: {}", json),
            Err(e) => log::warn!("Draw command serialization failed: {}", e),
        }
    }
}
