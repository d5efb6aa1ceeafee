//! Brick Pop entry point
//!
//! On the web this wires the canvas, keyboard, and animation frames to the
//! stage registry. Natively it runs the game headless and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use brick_pop::consts::TITLE_STAGE;
    use brick_pop::renderer::CanvasRenderer;
    use brick_pop::sim::{LayoutSpec, StageEvent};
    use brick_pop::{Frame, Game, Settings};

    /// Registry plus the canvas it draws to
    struct App {
        game: Game,
        renderer: CanvasRenderer,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Pop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::default();
        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);

        let renderer = CanvasRenderer::new(canvas).expect("no 2d context");
        let game =
            Game::standard(&settings, LayoutSpec::classic()).expect("built-in layout is valid");

        let app = Rc::new(RefCell::new(App { game, renderer }));
        {
            let mut guard = app.borrow_mut();
            let App { game, renderer } = &mut *guard;
            game.select_stage(TITLE_STAGE).expect("title stage registered");
            game.start(renderer).expect("title stage starts");
        }

        setup_keyboard(app.clone());
        request_animation_frame(app);
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Held keys repeat keydown; only the first edge matters
                if pressed && event.repeat() {
                    return;
                }
                let mut guard = app.borrow_mut();
                let App { game, renderer } = &mut *guard;
                if let Err(err) = game.handle_key(&event.code(), pressed, renderer) {
                    log::error!("{}", err);
                }
            });
            let _ = window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let frame = {
            let mut guard = app.borrow_mut();
            let App { game, renderer } = &mut *guard;
            let frame = game.frame(renderer);
            for event in game.drain_events() {
                if event == StageEvent::StageCleared {
                    log::info!("All bricks cleared");
                }
            }
            frame
        };

        match frame {
            Ok(Frame::Continue) => request_animation_frame(app),
            Ok(Frame::Halt) => log::info!("Frame loop ended"),
            Err(err) => log::error!("Frame skipped, loop stopped: {}", err),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Pop (native) starting...");

    if let Err(err) = native::run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;

    use brick_pop::consts::{GAME_STAGE, TITLE_STAGE};
    use brick_pop::sim::{LayoutSpec, StageEvent};
    use brick_pop::{Command, DrawRecorder, Frame, Game, Settings};

    const DEFAULT_FRAMES: u64 = 3_000;

    /// Usage: `brick-pop [settings.json] [layout.json] [frames]`
    pub fn run() -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args().skip(1);

        let settings = match args.next().filter(|a| a != "-") {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        let layout = match args.next().filter(|a| a != "-") {
            Some(path) => LayoutSpec::from_json(&std::fs::read_to_string(path)?)?,
            None => LayoutSpec::classic(),
        };
        let frames = match args.next() {
            Some(n) => n.parse()?,
            None => DEFAULT_FRAMES,
        };

        let mut renderer = DrawRecorder::new();
        let mut game = Game::standard(&settings, layout)?;
        game.select_stage(TITLE_STAGE)?;
        game.start(&mut renderer)?;
        log::info!("Title: {:?}", renderer.texts().collect::<Vec<_>>());

        game.dispatch(Command::SwitchStage(GAME_STAGE.to_string()), &mut renderer)?;

        let mut ran = 0;
        let mut destroyed = 0;
        let mut particles = 0;
        while ran < frames {
            let frame = game.frame(&mut renderer)?;
            ran += 1;
            for event in game.drain_events() {
                match event {
                    StageEvent::BrickDestroyed { .. } => destroyed += 1,
                    StageEvent::Burst { count, .. } => particles += count,
                    StageEvent::StageCleared => log::info!("All bricks cleared after {} frames", ran),
                }
            }
            if frame == Frame::Halt {
                break;
            }
        }

        log::info!(
            "Simulated {} frames, {} drawn, {} rects on the last frame",
            ran,
            renderer.frames(),
            renderer.rects().count()
        );
        log::info!("{} bricks destroyed, {} particles spawned", destroyed, particles);
        Ok(())
    }
}
