//! Lane Rush entry point
//!
//! Handles platform-specific initialization and schedules the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use lane_rush::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use lane_rush::platform::web::{WebAudio, WebCanvas, WebHud};
    use lane_rush::sim::GamePhase;
    use lane_rush::{Session, Settings};

    type WebSession = Session<WebCanvas, WebAudio, WebHud>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Lane Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no #game-canvas element")
            .dyn_into()?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        let renderer = WebCanvas::new(&canvas)?;
        let audio = WebAudio::from_document(&document, settings.clamped_volume());
        let hud = WebHud::from_document(&document)?;

        let session = Rc::new(RefCell::new(Session::new(seed, renderer, audio, hud)));
        log::info!("session initialized with seed {seed}");

        setup_keyboard(session.clone());
        setup_touch(session.clone());
        setup_restart_button(session.clone());
        if settings.mute_on_blur {
            setup_blur_mute(session.clone());
        }
        settings.save();

        schedule_frame(session);
        Ok(())
    }

    /// Schedule exactly one animation frame.
    ///
    /// The chain stops by simply not rescheduling once the session
    /// reports game over; `reset` re-enters by scheduling a fresh frame.
    fn schedule_frame(session: Rc<RefCell<WebSession>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            let keep_running = session.borrow_mut().frame();
            if keep_running {
                schedule_frame(session);
            }
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(session: Rc<RefCell<WebSession>>) {
        let window = web_sys::window().unwrap();
        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                session.borrow_mut().key_event(&event.key(), true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                session.borrow_mut().key_event(&event.key(), false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch(session: Rc<RefCell<WebSession>>) {
        let window = web_sys::window().unwrap();
        let start_x = Rc::new(RefCell::new(0.0f32));
        {
            let start_x = start_x.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    *start_x.borrow_mut() = touch.client_x() as f32;
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    let delta = touch.client_x() as f32 - *start_x.borrow();
                    session.borrow_mut().swipe(delta);
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(session: Rc<RefCell<WebSession>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                // A mid-run restart reuses the live frame chain; only a
                // terminal session needs the loop rescheduled
                let was_over = session.borrow().state().phase == GamePhase::GameOver;
                session.borrow_mut().reset();
                if was_over {
                    schedule_frame(session.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("#restart-btn element missing - restart control disabled");
        }
    }

    fn setup_blur_mute(session: Rc<RefCell<WebSession>>) {
        let window = web_sys::window().unwrap();
        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                session.borrow_mut().handle_blur();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                session.borrow_mut().handle_focus();
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        log::error!("startup failed: {err:?}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_rush::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Lane Rush (native) starting...");
    log::info!("Native mode is a headless smoke run - serve the wasm build for the playable game");

    let mut state = GameState::new(0xC0FFEE);
    let input = TickInput::default();
    for _ in 0..600 {
        for event in tick(&mut state, &input) {
            log::info!("{event:?}");
        }
    }

    let outcome = match state.phase {
        GamePhase::Running => "still running",
        GamePhase::GameOver => "crashed",
    };
    println!(
        "600 ticks: score {}, {} cars on the road, speed {}, {}",
        state.score,
        state.obstacles.len(),
        state.obstacle_speed,
        outcome
    );
}
