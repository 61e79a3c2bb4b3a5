//! web-sys implementations of the platform collaborators
//!
//! Expected DOM: a `#game-canvas` canvas, `#score` and `#game-over`
//! elements, `#bg-music` and `#crash-sound` audio elements, and a
//! `#restart-btn` control (wired in the entry point).

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlAudioElement, HtmlCanvasElement,
    HtmlImageElement,
};

use super::{AudioSink, Canvas, Hud};
use crate::sim::Sprite;

/// 2D canvas renderer drawing the car sprites
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
    player: HtmlImageElement,
    enemy1: HtmlImageElement,
    enemy2: HtmlImageElement,
}

impl WebCanvas {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            player: load_image("assets/player-car.png")?,
            enemy1: load_image("assets/enemy-car1.png")?,
            enemy2: load_image("assets/enemy-car2.png")?,
        })
    }

    fn image(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::PlayerCar => &self.player,
            Sprite::EnemyCar1 => &self.enemy1,
            Sprite::EnemyCar2 => &self.enemy2,
        }
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

impl Canvas for WebCanvas {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        // A sprite that has not finished decoding just skips this frame
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                self.image(sprite),
                x as f64,
                y as f64,
                w as f64,
                h as f64,
            );
    }
}

/// DOM `<audio>` elements for the ambient loop and the crash cue
pub struct WebAudio {
    ambient: Option<HtmlAudioElement>,
    crash: Option<HtmlAudioElement>,
    ambient_volume: f64,
    /// Shared no-op rejection handler, alive for the whole session
    rejection_sink: Closure<dyn FnMut(JsValue)>,
}

impl WebAudio {
    /// Look up the audio elements; either may be absent, in which case
    /// that cue is disabled for the session.
    pub fn from_document(document: &Document, ambient_volume: f64) -> Self {
        let ambient = audio_element(document, "bg-music");
        let crash = audio_element(document, "crash-sound");
        if ambient.is_none() {
            log::warn!("#bg-music element missing - ambient loop disabled");
        }
        if crash.is_none() {
            log::warn!("#crash-sound element missing - crash cue disabled");
        }
        Self {
            ambient,
            crash,
            ambient_volume,
            rejection_sink: Closure::new(|_| {}),
        }
    }

    /// Kick off playback, discarding both the immediate error and the
    /// async rejection browsers raise under autoplay restrictions.
    fn play_silently(&self, el: &HtmlAudioElement) {
        if let Ok(promise) = el.play() {
            let _ = promise.catch(&self.rejection_sink);
        }
    }
}

fn audio_element(document: &Document, id: &str) -> Option<HtmlAudioElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

impl AudioSink for WebAudio {
    fn start_ambient(&mut self) {
        if let Some(ambient) = &self.ambient
            && ambient.paused()
        {
            ambient.set_volume(self.ambient_volume);
            self.play_silently(ambient);
        }
    }

    fn pause_ambient(&mut self) {
        if let Some(ambient) = &self.ambient {
            let _ = ambient.pause();
        }
    }

    fn rewind_ambient(&mut self) {
        if let Some(ambient) = &self.ambient {
            ambient.set_current_time(0.0);
        }
    }

    fn play_crash(&mut self) {
        if let Some(crash) = &self.crash {
            self.play_silently(crash);
        }
    }
}

/// Score label and game-over overlay
pub struct WebHud {
    score: Element,
    game_over: Element,
}

impl WebHud {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let score = document
            .get_element_by_id("score")
            .ok_or_else(|| JsValue::from_str("no #score element"))?;
        let game_over = document
            .get_element_by_id("game-over")
            .ok_or_else(|| JsValue::from_str("no #game-over element"))?;
        Ok(Self { score, game_over })
    }
}

impl Hud for WebHud {
    fn set_score(&mut self, text: &str) {
        self.score.set_text_content(Some(text));
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        let class = if visible { "" } else { "hidden" };
        let _ = self.game_over.set_attribute("class", class);
    }
}
