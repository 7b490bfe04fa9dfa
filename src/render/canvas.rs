//! Canvas 2D surface
//!
//! Draws the classic sprites straight onto a `<canvas>`. Images that have not
//! finished loading are skipped for that frame.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{FrameView, RenderSurface};
use crate::sim::GamePhase;

const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/sourabhv/FlapPyBird/master/assets/sprites/";

const SCORE_FONT: &str = "20px 'Press Start 2P'";

/// All sprites the game draws
struct Sprites {
    background: HtmlImageElement,
    ground: HtmlImageElement,
    pipe: HtmlImageElement,
    game_over: HtmlImageElement,
    /// Wing up, mid, down
    bird: [HtmlImageElement; 3],
}

impl Sprites {
    fn load() -> Result<Self, JsValue> {
        Ok(Self {
            background: load_image("background-day.png")?,
            ground: load_image("base.png")?,
            pipe: load_image("pipe-green.png")?,
            game_over: load_image("gameover.png")?,
            bird: [
                load_image("yellowbird-upflap.png")?,
                load_image("yellowbird-midflap.png")?,
                load_image("yellowbird-downflap.png")?,
            ],
        })
    }
}

fn load_image(name: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(&format!("{}{}", SPRITE_BASE_URL, name));
    Ok(img)
}

#[inline]
fn ready(img: &HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}

/// Browser render surface backed by a 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let sprites = Sprites::load()?;
        log::info!("Canvas surface ready, sprites requested");
        Ok(Self { ctx, sprites })
    }

    fn draw(&self, img: &HtmlImageElement, x: f64, y: f64) {
        if ready(img) {
            let _ = self.ctx.draw_image_with_html_image_element(img, x, y);
        }
    }

    /// Flipped pipe hanging above the gap, upright pipe below it
    fn draw_obstacle(&self, x: f64, gap_top: f64, width: f64, gap: f64) {
        if !ready(&self.sprites.pipe) {
            return;
        }
        self.ctx.save();
        let _ = self.ctx.translate(x + width / 2.0, gap_top);
        let _ = self.ctx.rotate(PI);
        let _ = self
            .ctx
            .draw_image_with_html_image_element(&self.sprites.pipe, -width / 2.0, 0.0);
        self.ctx.restore();
        self.draw(&self.sprites.pipe, x, gap_top + gap);
    }
}

impl RenderSurface for CanvasSurface {
    fn present(&mut self, frame: &FrameView<'_>) {
        let tuning = frame.tuning;
        let width = tuning.canvas_width as f64;
        let height = tuning.canvas_height as f64;

        self.ctx.clear_rect(0.0, 0.0, width, height);
        if ready(&self.sprites.background) {
            let _ = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    &self.sprites.background,
                    0.0,
                    0.0,
                    width,
                    height,
                );
        }

        for obstacle in frame.obstacles.iter() {
            self.draw_obstacle(
                obstacle.x as f64,
                obstacle.gap_top as f64,
                tuning.obstacle_width as f64,
                tuning.gap_size as f64,
            );
        }

        self.draw(&self.sprites.ground, 0.0, tuning.ground_line() as f64);

        let bird = &self.sprites.bird[frame.anim_frame % self.sprites.bird.len()];
        self.draw(bird, frame.actor.pos.x as f64, frame.actor.pos.y as f64);

        self.ctx.set_fill_style_str("#fff");
        self.ctx.set_font(SCORE_FONT);
        let _ = self.ctx.fill_text(&frame.score.to_string(), 10.0, 25.0);

        if frame.phase == GamePhase::GameOver {
            let banner = &self.sprites.game_over;
            let x = (width - banner.width() as f64) / 2.0;
            self.draw(banner, x, height / 2.0 - 50.0);
        }
    }
}
