#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use dotfield_core::{DotField, FrameField};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod options;
mod pacing;
mod render;

use options::SurfaceOptions;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dotfield-web starting");
    Ok(())
}

/// One dot-field surface bound to a canvas. Call `destroy()` (or `free()`)
/// when the canvas goes away.
#[wasm_bindgen]
pub struct DotGrid {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    listeners: RefCell<events::Listeners>,
}

#[wasm_bindgen]
impl DotGrid {
    /// `options` is a JSON object of field options plus an optional `palette`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, options: Option<String>) -> Result<DotGrid, JsValue> {
        create(canvas_id, options.as_deref()).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Fetch a baked asset; on any failure the surface keeps running on
    /// pointer and pulse effects alone.
    #[wasm_bindgen(js_name = loadAsset)]
    pub fn load_asset(&self, url: String) {
        let target = Rc::downgrade(&self.frame_ctx);
        spawn_local(async move {
            match fetch_text(&url).await {
                Ok(payload) => apply_asset(&target, &payload),
                Err(e) => log::warn!("[asset] {:#}; continuing without baked frames", e),
            }
        });
    }

    #[wasm_bindgen(js_name = loadAssetText)]
    pub fn load_asset_text(&self, payload: &str) {
        apply_asset(&Rc::downgrade(&self.frame_ctx), payload);
    }

    pub fn destroy(&self) {
        if self.frame_loop.is_stopped() {
            return;
        }
        self.frame_loop.stop();
        self.listeners.borrow_mut().detach();
        log::info!("dotfield-web surface destroyed");
    }
}

impl Drop for DotGrid {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn create(canvas_id: &str, options: Option<&str>) -> anyhow::Result<DotGrid> {
    let SurfaceOptions { field, palette } = SurfaceOptions::parse(options)?;
    let canvas = dom::canvas_by_id(canvas_id)?;
    let (width, height) = field.surface_size();
    let dpr = dom::size_canvas(&canvas, width, height);
    let painter = render::CanvasPainter::new(dom::context_2d(&canvas)?, dpr, width, height);

    let pacer = pacing::FramePacer::new(field.frame_rate_fps);
    let (rows, columns) = (field.grid_rows, field.grid_columns);
    let field = DotField::new(field)?;
    log::info!("[surface] #{canvas_id} {rows}x{columns} grid at dpr {dpr:.2}");

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        painter,
        palette,
        pacer,
        origin: Instant::now(),
    }));
    let listeners = events::wire_input_handlers(&canvas, &frame_ctx);
    let frame_loop = frame::start_loop(frame_ctx.clone());

    Ok(DotGrid {
        frame_ctx,
        frame_loop,
        listeners: RefCell::new(listeners),
    })
}

fn apply_asset(target: &Weak<RefCell<frame::FrameContext>>, payload: &str) {
    let Some(frame_ctx) = target.upgrade() else {
        return;
    };
    let mut c = frame_ctx.borrow_mut();
    let (rows, columns) = (c.field.config().grid_rows, c.field.config().grid_columns);
    let frames = FrameField::decode_or_empty(payload, rows, columns);
    log::info!(
        "[asset] {} frames of {}x{}",
        frames.frame_count(),
        frames.rows(),
        frames.columns()
    );
    c.field.set_frames(frames);
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url}: {:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow!("fetch {url}: unexpected response {:?}", e))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {url}: HTTP {}", resp.status()));
    }
    let body = resp.text().map_err(|e| anyhow!("{:?}", e))?;
    JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("reading {url}: {:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow!("{url}: body is not text"))
}
