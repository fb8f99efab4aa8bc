use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{id} is not a canvas: {:?}", e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext error: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// Size the canvas to the grid in CSS pixels with a devicePixelRatio backing
/// store. Returns the ratio used.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width_css: f32, height_css: f32) -> f64 {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio()).max(1.0);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{width_css}px"));
    let _ = style.set_property("height", &format!("{height_css}px"));
    let _ = style.set_property("touch-action", "none");
    canvas.set_width(((width_css as f64 * dpr) as u32).max(1));
    canvas.set_height(((height_css as f64 * dpr) as u32).max(1));
    dpr
}
