use glam::Vec2;
use web_sys as web;

/// Map a client-space point into surface pixels, given the element's client
/// rect and the logical surface size. `None` when the element has no area.
#[inline]
pub fn client_to_surface(
    client: Vec2,
    rect_min: Vec2,
    rect_size: Vec2,
    surface: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    Some((client - rect_min) * surface / rect_size)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_surface_px(
    ev: &web::MouseEvent,
    canvas: &web::HtmlCanvasElement,
    surface: Vec2,
) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        surface,
    )
}
