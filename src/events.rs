use crate::constants::{POINTER_DOWN_EVENT, POINTER_LEAVE_EVENT, POINTER_MOVE_EVENT};
use crate::frame::FrameContext;
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Listeners registered on the canvas, kept so teardown can remove them.
pub struct Listeners {
    canvas: web::HtmlCanvasElement,
    handlers: Vec<(&'static str, PointerClosure)>,
}

impl Listeners {
    pub fn detach(&mut self) {
        for (name, cb) in self.handlers.drain(..) {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
    }
}

pub fn wire_input_handlers(
    canvas: &web::HtmlCanvasElement,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> Listeners {
    let mut listeners = Listeners {
        canvas: canvas.clone(),
        handlers: Vec::with_capacity(3),
    };
    let surface = {
        let (w, h) = frame_ctx.borrow().field.config().surface_size();
        Vec2::new(w, h)
    };

    let ctx = frame_ctx.clone();
    let cv = canvas.clone();
    add(&mut listeners, POINTER_MOVE_EVENT, move |ev: web::PointerEvent| {
        let Some(pos) = input::pointer_surface_px(&ev, &cv, surface) else {
            return;
        };
        let mut c = ctx.borrow_mut();
        let now = c.now_ms();
        c.field.pointer_moved(pos.x, pos.y, now);
    });

    let ctx = frame_ctx.clone();
    let cv = canvas.clone();
    add(&mut listeners, POINTER_DOWN_EVENT, move |ev: web::PointerEvent| {
        let Some(pos) = input::pointer_surface_px(&ev, &cv, surface) else {
            return;
        };
        let mut c = ctx.borrow_mut();
        let now = c.now_ms();
        c.field.clicked(pos.x, pos.y, now);
        ev.prevent_default();
    });

    let ctx = frame_ctx.clone();
    add(&mut listeners, POINTER_LEAVE_EVENT, move |_ev: web::PointerEvent| {
        ctx.borrow_mut().field.pointer_left();
    });

    listeners
}

fn add(
    listeners: &mut Listeners,
    name: &'static str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    if let Err(e) = listeners
        .canvas
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
    {
        log::error!("{} listener error: {:?}", name, e);
        return;
    }
    listeners.handlers.push((name, closure));
}
