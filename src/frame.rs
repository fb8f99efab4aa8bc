use crate::pacing::FramePacer;
use crate::render::CanvasPainter;
use dotfield_core::{paint_field, DotField, Palette};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: DotField,
    pub painter: CanvasPainter,
    pub palette: Palette,
    pub pacer: FramePacer,
    pub origin: Instant,
}

impl FrameContext {
    /// Milliseconds on the clock shared by ticks and input events.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    pub fn frame(&mut self) {
        let now = self.now_ms();
        let steps = self.pacer.steps(now);
        let results = self.field.tick(now, steps);
        paint_field(results, &self.palette, &mut self.painter);
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    stopped: Rc<Cell<bool>>,
    request_id: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let window = web::window()?;
    let guard = tick.borrow();
    let cb = guard.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let stopped = Rc::new(Cell::new(false));
    let request_id = Rc::new(Cell::new(None));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let stopped_tick = stopped.clone();
    let request_id_tick = request_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_id_tick.set(None);
        if stopped_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        // Checked again before rescheduling
        if !stopped_tick.get() {
            request_id_tick.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut()>));
    request_id.set(request_frame(&tick));

    FrameLoop {
        stopped,
        request_id,
        tick,
    }
}

impl FrameLoop {
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let Some(id) = self.request_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // Drops the closure and with it the loop's self-reference.
        self.tick.borrow_mut().take();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}
