use crate::constants::{ADDITIVE_COMPOSITE_OP, NORMAL_COMPOSITE_OP};
use dotfield_core::{Blend, DotPainter, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`DotPainter`] over a 2D canvas context. Drawing happens in surface pixels;
/// the device pixel ratio is folded into the transform.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    width: f64,
    height: f64,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d, dpr: f64, width: f32, height: f32) -> Self {
        Self {
            ctx,
            dpr,
            width: width as f64,
            height: height as f64,
        }
    }
}

impl DotPainter for CanvasPainter {
    fn clear(&mut self, color: Rgba) {
        let _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        let _ = self.ctx.set_global_composite_operation(NORMAL_COMPOSITE_OP);
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn set_blend(&mut self, blend: Blend) {
        let op = match blend {
            Blend::Normal => NORMAL_COMPOSITE_OP,
            Blend::Additive => ADDITIVE_COMPOSITE_OP,
        };
        if let Err(e) = self.ctx.set_global_composite_operation(op) {
            log::error!("composite op {} error: {:?}", op, e);
        }
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                (diameter * 0.5) as f64,
                0.0,
                TAU,
            )
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }
}
