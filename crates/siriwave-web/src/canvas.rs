use glam::DVec2;
use siriwave_core::{Composite, DrawingSurface, Paint, Rect, Rgba};
use web_sys as web;

/// [`DrawingSurface`] over a browser 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, paint: &siriwave_core::LinearGradient) -> web::CanvasGradient {
        let g = self
            .ctx
            .create_linear_gradient(paint.start.x, paint.start.y, paint.end.x, paint.end.y);
        for stop in &paint.stops {
            if let Err(e) = g.add_color_stop(stop.offset as f32, &stop.color.to_css()) {
                log::warn!("gradient stop {:.2} rejected: {:?}", stop.offset, e);
            }
        }
        g
    }
}

fn composite_name(op: Composite) -> &'static str {
    match op {
        Composite::SourceOver => "source-over",
        Composite::Lighter => "lighter",
        Composite::DestinationOut => "destination-out",
    }
}

impl DrawingSurface for CanvasSurface {
    fn set_composite(&mut self, op: Composite) {
        _ = self.ctx.set_global_composite_operation(composite_name(op));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: DVec2) {
        self.ctx.line_to(p.x, p.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear(gradient) => {
                let g = self.gradient(gradient);
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
        }
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}
