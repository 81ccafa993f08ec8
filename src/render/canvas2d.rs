use crate::constants::LINK_LINE_WIDTH;
use crate::core::constants::LINK_COLOR;
use crate::core::field2d::{Link, ParticleField};
use std::f64::consts::TAU;
use web_sys as web;

/// Immediate-mode drawing of the flat particle field.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    // "rgba(r, g, b," prefixes, one per palette entry
    fill_prefixes: Vec<String>,
    link_prefix: String,
    links: Vec<Link>,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d, palette: &[[u8; 3]]) -> Self {
        Self {
            ctx,
            fill_prefixes: palette.iter().map(|c| rgba_prefix(*c)).collect(),
            link_prefix: rgba_prefix(LINK_COLOR),
            links: Vec::new(),
        }
    }

    pub fn draw(&mut self, field: &ParticleField) {
        let size = field.size();
        self.ctx
            .clear_rect(0.0, 0.0, size.x as f64, size.y as f64);

        for p in field.particles() {
            let look = p.appearance();
            let prefix = self
                .fill_prefixes
                .get(p.color)
                .map(String::as_str)
                .unwrap_or("rgba(255, 255, 255,");
            let (x, y) = (p.pos.x as f64, p.pos.y as f64);
            self.disc(x, y, look.radius as f64, prefix, look.alpha);
            self.disc(x, y, look.glow_radius as f64, prefix, look.glow_alpha);
        }

        field.links(&mut self.links);
        if self.links.is_empty() {
            return;
        }
        let particles = field.particles();
        self.ctx.set_line_width(LINK_LINE_WIDTH);
        for link in &self.links {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            self.ctx.begin_path();
            self.ctx
                .set_stroke_style_str(&format!("{} {:.3})", self.link_prefix, link.alpha));
            self.ctx.move_to(a.pos.x as f64, a.pos.y as f64);
            self.ctx.line_to(b.pos.x as f64, b.pos.y as f64);
            self.ctx.stroke();
        }
    }

    fn disc(&self, x: f64, y: f64, radius: f64, prefix: &str, alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx
            .set_fill_style_str(&format!("{} {:.3})", prefix, alpha));
        self.ctx.fill();
    }
}

fn rgba_prefix([r, g, b]: [u8; 3]) -> String {
    format!("rgba({}, {}, {},", r, g, b)
}
