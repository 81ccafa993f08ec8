use crate::constants::{BACKGROUND_CANVAS_ID, VARIANT_ATTRIBUTE};
use crate::context::GreetingContext;
use crate::core::{AmbientInput, Attachment, Field, FieldConfig, LoopToken};
use crate::dom;
use crate::events;
use crate::render::{CanvasPainter, GpuState};
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

enum Surface {
    Canvas(CanvasPainter),
    Gpu(GpuState),
}

/// The animated page background: one entity field, its ambient input and
/// the surface it draws to.
pub struct Background {
    field: Field,
    ambient: Rc<RefCell<AmbientInput>>,
    surface: Surface,
    canvas: web::HtmlCanvasElement,
}

impl Background {
    pub fn frame(&mut self, dt_sec: f32) {
        self.field.tick(&mut self.ambient.borrow_mut(), dt_sec);
        match (&mut self.surface, &self.field) {
            (Surface::Canvas(painter), Field::Flat(field)) => painter.draw(field),
            (Surface::Gpu(gpu), Field::Volume(field)) => {
                gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
                if let Err(e) = gpu.render(field) {
                    log::error!("[background] render error: {:?}", e);
                }
            }
            _ => {}
        }
    }

    /// Resize the surface to the new viewport and rebuild the field for it.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        let (fw, fh) = match self.surface {
            Surface::Canvas(_) => {
                self.canvas.set_width(width.max(0.0) as u32);
                self.canvas.set_height(height.max(0.0) as u32);
                (width, height)
            }
            Surface::Gpu(_) => {
                dom::sync_canvas_backing_size(&self.canvas);
                (self.canvas.width() as f32, self.canvas.height() as f32)
            }
        };
        self.field.resize(fw, fh, rng);
        self.ambient.borrow_mut().set_viewport(width, height);
        log::info!(
            "[background] resized to {:.0}x{:.0}, {} entities",
            width,
            height,
            self.field.len()
        );
    }
}

/// Bind the background to its canvas and start its frame loop.
///
/// A missing canvas is reported as `TargetNotFound`; failures after the
/// canvas was found are errors.
pub async fn attach(ctx: &GreetingContext) -> anyhow::Result<Attachment<LoopToken>> {
    let canvas =
        match dom::element_by_id::<web::HtmlCanvasElement>(&ctx.document, BACKGROUND_CANVAS_ID) {
            Attachment::Attached(c) => c,
            Attachment::TargetNotFound(s) => return Ok(Attachment::TargetNotFound(s)),
        };
    let variant = canvas.get_attribute(VARIANT_ATTRIBUTE);
    let config = FieldConfig::from_variant(variant.as_deref());
    let (vw, vh) = dom::viewport_size(&ctx.window);

    let (canvas, surface, config) = if config.is_3d() {
        dom::sync_canvas_backing_size(&canvas);
        match GpuState::new(&canvas).await {
            Ok(gpu) => (canvas, Surface::Gpu(gpu), config),
            Err(e) => {
                log::warn!("[background] WebGPU unavailable ({:?}); using 2D particles", e);
                // The failed attempt may already own the canvas context.
                let fresh = replace_canvas(&canvas)?;
                let config = FieldConfig::particles_2d();
                let painter = canvas_painter(&fresh, &config)?;
                (fresh, Surface::Canvas(painter), config)
            }
        }
    } else {
        let painter = canvas_painter(&canvas, &config)?;
        (canvas, Surface::Canvas(painter), config)
    };

    let (fw, fh) = match surface {
        Surface::Canvas(_) => {
            canvas.set_width(vw.max(0.0) as u32);
            canvas.set_height(vh.max(0.0) as u32);
            (vw, vh)
        }
        Surface::Gpu(_) => (canvas.width() as f32, canvas.height() as f32),
    };

    let mut ambient = AmbientInput::new(config.pointer_smoothing, config.scroll_smoothing);
    ambient.set_viewport(vw, vh);
    ambient.set_scroll(ctx.window.scroll_y().unwrap_or(0.0) as f32);
    let ambient = Rc::new(RefCell::new(ambient));
    events::wire_ambient_pointer(&ctx.window, ambient.clone());
    events::wire_ambient_scroll(&ctx.window, ambient.clone());

    let field = Field::new(config, fw, fh, &mut *ctx.rng.borrow_mut());
    log::info!(
        "[background] variant={} entities={}",
        if field.config().is_3d() { "3d" } else { "2d" },
        field.len()
    );

    let background = Rc::new(RefCell::new(Background {
        field,
        ambient,
        surface,
        canvas,
    }));

    let bg_resize = background.clone();
    let rng = ctx.rng.clone();
    events::wire_resize(&ctx.window, move |w, h| {
        bg_resize
            .borrow_mut()
            .resize(w, h, &mut *rng.borrow_mut());
    });

    // The loop ends itself once the canvas is taken out of the page.
    let frames = ctx.frames.clone();
    let own_token: Rc<Cell<Option<LoopToken>>> = Rc::new(Cell::new(None));
    let own = own_token.clone();
    let token = ctx.frames.start(move |dt| {
        let mut bg = background.borrow_mut();
        if !bg.canvas.is_connected() {
            if let Some(t) = own.take() {
                log::info!("[background] canvas detached");
                frames.stop(t);
            }
            return;
        }
        bg.frame(dt);
    });
    own_token.set(Some(token));
    Ok(Attachment::Attached(token))
}

fn canvas_painter(
    canvas: &web::HtmlCanvasElement,
    config: &FieldConfig,
) -> anyhow::Result<CanvasPainter> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(CanvasPainter::new(ctx, config.palette))
}

/// Swap `canvas` for an attribute-identical copy with no context attached.
fn replace_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let fresh = canvas
        .clone_node()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas
        .replace_with_with_node_1(&fresh)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(fresh)
}
