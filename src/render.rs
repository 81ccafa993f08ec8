mod canvas2d;
mod scene;

pub use canvas2d::CanvasPainter;
pub use scene::GpuState;
