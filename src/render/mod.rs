mod frame;
mod null_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;

use crate::error::LabResult;

/// Contract implemented by the host's chart layer.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from point storage and fitting.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> LabResult<()>;
}
