use crate::error::LabResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch malformed rows before a
/// real chart backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_row_count: usize,
    pub last_data_point_count: usize,
    pub last_line_drawn: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> LabResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_row_count = frame.rows.len();
        self.last_data_point_count = frame.data_point_count;
        self.last_line_drawn = frame.has_line();
        Ok(())
    }
}
