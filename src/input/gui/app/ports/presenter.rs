use egui::Context as EguiContext;

use crate::adapters::pixel_format::PixelFormatError;
use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    /// Uploads a finished frame into the framebuffer.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), PixelFormatError>;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
