use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::input::gesture::Gesture;
use crate::core::viewport::status::{region_text, status_text};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::errors::GuiError;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    state: GuiAppState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        state: GuiAppState,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            state,
            egui_ctx,
            egui_state,
        }
    }

    /// `None` while the window is minimised.
    fn render_size(&self) -> Option<PixelSize> {
        PixelSize::new(self.width, self.height).ok()
    }

    pub fn set_cursor(&mut self, cursor: Point) {
        self.state.set_cursor(cursor);
    }

    #[must_use]
    pub fn cursor(&self) -> Point {
        self.state.cursor()
    }

    /// Returns whether a redraw is needed.
    pub fn apply_gesture(&mut self, gesture: Gesture) -> bool {
        match self.render_size() {
            Some(size) => self.state.handle_gesture(gesture, size),
            None => false,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)?;

        Ok(())
    }

    /// Renders the fractal if stale, then the overlay. Returns whether another
    /// redraw should follow.
    pub fn redraw(&mut self, window: &Window) -> Result<bool, GuiError> {
        let Some(size) = self.render_size() else {
            return Ok(false);
        };

        if let Some(buffer) = self.state.render_if_needed(size) {
            self.presenter.present(&buffer)?;
        }

        let egui_output = self.update_ui(window);

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        let repaint = egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero());

        self.presenter.render(egui_output, &self.egui_ctx)?;

        Ok(repaint || self.state.needs_frame())
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 180.0])
                .show(ctx, |ui| {
                    ui.label(status_text(self.state.viewport()));
                    ui.separator();
                    ui.label(region_text(self.state.viewport()));
                    ui.label(format!("Palette: {}", self.state.palette().name()));

                    if ui.button("Reset view").clicked() {
                        self.state.reset_view();
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    if let Some(render_duration) = self.state.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = self.state.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
