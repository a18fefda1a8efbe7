use std::marker::PhantomData;

use log::{error, info};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::{
    app::{
        gesture_input::{InputAction, cursor_point, key_action, mouse_button_gesture, wheel_gesture},
        gui_app::GuiApp,
        ports::presenter::GuiPresenterPort,
        state::GuiAppState,
    },
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    errors::GuiError,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: MandelbrotConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let state = GuiAppState::new(&self.config)?;
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, state);
        let mut redraw_pending = true;

        info!(
            "Opened {}x{} explorer window",
            window.inner_size().width,
            window.inner_size().height
        );

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // Forward event to egui first
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        match app.redraw(window) {
                            Ok(repaint) => redraw_pending |= repaint,
                            Err(err) => {
                                error!("Render error: {err}");
                                elwt.exit();
                            }
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!("Resize error: {err}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        // Get the new physical size after scale factor change
                        let size = window.inner_size();
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!("Resize error: {err}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        app.set_cursor(cursor_point(*position));
                    }
                    // clicks and scrolls on the overlay stay with egui
                    WindowEvent::MouseInput { state, button, .. } if !egui_consumed => {
                        if let Some(gesture) = mouse_button_gesture(*button, *state, app.cursor()) {
                            redraw_pending |= app.apply_gesture(gesture);
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                        if let Some(gesture) = wheel_gesture(*delta) {
                            redraw_pending |= app.apply_gesture(gesture);
                        }
                    }
                    WindowEvent::KeyboardInput {
                        event: key_event, ..
                    } if !egui_consumed => {
                        if let PhysicalKey::Code(key_code) = key_event.physical_key {
                            match key_action(key_code, key_event.state) {
                                Some(InputAction::Exit) => elwt.exit(),
                                Some(InputAction::Gesture(gesture)) => {
                                    redraw_pending |= app.apply_gesture(gesture);
                                }
                                None => {}
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                // Only request redraw if state changed
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
