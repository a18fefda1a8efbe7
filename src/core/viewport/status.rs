use crate::core::viewport::viewport_state::ViewportState;

/// Two-line status shown over the rendered frame.
#[must_use]
pub fn status_text(viewport: &ViewportState) -> String {
    format!(
        "Iterations: {}\nZoom Factor: {}",
        viewport.max_iterations(),
        viewport.zoom()
    )
}

/// Human-readable bounds of the current region.
#[must_use]
pub fn region_text(viewport: &ViewportState) -> String {
    let region = viewport.region();

    format!(
        "Real: [{:.6e}, {:.6e}]\nImag: [{:.6e}, {:.6e}]",
        region.min_re(),
        region.max_re(),
        region.min_im(),
        region.max_im()
    )
}
