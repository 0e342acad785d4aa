//! Canvas transformations - zoom to fit.

use crate::geometry::{Offset, Size};
use crate::types::BackgroundImage;
use crate::view::ViewState;
use tracing::debug;

/// Zoom that makes an image of `image` size fill `viewport` without
/// distorting it. `None` when either size has no extent.
pub fn fit_zoom(image: Size, viewport: Size) -> Option<f32> {
    if image.is_empty() || viewport.is_empty() {
        return None;
    }
    let h_zoom = viewport.width / image.width;
    let v_zoom = viewport.height / image.height;
    Some(h_zoom.min(v_zoom))
}

/// Fit the background into the viewport and reset the pan, committing both
/// together. Returns false (and changes nothing) without a usable background.
pub fn zoom_to_fit(state: &mut ViewState, background: Option<&BackgroundImage>) -> bool {
    let Some(background) = background else {
        return false;
    };
    let Some(zoom) = fit_zoom(background.size, state.viewport) else {
        debug!(url = %background.url, "Background has no extent, skipping zoom to fit");
        return false;
    };
    let committed = state.commit_transform(zoom, Offset::ZERO);
    if committed {
        debug!(zoom = state.steady_zoom(), "Zoomed to fit background");
    }
    committed
}
