use spinner::ScrollSurface;
use web_sys::{Element, HtmlElement};

/// `ScrollSurface` over a scrollable container and the list element inside it.
///
/// UIKit-style offsets can go negative while a top inset is applied; here the
/// inset becomes padding above the list, and offsets are shifted by the
/// current inset so `-inset` maps to `scrollTop == 0`.
pub struct DomScrollSurface {
    container: Element,
    list: HtmlElement,
    inset: f64,
}

impl DomScrollSurface {
    pub fn new(container: Element, list: HtmlElement) -> Self {
        Self {
            container,
            list,
            inset: 0.0,
        }
    }

    /// Visible height of the scroll container.
    pub fn frame_height(&self) -> f64 {
        self.container.client_height() as f64
    }

    /// Content-space center of a row element, for `ViewMetrics`. Measure
    /// before the spin starts, while no inset padding is applied.
    pub fn row_center_y(row: &HtmlElement) -> f64 {
        row.offset_top() as f64 + row.offset_height() as f64 / 2.0
    }
}

impl ScrollSurface for DomScrollSurface {
    fn set_content_offset(&mut self, y: f64) {
        self.container.scroll_to_with_x_and_y(0.0, y + self.inset);
    }

    fn set_top_inset(&mut self, inset: f64) {
        self.inset = inset;
        let _ = self
            .list
            .style()
            .set_property("padding-top", &format!("{inset}px"));
    }

    fn set_indicator_inset(&mut self, _inset: f64) {
        // Browsers style the scrollbar with the element; nothing to move.
    }
}
