//! DOM boundary used by the controller.

use crate::models::{Backdrop, PanelId, Part, PreviewPanel, PreviewRecord};

/// Structural side of the page: the nodes the controller creates, probes
/// and discards. Styling and animation go through [`super::Animator`].
pub trait Stage {
    /// Create the element tree for `panel` from its catalog record.
    fn build_panel(&self, panel: &PreviewPanel, record: &PreviewRecord);

    /// Whether `panel` has a `part` sub-element to animate.
    fn has_part(&self, panel: PanelId, part: Part) -> bool;

    /// Replace every background child with a transparent media element and
    /// a transparent text overlay built from `backdrop`.
    fn replace_backdrop(&self, backdrop: &Backdrop);
}

impl<S: Stage + ?Sized> Stage for std::rc::Rc<S> {
    fn build_panel(&self, panel: &PreviewPanel, record: &PreviewRecord) {
        (**self).build_panel(panel, record);
    }

    fn has_part(&self, panel: PanelId, part: Part) -> bool {
        (**self).has_part(panel, part)
    }

    fn replace_backdrop(&self, backdrop: &Backdrop) {
        (**self).replace_backdrop(backdrop);
    }
}
