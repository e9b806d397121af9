//! Browser implementation of [`Stage`].
//!
//! Panels are appended to the container element and remembered by
//! [`PanelId`]; sub-elements are looked up by class name inside their panel,
//! so markup added later (e.g. a `preview-opacity` layer) is picked up too.

use std::cell::RefCell;

use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlVideoElement};

use crate::config::classes;
use crate::core::Stage;
use crate::core::Target;
use crate::core::error::DomError;
use crate::models::{Backdrop, MediaKind, PanelId, Part, PreviewPanel, PreviewRecord};
use crate::utils::dom;

/// Inline styles of the backdrop media element.
const MEDIA_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("object-fit", "cover"),
    ("opacity", "0"),
    ("z-index", "1"),
];

/// Inline styles of the backdrop text overlay.
const TEXT_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("bottom", "50%"),
    ("left", "30%"),
    ("color", "white"),
    ("text-shadow", "2px 2px 10px rgba(0,0,0,0.7)"),
    ("opacity", "0"),
    ("z-index", "10"),
];

const TITLE_STYLES: &[(&str, &str)] = &[("font-size", "4rem"), ("margin-bottom", "20px")];

const TAGS_STYLES: &[(&str, &str)] = &[
    ("font-size", "1.2rem"),
    ("opacity", "1"),
    ("margin-left", "10px"),
];

/// Current backdrop children.
struct BackdropNodes {
    media: HtmlElement,
    text: HtmlElement,
}

/// DOM-backed stage.
pub struct DomStage {
    document: Document,
    container: Element,
    backdrop: Element,
    panels: RefCell<Vec<Option<HtmlElement>>>,
    backdrop_nodes: RefCell<Option<BackdropNodes>>,
}

impl DomStage {
    /// Stage that builds panels into `container` and backdrops into `backdrop`.
    pub fn new(container: Element, backdrop: Element) -> Result<Self, DomError> {
        Ok(Self {
            document: dom::document()?,
            container,
            backdrop,
            panels: RefCell::new(Vec::new()),
            backdrop_nodes: RefCell::new(None),
        })
    }

    /// Element addressed by `target`, if it exists.
    pub fn resolve(&self, target: Target) -> Option<HtmlElement> {
        match target {
            Target::Panel(id) => self.panel_element(id),
            Target::Part(id, part) => {
                dom::find_by_class(self.panel_element(id)?.as_ref(), part.class_name())
            }
            Target::BackdropMedia => self.backdrop_nodes.borrow().as_ref().map(|n| n.media.clone()),
            Target::BackdropText => self.backdrop_nodes.borrow().as_ref().map(|n| n.text.clone()),
        }
    }

    fn panel_element(&self, id: PanelId) -> Option<HtmlElement> {
        self.panels.borrow().get(id.0).cloned().flatten()
    }

    fn try_build_panel(
        &self,
        panel: &PreviewPanel,
        record: &PreviewRecord,
    ) -> Result<HtmlElement, DomError> {
        let doc = &self.document;
        let root = dom::create_with_class(doc, "div", &panel.class_list())?;

        let image_wrap = dom::create_with_class(doc, "div", Part::Image.class_name())?;
        let image: HtmlImageElement = dom::create(doc, "img")?;
        image.set_src(&record.image);
        image.set_alt("");
        dom::append(&image_wrap, &image)?;
        dom::append(&root, &image_wrap)?;

        for (part, tag, text) in [
            (Part::Title, "h1", &record.title),
            (Part::Tags, "p", &record.tags),
            (Part::Description, "p", &record.description),
        ] {
            let wrap = dom::create_with_class(doc, "div", part.class_name())?;
            let inner: HtmlElement = dom::create(doc, tag)?;
            inner.set_text_content(Some(text.as_str()));
            dom::append(&wrap, &inner)?;
            dom::append(&root, &wrap)?;
        }

        dom::append(&self.container, &root)?;
        Ok(root)
    }

    fn try_replace_backdrop(&self, backdrop: &Backdrop) -> Result<BackdropNodes, DomError> {
        let doc = &self.document;
        dom::clear_children(&self.backdrop)?;

        let media: HtmlElement = match backdrop.kind {
            MediaKind::Video => {
                let video: HtmlVideoElement = dom::create(doc, "video")?;
                video.set_src(&backdrop.source);
                video.set_autoplay(true);
                video.set_loop(true);
                video.set_muted(true);
                video.into()
            }
            MediaKind::Image => {
                let image: HtmlImageElement = dom::create(doc, "img")?;
                image.set_src(&backdrop.source);
                image.into()
            }
        };
        dom::set_styles(&media, MEDIA_STYLES);
        dom::append(&self.backdrop, &media)?;

        let text = dom::create_with_class(doc, "div", classes::BACKDROP_TEXT)?;
        dom::set_styles(&text, TEXT_STYLES);

        let title: HtmlElement = dom::create(doc, "h1")?;
        title.set_text_content(Some(backdrop.title.as_str()));
        dom::set_styles(&title, TITLE_STYLES);

        let tags: HtmlElement = dom::create(doc, "p")?;
        tags.set_text_content(Some(backdrop.tags.as_str()));
        dom::set_styles(&tags, TAGS_STYLES);

        dom::append(&text, &title)?;
        dom::append(&text, &tags)?;
        dom::append(&self.backdrop, &text)?;

        Ok(BackdropNodes { media, text })
    }
}

impl Stage for DomStage {
    fn build_panel(&self, panel: &PreviewPanel, record: &PreviewRecord) {
        let element = self
            .try_build_panel(panel, record)
            .inspect_err(|e| log::error!("failed to build {}: {e}", panel.id.class_name()))
            .ok();

        let mut panels = self.panels.borrow_mut();
        if panels.len() <= panel.id.0 {
            panels.resize(panel.id.0 + 1, None);
        }
        panels[panel.id.0] = element;
    }

    fn has_part(&self, panel: PanelId, part: Part) -> bool {
        self.resolve(Target::Part(panel, part)).is_some()
    }

    fn replace_backdrop(&self, backdrop: &Backdrop) {
        let nodes = self
            .try_replace_backdrop(backdrop)
            .inspect_err(|e| log::error!("failed to replace backdrop: {e}"))
            .ok();
        *self.backdrop_nodes.borrow_mut() = nodes;
    }
}
