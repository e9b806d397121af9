//! Recording fakes for [`Stage`] and [`Animator`].

use std::cell::RefCell;
use std::collections::HashSet;

use super::animation::{Animator, Props, Target, Tween};
use super::stage::Stage;
use crate::models::{Backdrop, PanelId, Part, PreviewPanel, PreviewRecord};

/// One call made to the [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Tween {
        target: Target,
        props: Props,
        timing: Tween,
    },
    Set {
        target: Target,
        props: Props,
    },
}

/// Animator that records calls instead of animating.
#[derive(Default)]
pub struct Recorder {
    calls: RefCell<Vec<Call>>,
}

impl Recorder {
    /// Drain recorded calls.
    pub fn take(&self) -> Vec<Call> {
        self.calls.take()
    }
}

impl Animator for Recorder {
    fn tween(&self, target: Target, props: &Props, timing: Tween) {
        self.calls.borrow_mut().push(Call::Tween {
            target,
            props: props.clone(),
            timing,
        });
    }

    fn set(&self, target: Target, props: &Props) {
        self.calls.borrow_mut().push(Call::Set {
            target,
            props: props.clone(),
        });
    }
}

/// Child node of the fake backdrop container.
#[derive(Clone, Debug, PartialEq)]
pub enum StageNode {
    Media { backdrop: Backdrop },
    Text { title: String, tags: String },
}

/// In-memory stage.
///
/// Built panels have image, title, tags and description parts but no
/// opacity layer.
#[derive(Default)]
pub struct FakeStage {
    panels: RefCell<Vec<String>>,
    parts: RefCell<HashSet<(PanelId, Part)>>,
    backdrop: RefCell<Vec<StageNode>>,
}

impl FakeStage {
    pub fn built_classes(&self) -> Vec<String> {
        self.panels.borrow().clone()
    }

    pub fn backdrop_children(&self) -> Vec<StageNode> {
        self.backdrop.borrow().clone()
    }

    /// Backdrop currently displayed, if any.
    pub fn backdrop(&self) -> Option<Backdrop> {
        self.backdrop.borrow().iter().find_map(|node| match node {
            StageNode::Media { backdrop } => Some(backdrop.clone()),
            StageNode::Text { .. } => None,
        })
    }
}

impl Stage for FakeStage {
    fn build_panel(&self, panel: &PreviewPanel, _record: &PreviewRecord) {
        self.panels.borrow_mut().push(panel.class_list());
        let mut parts = self.parts.borrow_mut();
        for part in [Part::Image, Part::Title, Part::Tags, Part::Description] {
            parts.insert((panel.id, part));
        }
    }

    fn has_part(&self, panel: PanelId, part: Part) -> bool {
        self.parts.borrow().contains(&(panel, part))
    }

    fn replace_backdrop(&self, backdrop: &Backdrop) {
        let mut children = self.backdrop.borrow_mut();
        children.clear();
        children.push(StageNode::Media {
            backdrop: backdrop.clone(),
        });
        children.push(StageNode::Text {
            title: backdrop.title.clone(),
            tags: backdrop.tags.clone(),
        });
    }
}
