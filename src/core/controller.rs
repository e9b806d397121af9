//! Hover preview controller.
//!
//! Owns the interaction state (active panel, pointer-over flag, pending
//! revert generation) and turns pointer events into [`Stage`] updates and
//! [`Animator`] calls. The controller is plain Rust: the browser bindings
//! live in `components::hover`, tests drive it through recording fakes.

use crate::config::{clip, timing};
use crate::models::{Backdrop, PanelId, Part, PreviewPanel};

use super::animation::{Animator, Ease, Props, Target, Tween};
use super::catalog::Catalog;
use super::stage::Stage;

/// Handle for the idle revert scheduled by a pointer-leave.
///
/// Only the ticket from the most recent leave can trigger a revert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the ticket has to be passed to `revert_if_idle` once the debounce elapses"]
pub struct RevertTicket {
    generation: u64,
}

/// Controller for the hover preview interaction.
pub struct HoverController<S, A> {
    stage: S,
    animator: A,
    panels: Vec<PreviewPanel>,
    default_panel: PanelId,
    active: PanelId,
    pointer_over_item: bool,
    leave_generation: u64,
}

impl<S: Stage, A: Animator> HoverController<S, A> {
    /// Build every panel from `catalog`, park them in their rest pose and
    /// show the idle backdrop.
    ///
    /// All panels except the default one start fully transparent.
    pub fn new(catalog: &Catalog, stage: S, animator: A) -> Self {
        let panels: Vec<PreviewPanel> = catalog
            .iter()
            .map(|(id, record, variant)| {
                let panel = PreviewPanel::new(id, variant.clone());
                stage.build_panel(&panel, record);
                panel
            })
            .collect();

        let default_panel = catalog.default_panel();
        let controller = Self {
            stage,
            animator,
            panels,
            default_panel,
            active: default_panel,
            pointer_over_item: false,
            leave_generation: 0,
        };

        for panel in &controller.panels {
            controller.apply_rest_transforms(panel.id);
            if !panel.visible {
                controller
                    .animator
                    .set(Target::Panel(panel.id), &Props::new().opacity(0.0));
            }
        }
        controller.set_background(&Backdrop::idle());

        log::debug!(
            "hover preview ready: {} panels, default {}",
            controller.panels.len(),
            default_panel.class_name()
        );
        controller
    }

    /// Currently active panel.
    pub fn active_panel(&self) -> PanelId {
        self.active
    }

    pub fn default_panel(&self) -> PanelId {
        self.default_panel
    }

    pub fn panel(&self, id: PanelId) -> Option<&PreviewPanel> {
        self.panels.get(id.0)
    }

    pub fn panels(&self) -> &[PreviewPanel] {
        &self.panels
    }

    pub fn is_pointer_over_item(&self) -> bool {
        self.pointer_over_item
    }

    /// Replace the backdrop and fade the new media and text in.
    pub fn set_background(&self, backdrop: &Backdrop) {
        self.stage.replace_backdrop(backdrop);
        self.animator.tween(
            Target::BackdropMedia,
            &Props::new().opacity(1.0),
            Tween::new(timing::BACKDROP_MEDIA_FADE),
        );
        self.animator.tween(
            Target::BackdropText,
            &Props::new().opacity(1.0),
            Tween::new(timing::BACKDROP_TEXT_FADE).delay(timing::BACKDROP_TEXT_DELAY),
        );
    }

    /// Clip-path of the panel image while `id` is inactive.
    ///
    /// Unknown panels get the full-cover fallback shape.
    pub fn rest_clip_path(&self, id: PanelId) -> &'static str {
        self.panel(id)
            .map(|panel| panel.variant.rest_clip_path())
            .unwrap_or(clip::FALLBACK_REST)
    }

    /// Snap the title/tags/opacity sub-elements of `id` to their hidden pose.
    ///
    /// No-op for panels without a transform table or missing sub-elements.
    pub fn apply_rest_transforms(&self, id: PanelId) {
        let Some(panel) = self.panel(id) else {
            return;
        };
        for transform in panel.variant.rest_transforms() {
            if self.stage.has_part(id, transform.part) {
                self.animator.set(
                    Target::Part(id, transform.part),
                    &Props::new().x(transform.x).opacity(transform.opacity),
                );
            }
        }
    }

    /// Pointer entered the item at `index` (0-based).
    pub fn on_item_enter(&mut self, index: usize) {
        self.pointer_over_item = true;
        self.set_background(&Backdrop::for_item(index));

        let incoming = PanelId(index);
        if self.panel(incoming).is_none() {
            log::warn!("no preview panel for item {index}");
            return;
        }

        let outgoing = self.active;
        if outgoing != incoming {
            let rest = self.rest_clip_path(outgoing);
            self.wipe(
                outgoing,
                rest,
                Tween::new(timing::OUTGOING_CLIP).ease(Ease::Power3Out),
            );
            self.fade(
                outgoing,
                false,
                Tween::new(timing::OUTGOING_FADE).delay(timing::OUTGOING_FADE_DELAY),
            );
            self.apply_rest_transforms(outgoing);
        }

        self.fade(incoming, true, Tween::new(timing::INCOMING_FADE));
        self.active = incoming;

        for part in Part::ANIMATED_TEXT {
            if self.stage.has_part(incoming, part) {
                self.animator.tween(
                    Target::Part(incoming, part),
                    &Props::new().x(0.0).y(0.0).opacity(1.0),
                    Tween::new(timing::INCOMING_TEXT),
                );
            }
        }

        self.wipe(
            incoming,
            clip::REVEAL,
            Tween::new(timing::INCOMING_CLIP).ease(Ease::Power3Out),
        );
    }

    /// Pointer left the item at `index`.
    ///
    /// The active panel's text is parked right away. The idle revert is
    /// deferred: pass the returned ticket to [`Self::revert_if_idle`] once
    /// the debounce window has elapsed.
    pub fn on_item_leave(&mut self, index: usize) -> RevertTicket {
        log::trace!("pointer left item {index}");
        self.pointer_over_item = false;
        self.apply_rest_transforms(self.active);

        self.leave_generation += 1;
        RevertTicket {
            generation: self.leave_generation,
        }
    }

    /// Revert to the idle backdrop and default panel, unless the pointer is
    /// back over an item or a newer leave superseded `ticket`.
    ///
    /// Returns whether the revert ran.
    pub fn revert_if_idle(&mut self, ticket: RevertTicket) -> bool {
        if self.pointer_over_item || ticket.generation != self.leave_generation {
            return false;
        }

        self.set_background(&Backdrop::idle());

        let outgoing = self.active;
        let default = self.default_panel;
        self.fade(outgoing, false, Tween::new(timing::REVERT_FADE));
        self.fade(default, true, Tween::new(timing::REVERT_FADE));
        self.active = default;

        let rest = self.rest_clip_path(default);
        self.wipe(
            default,
            rest,
            Tween::new(timing::REVERT_CLIP).ease(Ease::Power3Out),
        );
        true
    }

    fn fade(&mut self, id: PanelId, visible: bool, timing: Tween) {
        let opacity = if visible { 1.0 } else { 0.0 };
        self.animator
            .tween(Target::Panel(id), &Props::new().opacity(opacity), timing);
        if let Some(panel) = self.panels.get_mut(id.0) {
            panel.visible = visible;
        }
    }

    fn wipe(&mut self, id: PanelId, shape: &str, timing: Tween) {
        if !self.stage.has_part(id, Part::Image) {
            return;
        }
        self.animator.tween(
            Target::Part(id, Part::Image),
            &Props::new().clip_path(shape),
            timing,
        );
        if let Some(panel) = self.panels.get_mut(id.0) {
            panel.clip_path = Some(shape.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::core::testing::{Call, FakeStage, Recorder, StageNode};
    use crate::models::{PreviewRecord, VariantTag};

    type TestController = HoverController<Rc<FakeStage>, Rc<Recorder>>;

    fn record(n: usize) -> PreviewRecord {
        PreviewRecord {
            image: format!("./assets/preview-{n}.jpg"),
            title: format!("Preview {n}"),
            tags: "a | b".to_string(),
            description: "text".to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            (1..=5).map(record).collect(),
            vec![
                VariantTag::Default,
                VariantTag::Variant1,
                VariantTag::Variant2,
                VariantTag::Variant3,
                VariantTag::Other("spotlight".to_string()),
            ],
        )
        .unwrap()
    }

    fn setup() -> (TestController, Rc<FakeStage>, Rc<Recorder>) {
        let stage = Rc::new(FakeStage::default());
        let recorder = Rc::new(Recorder::default());
        let controller = HoverController::new(&catalog(), stage.clone(), recorder.clone());
        (controller, stage, recorder)
    }

    fn panel_opacity_tween(calls: &[Call], id: PanelId) -> Option<(usize, f64)> {
        calls
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, call)| match call {
                Call::Tween { target, props, .. } if *target == Target::Panel(id) => {
                    props.opacity.map(|o| (i, o))
                }
                _ => None,
            })
    }

    #[test]
    fn test_initialization() {
        let (controller, stage, recorder) = setup();

        assert_eq!(controller.active_panel(), PanelId(0));
        assert!(!controller.is_pointer_over_item());
        assert_eq!(
            stage.built_classes(),
            vec![
                "preview default preview-1",
                "preview variant-1 preview-2",
                "preview variant-2 preview-3",
                "preview variant-3 preview-4",
                "preview spotlight preview-5",
            ]
        );

        let calls = recorder.take();
        // Non-default panels start transparent.
        for n in 1..5 {
            assert!(calls.contains(&Call::Set {
                target: Target::Panel(PanelId(n)),
                props: Props::new().opacity(0.0),
            }));
        }
        assert!(!calls.iter().any(|c| matches!(
            c,
            Call::Set { target: Target::Panel(PanelId(0)), .. }
        )));

        // Variant-1 title/tags are primed; the missing opacity layer is skipped.
        assert!(calls.contains(&Call::Set {
            target: Target::Part(PanelId(1), Part::Title),
            props: Props::new().x(75.0).opacity(0.0),
        }));
        assert!(calls.contains(&Call::Set {
            target: Target::Part(PanelId(1), Part::Tags),
            props: Props::new().x(-75.0).opacity(0.0),
        }));
        assert!(!calls.iter().any(|c| matches!(
            c,
            Call::Set { target: Target::Part(_, Part::Opacity), .. }
        )));

        assert_eq!(stage.backdrop(), Some(Backdrop::idle()));
        assert!(controller.panel(PanelId(0)).unwrap().visible);
        assert!(!controller.panel(PanelId(3)).unwrap().visible);
    }

    #[test]
    fn test_enter_activates_matching_panel() {
        let (mut controller, stage, recorder) = setup();

        for index in 0..5 {
            recorder.take();
            controller.on_item_enter(index);

            let id = controller.active_panel();
            assert_eq!(id, PanelId(index));
            assert_eq!(id.class_name(), format!("preview-{}", index + 1));
            assert!(controller.panel(id).unwrap().visible);
            assert_eq!(
                controller.panel(id).unwrap().clip_path.as_deref(),
                Some(clip::REVEAL)
            );

            let calls = recorder.take();
            assert_eq!(panel_opacity_tween(&calls, id).map(|(_, o)| o), Some(1.0));
            assert_eq!(stage.backdrop(), Some(Backdrop::for_item(index)));
        }
        assert!(controller.is_pointer_over_item());
        assert_eq!(controller.panels().iter().filter(|p| p.visible).count(), 1);
    }

    #[test]
    fn test_enter_issues_reveal_tweens() {
        let (mut controller, _stage, recorder) = setup();
        recorder.take();

        controller.on_item_enter(2);
        let calls = recorder.take();

        assert!(calls.contains(&Call::Tween {
            target: Target::Part(PanelId(2), Part::Title),
            props: Props::new().x(0.0).y(0.0).opacity(1.0),
            timing: Tween::new(0.5),
        }));
        assert!(calls.contains(&Call::Tween {
            target: Target::Part(PanelId(2), Part::Image),
            props: Props::new().clip_path(clip::REVEAL),
            timing: Tween::new(1.0).ease(Ease::Power3Out),
        }));
        assert!(calls.contains(&Call::Tween {
            target: Target::BackdropText,
            props: Props::new().opacity(1.0),
            timing: Tween::new(1.0).delay(0.5),
        }));
    }

    #[test]
    fn test_outgoing_panel_hidden_before_incoming_revealed() {
        let (mut controller, _stage, recorder) = setup();
        controller.on_item_enter(1);
        recorder.take();

        controller.on_item_enter(2);
        let calls = recorder.take();

        let (out_idx, out_opacity) = panel_opacity_tween(&calls, PanelId(1)).unwrap();
        let (in_idx, in_opacity) = panel_opacity_tween(&calls, PanelId(2)).unwrap();
        assert_eq!(out_opacity, 0.0);
        assert_eq!(in_opacity, 1.0);
        assert!(out_idx < in_idx);

        assert!(calls.contains(&Call::Tween {
            target: Target::Part(PanelId(1), Part::Image),
            props: Props::new().clip_path(clip::VARIANT_1_REST),
            timing: Tween::new(0.75).ease(Ease::Power3Out),
        }));
        assert!(calls.contains(&Call::Tween {
            target: Target::Panel(PanelId(1)),
            props: Props::new().opacity(0.0),
            timing: Tween::new(0.3).delay(0.2),
        }));
        assert!(calls.contains(&Call::Set {
            target: Target::Part(PanelId(1), Part::Title),
            props: Props::new().x(75.0).opacity(0.0),
        }));
        assert!(!controller.panel(PanelId(1)).unwrap().visible);
    }

    #[test]
    fn test_reentering_active_panel_skips_outgoing() {
        let (mut controller, _stage, recorder) = setup();
        controller.on_item_enter(3);
        let _ = controller.on_item_leave(3);
        recorder.take();

        controller.on_item_enter(3);
        let calls = recorder.take();
        assert!(!calls.iter().any(|c| matches!(
            c,
            Call::Tween { props, .. } if props.opacity == Some(0.0)
        )));
    }

    #[test]
    fn test_enter_out_of_range_keeps_active_panel() {
        let (mut controller, stage, recorder) = setup();
        controller.on_item_enter(1);
        recorder.take();

        controller.on_item_enter(9);
        assert!(controller.is_pointer_over_item());
        assert_eq!(controller.active_panel(), PanelId(1));
        assert_eq!(stage.backdrop(), Some(Backdrop::for_item(9)));
        assert!(
            recorder
                .take()
                .iter()
                .all(|c| matches!(c, Call::Tween { target: Target::BackdropMedia | Target::BackdropText, .. }))
        );
    }

    #[test]
    fn test_set_background_replaces_children() {
        let (controller, stage, _recorder) = setup();

        for n in 0..5 {
            controller.set_background(&Backdrop::for_item(n));
        }
        controller.set_background(&Backdrop::idle());

        let children = stage.backdrop_children();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], StageNode::Media { .. }));
        assert!(matches!(children[1], StageNode::Text { .. }));
        assert_eq!(stage.backdrop(), Some(Backdrop::idle()));
    }

    #[test]
    fn test_rest_clip_path_lookup() {
        let (controller, _stage, _recorder) = setup();
        assert_eq!(
            controller.rest_clip_path(PanelId(1)),
            "polygon(0% 100%, 100% 100%, 100% 100%, 0% 100%)"
        );
        assert_eq!(
            controller.rest_clip_path(PanelId(4)),
            "polygon(100% 0%, 0% 0%, 0% 100%, 100% 100%)"
        );
        assert_eq!(
            controller.rest_clip_path(PanelId(42)),
            "polygon(100% 0%, 0% 0%, 0% 100%, 100% 100%)"
        );
    }

    #[test]
    fn test_rest_transforms_unrecognized_variant_is_noop() {
        let (controller, _stage, recorder) = setup();
        recorder.take();

        controller.apply_rest_transforms(PanelId(4));
        controller.apply_rest_transforms(PanelId(0));
        controller.apply_rest_transforms(PanelId(99));
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_leave_parks_active_panel_text() {
        let (mut controller, _stage, recorder) = setup();
        controller.on_item_enter(3);
        recorder.take();

        let _ = controller.on_item_leave(3);
        assert!(!controller.is_pointer_over_item());
        assert_eq!(
            recorder.take(),
            vec![
                Call::Set {
                    target: Target::Part(PanelId(3), Part::Title),
                    props: Props::new().x(75.0).opacity(0.0),
                },
                Call::Set {
                    target: Target::Part(PanelId(3), Part::Tags),
                    props: Props::new().x(75.0).opacity(0.0),
                },
            ]
        );
    }

    #[test]
    fn test_leave_without_reentry_reverts_to_idle() {
        let (mut controller, stage, recorder) = setup();
        controller.on_item_enter(1);
        let ticket = controller.on_item_leave(1);
        recorder.take();

        assert!(controller.revert_if_idle(ticket));

        let backdrop = stage.backdrop().unwrap();
        assert!(backdrop.is_video());
        assert_eq!(backdrop.title, "Welcome to Our Lab");
        assert_eq!(backdrop.tags, "Explore | Discover | Enjoy");
        assert_eq!(controller.active_panel(), controller.default_panel());

        let calls = recorder.take();
        assert_eq!(
            panel_opacity_tween(&calls, PanelId(1)).map(|(_, o)| o),
            Some(0.0)
        );
        assert_eq!(
            panel_opacity_tween(&calls, PanelId(0)).map(|(_, o)| o),
            Some(1.0)
        );
        assert!(calls.contains(&Call::Tween {
            target: Target::Part(PanelId(0), Part::Image),
            props: Props::new().clip_path(clip::FALLBACK_REST),
            timing: Tween::new(1.0).ease(Ease::Power3Out),
        }));
        assert!(!controller.panel(PanelId(1)).unwrap().visible);
        assert!(controller.panel(PanelId(0)).unwrap().visible);
    }

    #[test]
    fn test_reentry_within_window_cancels_revert() {
        let (mut controller, stage, _recorder) = setup();
        controller.on_item_enter(1);
        let ticket = controller.on_item_leave(1);
        controller.on_item_enter(2);

        assert!(!controller.revert_if_idle(ticket));
        assert_eq!(controller.active_panel(), PanelId(2));
        assert_eq!(stage.backdrop(), Some(Backdrop::for_item(2)));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let (mut controller, _stage, _recorder) = setup();
        controller.on_item_enter(1);
        let first = controller.on_item_leave(1);
        controller.on_item_enter(2);
        let second = controller.on_item_leave(2);

        assert!(!controller.revert_if_idle(first));
        assert_eq!(controller.active_panel(), PanelId(2));

        assert!(controller.revert_if_idle(second));
        assert_eq!(controller.active_panel(), PanelId(0));
    }

    #[test]
    fn test_revert_from_default_panel_keeps_it_visible() {
        let (mut controller, _stage, _recorder) = setup();
        controller.on_item_enter(0);
        let ticket = controller.on_item_leave(0);

        assert!(controller.revert_if_idle(ticket));
        assert_eq!(controller.active_panel(), PanelId(0));
        assert!(controller.panel(PanelId(0)).unwrap().visible);
    }
}
