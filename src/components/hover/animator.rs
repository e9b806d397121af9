//! Browser implementation of [`Animator`] on top of CSS transitions.
//!
//! A tween writes a `transition` list covering the animated properties,
//! flushes styles so the current values become the start point, then writes
//! the final values. An immediate set clears the transition first.

use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlElement;

use super::DomStage;
use crate::core::{Animator, Ease, Props, Target, Tween};
use crate::utils::dom;

/// CSS-transition animator for elements owned by a [`DomStage`].
pub struct CssAnimator {
    stage: Rc<DomStage>,
    reduced_motion: Signal<bool>,
}

impl CssAnimator {
    /// Animator resolving targets through `stage`. While `reduced_motion`
    /// is true every tween is applied instantly.
    pub fn new(stage: Rc<DomStage>, reduced_motion: Signal<bool>) -> Self {
        Self {
            stage,
            reduced_motion,
        }
    }

    fn element(&self, target: Target) -> Option<HtmlElement> {
        let element = self.stage.resolve(target);
        if element.is_none() {
            log::debug!("animation target {target:?} not found, skipping");
        }
        element
    }
}

impl Animator for CssAnimator {
    fn tween(&self, target: Target, props: &Props, timing: Tween) {
        let Some(element) = self.element(target) else {
            return;
        };
        let timing = if self.reduced_motion.get_untracked() {
            timing.instant()
        } else {
            timing
        };

        let declarations = declarations(props);
        let transition = transition_list(declarations.iter().map(|(name, _)| *name), timing);

        let style = element.style();
        let _ = style.set_property("transition", &transition);
        dom::flush_styles(&element);
        for (name, value) in &declarations {
            let _ = style.set_property(name, value);
        }
    }

    fn set(&self, target: Target, props: &Props) {
        let Some(element) = self.element(target) else {
            return;
        };
        let style = element.style();
        let _ = style.set_property("transition", "none");
        for (name, value) in declarations(props) {
            let _ = style.set_property(name, &value);
        }
    }
}

/// CSS declarations for `props`. A missing offset axis is written as 0.
fn declarations(props: &Props) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    if let Some(opacity) = props.opacity {
        out.push(("opacity", opacity.to_string()));
    }
    if props.x.is_some() || props.y.is_some() {
        out.push((
            "transform",
            format!(
                "translate({}px, {}px)",
                props.x.unwrap_or_default(),
                props.y.unwrap_or_default()
            ),
        ));
    }
    if let Some(shape) = &props.clip_path {
        out.push(("clip-path", shape.clone()));
    }
    out
}

/// `transition` value animating every property in `properties` with `timing`.
fn transition_list<'a>(properties: impl Iterator<Item = &'a str>, timing: Tween) -> String {
    properties
        .map(|name| {
            format!(
                "{name} {}s {} {}s",
                timing.duration,
                timing_function(timing.ease),
                timing.delay
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn timing_function(ease: Ease) -> &'static str {
    match ease {
        Ease::Linear => "linear",
        Ease::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        Ease::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations() {
        let props = Props::new().x(-75.0).opacity(0.0);
        assert_eq!(
            declarations(&props),
            vec![
                ("opacity", "0".to_string()),
                ("transform", "translate(-75px, 0px)".to_string()),
            ]
        );

        let props = Props::new().clip_path("polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)");
        assert_eq!(
            declarations(&props),
            vec![(
                "clip-path",
                "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)".to_string()
            )]
        );

        assert!(declarations(&Props::new()).is_empty());
    }

    #[test]
    fn test_transition_list() {
        let timing = Tween::new(0.3).delay(0.2);
        assert_eq!(
            transition_list(["opacity"].into_iter(), timing),
            "opacity 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0.2s"
        );

        let timing = Tween::new(0.5).ease(Ease::Linear);
        assert_eq!(
            transition_list(["opacity", "transform"].into_iter(), timing),
            "opacity 0.5s linear 0s, transform 0.5s linear 0s"
        );
    }

    #[test]
    fn test_reduced_motion_timing() {
        let timing = Tween::new(0.75).ease(Ease::Power3Out).instant();
        assert_eq!(
            transition_list(["clip-path"].into_iter(), timing),
            "clip-path 0s cubic-bezier(0.215, 0.61, 0.355, 1) 0s"
        );
    }
}
