//! Animation capability used by the controller.
//!
//! The controller never touches styles directly. It describes *what* should
//! change as a [`Target`], a set of final [`Props`] and a [`Tween`] timing,
//! and hands that to an [`Animator`]. Tweens are fire-and-forget: nothing
//! waits for completion, and a later write to the same property wins.

use crate::models::{PanelId, Part};

/// Element a tween or immediate set is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// A panel root.
    Panel(PanelId),
    /// A sub-element of a panel.
    Part(PanelId, Part),
    /// Background image or video.
    BackdropMedia,
    /// Background title/tags overlay.
    BackdropText,
}

/// Final property values; unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    pub opacity: Option<f64>,
    /// Horizontal offset in pixels.
    pub x: Option<f64>,
    /// Vertical offset in pixels.
    pub y: Option<f64>,
    pub clip_path: Option<String>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    pub fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub fn clip_path(mut self, value: impl Into<String>) -> Self {
        self.clip_path = Some(value.into());
        self
    }
}

/// Easing curve of a tween.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Gentle deceleration.
    #[default]
    Power1Out,
    /// Strong deceleration.
    Power3Out,
}

/// Timing of a tween, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tween {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Same tween collapsed to an instant change.
    pub fn instant(self) -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            ..self
        }
    }
}

/// Property animation capability.
pub trait Animator {
    /// Animate `target` from its current values to `props`.
    fn tween(&self, target: Target, props: &Props, timing: Tween);

    /// Apply `props` to `target` immediately, cancelling running transitions.
    fn set(&self, target: Target, props: &Props);
}

impl<A: Animator + ?Sized> Animator for std::rc::Rc<A> {
    fn tween(&self, target: Target, props: &Props, timing: Tween) {
        (**self).tween(target, props, timing);
    }

    fn set(&self, target: Target, props: &Props) {
        (**self).set(target, props);
    }
}
