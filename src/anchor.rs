//! Opening transition anchored to the element that launched the modal.
//!
//! When the trigger's on-screen rectangle is known, the modal grows out of that rectangle to
//! fill the viewport. The first frame must be the captured rectangle itself, otherwise the modal
//! visibly jumps before it starts expanding. Without a rectangle the modal fades and slides in.

use serde::Serialize;
use std::time::Duration;

/// Length of the reference card-to-viewport expansion.
pub const DEFAULT_EXPANSION: Duration = Duration::from_millis(800);

/// Vertical offset, in pixels, the fallback slide-in starts from.
pub const FADE_SLIDE_OFFSET: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
/// Axis-aligned rectangle in pixels.
pub struct Rect {
    /// Distance from the top of the viewport.
    pub top: f64,
    /// Distance from the left of the viewport.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    #[must_use]
    /// Builds a rectangle from its top-left corner and size.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[must_use]
    /// Linear blend towards `to`; `t = 0` gives `self` exactly, `t = 1` gives `to`.
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            top: mix(self.top, to.top),
            left: mix(self.left, to.left),
            width: mix(self.width, to.width),
            height: mix(self.height, to.height),
        }
    }
}

/// Ease-out cubic, matching a CSS `ease-out` feel.
fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// How the current modal is making its entrance.
pub enum Opening {
    /// Growing from a captured origin rectangle to the viewport.
    Expand {
        /// Trigger element's rectangle at open time.
        origin: Rect,
        /// Full-viewport rectangle to grow into.
        target: Rect,
    },
    /// Plain fade and slide, used when no origin was supplied.
    FadeSlide {
        /// Full-viewport rectangle the modal occupies.
        target: Rect,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// Geometry and opacity of the modal at one instant.
pub struct Appearance {
    /// Where the modal is drawn.
    pub rect: Rect,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug)]
struct Active {
    opening: Opening,
    started_at: Duration,
    settled: bool,
}

#[derive(Clone, Copy, Debug)]
/// Drives the opening animation of one modal lifetime.
pub struct ExpansionAnchor {
    duration: Duration,
    active: Option<Active>,
}

impl ExpansionAnchor {
    #[must_use]
    /// An idle anchor whose openings last `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    /// Starts an opening at virtual time `now`, replacing any earlier anchor.
    pub fn begin(&mut self, origin: Option<Rect>, viewport: Rect, now: Duration) {
        let opening = match origin {
            Some(origin) => Opening::Expand {
                origin,
                target: viewport,
            },
            None => Opening::FadeSlide { target: viewport },
        };
        tracing::debug!(?opening, "opening modal");
        self.active = Some(Active {
            opening,
            started_at: now,
            settled: false,
        });
    }

    #[must_use]
    /// How long each opening lasts.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    /// The opening in progress (or finished) for this modal lifetime.
    pub fn opening(&self) -> Option<Opening> {
        self.active.map(|a| a.opening)
    }

    #[must_use]
    /// Linear progress in `[0, 1]` at `now`; 1 once settled, 0 when idle.
    pub fn progress_at(&self, now: Duration) -> f64 {
        let Some(active) = self.active else {
            return 0.0;
        };
        if active.settled || self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(active.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    #[must_use]
    /// Modal geometry and opacity at `now`, or `None` when no modal is open.
    pub fn appearance_at(&self, now: Duration) -> Option<Appearance> {
        let active = self.active?;
        let eased = ease_out(self.progress_at(now));
        let appearance = match active.opening {
            Opening::Expand { origin, target } => Appearance {
                rect: origin.lerp(&target, eased),
                opacity: 1.0,
            },
            Opening::FadeSlide { target } => Appearance {
                rect: Rect {
                    top: target.top + FADE_SLIDE_OFFSET * (1.0 - eased),
                    ..target
                },
                opacity: eased,
            },
        };
        Some(appearance)
    }

    #[must_use]
    /// Modal rectangle at `now`, or `None` when no modal is open.
    pub fn geometry_at(&self, now: Duration) -> Option<Rect> {
        self.appearance_at(now).map(|a| a.rect)
    }

    #[must_use]
    /// Whether an opening animation is still running.
    pub fn is_expanding(&self) -> bool {
        self.active.is_some_and(|a| !a.settled)
    }

    /// Pins the modal to its final geometry. Called on [`TimerEvent::ExpansionEnd`].
    ///
    /// [`TimerEvent::ExpansionEnd`]: crate::timeline::TimerEvent::ExpansionEnd
    pub fn settle(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.settled = true;
        }
    }

    /// Discards the anchor when the modal closes.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

impl Default for ExpansionAnchor {
    fn default() -> Self {
        Self::new(DEFAULT_EXPANSION)
    }
}

#[cfg(test)]
#[path = "tests/anchor.rs"]
mod tests;
