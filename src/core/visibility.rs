//! Viewport visibility tracking for the reveal animation
//!
//! This module provides the host-independent half of scroll-triggered reveals:
//! - `ViewportObserver` trait implemented by the browser binding (and test doubles)
//! - `ObserverOptions` with threshold and CSS root margin
//! - `VisibilityObserver` controller that flips a one-way flag on first intersection
//!
//! # Usage Example
//!
//! ```rust
//! use trusted_by::core::visibility::{
//!     EventSink, IntersectionEvent, ObserverError, ObserverOptions, ViewportObserver,
//!     VisibilityObserver,
//! };
//!
//! struct NoopViewport;
//!
//! impl ViewportObserver for NoopViewport {
//!     type Target = ();
//!
//!     fn observe(&mut self, _: &(), _: &ObserverOptions, _: EventSink) -> Result<(), ObserverError> {
//!         Ok(())
//!     }
//!
//!     fn disconnect(&mut self) {}
//! }
//!
//! let mut observer = VisibilityObserver::new(NoopViewport, ObserverOptions::default());
//! observer.start(&(), Box::new(|_| {}));
//! assert!(!observer.is_visible());
//!
//! assert!(observer.handle(IntersectionEvent::new(true, 0.5)));
//! assert!(observer.is_visible());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default fraction of the target that must be visible before revealing
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default root margin, fires slightly before the section is on screen
pub const DEFAULT_ROOT_MARGIN: &str = "50px";

/// Errors raised while registering a viewport observation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObserverError {
    #[error("viewport observation is not supported by the host")]
    Unsupported,

    #[error("failed to register viewport observation: {0}")]
    Registration(String),

    #[error("intersection threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("invalid root margin: {0:?}")]
    InvalidRootMargin(String),
}

// ============================================================================
// Root margin
// ============================================================================

/// A single root margin component
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    fn parse(token: &str) -> Option<Self> {
        if let Some(number) = token.strip_suffix("px") {
            number
                .parse()
                .ok()
                .filter(|n: &f64| n.is_finite())
                .map(MarginLength::Px)
        } else if let Some(number) = token.strip_suffix('%') {
            number
                .parse()
                .ok()
                .filter(|n: &f64| n.is_finite())
                .map(MarginLength::Percent)
        } else if token == "0" {
            Some(MarginLength::Px(0.0))
        } else {
            None
        }
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(value) => write!(f, "{}px", value),
            MarginLength::Percent(value) => write!(f, "{}%", value),
        }
    }
}

/// Extra padding around the viewport, in CSS margin shorthand order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    /// Same margin on all four sides
    pub fn uniform(length: MarginLength) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::uniform(MarginLength::Px(50.0))
    }
}

impl FromStr for RootMargin {
    type Err = ObserverError;

    /// Parse CSS shorthand with one to four `px` or `%` values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ObserverError::InvalidRootMargin(s.to_string());

        let lengths = s
            .split_whitespace()
            .map(MarginLength::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        let margin = match lengths.as_slice() {
            [all] => Self::uniform(*all),
            [vertical, horizontal] => Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            },
            [top, horizontal, bottom] => Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            },
            [top, right, bottom, left] => Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            },
            _ => return Err(invalid()),
        };

        Ok(margin)
    }
}

impl TryFrom<String> for RootMargin {
    type Error = ObserverError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

// ============================================================================
// Options and events
// ============================================================================

/// Configuration for a single viewport observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Fraction of the target area (0.0..=1.0) that must be visible
    pub threshold: f64,
    /// Extra viewport padding
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::default(),
        }
    }
}

impl ObserverOptions {
    /// Create validated options
    pub fn new(threshold: f64, root_margin: &str) -> Result<Self, ObserverError> {
        Self {
            threshold,
            root_margin: root_margin.parse()?,
        }
        .validated()
    }

    /// Reject thresholds outside of `0.0..=1.0` (NaN included)
    pub fn validated(self) -> Result<Self, ObserverError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(self)
        } else {
            Err(ObserverError::InvalidThreshold(self.threshold))
        }
    }
}

/// A single intersection report delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub is_intersecting: bool,
    /// Visible fraction of the target, 0.0..=1.0
    pub ratio: f64,
}

impl IntersectionEvent {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    /// Whether this event crosses the configured threshold
    pub fn satisfies(&self, options: &ObserverOptions) -> bool {
        self.is_intersecting && self.ratio >= options.threshold
    }
}

/// Callback receiving intersection events from the host
pub type EventSink = Box<dyn FnMut(IntersectionEvent)>;

/// Host facility that reports when an element intersects the viewport
pub trait ViewportObserver {
    /// Element handle understood by the host
    type Target;

    /// Start delivering intersection events for `target` into `sink`
    fn observe(
        &mut self,
        target: &Self::Target,
        options: &ObserverOptions,
        sink: EventSink,
    ) -> Result<(), ObserverError>;

    /// Stop delivering events
    fn disconnect(&mut self);
}

// ============================================================================
// Visibility flag and controller
// ============================================================================

/// One-way visibility flag: starts hidden, can only be raised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFlag(bool);

impl VisibilityFlag {
    pub fn get(&self) -> bool {
        self.0
    }

    /// Raise the flag; returns `true` only on the first call
    pub fn raise(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }
}

/// Lifecycle of one observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverPhase {
    /// Not registered yet
    Idle,
    /// Registered and waiting for the first qualifying event
    Observing,
    /// Threshold crossed, observation disconnected
    Revealed,
    /// Host could not observe, treated as visible
    FailedOpen,
    /// Torn down before the threshold was crossed
    TornDown,
}

/// Outcome of `VisibilityObserver::start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Observing,
    /// Observation unavailable, the flag was raised immediately
    FailedOpen,
    /// `start` was called on an observer that already left `Idle`
    AlreadyStarted,
}

/// Fire-once visibility controller around a host `ViewportObserver`
///
/// Dropping the controller tears the observation down if it is still active.
pub struct VisibilityObserver<V: ViewportObserver> {
    viewport: V,
    options: ObserverOptions,
    flag: VisibilityFlag,
    phase: ObserverPhase,
}

impl<V: ViewportObserver> VisibilityObserver<V> {
    pub fn new(viewport: V, options: ObserverOptions) -> Self {
        Self {
            viewport,
            options,
            flag: VisibilityFlag::default(),
            phase: ObserverPhase::Idle,
        }
    }

    pub fn phase(&self) -> ObserverPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.flag.get()
    }

    /// Register the observation; fails open when the host cannot observe
    pub fn start(&mut self, target: &V::Target, sink: EventSink) -> StartOutcome {
        if self.phase != ObserverPhase::Idle {
            return StartOutcome::AlreadyStarted;
        }

        match self.viewport.observe(target, &self.options, sink) {
            Ok(()) => {
                self.phase = ObserverPhase::Observing;
                StartOutcome::Observing
            }
            Err(err) => {
                leptos::logging::warn!("Reveal observer failed open: {}", err);
                self.flag.raise();
                self.phase = ObserverPhase::FailedOpen;
                StartOutcome::FailedOpen
            }
        }
    }

    /// Feed one host event; returns `true` when this event revealed the section
    pub fn handle(&mut self, event: IntersectionEvent) -> bool {
        if self.phase != ObserverPhase::Observing || !event.satisfies(&self.options) {
            return false;
        }

        self.viewport.disconnect();
        self.phase = ObserverPhase::Revealed;
        self.flag.raise()
    }

    /// Release the observation if it is still registered
    pub fn teardown(&mut self) {
        match self.phase {
            ObserverPhase::Observing => {
                self.viewport.disconnect();
                self.phase = ObserverPhase::TornDown;
            }
            ObserverPhase::Idle => self.phase = ObserverPhase::TornDown,
            ObserverPhase::Revealed | ObserverPhase::FailedOpen | ObserverPhase::TornDown => {}
        }
    }
}

impl<V: ViewportObserver> Drop for VisibilityObserver<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}
