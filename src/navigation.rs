// ABOUTME: Carousel navigation state machine and swipe gesture tracking
// ABOUTME: The embedded runtime script implements exactly these transitions

use serde::Serialize;
use std::str::FromStr;

/// Minimum horizontal travel, in pixels, before a swipe navigates.
pub const DEFAULT_DEAD_ZONE_PX: f64 = 10.0;

/// How `next`/`prev` behave at the ends of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavPolicy {
    #[default]
    Clamp,
    Wrap,
}

/// When the close control is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseVisibility {
    #[default]
    LastSlide,
    FirstTwo,
}

impl NavPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            NavPolicy::Clamp => "clamp",
            NavPolicy::Wrap => "wrap",
        }
    }
}

impl FromStr for NavPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(NavPolicy::Clamp),
            "wrap" => Ok(NavPolicy::Wrap),
            other => Err(format!(
                "unknown navigation policy {:?} (expected clamp or wrap)",
                other
            )),
        }
    }
}

impl CloseVisibility {
    pub fn as_str(self) -> &'static str {
        match self {
            CloseVisibility::LastSlide => "last-slide",
            CloseVisibility::FirstTwo => "first-two",
        }
    }
}

impl FromStr for CloseVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-slide" => Ok(CloseVisibility::LastSlide),
            "first-two" => Ok(CloseVisibility::FirstTwo),
            other => Err(format!(
                "unknown close visibility {:?} (expected last-slide or first-two)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Carousel state: the current slide index over a deck of `len` slides.
///
/// An empty deck is valid and every transition on it is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn step(&self, forward: bool, policy: NavPolicy) -> usize {
        if self.len == 0 {
            return 0;
        }
        let last = self.len - 1;
        match (policy, forward) {
            (NavPolicy::Clamp, true) => (self.current + 1).min(last),
            (NavPolicy::Clamp, false) => self.current.saturating_sub(1),
            (NavPolicy::Wrap, true) => (self.current + 1) % self.len,
            (NavPolicy::Wrap, false) => (self.current + self.len - 1) % self.len,
        }
    }

    /// Jump to `index`. Returns whether the state changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self, policy: NavPolicy) -> bool {
        let target = self.step(true, policy);
        self.go_to(target)
    }

    pub fn prev(&mut self, policy: NavPolicy) -> bool {
        let target = self.step(false, policy);
        self.go_to(target)
    }

    pub fn swipe(&mut self, direction: SwipeDirection, policy: NavPolicy) -> bool {
        match direction {
            SwipeDirection::Next => self.next(policy),
            SwipeDirection::Prev => self.prev(policy),
        }
    }

    pub fn close_visible(&self, policy: CloseVisibility) -> bool {
        if self.len == 0 {
            return false;
        }
        match policy {
            CloseVisibility::LastSlide => self.current == self.len - 1,
            CloseVisibility::FirstTwo => self.current < 2,
        }
    }

    pub fn prev_arrow_visible(&self) -> bool {
        self.len > 0 && self.current > 0
    }

    pub fn next_arrow_visible(&self) -> bool {
        self.len > 0 && self.current < self.len - 1
    }
}

/// Tracks one touch sequence from start to end.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: f64,
    end_x: f64,
    from_button: bool,
    active: bool,
    dead_zone: f64,
}

impl SwipeTracker {
    pub fn new(dead_zone: f64) -> Self {
        Self {
            dead_zone,
            ..Default::default()
        }
    }

    pub fn touch_start(&mut self, x: f64, on_button: bool) {
        self.start_x = x;
        self.end_x = x;
        self.from_button = on_button;
        self.active = true;
    }

    pub fn touch_move(&mut self, x: f64) {
        if self.active {
            self.end_x = x;
        }
    }

    /// Finish the gesture. Touches that began on a button never navigate.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        if !self.active {
            return None;
        }
        self.active = false;
        if self.from_button {
            return None;
        }
        let delta = self.end_x - self.start_x;
        if delta.abs() < self.dead_zone {
            return None;
        }
        if delta > 0.0 {
            Some(SwipeDirection::Prev)
        } else {
            Some(SwipeDirection::Next)
        }
    }
}
