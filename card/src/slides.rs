//! Slide controller: the single integer that drives the whole presentation.
//!
//! The index only moves by one step at a time and saturates at both ends.
//! The direction of the most recent move is kept so the view can pick an
//! enter/exit animation; it has no other meaning.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

/// Number of slides in the card.
pub const TOTAL_SLIDES: usize = 5;

const LAST_INDEX: usize = TOTAL_SLIDES - 1;

/// The five slides, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slide {
    /// Opening hello.
    #[default]
    Intro,
    /// Valentine greeting with the photo cards.
    Greeting,
    /// The trip question.
    Invite,
    /// Message form and preview.
    Message,
    /// Ticket document.
    Ticket,
}

impl Slide {
    pub const ALL: [Slide; TOTAL_SLIDES] = [Self::Intro, Self::Greeting, Self::Invite, Self::Message, Self::Ticket];

    /// Slide at `index`, clamped into range.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(LAST_INDEX)]
    }

    /// Zero-based position.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Intro => 0,
            Self::Greeting => 1,
            Self::Invite => 2,
            Self::Message => 3,
            Self::Ticket => 4,
        }
    }

    /// One-based slide number as shown in the footer.
    #[must_use]
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

/// Direction of the last navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `+1` for forward, `-1` for backward.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Owns the current slide index and the last navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideController {
    index: usize,
    direction: Direction,
}

impl SlideController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one slide, saturating at the last one.
    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        self.index = (self.index + 1).min(LAST_INDEX);
    }

    /// Go back one slide, saturating at the first one.
    pub fn prev(&mut self) {
        self.direction = Direction::Backward;
        self.index = self.index.saturating_sub(1);
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn slide(&self) -> Slide {
        Slide::from_index(self.index)
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index == LAST_INDEX
    }

    /// Completion percentage in `(0, 100]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / TOTAL_SLIDES as f64 * 100.0
    }
}
