//! Flashcard deck with flip and swipe interaction.
//!
//! Pointer input (touch or mouse) is reduced to `begin_drag`, `drag_to`, and
//! `end_drag`. A release past `SWIPE_THRESHOLD_PX` swipes (left advances,
//! right goes back); a release that barely moved counts as a tap and flips.

#[cfg(test)]
#[path = "flashcards_test.rs"]
mod flashcards_test;

pub const SWIPE_THRESHOLD_PX: f64 = 80.0;
pub const TAP_SLOP_PX: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

/// What a pointer release resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Flipped,
    Next,
    Previous,
    /// Moved more than a tap but less than a swipe; the card springs back.
    Cancelled,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    index: usize,
    pub face: CardFace,
    drag_start: Option<f64>,
    /// Current horizontal drag offset, for the card transform.
    pub offset: f64,
}

impl FlashcardDeck {
    #[must_use]
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards, ..Self::default() }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.index)
    }

    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        if self.cards.is_empty() { (0, 0) } else { (self.index + 1, self.cards.len()) }
    }

    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn flip(&mut self) {
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
    }

    /// Advance, clamped at the last card. Always shows the front.
    pub fn next(&mut self) {
        if self.index + 1 < self.cards.len() {
            self.index += 1;
        }
        self.face = CardFace::Front;
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.face = CardFace::Front;
    }

    /// Add a card after trimming; blank sides are rejected.
    pub fn add(&mut self, front: &str, back: &str) -> bool {
        let (front, back) = (front.trim(), back.trim());
        if front.is_empty() || back.is_empty() {
            return false;
        }
        self.cards.push(Flashcard { front: front.to_owned(), back: back.to_owned() });
        true
    }

    pub fn remove_current(&mut self) {
        if self.index < self.cards.len() {
            self.cards.remove(self.index);
        }
        if self.index >= self.cards.len() {
            self.index = self.cards.len().saturating_sub(1);
        }
        self.face = CardFace::Front;
    }

    pub fn begin_drag(&mut self, x: f64) {
        self.drag_start = Some(x);
        self.offset = 0.0;
    }

    pub fn drag_to(&mut self, x: f64) {
        if let Some(start) = self.drag_start {
            self.offset = x - start;
        }
    }

    /// Resolve the gesture. `None` when no drag was in progress.
    pub fn end_drag(&mut self) -> Option<DragOutcome> {
        self.drag_start.take()?;
        let offset = std::mem::take(&mut self.offset);
        let outcome = if offset <= -SWIPE_THRESHOLD_PX {
            self.next();
            DragOutcome::Next
        } else if offset >= SWIPE_THRESHOLD_PX {
            self.prev();
            DragOutcome::Previous
        } else if offset.abs() < TAP_SLOP_PX {
            self.flip();
            DragOutcome::Flipped
        } else {
            DragOutcome::Cancelled
        };
        Some(outcome)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }
}

/// Starter deck shown before the user adds their own cards.
#[must_use]
pub fn sample_deck() -> Vec<Flashcard> {
    [
        ("What is the derivative of x²?", "2x"),
        ("Newton's second law", "F = m·a"),
        ("Chemical symbol for sodium", "Na"),
        ("Area of a circle", "π·r²"),
    ]
    .into_iter()
    .map(|(front, back)| Flashcard { front: front.to_owned(), back: back.to_owned() })
    .collect()
}
