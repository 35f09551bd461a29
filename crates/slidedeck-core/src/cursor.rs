//! Slide cursor: the index state machine.
//!
//! The deck never wraps. Moves that would leave `[0, total-1]` or land on
//! the current slide are no-ops and report no [`Transition`].

/// A successful cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

/// Position within a non-empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    current: usize,
    total: usize,
}

impl Cursor {
    /// Cursor at slide 0. `None` for an empty deck.
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self { current: 0, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last_index(&self) -> usize {
        self.total - 1
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last_index()
    }

    /// Jump to `index`.
    pub fn go_to(&mut self, index: usize) -> Option<Transition> {
        if index >= self.total || index == self.current {
            return None;
        }
        let from = self.current;
        self.current = index;
        Some(Transition { from, to: index })
    }

    pub fn next(&mut self) -> Option<Transition> {
        if self.is_last() {
            return None;
        }
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> Option<Transition> {
        if self.is_first() {
            return None;
        }
        self.go_to(self.current - 1)
    }

    pub fn first(&mut self) -> Option<Transition> {
        self.go_to(0)
    }

    pub fn last(&mut self) -> Option<Transition> {
        self.go_to(self.last_index())
    }
}
