//! Slide navigation and modal state for a running presentation.
//!
//! [`Presentation`] owns the active slide index and the image modal flag.
//! Every operation is total: navigation wraps around the deck instead of
//! clamping or failing, so the active index is always a valid slide.
//!
//! # Example
//!
//! ```
//! use pitch_deck::presentation::Presentation;
//! use std::num::NonZeroUsize;
//!
//! let mut p = Presentation::new(NonZeroUsize::new(5).expect("non-zero"));
//! p.previous();
//! assert_eq!(p.active_index(), 4);
//! p.next();
//! assert_eq!(p.active_index(), 0);
//! ```

use std::num::NonZeroUsize;

/// Navigation and modal state for one mounted presentation view.
///
/// The slide count is fixed at construction. The modal flag is independent
/// of navigation: moving between slides never opens or closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Number of slides in the deck (N).
    slide_count: NonZeroUsize,
    /// Zero-based index of the slide currently shown, always `< slide_count`.
    active_index: usize,
    /// Whether the image modal overlay is open.
    modal_open: bool,
}

impl Presentation {
    /// Creates a presentation positioned on the first slide with the modal closed.
    pub fn new(slide_count: NonZeroUsize) -> Self {
        Self {
            slide_count,
            active_index: 0,
            modal_open: false,
        }
    }

    /// Creates a presentation positioned on `start`, wrapped into range.
    pub fn starting_at(slide_count: NonZeroUsize, start: isize) -> Self {
        let mut presentation = Self::new(slide_count);
        presentation.go_to(start);
        presentation
    }

    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slide_count.get()
    }

    /// Zero-based index of the active slide.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// One-based position of the active slide, as shown in the footer.
    pub fn slide_number(&self) -> usize {
        self.active_index + 1
    }

    /// Whether the image modal is open.
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Advances to the next slide, wrapping from the last slide to the first.
    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.slide_count.get();
        tracing::debug!(
            "next slide: {}/{}",
            self.slide_number(),
            self.slide_count()
        );
    }

    /// Steps back one slide, wrapping from the first slide to the last.
    pub fn previous(&mut self) {
        let n = self.slide_count.get();
        self.active_index = (self.active_index + n - 1) % n;
        tracing::debug!(
            "previous slide: {}/{}",
            self.slide_number(),
            self.slide_count()
        );
    }

    /// Jumps to slide `index`, wrapping out-of-range and negative values.
    ///
    /// `go_to(-1)` lands on the last slide and `go_to(n)` on the first.
    pub fn go_to(&mut self, index: isize) {
        // A deck larger than isize::MAX slides cannot exist in memory.
        let n = self.slide_count.get() as isize;
        self.active_index = index.rem_euclid(n) as usize;
        tracing::debug!(
            "jump to slide: {}/{}",
            self.slide_number(),
            self.slide_count()
        );
    }

    /// Jumps to the first slide.
    pub fn first(&mut self) {
        self.go_to(0);
    }

    /// Jumps to the last slide.
    pub fn last(&mut self) {
        self.go_to(-1);
    }

    /// Flips the modal between open and closed.
    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
        tracing::debug!("modal open: {}", self.modal_open);
    }

    /// Closes the modal if it is open.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Fraction of the deck reached, `(active_index + 1) / N`.
    ///
    /// Always in `(0, 1]` and exactly `1.0` on the last slide.
    pub fn progress_ratio(&self) -> f64 {
        self.slide_number() as f64 / self.slide_count() as f64
    }

    /// Returns `true` when the active slide is the last one.
    pub fn is_last(&self) -> bool {
        self.slide_number() == self.slide_count()
    }
}
