//! Deck content model.
//!
//! A [`Deck`] is an ordered, non-empty list of [`Slide`]s read from a TOML
//! file. Each `[[slides]]` table is tagged by `kind`:
//!
//! ```toml
//! footer = "Acme & Partner"
//!
//! [[slides]]
//! kind = "title"
//! title = "A Partnership in Precision"
//! subtitle = "Acme Manufacturing"
//!
//! [[slides]]
//! kind = "agenda"
//! title = "Agenda"
//! items = [{ icon = "🎯", heading = "Production", text = "What changes on the floor." }]
//! ```

/// Deck loading and parse error types.
pub mod error;

/// Deck file loader with validation.
pub mod loader;

/// Built-in sample deck and `deck init` support.
pub mod sample;

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// An ordered sequence of slides plus deck-wide labels.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Deck {
    /// Label shown at the bottom-left of every slide.
    #[serde(default)]
    pub footer: String,
    /// Slides in presentation order.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Number of slides, or `None` for an empty deck.
    ///
    /// Decks returned by [`loader::DeckLoader`] are validated and always
    /// have at least one slide.
    pub fn slide_count(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.slides.len())
    }

    /// Returns the slide at `index`, if any.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// One entry per slide, in presentation order.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.slides
            .iter()
            .enumerate()
            .map(|(index, slide)| OutlineEntry {
                index,
                kind: slide.kind(),
                title: slide.title().to_string(),
            })
            .collect()
    }
}

/// A slide's position, kind and title, as printed by `deck outline`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Zero-based slide index.
    pub index: usize,
    pub kind: &'static str,
    pub title: String,
}

/// A single slide, tagged by `kind` in TOML.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Slide {
    /// Opening slide with presenter and date.
    Title(TitleSlide),
    /// Agenda with icon bullets.
    Agenda(AgendaSlide),
    /// Quote followed by a grid of feature cards.
    Features(FeatureSlide),
    /// Quote followed by one or more parts tables.
    Parts(PartsSlide),
    /// Closing summary.
    Conclusion(ConclusionSlide),
}

impl Slide {
    /// Heading of the slide, used by the outline and the modal title.
    pub fn title(&self) -> &str {
        match self {
            Slide::Title(s) => &s.title,
            Slide::Agenda(s) => &s.title,
            Slide::Features(s) => &s.title,
            Slide::Parts(s) => &s.title,
            Slide::Conclusion(s) => &s.title,
        }
    }

    /// The `kind` tag as written in the deck file.
    pub fn kind(&self) -> &'static str {
        match self {
            Slide::Title(_) => "title",
            Slide::Agenda(_) => "agenda",
            Slide::Features(_) => "features",
            Slide::Parts(_) => "parts",
            Slide::Conclusion(_) => "conclusion",
        }
    }

    /// Image attached to the slide, shown in the modal.
    pub fn image(&self) -> Option<&ImageAsset> {
        match self {
            Slide::Title(s) => s.image.as_ref(),
            Slide::Agenda(s) => s.image.as_ref(),
            Slide::Features(s) => s.image.as_ref(),
            Slide::Parts(s) => s.image.as_ref(),
            Slide::Conclusion(s) => s.image.as_ref(),
        }
    }
}

/// An opaque image asset; the presenter shows its caption and location.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ImageAsset {
    /// File path or URL of the image.
    pub path: PathBuf,
    /// Caption shown above the path in the modal.
    pub caption: String,
}

/// Opening slide.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TitleSlide {
    pub title: String,
    pub subtitle: String,
    /// "Presented by" line.
    pub presenter: String,
    /// Print the date the presentation was started below the presenter.
    pub show_date: bool,
    pub image: Option<ImageAsset>,
}

impl Default for TitleSlide {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            presenter: String::new(),
            show_date: true,
            image: None,
        }
    }
}

/// Bullet with a leading icon and a bold heading.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Bullet {
    pub icon: String,
    pub heading: String,
    pub text: String,
}

/// Agenda slide.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AgendaSlide {
    pub title: String,
    pub intro: String,
    pub items: Vec<Bullet>,
    pub image: Option<ImageAsset>,
}

/// A card in a feature grid.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FeatureCard {
    pub heading: String,
    pub body: String,
}

/// Feature grid slide.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FeatureSlide {
    pub title: String,
    pub quote: String,
    pub cards: Vec<FeatureCard>,
    pub image: Option<ImageAsset>,
}

/// How a part's notes are emphasised.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    #[default]
    Plain,
    /// Bold; used for notes that differ from the standard build.
    Strong,
    /// Italic; used for open questions.
    Em,
}

/// One row of a parts table.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Part {
    pub component: String,
    pub part_number: String,
    pub notes: String,
    pub emphasis: Emphasis,
}

/// A captioned parts table.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PartsTable {
    pub caption: String,
    pub rows: Vec<Part>,
}

/// Parts verification slide.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PartsSlide {
    pub title: String,
    pub quote: String,
    pub tables: Vec<PartsTable>,
    pub image: Option<ImageAsset>,
}

/// Closing slide.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConclusionSlide {
    pub title: String,
    pub summary: String,
    pub points: Vec<Bullet>,
    pub commitment: String,
    /// Final line, e.g. "Thank you."
    pub closing: String,
    pub image: Option<ImageAsset>,
}
