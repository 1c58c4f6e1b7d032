pub(crate) use super::*;
pub(crate) use crate::deck::loader::DeckLoader;
pub(crate) use crate::tui::test_utils::{sample_app, sample_deck};
pub(crate) use std::path::Path;

mod basic;

/// A deck of `count` agenda slides titled "Slide 1".."Slide N".
pub(crate) fn make_deck(count: usize) -> Deck {
    let mut toml = String::from("footer = \"Test deck\"\n");
    for i in 1..=count {
        toml.push_str(&format!("[[slides]]\nkind = \"agenda\"\ntitle = \"Slide {i}\"\n"));
    }
    DeckLoader::parse_toml(&toml, Path::new("test.toml")).expect("test deck parses")
}
