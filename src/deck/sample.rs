//! The built-in sample deck.
//!
//! Presented when no deck file is given, and written out by `deck init` as a
//! starting point for new decks.

use std::fs;
use std::path::Path;

use crate::deck::error::DeckError;

/// Display name used in messages for the built-in deck.
pub const SAMPLE_DECK_NAME: &str = "<built-in sample deck>";

/// Default file name written by `deck init`.
pub const SAMPLE_DECK_FILE: &str = "deck.toml";

/// A six-slide sales deck exercising every slide kind.
pub const SAMPLE_DECK: &str = r#"# Sample pitch deck
#
# Each [[slides]] table is one slide, shown in file order.
# kind = "title" | "agenda" | "features" | "parts" | "conclusion"
# Any slide may attach an image shown in the modal ([i] key):
#
#   [slides.image]
#   path = "assets/jig.png"
#   caption = "Custom dimensional jig"

footer = "Sargent & McGrory Glass Partnership"

# ------------------------------------------------------------------------------
[[slides]]
kind = "title"
title = "A Partnership in Precision"
subtitle = "Sargent Manufacturing & McGrory Glass"
presenter = "Presented by: Yan Gonzalez, Sargent Manufacturing"
show_date = true

# ------------------------------------------------------------------------------
[[slides]]
kind = "agenda"
title = "Introduction & Agenda"
intro = "We'll cover three main areas:"

[[slides.items]]
icon = "🎯"
heading = "Our Custom Production Approach:"
text = "What our manufacturing floor is doing differently for your order."

[[slides.items]]
icon = "👥"
heading = "Our Enhanced Special Orders Process:"
text = "How our internal teams are coordinating to manage every detail."

[[slides.items]]
icon = "✅"
heading = "A Detailed Parts Verification:"
text = "A complete recap of the components for each door type."

# ------------------------------------------------------------------------------
[[slides]]
kind = "features"
title = "Point 1: Production Enhancements"
quote = "To eliminate any chance of error with your non-standard requirements, we've moved this order out of our standard workflow and into a specialized process."

[[slides.cards]]
heading = "Dedicated Production Cell"
body = "Staffed by senior technicians briefed on the specific requirements of the 2-9/16\" door thickness and trim offset."

[[slides.cards]]
heading = "'McGrory Glass' Order Tagging"
body = "Every component is physically tagged to prevent any part from being accidentally swapped with standard inventory."

[[slides.cards]]
heading = "Pre-Production Kitting"
body = "All components for a single device are gathered and verified in a 'kit' before assembly, including specific thru-bolts and spindles."

[[slides.cards]]
heading = "Heightened Quality Control"
body = "Two additional QC checkpoints: a dimensional check using a custom jig, and a final pre-packaging verification."

[slides.image]
path = "assets/qc-jig.png"
caption = "Custom dimensional check jig"

# ------------------------------------------------------------------------------
[[slides]]
kind = "features"
title = "Point 2: Special Orders & Engineering"
quote = "Behind the scenes, our Special Orders and Engineering teams are providing an extra layer of oversight. Atypical door thicknesses require meticulous coordination."

[[slides.cards]]
heading = "Dedicated Order Coordinator"
body = "I am personally serving as the single point of contact and coordinator for this order, from engineering to shipment."

[[slides.cards]]
heading = "Custom Bill of Materials (BOM)"
body = "Our engineers generated two distinct BOMs to ensure the correct parts are pulled and to explicitly address the trim offset."

[[slides.cards]]
heading = "Pre-Production Kickoff Meeting"
body = "A formal meeting with leads from Engineering, Production, and QA to review your blueprints and ensure total alignment."

[[slides.cards]]
heading = "Proactive Communication"
body = "We will provide progress updates and can share QC photos prior to shipping for a final layer of assurance."

# ------------------------------------------------------------------------------
[[slides]]
kind = "parts"
title = "Point 3: Parts Recap & Verification"
quote = "Now, I'd like to review the specific parts lists. The goal here is transparency and joint verification. Please stop me if you have any questions."

[[slides.tables]]
caption = "For 2-9/16\" Thick Doors"
rows = [
    { component = "Exit Device Chassis", part_number = "[Part #]", notes = "Standard chassis." },
    { component = "Trim / Lever Assembly", part_number = "[Part #]", notes = "Standard trim." },
    { component = "Spindle", part_number = "[Part #]", notes = "Special length for 2-9/16\" door thickness.", emphasis = "strong" },
    { component = "Mounting Thru-Bolts", part_number = "[Part #]", notes = "Special length for 2-9/16\" door thickness.", emphasis = "strong" },
    { component = "Cylinder Collar/Ring", part_number = "[Part #]", notes = "Sized to accommodate the extra door thickness.", emphasis = "strong" },
    { component = "Tailpiece", part_number = "[Part #]", notes = "Cut/sized for specific cylinder and thickness requirements." },
    { component = "End Cap & Mounting", part_number = "[Part #]", notes = "Standard component." },
    { component = "Strike Plate", part_number = "[Part #]", notes = "As specified for your frame." },
    { component = "Fastener Pack", part_number = "[Part #]", notes = "Includes all necessary screws for device and strike." },
]

[[slides.tables]]
caption = "For 2\" Thick Doors w/ 2-9/16\" Offset"
rows = [
    { component = "Exit Device Chassis", part_number = "[Part #]", notes = "Standard chassis." },
    { component = "Trim / Lever Assembly", part_number = "[Part #]", notes = "Standard trim." },
    { component = "Spindle", part_number = "[Part #]", notes = "Identical to 2-9/16\" door to accommodate trim offset.", emphasis = "strong" },
    { component = "Mounting Thru-Bolts", part_number = "[Part #]", notes = "Identical to 2-9/16\" door to accommodate trim offset.", emphasis = "strong" },
    { component = "Cylinder Collar/Ring", part_number = "[Part #]", notes = "Identical to 2-9/16\" door to accommodate trim offset.", emphasis = "strong" },
    { component = "Tailpiece", part_number = "[Part #]", notes = "Cut/sized for specific cylinder and thickness requirements." },
    { component = "End Cap & Mounting", part_number = "[Part #]", notes = "Standard component." },
    { component = "Strike Plate", part_number = "[Part #]", notes = "As specified for your frame." },
    { component = "Fastener Pack", part_number = "[Part #]", notes = "Includes all necessary screws for device and strike." },
    { component = "Custom Shim/Block (if req'd)", part_number = "[Part # or N/A]", notes = "To be discussed: Is a shim needed on the device side?", emphasis = "em" },
]

# ------------------------------------------------------------------------------
[[slides]]
kind = "conclusion"
title = "Our Commitment"
summary = "To summarize, we have built a custom, multi-layered process around your order to ensure both physical precision and administrative accuracy."
commitment = "Our goal is to be more than a supplier; we aim to be a genuine partner. We are confident that the steps we've taken will result in a product that installs smoothly and performs flawlessly for your unique application."
closing = "Thank you."

[[slides.points]]
icon = "🎯"
heading = "On the floor,"
text = "we're using dedicated cells and tagging."

[[slides.points]]
icon = "👥"
heading = "Behind the scenes,"
text = "we have dedicated coordination and custom BOMs."
"#;

/// Writes the sample deck to `path`.
///
/// - If the file exists and `force` is `false`, returns `DeckError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `<name>.backup` first.
pub fn write_sample_deck(path: &Path, force: bool) -> Result<(), DeckError> {
    if path.exists() {
        if !force {
            return Err(DeckError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let mut backup = path.as_os_str().to_owned();
        backup.push(".backup");
        let backup_path = Path::new(&backup);
        fs::rename(path, backup_path).map_err(|e| DeckError::WriteError {
            path: backup_path.to_path_buf(),
            source: e,
        })?;
        tracing::info!("Backed up existing deck to {}", backup_path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DeckError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, SAMPLE_DECK).map_err(|e| DeckError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!("Wrote sample deck to {}", path.display());
    Ok(())
}
