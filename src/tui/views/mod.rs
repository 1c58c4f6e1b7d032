//! View modules for the presenter.

pub mod modal;
pub mod parts;
pub mod slide;
