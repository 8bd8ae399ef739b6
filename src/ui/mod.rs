//! Presentation: the egui window panels and a plain-text fallback.

pub mod panels;
pub mod plot;
pub mod text;
