//! Card sets.
//!
//! Each set module exposes its cards and attacks as plain constructor
//! functions, plus ready-made decks and an `engine()` for the whole set.

pub mod genetic_apex;
