//! Rich listing
//!
//! A scrollable listing of lightweight-markup entries. Each entry is
//! classified from one line of markup (`[title]`, `[img]`, `[gap]`,
//! `[subtitle]`, `[video]`, `[-]`, plain text), measured against a column
//! width, and painted through a host inside a scroll region whose content is
//! exactly as tall as what gets painted.
//!
//! The core ([`parser`], [`listing`]) is host-agnostic; [`view`] hosts it in a
//! ratatui terminal.

pub mod config;
pub mod host;
pub mod listing;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod view;

pub use listing::RichListing;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
