//! View panels for the single AIText window

pub mod banner;
pub mod composer;
pub mod entries;
pub mod header;
