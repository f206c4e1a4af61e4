//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation bar, the song table and the song form
//! while reading/writing the songs page state handed to them by the page.

pub mod nav_bar;
pub mod song_form;
pub mod song_table;
