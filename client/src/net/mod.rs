//! Networking modules for the song REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the four song-storage calls; the wire schema lives in the
//! shared `songs` crate.

pub mod api;
