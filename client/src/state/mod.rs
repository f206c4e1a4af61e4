//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data mutated through methods so page logic can be tested
//! without a browser; pages hold it in `RwSignal`s provided as context.

pub mod songs;
