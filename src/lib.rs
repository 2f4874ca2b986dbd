//! Junction Signals Library
//!
//! Signal control and movement authorization for a four-way road junction,
//! with a headless vehicle simulation and a status boundary for external
//! consumers.

pub mod api;
pub mod simulation;
