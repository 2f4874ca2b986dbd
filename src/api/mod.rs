//! Status boundary for the signal grid
//!
//! Transport-agnostic handlers for the three signal endpoints. An HTTP layer
//! only needs to pass the method, path and parsed JSON body through
//! `SignalApi::handle` and write back the reply.

mod routes;
mod status;

pub use routes::{ApiReply, Method, SignalApi};
pub use status::{ApiResponse, SignalStatusBoard, ValidationResult};
