//! Method and path routing for the signal endpoints

use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

use super::status::{ApiResponse, SignalStatusBoard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            other => Err(format!("unsupported method '{}'", other)),
        }
    }
}

/// Status code and JSON body for a handled request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    fn json<T: Serialize>(status: u16, payload: &T) -> Self {
        let body = serde_json::to_value(payload).unwrap_or_else(|e| {
            serde_json::json!({ "success": false, "message": e.to_string() })
        });
        Self { status, body }
    }
}

/// Handlers for `/signals/status`, `/signals/update` and `/signals/validate`
///
/// Paths are also accepted under an `/api` prefix.
#[derive(Debug, Clone, Default)]
pub struct SignalApi {
    pub board: SignalStatusBoard,
}

impl SignalApi {
    pub fn new() -> Self {
        Self {
            board: SignalStatusBoard::new(),
        }
    }

    pub fn handle(&mut self, method: Method, path: &str, body: Option<&Value>) -> ApiReply {
        let route = path.strip_prefix("/api").unwrap_or(path);
        let route = route.trim_end_matches('/');
        debug!("{:?} {}", method, route);

        match (method, route) {
            (Method::Get, "/signals/status") => ApiReply::json(
                200,
                &ApiResponse::ok(
                    self.board.current(),
                    "Signal status retrieved successfully",
                ),
            ),
            (Method::Post, "/signals/update") => {
                let snapshot = self.board.apply_update(body);
                ApiReply::json(
                    200,
                    &ApiResponse::ok(snapshot, "Signal status updated successfully"),
                )
            }
            (Method::Post, "/signals/validate") => {
                ApiReply::json(200, &ApiResponse::ok(self.board.validate(), "Validation complete"))
            }
            (_, "/signals/status" | "/signals/update" | "/signals/validate") => {
                ApiReply::json(405, &ApiResponse::error("Method not allowed"))
            }
            _ => ApiReply::json(404, &ApiResponse::error(format!("No route for {}", path))),
        }
    }
}
