//! Stored signal snapshot and response envelopes

use chrono::Utc;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::simulation::{SignalGrid, SignalSnapshot, SignalState};

/// Envelope wrapped around every boundary response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

/// Answer to a signal activation check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub can_activate: bool,
    pub message: String,
}

/// The one piece of state shared across the boundary
///
/// Lives for the process only; nothing is written to disk.
#[derive(Debug, Clone)]
pub struct SignalStatusBoard {
    current: SignalSnapshot,
}

impl Default for SignalStatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalStatusBoard {
    /// Board showing every light red
    pub fn new() -> Self {
        Self {
            current: SignalSnapshot {
                timestamp: Utc::now(),
                signals: SignalState::new().to_grid(),
            },
        }
    }

    pub fn current(&self) -> &SignalSnapshot {
        &self.current
    }

    /// Replace the stored grid from an update body and refresh the timestamp
    ///
    /// Only a complete `signals` grid replaces the stored one. A missing,
    /// partial or malformed grid leaves the previous signals in place; the
    /// update itself never fails.
    pub fn apply_update(&mut self, body: Option<&Value>) -> &SignalSnapshot {
        let signals = body.and_then(|body| body.get("signals"));
        match signals {
            Some(raw) => match serde_json::from_value::<SignalGrid>(raw.clone()) {
                Ok(grid) => self.current.signals = grid,
                Err(e) => warn!("Ignoring malformed signal grid, keeping previous: {}", e),
            },
            None => warn!("Signal update without 'signals', keeping previous grid"),
        }
        self.current.timestamp = Utc::now();
        info!("Signal status updated at {}", self.current.timestamp.to_rfc3339());
        &self.current
    }

    /// Every activation is permitted; there is no conflict checking
    pub fn validate(&self) -> ValidationResult {
        ValidationResult {
            can_activate: true,
            message: "All signals allowed - no restrictions".to_string(),
        }
    }
}
