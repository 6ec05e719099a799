//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Question, TimerState, TimerStats};

/// Body of POST /answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub option: String,
}

/// API response structure for timer event endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub variant: String,
    pub timer: TimerState,
    pub question: Option<Question>,
}

impl ApiResponse {
    /// Create a response whose status reflects whether the timer is running
    pub fn from_timer(
        message: String,
        variant: &str,
        timer: TimerState,
        question: Option<Question>,
    ) -> Self {
        let status = if timer.active { "active" } else { "inactive" };
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            variant: variant.to_string(),
            timer,
            question,
        }
    }
}

/// Status response with timer instrumentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub variant: String,
    pub timer: TimerState,
    pub stats: TimerStats,
    pub live_mechanisms: u64,
    pub question: Option<Question>,
    pub total_questions: usize,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
