use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};

use crate::error::{LhError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Styled text for terminals
    #[default]
    Human,
    /// One pretty-printed JSON document
    Json,
    /// One JSON object per line
    Jsonl,
    /// Tab-separated values, no headers or color
    Plain,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
            Self::Plain => "plain",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = LhError;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| LhError::Config(format!("unknown output format: {s}")))
    }
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

/// Error document printed on stdout in robot mode.
#[derive(Serialize)]
pub struct RobotErrorResponse {
    pub error: bool,
    pub code: String,
    pub message: String,
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[must_use]
pub fn robot_error(err: &LhError) -> RobotErrorResponse {
    let code = err.code().to_string();
    let message = err.to_string();
    RobotErrorResponse {
        error: true,
        status: RobotStatus::Error {
            code: code.clone(),
            message: message.clone(),
        },
        code,
        message,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

pub fn emit_jsonl<T: Serialize>(items: &[T]) -> Result<()> {
    for item in items {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Line-oriented builder for human output.
pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 18,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let key_style = style(format!("{key:width$}", width = self.key_width))
            .dim()
            .to_string();
        self.lines.push(format!("{key_style} {value}"));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn robot_error_carries_code() {
        let response = robot_error(&LhError::CourseNotFound("9".to_string()));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"], true);
        assert_eq!(value["code"], "course_not_found");
        assert_eq!(value["status"]["error"]["code"], "course_not_found");
        assert_eq!(value["status"]["error"]["message"], value["message"]);
    }

    #[test]
    fn robot_warnings_serialize_when_present() {
        let mut response = robot_ok(serde_json::json!({}));
        response.warnings.push("category not in picker: Cooking".to_string());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["warnings"][0], "category not in picker: Cooking");
    }

    #[test]
    fn robot_ok_wraps_data() {
        let response = robot_ok(serde_json::json!({"count": 2}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["data"]["count"], 2);
        assert!(value.get("warnings").is_none());
    }

    #[test]
    fn human_layout_joins_lines() {
        let mut layout = HumanLayout::new();
        layout.bullet("one").bullet("two");
        assert_eq!(layout.build(), "- one\n- two");
    }
}
