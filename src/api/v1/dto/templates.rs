/*
 * Responsibility
 * - /templates 系の request/response DTO
 */
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resourceids::{Segment, Template};

#[derive(Debug, Serialize)]
pub struct SegmentDto {
    pub name: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'static str>,
}

impl From<&Segment> for SegmentDto {
    fn from(segment: &Segment) -> Self {
        match *segment {
            Segment::Static { name, value } => Self {
                name,
                kind: "static",
                value: Some(value),
            },
            Segment::UserSpecified { name, .. } => Self {
                name,
                kind: "user_specified",
                value: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub template: String,
    pub segments: Vec<SegmentDto>,
}

impl From<&Template> for TemplateResponse {
    fn from(t: &Template) -> Self {
        Self {
            name: t.name,
            description: t.description,
            template: t.placeholder(),
            segments: t.segments.iter().map(SegmentDto::from).collect(),
        }
    }
}

/// Where the id came from. Only ids received from the API may be parsed leniently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    #[default]
    User,
    ApiResponse,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub input: String,
    #[serde(default)]
    pub source: InputSource,
}

impl ParseRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.input.trim().is_empty() {
            return Err("input is required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SegmentValue {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub id: String,
    pub description: &'static str,
    pub segments: Vec<SegmentValue>,
}

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub segments: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    // Any JSON value: non-strings are reported as validation errors, not rejected.
    #[serde(default)]
    pub value: Value,
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub id: String,
    pub description: String,
}
