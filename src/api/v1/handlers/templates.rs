/*
 * Responsibility
 * - /templates 系 handler (registry を名前で引いて parse / format / validate)
 * - source=user は parse_strict、source=api_response のみ parse_lenient
 * - validate は schema hook と同じく (warnings, errors) を 200 で返す
 */
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    api::v1::dto::templates::{
        FormatRequest, FormatResponse, InputSource, ParseRequest, ParseResponse, SegmentValue,
        TemplateResponse, ValidateRequest, ValidateResponse,
    },
    error::AppError,
    resourceids::{Parser, ResourceIdError, Template, validate_template},
    state::AppState,
};

fn find_template(state: &AppState, name: &str) -> Result<&'static Template, AppError> {
    state.template(name).ok_or_else(|| {
        tracing::debug!(template = name, "unknown template");
        AppError::not_found("template")
    })
}

pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<TemplateResponse>> {
    Json(
        state
            .templates()
            .iter()
            .map(|t| TemplateResponse::from(*t))
            .collect(),
    )
}

pub async fn parse_id(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("BAD_REQUEST", msg))?;
    let template = find_template(&state, &name)?;
    let parser = Parser::new(template);

    let parsed = match req.source {
        InputSource::User => parser.parse_strict(&req.input),
        InputSource::ApiResponse => parser.parse_lenient(&req.input),
    }
    .map_err(|e| ResourceIdError::parsing(&req.input, e))?;

    let id = template.emit(parsed.values().map(|(_, v)| v));
    let segments = parsed
        .values()
        .map(|(segment, value)| SegmentValue {
            name: segment,
            value: value.to_string(),
        })
        .collect();

    Ok(Json(ParseResponse {
        id,
        description: template.description,
        segments,
    }))
}

pub async fn format_id(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<FormatRequest>,
) -> Result<Json<FormatResponse>, AppError> {
    let template = find_template(&state, &name)?;

    // A missing value here comes from the request body, so it is the caller's error.
    let id = template.format(&req.segments).map_err(|e| match e {
        ResourceIdError::SegmentNotSpecified { segment, .. } => {
            AppError::bad_request("MISSING_SEGMENT", format!("segment {segment:?} is required"))
        }
        other => AppError::from(other),
    })?;

    Ok(Json(FormatResponse { id }))
}

pub async fn validate_id(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    let template = find_template(&state, &name)?;
    let key = req.key.as_deref().unwrap_or("id");

    let (warnings, errors) = validate_template(template, &req.value, key);

    Ok(Json(ValidateResponse {
        warnings,
        errors: errors.iter().map(ToString::to_string).collect(),
    }))
}
