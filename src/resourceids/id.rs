/*
 * Responsibility
 * - typed resource id の共通 trait (ResourceId)
 * - 各 typed id が提供するのは Template と field の対応 (from_parse_result / segment_values) だけ
 * - parse / validate / id / describe は trait の default 実装で共通化
 */
use serde_json::Value;

use super::error::{ResourceIdError, ValidationError};
use super::parser::{ParseResult, Parser};
use super::segment::{Segment, Template};
use super::validate;

pub trait ResourceId: Sized {
    const TEMPLATE: &'static Template;

    /// Projects a parse result into the typed struct.
    fn from_parse_result(input: ParseResult) -> Result<Self, ResourceIdError>;

    /// User-specified values in template order.
    fn segment_values(&self) -> Vec<&str>;

    /// Parses user input (configuration, import ids). Static segments must match exactly.
    fn parse(input: &str) -> Result<Self, ResourceIdError> {
        let parsed = Parser::new(Self::TEMPLATE)
            .parse_strict(input)
            .map_err(|e| ResourceIdError::parsing(input, e))?;
        Self::from_parse_result(parsed)
    }

    /// Parses an id received from the API, tolerating case drift in static segments.
    /// note: only for API response data, never for user input.
    fn parse_insensitively(input: &str) -> Result<Self, ResourceIdError> {
        let parsed = Parser::new(Self::TEMPLATE)
            .parse_lenient(input)
            .map_err(|e| ResourceIdError::parsing(input, e))?;
        Self::from_parse_result(parsed)
    }

    /// Schema-level check that `input` is a string parseable as this id.
    fn validate(input: &Value, key: &str) -> (Vec<String>, Vec<ValidationError>) {
        validate::validate_with(input, key, Self::parse)
    }

    /// The formatted id, e.g. `/users/u1/inferenceClassification/overrides/o1`.
    fn id(&self) -> String {
        Self::TEMPLATE.emit(self.segment_values().into_iter())
    }

    fn describe(&self) -> String {
        let components: Vec<String> = Self::TEMPLATE
            .segments
            .iter()
            .filter_map(|s| match s {
                Segment::UserSpecified { label, .. } => Some(*label),
                Segment::Static { .. } => None,
            })
            .zip(self.segment_values())
            .map(|(label, value)| format!("{label}: {value:?}"))
            .collect();
        format!("{} ({})", Self::TEMPLATE.description, components.join("\n"))
    }
}
