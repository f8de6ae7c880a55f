/*
 * Responsibility
 * - schema の validation hook 用 (warnings, errors) を返す
 * - 入力は型の決まっていない値 (serde_json::Value) として受ける
 * - panic しない: 失敗はすべて errors に積む
 */
use serde_json::Value;

use super::error::{ResourceIdError, ValidationError};
use super::parser::Parser;
use super::segment::Template;

pub fn validate_with<T>(
    input: &Value,
    key: &str,
    parse: impl FnOnce(&str) -> Result<T, ResourceIdError>,
) -> (Vec<String>, Vec<ValidationError>) {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    let Some(v) = input.as_str() else {
        errors.push(ValidationError::NotAString {
            key: key.to_string(),
        });
        return (warnings, errors);
    };

    if let Err(e) = parse(v) {
        errors.push(ValidationError::Invalid(e));
    }

    (warnings, errors)
}

/// Untyped variant of `ResourceId::validate` for a template looked up at runtime.
pub fn validate_template(
    template: &'static Template,
    input: &Value,
    key: &str,
) -> (Vec<String>, Vec<ValidationError>) {
    let parser = Parser::new(template);
    validate_with(input, key, |s| {
        parser
            .parse_strict(s)
            .map_err(|e| ResourceIdError::parsing(s, e))
    })
}
