/*
 * Responsibility
 * - 入力 path を Template に沿って走査し ParseResult を作る
 * - 入口は 2 つ: parse_strict (user 入力) / parse_lenient (API response のみ)
 *   bool フラグを公開すると誤用しやすいので Sensitivity は private
 */
use std::collections::HashMap;

use super::error::{ParseError, ResourceIdError};
use super::segment::{Segment, Template};

/// Captured values of one successful parse, keyed by segment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub parsed: HashMap<&'static str, String>,
    /// User-specified segment names of the template that produced this result, in order.
    pub keys: Vec<&'static str>,
    pub raw_input: String,
}

impl ParseResult {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parsed.get(name).map(String::as_str)
    }

    /// Removes `name` from the result for a typed projection. A missing value is a
    /// template/struct mismatch and is reported as `SegmentNotSpecified`.
    pub fn require(
        &mut self,
        template: &'static Template,
        name: &'static str,
    ) -> Result<String, ResourceIdError> {
        self.parsed
            .remove(name)
            .ok_or_else(|| ResourceIdError::SegmentNotSpecified {
                resource: template.description,
                segment: name,
                parsed_keys: self.keys.iter().map(|k| k.to_string()).collect(),
            })
    }

    /// `(name, value)` pairs in template order.
    pub fn values(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.keys
            .iter()
            .filter_map(|k| self.parsed.get(k).map(|v| (*k, v.as_str())))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sensitivity {
    Exact,
    IgnoreAsciiCase,
}

#[derive(Clone, Copy, Debug)]
pub struct Parser {
    template: &'static Template,
}

impl Parser {
    pub fn new(template: &'static Template) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &'static Template {
        self.template
    }

    /// Parses user-supplied input. Static segments must match exactly.
    pub fn parse_strict(&self, input: &str) -> Result<ParseResult, ParseError> {
        self.parse(input, Sensitivity::Exact)
    }

    /// Parses an id returned by the API, tolerating case drift in static segments.
    /// Never use this for user input.
    pub fn parse_lenient(&self, input: &str) -> Result<ParseResult, ParseError> {
        let result = self.parse(input, Sensitivity::IgnoreAsciiCase);
        if let Err(e) = &result {
            tracing::debug!(template = self.template.name, error = %e, "lenient parse failed");
        }
        result
    }

    fn parse(&self, input: &str, sensitivity: Sensitivity) -> Result<ParseResult, ParseError> {
        let trimmed = input.trim_matches('/');
        let components: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let expected = self.template.segments.len();
        let mut parsed = HashMap::new();
        let mut keys = Vec::new();

        for (position, segment) in self.template.segments.iter().enumerate() {
            let Some(component) = components.get(position).copied() else {
                return Err(ParseError::InsufficientSegments {
                    expected,
                    actual: components.len(),
                });
            };

            match *segment {
                Segment::Static { value, .. } => {
                    let matched = match sensitivity {
                        Sensitivity::Exact => component == value,
                        Sensitivity::IgnoreAsciiCase => component.eq_ignore_ascii_case(value),
                    };
                    if !matched {
                        return Err(ParseError::SegmentMismatch {
                            expected: value,
                            actual: component.to_string(),
                            position,
                        });
                    }
                }
                Segment::UserSpecified { name, .. } => {
                    if component.is_empty() {
                        return Err(ParseError::EmptySegment {
                            segment: name,
                            position,
                        });
                    }
                    parsed.insert(name, component.to_string());
                    keys.push(name);
                }
            }
        }

        if components.len() > expected {
            return Err(ParseError::UnexpectedTrailingSegments {
                expected,
                actual: components.len(),
            });
        }

        Ok(ParseResult {
            parsed,
            keys,
            raw_input: input.to_string(),
        })
    }
}
