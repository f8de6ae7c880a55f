/**
 * Responsibility
 *  - segment / parser / id / validate を束ねる
 *  - 特定の resource 型には依存しない (具体的な id は crate::ids 側)
 */
mod error;
mod id;
mod parser;
mod segment;
mod validate;

pub use error::{ParseError, ResourceIdError, ValidationError};
pub use id::ResourceId;
pub use parser::{ParseResult, Parser};
pub use segment::{Segment, Template};
pub use validate::{validate_template, validate_with};
