/*
 * Responsibility
 * - 提供している Template の一覧 (名前で引ける)
 * - resource を増やしたらここに 1 行追加する
 */
use crate::resourceids::{ResourceId, Template};

use super::beta::GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId;
use super::stable::{GroupIdCalendarViewIdInstanceIdAttachmentId, UserIdInferenceClassificationOverrideId};

static TEMPLATES: &[&Template] = &[
    GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId::TEMPLATE,
    GroupIdCalendarViewIdInstanceIdAttachmentId::TEMPLATE,
    UserIdInferenceClassificationOverrideId::TEMPLATE,
];

pub fn all() -> &'static [&'static Template] {
    TEMPLATES
}

pub fn lookup(name: &str) -> Option<&'static Template> {
    lookup_in(TEMPLATES, name)
}

pub fn lookup_in(templates: &[&'static Template], name: &str) -> Option<&'static Template> {
    templates.iter().copied().find(|t| t.name == name)
}
