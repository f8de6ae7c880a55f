/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - 参照できる Template の一覧 (不変データのみ)
 * - Clone 前提で持つ (中身は 'static な参照なので Clone cheap)
 */
use crate::ids::registry;
use crate::resourceids::Template;

#[derive(Clone, Debug)]
pub struct AppState {
    templates: &'static [&'static Template],
}

impl AppState {
    pub fn new(templates: &'static [&'static Template]) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &'static [&'static Template] {
        self.templates
    }

    pub fn template(&self, name: &str) -> Option<&'static Template> {
        registry::lookup_in(self.templates, name)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(registry::all())
    }
}
