/*
 * Responsibility
 * - crate の公開モジュール
 *   - resourceids: resource id の codec 本体 (Template / Parser / ResourceId)
 *   - ids: typed resource id と registry
 *   - odata: `@odata.type` による多態 payload の decode
 *   - api / app / middleware: HTTP サービス
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod ids;
pub mod middleware;
pub mod odata;
pub mod resourceids;
pub mod state;
