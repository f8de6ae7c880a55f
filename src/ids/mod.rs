/**
 * Responsibility
 *  - API version ごとの typed resource id を公開する
 *  - registry で名前から Template を引けるようにする
 */
pub mod beta;
pub mod registry;
pub mod stable;
