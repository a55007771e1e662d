pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod list_by_tag;
pub mod types;
pub mod update;
