//! Resource methods organized by category.
//!
//! Each module adds `DataApi` methods for one group of related server
//! resources. Plain CRUD goes through the resource table; everything else
//! calls a generic operation directly.

pub mod system;
pub mod authentication;
pub mod sites;
pub mod entries;
pub mod pages;
pub mod categories;
pub mod folders;
pub mod tags;
pub mod users;
pub mod assets;
pub mod comments;
pub mod trackbacks;
pub mod fields;
pub mod templates;
pub mod widgets;
pub mod themes;
pub mod roles;
pub mod permissions;
pub mod logs;
pub mod formatted_texts;
pub mod stats;
pub mod plugins;
