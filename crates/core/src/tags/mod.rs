//! Tags module - the registry of classification names.
//!
//! Balances only ever *read* this registry, through [`TagRegistryTrait`].
//! The CRUD half ([`TagRepositoryTrait`], [`TagService`]) exists so that a
//! registry can be populated at all.

mod memory_registry;
mod tags_errors;
mod tags_model;
mod tags_service;
mod tags_traits;

pub use memory_registry::InMemoryTagRegistry;
pub use tags_errors::TagError;
pub use tags_model::{NewTag, Tag, DEFAULT_BACKGROUND_COLOR, DEFAULT_FOREGROUND_COLOR};
pub use tags_service::TagService;
pub use tags_traits::{TagRegistryTrait, TagRepositoryTrait, TagServiceTrait};
