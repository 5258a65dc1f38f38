//! Domain model structs and DTOs.
//!
//! Each content table is an instantiation of the generic
//! [`record::Record`] entity. Each submodule contains:
//! - A `FromRow` + `Serialize` fields struct for the table-specific columns
//! - A zero-sized marker implementing [`record::ContentTable`]
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod content_section;
pub mod festival_stat;
pub mod media_file;
pub mod record;
pub mod site_config;
pub mod user;
