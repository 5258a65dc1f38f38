//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Operations shared by every
//! content table (list, lookup, soft delete) live on the generic
//! [`RecordRepo`]; table-specific inserts and patches live on the
//! per-table repositories.

pub mod content_section_repo;
pub mod festival_stat_repo;
pub mod media_file_repo;
pub mod record_repo;
pub mod site_config_repo;
pub mod user_repo;

pub use content_section_repo::ContentSectionRepo;
pub use festival_stat_repo::FestivalStatRepo;
pub use media_file_repo::MediaFileRepo;
pub use record_repo::RecordRepo;
pub use site_config_repo::SiteConfigRepo;
pub use user_repo::UserRepo;
