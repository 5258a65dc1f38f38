pub mod auth;
pub mod content_sections;
pub mod festival_stats;
pub mod image_proxy;
pub mod media;
pub mod site;
pub mod site_config;
