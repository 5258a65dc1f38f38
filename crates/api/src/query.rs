//! Query parameter types shared by handlers.

use serde::Deserialize;

/// `?section=` filter for the media listing.
#[derive(Debug, Default, Deserialize)]
pub struct MediaListParams {
    pub section: Option<String>,
}

impl MediaListParams {
    /// The section to filter on. A blank `?section=` lists everything.
    pub fn section_filter(&self) -> Option<&str> {
        self.section.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// `?url=` target for the image proxy.
#[derive(Debug, Deserialize)]
pub struct ImageProxyParams {
    pub url: Option<String>,
}
