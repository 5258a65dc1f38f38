//! Localized site bundle: every active content block resolved to one
//! language, with per-field fallback to the other.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use canjala_core::locale::{Bilingual, Locale};
use canjala_db::models::content_section::{ContentSection, ContentSections};
use canjala_db::models::festival_stat::{FestivalStat, FestivalStats};
use canjala_db::models::site_config::{SiteConfig, SiteConfigs};
use canjala_db::repositories::RecordRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::PublicRead;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LocalizedSection {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocalizedStat {
    pub year: String,
    pub participants: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocalizedConfig {
    pub value: Option<String>,
}

/// Everything the public site renders, in one language.
#[derive(Debug, Serialize)]
pub struct SiteBundle {
    pub locale: Locale,
    /// Keyed by `section_key`.
    pub sections: BTreeMap<String, LocalizedSection>,
    /// In presentation order.
    pub stats: Vec<LocalizedStat>,
    /// Keyed by `config_key`.
    pub config: BTreeMap<String, LocalizedConfig>,
}

fn resolve(pt: &Option<String>, en: &Option<String>, locale: Locale) -> Option<String> {
    Bilingual::new(pt.as_deref(), en.as_deref())
        .resolve(locale)
        .map(str::to_string)
}

impl SiteBundle {
    pub fn build(
        locale: Locale,
        sections: &[ContentSection],
        stats: &[FestivalStat],
        configs: &[SiteConfig],
    ) -> Self {
        let sections = sections
            .iter()
            .map(|s| {
                let f = &s.fields;
                (
                    f.section_key.clone(),
                    LocalizedSection {
                        title: resolve(&f.title_pt, &f.title_en, locale),
                        content: resolve(&f.content_pt, &f.content_en, locale),
                    },
                )
            })
            .collect();

        let stats = stats
            .iter()
            .map(|s| {
                let f = &s.fields;
                LocalizedStat {
                    year: f.year.clone(),
                    participants: f.participants,
                    title: resolve(&f.title_pt, &f.title_en, locale),
                    description: resolve(&f.description_pt, &f.description_en, locale),
                }
            })
            .collect();

        let config = configs
            .iter()
            .map(|c| {
                let f = &c.fields;
                (
                    f.config_key.clone(),
                    LocalizedConfig {
                        value: resolve(&f.value_pt, &f.value_en, locale),
                    },
                )
            })
            .collect();

        Self {
            locale,
            sections,
            stats,
            config,
        }
    }
}

/// GET /api/v1/site/{locale}
pub async fn get_site_bundle(
    _: PublicRead,
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locale: Locale = locale.parse()?;

    let (sections, stats, configs) = tokio::try_join!(
        RecordRepo::<ContentSections>::list(&state.pool),
        RecordRepo::<FestivalStats>::list(&state.pool),
        RecordRepo::<SiteConfigs>::list(&state.pool),
    )?;

    Ok(Json(DataResponse {
        data: SiteBundle::build(locale, &sections, &stats, &configs),
    }))
}
