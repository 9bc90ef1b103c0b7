//! Grid Infrastructure versions

use super::{list_all, DataSource, DataSourceKind, ReadContext, READING};
use crate::error::Result;
use crate::odb::{GiVersionSummary, ListGiVersions, ListGiVersionsInput, OdbApi};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const RESOURCE: &str = "Gi Versions";

/// Filter for [`GiVersionsDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GiVersionsConfig {
    /// Restrict to versions supported on this shape
    #[serde(default)]
    pub shape: Option<String>,
}

/// Versions matching the filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiVersionsModel {
    pub shape: Option<String>,
    pub gi_versions: Vec<GiVersionModel>,
}

/// One GI version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GiVersionModel {
    pub version: Option<String>,
}

impl From<GiVersionSummary> for GiVersionModel {
    fn from(summary: GiVersionSummary) -> Self {
        Self {
            version: summary.version,
        }
    }
}

/// Lists GI versions, optionally for one shape
#[derive(Debug, Clone, Copy, Default)]
pub struct GiVersionsDataSource;

#[async_trait]
impl DataSource for GiVersionsDataSource {
    type Config = GiVersionsConfig;
    type Model = GiVersionsModel;

    const KIND: DataSourceKind = DataSourceKind::GiVersions;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &GiVersionsConfig,
        ctx: &ReadContext,
    ) -> Result<GiVersionsModel> {
        let input = ListGiVersionsInput {
            shape: config.shape.clone(),
            ..Default::default()
        };
        let versions = list_all::<ListGiVersions>(api, &input, ctx)
            .await
            .map_err(|e| e.in_operation(READING, RESOURCE, config.shape.as_deref()))?;

        Ok(GiVersionsModel {
            shape: config.shape.clone(),
            gi_versions: versions.into_iter().map(GiVersionModel::from).collect(),
        })
    }
}
