//! ODB peering connections

use super::{
    checked, get_one, list_all, list_tags, require_id, DataSource, DataSourceKind, ReadContext,
    LISTING_TAGS, READING,
};
use crate::error::Result;
use crate::odb::{
    GetOdbPeeringConnection, GetOdbPeeringConnectionInput, ListOdbPeeringConnections,
    ListOdbPeeringConnectionsInput, OdbApi, OdbPeeringConnection, ResourceStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const RESOURCE: &str = "Odb Peering Connection";
const RESOURCE_LIST: &str = "Odb Peering Connections";

// ============================================================================
// Record
// ============================================================================

/// One ODB peering connection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OdbPeeringConnectionModel {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub odb_network_arn: Option<String>,
    pub peer_network_arn: Option<String>,
    pub odb_peering_connection_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub percent_progress: Option<f32>,
    /// Only filled in by the single-record data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl From<OdbPeeringConnection> for OdbPeeringConnectionModel {
    fn from(peering: OdbPeeringConnection) -> Self {
        Self {
            id: peering.odb_peering_connection_id,
            arn: peering.odb_peering_connection_arn,
            display_name: peering.display_name,
            status: checked("odb_peering_connection", "status", peering.status),
            status_reason: peering.status_reason,
            odb_network_arn: peering.odb_network_arn,
            peer_network_arn: peering.peer_network_arn,
            odb_peering_connection_type: peering.odb_peering_connection_type,
            created_at: peering.created_at,
            percent_progress: peering.percent_progress,
            tags: None,
        }
    }
}

// ============================================================================
// Single Record
// ============================================================================

/// Filter for [`OdbPeeringConnectionDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OdbPeeringConnectionConfig {
    /// Peering connection identifier
    pub id: String,
}

/// Reads one peering connection and its tags
#[derive(Debug, Clone, Copy, Default)]
pub struct OdbPeeringConnectionDataSource;

#[async_trait]
impl DataSource for OdbPeeringConnectionDataSource {
    type Config = OdbPeeringConnectionConfig;
    type Model = OdbPeeringConnectionModel;

    const KIND: DataSourceKind = DataSourceKind::OdbPeeringConnection;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &OdbPeeringConnectionConfig,
        ctx: &ReadContext,
    ) -> Result<OdbPeeringConnectionModel> {
        let id = config.id.as_str();
        require_id("id", id)?;

        let input = GetOdbPeeringConnectionInput::new(id);
        let peering = get_one::<GetOdbPeeringConnection, _>(api, &input, ctx, |out| {
            out.odb_peering_connection
        })
        .await
        .map_err(|e| e.in_operation(READING, RESOURCE, Some(id)))?;

        let mut model = OdbPeeringConnectionModel::from(peering);
        let tags = list_tags(api, model.arn.as_deref())
            .await
            .map_err(|e| e.in_operation(LISTING_TAGS, RESOURCE, Some(id)))?;
        model.tags = Some(tags);
        Ok(model)
    }
}

// ============================================================================
// Listing
// ============================================================================

/// Filter for [`OdbPeeringConnectionsDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OdbPeeringConnectionsConfig {
    /// Restrict to peerings of this ODB network
    #[serde(default)]
    pub odb_network_id: Option<String>,
}

/// Peering connections matching the filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OdbPeeringConnectionsModel {
    pub odb_network_id: Option<String>,
    pub odb_peering_connections: Vec<OdbPeeringConnectionModel>,
}

/// Lists peering connections, optionally of one ODB network
#[derive(Debug, Clone, Copy, Default)]
pub struct OdbPeeringConnectionsDataSource;

#[async_trait]
impl DataSource for OdbPeeringConnectionsDataSource {
    type Config = OdbPeeringConnectionsConfig;
    type Model = OdbPeeringConnectionsModel;

    const KIND: DataSourceKind = DataSourceKind::OdbPeeringConnections;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &OdbPeeringConnectionsConfig,
        ctx: &ReadContext,
    ) -> Result<OdbPeeringConnectionsModel> {
        let input = ListOdbPeeringConnectionsInput {
            odb_network_id: config.odb_network_id.clone(),
            ..Default::default()
        };
        let peerings = list_all::<ListOdbPeeringConnections>(api, &input, ctx)
            .await
            .map_err(|e| e.in_operation(READING, RESOURCE_LIST, config.odb_network_id.as_deref()))?;

        Ok(OdbPeeringConnectionsModel {
            odb_network_id: config.odb_network_id.clone(),
            odb_peering_connections: peerings
                .into_iter()
                .map(OdbPeeringConnectionModel::from)
                .collect(),
        })
    }
}
