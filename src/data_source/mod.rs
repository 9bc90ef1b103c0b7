//! Inventory data sources
//!
//! Each data source reads a small filter, lists or fetches ODB records and
//! flattens them into a serializable model:
//!
//! ```text
//! config (JSON) ──▶ list/get via OdbApi ──▶ flatten ──▶ state (JSON)
//! ```
//!
//! Listing data sources go through the pagination aggregator, so their
//! output is either every record of every page or an error. Failures are
//! annotated with the action, resource and filter id before they leave the
//! data source.

mod cloud_autonomous_vm_cluster;
mod cloud_exadata_infrastructure;
mod cloud_vm_cluster;
mod db_nodes;
mod db_servers;
mod db_system_shapes;
mod gi_versions;
mod odb_peering_connection;

pub use cloud_autonomous_vm_cluster::{
    AutonomousMaintenanceWindowModel, CloudAutonomousVmClusterConfig,
    CloudAutonomousVmClusterDataSource, CloudAutonomousVmClusterModel,
    CloudAutonomousVmClustersConfig, CloudAutonomousVmClustersDataSource,
    CloudAutonomousVmClustersModel, DayOfWeekModel, MonthModel,
};
pub use cloud_exadata_infrastructure::{
    CloudExadataInfrastructureConfig, CloudExadataInfrastructureDataSource,
    CloudExadataInfrastructureModel, CloudExadataInfrastructuresConfig,
    CloudExadataInfrastructuresDataSource, CloudExadataInfrastructuresModel,
    MaintenanceWindowModel,
};
pub use cloud_vm_cluster::{
    hostname_prefix, major_gi_version, CloudVmClusterConfig, CloudVmClusterDataSource,
    CloudVmClusterModel, CloudVmClustersConfig, CloudVmClustersDataSource, CloudVmClustersModel,
    DataCollectionOptionsModel, DbIormConfigModel, IormConfigModel,
};
pub use db_nodes::{DbNodeModel, DbNodesConfig, DbNodesDataSource, DbNodesModel};
pub use db_servers::{
    DbServerModel, DbServerPatchingDetailsModel, DbServersConfig, DbServersDataSource,
    DbServersModel,
};
pub use db_system_shapes::{
    DbSystemShapeModel, DbSystemShapesConfig, DbSystemShapesDataSource, DbSystemShapesModel,
};
pub use gi_versions::{GiVersionModel, GiVersionsConfig, GiVersionsDataSource, GiVersionsModel};
pub use odb_peering_connection::{
    OdbPeeringConnectionConfig, OdbPeeringConnectionDataSource, OdbPeeringConnectionModel,
    OdbPeeringConnectionsConfig, OdbPeeringConnectionsDataSource, OdbPeeringConnectionsModel,
};

use crate::error::{Error, Result};
use crate::odb::{
    invoke, ListOperation, ListPages, ListTagsForResource, ListTagsForResourceInput, OdbApi,
    Operation, WireEnum,
};
use crate::pagination::aggregate_with_cancel;
use crate::types::JsonValue;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Action name used in read diagnostics
pub const READING: &str = "reading";

/// Action name used in tag diagnostics
pub const LISTING_TAGS: &str = "listing tags for";

/// Action name used when a record's dependencies cannot be resolved
pub const WAITING_FOR_CREATION: &str = "waiting for creation";

// ============================================================================
// Read Context
// ============================================================================

/// Per-read settings shared by every remote call of one read
#[derive(Debug, Clone, Default)]
pub struct ReadContext {
    /// Checked before every page fetch
    pub cancel: CancellationToken,
}

impl ReadContext {
    /// A context that is never cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// A context bound to an existing cancellation token
    pub fn with_cancel(cancel: CancellationToken) -> Self {
        Self { cancel }
    }
}

// ============================================================================
// Data Source Trait
// ============================================================================

/// One read-only inventory view
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Filter accepted by the data source
    type Config: DeserializeOwned + Send + Sync;
    /// State produced by a read
    type Model: Serialize + Send;

    /// Which data source this is
    const KIND: DataSourceKind;

    /// Read the current state for `config`
    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &Self::Config,
        ctx: &ReadContext,
    ) -> Result<Self::Model>;
}

/// Decode a JSON config, read, and encode the state
async fn read_as<D: DataSource>(
    source: D,
    api: &dyn OdbApi,
    config: JsonValue,
    ctx: &ReadContext,
) -> Result<JsonValue> {
    let name = D::KIND.name();
    let config: D::Config = serde_json::from_value(config)
        .map_err(|e| Error::config(format!("invalid {name} configuration: {e}")))?;

    let model = source.read(api, &config, ctx).await?;
    info!(data_source = name, "read complete");
    Ok(serde_json::to_value(model)?)
}

// ============================================================================
// Data Source Kind
// ============================================================================

/// Every data source this crate provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum DataSourceKind {
    /// DB nodes of a VM cluster
    DbNodes,
    /// Database servers of an Exadata infrastructure
    DbServers,
    /// Available system shapes
    DbSystemShapes,
    /// Grid Infrastructure versions
    GiVersions,
    /// ODB peering connections
    OdbPeeringConnections,
    /// One ODB peering connection
    OdbPeeringConnection,
    /// VM clusters
    CloudVmClusters,
    /// One VM cluster
    CloudVmCluster,
    /// Exadata infrastructures
    CloudExadataInfrastructures,
    /// One Exadata infrastructure
    CloudExadataInfrastructure,
    /// Autonomous VM clusters
    CloudAutonomousVmClusters,
    /// One Autonomous VM cluster
    CloudAutonomousVmCluster,
}

impl DataSourceKind {
    /// All data sources, in listing order
    pub const ALL: &'static [Self] = &[
        Self::DbNodes,
        Self::DbServers,
        Self::DbSystemShapes,
        Self::GiVersions,
        Self::OdbPeeringConnections,
        Self::OdbPeeringConnection,
        Self::CloudVmClusters,
        Self::CloudVmCluster,
        Self::CloudExadataInfrastructures,
        Self::CloudExadataInfrastructure,
        Self::CloudAutonomousVmClusters,
        Self::CloudAutonomousVmCluster,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::DbNodes => "db_nodes",
            Self::DbServers => "db_servers",
            Self::DbSystemShapes => "db_system_shapes",
            Self::GiVersions => "gi_versions",
            Self::OdbPeeringConnections => "odb_peering_connections",
            Self::OdbPeeringConnection => "odb_peering_connection",
            Self::CloudVmClusters => "cloud_vm_clusters",
            Self::CloudVmCluster => "cloud_vm_cluster",
            Self::CloudExadataInfrastructures => "cloud_exadata_infrastructures",
            Self::CloudExadataInfrastructure => "cloud_exadata_infrastructure",
            Self::CloudAutonomousVmClusters => "cloud_autonomous_vm_clusters",
            Self::CloudAutonomousVmCluster => "cloud_autonomous_vm_cluster",
        }
    }

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            Self::DbNodes => "DB nodes of a VM cluster (cloud_vm_cluster_id)",
            Self::DbServers => {
                "database servers of an Exadata infrastructure (cloud_exadata_infrastructure_id)"
            }
            Self::DbSystemShapes => "system shapes (optional availability_zone_id)",
            Self::GiVersions => "Grid Infrastructure versions (optional shape)",
            Self::OdbPeeringConnections => "ODB peering connections (optional odb_network_id)",
            Self::OdbPeeringConnection => "one ODB peering connection with tags (id)",
            Self::CloudVmClusters => {
                "VM clusters (optional cloud_exadata_infrastructure_id)"
            }
            Self::CloudVmCluster => "one VM cluster with tags (id)",
            Self::CloudExadataInfrastructures => "Exadata infrastructures",
            Self::CloudExadataInfrastructure => "one Exadata infrastructure with tags (id)",
            Self::CloudAutonomousVmClusters => {
                "Autonomous VM clusters (optional cloud_exadata_infrastructure_id)"
            }
            Self::CloudAutonomousVmCluster => "one Autonomous VM cluster with tags (id)",
        }
    }

    /// Read this data source from a JSON config and return its state as JSON
    pub async fn read_json(
        self,
        api: &dyn OdbApi,
        config: JsonValue,
        ctx: &ReadContext,
    ) -> Result<JsonValue> {
        match self {
            Self::DbNodes => read_as(DbNodesDataSource, api, config, ctx).await,
            Self::DbServers => read_as(DbServersDataSource, api, config, ctx).await,
            Self::DbSystemShapes => read_as(DbSystemShapesDataSource, api, config, ctx).await,
            Self::GiVersions => read_as(GiVersionsDataSource, api, config, ctx).await,
            Self::OdbPeeringConnections => {
                read_as(OdbPeeringConnectionsDataSource, api, config, ctx).await
            }
            Self::OdbPeeringConnection => {
                read_as(OdbPeeringConnectionDataSource, api, config, ctx).await
            }
            Self::CloudVmClusters => read_as(CloudVmClustersDataSource, api, config, ctx).await,
            Self::CloudVmCluster => read_as(CloudVmClusterDataSource, api, config, ctx).await,
            Self::CloudExadataInfrastructures => {
                read_as(CloudExadataInfrastructuresDataSource, api, config, ctx).await
            }
            Self::CloudExadataInfrastructure => {
                read_as(CloudExadataInfrastructureDataSource, api, config, ctx).await
            }
            Self::CloudAutonomousVmClusters => {
                read_as(CloudAutonomousVmClustersDataSource, api, config, ctx).await
            }
            Self::CloudAutonomousVmCluster => {
                read_as(CloudAutonomousVmClusterDataSource, api, config, ctx).await
            }
        }
    }
}

impl std::fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Reject an empty required identifier before any remote call
pub(crate) fn require_id(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_value(field, "must not be empty"));
    }
    Ok(())
}

/// Aggregate every page of a list operation
pub(crate) async fn list_all<Op: ListOperation>(
    api: &dyn OdbApi,
    input: &Op::Input,
    ctx: &ReadContext,
) -> Result<Vec<Op::Item>> {
    let source = ListPages::<Op, dyn OdbApi>::new(api);
    aggregate_with_cancel(&source, input, &ctx.cancel).await
}

/// Fetch a single record; an empty response counts as not found
pub(crate) async fn get_one<Op, T>(
    api: &dyn OdbApi,
    input: &Op::Input,
    ctx: &ReadContext,
    extract: impl FnOnce(Op::Output) -> Option<T> + Send,
) -> Result<T>
where
    Op: Operation,
{
    if ctx.cancel.is_cancelled() {
        return Err(Error::cancelled(Op::NAME));
    }
    let output = invoke::<Op, dyn OdbApi>(api, input).await?;
    extract(output).ok_or_else(|| Error::not_found(format!("{} returned no record", Op::NAME)))
}

/// Read the tags of a resource; a record without an ARN has none
pub(crate) async fn list_tags(
    api: &dyn OdbApi,
    resource_arn: Option<&str>,
) -> Result<BTreeMap<String, String>> {
    let Some(arn) = resource_arn.filter(|arn| !arn.is_empty()) else {
        return Ok(BTreeMap::new());
    };
    let input = ListTagsForResourceInput {
        resource_arn: arn.to_string(),
    };
    let output = invoke::<ListTagsForResource, dyn OdbApi>(api, &input).await?;
    Ok(output.tags)
}

/// Pass an enum field through, logging values outside the known domain
pub(crate) fn checked<E: WireEnum>(
    record: &'static str,
    field: &'static str,
    value: Option<E>,
) -> Option<E> {
    if let Some(v) = value.as_ref().filter(|v| v.is_unrecognized()) {
        warn!(record, field, value = v.wire_value(), "unrecognized enum value");
    }
    value
}
