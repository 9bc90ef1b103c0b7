//! Database servers of an Exadata infrastructure

use super::{checked, list_all, require_id, DataSource, DataSourceKind, ReadContext, READING};
use crate::error::Result;
use crate::odb::{
    ComputeModel, DbServerPatchingDetails, DbServerPatchingStatus, DbServerSummary, ListDbServers,
    ListDbServersInput, OdbApi, ResourceStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const RESOURCE: &str = "Db Servers";

/// Filter for [`DbServersDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DbServersConfig {
    /// Exadata infrastructure whose servers are listed
    pub cloud_exadata_infrastructure_id: String,
}

/// Every database server of one Exadata infrastructure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbServersModel {
    pub cloud_exadata_infrastructure_id: String,
    pub db_servers: Vec<DbServerModel>,
}

/// Patching progress of a server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DbServerPatchingDetailsModel {
    pub estimated_patch_duration: Option<i32>,
    pub patching_status: Option<DbServerPatchingStatus>,
    pub time_patching_ended: Option<String>,
    pub time_patching_started: Option<String>,
}

impl From<DbServerPatchingDetails> for DbServerPatchingDetailsModel {
    fn from(details: DbServerPatchingDetails) -> Self {
        Self {
            estimated_patch_duration: details.estimated_patch_duration,
            patching_status: checked("db_server", "patching_status", details.patching_status),
            time_patching_ended: details.time_patching_ended,
            time_patching_started: details.time_patching_started,
        }
    }
}

/// One database server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DbServerModel {
    pub db_server_id: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub cpu_core_count: Option<i32>,
    pub db_node_storage_size_in_gbs: Option<i32>,
    pub db_server_patching_details: Option<DbServerPatchingDetailsModel>,
    pub display_name: Option<String>,
    pub exadata_infrastructure_id: Option<String>,
    pub ocid: Option<String>,
    pub oci_resource_anchor_name: Option<String>,
    pub max_cpu_count: Option<i32>,
    pub max_db_node_storage_in_gbs: Option<i32>,
    pub max_memory_in_gbs: Option<i32>,
    pub memory_size_in_gbs: Option<i32>,
    pub shape: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub vm_cluster_ids: Vec<String>,
    pub compute_model: Option<ComputeModel>,
    pub autonomous_vm_cluster_ids: Vec<String>,
    pub autonomous_virtual_machine_ids: Vec<String>,
}

impl From<DbServerSummary> for DbServerModel {
    fn from(server: DbServerSummary) -> Self {
        Self {
            db_server_id: server.db_server_id,
            status: checked("db_server", "status", server.status),
            status_reason: server.status_reason,
            cpu_core_count: server.cpu_core_count,
            db_node_storage_size_in_gbs: server.db_node_storage_size_in_gbs,
            db_server_patching_details: server.db_server_patching_details.map(Into::into),
            display_name: server.display_name,
            exadata_infrastructure_id: server.exadata_infrastructure_id,
            ocid: server.ocid,
            oci_resource_anchor_name: server.oci_resource_anchor_name,
            max_cpu_count: server.max_cpu_count,
            max_db_node_storage_in_gbs: server.max_db_node_storage_in_gbs,
            max_memory_in_gbs: server.max_memory_in_gbs,
            memory_size_in_gbs: server.memory_size_in_gbs,
            shape: server.shape,
            created_at: server.created_at,
            vm_cluster_ids: server.vm_cluster_ids,
            compute_model: checked("db_server", "compute_model", server.compute_model),
            autonomous_vm_cluster_ids: server.autonomous_vm_cluster_ids,
            autonomous_virtual_machine_ids: server.autonomous_virtual_machine_ids,
        }
    }
}

/// Lists the database servers of an Exadata infrastructure
#[derive(Debug, Clone, Copy, Default)]
pub struct DbServersDataSource;

#[async_trait]
impl DataSource for DbServersDataSource {
    type Config = DbServersConfig;
    type Model = DbServersModel;

    const KIND: DataSourceKind = DataSourceKind::DbServers;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &DbServersConfig,
        ctx: &ReadContext,
    ) -> Result<DbServersModel> {
        let infrastructure_id = config.cloud_exadata_infrastructure_id.as_str();
        require_id("cloud_exadata_infrastructure_id", infrastructure_id)?;

        let input = ListDbServersInput {
            cloud_exadata_infrastructure_id: infrastructure_id.to_string(),
            ..Default::default()
        };
        let servers = list_all::<ListDbServers>(api, &input, ctx)
            .await
            .map_err(|e| e.in_operation(READING, RESOURCE, Some(infrastructure_id)))?;

        Ok(DbServersModel {
            cloud_exadata_infrastructure_id: infrastructure_id.to_string(),
            db_servers: servers.into_iter().map(DbServerModel::from).collect(),
        })
    }
}
