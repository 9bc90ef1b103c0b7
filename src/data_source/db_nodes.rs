//! DB nodes of a VM cluster

use super::{checked, list_all, require_id, DataSource, DataSourceKind, ReadContext, READING};
use crate::error::Result;
use crate::odb::{
    DbNodeMaintenanceType, DbNodeResourceStatus, DbNodeSummary, ListDbNodes, ListDbNodesInput,
    OdbApi,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const RESOURCE: &str = "DB Nodes";

/// Filter for [`DbNodesDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DbNodesConfig {
    /// VM cluster whose nodes are listed
    pub cloud_vm_cluster_id: String,
}

/// Every DB node of one VM cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbNodesModel {
    pub cloud_vm_cluster_id: String,
    pub db_nodes: Vec<DbNodeModel>,
}

/// One DB node
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DbNodeModel {
    pub db_node_id: Option<String>,
    pub db_node_arn: Option<String>,
    pub status: Option<DbNodeResourceStatus>,
    pub status_reason: Option<String>,
    pub additional_details: Option<String>,
    pub backup_ip_id: Option<String>,
    pub backup_vnic2_id: Option<String>,
    pub backup_vnic_id: Option<String>,
    pub cpu_core_count: Option<i32>,
    pub db_node_storage_size_in_gbs: Option<i32>,
    pub db_server_id: Option<String>,
    pub db_system_id: Option<String>,
    pub fault_domain: Option<String>,
    pub host_ip_id: Option<String>,
    pub hostname: Option<String>,
    pub ocid: Option<String>,
    pub oci_resource_anchor_name: Option<String>,
    pub maintenance_type: Option<DbNodeMaintenanceType>,
    pub memory_size_in_gbs: Option<i32>,
    pub software_storage_size_in_gb: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub time_maintenance_window_end: Option<String>,
    pub time_maintenance_window_start: Option<String>,
    pub total_cpu_core_count: Option<i32>,
    pub vnic2_id: Option<String>,
    pub vnic_id: Option<String>,
}

impl From<DbNodeSummary> for DbNodeModel {
    fn from(node: DbNodeSummary) -> Self {
        Self {
            db_node_id: node.db_node_id,
            db_node_arn: node.db_node_arn,
            status: checked("db_node", "status", node.status),
            status_reason: node.status_reason,
            additional_details: node.additional_details,
            backup_ip_id: node.backup_ip_id,
            backup_vnic2_id: node.backup_vnic2_id,
            backup_vnic_id: node.backup_vnic_id,
            cpu_core_count: node.cpu_core_count,
            db_node_storage_size_in_gbs: node.db_node_storage_size_in_gbs,
            db_server_id: node.db_server_id,
            db_system_id: node.db_system_id,
            fault_domain: node.fault_domain,
            host_ip_id: node.host_ip_id,
            hostname: node.hostname,
            ocid: node.ocid,
            oci_resource_anchor_name: node.oci_resource_anchor_name,
            maintenance_type: checked("db_node", "maintenance_type", node.maintenance_type),
            memory_size_in_gbs: node.memory_size_in_gbs,
            software_storage_size_in_gb: node.software_storage_size_in_gb,
            created_at: node.created_at,
            time_maintenance_window_end: node.time_maintenance_window_end,
            time_maintenance_window_start: node.time_maintenance_window_start,
            total_cpu_core_count: node.total_cpu_core_count,
            vnic2_id: node.vnic2_id,
            vnic_id: node.vnic_id,
        }
    }
}

/// Lists the DB nodes of a VM cluster
#[derive(Debug, Clone, Copy, Default)]
pub struct DbNodesDataSource;

#[async_trait]
impl DataSource for DbNodesDataSource {
    type Config = DbNodesConfig;
    type Model = DbNodesModel;

    const KIND: DataSourceKind = DataSourceKind::DbNodes;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &DbNodesConfig,
        ctx: &ReadContext,
    ) -> Result<DbNodesModel> {
        let cluster_id = config.cloud_vm_cluster_id.as_str();
        require_id("cloud_vm_cluster_id", cluster_id)?;

        let input = ListDbNodesInput {
            cloud_vm_cluster_id: cluster_id.to_string(),
            ..Default::default()
        };
        let nodes = list_all::<ListDbNodes>(api, &input, ctx)
            .await
            .map_err(|e| e.in_operation(READING, RESOURCE, Some(cluster_id)))?;

        Ok(DbNodesModel {
            cloud_vm_cluster_id: cluster_id.to_string(),
            db_nodes: nodes.into_iter().map(DbNodeModel::from).collect(),
        })
    }
}
