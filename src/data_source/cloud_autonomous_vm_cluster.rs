//! Autonomous VM clusters

use super::{
    checked, get_one, list_all, list_tags, require_id, DataSource, DataSourceKind, ReadContext,
    LISTING_TAGS, READING,
};
use crate::error::Result;
use crate::odb::{
    CloudAutonomousVmCluster, ComputeModel, DayOfWeekName, GetCloudAutonomousVmCluster,
    GetCloudAutonomousVmClusterInput, LicenseModel, ListCloudAutonomousVmClusters,
    ListCloudAutonomousVmClustersInput, MaintenanceWindow, MonthName, OdbApi, PreferenceType,
    ResourceStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const RESOURCE: &str = "Cloud Autonomous Vm Cluster";
const RESOURCE_LIST: &str = "Cloud Autonomous Vm Clusters";

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOfWeekModel {
    pub name: DayOfWeekName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthModel {
    pub name: MonthName,
}

/// Maintenance schedule of an Autonomous VM cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AutonomousMaintenanceWindowModel {
    pub days_of_week: Vec<DayOfWeekModel>,
    pub hours_of_day: Vec<i32>,
    pub lead_time_in_weeks: Option<i32>,
    pub months: Vec<MonthModel>,
    pub preference: Option<PreferenceType>,
    pub weeks_of_month: Vec<i32>,
}

impl From<MaintenanceWindow> for AutonomousMaintenanceWindowModel {
    fn from(window: MaintenanceWindow) -> Self {
        Self {
            days_of_week: window
                .days_of_week
                .into_iter()
                .filter_map(|day| checked("maintenance_window", "days_of_week", day.name))
                .map(|name| DayOfWeekModel { name })
                .collect(),
            hours_of_day: window.hours_of_day,
            lead_time_in_weeks: window.lead_time_in_weeks,
            months: window
                .months
                .into_iter()
                .filter_map(|month| checked("maintenance_window", "months", month.name))
                .map(|name| MonthModel { name })
                .collect(),
            preference: checked("maintenance_window", "preference", window.preference),
            weeks_of_month: window.weeks_of_month,
        }
    }
}

/// One Autonomous VM cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CloudAutonomousVmClusterModel {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub cloud_exadata_infrastructure_id: Option<String>,
    pub odb_network_id: Option<String>,
    pub autonomous_data_storage_percentage: Option<f32>,
    pub autonomous_data_storage_size_in_tbs: Option<f64>,
    pub available_autonomous_data_storage_size_in_tbs: Option<f64>,
    pub available_container_databases: Option<i32>,
    pub available_cpus: Option<f32>,
    pub compute_model: Option<ComputeModel>,
    pub cpu_core_count: Option<i32>,
    pub cpu_core_count_per_node: Option<i32>,
    pub cpu_percentage: Option<f32>,
    pub created_at: Option<DateTime<Utc>>,
    pub data_storage_size_in_gbs: Option<f64>,
    pub data_storage_size_in_tbs: Option<f64>,
    pub odb_node_storage_size_in_gbs: Option<i32>,
    pub db_servers: Vec<String>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub domain: Option<String>,
    pub exadata_storage_in_tbs_lowest_scaled_value: Option<f64>,
    pub hostname: Option<String>,
    pub is_mtls_enabled_vm_cluster: Option<bool>,
    pub license_model: Option<LicenseModel>,
    pub maintenance_window: Option<AutonomousMaintenanceWindowModel>,
    pub max_acds_lowest_scaled_value: Option<i32>,
    pub memory_per_oracle_compute_unit_in_gbs: Option<i32>,
    pub memory_size_in_gbs: Option<i32>,
    pub node_count: Option<i32>,
    pub non_provisionable_autonomous_container_databases: Option<i32>,
    pub oci_resource_anchor_name: Option<String>,
    pub oci_url: Option<String>,
    pub ocid: Option<String>,
    pub percent_progress: Option<f32>,
    pub provisionable_autonomous_container_databases: Option<i32>,
    pub provisioned_autonomous_container_databases: Option<i32>,
    pub provisioned_cpus: Option<f32>,
    pub reclaimable_cpus: Option<f32>,
    pub reserved_cpus: Option<f32>,
    pub scan_listener_port_non_tls: Option<i32>,
    pub scan_listener_port_tls: Option<i32>,
    pub shape: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub time_zone: Option<String>,
    pub total_container_databases: Option<i32>,
    pub time_ords_certificate_expires: Option<DateTime<Utc>>,
    pub time_database_ssl_certificate_expires: Option<DateTime<Utc>>,
    /// Only filled in by the single-record data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl From<CloudAutonomousVmCluster> for CloudAutonomousVmClusterModel {
    fn from(cluster: CloudAutonomousVmCluster) -> Self {
        const RECORD: &str = "cloud_autonomous_vm_cluster";
        Self {
            id: cluster.cloud_autonomous_vm_cluster_id,
            arn: cluster.cloud_autonomous_vm_cluster_arn,
            cloud_exadata_infrastructure_id: cluster.cloud_exadata_infrastructure_id,
            odb_network_id: cluster.odb_network_id,
            autonomous_data_storage_percentage: cluster.autonomous_data_storage_percentage,
            autonomous_data_storage_size_in_tbs: cluster.autonomous_data_storage_size_in_tbs,
            available_autonomous_data_storage_size_in_tbs: cluster
                .available_autonomous_data_storage_size_in_tbs,
            available_container_databases: cluster.available_container_databases,
            available_cpus: cluster.available_cpus,
            compute_model: checked(RECORD, "compute_model", cluster.compute_model),
            cpu_core_count: cluster.cpu_core_count,
            cpu_core_count_per_node: cluster.cpu_core_count_per_node,
            cpu_percentage: cluster.cpu_percentage,
            created_at: cluster.created_at,
            data_storage_size_in_gbs: cluster.data_storage_size_in_gbs,
            data_storage_size_in_tbs: cluster.data_storage_size_in_tbs,
            odb_node_storage_size_in_gbs: cluster.db_node_storage_size_in_gbs,
            db_servers: cluster.db_servers,
            description: cluster.description,
            display_name: cluster.display_name,
            domain: cluster.domain,
            exadata_storage_in_tbs_lowest_scaled_value: cluster
                .exadata_storage_in_tbs_lowest_scaled_value,
            hostname: cluster.hostname,
            is_mtls_enabled_vm_cluster: cluster.is_mtls_enabled_vm_cluster,
            license_model: checked(RECORD, "license_model", cluster.license_model),
            maintenance_window: cluster
                .maintenance_window
                .map(AutonomousMaintenanceWindowModel::from),
            max_acds_lowest_scaled_value: cluster.max_acds_lowest_scaled_value,
            memory_per_oracle_compute_unit_in_gbs: cluster.memory_per_oracle_compute_unit_in_gbs,
            memory_size_in_gbs: cluster.memory_size_in_gbs,
            node_count: cluster.node_count,
            non_provisionable_autonomous_container_databases: cluster
                .non_provisionable_autonomous_container_databases,
            oci_resource_anchor_name: cluster.oci_resource_anchor_name,
            oci_url: cluster.oci_url,
            ocid: cluster.ocid,
            percent_progress: cluster.percent_progress,
            provisionable_autonomous_container_databases: cluster
                .provisionable_autonomous_container_databases,
            provisioned_autonomous_container_databases: cluster
                .provisioned_autonomous_container_databases,
            provisioned_cpus: cluster.provisioned_cpus,
            reclaimable_cpus: cluster.reclaimable_cpus,
            reserved_cpus: cluster.reserved_cpus,
            scan_listener_port_non_tls: cluster.scan_listener_port_non_tls,
            scan_listener_port_tls: cluster.scan_listener_port_tls,
            shape: cluster.shape,
            status: checked(RECORD, "status", cluster.status),
            status_reason: cluster.status_reason,
            time_zone: cluster.time_zone,
            total_container_databases: cluster.total_container_databases,
            time_ords_certificate_expires: cluster.time_ords_certificate_expires,
            time_database_ssl_certificate_expires: cluster.time_database_ssl_certificate_expires,
            tags: None,
        }
    }
}

// ============================================================================
// Single Record
// ============================================================================

/// Filter for [`CloudAutonomousVmClusterDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudAutonomousVmClusterConfig {
    /// Autonomous VM cluster identifier
    pub id: String,
}

/// Reads one Autonomous VM cluster and its tags
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudAutonomousVmClusterDataSource;

#[async_trait]
impl DataSource for CloudAutonomousVmClusterDataSource {
    type Config = CloudAutonomousVmClusterConfig;
    type Model = CloudAutonomousVmClusterModel;

    const KIND: DataSourceKind = DataSourceKind::CloudAutonomousVmCluster;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &CloudAutonomousVmClusterConfig,
        ctx: &ReadContext,
    ) -> Result<CloudAutonomousVmClusterModel> {
        let id = config.id.as_str();
        require_id("id", id)?;

        let input = GetCloudAutonomousVmClusterInput::new(id);
        let cluster = get_one::<GetCloudAutonomousVmCluster, _>(api, &input, ctx, |out| {
            out.cloud_autonomous_vm_cluster
        })
        .await
        .map_err(|e| e.in_operation(READING, RESOURCE, Some(id)))?;

        let mut model = CloudAutonomousVmClusterModel::from(cluster);
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

/// Filter for [`CloudAutonomousVmClustersDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudAutonomousVmClustersConfig {
    /// Restrict to clusters on this Exadata infrastructure
    #[serde(default)]
    pub cloud_exadata_infrastructure_id: Option<String>,
}

/// Autonomous VM clusters matching the filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudAutonomousVmClustersModel {
    pub cloud_exadata_infrastructure_id: Option<String>,
    pub cloud_autonomous_vm_clusters: Vec<CloudAutonomousVmClusterModel>,
}

/// Lists Autonomous VM clusters, optionally on one Exadata infrastructure
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudAutonomousVmClustersDataSource;

#[async_trait]
impl DataSource for CloudAutonomousVmClustersDataSource {
    type Config = CloudAutonomousVmClustersConfig;
    type Model = CloudAutonomousVmClustersModel;

    const KIND: DataSourceKind = DataSourceKind::CloudAutonomousVmClusters;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &CloudAutonomousVmClustersConfig,
        ctx: &ReadContext,
    ) -> Result<CloudAutonomousVmClustersModel> {
        let filter = config.cloud_exadata_infrastructure_id.as_deref();
        let input = ListCloudAutonomousVmClustersInput {
            cloud_exadata_infrastructure_id: filter.map(String::from),
            ..Default::default()
        };
        let clusters = list_all::<ListCloudAutonomousVmClusters>(api, &input, ctx)
            .await
            .map_err(|e| e.in_operation(READING, RESOURCE_LIST, filter))?;

        Ok(CloudAutonomousVmClustersModel {
            cloud_exadata_infrastructure_id: filter.map(String::from),
            cloud_autonomous_vm_clusters: clusters
                .into_iter()
                .map(CloudAutonomousVmClusterModel::from)
                .collect(),
        })
    }
}
