//! Remote record shapes
//!
//! Mirrors of the records the ODB API returns. Every field is optional on the
//! wire; absent fields decode to `None` or an empty list.

use super::enums::{
    ComputeModel, DayOfWeekName, DbNodeMaintenanceType, DbNodeResourceStatus,
    DbServerPatchingStatus, DiskRedundancy, IormLifecycleState, LicenseModel, MonthName,
    Objective, PatchingModeType, PreferenceType, ResourceStatus, ShapeType,
};
use super::timestamp;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A DB node of a VM cluster
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbNodeSummary {
    pub db_node_id: Option<String>,
    pub db_node_arn: Option<String>,
    pub status: Option<DbNodeResourceStatus>,
    pub status_reason: Option<String>,
    pub additional_details: Option<String>,
    pub backup_ip_id: Option<String>,
    pub backup_vnic2_id: Option<String>,
    pub backup_vnic_id: Option<String>,
    pub cpu_core_count: Option<i32>,
    #[serde(rename = "dbNodeStorageSizeInGBs")]
    pub db_node_storage_size_in_gbs: Option<i32>,
    pub db_server_id: Option<String>,
    pub db_system_id: Option<String>,
    pub fault_domain: Option<String>,
    pub host_ip_id: Option<String>,
    pub hostname: Option<String>,
    pub ocid: Option<String>,
    pub oci_resource_anchor_name: Option<String>,
    pub maintenance_type: Option<DbNodeMaintenanceType>,
    #[serde(rename = "memorySizeInGBs")]
    pub memory_size_in_gbs: Option<i32>,
    #[serde(rename = "softwareStorageSizeInGB")]
    pub software_storage_size_in_gb: Option<i32>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    pub time_maintenance_window_end: Option<String>,
    pub time_maintenance_window_start: Option<String>,
    pub total_cpu_core_count: Option<i32>,
    pub vnic2_id: Option<String>,
    pub vnic_id: Option<String>,
}

/// Patching progress of a database server
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbServerPatchingDetails {
    pub estimated_patch_duration: Option<i32>,
    pub patching_status: Option<DbServerPatchingStatus>,
    pub time_patching_ended: Option<String>,
    pub time_patching_started: Option<String>,
}

/// A database server of an Exadata infrastructure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbServerSummary {
    pub db_server_id: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub cpu_core_count: Option<i32>,
    #[serde(rename = "dbNodeStorageSizeInGBs")]
    pub db_node_storage_size_in_gbs: Option<i32>,
    pub db_server_patching_details: Option<DbServerPatchingDetails>,
    pub display_name: Option<String>,
    pub exadata_infrastructure_id: Option<String>,
    pub ocid: Option<String>,
    pub oci_resource_anchor_name: Option<String>,
    pub max_cpu_count: Option<i32>,
    #[serde(rename = "maxDbNodeStorageInGBs")]
    pub max_db_node_storage_in_gbs: Option<i32>,
    #[serde(rename = "maxMemoryInGBs")]
    pub max_memory_in_gbs: Option<i32>,
    #[serde(rename = "memorySizeInGBs")]
    pub memory_size_in_gbs: Option<i32>,
    pub shape: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    pub vm_cluster_ids: Vec<String>,
    pub compute_model: Option<ComputeModel>,
    pub autonomous_vm_cluster_ids: Vec<String>,
    pub autonomous_virtual_machine_ids: Vec<String>,
}

/// A hardware shape that DB systems can be built on
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbSystemShapeSummary {
    pub name: Option<String>,
    pub shape_family: Option<String>,
    pub shape_type: Option<ShapeType>,
    pub available_core_count: Option<i32>,
    pub available_core_count_per_node: Option<i32>,
    #[serde(rename = "availableDataStorageInTBs")]
    pub available_data_storage_in_tbs: Option<i32>,
    #[serde(rename = "availableDataStoragePerServerInTBs")]
    pub available_data_storage_per_server_in_tbs: Option<i32>,
    #[serde(rename = "availableDbNodePerNodeInGBs")]
    pub available_db_node_per_node_in_gbs: Option<i32>,
    #[serde(rename = "availableDbNodeStorageInGBs")]
    pub available_db_node_storage_in_gbs: Option<i32>,
    #[serde(rename = "availableMemoryInGBs")]
    pub available_memory_in_gbs: Option<i32>,
    #[serde(rename = "availableMemoryPerNodeInGBs")]
    pub available_memory_per_node_in_gbs: Option<i32>,
    pub core_count_increment: Option<i32>,
    pub max_storage_count: Option<i32>,
    pub maximum_node_count: Option<i32>,
    pub min_core_count_per_node: Option<i32>,
    #[serde(rename = "minDataStorageInTBs")]
    pub min_data_storage_in_tbs: Option<i32>,
    #[serde(rename = "minDbNodeStoragePerNodeInGBs")]
    pub min_db_node_storage_per_node_in_gbs: Option<i32>,
    #[serde(rename = "minMemoryPerNodeInGBs")]
    pub min_memory_per_node_in_gbs: Option<i32>,
    pub min_storage_count: Option<i32>,
    pub minimum_core_count: Option<i32>,
    pub minimum_node_count: Option<i32>,
    pub runtime_minimum_core_count: Option<i32>,
    pub are_server_types_supported: Option<bool>,
    pub compute_model: Option<ComputeModel>,
}

/// An Oracle Grid Infrastructure version
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GiVersionSummary {
    pub version: Option<String>,
}

/// A peering between an ODB network and a peer network
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OdbPeeringConnection {
    pub odb_peering_connection_id: Option<String>,
    pub odb_peering_connection_arn: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub odb_network_arn: Option<String>,
    pub peer_network_arn: Option<String>,
    pub odb_peering_connection_type: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    pub percent_progress: Option<f32>,
}

/// An Exadata VM cluster
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudVmCluster {
    pub cloud_vm_cluster_id: Option<String>,
    pub cloud_vm_cluster_arn: Option<String>,
    pub cloud_exadata_infrastructure_id: Option<String>,
    pub cluster_name: Option<String>,
    pub cpu_core_count: Option<i32>,
    #[serde(rename = "dataStorageSizeInTBs")]
    pub data_storage_size_in_tbs: Option<f64>,
    #[serde(rename = "dbNodeStorageSizeInGBs")]
    pub db_node_storage_size_in_gbs: Option<i32>,
    pub db_servers: Vec<String>,
    pub disk_redundancy: Option<DiskRedundancy>,
    pub display_name: Option<String>,
    pub domain: Option<String>,
    pub gi_version: Option<String>,
    pub hostname: Option<String>,
    pub license_model: Option<LicenseModel>,
    pub listener_port: Option<i32>,
    #[serde(rename = "memorySizeInGBs")]
    pub memory_size_in_gbs: Option<i32>,
    pub node_count: Option<i32>,
    pub ocid: Option<String>,
    pub oci_url: Option<String>,
    pub odb_network_id: Option<String>,
    pub percent_progress: Option<f32>,
    pub scan_dns_name: Option<String>,
    pub shape: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub system_version: Option<String>,
    pub timezone: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    pub compute_model: Option<ComputeModel>,
    pub data_collection_options: Option<DataCollectionOptions>,
    pub iorm_config_cache: Option<ExadataIormConfig>,
    pub is_local_backup_enabled: Option<bool>,
    pub is_sparse_diskgroup_enabled: Option<bool>,
    pub last_update_history_entry_id: Option<String>,
    pub oci_resource_anchor_name: Option<String>,
    pub scan_dns_record_id: Option<String>,
    pub scan_ip_ids: Vec<String>,
    pub ssh_public_keys: Vec<String>,
    #[serde(rename = "storageSizeInGBs")]
    pub storage_size_in_gbs: Option<i32>,
    pub vip_ids: Vec<String>,
}

/// Diagnostics collection settings of a VM cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataCollectionOptions {
    pub is_diagnostics_events_enabled: Option<bool>,
    pub is_health_monitoring_enabled: Option<bool>,
    pub is_incident_logs_enabled: Option<bool>,
}

/// I/O resource management settings of a VM cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExadataIormConfig {
    pub db_plans: Vec<DbIormConfig>,
    pub lifecycle_details: Option<String>,
    pub lifecycle_state: Option<IormLifecycleState>,
    pub objective: Option<Objective>,
}

/// Per-database IORM plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbIormConfig {
    pub db_name: Option<String>,
    pub flash_cache_limit: Option<String>,
    pub share: Option<i32>,
}

/// An ODB network
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OdbNetwork {
    pub odb_network_id: Option<String>,
    pub odb_network_arn: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
}

/// Scheduling preferences for infrastructure maintenance
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceWindow {
    pub custom_action_timeout_in_mins: Option<i32>,
    pub days_of_week: Vec<DayOfWeek>,
    pub hours_of_day: Vec<i32>,
    pub is_custom_action_timeout_enabled: Option<bool>,
    pub lead_time_in_weeks: Option<i32>,
    pub months: Vec<Month>,
    pub patching_mode: Option<PatchingModeType>,
    pub preference: Option<PreferenceType>,
    pub weeks_of_month: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayOfWeek {
    pub name: Option<DayOfWeekName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Month {
    pub name: Option<MonthName>,
}

/// Contact notified by OCI about infrastructure events
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerContact {
    pub email: Option<String>,
}

/// An Exadata infrastructure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudExadataInfrastructure {
    pub cloud_exadata_infrastructure_id: Option<String>,
    pub cloud_exadata_infrastructure_arn: Option<String>,
    pub display_name: Option<String>,
    pub shape: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub availability_zone: Option<String>,
    pub availability_zone_id: Option<String>,
    pub compute_count: Option<i32>,
    pub storage_count: Option<i32>,
    pub cpu_count: Option<i32>,
    pub max_cpu_count: Option<i32>,
    #[serde(rename = "memorySizeInGBs")]
    pub memory_size_in_gbs: Option<i32>,
    #[serde(rename = "maxMemoryInGBs")]
    pub max_memory_in_gbs: Option<i32>,
    #[serde(rename = "dataStorageSizeInTBs")]
    pub data_storage_size_in_tbs: Option<f64>,
    #[serde(rename = "maxDataStorageInTBs")]
    pub max_data_storage_in_tbs: Option<f64>,
    pub db_server_version: Option<String>,
    pub storage_server_version: Option<String>,
    pub database_server_type: Option<String>,
    pub storage_server_type: Option<String>,
    pub ocid: Option<String>,
    pub oci_url: Option<String>,
    pub percent_progress: Option<f32>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    pub compute_model: Option<ComputeModel>,
    pub activated_storage_count: Option<i32>,
    pub additional_storage_count: Option<i32>,
    #[serde(rename = "availableStorageSizeInGBs")]
    pub available_storage_size_in_gbs: Option<i32>,
    #[serde(rename = "totalStorageSizeInGBs")]
    pub total_storage_size_in_gbs: Option<i32>,
    #[serde(rename = "dbNodeStorageSizeInGBs")]
    pub db_node_storage_size_in_gbs: Option<i32>,
    #[serde(rename = "maxDbNodeStorageSizeInGBs")]
    pub max_db_node_storage_size_in_gbs: Option<i32>,
    pub monthly_db_server_version: Option<String>,
    pub monthly_storage_server_version: Option<String>,
    pub last_maintenance_run_id: Option<String>,
    pub next_maintenance_run_id: Option<String>,
    pub oci_resource_anchor_name: Option<String>,
    pub maintenance_window: Option<MaintenanceWindow>,
    #[serde(rename = "customerContactsToSendToOCI")]
    pub customer_contacts_to_send_to_oci: Vec<CustomerContact>,
}

/// An Autonomous VM cluster on Exadata infrastructure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudAutonomousVmCluster {
    pub cloud_autonomous_vm_cluster_id: Option<String>,
    pub cloud_autonomous_vm_cluster_arn: Option<String>,
    pub cloud_exadata_infrastructure_id: Option<String>,
    pub odb_network_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub autonomous_data_storage_percentage: Option<f32>,
    #[serde(rename = "autonomousDataStorageSizeInTBs")]
    pub autonomous_data_storage_size_in_tbs: Option<f64>,
    #[serde(rename = "availableAutonomousDataStorageSizeInTBs")]
    pub available_autonomous_data_storage_size_in_tbs: Option<f64>,
    pub available_container_databases: Option<i32>,
    pub available_cpus: Option<f32>,
    pub compute_model: Option<ComputeModel>,
    pub cpu_core_count: Option<i32>,
    pub cpu_core_count_per_node: Option<i32>,
    pub cpu_percentage: Option<f32>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "dataStorageSizeInGBs")]
    pub data_storage_size_in_gbs: Option<f64>,
    #[serde(rename = "dataStorageSizeInTBs")]
    pub data_storage_size_in_tbs: Option<f64>,
    #[serde(rename = "dbNodeStorageSizeInGBs")]
    pub db_node_storage_size_in_gbs: Option<i32>,
    pub db_servers: Vec<String>,
    pub domain: Option<String>,
    #[serde(rename = "exadataStorageInTBsLowestScaledValue")]
    pub exadata_storage_in_tbs_lowest_scaled_value: Option<f64>,
    pub hostname: Option<String>,
    pub is_mtls_enabled_vm_cluster: Option<bool>,
    pub license_model: Option<LicenseModel>,
    pub max_acds_lowest_scaled_value: Option<i32>,
    #[serde(rename = "memoryPerOracleComputeUnitInGBs")]
    pub memory_per_oracle_compute_unit_in_gbs: Option<i32>,
    #[serde(rename = "memorySizeInGBs")]
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
    pub time_zone: Option<String>,
    pub total_container_databases: Option<i32>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub time_ords_certificate_expires: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub time_database_ssl_certificate_expires: Option<DateTime<Utc>>,
    pub maintenance_window: Option<MaintenanceWindow>,
}
