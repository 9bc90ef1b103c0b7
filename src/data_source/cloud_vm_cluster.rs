//! Exadata VM clusters

use super::{
    checked, get_one, list_all, list_tags, require_id, DataSource, DataSourceKind, ReadContext,
    LISTING_TAGS, READING, WAITING_FOR_CREATION,
};
use crate::error::{Error, Result};
use crate::odb::{
    CloudVmCluster, ComputeModel, DataCollectionOptions, DbIormConfig, DiskRedundancy,
    ExadataIormConfig, GetCloudExadataInfrastructure, GetCloudExadataInfrastructureInput,
    GetCloudVmCluster, GetCloudVmClusterInput, GetOdbNetwork, GetOdbNetworkInput,
    IormLifecycleState, LicenseModel, ListCloudVmClusters, ListCloudVmClustersInput, Objective,
    OdbApi, ResourceStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

const RESOURCE: &str = "Cloud Vm Cluster";
const RESOURCE_LIST: &str = "Cloud Vm Clusters";

static MAJOR_GI_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.0\.0\.0$").expect("valid regex"));

// ============================================================================
// Derived Values
// ============================================================================

/// Hostname prefix the cluster was created with
///
/// The service appends a generated `-<suffix>` to the requested prefix; a
/// hostname without a dash is returned as-is.
pub fn hostname_prefix(hostname: &str) -> &str {
    hostname
        .rfind('-')
        .map_or(hostname, |index| &hostname[..index])
}

/// Major GI version (`19.0.0.0`) of a full GI version (`19.25.0.0.0`)
pub fn major_gi_version(gi_version: &str) -> Result<String> {
    let major = gi_version.split('.').next().unwrap_or_default();
    let candidate = format!("{major}.0.0.0");
    if !MAJOR_GI_VERSION.is_match(&candidate) {
        return Err(Error::invalid_value(
            "gi_version",
            format!("major version of '{gi_version}' does not match the pattern 19.0.0.0"),
        ));
    }
    Ok(candidate)
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataCollectionOptionsModel {
    pub is_diagnostics_events_enabled: Option<bool>,
    pub is_health_monitoring_enabled: Option<bool>,
    pub is_incident_logs_enabled: Option<bool>,
}

impl From<DataCollectionOptions> for DataCollectionOptionsModel {
    fn from(options: DataCollectionOptions) -> Self {
        Self {
            is_diagnostics_events_enabled: options.is_diagnostics_events_enabled,
            is_health_monitoring_enabled: options.is_health_monitoring_enabled,
            is_incident_logs_enabled: options.is_incident_logs_enabled,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DbIormConfigModel {
    pub db_name: Option<String>,
    pub flash_cache_limit: Option<String>,
    pub share: Option<i32>,
}

impl From<DbIormConfig> for DbIormConfigModel {
    fn from(plan: DbIormConfig) -> Self {
        Self {
            db_name: plan.db_name,
            flash_cache_limit: plan.flash_cache_limit,
            share: plan.share,
        }
    }
}

/// Cached I/O resource management settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IormConfigModel {
    pub db_plans: Vec<DbIormConfigModel>,
    pub lifecycle_details: Option<String>,
    pub lifecycle_state: Option<IormLifecycleState>,
    pub objective: Option<Objective>,
}

impl From<ExadataIormConfig> for IormConfigModel {
    fn from(config: ExadataIormConfig) -> Self {
        Self {
            db_plans: config.db_plans.into_iter().map(DbIormConfigModel::from).collect(),
            lifecycle_details: config.lifecycle_details,
            lifecycle_state: checked(
                "iorm_config_cache",
                "lifecycle_state",
                config.lifecycle_state,
            ),
            objective: checked("iorm_config_cache", "objective", config.objective),
        }
    }
}

/// One VM cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CloudVmClusterModel {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub cloud_exadata_infrastructure_id: Option<String>,
    /// Only filled in by the single-record data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_exadata_infrastructure_arn: Option<String>,
    pub cluster_name: Option<String>,
    pub cpu_core_count: Option<i32>,
    pub data_collection_options: Option<DataCollectionOptionsModel>,
    pub data_storage_size_in_tbs: Option<f64>,
    pub db_node_storage_size_in_gbs: Option<i32>,
    pub db_servers: Vec<String>,
    pub disk_redundancy: Option<DiskRedundancy>,
    pub display_name: Option<String>,
    pub domain: Option<String>,
    /// Major GI version, only filled in by the single-record data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gi_version: Option<String>,
    /// GI version as reported by the service
    pub gi_version_computed: Option<String>,
    pub hostname_prefix: Option<String>,
    /// Hostname as reported by the service
    pub hostname_prefix_computed: Option<String>,
    pub iorm_config_cache: Option<IormConfigModel>,
    pub is_local_backup_enabled: Option<bool>,
    pub is_sparse_diskgroup_enabled: Option<bool>,
    pub last_update_history_entry_id: Option<String>,
    pub license_model: Option<LicenseModel>,
    pub listener_port: Option<i32>,
    pub memory_size_in_gbs: Option<i32>,
    pub node_count: Option<i32>,
    pub ocid: Option<String>,
    pub oci_resource_anchor_name: Option<String>,
    pub oci_url: Option<String>,
    pub odb_network_id: Option<String>,
    /// Only filled in by the single-record data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odb_network_arn: Option<String>,
    pub percent_progress: Option<f32>,
    pub scan_dns_name: Option<String>,
    pub scan_dns_record_id: Option<String>,
    pub scan_ip_ids: Vec<String>,
    /// The service reports the SCAN TCP port as the listener port
    pub scan_listener_port_tcp: Option<i32>,
    pub shape: Option<String>,
    pub ssh_public_keys: Vec<String>,
    pub status: Option<ResourceStatus>,
    pub status_reason: Option<String>,
    pub storage_size_in_gbs: Option<i32>,
    pub system_version: Option<String>,
    pub timezone: Option<String>,
    pub vip_ids: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub compute_model: Option<ComputeModel>,
    /// Only filled in by the single-record data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl From<CloudVmCluster> for CloudVmClusterModel {
    fn from(cluster: CloudVmCluster) -> Self {
        Self {
            id: cluster.cloud_vm_cluster_id,
            arn: cluster.cloud_vm_cluster_arn,
            cloud_exadata_infrastructure_id: cluster.cloud_exadata_infrastructure_id,
            cloud_exadata_infrastructure_arn: None,
            cluster_name: cluster.cluster_name,
            cpu_core_count: cluster.cpu_core_count,
            data_collection_options: cluster
                .data_collection_options
                .map(DataCollectionOptionsModel::from),
            data_storage_size_in_tbs: cluster.data_storage_size_in_tbs,
            db_node_storage_size_in_gbs: cluster.db_node_storage_size_in_gbs,
            db_servers: cluster.db_servers,
            disk_redundancy: checked(
                "cloud_vm_cluster",
                "disk_redundancy",
                cluster.disk_redundancy,
            ),
            display_name: cluster.display_name,
            domain: cluster.domain,
            gi_version: None,
            gi_version_computed: cluster.gi_version,
            hostname_prefix: cluster
                .hostname
                .as_deref()
                .map(|hostname| hostname_prefix(hostname).to_string()),
            hostname_prefix_computed: cluster.hostname,
            iorm_config_cache: cluster.iorm_config_cache.map(IormConfigModel::from),
            is_local_backup_enabled: cluster.is_local_backup_enabled,
            is_sparse_diskgroup_enabled: cluster.is_sparse_diskgroup_enabled,
            last_update_history_entry_id: cluster.last_update_history_entry_id,
            license_model: checked("cloud_vm_cluster", "license_model", cluster.license_model),
            listener_port: cluster.listener_port,
            memory_size_in_gbs: cluster.memory_size_in_gbs,
            node_count: cluster.node_count,
            ocid: cluster.ocid,
            oci_resource_anchor_name: cluster.oci_resource_anchor_name,
            oci_url: cluster.oci_url,
            odb_network_id: cluster.odb_network_id,
            odb_network_arn: None,
            percent_progress: cluster.percent_progress,
            scan_dns_name: cluster.scan_dns_name,
            scan_dns_record_id: cluster.scan_dns_record_id,
            scan_ip_ids: cluster.scan_ip_ids,
            scan_listener_port_tcp: cluster.listener_port,
            shape: cluster.shape,
            ssh_public_keys: cluster.ssh_public_keys,
            status: checked("cloud_vm_cluster", "status", cluster.status),
            status_reason: cluster.status_reason,
            storage_size_in_gbs: cluster.storage_size_in_gbs,
            system_version: cluster.system_version,
            timezone: cluster.timezone,
            vip_ids: cluster.vip_ids,
            created_at: cluster.created_at,
            compute_model: checked("cloud_vm_cluster", "compute_model", cluster.compute_model),
            tags: None,
        }
    }
}

// ============================================================================
// Single Record
// ============================================================================

/// Filter for [`CloudVmClusterDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudVmClusterConfig {
    /// VM cluster identifier
    pub id: String,
}

/// Reads one VM cluster, derives its hostname prefix and major GI version,
/// resolves the ARNs of its ODB network and Exadata infrastructure, and
/// attaches its tags
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudVmClusterDataSource;

#[async_trait]
impl DataSource for CloudVmClusterDataSource {
    type Config = CloudVmClusterConfig;
    type Model = CloudVmClusterModel;

    const KIND: DataSourceKind = DataSourceKind::CloudVmCluster;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &CloudVmClusterConfig,
        ctx: &ReadContext,
    ) -> Result<CloudVmClusterModel> {
        let id = config.id.as_str();
        require_id("id", id)?;

        let input = GetCloudVmClusterInput::new(id);
        let cluster = get_one::<GetCloudVmCluster, _>(api, &input, ctx, |out| out.cloud_vm_cluster)
            .await
            .map_err(|e| e.in_operation(READING, RESOURCE, Some(id)))?;

        let mut model = CloudVmClusterModel::from(cluster);
        model.gi_version = model
            .gi_version_computed
            .as_deref()
            .map(major_gi_version)
            .transpose()
            .map_err(|e| e.in_operation(WAITING_FOR_CREATION, RESOURCE, Some(id)))?;

        if let Some(network_id) = model.odb_network_id.clone() {
            let input = GetOdbNetworkInput::new(network_id);
            let network = get_one::<GetOdbNetwork, _>(api, &input, ctx, |out| out.odb_network)
                .await
                .map_err(|e| e.in_operation(WAITING_FOR_CREATION, RESOURCE, Some(id)))?;
            model.odb_network_id = network.odb_network_id;
            model.odb_network_arn = network.odb_network_arn;
        }

        if let Some(infra_id) = model.cloud_exadata_infrastructure_id.clone() {
            let input = GetCloudExadataInfrastructureInput::new(infra_id);
            let infra = get_one::<GetCloudExadataInfrastructure, _>(api, &input, ctx, |out| {
                out.cloud_exadata_infrastructure
            })
            .await
            .map_err(|e| e.in_operation(WAITING_FOR_CREATION, RESOURCE, Some(id)))?;
            model.cloud_exadata_infrastructure_id = infra.cloud_exadata_infrastructure_id;
            model.cloud_exadata_infrastructure_arn = infra.cloud_exadata_infrastructure_arn;
        }

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

/// Filter for [`CloudVmClustersDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudVmClustersConfig {
    /// Restrict to clusters on this Exadata infrastructure
    #[serde(default)]
    pub cloud_exadata_infrastructure_id: Option<String>,
}

/// VM clusters matching the filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudVmClustersModel {
    pub cloud_exadata_infrastructure_id: Option<String>,
    pub cloud_vm_clusters: Vec<CloudVmClusterModel>,
}

/// Lists VM clusters, optionally on one Exadata infrastructure
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudVmClustersDataSource;

#[async_trait]
impl DataSource for CloudVmClustersDataSource {
    type Config = CloudVmClustersConfig;
    type Model = CloudVmClustersModel;

    const KIND: DataSourceKind = DataSourceKind::CloudVmClusters;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &CloudVmClustersConfig,
        ctx: &ReadContext,
    ) -> Result<CloudVmClustersModel> {
        let filter = config.cloud_exadata_infrastructure_id.as_deref();
        let input = ListCloudVmClustersInput {
            cloud_exadata_infrastructure_id: filter.map(String::from),
            ..Default::default()
        };
        let clusters = list_all::<ListCloudVmClusters>(api, &input, ctx)
            .await
            .map_err(|e| e.in_operation(READING, RESOURCE_LIST, filter))?;

        Ok(CloudVmClustersModel {
            cloud_exadata_infrastructure_id: filter.map(String::from),
            cloud_vm_clusters: clusters.into_iter().map(CloudVmClusterModel::from).collect(),
        })
    }
}
