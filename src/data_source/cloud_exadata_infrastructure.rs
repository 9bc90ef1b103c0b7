//! Exadata infrastructures

use super::{
    checked, get_one, list_all, list_tags, require_id, DataSource, DataSourceKind, ReadContext,
    LISTING_TAGS, READING,
};
use crate::error::Result;
use crate::odb::{
    CloudExadataInfrastructure, ComputeModel, CustomerContact, DayOfWeekName,
    GetCloudExadataInfrastructure, GetCloudExadataInfrastructureInput,
    ListCloudExadataInfrastructures, ListCloudExadataInfrastructuresInput, MaintenanceWindow,
    MonthName, OdbApi, PatchingModeType, PreferenceType, ResourceStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const RESOURCE: &str = "Cloud Exadata Infrastructure";
const RESOURCE_LIST: &str = "Cloud Exadata Infrastructures";

/// Maintenance schedule of an Exadata infrastructure
///
/// Day and month entries are flattened to their names. An unset lead time
/// or custom action timeout reads as `0`, an unset timeout flag as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaintenanceWindowModel {
    pub custom_action_timeout_in_mins: i32,
    pub days_of_week: Vec<DayOfWeekName>,
    pub hours_of_day: Vec<i32>,
    pub is_custom_action_timeout_enabled: bool,
    pub lead_time_in_weeks: i32,
    pub months: Vec<MonthName>,
    pub patching_mode: Option<PatchingModeType>,
    pub preference: Option<PreferenceType>,
    pub weeks_of_month: Vec<i32>,
}

impl From<MaintenanceWindow> for MaintenanceWindowModel {
    fn from(window: MaintenanceWindow) -> Self {
        Self {
            custom_action_timeout_in_mins: window.custom_action_timeout_in_mins.unwrap_or(0),
            days_of_week: window
                .days_of_week
                .into_iter()
                .filter_map(|day| checked("maintenance_window", "days_of_week", day.name))
                .collect(),
            hours_of_day: window.hours_of_day,
            is_custom_action_timeout_enabled: window
                .is_custom_action_timeout_enabled
                .unwrap_or(false),
            lead_time_in_weeks: window.lead_time_in_weeks.unwrap_or(0),
            months: window
                .months
                .into_iter()
                .filter_map(|month| checked("maintenance_window", "months", month.name))
                .collect(),
            patching_mode: checked("maintenance_window", "patching_mode", window.patching_mode),
            preference: checked("maintenance_window", "preference", window.preference),
            weeks_of_month: window.weeks_of_month,
        }
    }
}

/// Contact emails, or `None` when there are no contacts
fn contact_emails(contacts: Vec<CustomerContact>) -> Option<Vec<String>> {
    if contacts.is_empty() {
        return None;
    }
    Some(contacts.into_iter().filter_map(|contact| contact.email).collect())
}

/// One Exadata infrastructure
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CloudExadataInfrastructureModel {
    pub id: Option<String>,
    pub arn: Option<String>,
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
    pub memory_size_in_gbs: Option<i32>,
    pub max_memory_in_gbs: Option<i32>,
    pub data_storage_size_in_tbs: Option<f64>,
    pub max_data_storage_in_tbs: Option<f64>,
    pub db_server_version: Option<String>,
    pub storage_server_version: Option<String>,
    pub database_server_type: Option<String>,
    pub storage_server_type: Option<String>,
    pub ocid: Option<String>,
    pub oci_url: Option<String>,
    pub percent_progress: Option<f32>,
    pub created_at: Option<DateTime<Utc>>,
    pub compute_model: Option<ComputeModel>,
    pub activated_storage_count: Option<i32>,
    pub additional_storage_count: Option<i32>,
    pub available_storage_size_in_gbs: Option<i32>,
    pub total_storage_size_in_gbs: Option<i32>,
    pub db_node_storage_size_in_gbs: Option<i32>,
    pub max_db_node_storage_size_in_gbs: Option<i32>,
    pub monthly_db_server_version: Option<String>,
    pub monthly_storage_server_version: Option<String>,
    pub last_maintenance_run_id: Option<String>,
    pub next_maintenance_run_id: Option<String>,
    pub oci_resource_anchor_name: Option<String>,
    pub maintenance_window: Option<MaintenanceWindowModel>,
    pub customer_contacts_to_send_to_oci: Option<Vec<String>>,
    /// Only filled in by the single-record data source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl From<CloudExadataInfrastructure> for CloudExadataInfrastructureModel {
    fn from(infra: CloudExadataInfrastructure) -> Self {
        Self {
            id: infra.cloud_exadata_infrastructure_id,
            arn: infra.cloud_exadata_infrastructure_arn,
            display_name: infra.display_name,
            shape: infra.shape,
            status: checked("cloud_exadata_infrastructure", "status", infra.status),
            status_reason: infra.status_reason,
            availability_zone: infra.availability_zone,
            availability_zone_id: infra.availability_zone_id,
            compute_count: infra.compute_count,
            storage_count: infra.storage_count,
            cpu_count: infra.cpu_count,
            max_cpu_count: infra.max_cpu_count,
            memory_size_in_gbs: infra.memory_size_in_gbs,
            max_memory_in_gbs: infra.max_memory_in_gbs,
            data_storage_size_in_tbs: infra.data_storage_size_in_tbs,
            max_data_storage_in_tbs: infra.max_data_storage_in_tbs,
            db_server_version: infra.db_server_version,
            storage_server_version: infra.storage_server_version,
            database_server_type: infra.database_server_type,
            storage_server_type: infra.storage_server_type,
            ocid: infra.ocid,
            oci_url: infra.oci_url,
            percent_progress: infra.percent_progress,
            created_at: infra.created_at,
            compute_model: checked(
                "cloud_exadata_infrastructure",
                "compute_model",
                infra.compute_model,
            ),
            activated_storage_count: infra.activated_storage_count,
            additional_storage_count: infra.additional_storage_count,
            available_storage_size_in_gbs: infra.available_storage_size_in_gbs,
            total_storage_size_in_gbs: infra.total_storage_size_in_gbs,
            db_node_storage_size_in_gbs: infra.db_node_storage_size_in_gbs,
            max_db_node_storage_size_in_gbs: infra.max_db_node_storage_size_in_gbs,
            monthly_db_server_version: infra.monthly_db_server_version,
            monthly_storage_server_version: infra.monthly_storage_server_version,
            last_maintenance_run_id: infra.last_maintenance_run_id,
            next_maintenance_run_id: infra.next_maintenance_run_id,
            oci_resource_anchor_name: infra.oci_resource_anchor_name,
            maintenance_window: infra.maintenance_window.map(MaintenanceWindowModel::from),
            customer_contacts_to_send_to_oci: contact_emails(
                infra.customer_contacts_to_send_to_oci,
            ),
            tags: None,
        }
    }
}

/// Filter for [`CloudExadataInfrastructureDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudExadataInfrastructureConfig {
    /// Exadata infrastructure identifier
    pub id: String,
}

/// Reads one Exadata infrastructure and its tags
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudExadataInfrastructureDataSource;

#[async_trait]
impl DataSource for CloudExadataInfrastructureDataSource {
    type Config = CloudExadataInfrastructureConfig;
    type Model = CloudExadataInfrastructureModel;

    const KIND: DataSourceKind = DataSourceKind::CloudExadataInfrastructure;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &CloudExadataInfrastructureConfig,
        ctx: &ReadContext,
    ) -> Result<CloudExadataInfrastructureModel> {
        let id = config.id.as_str();
        require_id("id", id)?;

        let input = GetCloudExadataInfrastructureInput::new(id);
        let infra = get_one::<GetCloudExadataInfrastructure, _>(api, &input, ctx, |out| {
            out.cloud_exadata_infrastructure
        })
        .await
        .map_err(|e| e.in_operation(READING, RESOURCE, Some(id)))?;

        let mut model = CloudExadataInfrastructureModel::from(infra);
        let tags = list_tags(api, model.arn.as_deref())
            .await
            .map_err(|e| e.in_operation(LISTING_TAGS, RESOURCE, Some(id)))?;
        model.tags = Some(tags);
        Ok(model)
    }
}

/// Takes no filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudExadataInfrastructuresConfig {}

/// Every Exadata infrastructure of the account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudExadataInfrastructuresModel {
    pub cloud_exadata_infrastructures: Vec<CloudExadataInfrastructureModel>,
}

/// Lists Exadata infrastructures
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudExadataInfrastructuresDataSource;

#[async_trait]
impl DataSource for CloudExadataInfrastructuresDataSource {
    type Config = CloudExadataInfrastructuresConfig;
    type Model = CloudExadataInfrastructuresModel;

    const KIND: DataSourceKind = DataSourceKind::CloudExadataInfrastructures;

    async fn read(
        &self,
        api: &dyn OdbApi,
        _config: &CloudExadataInfrastructuresConfig,
        ctx: &ReadContext,
    ) -> Result<CloudExadataInfrastructuresModel> {
        let input = ListCloudExadataInfrastructuresInput::default();
        let infras = list_all::<ListCloudExadataInfrastructures>(api, &input, ctx)
            .await
            .map_err(|e| e.in_operation(READING, RESOURCE_LIST, None))?;

        Ok(CloudExadataInfrastructuresModel {
            cloud_exadata_infrastructures: infras
                .into_iter()
                .map(CloudExadataInfrastructureModel::from)
                .collect(),
        })
    }
}
