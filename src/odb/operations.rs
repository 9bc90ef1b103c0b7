//! Typed ODB operations
//!
//! Request/response documents and the [`Operation`] descriptors tying them to
//! their wire names. Optional request fields are left out of the JSON body
//! when unset, so "no filter" never turns into "filter on the empty string".

use super::api::{ListOperation, Operation};
use super::shapes::{
    CloudAutonomousVmCluster, CloudExadataInfrastructure, CloudVmCluster, DbNodeSummary,
    DbServerSummary, DbSystemShapeSummary, GiVersionSummary, OdbNetwork, OdbPeeringConnection,
};
use crate::pagination::Page;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declare a paginated list operation
macro_rules! list_operation {
    (
        $(#[$meta:meta])*
        $op:ident => $wire:literal,
        $input:ident -> $output:ident { $items:ident: Vec<$item:ty> }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $op;

        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $output {
            pub $items: Vec<$item>,
            pub next_token: Option<String>,
        }

        impl Operation for $op {
            const NAME: &'static str = $wire;
            type Input = $input;
            type Output = $output;
        }

        impl ListOperation for $op {
            type Item = $item;

            fn set_next_token(input: &mut $input, token: Option<String>) {
                input.next_token = token;
            }

            fn into_page(output: $output) -> Page<$item> {
                Page::new(output.$items, output.next_token)
            }
        }
    };
}

/// Declare a single-record get operation
macro_rules! get_operation {
    (
        $(#[$meta:meta])*
        $op:ident => $wire:literal,
        $input:ident { $key:ident } -> $output:ident { $field:ident: $record:ty }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $op;

        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $input {
            pub $key: String,
        }

        impl $input {
            /// Look up the record with this identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self { $key: id.into() }
            }
        }

        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $output {
            pub $field: Option<$record>,
        }

        impl Operation for $op {
            const NAME: &'static str = $wire;
            type Input = $input;
            type Output = $output;
        }
    };
}

// ============================================================================
// List Inputs
// ============================================================================

/// Filter for [`ListDbNodes`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDbNodesInput {
    pub cloud_vm_cluster_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Filter for [`ListDbServers`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDbServersInput {
    pub cloud_exadata_infrastructure_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Filter for [`ListDbSystemShapes`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDbSystemShapesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Filter for [`ListGiVersions`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGiVersionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Filter for [`ListOdbPeeringConnections`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOdbPeeringConnectionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odb_network_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Filter for [`ListCloudVmClusters`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCloudVmClustersInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_exadata_infrastructure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Filter for [`ListCloudAutonomousVmClusters`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCloudAutonomousVmClustersInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_exadata_infrastructure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Filter for [`ListCloudExadataInfrastructures`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCloudExadataInfrastructuresInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ============================================================================
// List Operations
// ============================================================================

list_operation! {
    /// List the DB nodes of a VM cluster
    ListDbNodes => "ListDbNodes",
    ListDbNodesInput -> ListDbNodesOutput { db_nodes: Vec<DbNodeSummary> }
}

list_operation! {
    /// List the database servers of an Exadata infrastructure
    ListDbServers => "ListDbServers",
    ListDbServersInput -> ListDbServersOutput { db_servers: Vec<DbServerSummary> }
}

list_operation! {
    /// List the available system shapes
    ListDbSystemShapes => "ListDbSystemShapes",
    ListDbSystemShapesInput -> ListDbSystemShapesOutput {
        db_system_shapes: Vec<DbSystemShapeSummary>
    }
}

list_operation! {
    /// List the Grid Infrastructure versions
    ListGiVersions => "ListGiVersions",
    ListGiVersionsInput -> ListGiVersionsOutput { gi_versions: Vec<GiVersionSummary> }
}

list_operation! {
    /// List ODB peering connections
    ListOdbPeeringConnections => "ListOdbPeeringConnections",
    ListOdbPeeringConnectionsInput -> ListOdbPeeringConnectionsOutput {
        odb_peering_connections: Vec<OdbPeeringConnection>
    }
}

list_operation! {
    /// List VM clusters
    ListCloudVmClusters => "ListCloudVmClusters",
    ListCloudVmClustersInput -> ListCloudVmClustersOutput {
        cloud_vm_clusters: Vec<CloudVmCluster>
    }
}

list_operation! {
    /// List Autonomous VM clusters
    ListCloudAutonomousVmClusters => "ListCloudAutonomousVmClusters",
    ListCloudAutonomousVmClustersInput -> ListCloudAutonomousVmClustersOutput {
        cloud_autonomous_vm_clusters: Vec<CloudAutonomousVmCluster>
    }
}

list_operation! {
    /// List Exadata infrastructures
    ListCloudExadataInfrastructures => "ListCloudExadataInfrastructures",
    ListCloudExadataInfrastructuresInput -> ListCloudExadataInfrastructuresOutput {
        cloud_exadata_infrastructures: Vec<CloudExadataInfrastructure>
    }
}

// ============================================================================
// Get Operations
// ============================================================================

get_operation! {
    /// Fetch one ODB peering connection
    GetOdbPeeringConnection => "GetOdbPeeringConnection",
    GetOdbPeeringConnectionInput { odb_peering_connection_id }
        -> GetOdbPeeringConnectionOutput { odb_peering_connection: OdbPeeringConnection }
}

get_operation! {
    /// Fetch one VM cluster
    GetCloudVmCluster => "GetCloudVmCluster",
    GetCloudVmClusterInput { cloud_vm_cluster_id }
        -> GetCloudVmClusterOutput { cloud_vm_cluster: CloudVmCluster }
}

get_operation! {
    /// Fetch one Exadata infrastructure
    GetCloudExadataInfrastructure => "GetCloudExadataInfrastructure",
    GetCloudExadataInfrastructureInput { cloud_exadata_infrastructure_id }
        -> GetCloudExadataInfrastructureOutput {
            cloud_exadata_infrastructure: CloudExadataInfrastructure
        }
}

get_operation! {
    /// Fetch one Autonomous VM cluster
    GetCloudAutonomousVmCluster => "GetCloudAutonomousVmCluster",
    GetCloudAutonomousVmClusterInput { cloud_autonomous_vm_cluster_id }
        -> GetCloudAutonomousVmClusterOutput {
            cloud_autonomous_vm_cluster: CloudAutonomousVmCluster
        }
}

get_operation! {
    /// Fetch one ODB network
    GetOdbNetwork => "GetOdbNetwork",
    GetOdbNetworkInput { odb_network_id } -> GetOdbNetworkOutput { odb_network: OdbNetwork }
}

// ============================================================================
// Tags
// ============================================================================

/// Read the tags attached to a resource
#[derive(Debug, Clone, Copy, Default)]
pub struct ListTagsForResource;

/// Input for [`ListTagsForResource`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceInput {
    pub resource_arn: String,
}

/// Output of [`ListTagsForResource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListTagsForResourceOutput {
    pub tags: BTreeMap<String, String>,
}

impl Operation for ListTagsForResource {
    const NAME: &'static str = "ListTagsForResource";
    type Input = ListTagsForResourceInput;
    type Output = ListTagsForResourceOutput;
}
