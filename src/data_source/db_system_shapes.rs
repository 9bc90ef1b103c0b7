//! System shapes available for DB systems

use super::{checked, list_all, DataSource, DataSourceKind, ReadContext, READING};
use crate::error::Result;
use crate::odb::{
    ComputeModel, DbSystemShapeSummary, ListDbSystemShapes, ListDbSystemShapesInput, OdbApi,
    ShapeType,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const RESOURCE: &str = "Db System Shapes";

/// Filter for [`DbSystemShapesDataSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DbSystemShapesConfig {
    /// Restrict to shapes offered in this availability zone
    #[serde(default)]
    pub availability_zone_id: Option<String>,
}

/// Shapes matching the filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbSystemShapesModel {
    pub availability_zone_id: Option<String>,
    pub db_system_shapes: Vec<DbSystemShapeModel>,
}

/// One system shape
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DbSystemShapeModel {
    pub name: Option<String>,
    pub shape_family: Option<String>,
    pub shape_type: Option<ShapeType>,
    pub available_core_count: Option<i32>,
    pub available_core_count_per_node: Option<i32>,
    pub available_data_storage_in_tbs: Option<i32>,
    pub available_data_storage_per_server_in_tbs: Option<i32>,
    pub available_db_node_per_node_in_gbs: Option<i32>,
    pub available_db_node_storage_in_gbs: Option<i32>,
    pub available_memory_in_gbs: Option<i32>,
    pub available_memory_per_node_in_gbs: Option<i32>,
    pub core_count_increment: Option<i32>,
    pub max_storage_count: Option<i32>,
    pub maximum_node_count: Option<i32>,
    pub min_core_count_per_node: Option<i32>,
    pub min_data_storage_in_tbs: Option<i32>,
    pub min_db_node_storage_per_node_in_gbs: Option<i32>,
    pub min_memory_per_node_in_gbs: Option<i32>,
    pub min_storage_count: Option<i32>,
    pub minimum_core_count: Option<i32>,
    pub minimum_node_count: Option<i32>,
    pub runtime_minimum_core_count: Option<i32>,
    pub are_server_types_supported: Option<bool>,
    pub compute_model: Option<ComputeModel>,
}

impl From<DbSystemShapeSummary> for DbSystemShapeModel {
    fn from(shape: DbSystemShapeSummary) -> Self {
        Self {
            name: shape.name,
            shape_family: shape.shape_family,
            shape_type: checked("db_system_shape", "shape_type", shape.shape_type),
            available_core_count: shape.available_core_count,
            available_core_count_per_node: shape.available_core_count_per_node,
            available_data_storage_in_tbs: shape.available_data_storage_in_tbs,
            available_data_storage_per_server_in_tbs: shape
                .available_data_storage_per_server_in_tbs,
            available_db_node_per_node_in_gbs: shape.available_db_node_per_node_in_gbs,
            available_db_node_storage_in_gbs: shape.available_db_node_storage_in_gbs,
            available_memory_in_gbs: shape.available_memory_in_gbs,
            available_memory_per_node_in_gbs: shape.available_memory_per_node_in_gbs,
            core_count_increment: shape.core_count_increment,
            max_storage_count: shape.max_storage_count,
            maximum_node_count: shape.maximum_node_count,
            min_core_count_per_node: shape.min_core_count_per_node,
            min_data_storage_in_tbs: shape.min_data_storage_in_tbs,
            min_db_node_storage_per_node_in_gbs: shape.min_db_node_storage_per_node_in_gbs,
            min_memory_per_node_in_gbs: shape.min_memory_per_node_in_gbs,
            min_storage_count: shape.min_storage_count,
            minimum_core_count: shape.minimum_core_count,
            minimum_node_count: shape.minimum_node_count,
            runtime_minimum_core_count: shape.runtime_minimum_core_count,
            are_server_types_supported: shape.are_server_types_supported,
            compute_model: checked("db_system_shape", "compute_model", shape.compute_model),
        }
    }
}

/// Lists system shapes, optionally within one availability zone
#[derive(Debug, Clone, Copy, Default)]
pub struct DbSystemShapesDataSource;

#[async_trait]
impl DataSource for DbSystemShapesDataSource {
    type Config = DbSystemShapesConfig;
    type Model = DbSystemShapesModel;

    const KIND: DataSourceKind = DataSourceKind::DbSystemShapes;

    async fn read(
        &self,
        api: &dyn OdbApi,
        config: &DbSystemShapesConfig,
        ctx: &ReadContext,
    ) -> Result<DbSystemShapesModel> {
        let input = ListDbSystemShapesInput {
            availability_zone_id: config.availability_zone_id.clone(),
            ..Default::default()
        };
        let shapes = list_all::<ListDbSystemShapes>(api, &input, ctx)
            .await
            .map_err(|e| {
                e.in_operation(READING, RESOURCE, config.availability_zone_id.as_deref())
            })?;

        Ok(DbSystemShapesModel {
            availability_zone_id: config.availability_zone_id.clone(),
            db_system_shapes: shapes.into_iter().map(DbSystemShapeModel::from).collect(),
        })
    }
}
