//! ODB service model
//!
//! Typed view of the Oracle Database@AWS API:
//!
//! - [`OdbApi`]: the raw request/response seam, implemented over HTTP by
//!   [`HttpOdbClient`]
//! - [`Operation`] / [`ListOperation`]: typed operation descriptors
//! - [`ListPages`]: adapts a list operation into a pagination source
//! - record shapes and the forward-compatible enums they use

mod api;
mod client;
pub mod enums;
mod operations;
mod shapes;
mod timestamp;

#[cfg(test)]
pub(crate) mod fake;

pub use api::{invoke, ListOperation, ListPages, OdbApi, Operation};
pub use client::{HttpOdbClient, JSON_CONTENT_TYPE, TARGET_PREFIX};
pub use enums::{
    ComputeModel, DayOfWeekName, DbNodeMaintenanceType, DbNodeResourceStatus,
    DbServerPatchingStatus, DiskRedundancy, IormLifecycleState, LicenseModel, MonthName, Objective,
    PatchingModeType, PreferenceType, ResourceStatus, ShapeType, WireEnum,
};
pub use operations::*;
pub use shapes::*;
