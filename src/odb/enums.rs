//! Enumerated ODB domains
//!
//! The service adds members to these domains without notice, so every enum
//! carries an `Unknown` variant holding the raw wire value. Deserializing an
//! unrecognized member never fails and serializing it gives back the original
//! string.

/// Common surface of the string-valued enums
pub trait WireEnum {
    /// Wire-format string
    fn wire_value(&self) -> &str;

    /// Whether the value was outside the known domain
    fn is_unrecognized(&self) -> bool;
}

/// Declare a string-valued enum with a forward-compatible `Unknown` member
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this crate does not know about yet
            Unknown(String),
        }

        impl $name {
            /// Every member this crate knows about
            pub const KNOWN: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire-format string representation
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            /// Check if the value was not recognized
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl WireEnum for $name {
            fn wire_value(&self) -> &str {
                self.as_str()
            }

            fn is_unrecognized(&self) -> bool {
                self.is_unknown()
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $( $wire => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(raw.as_str()))
            }
        }
    };
}

string_enum! {
    /// Lifecycle status shared by most ODB resources
    pub enum ResourceStatus {
        Available => "AVAILABLE",
        Failed => "FAILED",
        Provisioning => "PROVISIONING",
        Terminated => "TERMINATED",
        Terminating => "TERMINATING",
        Updating => "UPDATING",
        MaintenanceInProgress => "MAINTENANCE_IN_PROGRESS",
    }
}

string_enum! {
    /// Lifecycle status of a DB node
    pub enum DbNodeResourceStatus {
        Available => "AVAILABLE",
        Failed => "FAILED",
        Provisioning => "PROVISIONING",
        Terminated => "TERMINATED",
        Terminating => "TERMINATING",
        Updating => "UPDATING",
        Stopping => "STOPPING",
        Stopped => "STOPPED",
        Starting => "STARTING",
    }
}

string_enum! {
    /// Patching state of a database server
    pub enum DbServerPatchingStatus {
        Complete => "COMPLETE",
        Failed => "FAILED",
        MaintenanceInProgress => "MAINTENANCE_IN_PROGRESS",
        Scheduled => "SCHEDULED",
    }
}

string_enum! {
    /// Kind of maintenance pending on a DB node
    pub enum DbNodeMaintenanceType {
        VmdbRebootMigration => "VMDB_REBOOT_MIGRATION",
    }
}

string_enum! {
    /// Compute unit model
    pub enum ComputeModel {
        Ecpu => "ECPU",
        Ocpu => "OCPU",
    }
}

string_enum! {
    /// Oracle license model
    pub enum LicenseModel {
        BringYourOwnLicense => "BRING_YOUR_OWN_LICENSE",
        LicenseIncluded => "LICENSE_INCLUDED",
    }
}

string_enum! {
    /// ASM disk group redundancy
    pub enum DiskRedundancy {
        High => "HIGH",
        Normal => "NORMAL",
    }
}

string_enum! {
    /// Processor family of a system shape
    pub enum ShapeType {
        Amd => "AMD",
        Intel => "INTEL",
        IntelFlexX9 => "INTEL_FLEX_X9",
        AmpereFlexA1 => "AMPERE_FLEX_A1",
    }
}

string_enum! {
    /// Lifecycle state of an IORM configuration
    pub enum IormLifecycleState {
        Bootstrapping => "BOOTSTRAPPING",
        Enabled => "ENABLED",
        Disabled => "DISABLED",
        Updating => "UPDATING",
        Failed => "FAILED",
    }
}

string_enum! {
    /// Resource-management objective of an IORM configuration
    pub enum Objective {
        Auto => "AUTO",
        Balanced => "BALANCED",
        Basic => "BASIC",
        HighThroughput => "HIGH_THROUGHPUT",
        LowLatency => "LOW_LATENCY",
    }
}

string_enum! {
    /// Whether a maintenance window has a schedule preference
    pub enum PreferenceType {
        NoPreference => "NO_PREFERENCE",
        CustomPreference => "CUSTOM_PREFERENCE",
    }
}

string_enum! {
    /// How database servers are patched during maintenance
    pub enum PatchingModeType {
        Rolling => "ROLLING",
        NonRolling => "NONROLLING",
    }
}

string_enum! {
    pub enum DayOfWeekName {
        Monday => "MONDAY",
        Tuesday => "TUESDAY",
        Wednesday => "WEDNESDAY",
        Thursday => "THURSDAY",
        Friday => "FRIDAY",
        Saturday => "SATURDAY",
        Sunday => "SUNDAY",
    }
}

string_enum! {
    pub enum MonthName {
        January => "JANUARY",
        February => "FEBRUARY",
        March => "MARCH",
        April => "APRIL",
        May => "MAY",
        June => "JUNE",
        July => "JULY",
        August => "AUGUST",
        September => "SEPTEMBER",
        October => "OCTOBER",
        November => "NOVEMBER",
        December => "DECEMBER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("AVAILABLE", ResourceStatus::Available)]
    #[test_case("MAINTENANCE_IN_PROGRESS", ResourceStatus::MaintenanceInProgress)]
    #[test_case("TERMINATED", ResourceStatus::Terminated)]
    fn test_known_status(raw: &str, expected: ResourceStatus) {
        let status: ResourceStatus = serde_json::from_value(serde_json::json!(raw)).unwrap();
        assert_eq!(status, expected);
        assert!(!status.is_unknown());
        assert_eq!(status.as_str(), raw);
    }

    #[test]
    fn test_unknown_member_is_kept() {
        let status: DbNodeResourceStatus =
            serde_json::from_str("\"HIBERNATING\"").unwrap();
        assert_eq!(status, DbNodeResourceStatus::Unknown("HIBERNATING".to_string()));
        assert!(status.is_unknown());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"HIBERNATING\"");
        assert_eq!(status.to_string(), "HIBERNATING");
    }

    #[test]
    fn test_from_str_is_infallible() {
        let model: LicenseModel = "LICENSE_INCLUDED".parse().unwrap();
        assert_eq!(model, LicenseModel::LicenseIncluded);
        let shape: ShapeType = "ARM_NEXT".parse().unwrap();
        assert!(shape.is_unknown());
    }

    #[test]
    fn test_known_lists() {
        assert_eq!(ComputeModel::KNOWN, &["ECPU", "OCPU"]);
        assert!(ShapeType::KNOWN.contains(&"INTEL_FLEX_X9"));
        assert_eq!(DayOfWeekName::KNOWN.len(), 7);
        assert_eq!(MonthName::KNOWN.len(), 12);
    }

    #[test_case("NONROLLING", PatchingModeType::NonRolling)]
    #[test_case("ROLLING", PatchingModeType::Rolling)]
    #[test_case("HALF_ROLLING", PatchingModeType::Unknown("HALF_ROLLING".to_string()))]
    fn test_patching_mode(raw: &str, expected: PatchingModeType) {
        assert_eq!(PatchingModeType::from(raw), expected);
    }
}
