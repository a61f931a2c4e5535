//! Status strings and shared defaults reported by the provider APIs.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_REGION: &str = "cn-beijing";

// Ordinary products (instances, disks).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_TIMEOUT_MEDIUM: Duration = Duration::from_secs(500);
// Slow products (databases).
pub const DEFAULT_LONG_TIMEOUT: Duration = Duration::from_secs(1000);

pub const DEFAULT_INTERVAL_MINI: Duration = Duration::from_secs(2);
pub const DEFAULT_INTERVAL_SHORT: Duration = Duration::from_secs(5);
pub const DEFAULT_INTERVAL_MEDIUM: Duration = Duration::from_secs(10);
pub const DEFAULT_INTERVAL_LONG: Duration = Duration::from_secs(20);

pub const PAGE_SIZE_SMALL: u32 = 10;
pub const PAGE_SIZE_MEDIUM: u32 = 20;
pub const PAGE_SIZE_LARGE: u32 = 50;
pub const PAGE_SIZE_XLARGE: u32 = 100;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a string-backed enum with `as_str`, `Display` and an exact-match
/// `FromStr`.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $value:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Lifecycle status of a provider resource.
    Status, "status" {
        Pending => "Pending",
        Creating => "Creating",
        Running => "Running",
        Available => "Available",
        Unavailable => "Unavailable",
        Modifying => "Modifying",
        Deleting => "Deleting",
        Starting => "Starting",
        Stopping => "Stopping",
        Stopped => "Stopped",
        Normal => "Normal",
        Changing => "Changing",
        Online => "online",
        Configuring => "configuring",
        Associating => "Associating",
        Unassociating => "Unassociating",
        InUse => "InUse",
        DiskInUse => "In_use",
        Active => "Active",
        Inactive => "Inactive",
        Idle => "Idle",
        SoldOut => "SoldOut",
        InService => "InService",
        Removing => "Removing",
        Disabled => "Disabled",
        Init => "Init",
        Provisioning => "Provisioning",
        Updating => "Updating",
        FinancialLocked => "FinancialLocked",
        Published => "Published",
        NonPublished => "NonPublished",
        Deleted => "Deleted",
        Null => "Null",
        Enable => "Enable",
        Binded => "BINDED",
    }
}

string_enum! {
    PayType, "pay type" {
        PrePaid => "PrePaid",
        PostPaid => "PostPaid",
    }
}

string_enum! {
    NetType, "net type" {
        Internet => "Internet",
        Intranet => "Intranet",
    }
}

string_enum! {
    NetworkType, "network type" {
        Classic => "Classic",
        Vpc => "Vpc",
        ClassicInternet => "classic_internet",
        ClassicIntranet => "classic_intranet",
    }
}

string_enum! {
    Protocol, "protocol" {
        Http => "http",
        Https => "https",
        Tcp => "tcp",
        Udp => "udp",
        All => "all",
        Icmp => "icmp",
        Gre => "gre",
    }
}

impl PayType {
    /// Accepts the legacy lower-case spellings (`Prepaid`, `Postpaid`) too.
    pub fn parse_lenient(s: &str) -> Result<Self, UnknownValue> {
        match s {
            "Prepaid" => Ok(Self::PrePaid),
            "Postpaid" => Ok(Self::PostPaid),
            other => other.parse(),
        }
    }
}

impl Protocol {
    /// Protocols accepted for listeners and forwarding rules.
    pub const LISTENER: &'static [Protocol] =
        &[Protocol::Http, Protocol::Https, Protocol::Tcp, Protocol::Udp];

    pub fn is_valid(value: &str) -> bool {
        Self::LISTENER.iter().any(|p| p.as_str() == value)
    }
}

/// Status strings for use with [`build_state_conf`](crate::state::build_state_conf).
pub fn status_strings(statuses: &[Status]) -> Vec<String> {
    statuses.iter().map(|s| s.as_str().to_string()).collect()
}
