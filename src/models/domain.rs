use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four resource kinds served by the travel API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Customer,
    Hotel,
    Tour,
    Flight,
}

/// Per-kind field and route configuration
///
/// Every render, filter and routing site reads from this table instead of
/// branching on the kind itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    pub endpoint: &'static str,
    pub title_field: &'static str,
    pub subtitle_field: &'static str,
    pub route_prefix: &'static str,
    pub label: &'static str,
}

const CUSTOMER: KindDescriptor = KindDescriptor {
    endpoint: "/customers",
    title_field: "fullName",
    subtitle_field: "email",
    route_prefix: "/customers/",
    label: "Customer",
};

const HOTEL: KindDescriptor = KindDescriptor {
    endpoint: "/hotels",
    title_field: "hotelName",
    subtitle_field: "hotelLocation",
    route_prefix: "/hotels/",
    label: "Hotel",
};

const TOUR: KindDescriptor = KindDescriptor {
    endpoint: "/tours",
    title_field: "selectedPackage",
    subtitle_field: "pickupLocation",
    route_prefix: "/tours/",
    label: "Tour",
};

const FLIGHT: KindDescriptor = KindDescriptor {
    endpoint: "/flights",
    title_field: "passengerName",
    subtitle_field: "email",
    route_prefix: "/flights/",
    label: "Flight",
};

impl ResourceKind {
    /// All kinds in merge order
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Customer,
        ResourceKind::Hotel,
        ResourceKind::Tour,
        ResourceKind::Flight,
    ];

    pub fn descriptor(self) -> &'static KindDescriptor {
        match self {
            ResourceKind::Customer => &CUSTOMER,
            ResourceKind::Hotel => &HOTEL,
            ResourceKind::Tour => &TOUR,
            ResourceKind::Flight => &FLIGHT,
        }
    }

    pub fn endpoint(self) -> &'static str {
        self.descriptor().endpoint
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    /// Position in merge order
    pub fn index(self) -> usize {
        match self {
            ResourceKind::Customer => 0,
            ResourceKind::Hotel => 1,
            ResourceKind::Tour => 2,
            ResourceKind::Flight => 3,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownKind;

    /// Accepts the type label as well as the plural collection name,
    /// case-insensitively (`Hotel`, `hotel`, `hotels`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "customer" | "customers" => Ok(ResourceKind::Customer),
            "hotel" | "hotels" => Ok(ResourceKind::Hotel),
            "tour" | "tours" => Ok(ResourceKind::Tour),
            "flight" | "flights" => Ok(ResourceKind::Flight),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Opaque JSON record as returned by the travel API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Read a string field; absent, null and non-string values are `None`
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.field("_id")
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// Bookings are plain records read from `/bookings`
pub type Booking = Record;

/// A record tagged with the kind of list it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub data: Record,
}

impl SearchResult {
    pub fn new(kind: ResourceKind, data: Record) -> Self {
        Self { kind, data }
    }

    pub fn title(&self) -> Option<&str> {
        self.data.field(self.kind.descriptor().title_field)
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.data.field(self.kind.descriptor().subtitle_field)
    }
}

/// Load status of one resource list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Pending,
    Loaded,
    Failed,
}

/// Which result presentation a query is run for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Autocomplete dropdown, capped result count
    #[default]
    Dropdown,
    /// Full results page, uncapped
    #[serde(alias = "fullpage", alias = "full_page")]
    Full,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dropdown" => Ok(SearchMode::Dropdown),
            "full" | "fullpage" | "full_page" => Ok(SearchMode::Full),
            other => Err(format!("unknown search mode: {}", other)),
        }
    }
}
