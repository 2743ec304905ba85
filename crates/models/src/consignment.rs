use serde::{Deserialize, Serialize};

/// A container travelling as part of a consignment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Container {
    pub id: String,
    pub customer_id: String,
    pub origin: String,
    pub user_id: String,
}

/// A shipped-goods record.
///
/// Every field falls back to its zero value when missing on the wire, so a
/// partially filled request is still a valid consignment. No field is
/// checked; the service stores whatever it is given.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Consignment {
    pub id: String,
    pub description: String,
    pub weight: i32,
    pub containers: Vec<Container>,
    pub vessel_id: String,
}

impl Consignment {
    /// Consignment carrying only an id; handy for callers that fill the rest later.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }
}

/// Request for `GetConsignments`. The method honours no filter, so the
/// message has no fields; unknown fields sent by clients are dropped.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetRequest {}

/// Reply shared by both RPC methods.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Response {
    pub created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consignment: Option<Consignment>,
    pub consignments: Vec<Consignment>,
}

impl Response {
    /// Reply to a successful `CreateConsignment`.
    pub fn created(consignment: Consignment) -> Self {
        Self { created: true, consignment: Some(consignment), consignments: Vec::new() }
    }

    /// Reply to `GetConsignments`.
    pub fn listing(consignments: Vec<Consignment>) -> Self {
        Self { created: false, consignment: None, consignments }
    }
}
