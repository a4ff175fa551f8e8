//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// `Pending` is the initial state for a newly created order. Any status may
/// follow any other: the workshop moves orders freely (including back out of
/// `Cancelled`), so no transition graph is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    #[serde(rename = "In-Production")]
    InProduction,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// The wire representation, e.g. `"In-Production"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProduction => "In-Production",
            Self::Shipped => "Shipped",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "In-Production" => Ok(Self::InProduction),
            "Shipped" => Ok(Self::Shipped),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
