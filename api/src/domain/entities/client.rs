//! Client domain entity
//!
//! A client is the organisation a registering user belongs to. Its name
//! doubles as a tier label that drives the credit-limit policy.

use serde::{Deserialize, Serialize};

/// Label reserved for clients whose users get their scored limit doubled
pub const IMPORTANT_CLIENT_LABEL: &str = "ImportantClient";

/// Label reserved for clients whose users are exempt from credit checks
pub const VERY_IMPORTANT_CLIENT_LABEL: &str = "VeryImportantClient";

/// Unique identifier for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub i32);

impl From<i32> for ClientId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client tier, derived from the client's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientTier {
    Standard,
    Important,
    VeryImportant,
}

/// How a user's credit limit is established for a given tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditPolicy {
    /// No credit check, no limit
    Exempt,
    /// Ask the scoring service and scale the result
    Scored { multiplier: i32 },
}

impl ClientTier {
    /// Resolve a tier from a client name.
    ///
    /// Matching is exact and case-sensitive; anything that is not one of the
    /// two reserved labels (including an empty name) is `Standard`.
    pub fn from_label(label: &str) -> Self {
        match label {
            IMPORTANT_CLIENT_LABEL => ClientTier::Important,
            VERY_IMPORTANT_CLIENT_LABEL => ClientTier::VeryImportant,
            _ => ClientTier::Standard,
        }
    }

    pub fn credit_policy(self) -> CreditPolicy {
        match self {
            ClientTier::Standard => CreditPolicy::Scored { multiplier: 1 },
            ClientTier::Important => CreditPolicy::Scored { multiplier: 2 },
            ClientTier::VeryImportant => CreditPolicy::Exempt,
        }
    }
}

impl std::fmt::Display for ClientTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientTier::Standard => write!(f, "standard"),
            ClientTier::Important => write!(f, "important"),
            ClientTier::VeryImportant => write!(f, "very-important"),
        }
    }
}

/// A client, as supplied by the client directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}

impl Client {
    pub fn tier(&self) -> ClientTier {
        ClientTier::from_label(&self.name)
    }
}
