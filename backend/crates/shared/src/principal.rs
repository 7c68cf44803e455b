//! Principal - Verified identity claim
//!
//! The identity attached to a request after the credential gate has verified
//! the bearer token. The auth domain produces it (as the signed claim set of
//! the credential), the research domain consumes it; it therefore lives in
//! the shared kernel.
//!
//! The serialized form is the credential's claim payload, so field names are
//! part of the wire contract.

use serde::{Deserialize, Serialize};

use crate::id::AccountId;

/// Verified identity and role claim
///
/// Carried in request extensions once the credential gate has accepted the
/// bearer token. The embedded role is trusted as-signed; it is not re-checked
/// against storage on each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Account ID the credential was issued for
    pub id: i64,
    /// Email at issuance time
    pub email: String,
    /// Admin role flag at issuance time
    #[serde(default)]
    pub is_admin: bool,
}

impl Principal {
    /// Typed account ID
    pub fn account_id(&self) -> AccountId {
        AccountId::from_i64(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_wire_format() {
        let principal = Principal {
            id: 1,
            email: "trainer@example.com".to_string(),
            is_admin: false,
        };

        let json = serde_json::to_value(&principal).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "trainer@example.com");
        assert_eq!(json["isAdmin"], false);
    }

    #[test]
    fn test_missing_admin_flag_defaults_false() {
        let principal: Principal =
            serde_json::from_str(r#"{"id":2,"email":"t@example.com"}"#).unwrap();
        assert!(!principal.is_admin);
        assert_eq!(principal.account_id().as_i64(), 2);
    }
}
