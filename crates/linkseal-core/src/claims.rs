//! The claim set carried inside every link token.
//!
//! A claim set says who may act (`role`), on whose behalf (`client`,
//! `project`) and with what pre-filled request data. It is immutable once
//! issued: changing anything means issuing a new token.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CodecError, Result};

/// The single claim set schema version this build understands.
pub const CLAIMS_VERSION: u32 = 1;

/// Deepest object/array nesting allowed in a serialized claim set, counting
/// the claim set object itself. Stays well inside the JSON parser's
/// recursion limit so anything we encode can be decoded.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Free-form JSON object used for request data and metadata.
pub type ClaimMap = Map<String, Value>;

/// What the holder of a link is allowed to do.
///
/// Enforcement belongs to the consumer of the decoded claim set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Agency administrator.
    #[serde(rename = "attAdmin", alias = "admin")]
    Admin,
    /// Administrator on the client (tenant) side.
    #[serde(rename = "clientAdmin", alias = "client-admin")]
    ClientAdmin,
    /// A traveler or booker submitting requests.
    #[serde(rename = "requester")]
    Requester,
}

impl Role {
    /// All roles, in privilege order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::ClientAdmin, Role::Requester];

    /// The name used on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "attAdmin",
            Role::ClientAdmin => "clientAdmin",
            Role::Requester => "requester",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "attAdmin" | "admin" => Ok(Role::Admin),
            "clientAdmin" | "client-admin" => Ok(Role::ClientAdmin),
            "requester" => Ok(Role::Requester),
            other => Err(CodecError::ClaimsParse(format!("unknown role: {other}"))),
        }
    }
}

/// The protected payload of a link token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Schema version, always [`CLAIMS_VERSION`] for tokens we issue.
    pub v: u32,

    pub role: Role,

    /// Expiry as an RFC 3339 timestamp. Checked by the consumer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<String>,

    /// Owning tenant.
    pub client: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Full request object, or the proposed delta when `is_chg` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ClaimMap>,

    /// Original request this token refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rid: Option<String>,

    #[serde(default, rename = "isChg", skip_serializing_if = "Option::is_none")]
    pub is_chg: Option<bool>,

    /// Budget, cc addresses, branding and the like.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ClaimMap>,
}

impl ClaimSet {
    /// A minimal claim set for `role` acting on behalf of `client`.
    pub fn new(role: Role, client: impl Into<String>) -> Self {
        Self {
            v: CLAIMS_VERSION,
            role,
            exp: None,
            client: client.into(),
            project: None,
            request: None,
            rid: None,
            is_chg: None,
            meta: None,
        }
    }

    /// Start building a claim set.
    pub fn builder(role: Role, client: impl Into<String>) -> ClaimSetBuilder {
        ClaimSetBuilder::new(role, client)
    }

    /// Whether `request` is a delta against `rid` rather than a full object.
    pub fn is_change_request(&self) -> bool {
        self.is_chg == Some(true)
    }

    /// Parsed expiry, if present and well-formed.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.exp.as_deref()?;
        DateTime::parse_from_rfc3339(exp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Consumer-side expiry check.
    ///
    /// No `exp` means the link does not expire. An `exp` that cannot be
    /// parsed counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match (&self.exp, self.expires_at()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(at)) => now >= at,
        }
    }

    /// Reject claim sets from a schema version we do not implement.
    pub fn check_version(&self) -> Result<()> {
        if self.v != CLAIMS_VERSION {
            return Err(CodecError::UnsupportedClaimsVersion(self.v));
        }
        Ok(())
    }

    /// Reject claim sets nested deeper than [`MAX_NESTING_DEPTH`].
    pub fn check_depth(&self) -> Result<()> {
        let depth = 1 + [&self.request, &self.meta]
            .into_iter()
            .flatten()
            .map(map_depth)
            .max()
            .unwrap_or(0);
        if depth > MAX_NESTING_DEPTH {
            return Err(CodecError::Serialization(format!(
                "claim set nests {depth} levels deep, limit is {MAX_NESTING_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.check_version()?;
        self.check_depth()?;
        serde_json::to_vec(self).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// Parse compact JSON and check the schema version.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let claims: ClaimSet =
            serde_json::from_slice(bytes).map_err(|e| CodecError::ClaimsParse(e.to_string()))?;
        claims.check_version()?;
        Ok(claims)
    }
}

fn map_depth(map: &ClaimMap) -> usize {
    1 + map.values().map(value_depth).max().unwrap_or(0)
}

fn value_depth(value: &Value) -> usize {
    match value {
        Value::Object(map) => map_depth(map),
        Value::Array(items) => 1 + items.iter().map(value_depth).max().unwrap_or(0),
        _ => 0,
    }
}

/// Builder for claim sets, used by the issuing side.
#[derive(Debug, Clone)]
pub struct ClaimSetBuilder {
    claims: ClaimSet,
}

impl ClaimSetBuilder {
    pub fn new(role: Role, client: impl Into<String>) -> Self {
        Self {
            claims: ClaimSet::new(role, client),
        }
    }

    /// Set the expiry. Encoded like `Date.toISOString()`, millisecond precision.
    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.claims.exp = Some(at.to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.claims.project = Some(project.into());
        self
    }

    /// Attach a full request object for pre-filling.
    pub fn request(mut self, request: ClaimMap) -> Self {
        self.claims.request = Some(request);
        self
    }

    /// Propose a change to an existing request.
    pub fn change_of(mut self, rid: impl Into<String>, delta: ClaimMap) -> Self {
        self.claims.rid = Some(rid.into());
        self.claims.request = Some(delta);
        self.claims.is_chg = Some(true);
        self
    }

    /// Reference an existing request without proposing a change.
    pub fn rid(mut self, rid: impl Into<String>) -> Self {
        self.claims.rid = Some(rid.into());
        self
    }

    pub fn meta(mut self, meta: ClaimMap) -> Self {
        self.claims.meta = Some(meta);
        self
    }

    /// Add a single metadata entry.
    pub fn meta_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims
            .meta
            .get_or_insert_with(ClaimMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> ClaimSet {
        self.claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn prefill() -> ClaimSet {
        let request = json!({"ci": "20251120", "co": "20251122"});
        ClaimSet::builder(Role::Requester, "uuid-client")
            .project("uuid-project")
            .request(request.as_object().cloned().unwrap())
            .build()
    }

    #[test]
    fn test_compact_json_shape() {
        let json = String::from_utf8(prefill().to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"v":1,"role":"requester","client":"uuid-client","project":"uuid-project","request":{"ci":"20251120","co":"20251122"}}"#
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let claims = ClaimSet::builder(Role::ClientAdmin, "c")
            .change_of("r-1", json!({"nights": 3}).as_object().cloned().unwrap())
            .meta_entry("budget", 1200)
            .build();

        let bytes = claims.to_json().unwrap();
        assert_eq!(ClaimSet::from_json(&bytes).unwrap(), claims);
        assert!(String::from_utf8(bytes).unwrap().contains(r#""isChg":true"#));
    }

    #[test]
    fn test_role_wire_names_and_aliases() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }

        let admin: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(admin, Role::Admin);
        let client_admin: Role = serde_json::from_str("\"client-admin\"").unwrap();
        assert_eq!(client_admin, Role::ClientAdmin);
    }

    #[test]
    fn test_unknown_role_rejected() {
        let bytes = br#"{"v":1,"role":"superuser","client":"c"}"#;
        assert!(matches!(
            ClaimSet::from_json(bytes),
            Err(CodecError::ClaimsParse(_))
        ));
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_missing_client_rejected() {
        let bytes = br#"{"v":1,"role":"requester"}"#;
        assert!(ClaimSet::from_json(bytes).is_err());
    }

    #[test]
    fn test_version_checked_both_ways() {
        let mut claims = prefill();
        claims.v = 2;

        assert!(matches!(
            claims.to_json(),
            Err(CodecError::UnsupportedClaimsVersion(2))
        ));

        let bytes = br#"{"v":2,"role":"requester","client":"c"}"#;
        assert!(matches!(
            ClaimSet::from_json(bytes),
            Err(CodecError::UnsupportedClaimsVersion(2))
        ));
    }

    #[test]
    fn test_null_optionals_accepted() {
        let bytes = br#"{"v":1,"role":"requester","client":"c","project":null,"meta":null}"#;
        let claims = ClaimSet::from_json(bytes).unwrap();
        assert_eq!(claims, ClaimSet::new(Role::Requester, "c"));
    }

    #[test]
    fn test_expiry() {
        let at = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        let claims = ClaimSet::builder(Role::Requester, "c")
            .expires_at(at)
            .build();

        assert_eq!(claims.exp.as_deref(), Some("2025-12-31T23:59:59.000Z"));
        assert_eq!(claims.expires_at(), Some(at));
        assert!(!claims.is_expired_at(at - chrono::Duration::seconds(1)));
        assert!(claims.is_expired_at(at));
    }

    #[test]
    fn test_no_expiry_never_expires() {
        let claims = ClaimSet::new(Role::Admin, "c");
        assert!(!claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_unparsable_expiry_counts_as_expired() {
        let mut claims = ClaimSet::new(Role::Admin, "c");
        claims.exp = Some("next tuesday".to_string());

        assert_eq!(claims.expires_at(), None);
        assert!(claims.is_expired_at(Utc::now()));
    }

    fn nested(levels: usize) -> ClaimMap {
        let mut value = json!("leaf");
        for _ in 1..levels {
            value = json!({ "next": value });
        }
        json!({ "next": value }).as_object().cloned().unwrap()
    }

    #[test]
    fn test_depth_counts_request_levels() {
        let claims = ClaimSet::builder(Role::Requester, "c")
            .request(nested(3))
            .build();
        // claim set, then three objects under `request`
        assert!(claims.check_depth().is_ok());
        assert_eq!(1 + map_depth(claims.request.as_ref().unwrap()), 4);
    }

    #[test]
    fn test_moderate_nesting_roundtrips() {
        let claims = ClaimSet::builder(Role::Requester, "c")
            .request(nested(40))
            .meta(json!({"list": [[[1, 2], [3]], []]}).as_object().cloned().unwrap())
            .build();

        let bytes = claims.to_json().unwrap();
        assert_eq!(ClaimSet::from_json(&bytes).unwrap(), claims);
    }

    #[test]
    fn test_deep_nesting_rejected_at_encode() {
        for levels in [MAX_NESTING_DEPTH, 130] {
            let claims = ClaimSet::builder(Role::Requester, "c")
                .request(nested(levels))
                .build();
            assert!(
                matches!(claims.to_json(), Err(CodecError::Serialization(_))),
                "{levels}"
            );
        }
    }

    #[test]
    fn test_deep_arrays_rejected_at_encode() {
        let mut value = json!(null);
        for _ in 0..100 {
            value = json!([value]);
        }
        let claims = ClaimSet::builder(Role::Admin, "c")
            .meta_entry("deep", value)
            .build();
        assert!(claims.to_json().is_err());
    }

    #[test]
    fn test_floats_roundtrip_exactly() {
        let values = [
            -3.1791526229035617e-162,
            -4.144185377299814e69,
            0.1,
            1.0 / 3.0,
            f64::MAX,
            f64::MIN_POSITIVE,
            5e-324,
        ];
        for value in values {
            let claims = ClaimSet::builder(Role::ClientAdmin, "c")
                .meta_entry("budget", value)
                .meta_entry("list", json!([value, null, -value]))
                .build();

            let decoded = ClaimSet::from_json(&claims.to_json().unwrap()).unwrap();
            let meta = decoded.meta.as_ref().unwrap();
            assert_eq!(meta["budget"].as_f64(), Some(value), "{value:e}");
            assert_eq!(decoded, claims, "{value:e}");
        }
    }
}
