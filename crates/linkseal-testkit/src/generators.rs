//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::Value;

use linkseal_core::{ClaimMap, ClaimSet, Role, CLAIMS_VERSION};

/// Generate a role.
pub fn role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Admin),
        Just(Role::ClientAdmin),
        Just(Role::Requester),
    ]
}

/// Generate an identifier in the UUID style issuers use.
pub fn identifier() -> impl Strategy<Value = String> {
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}".prop_map(String::from)
}

/// Generate an RFC 3339 expiry string.
pub fn expiry() -> impl Strategy<Value = String> {
    (2024u32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}.000Z"),
    )
}

/// Generate a leaf JSON value.
pub fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("JSON has no NaN or infinity", |f| f.is_finite())
            .prop_map(Value::from),
        "\\PC{0,24}".prop_map(Value::from),
    ]
}

/// Generate a JSON object up to two levels deep, with arrays of leaves.
pub fn claim_map() -> impl Strategy<Value = ClaimMap> {
    let flat = prop::collection::btree_map("[a-zA-Z]{1,10}", leaf_value(), 0..6)
        .prop_map(|m| m.into_iter().collect::<ClaimMap>());
    prop::collection::btree_map(
        "[a-zA-Z]{1,10}",
        prop_oneof![
            leaf_value(),
            prop::collection::vec(leaf_value(), 0..4).prop_map(Value::Array),
            flat.prop_map(Value::Object),
        ],
        0..6,
    )
    .prop_map(|m| m.into_iter().collect::<ClaimMap>())
}

/// Parameters for generating a claim set.
#[derive(Debug, Clone)]
pub struct ClaimParams {
    pub role: Role,
    pub client: String,
    pub exp: Option<String>,
    pub project: Option<String>,
    pub request: Option<ClaimMap>,
    pub rid: Option<String>,
    pub is_chg: Option<bool>,
    pub meta: Option<ClaimMap>,
}

impl Arbitrary for ClaimParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            role(),
            identifier(),
            proptest::option::of(expiry()),
            proptest::option::of(identifier()),
            proptest::option::of(claim_map()),
            proptest::option::of(identifier()),
            proptest::option::of(any::<bool>()),
            proptest::option::of(claim_map()),
        )
            .prop_map(
                |(role, client, exp, project, request, rid, is_chg, meta)| ClaimParams {
                    role,
                    client,
                    exp,
                    project,
                    request,
                    rid,
                    is_chg,
                    meta,
                },
            )
            .boxed()
    }
}

/// Build a claim set from generated parameters.
pub fn claims_from_params(params: &ClaimParams) -> ClaimSet {
    ClaimSet {
        v: CLAIMS_VERSION,
        role: params.role,
        exp: params.exp.clone(),
        client: params.client.clone(),
        project: params.project.clone(),
        request: params.request.clone(),
        rid: params.rid.clone(),
        is_chg: params.is_chg,
        meta: params.meta.clone(),
    }
}

/// Generate a valid claim set.
pub fn claim_set() -> impl Strategy<Value = ClaimSet> {
    any::<ClaimParams>().prop_map(|p| claims_from_params(&p))
}
