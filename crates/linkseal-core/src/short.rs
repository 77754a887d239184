//! Minified claim set representation.
//!
//! One- and two-letter keys intended to shrink a claim set before
//! compression. Tokens are issued with the verbose [`ClaimSet`] form; this
//! shape exists for size experiments and for reading payloads produced by
//! tooling that emits it. Routing the token path through it would change the
//! wire format of every issued link.

use serde::{Deserialize, Serialize};

use crate::claims::{ClaimMap, ClaimSet, Role};
use crate::error::{CodecError, Result};

/// Single-letter role codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortRole {
    #[serde(rename = "a")]
    Admin,
    #[serde(rename = "c")]
    ClientAdmin,
    #[serde(rename = "q")]
    Requester,
}

impl From<Role> for ShortRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => ShortRole::Admin,
            Role::ClientAdmin => ShortRole::ClientAdmin,
            Role::Requester => ShortRole::Requester,
        }
    }
}

impl From<ShortRole> for Role {
    fn from(role: ShortRole) -> Self {
        match role {
            ShortRole::Admin => Role::Admin,
            ShortRole::ClientAdmin => Role::ClientAdmin,
            ShortRole::Requester => Role::Requester,
        }
    }
}

/// Minified claim set. `g` is 1 for change requests, 0 for an explicit
/// "not a change".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortClaimSet {
    pub v: u32,
    pub r: ShortRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    pub c: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<ClaimMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<ClaimMap>,
}

impl From<&ClaimSet> for ShortClaimSet {
    fn from(claims: &ClaimSet) -> Self {
        Self {
            v: claims.v,
            r: claims.role.into(),
            e: claims.exp.clone(),
            c: claims.client.clone(),
            p: claims.project.clone(),
            d: claims.request.clone(),
            i: claims.rid.clone(),
            g: claims.is_chg.map(u8::from),
            m: claims.meta.clone(),
        }
    }
}

impl TryFrom<ShortClaimSet> for ClaimSet {
    type Error = CodecError;

    fn try_from(short: ShortClaimSet) -> Result<Self> {
        let is_chg = match short.g {
            None => None,
            Some(0) => Some(false),
            Some(1) => Some(true),
            Some(other) => {
                return Err(CodecError::ClaimsParse(format!(
                    "change flag must be 0 or 1, got {other}"
                )))
            }
        };

        Ok(ClaimSet {
            v: short.v,
            role: short.r.into(),
            exp: short.e,
            client: short.c,
            project: short.p,
            request: short.d,
            rid: short.i,
            is_chg,
            meta: short.m,
        })
    }
}
