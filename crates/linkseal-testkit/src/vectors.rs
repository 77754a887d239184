//! Golden test vectors for cross-implementation verification.
//!
//! Every token here was produced by an independent AES-256-GCM and raw
//! DEFLATE implementation under [`golden_key`](crate::fixtures::golden_key)
//! with a fixed nonce per vector. A conforming decoder must recover the
//! expected claim set from each positive vector and reject every negative
//! one.

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Short identifier.
    pub name: &'static str,
    /// What the vector exercises.
    pub description: &'static str,
    /// Compact token.
    pub token: &'static str,
    /// Claim set JSON the token must decode to, or `None` if it must be rejected.
    pub expected_json: Option<&'static str>,
}

impl GoldenVector {
    /// Whether a decoder must accept this token.
    pub fn is_positive(&self) -> bool {
        self.expected_json.is_some()
    }
}

/// Tokens that must decode.
pub fn positive_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "requester_prefill",
            description: "Requester pre-fill link with project and request dates",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..AQEBAQEBAQEBAQEB.Mk_UO-ileGIr5pKB2EJkpMzBT8tAkHrUjMwUPe9vzWrdFzvNQL4qY2Goa4YmoZHz51yDX4zNPF0lQ4nc-B0bmQE4ofsa_DkByKanfNUnTVv6.ieQzO2wHrAPfQClvcW95-w",
            expected_json: Some(r#"{"v":1,"role":"requester","client":"uuid-client","project":"uuid-project","request":{"ci":"20251120","co":"20251122"}}"#),
        },
        GoldenVector {
            name: "client_admin_with_meta",
            description: "Client admin link with expiry and metadata",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..AgICAgICAgICAgIC.vqTYsXvpIR804G11F-KOflKTX2OofWZHiwjbSiwBZUcCh68jh-VP72qrgG--yMERs5pEoElMwhczkk8OU8vPkobaB7vj-6Ure4EJORnfvNX8H-7CLGvrSQwvyy3GDMWAl_NEpuax6riyU1xVkwXgDgEQ7K3zvPajhkivCTTTno_fVOLO8XiJWeiL3Q.fg_KP2SgjGuzEMYxJIpKLg",
            expected_json: Some(r#"{"v":1,"role":"clientAdmin","exp":"2025-12-31T23:59:59Z","client":"3f1c2a9e-8d4b-4f6a-9c3e-2b7d5e1a0f44","meta":{"budget":1200,"ccEmails":["travel@example.com"]}}"#),
        },
        GoldenVector {
            name: "change_request",
            description: "Requester proposing a change to an existing request",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..AwMDAwMDAwMDAwMD.28b32IiyRlIhuKhfnG6OtfeAaRCrrSazlA0PfvzV90VGzgVHaRuH5J2YjCdLY_XizWYjYGtiQCWPb_hNjQ3B_VAQz0Qo_OpcASWIy79jTrqVZcEJ2Wq52xCvTt9kfzO8JXZzHJcQ0tfARLbUn0rWPSfGuBQu1CvsJN1RQEaTQSyxS3Itt00.cyHzx82Z-Klq613RDFlAqg",
            expected_json: Some(r#"{"v":1,"role":"requester","client":"c-42","project":"p-7","rid":"0b7e8c52-1d2f-4e3a-a6b9-c0d1e2f3a4b5","isChg":true,"request":{"hotel":{"nights":2,"city":"Lisbon"}}}"#),
        },
        GoldenVector {
            name: "minimal_admin",
            description: "Smallest valid claim set",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..BAQEBAQEBAQEBAQE.z9Hk25tnRczgz5QicE_zSrhwfCi7RKu-xX52bsRYpqC8_wNKhjB5.HVanm_8_QiuANSen3Olu9w",
            expected_json: Some(r#"{"v":1,"role":"attAdmin","client":"c"}"#),
        },
    ]
}

/// Tokens that must be rejected.
pub fn negative_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "unsupported_enc",
            description: "Header declares A128GCM",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMTI4R0NNIiwiemlwIjoiREVGIiwidiI6MX0..BQUFBQUFBQUFBQUF.CbrpfyAdiu7APP55yTYwqVLYVM81yfmDTTbB8qxZIwZeggyD7P5QXEXCrGtYyJGr0EdzNqX03-ICHSI3cOQJ7RtPxXlv7SGF4tRnzpbCUpUn.hpq3vUJKjhMeaKXtdsAscg",
            expected_json: None,
        },
        GoldenVector {
            name: "unsupported_format_version",
            description: "Header declares token format version 2",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6Mn0..BgYGBgYGBgYGBgYG.edTch_mVvZUk1nAnh0bvQQwrqEGUeujJyeiFK3HMUB3VNf0r4IL_dignrSB9-q7H4qoqoIYJR62W46NgqE9TB3OdS_JzOAiNo1axyr5QQV1g.CuMpYRnH9TUpFKDejfuKFg",
            expected_json: None,
        },
        GoldenVector {
            name: "key_wrapping_alg",
            description: "Header declares A256KW key wrapping",
            token: "eyJhbGciOiJBMjU2S1ciLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..BwcHBwcHBwcHBwcH.SuaXUu8vx_A5L-YZQHTC56bzTWNZ5O0RgaxNK3a4AUBWhaj8J2iEwjt0PaTWE8al1_F4GxeTvE9F3UwAUocTtk7yEXEWEdqtYUDQahpPeDfC.xgpGZRmzlNVwLL_Jvzlecg",
            expected_json: None,
        },
        GoldenVector {
            name: "missing_zip",
            description: "Header omits the compression field",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwidiI6MX0..CAgICAgICAgICAgI.b8_p2G2kJvIv5a4BQLhGROS6w79E0RVnOgEa8I_MeKQ1RGR1yPleZ65WcITrAaiunYdukHSCgkjCcMRCO8K-WspdVkfgMNHn0gOyMcpRc5rl.vIjIHAE54S95oAgBH9Dt5A",
            expected_json: None,
        },
        GoldenVector {
            name: "encrypted_key_segment",
            description: "Non-empty key segment in direct mode",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0.AAAA.CQkJCQkJCQkJCQkJ.9pQ5NQe_U6Auu8Vga7ONsz69Hz6LFSy9bOBxuuFRuBz5tDc0ddSMvoo-F6R0BuNwyczUJSRcCwr_9xrF-V_fEMB0BYHnHuYtN8ZMh7QITo6X.Mpr17J85z4ksXtxBJt6JuA",
            expected_json: None,
        },
        GoldenVector {
            name: "unsupported_claims_version",
            description: "Authentic token whose claim set declares v 2",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..CgoKCgoKCgoKCgoK.7K5unkoOZ_bPNC08rZ6PXZe9ZBl5KS92rHcc1t9a8uEetR5xEmYdcIhoXu1tbU6w0vtAmLxrqJ_F0AqT9KxDqd8xRohy0FXhBF7bO_P4QGDA.WeP3_TilrWZu6z6cKsZtiw",
            expected_json: None,
        },
        GoldenVector {
            name: "uncompressed_plaintext",
            description: "Authentic token whose plaintext was never deflated",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..CwsLCwsLCwsLCwsL.06xkg7VdoYuppnfah3L36sqAfXc9N51nmDLCDOTCs4m8VnhKObcqv2U0HxMPrzkqC7m1GRTlHEn2Sbkr3lHZGWjbAhjz0OgYDDeme_baBLSfID8kUL0FRjGSezlf_SSEDl4B8mRDuMt2v0tREnwaS0bk3YWmZQ.4jPu_uqYdC5aLBpleLt_Lw",
            expected_json: None,
        },
        GoldenVector {
            name: "non_json_plaintext",
            description: "Authentic, inflatable, but not JSON",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..DAwMDAwMDAwMDAwM.v_pWMpLSRiYOXmSDHa3V9oRpTOyg.wbBOBR8s-iHk7tM34hQFDA",
            expected_json: None,
        },
        GoldenVector {
            name: "unknown_role",
            description: "Claim set with a role outside the closed set",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..DQ0NDQ0NDQ0NDQ0N.5yuzAg7FHvQM9l1i4cW6nBxoKrYMEiqu5SAdktSWaeHju9PNw8W90X_jTgdsk2xqv9AOERSW6Ts4pl_tgmSUIEt3g-Ah-66hSQNzj6MhkNq0Ook.6U2rs6ofkZDiYPSlhLGaLw",
            expected_json: None,
        },
        GoldenVector {
            name: "missing_client",
            description: "Claim set without a client",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..Dg4ODg4ODg4ODg4O.HPNUZDxL-2992hrLriRCWjQQYQOL8hs4nUfGtQ.eVrBOQq6T1ykPejGpnPDYA",
            expected_json: None,
        },
        GoldenVector {
            name: "foreign_key",
            description: "Well-formed token sealed under a different key",
            token: "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIiwiemlwIjoiREVGIiwidiI6MX0..Dw8PDw8PDw8PDw8P.hRF5OBLnu5odJI7a31P9RFaTbKcH4K5PPsN1IpHSVmHyEiXSM8py1JcYrvgjCjD_Ulf9RP5T-uO0xTp3EphJV3j06VsGrGoyfSyPHLBQupNK.phC6gygZQPrJTWWD8XXx6w",
            expected_json: None,
        },
    ]
}

/// Every golden vector, positive first.
pub fn all_vectors() -> Vec<GoldenVector> {
    let mut vectors = positive_vectors();
    vectors.extend(negative_vectors());
    vectors
}
