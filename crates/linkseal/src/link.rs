//! Share-link fragments.
//!
//! A fragment is the configured prefix followed by a token, meant to sit
//! after the `#` of a URL so it never reaches a server in a request line:
//!
//! ```text
//! https://app.example/#TR?jwe=<token>
//! ```

use linkseal_core::ClaimSet;

use crate::codec::TokenCodec;
use crate::config::LinkConfig;
use crate::error::Result;

/// Builds and parses prefixed link fragments.
#[derive(Debug, Clone)]
pub struct LinkCodec {
    codec: TokenCodec,
}

impl LinkCodec {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Create a link codec whose key comes from `config.key_var`.
    pub fn from_config(config: LinkConfig) -> Self {
        Self::new(TokenCodec::from_config(config))
    }

    /// The underlying token codec.
    pub fn token_codec(&self) -> &TokenCodec {
        &self.codec
    }

    fn prefix(&self) -> &str {
        &self.codec.config().prefix
    }

    /// Prefix plus a freshly encoded token.
    pub async fn build_fragment(&self, claims: &ClaimSet) -> Result<String> {
        let token = self.codec.encode(claims).await?;
        Ok(format!("{}{}", self.prefix(), token))
    }

    /// Full share link: `origin#<prefix><token>`.
    ///
    /// An `origin` that already ends in `#` is not given a second one.
    pub async fn share_url(&self, origin: &str, claims: &ClaimSet) -> Result<String> {
        let fragment = self.build_fragment(claims).await?;
        let base = origin.strip_suffix('#').unwrap_or(origin);
        Ok(format!("{base}#{fragment}"))
    }

    /// Recover a claim set from a bare token, a fragment or a full URL.
    ///
    /// Everything up to and including the first occurrence of the prefix is
    /// discarded; input without the prefix is treated as a bare token.
    /// Surrounding whitespace is ignored.
    pub async fn parse_fragment(&self, input: &str) -> Result<Option<ClaimSet>> {
        self.codec.decode(strip_prefix(input.trim(), self.prefix())).await
    }
}

fn strip_prefix<'a>(input: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return input;
    }
    match input.find(prefix) {
        Some(at) => &input[at + prefix.len()..],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkseal_core::Role;
    use linkseal_keys::{KeyProvider, StaticKeySource};
    use std::sync::Arc;

    const SECRET: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

    fn links() -> LinkCodec {
        let provider = Arc::new(KeyProvider::new(StaticKeySource::new(SECRET)));
        LinkCodec::new(TokenCodec::new(provider, LinkConfig::default()))
    }

    fn claims() -> ClaimSet {
        ClaimSet::builder(Role::ClientAdmin, "client-7")
            .project("project-3")
            .build()
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("TR?jwe=abc", "TR?jwe="), "abc");
        assert_eq!(strip_prefix("https://x/#TR?jwe=abc", "TR?jwe="), "abc");
        assert_eq!(strip_prefix("abc", "TR?jwe="), "abc");
        assert_eq!(strip_prefix("TR?jwe=TR?jwe=abc", "TR?jwe="), "TR?jwe=abc");
        assert_eq!(strip_prefix("abc", ""), "abc");
    }

    #[tokio::test]
    async fn test_fragment_roundtrip() {
        let links = links();
        let fragment = links.build_fragment(&claims()).await.unwrap();

        assert!(fragment.starts_with("TR?jwe="));
        assert_eq!(links.parse_fragment(&fragment).await.unwrap(), Some(claims()));
    }

    #[tokio::test]
    async fn test_bare_token_and_full_url() {
        let links = links();
        let fragment = links.build_fragment(&claims()).await.unwrap();
        let token = fragment.trim_start_matches("TR?jwe=");

        assert_eq!(links.parse_fragment(token).await.unwrap(), Some(claims()));

        let url = format!("https://app.example/requests/new#{fragment}");
        assert_eq!(links.parse_fragment(&url).await.unwrap(), Some(claims()));

        let pasted = format!("\n  {url}  \r\n");
        assert_eq!(links.parse_fragment(&pasted).await.unwrap(), Some(claims()));
    }

    #[tokio::test]
    async fn test_share_url() {
        let links = links();

        let url = links.share_url("https://app.example/", &claims()).await.unwrap();
        assert!(url.starts_with("https://app.example/#TR?jwe="));
        assert_eq!(links.parse_fragment(&url).await.unwrap(), Some(claims()));

        let url = links.share_url("https://app.example/#", &claims()).await.unwrap();
        assert!(url.starts_with("https://app.example/#TR?jwe="));
        assert!(!url.contains("##"));
    }

    #[tokio::test]
    async fn test_custom_prefix() {
        let provider = Arc::new(KeyProvider::new(StaticKeySource::new(SECRET)));
        let links = LinkCodec::new(TokenCodec::new(
            provider,
            LinkConfig::default().with_prefix("invite="),
        ));

        let fragment = links.build_fragment(&claims()).await.unwrap();
        assert!(fragment.starts_with("invite="));
        assert_eq!(links.parse_fragment(&fragment).await.unwrap(), Some(claims()));
    }

    #[tokio::test]
    async fn test_garbage_is_none() {
        let links = links();
        for input in ["", "TR?jwe=", "https://app.example/#TR?jwe=nope", "#"] {
            assert_eq!(links.parse_fragment(input).await.unwrap(), None, "{input:?}");
        }
    }
}
