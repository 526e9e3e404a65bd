use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use time::OffsetDateTime;
use uuid::Uuid;

/// Authentication material a client is constructed with.
///
/// Exactly one scheme is in effect for the lifetime of a client: a static API
/// token applied as HTTP basic auth, or a delegated OAuth token applied as a
/// signed `Authorization` header. Anything else is rejected at the type
/// boundary.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Static API token, sent as the basic auth username.
    ApiToken(String),
    /// Delegated OAuth 1.0 token, sent as a signed header.
    OAuth(OAuthToken),
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self::ApiToken(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self::ApiToken(token.to_string())
    }
}

impl From<OAuthToken> for Credential {
    fn from(token: OAuthToken) -> Self {
        Self::OAuth(token)
    }
}

/// A delegated OAuth 1.0 access token and the consumer credentials it was
/// issued against.
#[derive(Debug, Clone)]
pub struct OAuthToken {
    pub(crate) consumer_key: String,
    pub(crate) consumer_secret: String,
    pub(crate) token: String,
    pub(crate) token_secret: String,
}

impl OAuthToken {
    #[must_use]
    pub fn new(
        consumer_key: String,
        consumer_secret: String,
        token: String,
        token_secret: String,
    ) -> Self {
        Self {
            consumer_key,
            consumer_secret,
            token,
            token_secret,
        }
    }

    /// Computes a ready-to-attach `Authorization` header value using the
    /// PLAINTEXT signature method. A fresh nonce and timestamp are generated
    /// per call.
    #[must_use]
    pub fn auth_header(&self) -> String {
        let nonce = Uuid::new_v4().simple().to_string();
        let timestamp = OffsetDateTime::now_utc().unix_timestamp();
        let signature = escape(&format!("{}&{}", self.consumer_secret, self.token_secret));
        format!(
            "OAuth realm=\"\", \
             oauth_consumer_key=\"{key}\", \
             oauth_token=\"{token}\", \
             oauth_nonce=\"{nonce}\", \
             oauth_timestamp=\"{timestamp}\", \
             oauth_signature_method=\"PLAINTEXT\", \
             oauth_version=\"1.0\", \
             oauth_signature=\"{signature}\"",
            key = escape(&self.consumer_key),
            token = escape(&self.token),
        )
    }
}

fn escape(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
