//! AWS Systems Manager Parameter Store over HTTPS.
//!
//! Speaks the AWS JSON 1.1 protocol directly: every call is a signed
//! `POST /` whose `X-Amz-Target` header names the operation. All reads ask for
//! decryption, so `SecureString` values come back in plain text.

mod sigv4;
mod wire;

use std::time::Duration;

use chrono::Utc;
use psclient_core::{
    HistoryEntry, Page, Parameter, ParameterStore, TransportError, TransportResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StoreError};
use wire::{
    GetParameterHistoryRequest, GetParameterHistoryResponse, GetParameterRequest,
    GetParameterResponse, GetParametersByPathRequest, GetParametersByPathResponse,
};

pub use sigv4::Credentials;

const SERVICE: &str = "ssm";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one SSM region.
///
/// # Example
///
/// ```ignore
/// let store = SsmStore::builder()
///     .region("us-west-2")
///     .credentials(Credentials::new(key, secret))
///     .build()?;
///
/// let param = store.get_parameter("/app/DB_HOST")?;
/// ```
pub struct SsmStore {
    agent: ureq::Agent,
    endpoint: String,
    host: String,
    region: String,
    credentials: Credentials,
}

impl std::fmt::Debug for SsmStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmStore")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl SsmStore {
    /// Create a builder.
    pub fn builder() -> SsmStoreBuilder {
        SsmStoreBuilder::default()
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call<Req, Resp>(&self, operation: &str, request: &Req) -> TransportResult<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_string(request)
            .map_err(|e| TransportError::Decode(format!("{}: {}", operation, e)))?;
        let target = format!("AmazonSSM.{}", operation);
        let signature = sigv4::Signer::new(&self.credentials, &self.region, SERVICE).sign(
            &self.host,
            CONTENT_TYPE,
            &target,
            &body,
            Utc::now(),
        );

        debug!(operation, endpoint = %self.endpoint, "sending request");
        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", CONTENT_TYPE)
            .set("X-Amz-Target", &target)
            .set("X-Amz-Date", &signature.amz_date)
            .set("Authorization", &signature.authorization)
            .send_string(&body);

        match response {
            Ok(resp) => {
                let text = resp
                    .into_string()
                    .map_err(|e| TransportError::Connection(e.to_string()))?;
                serde_json::from_str(&text)
                    .map_err(|e| TransportError::Decode(format!("{}: {}", operation, e)))
            }
            Err(ureq::Error::Status(status, resp)) => {
                let text = resp.into_string().unwrap_or_default();
                let err = wire::service_error(status, &text);
                debug!(operation, status, error = %err, "request rejected");
                Err(err)
            }
            Err(e) => Err(TransportError::Connection(e.to_string())),
        }
    }
}

impl ParameterStore for SsmStore {
    fn get_parameter(&self, name: &str) -> TransportResult<Parameter> {
        let resp: GetParameterResponse = self.call(
            "GetParameter",
            &GetParameterRequest {
                name,
                with_decryption: true,
            },
        )?;
        Ok(resp.into())
    }

    fn parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        token: Option<&str>,
    ) -> TransportResult<Page<Parameter>> {
        let resp: GetParametersByPathResponse = self.call(
            "GetParametersByPath",
            &GetParametersByPathRequest {
                path,
                recursive,
                with_decryption: true,
                next_token: token,
            },
        )?;
        Ok(resp.into())
    }

    fn parameter_history(
        &self,
        name: &str,
        token: Option<&str>,
    ) -> TransportResult<Page<HistoryEntry>> {
        let resp: GetParameterHistoryResponse = self.call(
            "GetParameterHistory",
            &GetParameterHistoryRequest {
                name,
                with_decryption: true,
                next_token: token,
            },
        )?;
        Ok(resp.into())
    }
}

/// Builder for [`SsmStore`].
#[derive(Debug)]
pub struct SsmStoreBuilder {
    region: Option<String>,
    credentials: Option<Credentials>,
    endpoint: Option<String>,
    timeout: Duration,
}

impl Default for SsmStoreBuilder {
    fn default() -> Self {
        Self {
            region: None,
            credentials: None,
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SsmStoreBuilder {
    /// Region to sign for, e.g. `us-west-2`. Required.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Static credentials. Required.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the endpoint (defaults to `https://ssm.<region>.amazonaws.com/`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate settings and build the store.
    pub fn build(self) -> Result<SsmStore> {
        let region = self
            .region
            .filter(|r| !r.is_empty())
            .ok_or_else(|| StoreError::InvalidConfig("AWS region is required".into()))?;
        if region.contains('/') || region.contains(char::is_whitespace) {
            return Err(StoreError::InvalidConfig(format!(
                "invalid AWS region {:?}",
                region
            )));
        }

        let credentials = self
            .credentials
            .ok_or_else(|| StoreError::InvalidConfig("AWS credentials are required".into()))?;
        if credentials.access_key().is_empty() {
            return Err(StoreError::InvalidConfig("AWS access key is empty".into()));
        }

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| format!("https://{}.{}.amazonaws.com/", SERVICE, region));
        let host = host_of(&endpoint)
            .ok_or_else(|| StoreError::InvalidConfig(format!("invalid endpoint {:?}", endpoint)))?
            .to_string();

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();

        Ok(SsmStore {
            agent,
            endpoint,
            host,
            region,
            credentials,
        })
    }
}

/// Authority part of an `http(s)://` URL.
fn host_of(endpoint: &str) -> Option<&str> {
    let rest = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))?;
    let host = rest.split('/').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
