//! SSM JSON 1.1 request and response bodies.

use psclient_core::{HistoryEntry, Page, Parameter, TransportError, Version};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetParameterRequest<'a> {
    pub name: &'a str,
    pub with_decryption: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetParametersByPathRequest<'a> {
    pub path: &'a str,
    pub recursive: bool,
    pub with_decryption: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetParameterHistoryRequest<'a> {
    pub name: &'a str,
    pub with_decryption: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct WireParameter {
    name: String,
    #[serde(rename = "Type")]
    kind: String,
    value: String,
    version: Version,
}

impl From<WireParameter> for Parameter {
    fn from(p: WireParameter) -> Self {
        Parameter::new(p.name, p.kind, p.value, p.version)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct WireHistory {
    version: Version,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetParameterResponse {
    parameter: WireParameter,
}

impl From<GetParameterResponse> for Parameter {
    fn from(r: GetParameterResponse) -> Self {
        r.parameter.into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetParametersByPathResponse {
    #[serde(default)]
    parameters: Vec<WireParameter>,
    next_token: Option<String>,
}

impl From<GetParametersByPathResponse> for Page<Parameter> {
    fn from(r: GetParametersByPathResponse) -> Self {
        Page {
            items: r.parameters.into_iter().map(Parameter::from).collect(),
            next_token: r.next_token.filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GetParameterHistoryResponse {
    #[serde(default)]
    parameters: Vec<WireHistory>,
    next_token: Option<String>,
}

impl From<GetParameterHistoryResponse> for Page<HistoryEntry> {
    fn from(r: GetParameterHistoryResponse) -> Self {
        Page {
            items: r
                .parameters
                .into_iter()
                .map(|h| HistoryEntry::new(h.version, h.value))
                .collect(),
            next_token: r.next_token.filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Strip the namespace and any trailing URI from an error type.
///
/// `com.amazonaws.ssm#ParameterNotFound` -> `ParameterNotFound`
fn error_code(kind: &str) -> &str {
    let code = kind.rsplit('#').next().unwrap_or(kind);
    code.split(':').next().unwrap_or(code)
}

/// Decode a non-2xx response into a service error.
pub(crate) fn service_error(status: u16, body: &str) -> TransportError {
    match serde_json::from_str::<WireError>(body) {
        Ok(WireError {
            kind: Some(kind),
            message,
        }) => TransportError::service(error_code(&kind), message.unwrap_or_default()),
        _ => TransportError::service(format!("HTTP {}", status), body.trim()),
    }
}
