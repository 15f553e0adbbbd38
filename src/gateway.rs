use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::error::ApiError;
use crate::upstream::{UpstreamClient, UpstreamReply};

/// Declared type of a query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Str,
    Int,
}

/// Whether a parameter must be supplied by the client
#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    /// Missing or empty values are rejected with this message
    Required(&'static str),
    /// Missing values fall back to this fixed default
    Default(&'static str),
}

/// One expected query parameter of a route
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: ParamType,
    pub requirement: Requirement,
}

/// How a 200 upstream body is turned into the outbound body
#[derive(Debug, Clone, Copy)]
pub enum ResponseShape {
    /// Return the upstream body unchanged
    Verbatim,
    /// Return exactly the named fields; any absent field is an error
    Pick(&'static [&'static str]),
    /// Return the upstream body nested under the given key
    Wrap(&'static str),
    /// Substitute lookup envelope: echo the named input parameter and
    /// default `substitutes`/`message` when the upstream omits them
    SubstitutesEnvelope { ingredient_param: &'static str },
}

/// Everything one route needs from the forwarding engine
///
/// `upstream_path` is relative to the configured base URL; each `{}` is
/// replaced positionally with a path identifier. `params` lists the query
/// parameters in the order they are forwarded upstream. `failure_message`
/// is the fixed text returned when the upstream answers with a non-200
/// status; the real upstream status is never exposed.
#[derive(Debug, Clone, Copy)]
pub struct RouteContract {
    pub upstream_path: &'static str,
    pub params: &'static [ParamSpec],
    pub shape: ResponseShape,
    pub failure_message: &'static str,
}

/// Forward one inbound request through its route contract
///
/// A single linear pass: resolve the declared parameters against the raw
/// query string, fill the upstream path template, issue the GET, then map
/// the reply through the contract's response shape. All failures resolve
/// here; nothing propagates past the handler that called us.
pub async fn forward(
    client: &UpstreamClient,
    contract: &RouteContract,
    path_args: &[i64],
    query: &HashMap<String, String>,
) -> Result<JsonValue, ApiError> {
    let params = resolve_params(contract.params, query)?;
    let path = fill_template(contract.upstream_path, path_args);

    let reply = match client.get(&path, &params).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!("Upstream request to '{}' failed: {:#}", path, err);
            return Err(ApiError::Transport(err));
        }
    };

    let body = match reply {
        UpstreamReply::Success(body) => body,
        UpstreamReply::Failure(status) => {
            tracing::warn!("Upstream request to '{}' returned status {}", path, status);
            return Err(ApiError::Upstream(contract.failure_message));
        }
    };

    apply_shape(&contract.shape, &params, body)
}

/// Resolve the declared parameters against the raw inbound query string
///
/// Values are forwarded verbatim; integer typing is validation only.
/// A default applies when the parameter is absent, not when it is sent
/// empty, mirroring the way the upstream treats empty values.
fn resolve_params(
    specs: &[ParamSpec],
    query: &HashMap<String, String>,
) -> Result<Vec<(String, String)>, ApiError> {
    let mut resolved = Vec::with_capacity(specs.len());

    for spec in specs {
        let value = match query.get(spec.name) {
            None => match spec.requirement {
                Requirement::Default(default) => default.to_string(),
                Requirement::Required(message) => {
                    return Err(ApiError::MissingParam(message.to_string()));
                }
            },
            Some(raw) if raw.is_empty() => match spec.requirement {
                Requirement::Default(_) => raw.clone(),
                Requirement::Required(message) => {
                    return Err(ApiError::MissingParam(message.to_string()));
                }
            },
            Some(raw) => raw.clone(),
        };

        if spec.ty == ParamType::Int && value.parse::<i64>().is_err() {
            return Err(ApiError::InvalidParam(format!(
                "Parameter '{}' must be an integer",
                spec.name
            )));
        }

        resolved.push((spec.name.to_string(), value));
    }

    Ok(resolved)
}

/// Fill each `{}` in the upstream path template positionally
fn fill_template(template: &str, args: &[i64]) -> String {
    let mut path = template.to_string();
    for arg in args {
        path = path.replacen("{}", &arg.to_string(), 1);
    }
    path
}

fn apply_shape(
    shape: &ResponseShape,
    params: &[(String, String)],
    body: JsonValue,
) -> Result<JsonValue, ApiError> {
    match shape {
        ResponseShape::Verbatim => Ok(body),
        ResponseShape::Pick(fields) => {
            let mut picked = serde_json::Map::with_capacity(fields.len());
            for field in fields.iter().copied() {
                let value = body
                    .get(field)
                    .cloned()
                    .ok_or(ApiError::MissingField(field))?;
                picked.insert(field.to_string(), value);
            }
            Ok(JsonValue::Object(picked))
        }
        ResponseShape::Wrap(key) => {
            let mut wrapped = serde_json::Map::with_capacity(1);
            wrapped.insert((*key).to_string(), body);
            Ok(JsonValue::Object(wrapped))
        }
        ResponseShape::SubstitutesEnvelope { ingredient_param } => {
            let ingredient = params
                .iter()
                .find(|(name, _)| name == ingredient_param)
                .map(|(_, value)| value.clone())
                .unwrap_or_default();

            let substitutes = body
                .get("substitutes")
                .cloned()
                .unwrap_or_else(|| JsonValue::Array(Vec::new()));
            let message = body
                .get("message")
                .cloned()
                .unwrap_or_else(|| JsonValue::String("No substitutes found.".to_string()));

            let mut envelope = serde_json::Map::with_capacity(3);
            envelope.insert("ingredient".to_string(), JsonValue::String(ingredient));
            envelope.insert("substitutes".to_string(), substitutes);
            envelope.insert("message".to_string(), message);
            Ok(JsonValue::Object(envelope))
        }
    }
}
