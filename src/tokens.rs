//! TuShare credential verification via the account-quota endpoint.
//!
//! Peripheral utility: shares no data or control flow with the archiver.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

/// Environment variables holding the tokens to verify, in report order.
pub const TOKEN_ENV_KEYS: [&str; 2] = ["TUSHARE_TOKEN", "TUSHARE_TOKEN_2"];

const QUOTA_ENDPOINT: &str = "https://api.tushare.pro";

#[derive(Serialize)]
struct QuotaRequest<'a> {
    api_name: &'a str,
    token: &'a str,
    params: QuotaParams<'a>,
}

#[derive(Serialize)]
struct QuotaParams<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct QuotaResponse {
    code: i64,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: Option<QuotaData>,
}

#[derive(Deserialize)]
struct QuotaData {
    #[serde(default)]
    fields: Vec<String>,
    #[serde(default)]
    items: Vec<Vec<Value>>,
}

/// Outcome of verifying the token stored under one environment variable.
#[derive(Debug)]
pub enum TokenCheck {
    Valid {
        env_key: String,
        user_id: String,
        rows: String,
        has_rows: bool,
    },
    Invalid {
        env_key: String,
        message: String,
    },
}

/// Verifies the token stored under `env_key` against the quota endpoint.
/// Every failure mode resolves to `TokenCheck::Invalid` with a readable
/// message; nothing here aborts the overall check run.
pub async fn check_token(client: &reqwest::Client, env_key: &str) -> TokenCheck {
    let token = match std::env::var(env_key) {
        Ok(token) if !token.is_empty() => token,
        _ => {
            return TokenCheck::Invalid {
                env_key: env_key.to_string(),
                message: format!("environment variable {env_key} is not set"),
            }
        }
    };

    let request = QuotaRequest {
        api_name: "user",
        token: &token,
        params: QuotaParams { token: &token },
    };
    let response = match client.post(QUOTA_ENDPOINT).json(&request).send().await {
        Ok(response) => response,
        Err(e) => {
            error!(error = ?e, env_key, "Quota endpoint call failed");
            return TokenCheck::Invalid {
                env_key: env_key.to_string(),
                message: format!("quota endpoint call failed: {e}"),
            };
        }
    };

    let parsed: QuotaResponse = match response.json().await {
        Ok(parsed) => parsed,
        Err(e) => {
            error!(error = ?e, env_key, "Could not decode quota response");
            return TokenCheck::Invalid {
                env_key: env_key.to_string(),
                message: format!("could not decode quota response: {e}"),
            };
        }
    };

    if parsed.code != 0 {
        let message = parsed.msg.unwrap_or_else(|| format!("server code {}", parsed.code));
        return TokenCheck::Invalid {
            env_key: env_key.to_string(),
            message: format!("quota endpoint rejected the token: {message}"),
        };
    }

    let data = match parsed.data {
        Some(data) => data,
        None => {
            return TokenCheck::Invalid {
                env_key: env_key.to_string(),
                message: "quota endpoint returned an empty payload".to_string(),
            }
        }
    };

    let user_id = data
        .fields
        .iter()
        .position(|field| field == "user_id")
        .and_then(|index| data.items.first().and_then(|row| row.get(index)))
        .map(render_value)
        .unwrap_or_else(|| "<unknown>".to_string());

    info!(env_key, user_id = %user_id, rows = data.items.len(), "Token verified");
    TokenCheck::Valid {
        env_key: env_key.to_string(),
        user_id,
        rows: render_records(&data),
        has_rows: !data.items.is_empty(),
    }
}

/// Serializes the quota rows as a JSON array of field-keyed records, the
/// shape the server's tabular payload reads best in.
fn render_records(data: &QuotaData) -> String {
    let records: Vec<serde_json::Map<String, Value>> = data
        .items
        .iter()
        .map(|row| {
            data.fields
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect()
        })
        .collect();
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
