//! Blocking JSON-over-HTTP client.
//!
//! Uses the curl crate (libcurl) for every remote call the pipeline makes:
//! Spotify token and playlist pages, MusicBrainz searches and Gemini
//! prompts. Each call goes through the shared retry policy.

mod exchange;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::retry::{run_with_retry, HttpError, RetryPolicy};
use exchange::{Exchange, Payload};

/// Shared client settings. Cheap to clone; each request opens its own curl handle.
#[derive(Debug, Clone)]
pub struct HttpClient {
    user_agent: String,
    policy: RetryPolicy,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(user_agent: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            user_agent: user_agent.into(),
            policy,
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
        }
    }

    /// GET `url` and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        let exchange = Exchange {
            url,
            headers,
            payload: None,
            basic_auth: None,
        };
        self.send(&exchange)
    }

    /// POST an `application/x-www-form-urlencoded` body, optionally with basic auth.
    pub fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &[(&str, &str)],
        basic_auth: Option<(&str, &str)>,
    ) -> Result<T, HttpError> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        let exchange = Exchange {
            url,
            headers: &[],
            payload: Some(Payload {
                content_type: "application/x-www-form-urlencoded",
                bytes: body.into_bytes(),
            }),
            basic_auth,
        };
        self.send(&exchange)
    }

    /// POST a JSON body and decode the JSON response.
    pub fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        let exchange = Exchange {
            url,
            headers,
            payload: Some(Payload {
                content_type: "application/json",
                bytes: serde_json::to_vec(body)?,
            }),
            basic_auth: None,
        };
        self.send(&exchange)
    }

    fn send<T: DeserializeOwned>(&self, exchange: &Exchange<'_>) -> Result<T, HttpError> {
        let label = redact_query(exchange.url);
        let bytes = run_with_retry(&self.policy, &label, || {
            exchange.perform(&self.user_agent, self.connect_timeout, self.timeout)
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// URL without its query string, for log lines (queries may carry keys).
fn redact_query(url: &str) -> String {
    match url.split_once('?') {
        Some((base, _)) => format!("{}?…", base),
        None => url.to_string(),
    }
}
