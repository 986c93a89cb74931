//! One HTTP request/response over a fresh curl Easy handle.

use curl::easy::{Easy, List};
use std::time::Duration;

use crate::retry::HttpError;

pub(crate) struct Payload {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Everything needed to (re)issue a request; retries call `perform` again.
pub(crate) struct Exchange<'a> {
    pub url: &'a str,
    pub headers: &'a [(&'a str, &'a str)],
    pub payload: Option<Payload>,
    pub basic_auth: Option<(&'a str, &'a str)>,
}

impl Exchange<'_> {
    /// Performs the request and returns the raw body of a 2xx response.
    pub fn perform(
        &self,
        user_agent: &str,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Vec<u8>, HttpError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = Easy::new();
        easy.url(self.url)?;
        easy.useragent(user_agent)?;
        easy.follow_location(true)?;
        easy.connect_timeout(connect_timeout)?;
        easy.timeout(timeout)?;

        let mut list = List::new();
        list.append("Accept: application/json")?;
        for (k, v) in self.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if let Some(payload) = &self.payload {
            list.append(&format!("Content-Type: {}", payload.content_type))?;
            easy.post(true)?;
            easy.post_fields_copy(&payload.bytes)?;
        }
        easy.http_headers(list)?;

        if let Some((user, password)) = self.basic_auth {
            easy.username(user)?;
            easy.password(password)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(HttpError::Status {
                code,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body)
    }
}
