use std::io::Read;

use serde_json::Value;

use super::{classify_response, Transport};
use crate::config::SteamConfig;
use crate::error::{Result, SteamError};

/// Production transport: blocking HTTP via a shared `ureq` agent.
///
/// The agent reuses connections across chunk requests of one batch. The
/// credential parameter is injected here, per the request boundary contract;
/// callers never handle the key.
pub struct HttpTransport {
    agent: ureq::Agent,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &SteamConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            api_key: config.api_key.clone(),
        }
    }
}

impl Transport for HttpTransport {
    fn request(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        let mut request = self.agent.get(url).query("key", &self.api_key);
        for (name, value) in params {
            request = request.query(name, value);
        }
        match request.call() {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|err| SteamError::Http(format!("could not read response body: {err}")))?;
                Ok(serde_json::from_str(&body)?)
            }
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(classify_response(code, &body))
            }
            Err(err) => Err(SteamError::Http(err.to_string())),
        }
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        match self.agent.get(url).call() {
            Ok(response) => {
                let mut bytes = Vec::new();
                response
                    .into_reader()
                    .read_to_end(&mut bytes)
                    .map_err(|err| SteamError::Http(format!("could not read response body: {err}")))?;
                Ok(bytes)
            }
            Err(ureq::Error::Status(code, _)) => {
                Err(SteamError::Http(format!("request failed with status {code}")))
            }
            Err(err) => Err(SteamError::Http(err.to_string())),
        }
    }
}
