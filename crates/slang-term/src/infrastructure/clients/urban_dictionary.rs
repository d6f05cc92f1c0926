#[cfg(test)]
#[path = "urban_dictionary_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::DefinitionEntry;
use crate::domain::models::DefinitionList;
use crate::domain::models::DictionaryClient;
use crate::domain::models::DictionaryName;
use crate::domain::models::QueryError;

pub struct UrbanDictionary {
    url: String,
    timeout: Duration,
    client: Client,
}

impl Default for UrbanDictionary {
    fn default() -> UrbanDictionary {
        return UrbanDictionary::new(
            &Config::get(ConfigKey::ApiUrl),
            Duration::from_millis(Config::request_timeout_ms()),
        );
    }
}

impl UrbanDictionary {
    pub fn new(url: &str, timeout: Duration) -> UrbanDictionary {
        return UrbanDictionary {
            url: url.trim_end_matches('/').to_string(),
            timeout,
            client: Client::new(),
        };
    }

    pub fn define_url(&self, term: &str) -> String {
        return format!("{}/v0/define?term={}", self.url, urlencoding::encode(term));
    }
}

#[async_trait]
impl DictionaryClient for UrbanDictionary {
    fn name(&self) -> DictionaryName {
        return DictionaryName::UrbanDictionary;
    }

    async fn define(&self, term: &str) -> Result<Vec<DefinitionEntry>, QueryError> {
        let url = self.define_url(term);
        let req = self.client.get(&url).timeout(self.timeout).build()?;

        let response = self.client.execute(req).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "define returned non-success status");
        }

        // Consumes the response; the connection is released on every path below.
        let body = response.bytes().await?;
        let definitions = DefinitionList::from_json(&body)?;

        tracing::debug!(url = %url, count = definitions.list.len(), "define decoded");
        return Ok(definitions.list);
    }
}
