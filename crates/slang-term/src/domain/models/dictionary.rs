use async_trait::async_trait;
use strum_macros::Display;
use strum_macros::EnumString;

use super::DefinitionEntry;
use super::QueryError;

#[derive(Debug, Default, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DictionaryName {
    #[default]
    UrbanDictionary,
}

#[async_trait]
pub trait DictionaryClient: Send + Sync {
    fn name(&self) -> DictionaryName;
    async fn define(&self, term: &str) -> Result<Vec<DefinitionEntry>, QueryError>;
}

pub type DictionaryClientBox = Box<dyn DictionaryClient>;
