pub mod urban_dictionary;

use anyhow::Result;

use crate::domain::models::DictionaryClientBox;
use crate::domain::models::DictionaryName;

pub struct DictionaryClientManager {}

impl DictionaryClientManager {
    pub fn get(name: DictionaryName) -> Result<DictionaryClientBox> {
        match name {
            DictionaryName::UrbanDictionary => {
                return Ok(Box::<urban_dictionary::UrbanDictionary>::default());
            }
        }
    }
}
