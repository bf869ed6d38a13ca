use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// Contract for a tagged `{ "type": .., "params": .. }` choice enum that the
/// wizard can offer as a menu.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + PartialEq + Into<&'static str> + EnumMessage + IntoEnumIterator;

    fn schema() -> Schema;

    fn kind(&self) -> Self::Kind;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }

    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    /// `params` object used when the kind is picked without further input.
    fn default_params(kind: Self::Kind) -> Value;

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }
}
