// Rows persisted by genesis ingestion, and the genesis record shapes they
// are extracted from.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const UNCERTAIN_INTERFACE: &str = "Uncertain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub chain_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub id: String,
    pub interface_guess: String,
    pub store_message_id: Option<String>,
    pub instantiate_message_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBalance {
    pub id: String,
    pub account_id: String,
    pub amount: String,
    pub denom: String,
}

impl GenesisBalance {
    pub fn new(account_id: &str, coin: Coin) -> Self {
        Self {
            id: Self::identity(account_id, &coin.denom),
            account_id: account_id.to_string(),
            amount: coin.amount,
            denom: coin.denom,
        }
    }

    /// Row id for `denom` held by `account_id`.
    ///
    /// The account id is length-prefixed so that no two distinct pairs share
    /// an id, whatever characters either part contains.
    pub fn identity(account_id: &str, denom: &str) -> String {
        format!("{}:{}:{}", account_id.len(), account_id, denom)
    }
}

/// One entry of `app_state.bank.balances`.
#[derive(Debug, Clone, Deserialize)]
pub struct BankBalance {
    #[serde(deserialize_with = "string_or_number")]
    pub address: String,
    #[serde(default)]
    pub coins: Vec<Coin>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coin {
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
    pub denom: String,
}

/// One entry of `app_state.wasm.contracts`.
#[derive(Debug, Clone, Deserialize)]
pub struct WasmContract {
    pub contract_address: String,
}

/// Genesis files write large integers either as strings or as bare numbers.
///
/// Numbers keep their exact digits; anything other than a non-negative
/// integer is rejected rather than rounded.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => {
            let digits = n.to_string();
            if digits.bytes().all(|b| b.is_ascii_digit()) {
                Ok(digits)
            } else {
                Err(serde::de::Error::custom(format!(
                    "expected a non-negative integer, found {}",
                    digits
                )))
            }
        }
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}
