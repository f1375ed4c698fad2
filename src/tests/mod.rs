pub mod bulk_tests;

use crate::db::connection;
use serde_json::{json, Value};
use sqlx::SqlitePool;

pub const TEST_CHAIN_ID: &str = "test";

/// Fresh in-memory store, private to the calling test.
pub async fn memory_pool() -> SqlitePool {
    connection::establish_connection("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

pub fn test_bank_balances() -> Value {
    json!([
        {
            "address": "addr123",
            "coins": [
                {"amount": 123, "denom": "a-token"},
                {"amount": "456", "denom": "b-token"}
            ]
        },
        {
            "address": "addr456",
            "coins": [
                {"amount": 111, "denom": "a-token"},
                {"amount": "222", "denom": "b-token"}
            ]
        }
    ])
}

pub fn test_wasm_contracts() -> Value {
    json!([
        {
            "contract_address": "fetch1qxxlalvsdjd07p07y3rc5fu6ll8k4tmetpha8n",
            "contract_info": {"code_id": "1", "label": "token-bridge-contract"}
        },
        {
            "contract_address": "fetch1pvrwmjuusn9wh34j7y520g8gumuy9xtljwctjp",
            "contract_info": {"code_id": "2", "label": "decibel"}
        }
    ])
}

pub fn test_genesis_data() -> Value {
    json!({
        "app_hash": {},
        "app_state": {
            "auth": {},
            "bank": {
                "balances": test_bank_balances(),
                "denom_metadata": [],
                "params": {},
                "supply": [
                    {"amount": "987", "denom": "a-token"},
                    {"amount": "654", "denom": "b-token"}
                ]
            },
            "staking": {},
            "wasm": {
                "codes": {},
                "contracts": test_wasm_contracts(),
                "params": {}
            }
        },
        "chain_id": TEST_CHAIN_ID,
        "consensus_params": {},
        "genesis_time": "",
        "initial_height": "",
        "validators": []
    })
}

/// Minimal document holding only bank balances for `addresses`.
pub fn genesis_with_accounts(addresses: &[&str]) -> Value {
    let balances: Vec<Value> = addresses
        .iter()
        .map(|address| json!({"address": address, "coins": []}))
        .collect();

    json!({
        "chain_id": TEST_CHAIN_ID,
        "app_state": {"bank": {"balances": balances}}
    })
}
