use super::GenesisEntity;
use crate::db::{Row, Table, CONTRACTS};
use crate::error::IngestError;
use crate::genesis::GenesisDocument;
use crate::models::{Contract, WasmContract, UNCERTAIN_INTERFACE};

pub const WASM_CONTRACTS_PATH: &str = ".app_state.wasm.contracts";

impl GenesisEntity for Contract {
    const TABLE: &'static Table = &CONTRACTS;

    // Genesis contracts have no store/instantiate messages to point at.
    fn extract(document: &GenesisDocument) -> Result<Vec<Self>, IngestError> {
        Ok(document
            .records::<WasmContract>(WASM_CONTRACTS_PATH)?
            .into_iter()
            .map(|contract| Contract {
                id: contract.contract_address,
                interface_guess: UNCERTAIN_INTERFACE.to_string(),
                store_message_id: None,
                instantiate_message_id: None,
            })
            .collect())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn into_row(self, _chain_id: &str) -> Row {
        vec![
            self.id.into(),
            self.interface_guess.into(),
            self.store_message_id.into(),
            self.instantiate_message_id.into(),
        ]
    }
}
