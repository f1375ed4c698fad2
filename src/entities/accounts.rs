use super::GenesisEntity;
use crate::db::{Row, Table, ACCOUNTS};
use crate::error::IngestError;
use crate::genesis::GenesisDocument;
use crate::models::{Account, BankBalance};

pub const BANK_BALANCES_PATH: &str = ".app_state.bank.balances";

impl GenesisEntity for Account {
    const TABLE: &'static Table = &ACCOUNTS;

    /// Every address holding a bank balance at genesis is an account.
    fn extract(document: &GenesisDocument) -> Result<Vec<Self>, IngestError> {
        let chain_id = document.chain_id();
        Ok(document
            .records::<BankBalance>(BANK_BALANCES_PATH)?
            .into_iter()
            .map(|balance| Account {
                id: balance.address,
                chain_id: chain_id.to_string(),
            })
            .collect())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn into_row(self, chain_id: &str) -> Row {
        vec![self.id.into(), chain_id.into()]
    }
}
