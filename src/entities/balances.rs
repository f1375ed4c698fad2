use super::accounts::BANK_BALANCES_PATH;
use super::GenesisEntity;
use crate::db::{Row, Table, GENESIS_BALANCES};
use crate::error::IngestError;
use crate::genesis::GenesisDocument;
use crate::models::{BankBalance, GenesisBalance};

impl GenesisEntity for GenesisBalance {
    const TABLE: &'static Table = &GENESIS_BALANCES;

    /// One balance per coin held by each genesis account.
    fn extract(document: &GenesisDocument) -> Result<Vec<Self>, IngestError> {
        Ok(document
            .records::<BankBalance>(BANK_BALANCES_PATH)?
            .into_iter()
            .flat_map(|balance| {
                let address = balance.address;
                balance
                    .coins
                    .into_iter()
                    .map(move |coin| GenesisBalance::new(&address, coin))
            })
            .collect())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn into_row(self, _chain_id: &str) -> Row {
        vec![
            self.id.into(),
            self.account_id.into(),
            self.amount.into(),
            self.denom.into(),
        ]
    }
}
