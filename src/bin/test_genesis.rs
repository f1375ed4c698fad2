use genesis_ingest::config::Config;
use genesis_ingest::db::{connection, query, ACCOUNTS, CONTRACTS, GENESIS_BALANCES};
use genesis_ingest::Ingestor;
use std::collections::BTreeMap;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    println!("Establishing database connection...");
    let pool = connection::establish_connection(&config.database_url).await?;
    println!("✅ Database connection established!");

    let ingestor = Ingestor::from_config(pool, &config)?;

    println!("Loading genesis document from {}...", config.genesis_source);
    let document = ingestor.loader().load(&config.genesis_source).await?;
    println!("✅ Loaded genesis for chain {}", document.chain_id());

    // Count flattened entries per app_state module
    let mut entries: BTreeMap<String, usize> = BTreeMap::new();
    for (path, _) in document.flatten() {
        if let Some(rest) = path.strip_prefix(".app_state.") {
            let module = rest.split('.').next().unwrap_or(rest);
            *entries.entry(module.to_string()).or_default() += 1;
        }
    }
    for (module, count) in &entries {
        println!("  {}: {} entries", module, count);
    }

    println!("Ingesting...");
    let report = ingestor.process_genesis(&document).await?;
    println!(
        "✅ Wrote {} accounts, {} balances, {} contracts",
        report.accounts, report.balances, report.contracts
    );

    println!("Re-running ingestion (should write nothing)...");
    let rerun = ingestor.process_genesis(&document).await?;
    println!("✅ Second run wrote {} rows", rerun.total());

    for table in [&ACCOUNTS, &GENESIS_BALANCES, &CONTRACTS] {
        let ids = query::select_ids(ingestor.pool(), table).await?;
        println!("{}: {} rows", table.name, ids.len());
    }

    println!("All checks completed successfully!");
    Ok(())
}
