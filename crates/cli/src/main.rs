//! Demo driver: replays the hospital stock-management walkthrough against
//! the seed data.
//!
//! Recoverable store errors (duplicates, missing names) are logged and the
//! walkthrough continues; only real failures abort the process.

use anyhow::Result;
use tracing::{info, warn};

use wardstock_inventory::{LocationGraph, ReadQuery, Store, SupplyItem, analyze, same_location};

fn seed_items() -> Vec<SupplyItem> {
    vec![
        SupplyItem::new("Seringas", "Depósito A", 150, 200, "unidades"),
        SupplyItem::new("Luvas", "Depósito B", 300, 500, "pares"),
        SupplyItem::new("Máscaras", "Depósito C", 100, 250, "unidades"),
        SupplyItem::new("Ataduras", "Depósito D", 75, 100, "rolos"),
        SupplyItem::new("Álcool em gel", "Depósito A", 50, 120, "litros"),
        SupplyItem::new("Termômetros", "Depósito B", 20, 40, "unidades"),
        SupplyItem::new("Agulhas", "Depósito C", 550, 500, "unidades"),
    ]
}

fn list_all(store: &Store) -> Result<()> {
    println!("--- Items ---");
    for item in store.read(&ReadQuery::All)? {
        println!("  {item}");
    }
    Ok(())
}

fn show(store: &Store, name: &str) {
    match store.get(name) {
        Ok(item) => println!("  {item}"),
        Err(err) => warn!(%err, "lookup failed"),
    }
}

fn main() -> Result<()> {
    wardstock_observability::init();

    let mut store = Store::from_items(seed_items());
    info!(items = store.len(), "seed store loaded, sorted by name");

    list_all(&store)?;

    show(&store, "Luvas");
    show(&store, "Gazes"); // not stocked yet

    match store.add(SupplyItem::new("Gazes", "Depósito A", 50, 150, "pacotes")) {
        Ok(()) => info!("added 'Gazes'"),
        Err(err) => warn!(%err, "add rejected"),
    }
    show(&store, "Gazes");

    match store.update_quantity("Seringas", 180) {
        Ok(()) => info!("updated 'Seringas' to 180"),
        Err(err) => warn!(%err, "update rejected"),
    }
    show(&store, "Seringas");

    match store.remove("Termômetros") {
        Ok(removed) => info!(name = %removed.name, "removed item"),
        Err(err) => warn!(%err, "removal rejected"),
    }
    show(&store, "Termômetros");

    list_all(&store)?;

    let graph = LocationGraph::build(&store);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "same-location graph built"
    );

    let report = analyze(&store);
    println!("--- Stock report ---");
    println!("{}", serde_json::to_string_pretty(&report)?);

    match same_location(&store, "Álcool em gel") {
        Ok(neighbors) => {
            println!("Stored with 'Álcool em gel': {}", neighbors.join(", "));
        }
        Err(err) => warn!(%err, "same-location query failed"),
    }

    Ok(())
}
