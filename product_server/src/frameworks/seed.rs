use serde::Deserialize;
use std::path::Path;

use crate::interface_adapters::state::{AppState, InMemoryProductStore, SystemClock};
use crate::use_cases::create_product::{CreateProductUseCase, NewProduct};

// On-disk seed format: a TOML file of [[products]] entries.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<SeedProduct>,
}

#[derive(Debug, Deserialize)]
struct SeedProduct {
    name: String,
    sku: String,
    price_cents: u64,
}

// Load seed entries through the create use case so they pass the same
// validation as API-created products. Any failure aborts startup.
pub async fn apply_seed(state: &AppState, path: &Path) -> Result<usize, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|error| format!("failed to read seed file {}: {error}", path.display()))?;
    let seed: SeedFile = toml::from_str(&raw)
        .map_err(|error| format!("failed to parse seed file {}: {error}", path.display()))?;

    let use_case = CreateProductUseCase {
        clock: SystemClock,
        store: InMemoryProductStore {
            products: state.products.clone(),
        },
    };

    let count = seed.products.len();
    for entry in seed.products {
        let sku = entry.sku.clone();
        use_case
            .execute(NewProduct {
                name: entry.name,
                sku: entry.sku,
                price_cents: entry.price_cents,
            })
            .await
            .map_err(|error| format!("invalid seed entry {sku}: {error:?}"))?;
    }

    Ok(count)
}
