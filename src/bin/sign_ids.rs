//! CLI tool to print the HMAC signature for every catalog id.
//!
//! The frontend embeds `id` and `sig` in the printed QR codes; run
//! this after editing `data/catalog.json` (with `SOFKA_SECRET` set)
//! and paste the output into the QR generation sheet.

use aroma_quest_api::{catalog, config, signature};

fn main() {
    let secret = config::hmac_secret()
        .expect("SOFKA_SECRET must be set to sign catalog ids");
    let catalog =
        catalog::load(&config::catalog_path()).expect("Failed to load catalog");

    let mut ids: Vec<&String> = catalog.keys().collect();
    ids.sort();

    let mut signed = serde_json::Map::new();
    for id in ids {
        signed.insert(
            id.clone(),
            serde_json::Value::String(signature::sign(id, &secret)),
        );
    }

    let output = serde_json::to_string_pretty(&serde_json::Value::Object(signed))
        .expect("Failed to serialize signatures");
    println!("{output}");
    eprintln!("Signed {} catalog ids", catalog.len());
}
