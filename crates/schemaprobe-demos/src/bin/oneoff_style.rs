//! One-off demo.
//!
//! Builds the user shape and validates the sample record by passing both
//! to the free-function surface, no compilation step. Prints the bare
//! success flag; violation detail goes to tracing.

use schemaprobe::{oneoff, shape};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let user_shape = shape::user_shape();

    let verdict = oneoff::safe_parse(&user_shape, &json!({ "name": "test", "age": 25 }));
    if !verdict.success() {
        tracing::warn!("sample record rejected:\n{verdict}");
    }
    println!("{}", verdict.success());
    Ok(())
}
