//! Compiled-validator demo.
//!
//! Builds the user shape, compiles it into a reusable validator, and
//! validates the sample record through the validator's instance methods.
//! Prints the bare success flag; violation detail goes to tracing.

use schemaprobe::{compiled, shape};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let user_shape = shape::user_shape();
    let validator = compiled::compile(&user_shape)?;

    let verdict = compiled::safe_parse_with(&validator, &json!({ "name": "test", "age": 25 }));
    if !verdict.success() {
        tracing::warn!("sample record rejected:\n{verdict}");
    }
    println!("{}", verdict.success());
    Ok(())
}
