//! Simple SDK Example
//!
//! Demonstrates basic usage of the Lotus RPC SDK.
//!
//! # Usage
//!
//! 1. Point the SDK at a node:
//!    ```bash
//!    export LOTUS_API_ADDRESS=http://127.0.0.1:1234/rpc/v0
//!    export LOTUS_TOKEN=$(cat ~/.lotus/token)   # optional
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --example simple
//!    ```

use lotus_rpc_sdk::{rpc_params, LotusClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Lotus RPC SDK - Simple Example");
    println!("================================\n");

    // 1. Connect using LOTUS_* environment variables
    println!("1. Connecting to node...");
    let client = LotusClient::from_env()?;
    println!("   ✓ Configured for {}\n", client.rpc().config().api_address);

    // 2. Node version
    println!("2. Fetching version...");
    let version = client.version().await?;
    println!("   ✓ Version: {}\n", version["Version"]);

    // 3. Chain head
    println!("3. Fetching chain head...");
    let head = client.chain_head().await?;
    println!("   ✓ Height: {}\n", head["Height"]);

    // 4. Raw call with positional params
    println!("4. Looking up tipset 10 epochs back...");
    let height = head["Height"].as_i64().unwrap_or(0).saturating_sub(10);
    let tipset = client
        .request("ChainGetTipSetByHeight", rpc_params![height, lotus_rpc_sdk::Value::Null])
        .await?;
    println!("   ✓ Blocks: {}", tipset["Cids"].as_array().map_or(0, |c| c.len()));

    println!("\n✓ Example completed successfully!");

    Ok(())
}
