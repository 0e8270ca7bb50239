use std::time::Duration;

use serde_json::json;

use crate::error::{AppError, Result};

const INVENTORY_URL: &str = "http://localhost:8001/inventory";
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// One shot, no retry. A timeout or transient remote failure surfaces as
/// `UpstreamError` and is indistinguishable from a permanent one.
pub async fn notify_created(sku: &str, quantity: i32) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(NOTIFY_TIMEOUT)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

    let response = client
        .post(INVENTORY_URL)
        .json(&json!({
            "sku": sku,
            "quantity": quantity,
        }))
        .send()
        .await
        .map_err(|e| AppError::UpstreamError(format!("Inventory request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Inventory service returned {} for SKU {}", status, sku);
        return Err(AppError::UpstreamError(format!(
            "Inventory service returned {}",
            status
        )));
    }

    tracing::info!("Inventory notified for SKU {} (quantity {})", sku, quantity);

    Ok(())
}
