use contracts::domain::a003_purchase::aggregate::CreatePurchaseRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

/// Create a purchase document. Any 2xx response is treated as success.
pub async fn create_purchase(request: &CreatePurchaseRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/purchases"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}
