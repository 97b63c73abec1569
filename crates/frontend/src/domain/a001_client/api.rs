use contracts::domain::a001_client::Client;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const CLIENTS_PATH: &str = "/api/clients";

/// Fetch all clients
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let response = Request::get(&api_url(CLIENTS_PATH))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch clients: {}", response.status()));
    }

    response
        .json::<Vec<Client>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new client
///
/// `request` is sent as-is, including its empty `id`. The server answers with
/// the persisted record; anything without an identifier counts as a failure.
pub async fn create_client(request: &Client) -> Result<Client, String> {
    let response = Request::post(&api_url(CLIENTS_PATH))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create client: {}", response.status()));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    parse_created_client(body)
}

/// Turn the creation response body into a persisted client.
fn parse_created_client(body: serde_json::Value) -> Result<Client, String> {
    let client: Client = serde_json::from_value(body)
        .map_err(|_| "Invalid response from the server".to_string())?;

    if !client.has_id() {
        return Err("Invalid response from the server".to_string());
    }

    Ok(client)
}
