//! Handlers for the `shipping.ShippingService` methods.
//!
//! Each method is a `POST` carrying a JSON message. An empty body decodes to
//! the message's default value.

use axum::{body::Bytes, extract::State, Json};
use models::{Consignment, GetRequest, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::errors::RpcError;
use crate::state::ServerState;

pub const SERVICE_NAME: &str = "shipping.ShippingService";
pub const CREATE_CONSIGNMENT_PATH: &str = "/shipping.ShippingService/CreateConsignment";
pub const GET_CONSIGNMENTS_PATH: &str = "/shipping.ShippingService/GetConsignments";

fn decode<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

#[utoipa::path(
    post, path = "/shipping.ShippingService/CreateConsignment", tag = "shipping",
    request_body = crate::openapi::ConsignmentDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ResponseDoc),
        (status = 400, description = "Malformed message", body = crate::openapi::RpcErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::RpcErrorDoc)
    )
)]
pub async fn create_consignment(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Response>, RpcError> {
    let request: Consignment = decode(&body).map_err(|e| RpcError::invalid_argument(e.to_string()))?;
    let res = state.shipping.create_consignment(request).await?;
    if let Some(c) = &res.consignment {
        info!(consignment_id = %c.id, vessel_id = %c.vessel_id, containers = c.containers.len(), "consignment created");
    }
    Ok(Json(res))
}

#[utoipa::path(
    post, path = "/shipping.ShippingService/GetConsignments", tag = "shipping",
    request_body = crate::openapi::GetRequestDoc,
    responses(
        (status = 200, description = "All consignments", body = crate::openapi::ResponseDoc)
    )
)]
pub async fn get_consignments(State(state): State<ServerState>, body: Bytes) -> Json<Response> {
    // Nothing in the request is honoured, so an unreadable one is not an error.
    let request = decode::<GetRequest>(&body).unwrap_or_else(|e| {
        debug!(error = %e, "ignoring undecodable GetConsignments request");
        GetRequest::default()
    });
    Json(state.shipping.get_consignments(request).await)
}
