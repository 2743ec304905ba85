use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ContainerDoc {
    pub id: String,
    pub customer_id: String,
    pub origin: String,
    pub user_id: String,
}

#[derive(ToSchema)]
pub struct ConsignmentDoc {
    pub id: String,
    pub description: String,
    pub weight: i32,
    pub containers: Vec<ContainerDoc>,
    pub vessel_id: String,
}

/// Accepts any object; no field is honoured.
#[derive(ToSchema)]
pub struct GetRequestDoc {}

#[derive(ToSchema)]
pub struct ResponseDoc {
    pub created: bool,
    pub consignment: Option<ConsignmentDoc>,
    pub consignments: Vec<ConsignmentDoc>,
}

#[derive(ToSchema)]
pub struct RpcErrorDoc { pub code: String, pub message: String }

#[derive(OpenApi)]
#[openapi(
    info(title = "shipping.ShippingService", description = "Consignment RPC service"),
    paths(
        crate::routes::health,
        crate::routes::shipping::create_consignment,
        crate::routes::shipping::get_consignments,
    ),
    components(
        schemas(
            HealthResponse,
            ContainerDoc,
            ConsignmentDoc,
            GetRequestDoc,
            ResponseDoc,
            RpcErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "shipping")
    )
)]
pub struct ApiDoc;
