//! Runtime schema discovery for external tooling.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub methods: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct ServiceList {
    pub services: Vec<ServiceDescriptor>,
}

/// Full OpenAPI document of the RPC surface.
pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn list_services() -> Json<ServiceList> {
    Json(services_from_paths(ApiDoc::openapi().paths.paths.keys().map(String::as_str)))
}

/// Group `/<package.Service>/<Method>` paths by service. Paths of any other
/// shape (e.g. `/health`) are not RPC methods and are skipped.
pub fn services_from_paths<'a>(paths: impl Iterator<Item = &'a str>) -> ServiceList {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in paths {
        let mut parts = path.trim_start_matches('/').split('/');
        let (Some(service), Some(method), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        if !service.contains('.') || method.is_empty() {
            continue;
        }
        grouped.entry(service.to_string()).or_default().push(method.to_string());
    }
    let services = grouped
        .into_iter()
        .map(|(name, mut methods)| {
            methods.sort();
            ServiceDescriptor { name, methods }
        })
        .collect();
    ServiceList { services }
}
