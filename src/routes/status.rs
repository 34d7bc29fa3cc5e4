//! Service banner and status endpoints.
//!
//! Both handlers return constant JSON objects. The payload structs declare
//! their fields in the order the keys appear on the wire.

use axum::Json;
use serde::Serialize;

pub const STATUS_ONLINE: &str = "online";
pub const SERVICE_NAME: &str = "GameVerse Nexus API";
pub const API_VERSION: &str = "1.0.0";
pub const WELCOME_MESSAGE: &str = "Welcome to GameVerse Nexus Backend! 🎮";
pub const STATUS_MESSAGE: &str = "Backend is running smoothly.";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub message: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            status: STATUS_ONLINE,
            service: SERVICE_NAME,
            version: API_VERSION,
            message: WELCOME_MESSAGE,
        }
    }
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl ServiceStatus {
    pub fn current() -> Self {
        Self {
            status: STATUS_ONLINE,
            message: STATUS_MESSAGE,
        }
    }
}

/// Root handler: identifies the service.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// Status handler.
///
/// Liveness only: answering at all means the process is up.
pub async fn status() -> Json<ServiceStatus> {
    Json(ServiceStatus::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_key_order() {
        let json = serde_json::to_string(&ServiceInfo::current()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"online","service":"GameVerse Nexus API","version":"1.0.0","message":"Welcome to GameVerse Nexus Backend! 🎮"}"#
        );
    }

    #[test]
    fn test_service_status_key_order() {
        let json = serde_json::to_string(&ServiceStatus::current()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"online","message":"Backend is running smoothly."}"#
        );
    }

    #[tokio::test]
    async fn test_handlers_return_constant_payloads() {
        let Json(info) = root().await;
        assert_eq!(info, ServiceInfo::current());

        let Json(body) = status().await;
        assert_eq!(body, ServiceStatus::current());
    }
}
