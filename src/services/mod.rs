/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Session facade composing the registries behind the HTTP routes.
pub mod session_service;
