/// Per-listener state handed to every route.
pub mod http_service_data;
