// ============================================================================
// SERVICES - SOLO comunicación HTTP
// ============================================================================

pub mod ajax;
pub mod api_client;

pub use ajax::{ajax, is_success, AjaxOptions, ResponseBody};
pub use api_client::{ApiClient, ApiResponse};
