pub mod http;
pub mod request;

pub use http::create_router;
pub use request::GenerateForm;
