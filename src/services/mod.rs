pub mod api;
pub mod http;

pub use api::TourismApi;
pub use http::HttpTourismApi;
