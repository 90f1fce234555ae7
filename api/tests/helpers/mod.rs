pub mod app;

pub use app::{body_json, json_request, make_test_app, with_connect_info};
