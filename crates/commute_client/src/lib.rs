pub mod client_params;
pub mod commute_client;
pub mod commute_error;
pub mod dispatcher;
pub mod display_text;
pub mod recommendation_request;
pub mod recommendation_response;
pub mod schema;
pub mod time_window;
