pub mod catalog;
pub mod category;
pub mod request_params;
pub mod series;
pub mod trace;
