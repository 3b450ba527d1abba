pub mod plotly_json;
pub mod surface;
