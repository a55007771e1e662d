mod params;
mod tags;
mod utils;

pub use params::param_routes;
pub use tags::tag_routes;
pub use utils::{json_config, ErrorResponse};
