mod create;
mod delete;
mod get;
mod list;
mod list_by_tag;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub(crate) use create::create_param_endpoint;
pub(crate) use list_by_tag::list_params_for_tag_endpoint;

pub fn param_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/params")
            .service(list::list_params_endpoint)
            .service(get::get_param_endpoint)
            .service(update::update_param_endpoint)
            .service(delete::delete_param_endpoint),
    );
}
