mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};

use crate::params::{create_param_endpoint, list_params_for_tag_endpoint};

pub fn tag_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/tags")
            .service(create::create_tag_endpoint)
            .service(list::list_tags_endpoint)
            .service(get::get_tag_endpoint)
            .service(update::update_tag_endpoint)
            .service(delete::delete_tag_endpoint)
            .service(create_param_endpoint)
            .service(list_params_for_tag_endpoint),
    );
}
