use actix_web::web::ServiceConfig;

use crate::handlers::validators::{get_top_validators, get_validators};

pub fn register_routers(config: &mut ServiceConfig) {
    config.service(get_top_validators);
    config.service(get_validators);
}
