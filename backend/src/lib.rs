pub mod routes;
pub mod cors;
pub mod config;
pub mod catchers;

use rocket::{Build, Rocket};
use shared::registry::VoteRegistry;
use crate::{
    catchers::{
        bad_request, internal_error, method_not_allowed, not_found, unprocessable_entity,
        unsupported_media_type,
    },
    config::AppConfig,
    cors::CORS,
    routes::{
        all_options, direct_voting_options, direct_voting_options_delete, direct_voting_options_get,
        direct_voting_options_patch, direct_voting_options_put, get_results, get_voting_options,
        health, unsupported_encoding, vote, SERVICE_PATH,
    },
};

pub use shared::{models::*, error::*};

/// Assembles the server around the process's single `VoteRegistry`.
pub fn build_rocket(registry: VoteRegistry, config: AppConfig) -> Rocket<Build> {
    rocket::build()
        .attach(CORS::new(config.cors))
        .manage(registry)
        .mount(
            SERVICE_PATH,
            rocket::routes![get_voting_options, vote, get_results, unsupported_encoding],
        )
        .mount(
            "/api",
            rocket::routes![
                direct_voting_options,
                direct_voting_options_get,
                direct_voting_options_put,
                direct_voting_options_delete,
                direct_voting_options_patch
            ],
        )
        .mount("/", rocket::routes![health, all_options])
        .register(
            "/",
            rocket::catchers![
                bad_request,
                not_found,
                method_not_allowed,
                unsupported_media_type,
                unprocessable_entity,
                internal_error
            ],
        )
}
