use backend::{build_rocket, config::AppConfig};
use shared::registry::VoteRegistry;
use shuttle_runtime::CustomError;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting poll server");

    let config = AppConfig::from_lookup(|key| secret_store.get(key))
        .map_err(CustomError::new)?;
    info!("🌐 CORS policy: {:?}", config.cors);

    let registry = VoteRegistry::new();
    info!("🗳️ Poll \"{}\" ready with {} options", registry.topic(), registry.option_count());

    Ok(build_rocket(registry, config).into())
}
