use lambda_runtime::{run, service_fn, Error};
use secret_event_lambda::core::handler::function_handler;
use secret_event_lambda::utils::logger;
use secret_event_lambda::SecretsManagerStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let store = SecretsManagerStore::from_env().await;

    tracing::info!("Secret event handler ready");
    run(service_fn(|event| function_handler(event, &store))).await
}
