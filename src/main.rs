use clap::Parser;
use lambda_runtime::{Context, LambdaEvent};
use secret_event_lambda::utils::{logger, validation::Validate};
use secret_event_lambda::{handle_event, read_event, CliArgs, HandlerError, SecretsManagerStore};

async fn invoke(args: &CliArgs) -> Result<(), HandlerError> {
    let config = args.handler_config();
    config.validate()?;

    let payload = read_event(args.event.as_deref())?;
    tracing::debug!("Event payload: {}", payload);

    let store = SecretsManagerStore::for_config(&config).await;
    handle_event(&config, &store, LambdaEvent::new(payload, Context::default())).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Invoking secret event handler locally");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = invoke(&args).await {
        tracing::error!("❌ Invocation failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    println!("✅ Invocation completed");
    Ok(())
}
