use super::{HandlerConfig, ENDPOINT_URL_VAR, REGION_VAR, SECRET_ID_VAR, VERSION_STAGE_VAR};
use clap::Parser;
use std::path::PathBuf;

/// Runs the handler once against a local event file.
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-event")]
#[command(about = "Invoke the secret/event handler locally")]
pub struct CliArgs {
    /// JSON event payload; reads stdin when omitted
    #[arg(long)]
    pub event: Option<PathBuf>,

    #[arg(long, env = SECRET_ID_VAR)]
    pub secret_id: String,

    #[arg(long, env = VERSION_STAGE_VAR)]
    pub version_stage: Option<String>,

    #[arg(long, env = REGION_VAR)]
    pub region: Option<String>,

    #[arg(long, env = ENDPOINT_URL_VAR)]
    pub endpoint_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn handler_config(&self) -> HandlerConfig {
        HandlerConfig {
            secret_id: self.secret_id.clone(),
            version_stage: self.version_stage.clone(),
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
