use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = interpreter_configuration::load_config().context("could not load config")?;
    interpreter_configuration::setup_logging(&config.logging);
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting interpreter service"
    );
    interpreter_setup::build_and_run(config).await
}
