use actix_web::{App, HttpServer};
use anyhow::Context;
use payrelay::app::AppServices;
use payrelay::config::{Config, LogFormat};
use payrelay::middleware::{cors_layer, RequestId};
use payrelay::modules;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting payment relay");
    tracing::info!(env = %config.app.env, "Environment");
    tracing::debug!(stripe = ?config.stripe, "Provider configuration");

    if !config.stripe.webhook_verification_enabled() {
        tracing::warn!(
            "STRIPE_WEBHOOK_SECRET not set: webhooks will be accepted WITHOUT signature verification. \
             Do not run this way in production."
        );
    }

    let services =
        AppServices::from_config(&config.stripe).context("Failed to build payment gateway")?;

    let bind_address = config.server.bind_address();
    let allowed_origins = config.server.allowed_origins.clone();

    tracing::info!(origins = ?allowed_origins, "CORS allow-list");

    let server = HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(cors_layer(&allowed_origins))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(|cfg| services.register(cfg))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "payrelay={level},actix_web=info",
            level = config.app.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
