use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sage_core::config::Settings;
use sage_core::pattern;
use sage_core::weather;

mod args;

use args::{Args, Tier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args, &settings).await {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(tier = ?args.tier, error = %err, "pattern run failed");
        return Err(err);
    }
    Ok(())
}

async fn run(args: &Args, settings: &Settings) -> anyhow::Result<()> {
    let output = match args.tier {
        Tier::Basic => {
            let req = args.basic_request(chrono::Utc::now())?;
            req.validate()?;
            serde_json::to_value(pattern::build_basic_pattern(&req))?
        }
        Tier::Pro => {
            let req = args.pro_request();
            req.validate()?;
            let provider = weather::provider_from_settings(settings)?;
            serde_json::to_value(pattern::generate_pro_pattern(provider.as_ref(), &req).await)?
        }
        Tier::Elite => {
            let req = args.elite_request();
            req.validate()?;
            let provider = weather::provider_from_settings(settings)?;
            serde_json::to_value(pattern::generate_elite_pattern(provider.as_ref(), &req).await)?
        }
        Tier::Vision => {
            let req = args.vision_tier_request()?;
            req.validate()?;
            let provider = weather::provider_from_settings(settings)?;
            serde_json::to_value(pattern::generate_vision_tier_pattern(provider.as_ref(), &req).await)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
