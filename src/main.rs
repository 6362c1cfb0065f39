use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wellness_landing::app::App;
use wellness_landing::models::Config;
use wellness_landing::page::Action;

#[derive(Debug, Parser)]
#[command(name = "wellness-landing")]
#[command(about = "Run the landing page calculators from the command line")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a BMI from weight (kg) and height (m)
    Bmi {
        /// Weight in kilograms
        weight: String,
        /// Height in meters
        height: String,
    },
    /// Generate an image from a text prompt
    Generate {
        /// Text prompt for the hosted image provider
        prompt: String,
        /// API key for the provider; falls back to RUNWARE_API_KEY
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wellness_landing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    match run(args.command).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Bmi { weight, height } => {
            let bmi = wellness_landing::bmi::calculate(&weight, &height)?;
            println!("BMI: {:.1}", bmi);
        }
        Command::Generate { prompt, api_key } => {
            let api_key = match api_key.or(Config::from_env()?.api_key) {
                Some(key) => key,
                None => anyhow::bail!("no API key given and RUNWARE_API_KEY is not set"),
            };

            let mut app = App::new()?;
            app.dispatch(Action::ApiKeyChanged(api_key));
            app.dispatch(Action::PromptChanged(prompt));

            let image = app.generate_image().await?;
            info!("Generation completed successfully");
            println!("{}", image.url);
        }
    }

    Ok(())
}
