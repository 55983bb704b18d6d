use showdown::{play_round, OutputFormat, ShowdownConfig, ShowdownError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showdown=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        error!(error = %e, "Showdown failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ShowdownError> {
    let config = ShowdownConfig::from_env()?;
    info!(
        players = config.players.len(),
        rounds = config.rounds,
        seeded = config.seed.is_some(),
        tie_policy = %config.tie_policy,
        "Starting showdown"
    );

    let mut roster = config.roster()?;
    let mut dealer = config.dealer();
    let arbiter = config.arbiter();

    for round in 1..=config.rounds {
        let report = play_round(&mut roster, &mut dealer, &arbiter)?;

        match config.format {
            OutputFormat::Text => {
                println!("*** Round {round} ***");
                println!();
                println!("{report}");
                println!();
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        }
    }

    Ok(())
}
