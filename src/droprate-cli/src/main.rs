mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "droprate=debug,droprate_cli=debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            query,
            data,
            rows,
            matches,
            format,
        } => {
            let config = Config::load()?;
            let ctx = commands::load_context(&data, &config)?;
            let policy = matches.map(Into::into).unwrap_or_else(|| config.match_policy());
            commands::find::find(
                &ctx,
                &query.join(" "),
                policy,
                rows.unwrap_or_else(|| config.max_rows()),
                format,
            )?;
        }

        Commands::Items { filter, data } => {
            let config = Config::load()?;
            let ctx = commands::load_context(&data, &config)?;
            commands::find::items(&ctx, &filter.join(" "))?;
        }

        Commands::Mods {
            name,
            data,
            rows,
            format,
        } => {
            let config = Config::load()?;
            let ctx = commands::load_context(&data, &config)?;
            commands::find::mods(
                &ctx,
                &name.join(" "),
                rows.unwrap_or_else(|| config.max_rows()),
                format,
            )?;
        }

        Commands::Profiles { profiles, minutes } => {
            let config = Config::load()?;
            let path = profiles.as_deref().or(config.profiles.as_deref());
            let profiles = commands::load_profiles(path, &config, &minutes)?;
            commands::profiles::show(&profiles)?;
        }

        Commands::Chance {
            probabilities,
            tries,
        } => {
            commands::chance::handle(&probabilities, tries)?;
        }

        Commands::Configure {
            drops,
            profiles,
            max_rows,
            matches,
            minutes,
            reset_minutes,
            show,
        } => {
            let changes = commands::configure::Changes {
                drops,
                profiles,
                max_rows,
                match_policy: matches.map(Into::into),
                minutes,
                reset_minutes,
            };
            commands::configure::handle(changes, show)?;
        }
    }

    Ok(())
}
