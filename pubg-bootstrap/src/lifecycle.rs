use anyhow::{bail, Result};
use tracing::{info, warn};

use pubg_application::queries::{
    decode_file, fetch_match_telemetry, find_player_by_name, find_players_by_id,
    find_players_by_name, get_match, get_player, get_samples, get_status, list_seasons,
    player_kills, player_track, DecodedResponse,
};
use pubg_domain::{group_by_attack, DecodedEvent};

use crate::cli::{Cli, Command};
use crate::context::AppContext;
use crate::render::{
    render_kills, render_match, render_samples, render_seasons, render_status, render_summary,
    render_track,
};

pub async fn run(cli: Cli) -> Result<()> {
    let context = AppContext::new(&cli.options).await?;
    if cli.command.needs_network() {
        context.config.require_api_key()?;
    }

    tokio::select! {
        result = dispatch(&context, cli.command, cli.options.json) => result,
        _ = shutdown_signal() => {
            warn!("interrupted");
            Ok(())
        }
    }
}

async fn dispatch(context: &AppContext, command: Command, json: bool) -> Result<()> {
    let state = &context.state;
    match command {
        Command::Status => {
            let status = get_status(state).await?;
            emit(json, &status, || render_status(&status))?;
        }
        Command::Player { name, id } => {
            let name = name.or_else(|| context.config.player_name.clone());
            let id = id.or_else(|| context.config.player_id.clone());
            let player = match (id, name) {
                (Some(id), _) => get_player(state, &id).await?,
                (None, Some(name)) => find_player_by_name(state, &name).await?,
                (None, None) => bail!("no player given (use --name/--id or set player_name in config)"),
            };
            emit(json, &player, || player.to_string())?;
        }
        Command::Players { names, ids } => {
            let players = if ids.is_empty() {
                find_players_by_name(state, &names).await?
            } else {
                find_players_by_id(state, &ids).await?
            };
            emit(json, &players, || {
                players.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
            })?;
        }
        Command::Match { id } => {
            let game = get_match(state, &id).await?;
            emit(json, &game, || render_match(&game))?;
        }
        Command::Seasons => {
            let seasons = list_seasons(state).await?;
            emit(json, &seasons, || render_seasons(&seasons))?;
        }
        Command::Samples => {
            let samples = get_samples(state).await?;
            emit(json, &samples, || render_samples(&samples))?;
        }
        Command::Telemetry {
            match_id,
            account,
            limit,
        } => {
            let telemetry = fetch_match_telemetry(state, &match_id).await?;
            print_events(&telemetry.events, account.as_deref(), limit, json)?;
            if !json {
                print!("{}", render_summary(&telemetry.summary));
                print!("{}", state.metrics.render_summary());
            }
        }
        Command::Decode { kind, file } => match decode_file(state, kind, &file).await? {
            DecodedResponse::Player(player) => emit(json, &player, || player.to_string())?,
            DecodedResponse::Players(players) => emit(json, &players, || {
                players.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
            })?,
            DecodedResponse::Match(game) => emit(json, &game, || render_match(&game))?,
            DecodedResponse::Seasons(seasons) => emit(json, &seasons, || render_seasons(&seasons))?,
            DecodedResponse::Status(status) => emit(json, &status, || render_status(&status))?,
            DecodedResponse::Samples(samples) => emit(json, &samples, || render_samples(&samples))?,
            DecodedResponse::Telemetry { events, summary } => {
                print_events(&events, None, 0, json)?;
                if !json {
                    print!("{}", render_summary(&summary));
                }
            }
        },
    }
    info!("done");
    Ok(())
}

fn emit<T, F>(json: bool, value: &T, text: F) -> Result<()>
where
    T: serde::Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn print_events(
    events: &[DecodedEvent],
    account: Option<&str>,
    limit: usize,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(events)?);
        return Ok(());
    }
    println!("Attack chains: {}", group_by_attack(events).len());
    if let Some(account) = account {
        print!("{}", render_track(&player_track(events, account), limit));
        print!("{}", render_kills(&player_kills(events, account)));
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
