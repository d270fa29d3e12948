use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info};

use vigil_core::WatchConfig;
use vigil_core::config::ConfigError;
use vigil_core::events;
use vigil_core::overlay::{SimulatedActions, SimulatedSurface};
use vigil_core::scanner::{self, DetectionPolicy};
use vigil_core::watch::{UiEvent, Watcher};

use crate::feed;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("scan", sub_matches)) => handle_scan_command(sub_matches),
        Some(("replay", sub_matches)) => handle_replay_command(sub_matches),
        Some(("config", sub_matches)) => handle_config_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn load_config() -> Result<WatchConfig, Box<dyn std::error::Error>> {
    match WatchConfig::load_hierarchy() {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            events::log_service_error(&e);
            Err(e.into())
        }
    }
}

/// Resolve the detection policy, honoring a `--policy` override
fn resolve_policy(
    config: &WatchConfig,
    override_name: Option<&String>,
) -> Result<DetectionPolicy, Box<dyn std::error::Error>> {
    match override_name.map(String::as_str) {
        None => Ok(config.detection_policy()),
        Some("markers") => Ok(DetectionPolicy::TopRegionMarkers {
            brand: config.detection.brand_marker.clone(),
            status: config.detection.status_marker.clone(),
            region_fraction: config.detection.region_fraction,
        }),
        Some("exact") => match &config.detection.exact_phrase {
            Some(phrase) => Ok(DetectionPolicy::ExactPhrase {
                marker: phrase.clone(),
            }),
            None => {
                let e = ConfigError::Invalid {
                    reason: "--policy exact requires detection.exact_phrase in config".to_string(),
                };
                eprintln!("{}", e);
                events::log_service_error(&e);
                Err(e.into())
            }
        },
        Some(other) => Err(format!("Unknown policy '{}'", other).into()),
    }
}

fn handle_scan_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let tree_path = matches.get_one::<String>("tree").expect("tree is required");
    let json_output = matches.get_flag("json");

    info!(event = "cli.scan_started", tree = tree_path.as_str());

    let config = load_config()?;
    let policy = resolve_policy(&config, matches.get_one::<String>("policy"))?;

    let tree = match feed::load_tree(Path::new(tree_path)) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Failed to load tree: {}", e);
            events::log_service_error(&e);
            return Err(e.into());
        }
    };

    let matched = scanner::scan(&tree, &policy, config.screen.height_px);

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "matched": matched,
                "policy": policy.name(),
            }))?
        );
    } else if matched {
        println!("Marker detected (policy: {})", policy.name());
    } else {
        println!("No marker found (policy: {})", policy.name());
    }

    info!(
        event = "cli.scan_completed",
        matched = matched,
        policy = policy.name()
    );
    Ok(())
}

fn handle_replay_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let feed_path = matches.get_one::<String>("feed").expect("feed is required");
    let json_output = matches.get_flag("json");

    info!(event = "cli.replay_started", feed = feed_path.as_str());

    let config = load_config()?;
    let events_list = match feed::load_feed(Path::new(feed_path)) {
        Ok(events_list) => events_list,
        Err(e) => {
            eprintln!("Failed to load feed: {}", e);
            events::log_service_error(&e);
            return Err(e.into());
        }
    };

    let mut watcher = Watcher::new(&config, SimulatedSurface::new(), SimulatedActions::new());
    watcher.init();

    let mut records = Vec::with_capacity(events_list.len());
    for (index, feed_event) in events_list.iter().enumerate() {
        let root = feed_event
            .tree
            .as_ref()
            .map(|t| t as &dyn vigil_core::tree::UiNode);
        let event = UiEvent::new(feed_event.kind, &feed_event.app_id, root);
        let verdict = watcher.handle_event(&event);

        if json_output {
            records.push(serde_json::json!({
                "index": index + 1,
                "kind": feed_event.kind.as_str(),
                "app_id": feed_event.app_id,
                "gate_passed": verdict.gate_passed(),
                "matched": verdict.matched(),
                "overlay_shown": verdict.overlay_shown(),
            }));
        } else {
            println!(
                "#{} {} {} gate={} match={} overlay={}",
                index + 1,
                feed_event.kind,
                feed_event.app_id,
                if verdict.gate_passed() { "pass" } else { "skip" },
                if verdict.matched() { "yes" } else { "no" },
                if verdict.overlay_shown() {
                    "shown"
                } else {
                    "hidden"
                },
            );
        }
    }

    watcher.teardown();

    let shows = watcher.controller().surface().attach_count();
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "events": records,
                "summary": {
                    "event_count": watcher.event_count(),
                    "overlay_shows": shows,
                }
            }))?
        );
    } else {
        println!(
            "Replayed {} event(s), {} overlay show(s)",
            watcher.event_count(),
            shows
        );
    }

    info!(
        event = "cli.replay_completed",
        event_count = watcher.event_count(),
        overlay_shows = shows
    );
    Ok(())
}

fn handle_config_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let config = load_config()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("Target app fragments: {}", config.target.app_fragments.join(", "));
        match &config.detection.exact_phrase {
            Some(phrase) => println!("Detection: exact phrase '{}'", phrase),
            None => println!(
                "Detection: markers '{}' + '{}' in top {:.0}% of {}px screen",
                config.detection.brand_marker,
                config.detection.status_marker,
                config.detection.region_fraction * 100.0,
                config.screen.height_px
            ),
        }
        println!(
            "Overlay: {}x{} px (0 = fit content)",
            config.overlay.width_px, config.overlay.height_px
        );
    }

    info!(event = "cli.config_completed");
    Ok(())
}
