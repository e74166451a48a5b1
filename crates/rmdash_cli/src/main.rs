//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `rmdash_core` linkage and print a dashboard snapshot.
//! - Read optional configuration from `RMDASH_*` environment variables.

use log::warn;
use rmdash_core::{
    default_log_level, demo_seed, init_logging, open_db, AccessToken, AppState, Clock, MailProfile,
    PreferenceService, SqlitePreferenceRepository, StaticMailProvider, SystemClock, Theme,
};
use std::process::ExitCode;

const ENV_LOG_LEVEL: &str = "RMDASH_LOG_LEVEL";
const ENV_LOG_DIR: &str = "RMDASH_LOG_DIR";
const ENV_DB_PATH: &str = "RMDASH_DB_PATH";

fn main() -> ExitCode {
    println!("rmdash_core ping={}", rmdash_core::ping());
    println!("rmdash_core version={}", rmdash_core::core_version());

    if let Ok(log_dir) = std::env::var(ENV_LOG_DIR) {
        let level =
            std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let theme = match std::env::var(ENV_DB_PATH) {
        Ok(path) => match load_theme(&path) {
            Ok(theme) => theme,
            Err(err) => {
                eprintln!("preferences unavailable: {err}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => Theme::default(),
    };
    println!("theme={}", theme.as_str());

    let mut seed = demo_seed(SystemClock.now());
    let inbox = std::mem::take(&mut seed.emails);
    let mut state = AppState::new(SystemClock, seed);
    print_dashboard(&state);

    let provider = StaticMailProvider::new(
        MailProfile {
            email: "magazzino@rm.example".to_string(),
            name: Some("Magazzino RM".to_string()),
        },
        inbox,
    );
    state.mailbox_mut().sign_in(AccessToken::new("offline"));
    if !state.mailbox_mut().refresh_with(&provider) {
        warn!("event=cli_mail module=cli status=skip");
    }
    println!("inbox={}", state.mailbox().messages().len());
    for email in state.mailbox().messages() {
        let marker = if email.is_read { ' ' } else { '*' };
        println!("  {marker} {} | {}", email.sender, email.subject);
    }

    ExitCode::SUCCESS
}

fn load_theme(path: &str) -> Result<Theme, Box<dyn std::error::Error>> {
    let conn = open_db(path)?;
    let repo = SqlitePreferenceRepository::try_new(&conn)?;
    Ok(PreferenceService::new(repo).load_theme()?)
}

fn print_dashboard(state: &AppState<SystemClock>) {
    let summary = state.dashboard();
    println!("view={}", state.view_title());
    println!("pending_shipments={}", summary.pending_shipments);
    println!("tasks_due_today={}", summary.tasks_due_today);
    match &summary.next_pickup {
        Some(pickup) => println!("next_pickup={} at {}", pickup.title, pickup.start.format("%H:%M")),
        None => println!("next_pickup=none"),
    }
    for column in &summary.shipments_by_status {
        println!("{}: {}", column.status.label(), column.shipments.len());
        for shipment in &column.shipments {
            println!(
                "  {} {} units={} due {}",
                shipment.order_number,
                shipment.customer.name,
                shipment.total_units(),
                shipment.due_date.format("%Y-%m-%d")
            );
        }
    }
    println!("upcoming_tasks={}", summary.upcoming_tasks.len());
    for task in &summary.upcoming_tasks {
        println!("  [{}] {}", task.priority.label(), task.title);
    }
    println!("today_events={}", summary.today_events.len());
}
