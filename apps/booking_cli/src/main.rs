use std::{sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use client_core::{BookingField, BookingFormController, HttpBookingEndpoint, StatusTone};
use shared::domain::RoomType;

mod config;

/// Command-line rendering surface for the booking core: fills a draft from
/// arguments, submits it, and prints the resulting status line.
#[derive(Parser, Debug)]
#[command(about = "Submit a booking request to the guest-house booking endpoint")]
struct Args {
    /// Booking endpoint URL; overrides booking.toml and the environment.
    #[arg(long)]
    endpoint_url: Option<String>,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    /// Check-in date, ISO 8601 (YYYY-MM-DD).
    #[arg(long)]
    check_in: String,
    /// Check-out date, ISO 8601 (YYYY-MM-DD).
    #[arg(long)]
    check_out: String,
    /// One of: standard, deluxe, family.
    #[arg(long, default_value = "standard")]
    room_type: RoomType,
    #[arg(long, default_value_t = 1)]
    guests: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    let settings = config::load_settings();

    let endpoint_url = args.endpoint_url.unwrap_or(settings.endpoint_url);
    tracing::info!(%endpoint_url, "submitting booking request");
    let endpoint = HttpBookingEndpoint::with_timeout(
        endpoint_url,
        Duration::from_secs(settings.request_timeout_secs),
    )?;

    let mut controller = BookingFormController::new(Arc::new(endpoint));
    controller.open_session();
    controller.update_field(BookingField::Name, &args.name);
    controller.update_field(BookingField::Email, &args.email);
    controller.update_field(BookingField::CheckIn, &args.check_in);
    controller.update_field(BookingField::CheckOut, &args.check_out);
    controller.update_field(BookingField::RoomType, args.room_type.as_str());
    controller.update_field(BookingField::Guests, &args.guests.to_string());

    controller.submit().await;

    for (field, message) in controller.errors().iter() {
        eprintln!("{}: {message}", field.as_str());
    }
    let failed = match controller.status_line() {
        Some(line) => {
            println!("{}", line.text);
            line.tone == StatusTone::Error
        }
        None => false,
    };
    controller.close_session();

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
