use booking_sdk::{Booking, BookingClient};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "booking-cli")]
#[command(about = "Command-line client for the booking service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(long, default_value = "admin")]
    user: String,

    #[arg(long, default_value = "password")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all bookings
    List,
    /// Show one booking
    Get { id: i32 },
    /// Create a booking
    Create {
        id: i32,
        guest_name: String,
        #[arg(long)]
        room_type: Option<String>,
    },
    /// Delete every booking with the given id
    Delete { id: i32 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = BookingClient::new(&cli.url).with_credentials(&cli.user, &cli.password);

    match cli.command {
        Commands::List => print_json(&client.list().await?)?,
        Commands::Get { id } => print_json(&client.get(id).await?)?,
        Commands::Create {
            id,
            guest_name,
            room_type,
        } => {
            let created = client
                .create(&Booking {
                    id,
                    guest_name,
                    room_type,
                })
                .await?;
            if let Some(location) = &created.location {
                eprintln!("Created at {}", location);
            }
            print_json(&created.booking)?;
        }
        Commands::Delete { id } => {
            client.delete(id).await?;
            eprintln!("Deleted booking {}", id);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
