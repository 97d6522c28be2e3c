use crate::config::toml_config::AppConfig;
use crate::core::service::DeletePolicy;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "reservations")]
#[command(about = "Manage hotels, customers and room reservations stored as JSON files")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory holding hotels.json, customers.json and reservations.json
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// How deletes treat reservations that reference the deleted entity
    #[arg(long, global = true, value_enum)]
    pub delete_policy: Option<DeletePolicy>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write sample hotels, customers and a reservation into empty collections
    Seed,
    #[command(subcommand)]
    Hotel(HotelCommand),
    #[command(subcommand)]
    Customer(CustomerCommand),
    #[command(subcommand)]
    Reservation(ReservationCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum HotelCommand {
    Create {
        id: String,
        name: String,
        rooms: u32,
    },
    Show {
        id: String,
    },
    List,
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        rooms: Option<u32>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CustomerCommand {
    Create {
        id: String,
        name: String,
        email: String,
    },
    Show {
        id: String,
    },
    List,
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReservationCommand {
    Create {
        id: String,
        hotel_id: String,
        customer_id: String,
        room: u32,
    },
    Show {
        id: String,
    },
    List,
    Cancel {
        id: String,
    },
}

impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if let Some(policy) = self.delete_policy {
            config.service.delete_policy = policy;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}
