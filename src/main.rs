use anyhow::Context;
use clap::Parser;
use hotel_reservations::config::cli::{CustomerCommand, HotelCommand, ReservationCommand};
use hotel_reservations::config::Command;
use hotel_reservations::utils::{logger, validation::Validate};
use hotel_reservations::{
    seed_sample_data, AppConfig, CliConfig, CustomerUpdate, HotelUpdate, JsonStore, LocalStorage,
    ReservationService, Result,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = load_config(&cli)?;

    // 初始化日誌
    logger::init_logger(config.logging.format, config.logging.verbose);
    tracing::debug!("Effective config: {:?}", config);

    let storage = LocalStorage::new(config.data_dir());
    let svc = ReservationService::new(JsonStore::new(storage))
        .with_delete_policy(config.delete_policy());

    if let Err(e) = run(&svc, cli.command) {
        if e.is_recoverable() {
            tracing::warn!("⚠️ {} (Category: {:?})", e, e.category());
        } else {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
        }
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(svc: &ReservationService<LocalStorage>, command: Command) -> Result<()> {
    match command {
        Command::Seed => {
            let report = seed_sample_data(svc)?;
            println!(
                "✅ Seeded {} hotel(s), {} customer(s), {} reservation(s)",
                report.hotels, report.customers, report.reservations
            );
        }
        Command::Hotel(cmd) => run_hotel(svc, cmd)?,
        Command::Customer(cmd) => run_customer(svc, cmd)?,
        Command::Reservation(cmd) => run_reservation(svc, cmd)?,
    }
    Ok(())
}

fn run_hotel(svc: &ReservationService<LocalStorage>, cmd: HotelCommand) -> Result<()> {
    match cmd {
        HotelCommand::Create { id, name, rooms } => {
            let hotel = svc.create_hotel(&id, &name, rooms)?;
            println!("✅ Created {}", hotel);
        }
        HotelCommand::Show { id } => println!("{}", svc.get_hotel(&id)?),
        HotelCommand::List => {
            let hotels = svc.list_hotels()?;
            if hotels.is_empty() {
                println!("(no hotels)");
                return Ok(());
            }
            println!("{:<6} | {:<20} | Rooms", "ID", "Name");
            println!("{}", "-".repeat(40));
            for h in hotels {
                println!("{:<6} | {:<20} | {}", h.id, h.name, h.rooms);
            }
        }
        HotelCommand::Update { id, name, rooms } => {
            let hotel = svc.update_hotel(&id, HotelUpdate { name, rooms })?;
            println!("✅ Updated {}", hotel);
        }
        HotelCommand::Delete { id } => {
            let hotel = svc.delete_hotel(&id)?;
            println!("✅ Deleted {}", hotel);
        }
    }
    Ok(())
}

fn run_customer(svc: &ReservationService<LocalStorage>, cmd: CustomerCommand) -> Result<()> {
    match cmd {
        CustomerCommand::Create { id, name, email } => {
            let customer = svc.create_customer(&id, &name, &email)?;
            println!("✅ Created {}", customer);
        }
        CustomerCommand::Show { id } => println!("{}", svc.get_customer(&id)?),
        CustomerCommand::List => {
            let customers = svc.list_customers()?;
            if customers.is_empty() {
                println!("(no customers)");
                return Ok(());
            }
            println!("{:<6} | {:<20} | Email", "ID", "Name");
            println!("{}", "-".repeat(60));
            for c in customers {
                println!("{:<6} | {:<20} | {}", c.id, c.name, c.email);
            }
        }
        CustomerCommand::Update { id, name, email } => {
            let customer = svc.update_customer(&id, CustomerUpdate { name, email })?;
            println!("✅ Updated {}", customer);
        }
        CustomerCommand::Delete { id } => {
            let customer = svc.delete_customer(&id)?;
            println!("✅ Deleted {}", customer);
        }
    }
    Ok(())
}

fn run_reservation(
    svc: &ReservationService<LocalStorage>,
    cmd: ReservationCommand,
) -> Result<()> {
    match cmd {
        ReservationCommand::Create {
            id,
            hotel_id,
            customer_id,
            room,
        } => {
            let reservation = svc.create_reservation(&id, &hotel_id, &customer_id, room)?;
            println!("✅ Created {}", reservation);
        }
        ReservationCommand::Show { id } => println!("{}", svc.get_reservation(&id)?),
        ReservationCommand::List => {
            let reservations = svc.list_reservations()?;
            if reservations.is_empty() {
                println!("(no reservations)");
                return Ok(());
            }
            println!(
                "{:<6} | {:<6} | {:<6} | {:<5} | Status",
                "ID", "Hotel", "Cust.", "Room"
            );
            println!("{}", "-".repeat(48));
            for r in reservations {
                println!(
                    "{:<6} | {:<6} | {:<6} | {:<5} | {}",
                    r.id, r.hotel_id, r.customer_id, r.room, r.status
                );
            }
        }
        ReservationCommand::Cancel { id } => {
            let reservation = svc.cancel_reservation(&id)?;
            println!("✅ Cancelled {}", reservation);
        }
    }
    Ok(())
}
