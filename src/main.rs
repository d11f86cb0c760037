// Windows GUI应用程序配置，隐藏控制台窗口
#![cfg_attr(
    not(debug_assertions),
    windows_subsystem = "windows"
)]

mod cli;

use anyhow::{bail, Context};
use clap::Parser;
use cli::{Args, Commands, FavoriteCommands};

use ipedit::app::config::favorites::FavoriteEntry;
use ipedit::app::config::store::{
    add_favorite, delete_favorite, FavoritesStore,
};
use ipedit::app::logging::setup::init_logging;
use ipedit::core::adapter::{
    AdapterSnapshot, ApplyOutcome, CimAdapterProvider,
};
use ipedit::core::services::ConfigService;
use ipedit::utils::helpers::join_list;

fn main() -> anyhow::Result<()> {
    init_logging();

    // 解析命令行参数
    let args = Args::parse();

    let store = match &args.config {
        Some(path) => FavoritesStore::with_file(path),
        None => FavoritesStore::new()?,
    };

    // 没有子命令时启动 GUI
    let Some(command) = args.command else {
        ipedit::ui::run_gui(store)?;
        return Ok(());
    };

    let service = ConfigService::new(CimAdapterProvider::new());

    match command {
        Commands::List => {
            let adapters = service.list_adapters()?;
            if adapters.is_empty() {
                println!("No IP-enabled adapters found");
            }
            for adapter in adapters {
                println!("{adapter}");
            }
        }
        Commands::Show { adapter } => {
            let snapshot = service.read_config(&adapter)?;
            print_snapshot(&snapshot);
        }
        Commands::Apply { adapter, fields } => {
            let outcome =
                service.apply(&adapter, &fields.to_fields())?;
            print_outcome(&outcome);
        }
        Commands::Dhcp { adapter } => {
            let refresh = service.enable_dhcp(&adapter)?;
            match &refresh.snapshot {
                Some(snapshot) => print_snapshot(snapshot),
                None => println!("Adapter {adapter:?} no longer present"),
            }
            refresh.check()?;
        }
        Commands::Favorites(command) => {
            run_favorites(&store, &service, command)?
        }
    }

    Ok(())
}

fn run_favorites(
    store: &FavoritesStore,
    service: &ConfigService<CimAdapterProvider>,
    command: FavoriteCommands,
) -> anyhow::Result<()> {
    let doc = store.load();

    match command {
        FavoriteCommands::List => {
            for (index, favorite) in
                doc.favorites.iter().enumerate()
            {
                println!(
                    "{index:>3}  {:<20} ip={} subnet={} gateway={} dns={}",
                    favorite.name,
                    favorite.ip,
                    favorite.subnet,
                    favorite.gateway,
                    favorite.dns
                );
            }
        }
        FavoriteCommands::Add { name, fields } => {
            let fields = fields.to_fields();
            let entry = match name {
                Some(name) => FavoriteEntry::named(name, &fields),
                None => FavoriteEntry::from_fields(&fields),
            };
            println!("Added favorite {:?}", entry.name);
            store.save(&add_favorite(&doc, entry))?;
        }
        FavoriteCommands::Delete { index, yes } => {
            if !yes {
                bail!("Deleting a favorite cannot be undone, pass --yes to confirm");
            }
            store.save(&delete_favorite(&doc, index)?)?;
            println!("Deleted favorite #{index}");
        }
        FavoriteCommands::Apply { index, adapter } => {
            let favorite = doc
                .favorites
                .get(index)
                .with_context(|| {
                    format!("No favorite at index {index}")
                })?;
            let outcome =
                service.apply(&adapter, &favorite.to_fields())?;
            print_outcome(&outcome);
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &AdapterSnapshot) {
    println!("Adapter:     {}", snapshot.description);
    println!("IP address:  {}", snapshot.ip);
    println!("Subnet mask: {}", snapshot.subnet_mask);
    println!("Gateway:     {}", join_list(&snapshot.gateways));
    println!("DNS servers: {}", join_list(&snapshot.dns_servers));
}

fn print_outcome(outcome: &ApplyOutcome) {
    match outcome {
        ApplyOutcome::NothingToApply => {
            println!("Nothing to apply")
        }
        ApplyOutcome::Applied { steps } => {
            for step in steps {
                println!("{step}: ok");
            }
            println!("Configuration applied");
        }
    }
}
