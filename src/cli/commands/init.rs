use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::WorkLogTable;
use crate::store::LogStore;
use crate::store::audit::audit;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty data file with the header row, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    println!("⚙️  Initializing otlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data file   : {}", &cfg.data_file);

    let store = LogStore::new(cfg.data_path());
    if store.exists() {
        // il file esistente non viene mai riscritto
        info(format!("Data file already present: {}", store.path().display()));
    } else {
        store.persist(&WorkLogTable::default())?;
        success(format!("Data file created at {}", store.path().display()));
    }

    audit(&cfg, "init", &cfg.data_file, "Configuration initialized");

    println!("🎉 otlog initialization completed!");
    Ok(())
}
