use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::LogStore;
use crate::store::audit::audit;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = LogStore::new(cfg.data_path());
        let table = store.load()?;

        if let Some(written) = ExportLogic::export(&table, *format, file, store.path(), *force)? {
            audit(
                cfg,
                "export",
                &written.to_string_lossy(),
                &format!("{} row(s)", table.len()),
            );
        }
    }
    Ok(())
}
