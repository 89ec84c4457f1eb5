use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::AuditLog;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print_log(&AuditLog::new(Config::audit_file()))?;
    }

    Ok(())
}
