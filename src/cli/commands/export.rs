use crate::cli::commands::analyze;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::session::Session;
use crate::utils::path::absolutize;

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Export {
        filter,
        format,
        report,
        out,
        force,
    } = cmd
    {
        let analysis = analyze(filter, cfg, session)?;
        ExportLogic::export(&analysis, *format, *report, &absolutize(out), *force)?;
    }
    Ok(())
}
