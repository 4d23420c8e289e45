use clap::Parser;

use crate::error::ResolveError;
use crate::models::Config;

#[derive(Debug, Parser)]
#[command(version, about = "Show RIPE Atlas metadata for one probe", long_about = None)]
pub struct Cli {
    /// Probe Id
    #[arg(short = 'i', value_name = "ID", default_value = "")]
    pub id: String,
}

/// Picks the probe id to query.
///
/// A non-empty `-i` always wins. Otherwise the id comes from the config,
/// which may be empty; without a config there is nothing to fall back on.
pub fn resolve_probe_id(flag: &str, config: Option<&Config>) -> Result<String, ResolveError> {
    if !flag.is_empty() {
        return Ok(flag.to_string());
    }
    config
        .map(|c| c.id.clone())
        .ok_or(ResolveError::NoProbeId)
}
