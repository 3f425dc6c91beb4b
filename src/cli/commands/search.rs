use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::places::client::PlaceClient;

/// Query the external geocoder and print the normalized candidates.
/// Every failure mode (blank query, missing credential, rate limit,
/// upstream failure, transport) surfaces once, as its own message.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query, limit } = cmd {
        let client = PlaceClient::from_config(cfg);
        let size = limit.unwrap_or(cfg.search_limit);

        let candidates = client.search(query, size)?;

        for (i, c) in candidates.iter().enumerate() {
            println!("{:>2}. {}  ({:.6}, {:.6})", i + 1, c.label, c.lat, c.lng);
        }
    }

    Ok(())
}
