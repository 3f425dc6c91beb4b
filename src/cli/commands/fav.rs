use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::favorites::{add_favorite, load_favorites, remove_favorite};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::clock::{Clock, SystemClock};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fav { add, remove } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut acted = false;

        if let Some(name) = add {
            acted = true;
            let now = SystemClock.now().to_rfc3339();
            if add_favorite(&pool.conn, name, &now)? {
                success(format!("Remembered '{}'.", name.trim()));
            } else {
                info("Nothing to remember (blank or already present).");
            }
        }

        if let Some(name) = remove {
            acted = true;
            if remove_favorite(&mut pool, name)? {
                success(format!("Forgot '{}'.", name));
            } else {
                info(format!("'{}' was not remembered.", name));
            }
        }

        if !acted {
            let favs = load_favorites(&mut pool)?;
            if favs.is_empty() {
                info("No favorites yet.");
            } else {
                for f in favs {
                    println!("- {}", f.activity);
                }
            }
        }
    }

    Ok(())
}
