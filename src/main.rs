use cli::cli::Cli;

mod cli {
    pub mod cli;
    pub mod handlers;
}

/// Log level used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "info";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();
    Cli::run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_shows_derivation_summary() {
        let level: log::LevelFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        assert!(level >= log::LevelFilter::Info);
    }
}
