// Entrypoint for the CLI application.
// - Keeps `main` small: read config, set up logging, create the API client
//   and a fresh session, then hand both to the prompt loop.
// - Returns `anyhow::Result` so startup failures exit non-zero.

use pokedex_cli::{api::ApiClient, config::Config, session::Session, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // `POKEDEX_START_URL` and `POKEDEX_LOG`, see `config::Config::from_env`.
    let config = Config::from_env();

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Stderr)
        .init();
    log::debug!("starting at {}", config.start_url);

    let api = ApiClient::new()?;
    let session = Session::new(config.start_url);

    // Blocks until `exit` or end of input.
    main_menu(api, session)?;
    Ok(())
}
