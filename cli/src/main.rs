// Entrypoint: wire the fixed configuration, the ureq transport and the
// process console into the menu loop, then block until the user exits.

use std::io::{self, ErrorKind};

use anyhow::Context;
use todo_cli::{menu, telemetry, Config, Console, TaskApi, UreqTransport};
use tracing::info;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::default();
    info!(base_url = %config.base_url, "starting task client");
    let api = TaskApi::new(&config, UreqTransport::new());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    match menu::run(&api, &mut console) {
        // Closing stdin ends the session like choosing `0`.
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => Ok(()),
        result => result.context("console I/O failed"),
    }
}
