//! Slash-command CLI
//!
//! Binary name: `slash-command`

use std::process;

use slash_command::{
    cli::{build_cli, handlers},
    output::error_command,
};

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries workflow commands and outputs.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    match handlers::dispatch(&matches).await {
        Ok(0) => {}
        Ok(code) => {
            #[allow(clippy::exit)]
            process::exit(code);
        }
        Err(err) => {
            let message = handlers::format_error(&err);
            #[allow(clippy::print_stdout)]
            {
                println!("{}", error_command(&message));
            }
            tracing::error!("{message}");

            let code = err
                .downcast_ref::<slash_command::Error>()
                .map_or(1, slash_command::Error::exit_code);

            #[allow(clippy::exit)]
            process::exit(code);
        }
    }
}
