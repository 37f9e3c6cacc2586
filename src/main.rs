use std::process::ExitCode;

use log::error;
use void_runner::EngineBuilder;

fn main() -> ExitCode {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    match EngineBuilder::new().build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
