use vigil_core::init_logging;

mod app;
mod commands;
mod feed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = app::build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    commands::run_command(&matches)?;

    Ok(())
}
