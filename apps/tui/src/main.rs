use clap::Parser;
use color_eyre::Result;
use competitor_radar::app::App;
use competitor_radar::cli::CliArgs;
use competitor_radar::config::init_app_config;
use competitor_radar::data::load_dataset_config;
use competitor_radar::view::Dashboard;
use competitor_radar::{event, logging, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config();

    let headless = args.headless || !is_terminal();
    if headless {
        logging::init_stderr(args.verbose);
    } else {
        logging::init_for_terminal(args.verbose, config.log_file.as_deref())?;
    }

    // Tables are loaded once and never change afterwards
    let datasets = load_dataset_config(config.data_path.as_deref()).await?;
    let dashboard = Dashboard::new(datasets);

    if headless {
        return event::run_headless(&dashboard, args.mode, &args.select, args.json);
    }

    let mut app = App::new(dashboard, config.export_dir);
    app.set_mode(args.mode);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
