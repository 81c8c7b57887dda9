use std::path::PathBuf;

use clap::Parser;
use tmenu::{demo::Application, settings::Settings, term::CrosstermConsole, AppError};

#[derive(Parser, Debug)]
#[clap(version, about, name = "tmenu")]
struct Args {
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
    #[clap(short, long, help = "Use this config file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, help = "Width of the menu, overrides the config")]
    width: Option<usize>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings_path = args.config.unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    better_panic::install();

    let mut settings = tmenu::start(&settings_path)?;
    if let Some(width) = args.width {
        settings = settings.set_width(width);
    }

    if args.debug_config {
        println!("{:#?}", settings.populate());
        return Ok(());
    }

    let app = Application::new()?;
    app.run(&mut CrosstermConsole::new(), &settings)
}
