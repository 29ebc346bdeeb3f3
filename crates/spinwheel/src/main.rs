//! SpinWheel: an animated wheel of fortune.

use spinwheel_lib::{app, config, errors, logging};

fn main() {
    let config = config::AppConfig::parse();
    if let Err(err) = logging::init(&config) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    if let Err(err) = app::run(&config) {
        let code = errors::exit_code(&err);
        errors::report(&err, code);
        std::process::exit(code);
    }
}
