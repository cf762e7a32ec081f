//! rAccessLog main entrypoint.

use raccesslog::run;
use raccesslog::ui::messages::error;

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
