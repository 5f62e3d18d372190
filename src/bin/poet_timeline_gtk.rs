use std::process::ExitCode;

use poet_timeline::dataset::Dataset;
use poet_timeline::platform_gtk::run_timeline_window;
use poet_timeline::telemetry;

fn main() -> ExitCode {
    let _ = telemetry::init_default_tracing();
    let dataset = match std::env::args().nth(1) {
        Some(path) => match Dataset::from_json_file(&path) {
            Ok(dataset) => dataset,
            Err(err) => {
                eprintln!("poet-timeline-gtk: failed to load `{path}`: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Dataset::builtin().clone(),
    };

    match run_timeline_window(dataset) {
        Ok(code) if code == gtk4::glib::ExitCode::SUCCESS => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("poet-timeline-gtk: {err}");
            ExitCode::FAILURE
        }
    }
}

