use std::process::ExitCode;

mod platform;

fn main() -> ExitCode {
    match platform::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("inspector_app: {err:#}");
            ExitCode::FAILURE
        }
    }
}
