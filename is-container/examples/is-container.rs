use is_container::{detect, DetectError, DetectOpts};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    println!("Scanning for container virtualization...");
    match detect(&DetectOpts::default()) {
        Ok(detection) => {
            println!(
                "{} {} a container instance",
                detection.executable.display(),
                if detection.is_container {
                    "reports this machine is"
                } else {
                    "reports this machine is NOT"
                }
            );
            ExitCode::SUCCESS
        }
        Err(err @ DetectError::DetectVirtNotFound(_)) => {
            println!("{}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            println!("Error running detection: {}", err);
            ExitCode::FAILURE
        }
    }
}
