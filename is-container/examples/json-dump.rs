use is_container::{detect, DetectOpts};

fn main() {
    env_logger::init();

    let json_dump = match detect(&DetectOpts::default()) {
        Ok(detection) => serde_json::to_string_pretty(&detection),
        Err(err) => serde_json::to_string_pretty(&serde_json::json!({ "error": err })),
    }
    .unwrap();
    println!("{}", json_dump)
}
