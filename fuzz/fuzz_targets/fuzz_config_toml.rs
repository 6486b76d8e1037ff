#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use shapewatch::Config;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Unknown keys, suggestions and line lookup run on arbitrary text
    let Ok((config, warnings)) = Config::parse_with_warnings(content, Path::new("fuzz.toml"))
    else {
        return;
    };
    for warning in &warnings {
        let _ = warning.to_string();
    }

    let _ = config.require_watch_folder();
    let _ = config.require_drop_folder();
});
