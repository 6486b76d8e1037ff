#![no_main]

use libfuzzer_sys::fuzz_target;
use shapewatch::domain::services::{build_reports, parse_lines};
use shapewatch::TextEncoding;

fuzz_target!(|data: &[u8]| {
    let text = TextEncoding::Latin1.decode(data);
    let shapes: Result<Vec<_>, _> = parse_lines(text.lines()).collect();
    if let Ok(shapes) = shapes {
        for report in build_reports(shapes) {
            for line in report.lines() {
                assert!(!line.is_empty());
            }
        }
    }
});
