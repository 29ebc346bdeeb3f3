#![no_main]

use libfuzzer_sys::fuzz_target;

use spinwheel_core::{angle_to_segment, normalize_degrees};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    // First 8 bytes are the angle, next 2 the segment count.
    let angle = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let count = usize::from(u16::from_le_bytes([data[8], data[9]])).max(1);
    if !angle.is_finite() {
        return;
    }

    let index = angle_to_segment(angle, count);
    assert!(index < count);

    let rest = normalize_degrees(angle);
    assert!((0.0..360.0).contains(&rest));
});
