#![no_main]

use libfuzzer_sys::fuzz_target;

use spinwheel_core::{angle_to_segment, normalize_degrees, SpinTarget};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    let count = usize::from(u16::from_le_bytes([data[0], data[1]])).max(1);
    let chosen = usize::from(u16::from_le_bytes([data[2], data[3]])) % count;
    let rotations = u32::from(data[4] % 16);

    let target = SpinTarget::for_segment(chosen, count, rotations);
    assert!(target.target_angle_degrees >= f64::from(rotations) * 360.0);

    // The wheel must come to rest on the chosen segment.
    let rest = normalize_degrees(target.target_angle_degrees);
    assert_eq!(angle_to_segment(rest, count), chosen);
});
