//! The segment drawn under the indicator matches the reported result.

use std::time::Duration;

use proptest::prelude::*;

use spinwheel_core::{ManualClock, SpinAnimator, WheelConfig, WheelModel};
use spinwheel_render::{LabelFont, RenderObserver, WheelRenderer};

fn labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("L{i}")).collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_at(renderer: &WheelRenderer, screen_angle: f64, dist: f64) -> [u8; 4] {
    let (sin, cos) = screen_angle.to_radians().sin_cos();
    let x = 250.0 + dist * cos;
    let y = 200.0 + dist * sin;
    renderer.frame().get_pixel(x as u32, y as u32).0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn indicator_points_at_result_color(count in 1usize..12, seed in any::<usize>()) {
        let chosen = seed % count;
        let config = WheelConfig::DEFAULT;
        let model = WheelModel::new(labels(count)).unwrap();
        let observer = RenderObserver::new(WheelRenderer::with_font(
            &model,
            &config,
            &LabelFont::Builtin,
        ));
        let clock = ManualClock::new();
        let mut animator = SpinAnimator::new(model, &config)
            .with_clock(clock.clone())
            .with_picker(move |_count: usize| chosen);

        animator.spin(&observer);
        while animator.is_spinning() {
            clock.advance(Duration::from_millis(250));
            animator.tick(&observer);
        }

        let outcome = animator.last_outcome().unwrap();
        prop_assert_eq!(outcome.index, chosen);

        // Just clockwise of 3 o'clock, where the indicator points.
        let per = 360.0 / count as f64;
        let probe = (per / 2.0).min(7.0);
        let renderer = observer.into_inner();
        let rgb = config.color(chosen % config.palette.len());
        prop_assert_eq!(pixel_at(&renderer, probe, 130.0), [rgb[0], rgb[1], rgb[2], 255]);
    }
}

#[test]
fn default_font_chain_always_renders() {
    let config = WheelConfig::DEFAULT;
    let model = config.model().unwrap();
    let mut renderer = WheelRenderer::new(&model, &config);
    assert!(!renderer.font_name().is_empty());
    let frame = renderer
        .render(&spinwheel_core::WheelState::default())
        .unwrap();
    assert_eq!(frame.dimensions(), (500, 400));
}
