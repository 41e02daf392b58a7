// Host-side tests for the wave controller and its frame cycle.

use approx::assert_relative_eq;
use siriwave_core::constants::PHASE_STEP;
use siriwave_core::*;
use std::f64::consts::{PI, TAU};
use std::time::Duration;

fn host() -> HostMetrics {
    HostMetrics::new(400.0, 200.0)
}

fn banded() -> WaveController {
    let opts = WaveOptions {
        amplitude: 1.0,
        speed: 0.2,
        frequency: 6.0,
        pixel_depth: 0.02,
        ..Default::default()
    };
    WaveController::with_seed(opts, host(), 42)
}

fn organic() -> WaveController {
    let opts = WaveOptions {
        style: Style::Organic,
        ..Default::default()
    };
    WaveController::with_seed(opts, host(), 42)
}

#[test]
fn one_frame_end_to_end() {
    let mut wave = banded();
    wave.start();
    let mut rec = RecordingSurface::new();
    assert_eq!(wave.frame(&mut rec, Duration::ZERO), FrameOutcome::Continue);
    assert_relative_eq!(wave.phase(), (PI / 2.0) * 0.2, epsilon = 1e-15);

    let paths = rec.paths();
    assert_eq!(paths.len(), 5);
    let top = &paths[4];
    assert_eq!(top.len(), 201);

    // drawn with phase 0: offset = 0.6 * att(i) * heightMax * amplitude * sin(6i)
    let height_max = 94.0;
    let expected = |i: f64| {
        let att = (4.0 / (4.0 + i.powi(4))).powi(4);
        0.6 * att * height_max * 1.0 * (6.0 * i).sin()
    };
    for (idx, i) in [(0usize, -2.0), (100, 0.0), (200, 2.0)] {
        assert_relative_eq!(top[idx].y - height_max, expected(i), epsilon = 1e-9);
    }
    assert_eq!(top[100].y, height_max);
    assert!((top[0].y - height_max).abs() < 0.0016 * 0.6 * height_max + 1e-9);
    assert!((top[200].y - height_max).abs() < 0.0016 * 0.6 * height_max + 1e-9);
}

#[test]
fn set_amplitude_moves_one_lerp_step_per_frame() {
    let mut wave = banded();
    wave.start();
    wave.set_named("amplitude", 5.0).unwrap();
    assert_eq!(wave.amplitude(), 1.0);

    let mut rec = RecordingSurface::new();
    wave.frame(&mut rec, Duration::ZERO);
    assert_relative_eq!(wave.amplitude(), 1.4, epsilon = 1e-12);
    assert_eq!(wave.amplitude(), 1.0 + (5.0 - 1.0) * 0.1);
    assert_eq!(wave.amplitude_target(), Some(5.0));
}

#[test]
fn speed_target_feeds_the_phase_step() {
    let mut wave = banded();
    wave.start();
    wave.set_speed(1.0);
    let mut rec = RecordingSurface::new();
    wave.frame(&mut rec, Duration::ZERO);
    let speed = 0.2 + (1.0 - 0.2) * 0.1;
    assert_eq!(wave.speed(), speed);
    assert_relative_eq!(wave.phase(), PHASE_STEP * speed, epsilon = 1e-15);
}

#[test]
fn phase_wraps_after_many_frames() {
    for s in [0.2, 0.9, 3.7] {
        let opts = WaveOptions {
            speed: s,
            ..Default::default()
        };
        let mut wave = WaveController::with_seed(opts, host(), 1);
        wave.start();
        let mut rec = RecordingSurface::new();
        for n in 1..=200u32 {
            rec.take();
            wave.frame(&mut rec, Duration::ZERO);
            let expected = (n as f64 * (PI / 2.0) * s) % TAU;
            let diff = (wave.phase() - expected).abs();
            // either side of the wrap point counts as equal
            assert!(diff.min(TAU - diff) < 1e-9, "n={n} s={s}");
            assert!((0.0..TAU).contains(&wave.phase()));
        }
    }
}

#[test]
fn stop_and_start_reset_only_phase_and_running() {
    let mut wave = banded();
    wave.start();
    wave.set_amplitude(3.0);
    wave.set_speed(0.6);
    let mut rec = RecordingSurface::new();
    for _ in 0..5 {
        wave.frame(&mut rec, Duration::ZERO);
    }
    let (amp, speed) = (wave.amplitude(), wave.speed());
    assert!(wave.phase() > 0.0);

    wave.stop();
    assert_eq!(wave.phase(), 0.0);
    assert!(!wave.is_running());
    assert_eq!((wave.amplitude(), wave.speed()), (amp, speed));
    assert_eq!(wave.amplitude_target(), Some(3.0));

    wave.start();
    assert_eq!(wave.phase(), 0.0);
    assert!(wave.is_running());
    assert_eq!((wave.amplitude(), wave.speed()), (amp, speed));
}

#[test]
fn stopped_frame_draws_nothing() {
    let mut wave = banded();
    let mut rec = RecordingSurface::new();
    assert_eq!(wave.frame(&mut rec, Duration::ZERO), FrameOutcome::Halt);
    assert!(rec.commands.is_empty());

    wave.start();
    wave.frame(&mut rec, Duration::ZERO);
    wave.stop();
    rec.take();
    assert_eq!(wave.frame(&mut rec, Duration::ZERO), FrameOutcome::Halt);
    assert!(rec.commands.is_empty());
    assert_eq!(wave.frames_drawn(), 1);
}

#[test]
fn frame_starts_with_a_full_erase() {
    let mut wave = banded();
    wave.start();
    let mut rec = RecordingSurface::new();
    wave.frame(&mut rec, Duration::ZERO);
    let full = Rect {
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 200.0,
    };
    assert_eq!(rec.commands[0], DrawCommand::GlobalAlpha(1.0));
    assert_eq!(
        rec.commands[1],
        DrawCommand::Composite(Composite::DestinationOut)
    );
    assert_eq!(rec.commands[3], DrawCommand::FillRect(full));
    assert_eq!(rec.commands[4], DrawCommand::Composite(Composite::SourceOver));
}

#[test]
fn bands_paint_in_definition_order() {
    let mut wave = banded();
    wave.start();
    let mut rec = RecordingSurface::new();
    wave.frame(&mut rec, Duration::ZERO);
    let opacities: Vec<f64> = rec
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokeStyle(rgba) => Some(rgba.alpha),
            _ => None,
        })
        .collect();
    assert_eq!(opacities, vec![0.1, 0.2, 0.4, 0.6, 1.0]);
}

#[test]
fn autostart_enters_running_state() {
    let opts = WaveOptions {
        autostart: true,
        ..Default::default()
    };
    let wave = WaveController::with_seed(opts, host(), 7);
    assert!(wave.is_running());
    assert!(!banded().is_running());
}

#[test]
fn malformed_color_resolves_to_none() {
    let opts = WaveOptions {
        color: "#zz0011".into(),
        ..Default::default()
    };
    let mut wave = WaveController::with_seed(opts, host(), 7);
    assert_eq!(wave.color(), None);
    wave.start();
    let mut rec = RecordingSurface::new();
    wave.frame(&mut rec, Duration::ZERO);
    assert_eq!(rec.count(|c| matches!(c, DrawCommand::StrokeStyle(_))), 0);
    assert_eq!(rec.count(|c| matches!(c, DrawCommand::Stroke)), 5);
}

#[test]
fn unknown_parameter_is_rejected() {
    let mut wave = banded();
    assert_eq!(
        wave.set_named("frequency", 3.0),
        Err(ParamError::Unknown("frequency".into()))
    );
    assert_eq!(wave.speed_target(), Some(0.2));
}

#[test]
fn geometry_comes_from_host_and_ratio() {
    let opts = WaveOptions {
        ratio: Some(2.0),
        height: Some(50.0),
        ..Default::default()
    };
    let wave = WaveController::with_seed(opts, host().with_pixel_ratio(3.0), 1);
    let g = wave.geometry();
    assert_eq!(g.width, 800.0);
    assert_eq!(g.height, 100.0);
    assert_eq!(g.height_max, 44.0);
}

#[test]
fn organic_style_builds_support_line_and_three_blobs() {
    let wave = organic();
    let defs: Vec<CurveDefinition> = wave.curves().iter().map(|c| c.definition()).collect();
    assert_eq!(defs.len(), 4);
    match defs[0] {
        CurveDefinition::Organic(l) => assert!(l.support_line),
        _ => panic!("expected organic layers"),
    }
    assert!(defs[1..]
        .iter()
        .all(|d| matches!(d, CurveDefinition::Organic(l) if !l.support_line)));
}

#[test]
fn organic_wave_colors_override_positionally() {
    let opts = WaveOptions {
        style: Style::Organic,
        wave_colors: vec!["#ff0000".into(), "not a color".into(), "1, 2, 3".into()],
        ..Default::default()
    };
    let wave = WaveController::with_seed(opts, host(), 42);
    let colors: Vec<Rgb> = wave
        .curves()
        .iter()
        .map(|c| match c.definition() {
            CurveDefinition::Organic(l) => l.color,
            CurveDefinition::Banded(_) => unreachable!(),
        })
        .collect();
    assert_eq!(
        colors,
        vec![
            Rgb::WHITE,
            Rgb::new(255, 0, 0),
            Rgb::new(173, 57, 76),
            Rgb::new(1, 2, 3)
        ]
    );
}

#[test]
fn organic_frames_run_for_a_long_time() {
    let mut wave = organic();
    wave.start();
    let mut rec = RecordingSurface::new();
    for k in 0..600u64 {
        rec.take();
        assert_eq!(
            wave.frame(&mut rec, Duration::from_millis(16 * k)),
            FrameOutcome::Continue
        );
        assert_eq!(rec.count(|c| matches!(c, DrawCommand::FillRect(_))), 2);
        assert_eq!(rec.count(|c| matches!(c, DrawCommand::Fill)), 6);
    }
    for curve in wave.curves() {
        if let CurveModel::Organic(c) = curve {
            for b in c.sub_bands() {
                assert!(b.amplitude >= 0.0 && b.amplitude <= b.final_amplitude);
                assert!((0.0..TAU).contains(&b.phase));
            }
        }
    }
}

#[test]
fn same_seed_same_frames() {
    let mut a = organic();
    let mut b = organic();
    a.start();
    b.start();
    let (mut ra, mut rb) = (RecordingSurface::new(), RecordingSurface::new());
    for k in 0..120u64 {
        let now = Duration::from_millis(16 * k);
        a.frame(&mut ra, now);
        b.frame(&mut rb, now);
    }
    assert_eq!(ra.commands, rb.commands);
}
