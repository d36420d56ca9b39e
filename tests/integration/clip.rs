//! Clip window integration tests
//!
//! Fixed windows, windows re-randomized at each loop pass, and the varispeed
//! clip read with its reverse neighbour policies.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use loopline::prelude::*;
use loopline::{ClipWindow, DEFAULT_CLICK_GUARD};

const LOOP: usize = 1000;

fn staircase_looper() -> LoopBuffer<f32, LOOP> {
    recorded_looper::<LOOP>(&generate_integer_staircase(LOOP))
}

fn random_params() -> ClipParams {
    ClipParams {
        clip_start: 0.5,
        clip_end: 0.5,
        min_clip: 16,
        random_length: true,
        random_start: true,
        ..Default::default()
    }
}

/// Non-random windows are the same on every call and every pass.
#[test]
fn test_fixed_window_is_deterministic() {
    let mut looper = staircase_looper();
    assert_eq!(looper.active_length(), LOOP);

    let mode = ReadMode::ClipRandom(ClipParams {
        clip_start: 0.25,
        clip_end: 0.75,
        min_clip: 10,
        ..Default::default()
    });

    let expected = ClipWindow {
        offset: 250,
        end: 750,
    };
    for i in 0..3 * 750 {
        let out = looper.read_mode(mode);
        assert_eq!(looper.clip_window(), expected);
        assert_eq!(out, (250 + i % 750) as f32, "read {i}");
    }
}

#[test]
fn test_clip_read_offsets_into_loop() {
    let mut looper = staircase_looper();
    let mode = ReadMode::Clip {
        clip_start: 0.5,
        clip_end: 0.1,
        min_clip: 1,
    };

    let out = render(&mut looper, mode, 200);
    for (i, &s) in out.iter().enumerate() {
        assert_eq!(s, (500 + i % 100) as f32, "read {i}");
    }
}

#[test]
fn test_clip_end_shortest_window() {
    let mut looper = staircase_looper();
    let mode = ReadMode::ClipEnd {
        clip_end: 0.0,
        min_clip: 32,
    };

    let out = render(&mut looper, mode, 96);
    for (i, &s) in out.iter().enumerate() {
        assert_eq!(s, (i % 32) as f32, "read {i}");
    }
}

/// A random window is drawn at the start of a pass and held until the cursor wraps.
#[test]
fn test_random_window_held_for_a_pass() {
    let mut looper = staircase_looper();
    let mode = ReadMode::ClipRandom(random_params());

    for _ in 0..5000 {
        let before = looper.clip_window();
        let restart = looper.read_position() == 0;
        looper.read_mode(mode);

        let window = looper.clip_window();
        if !restart {
            assert_eq!(window, before);
        }
        assert!(window.end >= 16 && window.end <= LOOP, "window {window:?}");
        assert!(looper.read_position() < window.end);
    }
}

/// The same seed replays the same randomized performance.
#[test]
fn test_seeded_windows_replay() {
    let mut a = staircase_looper();
    let mut b = staircase_looper();
    let mode = ReadMode::ClipRandom(random_params());

    let out_a = render(&mut a, mode, 20_000);
    let out_b = render(&mut b, mode, 20_000);
    assert_signals_equal(&out_a, &out_b, 0.0, "seeded replay");
}

/// Window state belongs to each looper: a second looper reading in between
/// does not disturb the first one's windows.
#[test]
fn test_window_state_is_per_instance() {
    let mode = ReadMode::ClipRandom(random_params());

    let mut solo = staircase_looper();
    let expected = render(&mut solo, mode, 5000);

    let mut interleaved = staircase_looper();
    let mut other: LoopBuffer<f32, LOOP> = LoopBuffer::builder()
        .seed(TEST_SEED + 1)
        .build()
        .expect("Failed to create second looper");
    other.write_block(&generate_noise(LOOP, 9));

    let mut out = Vec::with_capacity(5000);
    for _ in 0..5000 {
        other.read_mode(ReadMode::ClipRandom(ClipParams {
            clip_start: 1.0,
            clip_end: 0.1,
            ..random_params()
        }));
        out.push(interleaved.read_mode(mode));
    }

    assert_signals_equal(&out, &expected, 0.0, "interleaved loopers");
}

/// Random starts on the varispeed read never land closer than the click guard.
#[test]
fn test_random_start_respects_click_guard() {
    let mut looper = staircase_looper();
    let mode = ReadMode::ClipSpeed(ClipParams {
        clip_start: 1.0,
        random_start: true,
        ..Default::default()
    });

    for _ in 0..5000 {
        looper.read_mode(mode);
        assert!(looper.clip_window().offset >= DEFAULT_CLICK_GUARD);
    }
}

#[test]
fn test_click_guard_is_configurable() {
    let mut looper: LoopBuffer<f32, LOOP> = LoopBuffer::builder()
        .click_guard(64)
        .seed(TEST_SEED)
        .build()
        .expect("Failed to create test looper");
    looper.write_block(&generate_integer_staircase(LOOP));

    let mode = ReadMode::ClipSpeed(ClipParams {
        clip_start: 1.0,
        random_start: true,
        ..Default::default()
    });
    for _ in 0..5000 {
        looper.read_mode(mode);
        assert!(looper.clip_window().offset >= 64);
    }
}

/// Unit speed over the whole loop is plain loop playback.
#[test]
fn test_clip_speed_unit_matches_loop() {
    let mut clip = staircase_looper();
    let mut plain = staircase_looper();

    let out = render(&mut clip, ReadMode::ClipSpeed(ClipParams::default()), 2500);
    let expected = render(&mut plain, ReadMode::Loop, 2500);
    assert_signals_equal(&out, &expected, FLOAT_EPSILON, "unit speed clip");
}

/// The phase is updated before interpolating, so half speed alternates
/// between the midpoint and the sample under the cursor.
#[test]
fn test_clip_speed_half_speed() {
    let mut looper = staircase_looper();
    let mode = ReadMode::ClipSpeed(ClipParams {
        speed: 0.5,
        ..Default::default()
    });

    let out = render(&mut looper, mode, 200);
    for k in 0..100 {
        assert!((out[2 * k] - (k as f32 + 0.5)).abs() <= DSP_EPSILON, "read {}", 2 * k);
        assert!((out[2 * k + 1] - k as f32).abs() <= DSP_EPSILON, "read {}", 2 * k + 1);
    }
}

#[test]
fn test_clip_speed_reverse_wraps_to_window_end() {
    let mut looper: LoopBuffer<f32, LOOP> = LoopBuffer::builder()
        .reverse_neighbor(ReverseNeighbor::Wrapped)
        .seed(TEST_SEED)
        .build()
        .expect("Failed to create test looper");
    looper.write_block(&generate_integer_staircase(LOOP));

    let mode = ReadMode::ClipSpeed(ClipParams {
        speed: -1.0,
        ..Default::default()
    });
    let out = render(&mut looper, mode, 10);
    assert_eq!(out[0], 0.0);
    for (i, &s) in out.iter().enumerate().skip(1) {
        assert_eq!(s, (LOOP - i) as f32, "read {i}");
    }
}

/// Reading backwards from index 1, the legacy policy interpolates towards the
/// value `active_length - 1` rather than a stored sample; the wrapped policy
/// towards sample 0.
#[test]
fn test_reverse_neighbor_policies_at_index_one() {
    let take: Vec<f32> = (0..16).map(|i| 100.0 + i as f32).collect();
    let mode = ReadMode::ClipSpeed(ClipParams {
        speed: -0.5,
        ..Default::default()
    });

    let mut legacy = recorded_looper::<16>(&take);
    legacy.set_length(2);
    legacy.set_read_position(1);
    assert_eq!(legacy.read_mode(mode), 151.0);

    let mut wrapped: LoopBuffer<f32, 16> = LoopBuffer::builder()
        .reverse_neighbor(ReverseNeighbor::Wrapped)
        .build()
        .expect("Failed to create test looper");
    wrapped.write_block(&take);
    wrapped.set_length(2);
    wrapped.set_read_position(1);
    assert_eq!(wrapped.read_mode(mode), 101.5);
}

/// With the default policy, reading backwards from sample 0 interpolates
/// towards the last sample of the loop.
#[test]
fn test_default_reverse_neighbor_wraps_at_loop_start() {
    let mut looper = staircase_looper();
    assert_eq!(looper.config().reverse_neighbor, ReverseNeighbor::Legacy);

    let mode = ReadMode::ClipSpeed(ClipParams {
        speed: -0.5,
        ..Default::default()
    });
    // a = 0, b = 999, phase -0.5
    assert_eq!(looper.read_mode(mode), -499.5);
}

/// A one-sample loop has nothing to interpolate and plays silence.
#[test]
fn test_clip_speed_single_sample_loop_is_silent() {
    let mut looper = recorded_looper::<16>(&generate_dc(0.9, 8));
    looper.set_length(1);

    let out = render(&mut looper, ReadMode::ClipSpeed(ClipParams::default()), 32);
    assert_is_silent(&out, SILENCE_THRESHOLD, "one-sample clip");
}
