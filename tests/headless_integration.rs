use std::sync::mpsc;
use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{rngs::StdRng, SeedableRng};

use scribble::format::format_elapsed;
use scribble::runtime::{AppEvent, Runner, TestEventSource};
use scribble::session::{Phase, SessionController};
use scribble::words::WordList;

fn bundled_controller(seed: u64) -> SessionController {
    SessionController::new(WordList::bundled().unwrap(), StdRng::seed_from_u64(seed))
}

// Headless integration using the runtime + controller without a TTY.
// A real round is started, left to tick on the wall clock, then stopped.
#[test]
fn headless_round_ticks_in_real_time() {
    let mut controller = bundled_controller(1);

    let (tx, rx) = mpsc::channel();
    let runner = Runner::with_idle_poll(TestEventSource::new(rx), Duration::from_millis(50));

    let started = Instant::now();
    controller.start_at(started);

    // Run the loop until just over two seconds of stopwatch time
    while controller.elapsed_seconds() < 2 {
        let _ = runner.step(controller.until_next_tick(Instant::now()));
        controller.poll_ticks(Instant::now());
        assert!(
            started.elapsed() < Duration::from_secs(10),
            "stopwatch never advanced"
        );
    }

    tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)))
        .unwrap();
    assert_matches!(runner.step(None), AppEvent::Key(_));
    assert_eq!(controller.toggle(), Phase::Idle);

    let final_time = controller.elapsed_seconds();
    assert_eq!(final_time, 2);
    assert_eq!(format_elapsed(final_time), "00:02");

    // Nothing advances the clock once the round is over
    for _ in 0..5 {
        let _ = runner.step(controller.until_next_tick(Instant::now()));
        controller.poll_ticks(Instant::now());
        controller.tick();
    }
    assert_eq!(controller.elapsed_seconds(), final_time);
}

#[test]
fn headless_many_rounds() {
    let mut controller = bundled_controller(2024);
    let t0 = Instant::now();

    for round in 0..20u64 {
        let start = t0 + Duration::from_secs(round * 100);
        assert!(controller.start_at(start));
        assert_eq!(controller.elapsed_seconds(), 0);

        controller.poll_ticks(start + Duration::from_secs(round));
        assert_eq!(controller.elapsed_seconds(), round);

        let word = controller.current_word().unwrap().to_string();
        assert!(controller.word_list().words().contains(&word));

        assert!(controller.stop());
    }

    assert_eq!(controller.rounds_started(), 20);
}

#[test]
fn headless_replay_with_same_seed() {
    let mut a = bundled_controller(77);
    let mut b = bundled_controller(77);

    let drawn_a: Vec<String> = (0..8)
        .map(|_| {
            a.start();
            a.stop();
            a.current_word().unwrap().to_string()
        })
        .collect();
    let drawn_b: Vec<String> = (0..8)
        .map(|_| {
            b.start();
            b.stop();
            b.current_word().unwrap().to_string()
        })
        .collect();

    assert_eq!(drawn_a, drawn_b);
}
