use futures::executor::block_on;
use matches::assert_matches;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tactile_lib::*;

/// One recorded engine invocation, in the order the player made them
#[derive(Debug, PartialEq)]
enum Call {
    Start,
    Play { events: usize, at: Seconds },
    StopWhenFinished,
}

#[derive(Debug, PartialEq)]
struct FakeFailure;

/// Engine fake which records every call instead of actuating
#[derive(Debug)]
struct RecordingEngine {
    supported: bool,
    fail_start: bool,
    fail_play: bool,
    calls: Vec<Call>,
    played: Vec<HapticPattern>,
}

impl RecordingEngine {
    fn supported() -> Self {
        Self {
            supported: true,
            fail_start: false,
            fail_play: false,
            calls: Vec::new(),
            played: Vec::new(),
        }
    }

    fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::supported()
        }
    }
}

impl HapticEngine for RecordingEngine {
    type Error = FakeFailure;

    fn supports_haptics(&self) -> bool {
        self.supported
    }

    async fn start(&mut self) -> Result<(), FakeFailure> {
        if self.fail_start {
            return Err(FakeFailure);
        }
        self.calls.push(Call::Start);
        Ok(())
    }

    fn play(&mut self, pattern: &HapticPattern, at: Seconds) -> Result<(), FakeFailure> {
        if self.fail_play {
            return Err(FakeFailure);
        }
        self.calls.push(Call::Play {
            events: pattern.len(),
            at,
        });
        self.played.push(pattern.clone());
        Ok(())
    }

    fn stop_when_finished(&mut self) {
        self.calls.push(Call::StopWhenFinished);
    }
}

fn seeded_player(engine: RecordingEngine) -> HapticPlayer<RecordingEngine, SmallRng> {
    HapticPlayer::new(engine, SmallRng::seed_from_u64(42))
}

#[test]
fn test_playback_follows_the_engine_protocol() {
    let mut player = seeded_player(RecordingEngine::supported());
    let pattern = NativeFeedback::Success.pattern();

    block_on(player.play(&pattern)).unwrap();

    assert_eq!(
        player.engine().calls,
        vec![
            Call::Start,
            Call::Play {
                events: pattern.len(),
                at: 0.0,
            },
            Call::StopWhenFinished,
        ]
    );
}

#[test]
fn test_an_unsupported_engine_fails_fast() {
    let mut player = seeded_player(RecordingEngine::unsupported());

    let result = block_on(player.native(NativeFeedback::Error));

    assert_matches!(result, Err(HapticError::Unsupported));
    assert!(player.engine().calls.is_empty());
}

#[test]
fn test_confetti_checks_support_before_generating() {
    let mut player = seeded_player(RecordingEngine::unsupported());

    let result = block_on(player.confetti(1.0));

    assert_matches!(result, Err(HapticError::Unsupported));
    assert!(player.engine().calls.is_empty());
}

#[test]
fn test_an_empty_pattern_completes_without_the_engine() {
    let mut player = seeded_player(RecordingEngine::supported());
    let empty = HapticPattern::default();

    block_on(player.play(&empty)).unwrap();

    assert!(player.engine().calls.is_empty());
}

#[test]
fn test_zero_duration_confetti_is_a_quiet_success() {
    let mut player = seeded_player(RecordingEngine::supported());

    block_on(player.confetti(0.0)).unwrap();

    assert!(player.engine().calls.is_empty());
}

#[test]
fn test_a_start_failure_is_reported_before_playback() {
    let mut engine = RecordingEngine::supported();
    engine.fail_start = true;
    let mut player = seeded_player(engine);

    let result = block_on(player.native(NativeFeedback::Light));

    assert_matches!(result, Err(HapticError::Engine(FakeFailure)));
    assert!(player.engine().calls.is_empty());
}

#[test]
fn test_a_play_failure_skips_the_shutdown_request() {
    let mut engine = RecordingEngine::supported();
    engine.fail_play = true;
    let mut player = seeded_player(engine);

    let result = block_on(player.native(NativeFeedback::Heavy));

    assert_matches!(result, Err(HapticError::Engine(FakeFailure)));
    assert_eq!(player.engine().calls, vec![Call::Start]);
}

#[test]
fn test_confetti_plays_the_synthesized_pattern() {
    let mut player = seeded_player(RecordingEngine::supported());

    block_on(player.confetti(0.5)).unwrap();

    let expected = generate_confetti(
        0.5,
        &ConfettiSettings::default(),
        &mut SmallRng::seed_from_u64(42),
    );
    assert_eq!(player.engine().played, vec![expected]);
}

#[test]
fn test_custom_settings_reach_the_synthesizer() {
    let settings = ConfettiSettings {
        envelope: Envelope::Flat,
        ..ConfettiSettings::default()
    };
    let mut player =
        seeded_player(RecordingEngine::supported()).with_settings(settings.clone());

    block_on(player.confetti(0.5)).unwrap();

    let expected = generate_confetti(0.5, &settings, &mut SmallRng::seed_from_u64(42));
    assert_eq!(player.engine().played, vec![expected]);
}

#[test]
fn test_every_native_kind_plays() {
    let mut player = seeded_player(RecordingEngine::supported());
    let kinds = [
        NativeFeedback::Error,
        NativeFeedback::Success,
        NativeFeedback::Warning,
        NativeFeedback::Light,
        NativeFeedback::Medium,
        NativeFeedback::Heavy,
        NativeFeedback::Selection,
    ];

    for kind in kinds {
        block_on(player.native(kind)).unwrap();
    }

    assert_eq!(player.engine().played.len(), kinds.len());
    for pattern in &player.engine().played {
        assert!(!pattern.is_empty());
    }
}
