//! Whole-session scenarios driven through the public API

use galactic_knight::FrameSnapshot;
use galactic_knight::audio::{AudioManager, LogSink};
use galactic_knight::consts::*;
use galactic_knight::sim::{GameEvent, GamePhase, Session, TickInput, new_session, tick};
use galactic_knight::ui::{self, UiAction};
use glam::Vec2;
use proptest::prelude::*;

fn click(session: &mut Session, action: UiAction) -> Option<UiAction> {
    let pos = ui::buttons(session.phase, session.sound_enabled)
        .into_iter()
        .find(|b| b.action == action)
        .map(|b| b.rect.center())?;
    ui::handle_click(session, pos)
}

fn demo() -> TickInput {
    TickInput {
        idle_mode: true,
        ..Default::default()
    }
}

#[test]
fn menu_start_back_and_start_again() {
    let mut session = new_session(21);
    assert_eq!(session.phase, GamePhase::Menu);

    assert_eq!(click(&mut session, UiAction::ToggleSound), Some(UiAction::ToggleSound));
    assert!(!session.sound_enabled);

    click(&mut session, UiAction::StartGame);
    assert_eq!(session.phase, GamePhase::Playing);
    for _ in 0..120 {
        tick(&mut session, &TickInput::default(), SIM_DT);
    }
    assert_eq!(session.time_ticks, 120);

    click(&mut session, UiAction::BackToMenu);
    assert_eq!(session.phase, GamePhase::Menu);
    // Frozen while on the menu
    let pos = session.hero.pos();
    tick(&mut session, &demo(), SIM_DT);
    assert_eq!(session.hero.pos(), pos);

    click(&mut session, UiAction::StartGame);
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.time_ticks, 0);
    assert_eq!(session.hero.hp, HERO_MAX_HP);
    assert_eq!(session.enemies.len(), 5);
    assert!(!session.sound_enabled, "sound choice survives a restart");
}

#[test]
fn retry_after_game_over() {
    let mut session = new_session(8);
    click(&mut session, UiAction::StartGame);
    session.hero.hp = 0;
    tick(&mut session, &TickInput::default(), SIM_DT);
    assert_eq!(session.phase, GamePhase::GameOver);

    let snap = FrameSnapshot::capture(&session, false);
    assert_eq!(snap.buttons.len(), 1);
    assert_eq!(snap.buttons[0].label, "TRY AGAIN");
    assert!(snap.sprites.is_empty());

    // Clicking where the menu button would be does nothing here
    assert_eq!(ui::handle_click(&mut session, Vec2::new(WIDTH - 70.0, 40.0)), None);

    assert_eq!(click(&mut session, UiAction::Retry), Some(UiAction::Retry));
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.hero.hp, HERO_MAX_HP);
    assert_eq!(session.hero.pos(), session.level.hero_spawn);
}

#[test]
fn retries_reroll_enemy_speeds_deterministically() {
    let speeds = |session: &Session| -> Vec<f32> { session.enemies.iter().map(|e| e.speed).collect() };

    let mut a = new_session(77);
    let mut b = new_session(77);
    click(&mut a, UiAction::StartGame);
    click(&mut b, UiAction::StartGame);
    assert_eq!(speeds(&a), speeds(&b));

    let first = speeds(&a);
    a.back_to_menu();
    click(&mut a, UiAction::StartGame);
    assert_ne!(speeds(&a), first);
    assert!(
        speeds(&a)
            .iter()
            .all(|s| (ENEMY_SPEED_MIN..ENEMY_SPEED_MAX).contains(s))
    );
}

#[test]
fn autopilot_soak_keeps_invariants() {
    let mut session = new_session(1234);
    click(&mut session, UiAction::StartGame);
    let mut audio = AudioManager::new(LogSink::default());
    let mut defeated = 0;

    for _ in 0..(60 * 90) {
        tick(&mut session, &demo(), SIM_DT);
        let events = session.drain_events();
        defeated += events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyDefeated { .. }))
            .count();
        audio.process(&events, session.sound_enabled);

        let hero = &session.hero;
        assert!(hero.pos().x >= 0.0 && hero.pos().x <= WIDTH);
        assert!(hero.hp <= HERO_MAX_HP);
        for enemy in &session.enemies {
            assert!(enemy.hp > 0);
            assert!(enemy.pos().x >= 0.0 && enemy.pos().x <= WIDTH);
        }
        assert_eq!(defeated + session.enemies.len(), 5);

        if session.phase != GamePhase::Playing {
            break;
        }
    }

    match session.phase {
        GamePhase::Win => assert!(session.enemies.is_empty()),
        GamePhase::GameOver => assert!(session.hero.is_defeated()),
        GamePhase::Playing => {}
        GamePhase::Menu => panic!("never returns to the menu on its own"),
    }
}

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, jump, attack)| TickInput {
            left,
            right,
            jump,
            attack,
            idle_mode: false,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hero_stays_in_world(seed in any::<u64>(), inputs in prop::collection::vec(input_strategy(), 1..400)) {
        let mut session = new_session(seed);
        session.reset();
        for input in &inputs {
            tick(&mut session, input, SIM_DT);
            let x = session.hero.pos().x;
            prop_assert!((0.0..=WIDTH).contains(&x), "hero x {} out of world", x);
            prop_assert!(session.hero.hp <= HERO_MAX_HP);
        }
    }
}
