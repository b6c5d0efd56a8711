mod common;

use common::{
    app, assert_invariants, bank, current_answer, fire_advance, fire_tick, question,
};
use timed_quiz::{
    Category, QUESTIONS_PER_SESSION, RESULT_DISPLAY_DELAY, Screen, TIME_LIMIT_SECS, Tier,
};

#[test]
fn all_correct_is_perfect() {
    let mut app = app();
    app.begin_session(Category::Science, vec![question("one", 1), question("two", 3)]);
    assert_eq!(app.presenter().screen, Some(Screen::Quiz));
    assert_eq!(app.presenter().title.as_deref(), Some("Science Quiz"));

    for _ in 0..2 {
        let answer = current_answer(&app);
        assert!(app.choice_clicked(answer));
        assert_invariants(&app);
        assert!(fire_advance(&mut app));
        assert_invariants(&app);
    }

    let session = app.session().unwrap();
    assert!(session.is_complete());
    assert_eq!(session.score(), 2);
    assert_eq!(app.presenter().results, vec![(2, 2, Tier::Perfect)]);
    assert_eq!(app.presenter().screen, Some(Screen::Result));
}

#[test]
fn timeout_then_wrong_is_low() {
    let mut app = app();
    app.begin_session(Category::History, vec![question("one", 0), question("two", 2)]);

    for _ in 0..TIME_LIMIT_SECS {
        assert!(fire_tick(&mut app));
        assert_invariants(&app);
    }
    assert!(app.session().unwrap().is_answer_locked());
    assert_eq!(app.timers().advance_armed, Some(RESULT_DISPLAY_DELAY));
    assert!(fire_advance(&mut app));

    let wrong = (current_answer(&app) + 1) % 4;
    app.choice_clicked(wrong);
    assert_invariants(&app);
    assert!(fire_advance(&mut app));

    assert_eq!(app.presenter().results, vec![(0, 2, Tier::Low)]);
    assert_eq!(app.presenter().judges, vec![false, false]);
}

#[test]
fn click_after_timeout_is_discarded() {
    let mut app = app();
    app.begin_session(Category::Trivia, vec![question("only", 2)]);

    while fire_tick(&mut app) {}
    let highlights = app.presenter().highlights.clone();

    assert!(!app.choice_clicked(2));

    assert_eq!(app.session().unwrap().score(), 0);
    assert_eq!(app.presenter().highlights, highlights);
    assert_eq!(highlights, vec![(2, None)]);
}

#[test]
fn double_click_counts_once() {
    let mut app = app();
    app.begin_session(Category::Geography, vec![question("one", 1), question("two", 1)]);

    assert!(app.choice_clicked(1));
    assert!(!app.choice_clicked(1));
    assert!(!app.choice_clicked(0));

    assert_eq!(app.session().unwrap().score(), 1);
    assert_eq!(app.presenter().judges, vec![true]);
    assert_eq!(app.presenter().highlights, vec![(1, None)]);
}

#[test]
fn click_in_last_second_disarms_final_tick() {
    let mut app = app();
    app.begin_session(Category::Anime, vec![question("one", 3)]);
    for _ in 0..TIME_LIMIT_SECS - 1 {
        fire_tick(&mut app);
    }

    // Once the click resolves, the final tick is never delivered.
    assert!(app.choice_clicked(3));
    assert!(!fire_tick(&mut app));

    assert_eq!(app.session().unwrap().score(), 1);
    assert_eq!(app.presenter().judges, vec![true]);
}

#[test]
fn back_to_category_mid_question_disarms_timers() {
    let mut app = app();
    app.begin_session(Category::Manga, bank(12));
    fire_tick(&mut app);
    assert!(app.timers().countdown_armed);

    app.back_to_category();

    assert!(app.session().is_none());
    assert!(!app.timers().countdown_armed);
    assert!(app.timers().advance_armed.is_none());
    assert_eq!(app.presenter().screen, Some(Screen::Category));
    assert!(!fire_tick(&mut app));
    assert!(!fire_advance(&mut app));
}

#[test]
fn back_to_category_during_display_delay_cancels_advance() {
    let mut app = app();
    app.begin_session(Category::Manga, bank(12));
    let answer = current_answer(&app);
    app.choice_clicked(answer);
    assert!(app.timers().advance_armed.is_some());

    app.back_to_category();

    assert!(app.timers().advance_armed.is_none());
    assert_eq!(app.presenter().rendered.len(), 1);
}

#[test]
fn new_category_replaces_running_session() {
    let mut app = app();
    app.begin_session(Category::History, bank(12));
    let first = app.session().unwrap().id();
    app.choice_clicked(current_answer(&app));

    app.begin_session(Category::Science, bank(3));

    let session = app.session().unwrap();
    assert_ne!(session.id(), first);
    assert_eq!(session.score(), 0);
    assert_eq!(session.total(), 3);
    assert_eq!(app.category(), Some(Category::Science));
    assert!(app.timers().advance_armed.is_none());
    assert!(app.timers().countdown_armed);
}

#[test]
fn full_session_plays_ten_of_larger_bank() {
    let mut app = app();
    app.begin_session(Category::Trivia, bank(25));
    assert_eq!(app.session().unwrap().total(), QUESTIONS_PER_SESSION);

    let mut expected = 0;
    for i in 0..QUESTIONS_PER_SESSION {
        if i % 3 == 0 {
            while fire_tick(&mut app) {
                assert_invariants(&app);
            }
        } else {
            let answer = current_answer(&app);
            app.choice_clicked(answer);
            expected += 1;
        }
        assert_invariants(&app);
        fire_advance(&mut app);
        assert_invariants(&app);
    }

    let numbers: Vec<usize> = app.presenter().rendered.iter().map(|r| r.1).collect();
    assert_eq!(numbers, (1..=QUESTIONS_PER_SESSION).collect::<Vec<_>>());
    assert_eq!(
        app.presenter().results,
        vec![(expected, QUESTIONS_PER_SESSION, Tier::for_score(expected, 10))]
    );
    assert_eq!(expected, 6);
}

#[test]
fn small_bank_plays_every_question() {
    let mut app = app();
    app.begin_session(Category::Anime, bank(4));

    let session = app.session().unwrap();
    assert_eq!(session.total(), 4);
    assert_eq!(app.presenter().rendered[0].2, 4);
}

#[test]
fn empty_bank_does_not_start_a_session() {
    let mut app = app();
    app.begin_session(Category::Manga, Vec::new());

    assert!(app.session().is_none());
    assert_eq!(app.presenter().screen, Some(Screen::Category));
    assert_eq!(app.presenter().notices.len(), 1);
    assert!(!app.timers().countdown_armed);
}

#[test]
fn timer_events_without_session_are_ignored() {
    let mut app = app();
    app.on_timer(timed_quiz::TimerEvent::Tick);
    app.on_timer(timed_quiz::TimerEvent::Advance);
    assert!(app.session().is_none());
    assert!(!app.choice_clicked(0));
}
