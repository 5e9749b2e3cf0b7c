use super::{Arrow, Granularity, Navigation, NavigationController};
use crate::error::NavError;
use crate::index::NavigationIndex;
use crate::section::Section;
use crate::timeline::{TimerEvent, Timeline};
use std::rc::Rc;
use std::time::Duration;

const TRANSITION: Duration = Duration::from_millis(300);

fn mixed_index() -> Rc<NavigationIndex> {
    Rc::new(
        NavigationIndex::new(vec![
            Section::new("Overview", ["Overview", "Roles", "Impact"]),
            Section::new("Research", ["Strategy", "Methods", "Participants"]),
            Section::flat("Thinking"),
            Section::new("Prototyping", ["Wireframes", "Prototypes"]),
            Section::flat("Outcome"),
        ])
        .unwrap(),
    )
}

fn settle(controller: &mut NavigationController, timeline: &mut Timeline) {
    for event in timeline.advance(TRANSITION) {
        if event == TimerEvent::TransitionEnd {
            controller.end_transition();
        }
    }
}

#[test]
fn test_starts_at_origin() {
    let controller = NavigationController::new(mixed_index(), TRANSITION);
    let state = controller.state();
    assert_eq!(state.active_section, 0);
    assert_eq!(state.active_subsection, 0);
    assert!(!state.transition_in_flight);
}

#[test]
fn test_section_change_resets_subsection() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);

    controller.go_to_section(1, &mut timeline).unwrap();
    settle(&mut controller, &mut timeline);
    controller.go_to_subsection(2, &mut timeline).unwrap();
    settle(&mut controller, &mut timeline);
    assert_eq!(
        (controller.active_section(), controller.active_subsection()),
        (1, 2)
    );

    let outcome = controller.go_to_section(3, &mut timeline).unwrap();
    assert_eq!(outcome, Navigation::Applied);
    let state = controller.state();
    assert_eq!((state.active_section, state.active_subsection), (3, 0));
}

#[test]
fn test_same_section_is_a_no_op_and_keeps_guard_free() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);

    let outcome = controller.go_to_section(0, &mut timeline).unwrap();
    assert_eq!(outcome, Navigation::AlreadyActive);
    assert!(!controller.in_flight());
    assert_eq!(timeline.pending(), 0);
}

#[test]
fn test_requests_during_transition_are_dropped() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);

    controller.go_to_section(1, &mut timeline).unwrap();
    let before = controller.state();
    assert!(before.transition_in_flight);

    assert_eq!(
        controller.go_to_section(3, &mut timeline).unwrap(),
        Navigation::Suppressed
    );
    assert_eq!(
        controller.go_to_subsection(1, &mut timeline).unwrap(),
        Navigation::Suppressed
    );
    assert_eq!(
        controller.next_section(&mut timeline).unwrap(),
        Navigation::Suppressed
    );
    assert_eq!(
        controller.prev_section(&mut timeline).unwrap(),
        Navigation::Suppressed
    );
    assert_eq!(
        controller.next_subsection(&mut timeline).unwrap(),
        Navigation::Suppressed
    );
    assert_eq!(
        controller.prev_subsection(&mut timeline).unwrap(),
        Navigation::Suppressed
    );
    assert_eq!(controller.state(), before);
    assert_eq!(timeline.pending(), 1, "dropped requests schedule nothing");
}

#[test]
fn test_guard_releases_after_duration() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);

    controller.next_section(&mut timeline).unwrap();
    assert!(timeline
        .advance(Duration::from_millis(299))
        .is_empty());
    assert!(controller.in_flight());

    assert_eq!(
        timeline.advance(Duration::from_millis(1)),
        vec![TimerEvent::TransitionEnd]
    );
    controller.end_transition();
    assert!(!controller.in_flight());
    assert_eq!(
        controller.next_section(&mut timeline).unwrap(),
        Navigation::Applied
    );
    assert_eq!(controller.active_section(), 2);
}

#[test]
fn test_next_section_wraps_back_to_start() {
    let index = mixed_index();
    let count = index.section_count();
    for start in 0..count {
        let mut timeline = Timeline::new();
        let mut controller = NavigationController::new(Rc::clone(&index), TRANSITION);
        if start != 0 {
            controller.go_to_section(start, &mut timeline).unwrap();
            settle(&mut controller, &mut timeline);
        }
        for _ in 0..count {
            controller.next_section(&mut timeline).unwrap();
            settle(&mut controller, &mut timeline);
        }
        assert_eq!(controller.active_section(), start);
    }
}

#[test]
fn test_prev_section_wraps_to_last() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);
    controller.prev_section(&mut timeline).unwrap();
    assert_eq!(controller.active_section(), 4);
}

#[test]
fn test_left_arrow_wraps_subsections() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);

    assert_eq!(controller.granularity(), Granularity::Subsection);
    controller.on_arrow(Arrow::Left, &mut timeline).unwrap();
    assert_eq!(
        (controller.active_section(), controller.active_subsection()),
        (0, 2)
    );
    settle(&mut controller, &mut timeline);
    controller.on_arrow(Arrow::Right, &mut timeline).unwrap();
    assert_eq!(controller.active_subsection(), 0);
}

#[test]
fn test_arrows_step_sections_without_subsections() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);
    controller.go_to_section(2, &mut timeline).unwrap();
    settle(&mut controller, &mut timeline);

    assert_eq!(controller.granularity(), Granularity::Section);
    controller.on_arrow(Arrow::Right, &mut timeline).unwrap();
    assert_eq!(controller.active_section(), 3);
    settle(&mut controller, &mut timeline);

    // "Prototyping" has subsections, so the same key now steps within it.
    assert_eq!(controller.granularity(), Granularity::Subsection);
    controller.on_arrow(Arrow::Right, &mut timeline).unwrap();
    assert_eq!(
        (controller.active_section(), controller.active_subsection()),
        (3, 1)
    );
}

#[test]
fn test_router_never_steps_missing_subsections() {
    let index = mixed_index();
    for section in 0..index.section_count() {
        for arrow in [Arrow::Left, Arrow::Right] {
            let mut timeline = Timeline::new();
            let mut controller = NavigationController::new(Rc::clone(&index), TRANSITION);
            if section != 0 {
                controller.go_to_section(section, &mut timeline).unwrap();
                settle(&mut controller, &mut timeline);
            }
            let result = controller.on_arrow(arrow, &mut timeline);
            assert!(
                result.is_ok(),
                "arrow in section {section} routed to a failing operation"
            );
        }
    }
}

#[test]
fn test_subsection_stepping_without_subsections_fails() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);
    controller.go_to_section(4, &mut timeline).unwrap();
    settle(&mut controller, &mut timeline);

    assert!(matches!(
        controller.next_subsection(&mut timeline),
        Err(NavError::NoSubsections { section: 4 })
    ));
    assert!(matches!(
        controller.prev_subsection(&mut timeline),
        Err(NavError::NoSubsections { section: 4 })
    ));
    assert!(!controller.in_flight());
}

#[test]
fn test_out_of_range_targets_fail_loudly() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);

    assert!(matches!(
        controller.go_to_section(5, &mut timeline),
        Err(NavError::SectionOutOfRange { index: 5, count: 5 })
    ));
    assert!(matches!(
        controller.go_to_subsection(3, &mut timeline),
        Err(NavError::SubsectionOutOfRange {
            section: 0,
            index: 3,
            count: 3
        })
    ));
    assert_eq!(controller.active_section(), 0);
    assert!(!controller.in_flight());
}

#[test]
fn test_out_of_range_fails_even_mid_transition() {
    let mut timeline = Timeline::new();
    let mut controller = NavigationController::new(mixed_index(), TRANSITION);
    controller.go_to_section(1, &mut timeline).unwrap();

    assert!(controller.go_to_section(99, &mut timeline).is_err());
}
