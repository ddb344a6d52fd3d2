use crate::scene::node::{SlideDirection, Transition, Trigger};

/// Map a transition keyword to a transition.
///
/// Keywords match exactly. Anything else, including an absent keyword or a case variant, slides
/// in from the left.
pub fn resolve_transition(keyword: Option<&str>) -> Transition {
    match keyword {
        Some("slide_right") => Transition::SlideIn {
            direction: SlideDirection::Right,
        },
        Some("fade") => Transition::Dissolve,
        Some("push") => Transition::Push,
        _ => Transition::SlideIn {
            direction: SlideDirection::Left,
        },
    }
}

/// `onHover` starts on hover; every other value is a click.
pub fn resolve_trigger(keyword: Option<&str>) -> Trigger {
    match keyword {
        Some("onHover") => Trigger::OnHover,
        _ => Trigger::OnClick,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/prototype/transitions.rs"]
mod tests;
