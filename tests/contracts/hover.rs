//! Hover panel contracts (HOVER-001 through HOVER-002)

use std::time::Duration;

use navweave::application::HoverScript;

fn replay(script: &str) -> Vec<navweave::application::HoverTransition> {
    HoverScript::parse(script)
        .expect("valid script")
        .replay(true, Duration::from_millis(150))
}

/// CONTRACT HOVER-001: crossing from trigger to panel within the delay never hides it
mod no_flicker {
    use super::*;

    #[test]
    fn contract_panel_stays_visible_across_the_gap() {
        let transitions = replay("enter@0,tick@16,leave@100,tick@180,enter@200,tick@600");

        assert!(transitions.iter().skip(1).all(|t| t.to != "closed"));
        assert_eq!(transitions.last().map(|t| t.to), Some("open"));
    }

    #[test]
    fn contract_leaving_for_good_closes_after_the_delay() {
        let transitions = replay("enter@0,tick@16,leave@100,tick@249,tick@250");
        let states: Vec<&str> = transitions.iter().map(|t| t.to).collect();
        assert_eq!(states, vec!["opening", "open", "closing", "closing", "closed"]);
    }
}

/// CONTRACT HOVER-002: an expired close fires before the pointer returns
mod late_return {
    use super::*;

    #[test]
    fn contract_reentry_after_deadline_reopens_from_closed() {
        let transitions = replay("enter@0,tick@10,leave@20,enter@500");

        let implicit: Vec<_> = transitions.iter().filter(|t| t.implicit).collect();
        assert_eq!(implicit.len(), 1);
        assert_eq!(implicit[0].to, "closed");
        assert_eq!(transitions.last().map(|t| (t.from, t.to)), Some(("closed", "opening")));
    }
}
