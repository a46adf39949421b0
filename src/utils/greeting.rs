// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Time-of-day greeting.

use chrono::{Local, Timelike};

pub const MORNING: &str = "Good morning!";
pub const AFTERNOON: &str = "Good afternoon!";
pub const EVENING: &str = "Good evening!";

/// Greeting for the current local hour.
pub fn get_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

/// Morning is `[5, 12)`, afternoon `[12, 17)`, everything else evening.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => MORNING,
        12..=16 => AFTERNOON,
        _ => EVENING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Boundaries belong to the later period.
    #[test]
    fn hour_boundaries() {
        assert_eq!(greeting_for_hour(4), EVENING);
        assert_eq!(greeting_for_hour(5), MORNING);
        assert_eq!(greeting_for_hour(11), MORNING);
        assert_eq!(greeting_for_hour(12), AFTERNOON);
        assert_eq!(greeting_for_hour(16), AFTERNOON);
        assert_eq!(greeting_for_hour(17), EVENING);
        assert_eq!(greeting_for_hour(0), EVENING);
    }

    // The live greeting is always one of the three fixed strings.
    #[test]
    fn current_greeting_is_known() {
        assert!([MORNING, AFTERNOON, EVENING].contains(&get_greeting()));
    }
}
