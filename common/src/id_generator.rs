use crate::games::SessionRng;
use crate::identifiers::SessionId;

const ADJECTIVES: &[&str] = &[
    "Quiet", "Sharp", "Lucky", "Patient", "Stubborn", "Careful", "Daring", "Steady",
    "Sleepy", "Curious", "Tidy", "Restless", "Cheerful", "Grumpy", "Humble", "Eager",
];

const NOUNS: &[&str] = &[
    "Grid", "Corner", "Edge", "Center", "Diagonal", "Column", "Row", "Square",
    "Cross", "Nought", "Board", "Line", "Fork", "Block", "Stalemate", "Gambit",
];

/// Human-friendly session name, drawn from the session's own generator so a
/// seeded session always gets the same name.
pub fn generate_session_id(rng: &mut SessionRng) -> SessionId {
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    SessionId::new(format!("{} {}", adjective, noun))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_name() {
        let first = generate_session_id(&mut SessionRng::new(7));
        let second = generate_session_id(&mut SessionRng::new(7));
        assert_eq!(first, second);
        assert_eq!(first.as_str().split(' ').count(), 2);
    }
}
