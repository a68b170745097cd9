//! Rule-based reply selection for the confession bot.
//!
//! A reply is chosen in two steps: [`Responder::should_respond`] decides
//! whether to answer at all, then [`Responder::select`] picks a pool (mood,
//! then content theme, then generic) and draws one line from it uniformly.

pub mod pools;

use rand::Rng;
use regex::RegexSet;

pub const BOT_NAME: &str = "Confessor Bot";

/// Chance of answering a confession whose mood is not a priority mood.
pub const DEFAULT_RESPONSE_RATE: f64 = 0.3;

/// Moods that are always answered.
pub const PRIORITY_MOODS: [&str; 4] = ["anxious", "ashamed", "frustrated", "confused"];

/// Content themes in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Food,
    Work,
    Relationships,
    Family,
    Money,
    Health,
}

impl Theme {
    const ALL: [Theme; 6] = [
        Theme::Food,
        Theme::Work,
        Theme::Relationships,
        Theme::Family,
        Theme::Money,
        Theme::Health,
    ];

    fn pattern(self) -> &'static str {
        match self {
            Theme::Food => r"(?i)(food|eat|pizza|snack|cook|meal|hungry)",
            Theme::Work => r"(?i)(work|job|boss|career|office|interview)",
            Theme::Relationships => r"(?i)(relationship|partner|boyfriend|girlfriend|dating|love)",
            Theme::Family => r"(?i)(family|mom|dad|parent|sibling|brother|sister)",
            Theme::Money => r"(?i)(money|financial|debt|expensive|poor|rich)",
            Theme::Health => r"(?i)(health|sick|doctor|medical|exercise|fitness)",
        }
    }

    pub fn replies(self) -> &'static [&'static str] {
        match self {
            Theme::Food => pools::FOOD,
            Theme::Work => pools::WORK,
            Theme::Relationships => pools::RELATIONSHIPS,
            Theme::Family => pools::FAMILY,
            Theme::Money => pools::MONEY,
            Theme::Health => pools::HEALTH,
        }
    }
}

/// Which pool a reply was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Mood(&'static str),
    Theme(Theme),
    Generic,
}

impl Pool {
    pub fn replies(self) -> &'static [&'static str] {
        match self {
            Pool::Mood(name) => mood_replies(name).unwrap_or(pools::GENERIC),
            Pool::Theme(theme) => theme.replies(),
            Pool::Generic => pools::GENERIC,
        }
    }
}

pub struct Responder {
    response_rate: f64,
    themes: RegexSet,
}

impl Responder {
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_response_rate(DEFAULT_RESPONSE_RATE)
    }

    pub fn with_response_rate(response_rate: f64) -> Result<Self, regex::Error> {
        let themes = RegexSet::new(Theme::ALL.iter().map(|t| t.pattern()))?;
        Ok(Self {
            response_rate: response_rate.clamp(0.0, 1.0),
            themes,
        })
    }

    pub fn response_rate(&self) -> f64 {
        self.response_rate
    }

    /// Priority moods always get an answer; anything else only when `draw`
    /// (uniform in `[0, 1)`) falls below the response rate.
    pub fn should_respond(&self, mood: Option<&str>, draw: f64) -> bool {
        if normalize_mood(mood).is_some_and(|m| PRIORITY_MOODS.contains(&m.as_str())) {
            return true;
        }
        draw < self.response_rate
    }

    /// First theme whose keywords occur anywhere in `text`.
    pub fn detect_theme(&self, text: &str) -> Option<Theme> {
        self.themes
            .matches(text)
            .iter()
            .next()
            .map(|idx| Theme::ALL[idx])
    }

    pub fn pool_for(&self, mood: Option<&str>, text: &str) -> Pool {
        if let Some(name) = normalize_mood(mood).and_then(|m| known_mood(&m)) {
            return Pool::Mood(name);
        }
        match self.detect_theme(text) {
            Some(theme) => Pool::Theme(theme),
            None => Pool::Generic,
        }
    }

    pub fn select<R: Rng + ?Sized>(&self, mood: Option<&str>, text: &str, rng: &mut R) -> &'static str {
        let replies = self.pool_for(mood, text).replies();
        replies[rng.random_range(0..replies.len())]
    }

    /// Full decision: `None` when the bot stays quiet.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        mood: Option<&str>,
        text: &str,
        rng: &mut R,
    ) -> Option<&'static str> {
        let draw: f64 = rng.random();
        if !self.should_respond(mood, draw) {
            return None;
        }
        Some(self.select(mood, text, rng))
    }
}

fn normalize_mood(mood: Option<&str>) -> Option<String> {
    mood.map(|m| m.trim().to_lowercase()).filter(|m| !m.is_empty())
}

fn known_mood(mood: &str) -> Option<&'static str> {
    pools::MOODS
        .iter()
        .find(|(name, _)| *name == mood)
        .map(|(name, _)| *name)
}

fn mood_replies(mood: &str) -> Option<&'static [&'static str]> {
    pools::MOODS
        .iter()
        .find(|(name, _)| *name == mood)
        .map(|(_, replies)| *replies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn responder() -> Responder {
        Responder::new().unwrap()
    }

    #[test]
    fn priority_moods_always_answer() {
        let r = responder();
        for mood in PRIORITY_MOODS {
            assert!(r.should_respond(Some(mood), 0.999));
        }
        assert!(r.should_respond(Some("  Anxious "), 0.999));
        assert!(r.should_respond(Some("ASHAMED"), 0.999));
    }

    #[test]
    fn other_moods_answer_only_below_rate() {
        let r = responder();
        for mood in [None, Some(""), Some("guilty"), Some("bored")] {
            assert!(r.should_respond(mood, 0.0));
            assert!(r.should_respond(mood, 0.299));
            assert!(!r.should_respond(mood, 0.3));
            assert!(!r.should_respond(mood, 0.31));
            assert!(!r.should_respond(mood, 0.99));
        }
    }

    #[test]
    fn response_rate_is_clamped() {
        assert_eq!(Responder::with_response_rate(1.7).unwrap().response_rate(), 1.0);
        assert_eq!(Responder::with_response_rate(-0.2).unwrap().response_rate(), 0.0);
        let never = Responder::with_response_rate(0.0).unwrap();
        assert!(!never.should_respond(Some("guilty"), 0.0));
    }

    #[test]
    fn mood_beats_theme_beats_generic() {
        let r = responder();
        assert_eq!(r.pool_for(Some("Guilty"), "I ate the last pizza"), Pool::Mood("guilty"));
        assert_eq!(r.pool_for(Some("sleepy"), "I ate the last pizza"), Pool::Theme(Theme::Food));
        assert_eq!(r.pool_for(None, "my boss yelled at me"), Pool::Theme(Theme::Work));
        assert_eq!(r.pool_for(None, "I talk to my plants"), Pool::Generic);
    }

    #[test]
    fn theme_order_and_substring_matching() {
        let r = responder();
        // "cook" (food) wins over "job" (work) by category order
        assert_eq!(r.detect_theme("my job is to cook"), Some(Theme::Food));
        assert_eq!(r.detect_theme("My MOM called"), Some(Theme::Family));
        assert_eq!(r.detect_theme("that was a great idea"), Some(Theme::Food));
        assert_eq!(r.detect_theme("saw the DOCTOR today"), Some(Theme::Health));
        assert_eq!(r.detect_theme("so much debt"), Some(Theme::Money));
        assert_eq!(r.detect_theme("my girlfriend left"), Some(Theme::Relationships));
        assert_eq!(r.detect_theme("nothing to see"), None);
    }

    #[test]
    fn selection_comes_from_the_chosen_pool() {
        let r = responder();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let reply = r.select(Some("relieved"), "", &mut rng);
            assert!(Pool::Mood("relieved").replies().contains(&reply));
            let reply = r.select(None, "spent all my money", &mut rng);
            assert!(pools::MONEY.contains(&reply));
            let reply = r.select(None, "hello", &mut rng);
            assert!(pools::GENERIC.contains(&reply));
        }
    }

    #[test]
    fn selection_reaches_every_line() {
        let r = responder();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(r.select(None, "nothing here", &mut rng));
        }
        assert_eq!(seen.len(), pools::GENERIC.len());
    }

    #[test]
    fn respond_always_answers_priority_mood() {
        let r = responder();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(r.respond(Some("confused"), "what now", &mut rng).is_some());
        }
    }

    #[test]
    fn respond_rate_is_roughly_thirty_percent() {
        let r = responder();
        let mut rng = StdRng::seed_from_u64(99);
        let hits = (0..10_000)
            .filter(|_| r.respond(Some("hopeful"), "", &mut rng).is_some())
            .count();
        assert!((2_500..3_500).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn every_mood_pool_is_populated() {
        for (name, replies) in pools::MOODS {
            assert!(!replies.is_empty(), "{name} has no replies");
        }
        assert_eq!(pools::MOODS.len(), 10);
    }
}
