//! Static alias tables: the process-lifetime vocabulary behind the
//! token recognizers.
//!
//! Keys are lowercase aliases, values are the canonical display form
//! used everywhere downstream (sheet comparison, titles, errors).

use std::collections::HashMap;

use combo_parse::Vocabulary;

/// Alias tables built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct StaticVocabulary {
    maps: HashMap<&'static str, &'static str>,
    towers: HashMap<&'static str, &'static str>,
    heroes: HashMap<&'static str, &'static str>,
}

impl StaticVocabulary {
    pub fn new() -> StaticVocabulary {
        let maps = HashMap::from([
            ("monkey_meadow", "Monkey Meadow"),
            ("mm", "Monkey Meadow"),
            ("town_center", "Town Center"),
            ("tc", "Town Center"),
            ("in_the_loop", "In The Loop"),
            ("itl", "In The Loop"),
            ("cube", "Cube"),
            ("logs", "Logs"),
            ("frozen_over", "Frozen Over"),
            ("fo", "Frozen Over"),
            ("cubism", "Cubism"),
            ("four_circles", "Four Circles"),
            ("hedge", "Hedge"),
            ("end_of_the_road", "End Of The Road"),
            ("eotr", "End Of The Road"),
            ("dark_castle", "Dark Castle"),
            ("dc", "Dark Castle"),
            ("muddy_puddles", "Muddy Puddles"),
            ("mp", "Muddy Puddles"),
            ("ouch", "Ouch"),
        ]);

        let towers = HashMap::from([
            ("dch", "Dark Champion"),
            ("dark_champion", "Dark Champion"),
            ("djin", "Druid of the Jungle"),
            ("jungle_druid", "Druid of the Jungle"),
            ("subc", "Sub Commander"),
            ("sub_commander", "Sub Commander"),
            ("smines", "Spiked Mines"),
            ("spiked_mines", "Spiked Mines"),
            ("pspike", "Permaspike"),
            ("permaspike", "Permaspike"),
            ("glord", "Glaive Lord"),
            ("glaive_lord", "Glaive Lord"),
            ("pmfc", "Plasma Monkey Fan Club"),
            ("bmoab", "Bloon Master Alchemist"),
            ("bma", "Bloon Master Alchemist"),
            ("flying_fortress", "Flying Fortress"),
            ("ff", "Flying Fortress"),
        ]);

        let heroes = HashMap::from([
            ("quincy", "Quincy"),
            ("gwen", "Gwendolin"),
            ("gwendolin", "Gwendolin"),
            ("striker", "Striker Jones"),
            ("striker_jones", "Striker Jones"),
            ("obyn", "Obyn"),
            ("churchill", "Captain Churchill"),
            ("chu", "Captain Churchill"),
            ("ben", "Benjamin"),
            ("benjamin", "Benjamin"),
            ("ezili", "Ezili"),
            ("pat", "Pat Fusty"),
            ("pat_fusty", "Pat Fusty"),
            ("adora", "Adora"),
            ("brickell", "Admiral Brickell"),
            ("etienne", "Etienne"),
            ("eti", "Etienne"),
            ("sauda", "Sauda"),
            ("psi", "Psi"),
        ]);

        StaticVocabulary {
            maps,
            towers,
            heroes,
        }
    }
}

impl Default for StaticVocabulary {
    fn default() -> Self {
        StaticVocabulary::new()
    }
}

impl Vocabulary for StaticVocabulary {
    fn canonical_map(&self, raw: &str) -> Option<String> {
        self.maps
            .get(raw.to_lowercase().as_str())
            .map(|s| s.to_string())
    }

    fn canonical_tower(&self, raw: &str) -> Option<String> {
        self.towers
            .get(raw.to_lowercase().as_str())
            .map(|s| s.to_string())
    }

    fn canonical_hero(&self, raw: &str) -> Option<String> {
        self.heroes
            .get(raw.to_lowercase().as_str())
            .map(|s| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_case_insensitive() {
        let vocab = StaticVocabulary::new();
        assert_eq!(vocab.canonical_map("CUBE").as_deref(), Some("Cube"));
        assert_eq!(vocab.canonical_hero("Obyn").as_deref(), Some("Obyn"));
        assert_eq!(
            vocab.canonical_tower("dch").as_deref(),
            Some("Dark Champion")
        );
    }

    #[test]
    fn unknown_names_miss() {
        let vocab = StaticVocabulary::new();
        assert_eq!(vocab.canonical_map("atlantis"), None);
        assert_eq!(vocab.canonical_tower("44"), None);
    }
}
