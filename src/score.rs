use serde::{Deserialize, Serialize};

/// Tramo de resultado; la UI decide qué imagen/insignia corresponde a cada uno.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Tier {
    Tier20,
    Tier40,
    Tier60,
    Tier80,
    Tier100,
}

const THRESHOLDS: [(u8, Tier); 4] = [
    (20, Tier::Tier20),
    (40, Tier::Tier40),
    (60, Tier::Tier60),
    (80, Tier::Tier80),
];

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Tier20 => "tier20",
            Tier::Tier40 => "tier40",
            Tier::Tier60 => "tier60",
            Tier::Tier80 => "tier80",
            Tier::Tier100 => "tier100",
        }
    }
}

/// Primer umbral con `percent <= umbral`; por encima de 80, `Tier100`
pub fn classify(percent: u8) -> Tier {
    THRESHOLDS
        .iter()
        .find(|(limit, _)| percent <= *limit)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::Tier100)
}

/// `round(100 * score / total)` redondeando medios hacia arriba; 0 si no hay preguntas
pub fn score_percent(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total);
    ((200 * score + total) / (2 * total)) as u8
}
