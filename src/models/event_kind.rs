use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Counting down to today's (or tomorrow's) imsak.
    Sahur,
    /// Counting down to today's akşam.
    Iftar,
    /// Before the first day of the period.
    RamadanStarts,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Sahur => "sahur",
            EventKind::Iftar => "iftar",
            EventKind::RamadanStarts => "ramadan_starts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Sahur => "Sahur",
            EventKind::Iftar => "İftar",
            EventKind::RamadanStarts => "Ramazan Başlıyor",
        }
    }

    /// Countdown heading.
    pub fn title(&self) -> &'static str {
        match self {
            EventKind::Sahur => "Sahura Kalan Süre",
            EventKind::Iftar => "İftara Kalan Süre",
            EventKind::RamadanStarts => "Ramazana Kalan Süre",
        }
    }

    /// Label of the time row this event counts down to.
    pub fn target_time_label(&self) -> &'static str {
        match self {
            EventKind::Sahur | EventKind::RamadanStarts => "İmsak",
            EventKind::Iftar => "Akşam",
        }
    }
}
