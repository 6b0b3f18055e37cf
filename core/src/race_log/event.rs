/// One raw record from the race log, fields split but not yet interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceEvent {
    pub line_number: u64,
    /// Timestamp as written in the log, brackets included: `[HH:MM:SS.mmm]`.
    pub raw_time: String,
    pub kind_id: u32,
    pub competitor_id: u32,
    /// Present only for kinds that carry an extra parameter (2, 5, 6, 11).
    pub extra: Option<String>,
}

impl RaceEvent {
    pub fn new(raw_time: &str, kind_id: u32, competitor_id: u32) -> Self {
        Self {
            raw_time: raw_time.to_string(),
            kind_id,
            competitor_id,
            ..Default::default()
        }
    }

    pub fn with_extra(mut self, extra: &str) -> Self {
        self.extra = Some(extra.to_string());
        self
    }

    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_id(self.kind_id)
    }

    pub fn extra_param(&self) -> &str {
        self.extra.as_deref().unwrap_or_default()
    }

    /// The timestamp with its surrounding brackets removed.
    pub fn clock_str(&self) -> &str {
        let s = self.raw_time.as_str();
        s.strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(s)
    }
}

/// Incoming event kinds, numbered as in the organizer's log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Registered,
    StartTimeDrawn,
    OnStartLine,
    Started,
    EnteredFiringRange,
    TargetHit,
    LeftFiringRange,
    EnteredPenaltyLoop,
    LeftPenaltyLoop,
    EndedMainLap,
    CannotContinue,
}

impl EventKind {
    pub fn from_id(id: u32) -> Option<Self> {
        let kind = match id {
            1 => Self::Registered,
            2 => Self::StartTimeDrawn,
            3 => Self::OnStartLine,
            4 => Self::Started,
            5 => Self::EnteredFiringRange,
            6 => Self::TargetHit,
            7 => Self::LeftFiringRange,
            8 => Self::EnteredPenaltyLoop,
            9 => Self::LeftPenaltyLoop,
            10 => Self::EndedMainLap,
            11 => Self::CannotContinue,
            _ => return None,
        };
        Some(kind)
    }

    #[cfg(test)]
    pub fn id(self) -> u32 {
        match self {
            Self::Registered => 1,
            Self::StartTimeDrawn => 2,
            Self::OnStartLine => 3,
            Self::Started => 4,
            Self::EnteredFiringRange => 5,
            Self::TargetHit => 6,
            Self::LeftFiringRange => 7,
            Self::EnteredPenaltyLoop => 8,
            Self::LeftPenaltyLoop => 9,
            Self::EndedMainLap => 10,
            Self::CannotContinue => 11,
        }
    }

    /// Whether the log line carries an extra parameter after the competitor ID.
    pub fn takes_extra(self) -> bool {
        matches!(
            self,
            Self::StartTimeDrawn | Self::EnteredFiringRange | Self::TargetHit | Self::CannotContinue
        )
    }

    /// Free-text extras run to the end of the line instead of a single token.
    pub fn extra_is_free_text(self) -> bool {
        self == Self::CannotContinue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ids_round_trip() {
        for id in 1..=11 {
            assert_eq!(EventKind::from_id(id).map(EventKind::id), Some(id));
        }
        assert_eq!(EventKind::from_id(0), None);
        assert_eq!(EventKind::from_id(12), None);
    }

    #[test]
    fn test_extra_kinds() {
        let with_extra: Vec<u32> = (1..=11)
            .filter_map(EventKind::from_id)
            .filter(|k| k.takes_extra())
            .map(EventKind::id)
            .collect();
        assert_eq!(with_extra, vec![2, 5, 6, 11]);
    }

    #[test]
    fn test_clock_str() {
        assert_eq!(RaceEvent::new("[10:00:00.000]", 1, 1).clock_str(), "10:00:00.000");
        assert_eq!(RaceEvent::new("10:00:00.000", 1, 1).clock_str(), "10:00:00.000");
        assert_eq!(RaceEvent::new("[", 1, 1).clock_str(), "[");
    }
}
