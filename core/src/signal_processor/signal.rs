use std::fmt;

/// Something that happened to a competitor, at the raw log timestamp.
///
/// `Display` renders the narrative line: `"<raw_time> <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceSignal {
    pub raw_time: String,
    pub competitor_id: u32,
    pub kind: SignalKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalKind {
    // Before the start
    Registered,
    StartTimeDrawn { start: String },
    OnStartLine,
    Disqualified,
    Started,

    // Firing range
    OnFiringRange { range: String },
    TargetHit { target: String },
    LeftFiringRange,

    // Penalty loop
    EnteredPenaltyLoop,
    LeftPenaltyLoop,

    // Laps and outcome
    EndedMainLap,
    Finished,
    CannotContinue { reason: String },
}

impl RaceSignal {
    pub fn new(raw_time: &str, competitor_id: u32, kind: SignalKind) -> Self {
        Self {
            raw_time: raw_time.to_string(),
            competitor_id,
            kind,
        }
    }
}

impl fmt::Display for RaceSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (t, id) = (&self.raw_time, self.competitor_id);
        match &self.kind {
            SignalKind::Registered => write!(f, "{t} The competitor({id}) registered"),
            SignalKind::StartTimeDrawn { start } => write!(
                f,
                "{t} The start time for the competitor({id}) was set by a draw to {start}"
            ),
            SignalKind::OnStartLine => write!(f, "{t} The competitor({id}) is on the start line"),
            SignalKind::Disqualified => write!(f, "{t} The competitor({id}) is disqualified"),
            SignalKind::Started => write!(f, "{t} The competitor({id}) has started"),
            SignalKind::OnFiringRange { range } => {
                write!(f, "{t} The competitor({id}) is on the firing range({range})")
            }
            SignalKind::TargetHit { target } => {
                write!(f, "{t} The target({target}) has been hit by competitor({id})")
            }
            SignalKind::LeftFiringRange => {
                write!(f, "{t} The competitor({id}) left the firing range")
            }
            SignalKind::EnteredPenaltyLoop => {
                write!(f, "{t} The competitor({id}) entered the penalty laps")
            }
            SignalKind::LeftPenaltyLoop => {
                write!(f, "{t} The competitor({id}) left the penalty laps")
            }
            SignalKind::EndedMainLap => write!(f, "{t} The competitor({id}) ended the main lap"),
            SignalKind::Finished => write!(f, "{t} The competitor({id}) has finished"),
            SignalKind::CannotContinue { reason } => {
                write!(f, "{t} The competitor({id}) can`t continue: {reason}")
            }
        }
    }
}
