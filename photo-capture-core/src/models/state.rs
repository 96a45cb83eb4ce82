/// Capture session state machine.
///
/// State transitions:
/// ```text
/// idle → capturing → composited → idle
/// ```
/// A new cycle overwrites the prior artifact. There is no explicit error
/// state distinct from idle: a failed cycle reports and returns to idle
/// with the prior artifact, if any, left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Capturing,
    Composited,
}

impl SessionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self, Self::Capturing)
    }

    pub fn is_composited(&self) -> bool {
        matches!(self, Self::Composited)
    }
}
