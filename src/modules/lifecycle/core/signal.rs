use std::fmt;

/// Termination signals the service reacts to. Both kinds run the same shutdown policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// SIGINT, usually an operator pressing Ctrl-C.
    Interrupt,
    /// SIGTERM, usually sent by an orchestrator.
    Terminate,
}

impl SignalKind {
    pub fn number(self) -> i32 {
        match self {
            SignalKind::Interrupt => 2,
            SignalKind::Terminate => 15,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Interrupt => "SIGINT",
            SignalKind::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
