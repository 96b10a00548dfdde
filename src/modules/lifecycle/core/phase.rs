// Shutdown state machine.
//
// Idle -> ShuttingDown on the first termination signal.
// ShuttingDown -> Terminated once the stop/timer race has a winner.
// Terminated is absorbing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShutdownPhase {
    Idle = 0,
    ShuttingDown = 1,
    Terminated = 2,
}

impl ShutdownPhase {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(raw: u8) -> Self {
        match raw {
            0 => ShutdownPhase::Idle,
            1 => ShutdownPhase::ShuttingDown,
            _ => ShutdownPhase::Terminated,
        }
    }
}
