//! Game Loop State Machine
//!
//! Tracks the process lifecycle: resource acquisition, the frame loop and shutdown.

/// Lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Initializing,
    Running,
    ShuttingDown,
    Failed,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Acquired,
    AcquireFailed,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: LoopState,
    pub to_state: LoopState,
    pub action: LoopAction,
}

/// Game loop finite state machine
#[derive(Debug)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Initializing,
        }
    }

    /// Get current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: LoopAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Initializing, LoopAction::Acquired) => Some(LoopState::Running),
            (LoopState::Initializing, LoopAction::AcquireFailed) => Some(LoopState::Failed),
            (LoopState::Running, LoopAction::Quit) => Some(LoopState::ShuttingDown),

            // ShuttingDown and Failed are terminal
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Whether the event loop should stop iterating
    pub fn is_finished(&self) -> bool {
        matches!(self.state, LoopState::ShuttingDown | LoopState::Failed)
    }

    /// Process exit status once the loop has finished
    pub fn exit_code(&self) -> Option<u8> {
        match self.state {
            LoopState::ShuttingDown => Some(0),
            LoopState::Failed => Some(1),
            LoopState::Initializing | LoopState::Running => None,
        }
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}
