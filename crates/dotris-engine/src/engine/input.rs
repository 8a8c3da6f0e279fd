use arrayvec::ArrayVec;

/// Discrete key-down actions, processed once per press in queue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Rotate the falling piece clockwise.
    Rotate,
    /// Drop the falling piece to the bottom and lock it.
    HardDrop,
}

/// One tick's worth of input: a snapshot of held directions plus the edge
/// events that arrived since the previous tick.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Left direction held this frame.
    pub left: bool,
    /// Right direction held this frame.
    pub right: bool,
    /// Soft-drop (down) held this frame.
    pub soft_drop: bool,
    /// Edge-triggered actions, in arrival order.
    pub actions: ArrayVec<InputAction, 4>,
}

impl FrameInput {
    /// Input frame with nothing held and no actions.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }
}
