//! Per-node UI affordance state machine.
//!
//! A node rests at `Idle`; hovering reveals its action buttons, from which
//! exactly one action can run at a time. Completion or cancellation returns
//! the node to `Idle`. The detail-disclosure toggle (`collapsed`) is
//! independent of the action state.

/// The action a node's UI is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeAction {
    #[default]
    Idle,
    /// Pointer over the node; action buttons visible.
    Hovered,
    Editing,
    AddingRelation,
    Deleting,
}

/// UI state for a single person node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeUiState {
    action: NodeAction,
    collapsed: bool,
}

impl NodeUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(&self) -> NodeAction {
        self.action
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Pointer entered the node. Only meaningful at rest; an in-flight
    /// action keeps its state.
    pub fn hover(&mut self) {
        if self.action == NodeAction::Idle {
            self.action = NodeAction::Hovered;
        }
    }

    /// Pointer left the node without starting an action.
    pub fn unhover(&mut self) {
        if self.action == NodeAction::Hovered {
            self.action = NodeAction::Idle;
        }
    }

    /// Start editing. Returns `false` (and stays put) unless the node's
    /// actions are visible.
    pub fn begin_editing(&mut self) -> bool {
        self.begin(NodeAction::Editing)
    }

    /// Start the add-relation flow.
    pub fn begin_adding_relation(&mut self) -> bool {
        self.begin(NodeAction::AddingRelation)
    }

    /// Start the delete confirmation flow.
    pub fn begin_deleting(&mut self) -> bool {
        self.begin(NodeAction::Deleting)
    }

    /// The in-flight action completed or was cancelled; back to rest.
    pub fn finish(&mut self) {
        self.action = NodeAction::Idle;
    }

    /// Flip the detail disclosure, regardless of action state.
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    fn begin(&mut self, action: NodeAction) -> bool {
        if self.action == NodeAction::Hovered {
            self.action = action;
            true
        } else {
            false
        }
    }
}
