//! Event kinds, payloads, and the immutable event envelope.
//!
//! Every message that flows through the [`EventQueue`](super::event_queue::EventQueue)
//! is an [`EventMessage`]: a closed [`EventKind`] tag plus an [`EventArgs`]
//! payload.  Inbound kinds are produced from decoded server packets; derived
//! kinds are published by handlers after they mutate state.

use ab_core::protocol::messages::{
    ChatPublicPacket, PlayerLeavePacket, PlayerMotionPacket, PlayerNewPacket, ScoreUpdatePacket,
};
use ab_core::PlayerId;

/// Closed set of semantic event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    // Inbound protocol notifications
    PlayerNew,
    PlayerLeave,
    PlayerUpdate,
    PlayerBounce,
    ScoreUpdate,
    ChatPublic,
    // Derived domain events
    PlayerAdded,
    PlayerRemoved,
    PlayerChange,
    ChatMessage,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 10] = [
        EventKind::PlayerNew,
        EventKind::PlayerLeave,
        EventKind::PlayerUpdate,
        EventKind::PlayerBounce,
        EventKind::ScoreUpdate,
        EventKind::ChatPublic,
        EventKind::PlayerAdded,
        EventKind::PlayerRemoved,
        EventKind::PlayerChange,
        EventKind::ChatMessage,
    ];

    /// Returns `true` for kinds that handlers publish rather than the server.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            EventKind::PlayerAdded
                | EventKind::PlayerRemoved
                | EventKind::PlayerChange
                | EventKind::ChatMessage
        )
    }
}

/// Payload of the derived player events.
///
/// Carries the id of a player in the live [`GameState`](ab_core::GameState),
/// not a copy: a consumer resolves the id when it runs and sees the current
/// values.  Consumers that need a snapshot clone the `Player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerArgs {
    pub player_id: PlayerId,
}

/// Chat channel a [`ChatArgs`] line was sent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatType {
    Public,
}

/// Payload of [`EventKind::ChatMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatArgs {
    pub player_id: PlayerId,
    pub chat_type: ChatType,
    pub chat_message: String,
}

/// Kind-specific payload.  Handlers narrow it to the variant they expect.
#[derive(Debug, Clone, PartialEq)]
pub enum EventArgs {
    PlayerNew(PlayerNewPacket),
    PlayerLeave(PlayerLeavePacket),
    /// Shared by [`EventKind::PlayerUpdate`] and [`EventKind::PlayerBounce`].
    Motion(PlayerMotionPacket),
    ScoreUpdate(ScoreUpdatePacket),
    ChatPublic(ChatPublicPacket),
    /// Shared by the derived player events.
    Player(PlayerArgs),
    Chat(ChatArgs),
}

impl EventArgs {
    /// Short variant name, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            EventArgs::PlayerNew(_) => "PlayerNew",
            EventArgs::PlayerLeave(_) => "PlayerLeave",
            EventArgs::Motion(_) => "Motion",
            EventArgs::ScoreUpdate(_) => "ScoreUpdate",
            EventArgs::ChatPublic(_) => "ChatPublic",
            EventArgs::Player(_) => "Player",
            EventArgs::Chat(_) => "Chat",
        }
    }
}

/// Immutable envelope pairing an [`EventKind`] with its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMessage {
    kind: EventKind,
    args: EventArgs,
}

impl EventMessage {
    pub fn new(kind: EventKind, args: EventArgs) -> Self {
        Self { kind, args }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn args(&self) -> &EventArgs {
        &self.args
    }
}
