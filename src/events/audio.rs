use bevy_ecs::message::Message;

/// Commands sent *to* the host's audio backend.
///
/// Playback itself is the host's job; controllers only describe what should
/// happen to a clip.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    Play { id: String, looped: bool },
    Stop { id: String },
    Volume { id: String, vol: f32 },
}
