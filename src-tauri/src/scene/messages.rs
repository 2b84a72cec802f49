use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::scene::error::SceneError;

/// Commands the host posts into the game frame.
///
/// The wire format is the bare string (`"pause"`, `"play"`, ...); the game
/// frame consumes them straight off its message listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneCommand {
    Mute,
    Unmute,
    Pause,
    Play,
    Replay,
}

impl SceneCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneCommand::Mute => "mute",
            SceneCommand::Unmute => "unmute",
            SceneCommand::Pause => "pause",
            SceneCommand::Play => "play",
            SceneCommand::Replay => "replay",
        }
    }
}

impl fmt::Display for SceneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named callbacks the game frame sends back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMessage {
    Loaded,
    ShowControls,
    HideControls,
    ShowPlay,
    HidePlay,
    ShowPause,
    HidePause,
    ShowMute,
    HideMute,
    ShowUnmute,
    HideUnmute,
}

impl SceneMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneMessage::Loaded => "loaded",
            SceneMessage::ShowControls => "show-controls",
            SceneMessage::HideControls => "hide-controls",
            SceneMessage::ShowPlay => "show-play",
            SceneMessage::HidePlay => "hide-play",
            SceneMessage::ShowPause => "show-pause",
            SceneMessage::HidePause => "hide-pause",
            SceneMessage::ShowMute => "show-mute",
            SceneMessage::HideMute => "hide-mute",
            SceneMessage::ShowUnmute => "show-unmute",
            SceneMessage::HideUnmute => "hide-unmute",
        }
    }
}

impl FromStr for SceneMessage {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loaded" => Ok(SceneMessage::Loaded),
            "show-controls" => Ok(SceneMessage::ShowControls),
            "hide-controls" => Ok(SceneMessage::HideControls),
            "show-play" => Ok(SceneMessage::ShowPlay),
            "hide-play" => Ok(SceneMessage::HidePlay),
            "show-pause" => Ok(SceneMessage::ShowPause),
            "hide-pause" => Ok(SceneMessage::HidePause),
            "show-mute" => Ok(SceneMessage::ShowMute),
            "hide-mute" => Ok(SceneMessage::HideMute),
            "show-unmute" => Ok(SceneMessage::ShowUnmute),
            "hide-unmute" => Ok(SceneMessage::HideUnmute),
            other => Err(SceneError::UnknownMessage(other.to_string())),
        }
    }
}

impl fmt::Display for SceneMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_strings() {
        assert_eq!(SceneCommand::Pause.as_str(), "pause");
        assert_eq!(SceneCommand::Play.as_str(), "play");
        assert_eq!(SceneCommand::Replay.as_str(), "replay");
        assert_eq!(SceneCommand::Mute.to_string(), "mute");
        assert_eq!(SceneCommand::Unmute.to_string(), "unmute");
    }

    #[test]
    fn test_command_serializes_to_bare_string() {
        let json = serde_json::to_string(&SceneCommand::Pause).unwrap();
        assert_eq!(json, "\"pause\"");
    }

    #[test]
    fn test_message_parse() {
        assert_eq!("loaded".parse::<SceneMessage>().unwrap(), SceneMessage::Loaded);
        assert_eq!(
            "show-controls".parse::<SceneMessage>().unwrap(),
            SceneMessage::ShowControls
        );
        assert_eq!(
            "hide-pause".parse::<SceneMessage>().unwrap(),
            SceneMessage::HidePause
        );
    }

    #[test]
    fn test_message_parse_is_exact() {
        // No trimming, no case folding
        assert!("Loaded".parse::<SceneMessage>().is_err());
        assert!(" show-controls".parse::<SceneMessage>().is_err());
    }

    #[test]
    fn test_unknown_message_is_an_error() {
        let err = "explode".parse::<SceneMessage>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scene message: explode");
    }
}
