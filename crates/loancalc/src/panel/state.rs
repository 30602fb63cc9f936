use crate::data::Room;
use crate::i18n::Message;
use crate::preferences::Locale;

/// An error shown under the room list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// One of our own messages, rendered in whatever locale is active.
    Localized(Message),
    /// A message the server sent, shown verbatim.
    Server(String),
}

impl PanelError {
    pub fn text(&self, locale: Locale) -> String {
        match self {
            PanelError::Localized(message) => message.text(locale).to_string(),
            PanelError::Server(message) => message.clone(),
        }
    }
}

/// Transient view state of the rooms panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub rooms: Vec<Room>,
    /// Text of the join input.
    pub room_code: String,
    pub error: Option<PanelError>,
    /// Code most recently copied, cleared again after the indicator timeout.
    pub copied_code: Option<String>,
    pub leave_candidate: Option<Room>,
    pub leave_dialog_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    RoomsLoaded(Vec<Room>),
    SetRoomCode(String),
    ClearRoomCode,
    SetError(PanelError),
    ClearError,
    Copied(String),
    /// Clears the indicator, unless a newer copy replaced the code meanwhile.
    CopyExpired(String),
    OpenLeaveDialog(Room),
    CloseLeaveDialog,
    ClearLeaveCandidate,
}

impl PanelState {
    pub fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::RoomsLoaded(rooms) => {
                self.rooms = rooms;
                if self.error == Some(PanelError::Localized(Message::LoadFailed)) {
                    self.error = None;
                }
            }
            PanelAction::SetRoomCode(code) => self.room_code = code,
            PanelAction::ClearRoomCode => self.room_code.clear(),
            PanelAction::SetError(error) => self.error = Some(error),
            PanelAction::ClearError => self.error = None,
            PanelAction::Copied(code) => self.copied_code = Some(code),
            PanelAction::CopyExpired(code) => {
                if self.copied_code.as_deref() == Some(code.as_str()) {
                    self.copied_code = None;
                }
            }
            PanelAction::OpenLeaveDialog(room) => {
                self.leave_candidate = Some(room);
                self.leave_dialog_open = true;
            }
            PanelAction::CloseLeaveDialog => self.leave_dialog_open = false,
            PanelAction::ClearLeaveCandidate => self.leave_candidate = None,
        }
    }

    pub fn is_copied(&self, code: &str) -> bool {
        self.copied_code.as_deref() == Some(code)
    }
}
