//! User-facing strings of the rooms sidebar, per [`Locale`].

use crate::preferences::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    MyRooms,
    CopyRoomCode,
    LeaveRoom,
    RoomCode,
    JoinRoom,
    Or,
    CreateRoom,
    Logout,
    LeaveRoomTitle,
    Confirm,
    Cancel,
    CopyFailed,
    JoinFailed,
    CreateFailed,
    LeaveRoomFailed,
    LoadFailed,
    OpenSidebar,
    CloseSidebar,
    ToggleTheme,
    ChangeLanguage,
    ToggleSimplifiedLayout,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        use Message::*;

        match locale {
            Locale::En => match self {
                MyRooms => "My Rooms",
                CopyRoomCode => "Copy room code",
                LeaveRoom => "Leave room",
                RoomCode => "Room code",
                JoinRoom => "Join Room",
                Or => "or",
                CreateRoom => "Create New Room",
                Logout => "Log out",
                LeaveRoomTitle => "Leave room?",
                Confirm => "Confirm",
                Cancel => "Cancel",
                CopyFailed => "Could not copy the room code",
                JoinFailed => "Could not join the room. Check the code and try again.",
                CreateFailed => "Could not create a room",
                LeaveRoomFailed => "Could not leave the room",
                LoadFailed => "Could not refresh your rooms",
                OpenSidebar => "Open rooms",
                CloseSidebar => "Close rooms",
                ToggleTheme => "Toggle theme",
                ChangeLanguage => "Change language",
                ToggleSimplifiedLayout => "Toggle simplified layout",
            },
            Locale::Ru => match self {
                MyRooms => "Мои комнаты",
                CopyRoomCode => "Скопировать код комнаты",
                LeaveRoom => "Покинуть комнату",
                RoomCode => "Код комнаты",
                JoinRoom => "Войти в комнату",
                Or => "или",
                CreateRoom => "Создать комнату",
                Logout => "Выйти",
                LeaveRoomTitle => "Покинуть комнату?",
                Confirm => "Подтвердить",
                Cancel => "Отмена",
                CopyFailed => "Не удалось скопировать код комнаты",
                JoinFailed => "Не удалось войти в комнату. Проверьте код и попробуйте снова.",
                CreateFailed => "Не удалось создать комнату",
                LeaveRoomFailed => "Не удалось покинуть комнату",
                LoadFailed => "Не удалось обновить список комнат",
                OpenSidebar => "Открыть комнаты",
                CloseSidebar => "Закрыть комнаты",
                ToggleTheme => "Сменить тему",
                ChangeLanguage => "Сменить язык",
                ToggleSimplifiedLayout => "Упрощённый вид",
            },
            Locale::He => match self {
                MyRooms => "החדרים שלי",
                CopyRoomCode => "העתק קוד חדר",
                LeaveRoom => "עזוב חדר",
                RoomCode => "קוד חדר",
                JoinRoom => "הצטרף לחדר",
                Or => "או",
                CreateRoom => "צור חדר חדש",
                Logout => "התנתק",
                LeaveRoomTitle => "לעזוב את החדר?",
                Confirm => "אישור",
                Cancel => "ביטול",
                CopyFailed => "לא ניתן להעתיק את קוד החדר",
                JoinFailed => "לא ניתן להצטרף לחדר. בדוק את הקוד ונסה שוב.",
                CreateFailed => "לא ניתן ליצור חדר",
                LeaveRoomFailed => "לא ניתן לעזוב את החדר",
                LoadFailed => "לא ניתן לרענן את רשימת החדרים",
                OpenSidebar => "פתח חדרים",
                CloseSidebar => "סגור חדרים",
                ToggleTheme => "החלף ערכת נושא",
                ChangeLanguage => "החלף שפה",
                ToggleSimplifiedLayout => "תצוגה מפושטת",
            },
        }
    }
}

/// Row label for a room, e.g. `Room #Q1`.
pub fn room_label(locale: Locale, code: &str) -> String {
    match locale {
        Locale::En => format!("Room #{code}"),
        Locale::Ru => format!("Комната #{code}"),
        Locale::He => format!("חדר #{code}"),
    }
}

/// Body of the leave confirmation dialog.
pub fn leave_room_confirmation(locale: Locale, code: &str) -> String {
    match locale {
        Locale::En => format!("Are you sure you want to leave room #{code}?"),
        Locale::Ru => format!("Вы уверены, что хотите покинуть комнату #{code}?"),
        Locale::He => format!("האם אתה בטוח שברצונך לעזוב את חדר #{code}?"),
    }
}
