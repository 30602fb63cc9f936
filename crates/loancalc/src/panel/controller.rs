use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::api::{ApiError, ApiResult};
use crate::clipboard::Clipboard;
use crate::data::{JoinRoom, Room, RoomJoined};
use crate::i18n::Message;
use crate::id::RoomId;
use crate::log::{debug, error, info, warn};
use crate::navigation::{Destination, is_viewing_room};
use crate::session::SessionStore;

use super::state::{PanelAction, PanelError};

/// How long a copied room code keeps its check mark.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// The rooms endpoints, with every failure already classified.
#[async_trait::async_trait(?Send)]
pub trait RoomsApi {
    async fn list_rooms(&self, token: &str) -> ApiResult<Vec<Room>>;

    /// Joins the room named in `request`, or creates one when it names none.
    async fn join_room(&self, token: &str, request: &JoinRoom) -> ApiResult<RoomJoined>;

    async fn leave_room(&self, token: &str, room_id: RoomId) -> ApiResult<()>;
}

/// What the panel needs from the page it is mounted in.
pub trait PanelHost {
    fn navigate(&self, destination: Destination);

    fn current_path(&self) -> String;

    /// Hides the sidebar on layouts where it overlays the page.
    fn close_sidebar(&self);
}

#[async_trait::async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Update channel into the view state.
pub trait StateDispatch {
    fn dispatch(&self, action: PanelAction);
}

/// Drives the rooms panel: talks to the API, navigates, and reports every
/// outcome as [`PanelAction`]s.
#[derive(Clone)]
pub struct RoomsPanel {
    api: Rc<dyn RoomsApi>,
    session: Rc<dyn SessionStore>,
    host: Rc<dyn PanelHost>,
    clipboard: Rc<dyn Clipboard>,
    timer: Rc<dyn Timer>,
    // Bumped by every list request; only the latest one may land
    generation: Rc<Cell<u64>>,
}

impl RoomsPanel {
    pub fn new(
        api: Rc<dyn RoomsApi>,
        session: Rc<dyn SessionStore>,
        host: Rc<dyn PanelHost>,
        clipboard: Rc<dyn Clipboard>,
        timer: Rc<dyn Timer>,
    ) -> Self {
        Self {
            api,
            session,
            host,
            clipboard,
            timer,
            generation: Rc::new(Cell::new(0)),
        }
    }

    fn token_or_redirect(&self) -> Option<String> {
        let token = self.session.token();
        if token.is_none() {
            debug!("No session token, redirecting to landing");
            self.host.navigate(Destination::Landing);
        }
        token
    }

    fn invalidate_session(&self) {
        warn!("Session token rejected, signing out");
        self.session.clear();
        self.host.navigate(Destination::Landing);
    }

    pub async fn load_rooms(&self, state: &impl StateDispatch) {
        let Some(token) = self.token_or_redirect() else {
            return;
        };

        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let result = self.api.list_rooms(&token).await;
        if generation != self.generation.get() {
            debug!(generation, "Dropping stale room list response");
            return;
        }

        match result {
            Ok(rooms) => {
                debug!(count = rooms.len(), "Rooms loaded");
                state.dispatch(PanelAction::RoomsLoaded(rooms));
            }
            Err(err) if err.is_unauthorized() => self.invalidate_session(),
            Err(err) => {
                warn!("Failed to load rooms: {err}");
                state.dispatch(PanelAction::SetError(PanelError::Localized(
                    Message::LoadFailed,
                )));
            }
        }
    }

    pub async fn copy_code(&self, state: &impl StateDispatch, code: String) {
        state.dispatch(PanelAction::ClearError);

        match self.clipboard.write_text(&code).await {
            Ok(()) => {
                state.dispatch(PanelAction::Copied(code.clone()));
                self.timer.sleep(COPIED_INDICATOR_DURATION).await;
                state.dispatch(PanelAction::CopyExpired(code));
            }
            Err(err) => {
                error!("Unable to copy room code: {err}");
                state.dispatch(PanelAction::SetError(PanelError::Localized(
                    Message::CopyFailed,
                )));
            }
        }
    }

    pub async fn join_room(&self, state: &impl StateDispatch, code: String) {
        state.dispatch(PanelAction::ClearError);
        let Some(token) = self.token_or_redirect() else {
            return;
        };

        match self.api.join_room(&token, &JoinRoom::with_code(code)).await {
            Ok(joined) => {
                state.dispatch(PanelAction::ClearRoomCode);
                self.enter_room(joined.room_id);
            }
            Err(err) => self.membership_failed(state, "Join", err, Message::JoinFailed),
        }
    }

    pub async fn create_room(&self, state: &impl StateDispatch) {
        state.dispatch(PanelAction::ClearError);
        let Some(token) = self.token_or_redirect() else {
            return;
        };

        match self.api.join_room(&token, &JoinRoom::create()).await {
            Ok(created) => self.enter_room(created.room_id),
            Err(err) => self.membership_failed(state, "Create", err, Message::CreateFailed),
        }
    }

    fn enter_room(&self, room_id: RoomId) {
        info!(%room_id, "Entering room");
        self.host.navigate(Destination::Room(room_id));
        self.host.close_sidebar();
    }

    fn membership_failed(
        &self,
        state: &impl StateDispatch,
        action: &str,
        err: ApiError,
        message: Message,
    ) {
        if err.is_unauthorized() {
            self.invalidate_session();
            return;
        }
        let detail = err
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        error!("{action} failed: {detail}");
        state.dispatch(PanelAction::SetError(PanelError::Localized(message)));
    }

    pub fn open_leave(&self, state: &impl StateDispatch, room: Room) {
        state.dispatch(PanelAction::OpenLeaveDialog(room));
    }

    pub fn cancel_leave(&self, state: &impl StateDispatch) {
        state.dispatch(PanelAction::CloseLeaveDialog);
    }

    /// Leaves `candidate`, the room the confirmation dialog was opened for.
    pub async fn confirm_leave(&self, state: &impl StateDispatch, candidate: Option<Room>) {
        let Some(room) = candidate else {
            return;
        };

        state.dispatch(PanelAction::ClearError);
        let left = match self.token_or_redirect() {
            Some(token) => self.leave(state, &token, &room).await,
            None => {
                state.dispatch(PanelAction::CloseLeaveDialog);
                false
            }
        };
        state.dispatch(PanelAction::ClearLeaveCandidate);

        if left {
            self.load_rooms(state).await;
        }
    }

    async fn leave(&self, state: &impl StateDispatch, token: &str, room: &Room) -> bool {
        let result = self.api.leave_room(token, room.id).await;
        state.dispatch(PanelAction::CloseLeaveDialog);

        match result {
            Ok(()) => {
                info!(room_id = %room.id, "Left room");
                if is_viewing_room(&self.host.current_path(), room.id) {
                    self.host.navigate(Destination::Rooms);
                }
                true
            }
            Err(err) if err.is_unauthorized() => {
                self.invalidate_session();
                false
            }
            Err(err) => {
                warn!(room_id = %room.id, "Leave failed: {err}");
                let error = match err.server_message() {
                    Some(message) => PanelError::Server(message.to_string()),
                    None => PanelError::Localized(Message::LeaveRoomFailed),
                };
                state.dispatch(PanelAction::SetError(error));
                false
            }
        }
    }

    pub fn logout(&self) {
        info!("Logging out");
        self.session.clear();
        self.host.navigate(Destination::Landing);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use tokio::sync::oneshot;

    use super::*;
    use crate::errors::ClipboardError;
    use crate::panel::state::PanelState;

    fn room(id: i64, code: &str) -> Room {
        Room {
            id: RoomId::new(id),
            code: code.to_string(),
        }
    }

    enum Reply<T> {
        Ready(ApiResult<T>),
        Gated(oneshot::Receiver<ApiResult<T>>),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Join(JoinRoom),
        Leave(RoomId),
    }

    #[derive(Default)]
    struct FakeApi {
        list_replies: RefCell<VecDeque<Reply<Vec<Room>>>>,
        join_replies: RefCell<VecDeque<ApiResult<RoomJoined>>>,
        leave_replies: RefCell<VecDeque<ApiResult<()>>>,
        calls: RefCell<Vec<Call>>,
        tokens: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn reply_list(&self, reply: Reply<Vec<Room>>) {
            self.list_replies.borrow_mut().push_back(reply);
        }

        fn reply_join(&self, reply: ApiResult<RoomJoined>) {
            self.join_replies.borrow_mut().push_back(reply);
        }

        fn reply_leave(&self, reply: ApiResult<()>) {
            self.leave_replies.borrow_mut().push_back(reply);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, token: &str, call: Call) {
            self.tokens.borrow_mut().push(token.to_string());
            self.calls.borrow_mut().push(call);
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RoomsApi for FakeApi {
        async fn list_rooms(&self, token: &str) -> ApiResult<Vec<Room>> {
            self.record(token, Call::List);
            let reply = self.list_replies.borrow_mut().pop_front();
            match reply {
                Some(Reply::Ready(result)) => result,
                Some(Reply::Gated(rx)) => rx.await.expect("gate dropped"),
                None => Ok(Vec::new()),
            }
        }

        async fn join_room(&self, token: &str, request: &JoinRoom) -> ApiResult<RoomJoined> {
            self.record(token, Call::Join(request.clone()));
            self.join_replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected join request")
        }

        async fn leave_room(&self, token: &str, room_id: RoomId) -> ApiResult<()> {
            self.record(token, Call::Leave(room_id));
            self.leave_replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected leave request")
        }
    }

    struct MemorySession(RefCell<Option<String>>);

    impl SessionStore for MemorySession {
        fn token(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn clear(&self) {
            self.0.replace(None);
        }
    }

    struct FakeHost {
        path: RefCell<String>,
        navigations: RefCell<Vec<Destination>>,
        closes: Cell<usize>,
    }

    impl PanelHost for FakeHost {
        fn navigate(&self, destination: Destination) {
            self.path.replace(destination.path());
            self.navigations.borrow_mut().push(destination);
        }

        fn current_path(&self) -> String {
            self.path.borrow().clone()
        }

        fn close_sidebar(&self) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    struct FakeClipboard(RefCell<Result<(), ClipboardError>>);

    #[async_trait::async_trait(?Send)]
    impl Clipboard for FakeClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            self.0.borrow().clone()
        }
    }

    struct TokioTimer;

    #[async_trait::async_trait(?Send)]
    impl Timer for TokioTimer {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<PanelState>);

    impl Recorder {
        fn snapshot(&self) -> PanelState {
            self.0.borrow().clone()
        }
    }

    impl StateDispatch for Recorder {
        fn dispatch(&self, action: PanelAction) {
            self.0.borrow_mut().apply(action);
        }
    }

    struct Harness {
        api: Rc<FakeApi>,
        session: Rc<MemorySession>,
        host: Rc<FakeHost>,
        clipboard: Rc<FakeClipboard>,
        panel: RoomsPanel,
        state: Recorder,
    }

    impl Harness {
        fn new(path: &str) -> Self {
            let api = Rc::new(FakeApi::default());
            let session = Rc::new(MemorySession(RefCell::new(Some("secret".into()))));
            let host = Rc::new(FakeHost {
                path: RefCell::new(path.to_string()),
                navigations: RefCell::new(Vec::new()),
                closes: Cell::new(0),
            });
            let clipboard = Rc::new(FakeClipboard(RefCell::new(Ok(()))));
            let panel = RoomsPanel::new(
                api.clone(),
                session.clone(),
                host.clone(),
                clipboard.clone(),
                Rc::new(TokioTimer),
            );

            Self {
                api,
                session,
                host,
                clipboard,
                panel,
                state: Recorder::default(),
            }
        }

        fn navigations(&self) -> Vec<Destination> {
            self.host.navigations.borrow().clone()
        }

        fn seed_rooms(&self, rooms: Vec<Room>) {
            self.state.dispatch(PanelAction::RoomsLoaded(rooms));
        }
    }

    #[tokio::test]
    async fn load_without_token_redirects_without_request() {
        let h = Harness::new("/rooms");
        h.session.clear();

        h.panel.load_rooms(&h.state).await;

        assert!(h.api.calls().is_empty());
        assert_eq!(h.navigations(), vec![Destination::Landing]);
    }

    #[tokio::test]
    async fn load_replaces_rooms_with_server_list() {
        let h = Harness::new("/rooms");
        h.seed_rooms(vec![room(1, "OLD")]);
        h.api
            .reply_list(Reply::Ready(Ok(vec![room(7, "Q1"), room(9, "ZZ")])));

        h.panel.load_rooms(&h.state).await;

        assert_eq!(h.state.snapshot().rooms, vec![room(7, "Q1"), room(9, "ZZ")]);
        assert_eq!(*h.api.tokens.borrow(), vec!["secret"]);
        assert!(h.navigations().is_empty());
    }

    #[tokio::test]
    async fn unauthorized_list_redirects_once_and_keeps_rooms() {
        let h = Harness::new("/rooms");
        h.seed_rooms(vec![room(7, "Q1")]);
        h.api
            .reply_list(Reply::Ready(Err(ApiError::UnauthorizedAccess)));

        h.panel.load_rooms(&h.state).await;

        assert_eq!(h.navigations(), vec![Destination::Landing]);
        assert_eq!(h.state.snapshot().rooms, vec![room(7, "Q1")]);
        assert_eq!(h.session.token(), None);
    }

    #[tokio::test]
    async fn other_list_failures_show_error_until_next_success() {
        let h = Harness::new("/rooms");
        h.api
            .reply_list(Reply::Ready(Err(ApiError::InternalServerError(None))));

        h.panel.load_rooms(&h.state).await;
        assert_eq!(
            h.state.snapshot().error,
            Some(PanelError::Localized(Message::LoadFailed))
        );
        assert!(h.navigations().is_empty());

        h.api.reply_list(Reply::Ready(Ok(vec![room(7, "Q1")])));
        h.panel.load_rooms(&h.state).await;
        assert_eq!(h.state.snapshot().error, None);
    }

    #[tokio::test]
    async fn stale_list_response_is_dropped() {
        let h = Harness::new("/rooms");
        let (tx, rx) = oneshot::channel();
        h.api.reply_list(Reply::Gated(rx));
        h.api.reply_list(Reply::Ready(Ok(vec![room(2, "NEW")])));

        let first = h.panel.load_rooms(&h.state);
        let second = async {
            h.panel.load_rooms(&h.state).await;
            tx.send(Ok(vec![room(1, "OLD")])).ok();
        };
        tokio::join!(first, second);

        assert_eq!(h.state.snapshot().rooms, vec![room(2, "NEW")]);
        assert_eq!(h.api.calls(), vec![Call::List, Call::List]);
    }

    #[tokio::test(start_paused = true)]
    async fn copied_indicator_clears_after_two_seconds() {
        let h = Harness::new("/rooms");

        let copy = h.panel.copy_code(&h.state, "AB12".to_string());
        let observe = async {
            tokio::task::yield_now().await;
            assert!(h.state.snapshot().is_copied("AB12"));

            tokio::time::advance(Duration::from_millis(1999)).await;
            assert!(h.state.snapshot().is_copied("AB12"));

            tokio::time::advance(Duration::from_millis(1)).await;
        };
        tokio::join!(copy, observe);

        assert_eq!(h.state.snapshot().copied_code, None);
    }

    #[tokio::test]
    async fn copy_clears_previous_error() {
        let h = Harness::new("/rooms");
        h.state.dispatch(PanelAction::SetError(PanelError::Server("old".into())));

        let copy = h.panel.copy_code(&h.state, "AB12".to_string());
        let observe = async {
            tokio::task::yield_now().await;
            assert_eq!(h.state.snapshot().error, None);
        };
        tokio::select! {
            _ = copy => {}
            _ = observe => {}
        }
    }

    #[tokio::test]
    async fn copy_failure_sets_localized_error() {
        let h = Harness::new("/rooms");
        *h.clipboard.0.borrow_mut() = Err(ClipboardError::CommandFailed);

        h.panel.copy_code(&h.state, "AB12".to_string()).await;

        let state = h.state.snapshot();
        assert_eq!(state.copied_code, None);
        assert_eq!(state.error, Some(PanelError::Localized(Message::CopyFailed)));
    }

    #[tokio::test]
    async fn join_success_navigates_and_closes_sidebar() {
        let h = Harness::new("/rooms");
        h.state.dispatch(PanelAction::SetRoomCode("XYZ9".into()));
        h.api.reply_join(Ok(RoomJoined {
            room_id: RoomId::new(42),
        }));

        let code = h.state.snapshot().room_code;
        h.panel.join_room(&h.state, code).await;

        assert_eq!(h.api.calls(), vec![Call::Join(JoinRoom::with_code("XYZ9"))]);
        assert_eq!(h.state.snapshot().room_code, "");
        assert_eq!(h.navigations(), vec![Destination::Room(RoomId::new(42))]);
        assert_eq!(h.host.current_path(), "/rooms/42");
        assert_eq!(h.host.closes.get(), 1);
    }

    #[tokio::test]
    async fn join_failure_sets_error_without_navigation() {
        let h = Harness::new("/rooms");
        h.seed_rooms(vec![room(7, "Q1")]);
        h.state.dispatch(PanelAction::SetRoomCode("nope".into()));
        h.api
            .reply_join(Err(ApiError::BadRequest(Some("bad code".into()))));

        h.panel.join_room(&h.state, "nope".into()).await;

        let state = h.state.snapshot();
        assert_eq!(state.rooms, vec![room(7, "Q1")]);
        assert_eq!(state.room_code, "nope");
        let error = state.error.expect("error should be set");
        assert_eq!(error, PanelError::Localized(Message::JoinFailed));
        assert!(!error.text(crate::preferences::Locale::En).is_empty());
        assert!(h.navigations().is_empty());
        assert_eq!(h.host.closes.get(), 0);
    }

    #[tokio::test]
    async fn unauthorized_join_signs_out() {
        let h = Harness::new("/rooms");
        h.api.reply_join(Err(ApiError::UnauthorizedAccess));

        h.panel.join_room(&h.state, "XYZ9".into()).await;

        assert_eq!(h.session.token(), None);
        assert_eq!(h.navigations(), vec![Destination::Landing]);
        assert_eq!(h.state.snapshot().error, None);
    }

    #[tokio::test]
    async fn create_sends_empty_payload() {
        let h = Harness::new("/rooms");
        h.state.dispatch(PanelAction::SetRoomCode("half typed".into()));
        h.api.reply_join(Ok(RoomJoined {
            room_id: RoomId::new(5),
        }));

        h.panel.create_room(&h.state).await;

        assert_eq!(h.api.calls(), vec![Call::Join(JoinRoom::create())]);
        assert_eq!(h.navigations(), vec![Destination::Room(RoomId::new(5))]);
        assert_eq!(h.host.closes.get(), 1);
        assert_eq!(h.state.snapshot().room_code, "half typed");
    }

    #[tokio::test]
    async fn create_failure_uses_its_own_message() {
        let h = Harness::new("/rooms");
        h.api
            .reply_join(Err(ApiError::InternalServerError(None)));

        h.panel.create_room(&h.state).await;

        assert_eq!(
            h.state.snapshot().error,
            Some(PanelError::Localized(Message::CreateFailed))
        );
        assert!(h.navigations().is_empty());
    }

    #[tokio::test]
    async fn leaving_viewed_room_returns_to_rooms_and_reloads() {
        let h = Harness::new("/rooms/7");
        h.seed_rooms(vec![room(7, "Q1"), room(9, "ZZ")]);
        h.api.reply_leave(Ok(()));
        h.api.reply_list(Reply::Ready(Ok(vec![room(9, "ZZ")])));

        h.panel.open_leave(&h.state, room(7, "Q1"));
        assert!(h.state.snapshot().leave_dialog_open);
        assert!(h.api.calls().is_empty());

        let candidate = h.state.snapshot().leave_candidate;
        h.panel.confirm_leave(&h.state, candidate).await;

        let state = h.state.snapshot();
        assert!(!state.leave_dialog_open);
        assert_eq!(state.leave_candidate, None);
        assert_eq!(state.rooms, vec![room(9, "ZZ")]);
        assert_eq!(
            h.api.calls(),
            vec![Call::Leave(RoomId::new(7)), Call::List]
        );
        assert_eq!(h.navigations(), vec![Destination::Rooms]);
    }

    #[tokio::test]
    async fn leaving_other_room_stays_put() {
        let h = Harness::new("/rooms/9");
        h.api.reply_leave(Ok(()));

        h.panel.open_leave(&h.state, room(7, "Q1"));
        let candidate = h.state.snapshot().leave_candidate;
        h.panel.confirm_leave(&h.state, candidate).await;

        assert!(h.navigations().is_empty());
        assert!(!h.state.snapshot().leave_dialog_open);
        assert_eq!(
            h.api.calls(),
            vec![Call::Leave(RoomId::new(7)), Call::List]
        );
    }

    #[tokio::test]
    async fn leave_failure_shows_server_message() {
        let h = Harness::new("/rooms/7");
        h.api
            .reply_leave(Err(ApiError::ForbiddenAccess(Some("owner cannot leave".into()))));

        h.panel.open_leave(&h.state, room(7, "Q1"));
        let candidate = h.state.snapshot().leave_candidate;
        h.panel.confirm_leave(&h.state, candidate).await;

        let state = h.state.snapshot();
        assert_eq!(
            state.error,
            Some(PanelError::Server("owner cannot leave".into()))
        );
        assert!(!state.leave_dialog_open);
        assert_eq!(state.leave_candidate, None);
        assert_eq!(h.api.calls(), vec![Call::Leave(RoomId::new(7))]);
        assert!(h.navigations().is_empty());
    }

    #[tokio::test]
    async fn leave_failure_without_message_falls_back() {
        let h = Harness::new("/rooms");
        h.api
            .reply_leave(Err(ApiError::InternalServerError(None)));

        h.panel.confirm_leave(&h.state, Some(room(7, "Q1"))).await;

        assert_eq!(
            h.state.snapshot().error,
            Some(PanelError::Localized(Message::LeaveRoomFailed))
        );
    }

    #[tokio::test]
    async fn unauthorized_leave_signs_out_without_reload() {
        let h = Harness::new("/rooms/7");
        h.api.reply_leave(Err(ApiError::UnauthorizedAccess));

        h.panel.open_leave(&h.state, room(7, "Q1"));
        let candidate = h.state.snapshot().leave_candidate;
        h.panel.confirm_leave(&h.state, candidate).await;

        let state = h.state.snapshot();
        assert_eq!(h.session.token(), None);
        assert_eq!(h.navigations(), vec![Destination::Landing]);
        assert!(!state.leave_dialog_open);
        assert_eq!(state.leave_candidate, None);
        assert_eq!(state.error, None);
        assert_eq!(h.api.calls(), vec![Call::Leave(RoomId::new(7))]);
    }

    #[tokio::test]
    async fn unauthorized_create_signs_out() {
        let h = Harness::new("/rooms");
        h.api.reply_join(Err(ApiError::UnauthorizedAccess));

        h.panel.create_room(&h.state).await;

        assert_eq!(h.session.token(), None);
        assert_eq!(h.navigations(), vec![Destination::Landing]);
        assert_eq!(h.state.snapshot().error, None);
        assert_eq!(h.api.calls(), vec![Call::Join(JoinRoom::create())]);
    }

    #[tokio::test]
    async fn membership_actions_without_token_redirect_without_request() {
        let h = Harness::new("/rooms/7");
        h.session.clear();

        h.panel.join_room(&h.state, "XYZ9".into()).await;
        h.panel.create_room(&h.state).await;
        h.panel.open_leave(&h.state, room(7, "Q1"));
        let candidate = h.state.snapshot().leave_candidate;
        h.panel.confirm_leave(&h.state, candidate).await;

        let state = h.state.snapshot();
        assert!(h.api.calls().is_empty());
        assert_eq!(
            h.navigations(),
            vec![Destination::Landing, Destination::Landing, Destination::Landing]
        );
        assert!(!state.leave_dialog_open);
        assert_eq!(state.leave_candidate, None);
        assert_eq!(h.host.closes.get(), 0);
    }

    #[tokio::test]
    async fn confirm_without_candidate_does_nothing() {
        let h = Harness::new("/rooms");

        h.panel.confirm_leave(&h.state, None).await;

        assert!(h.api.calls().is_empty());
        assert_eq!(h.state.snapshot(), PanelState::default());
    }

    #[tokio::test]
    async fn cancel_closes_dialog_without_request() {
        let h = Harness::new("/rooms");

        h.panel.open_leave(&h.state, room(7, "Q1"));
        h.panel.cancel_leave(&h.state);

        assert!(!h.state.snapshot().leave_dialog_open);
        assert!(h.api.calls().is_empty());
    }

    #[test]
    fn logout_clears_token_without_server_call() {
        let h = Harness::new("/rooms/7");

        h.panel.logout();

        assert_eq!(h.session.token(), None);
        assert_eq!(h.navigations(), vec![Destination::Landing]);
        assert!(h.api.calls().is_empty());
    }
}
