//! Controller that drives `TodoState` through a `Transport`.
//!
//! Every action issues exactly one request and touches the list only after
//! the server answered with success. A failure records an
//! operation-specific message in the state and is also returned, so a host
//! can react to it (exit code, log line). Errors are never cleared
//! implicitly; only `dismiss_error` or the next failure replaces them.

use std::fmt;

use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::state::TodoState;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// The user-facing operations, each with its own failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Toggle,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load todos",
            Operation::Add => "Failed to add todo",
            Operation::Toggle => "Failed to update todo",
            Operation::Delete => "Failed to delete todo",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Toggle => "toggle",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

pub struct TodoApp<T> {
    client: TodoClient,
    transport: T,
    state: TodoState,
}

impl<T: Transport> TodoApp<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: TodoState::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.state.set_input(value);
    }

    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }

    /// Fetch the full list through the transport and replace the cached one.
    pub fn load(&mut self) -> Result<(), ApiError> {
        let request = self.begin_load();
        let response = self.transport.execute(request);
        self.finish_load(response)
    }

    /// First half of a load for hosts that run the request themselves.
    /// `loading` stays set until `finish_load`.
    pub fn begin_load(&mut self) -> HttpRequest {
        self.state.set_loading(true);
        let request = self.client.build_list_todos();
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        request
    }

    /// Second half of a load: clear `loading`, then replace the list or
    /// record the failure.
    pub fn finish_load(&mut self, response: Result<HttpResponse, TransportError>) -> Result<(), ApiError> {
        self.state.set_loading(false);
        let result = response
            .map_err(ApiError::from)
            .and_then(|response| self.client.parse_list_todos(response));
        let todos = self.settle(Operation::Load, result)?;
        self.state.replace_all(todos);
        Ok(())
    }

    /// Submit the pending input as a new todo. Blank input is ignored
    /// without a request.
    pub fn submit(&mut self) -> Result<(), ApiError> {
        let Some(text) = self.state.pending_text() else {
            return Ok(());
        };
        let input = CreateTodo {
            text: text.to_string(),
        };
        let result = self
            .client
            .build_create_todo(&input)
            .and_then(|request| self.round_trip(request))
            .and_then(|response| self.client.parse_create_todo(response));
        let todo = self.settle(Operation::Add, result)?;
        self.state.prepend(todo);
        self.state.clear_input();
        Ok(())
    }

    /// Flip `completed` on the cached record with `id`.
    pub fn toggle(&mut self, id: Uuid) -> Result<(), ApiError> {
        let current = self.state.find(id).map(|todo| todo.completed);
        let result = match current {
            Some(completed) => {
                let patch = UpdateTodo::completed(!completed);
                self.client
                    .build_update_todo(id, &patch)
                    .and_then(|request| self.round_trip(request))
                    .and_then(|response| self.client.parse_update_todo(response))
            }
            None => Err(ApiError::NotFound),
        };
        let todo: Todo = self.settle(Operation::Toggle, result)?;
        self.state.replace_by_id(todo);
        Ok(())
    }

    pub fn delete(&mut self, id: Uuid) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        let result = self
            .round_trip(request)
            .and_then(|response| self.client.parse_delete_todo(response));
        self.settle(Operation::Delete, result)?;
        self.state.remove_by_id(id);
        Ok(())
    }

    fn round_trip(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        Ok(self.transport.execute(request)?)
    }

    fn settle<R>(&mut self, operation: Operation, result: Result<R, ApiError>) -> Result<R, ApiError> {
        result.map_err(|e| {
            tracing::warn!(%operation, "request failed: {e}");
            self.state.set_error(operation.failure_message());
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::http::HttpMethod;

    const BASE_URL: &str = "http://localhost:5000/api";

    /// Replays canned responses in order and records every request.
    #[derive(Default)]
    struct Scripted {
        replies: VecDeque<Result<HttpResponse, TransportError>>,
        sent: Vec<HttpRequest>,
    }

    impl Scripted {
        fn reply(mut self, status: u16, body: &str) -> Self {
            self.replies.push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            self
        }

        fn fail(mut self) -> Self {
            self.replies
                .push_back(Err(TransportError("connection refused".to_string())));
            self
        }
    }

    impl Transport for Scripted {
        fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.push(request);
            self.replies
                .pop_front()
                .expect("no scripted reply left for request")
        }
    }

    fn app(transport: Scripted) -> TodoApp<Scripted> {
        TodoApp::new(TodoClient::new(BASE_URL), transport)
    }

    fn todo_json(id: u8, text: &str, completed: bool) -> String {
        format!(r#"{{"id":"00000000-0000-0000-0000-0000000000{id:02}","text":"{text}","completed":{completed}}}"#)
    }

    fn id(n: u8) -> Uuid {
        format!("00000000-0000-0000-0000-0000000000{n:02}").parse().unwrap()
    }

    fn loaded(extra: Scripted) -> TodoApp<Scripted> {
        let list = format!("[{},{}]", todo_json(1, "Walk dog", false), todo_json(2, "Buy milk", true));
        let mut transport = Scripted::default().reply(200, &list);
        transport.replies.extend(extra.replies);
        let mut app = app(transport);
        app.load().unwrap();
        app
    }

    #[test]
    fn load_replaces_list() {
        let app = loaded(Scripted::default());
        assert_eq!(app.state().todos().len(), 2);
        assert!(!app.state().is_loading());
        assert_eq!(app.state().view().completed, 1);
        assert_eq!(app.transport().sent[0].method, HttpMethod::Get);
        assert_eq!(app.transport().sent[0].path, "http://localhost:5000/api/todos");
        assert!(app.state().error().is_none());
    }

    #[test]
    fn loading_holds_between_begin_and_finish() {
        let mut app = app(Scripted::default());
        let request = app.begin_load();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(app.state().is_loading());
        assert!(app.state().view().loading);

        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: format!("[{}]", todo_json(1, "Walk dog", false)),
        };
        app.finish_load(Ok(response)).unwrap();
        assert!(!app.state().is_loading());
        assert_eq!(app.state().todos().len(), 1);
        assert!(app.transport().sent.is_empty());
    }

    #[test]
    fn finish_load_with_transport_failure_clears_loading() {
        let mut app = app(Scripted::default());
        app.begin_load();
        let err = app
            .finish_load(Err(TransportError("connection reset".to_string())))
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!app.state().is_loading());
        assert_eq!(app.state().error(), Some("Failed to load todos"));
    }

    #[test]
    fn load_failure_sets_message_and_stops_loading() {
        let mut app = app(Scripted::default().fail());
        assert!(app.load().is_err());
        assert!(!app.state().is_loading());
        assert_eq!(app.state().error(), Some("Failed to load todos"));
        assert!(app.state().todos().is_empty());
    }

    #[test]
    fn blank_submit_sends_nothing() {
        let mut app = loaded(Scripted::default());
        let before = app.state().todos().to_vec();
        app.set_input("   ");
        app.submit().unwrap();
        assert_eq!(app.transport().sent.len(), 1);
        assert_eq!(app.state().todos(), before.as_slice());
        assert_eq!(app.state().input_value(), "   ");
    }

    #[test]
    fn submit_prepends_and_clears_input() {
        let created = todo_json(3, "Call mom", false);
        let mut app = loaded(Scripted::default().reply(201, &created));
        app.set_input("Call mom");
        app.submit().unwrap();

        let sent = &app.transport().sent[1];
        assert_eq!(sent.method, HttpMethod::Post);
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "Call mom" }));

        assert_eq!(app.state().todos()[0].id, id(3));
        assert_eq!(app.state().todos().len(), 3);
        assert_eq!(app.state().input_value(), "");
    }

    #[test]
    fn failed_submit_keeps_list_and_error_outlives_next_success() {
        let created = todo_json(3, "Call mom", false);
        let mut app = loaded(Scripted::default().reply(500, "boom").reply(201, &created));
        app.set_input("Call mom");

        assert!(matches!(app.submit(), Err(ApiError::HttpError { status: 500, .. })));
        assert_eq!(app.state().todos().len(), 2);
        assert_eq!(app.state().input_value(), "Call mom");
        assert_eq!(app.state().error(), Some("Failed to add todo"));

        app.submit().unwrap();
        assert_eq!(app.state().todos().len(), 3);
        assert_eq!(app.state().error(), Some("Failed to add todo"));

        app.dismiss_error();
        assert_eq!(app.state().error(), None);
    }

    #[test]
    fn toggle_negates_and_takes_server_copy() {
        let updated = todo_json(1, "Walk dog", true);
        let mut app = loaded(Scripted::default().reply(200, &updated));
        app.toggle(id(1)).unwrap();

        let sent = &app.transport().sent[1];
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(
            sent.path,
            "http://localhost:5000/api/todos/00000000-0000-0000-0000-000000000001"
        );
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));

        assert!(app.state().find(id(1)).unwrap().completed);
        assert_eq!(app.state().view().completed, 2);
    }

    #[test]
    fn failed_toggle_leaves_record_untouched() {
        let mut app = loaded(Scripted::default().reply(404, r#"{"error":"todo not found"}"#));
        assert!(matches!(app.toggle(id(1)), Err(ApiError::NotFound)));
        assert!(!app.state().find(id(1)).unwrap().completed);
        assert_eq!(app.state().error(), Some("Failed to update todo"));
    }

    #[test]
    fn toggle_of_unknown_id_sends_nothing() {
        let mut app = loaded(Scripted::default());
        assert!(app.toggle(id(9)).is_err());
        assert_eq!(app.transport().sent.len(), 1);
        assert_eq!(app.state().error(), Some("Failed to update todo"));
    }

    #[test]
    fn delete_removes_after_ack() {
        let mut app = loaded(Scripted::default().reply(200, r#"{"success":true}"#));
        app.delete(id(2)).unwrap();
        assert_eq!(app.transport().sent[1].method, HttpMethod::Delete);
        assert!(app.state().find(id(2)).is_none());
        assert_eq!(app.state().view().total, 1);
    }

    #[test]
    fn failed_delete_keeps_record() {
        let mut app = loaded(Scripted::default().fail());
        assert!(matches!(app.delete(id(2)), Err(ApiError::Transport(_))));
        assert!(app.state().find(id(2)).is_some());
        assert_eq!(app.state().error(), Some("Failed to delete todo"));
    }

    #[test]
    fn later_failure_overwrites_message() {
        let mut app = loaded(Scripted::default().fail().fail());
        let _ = app.delete(id(2));
        let _ = app.load();
        assert_eq!(app.state().error(), Some("Failed to load todos"));
    }
}
