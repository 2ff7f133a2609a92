//! View-state container for a todo front-end.
//!
//! All changes go through the named mutations below; a front-end re-renders
//! from `view()` after each one.

use uuid::Uuid;

use crate::types::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    todos: Vec<Todo>,
    input_value: String,
    loading: bool,
    error: Option<String>,
}

/// What a front-end renders, derived from `TodoState` on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView<'a> {
    pub todos: &'a [Todo],
    pub total: usize,
    pub completed: usize,
    pub loading: bool,
    pub error: Option<&'a str>,
}

impl TodoView<'_> {
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn find(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The pending input with surrounding whitespace removed, or `None` if
    /// nothing would be submitted.
    pub fn pending_text(&self) -> Option<&str> {
        let text = self.input_value.trim();
        (!text.is_empty()).then_some(text)
    }

    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub fn prepend(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Swap in `todo` wherever a record with the same id sits. Returns
    /// whether one did.
    pub fn replace_by_id(&mut self, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|existing| existing.id == todo.id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, id: Uuid) {
        self.todos.retain(|todo| todo.id != id);
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
    }

    pub fn clear_input(&mut self) {
        self.input_value.clear();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn view(&self) -> TodoView<'_> {
        TodoView {
            todos: &self.todos,
            total: self.todos.len(),
            completed: self.todos.iter().filter(|todo| todo.completed).count(),
            loading: self.loading,
            error: self.error.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(text: &str, completed: bool) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn prepend_puts_new_record_first() {
        let mut state = TodoState::new();
        state.replace_all(vec![todo("old", false)]);
        state.prepend(todo("new", false));
        let texts: Vec<_> = state.todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["new", "old"]);
    }

    #[test]
    fn replace_by_id_keeps_position() {
        let a = todo("a", false);
        let b = todo("b", false);
        let mut state = TodoState::new();
        state.replace_all(vec![a.clone(), b.clone()]);

        let mut done = a.clone();
        done.completed = true;
        assert!(state.replace_by_id(done.clone()));
        assert_eq!(state.todos(), &[done, b]);

        assert!(!state.replace_by_id(todo("stranger", true)));
        assert_eq!(state.todos().len(), 2);
    }

    #[test]
    fn remove_by_id_filters() {
        let a = todo("a", false);
        let b = todo("b", true);
        let mut state = TodoState::new();
        state.replace_all(vec![a.clone(), b.clone()]);
        state.remove_by_id(a.id);
        assert_eq!(state.todos(), &[b]);
        state.remove_by_id(Uuid::nil());
        assert_eq!(state.todos().len(), 1);
    }

    #[test]
    fn view_counts_follow_the_list() {
        let mut state = TodoState::new();
        assert_eq!(state.view().total, 0);
        assert!(state.view().is_empty());

        state.replace_all(vec![todo("a", true), todo("b", false), todo("c", true)]);
        let view = state.view();
        assert_eq!(view.total, 3);
        assert_eq!(view.completed, 2);

        let first = state.todos()[0].id;
        state.remove_by_id(first);
        let view = state.view();
        assert_eq!(view.total, 2);
        assert_eq!(view.completed, 1);
    }

    #[test]
    fn pending_text_ignores_whitespace() {
        let mut state = TodoState::new();
        assert_eq!(state.pending_text(), None);
        state.set_input("   \t ");
        assert_eq!(state.pending_text(), None);
        state.set_input("  Buy milk ");
        assert_eq!(state.pending_text(), Some("Buy milk"));
    }

    #[test]
    fn error_persists_until_dismissed() {
        let mut state = TodoState::new();
        state.set_error("Failed to add todo");
        state.prepend(todo("later", false));
        assert_eq!(state.view().error, Some("Failed to add todo"));
        state.dismiss_error();
        assert_eq!(state.error(), None);
    }
}
