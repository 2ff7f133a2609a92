//! Plain-text rendering of a `TodoView`.

use std::fmt::Write;

use todo_core::TodoView;

pub fn render(view: &TodoView<'_>) -> String {
    let mut out = String::from("My Todo App\n");
    if let Some(error) = view.error {
        let _ = writeln!(out, "! {error}");
    }
    if view.loading {
        out.push_str("Loading todos...\n");
    } else if view.is_empty() {
        out.push_str("No tasks yet. Add one with `todo-cli add <text>`.\n");
    } else {
        for todo in view.todos {
            let mark = if todo.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "[{mark}] {}  {}", todo.id, todo.text);
        }
    }
    let _ = writeln!(out, "Total: {} | Completed: {}", view.total, view.completed);
    out
}
