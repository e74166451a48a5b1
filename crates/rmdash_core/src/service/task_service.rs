//! Task use-cases: save, edit form, completion toggles, email follow-ups.
//!
//! # Invariants
//! - Task and subtask completion flags are independent; no cascade.
//! - Follow-up tasks keep no reference to their source email.

use crate::clock::{next_day, Clock};
use crate::model::email::Email;
use crate::model::task::Task;
use crate::model::user::{new_record_id, Priority, RecordId, User};
use crate::repo::entity_store::SaveOutcome;
use crate::service::app_state::{ActiveView, AppState};
use crate::service::form::{FormError, TaskForm};
use chrono::NaiveDate;
use log::{info, warn};

/// Category of tasks created from an email.
pub const FOLLOW_UP_CATEGORY: &str = "Administration";
/// Tags of tasks created from an email.
pub const FOLLOW_UP_TAGS: [&str; 2] = ["#email", "#follow-up"];

/// Follow-up task for `email`, due at the start of the day after `today`.
pub fn follow_up_task(email: &Email, assignee: User, today: NaiveDate) -> Task {
    Task {
        id: new_record_id(),
        title: format!("Follow-up: {}", email.subject),
        assigned_to: assignee,
        due_date: next_day(today),
        priority: Priority::Medium,
        tags: FOLLOW_UP_TAGS.iter().map(|tag| tag.to_string()).collect(),
        category: FOLLOW_UP_CATEGORY.to_string(),
        sub_tasks: Vec::new(),
        completed: false,
    }
}

impl<C: Clock> AppState<C> {
    pub fn save_task(&mut self, task: Task) -> SaveOutcome {
        let outcome = self.tasks.save(task);
        info!("event=task_save module=task status=ok outcome={outcome:?}");
        outcome
    }

    /// Submits the task editor. `editing` names the task being edited;
    /// a task removed in the meantime fails with [`FormError::RecordGone`].
    pub fn submit_task_form(
        &mut self,
        form: TaskForm,
        editing: Option<&str>,
    ) -> Result<RecordId, FormError> {
        let existing = match editing {
            Some(id) => Some(self.tasks.get(id).ok_or_else(|| {
                warn!("event=task_form module=task status=skip reason=record_gone");
                FormError::RecordGone(id.to_string())
            })?),
            None => None,
        };
        let task = form.submit(&self.users, existing)?;
        let id = task.id.clone();
        self.save_task(task);
        Ok(id)
    }

    /// Flips a task's completion flag.
    pub fn toggle_task(&mut self, id: &str) -> bool {
        let touched = self.tasks.update(id, Task::toggle);
        info!(
            "event=task_toggle module=task status={}",
            if touched { "ok" } else { "skip" }
        );
        touched
    }

    /// Flips one subtask's completion flag.
    pub fn toggle_sub_task(&mut self, task_id: &str, sub_task_id: &str) -> bool {
        let mut found = false;
        self.tasks.update(task_id, |task| {
            found = task.toggle_sub_task(sub_task_id);
        });
        found
    }

    /// Open tasks in store order.
    pub fn open_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.completed).collect()
    }

    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    /// Creates a follow-up task from `email` and switches to the to-do view.
    ///
    /// The task is assigned to the first known user.
    pub fn create_task_from_email(&mut self, email: &Email) -> Result<RecordId, FormError> {
        let assignee = self
            .default_assignee()
            .cloned()
            .ok_or(FormError::NoAssignableUser)?;
        let task = follow_up_task(email, assignee, self.clock.today());
        let id = task.id.clone();
        self.save_task(task);
        self.navigate(ActiveView::Todo);
        info!("event=task_from_email module=task status=ok");
        Ok(id)
    }
}
