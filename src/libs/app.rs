//! Session root: owns the store, the form state and the draft, and routes
//! intents between them.
//!
//! The interactive terminal session and every one-shot command drive an
//! [`App`]. Nothing outside it holds task or analytics data beyond a single
//! render pass.
//!
//! ## Intent handling
//!
//! | Intent                  | Effect                                                    |
//! |-------------------------|-----------------------------------------------------------|
//! | `RequestCreate`         | opens an empty form if none is open                       |
//! | `RequestEdit(task)`     | opens the form seeded from `task`                         |
//! | `SubmitForm`            | create/update via the store; closes the form on success   |
//! | `CancelForm`            | drops the draft and closes the form                       |
//! | `RequestDelete(id)`     | asks [`Confirm`] first; declining sends nothing           |
//! | `RequestStatusChange`   | status-only patch via the store                           |
//! | `RequestFilterChange`   | new filter, then refresh                                  |
//! | `Refresh`               | refresh                                                   |

use crate::api::TaskService;
use crate::libs::form::{Submission, TaskForm};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::view::{render, FormVisibility, Intent, Screen, ViewState};
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use chrono::{DateTime, Utc};

/// Yes/no question asked before destructive intents.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Confirms everything. Used for `delete --yes`.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Result of handling one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The form opened or closed, or a request succeeded.
    Applied,
    /// Nothing changed: the request failed, validation rejected the draft, or
    /// the intent did not apply in the current state.
    Unchanged,
    /// The user said no to a confirmation prompt.
    Declined,
}

impl Outcome {
    pub fn applied(self) -> bool {
        self == Outcome::Applied
    }
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Outcome::Applied
        } else {
            Outcome::Unchanged
        }
    }
}

/// One client session.
///
/// Generic over the service so tests can run it against an in-memory one, and
/// over the confirmer so `delete --yes` and the terminal prompt share a path.
pub struct App<S: TaskService, C: Confirm> {
    store: TaskStore<S>,
    confirm: C,
    visibility: FormVisibility,
    draft: Option<TaskForm>,
}

impl<S: TaskService, C: Confirm> App<S, C> {
    pub fn new(service: S, confirm: C) -> Self {
        Self {
            store: TaskStore::new(service),
            confirm,
            visibility: FormVisibility::Hidden,
            draft: None,
        }
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn visibility(&self) -> &FormVisibility {
        &self.visibility
    }

    pub fn draft(&self) -> Option<&TaskForm> {
        self.draft.as_ref()
    }

    /// The open draft, for input surfaces to fill in.
    pub fn draft_mut(&mut self) -> Option<&mut TaskForm> {
        self.draft.as_mut()
    }

    /// Initial load.
    pub async fn start(&mut self) -> bool {
        self.store.refresh().await
    }

    /// Renders the current state as of `now`.
    pub fn render_at(&self, now: DateTime<Utc>) -> Screen {
        render(&ViewState {
            tasks: self.store.tasks(),
            analytics: self.store.analytics(),
            filter: self.store.filter(),
            loading: self.store.is_loading(),
            form: self.draft.as_ref(),
            now,
        })
    }

    pub fn render(&self) -> Screen {
        self.render_at(Utc::now())
    }

    /// Handles one intent.
    pub async fn dispatch(&mut self, intent: Intent) -> Result<Outcome> {
        match intent {
            Intent::RequestCreate => {
                if self.visibility.is_visible() {
                    return Ok(Outcome::Unchanged);
                }
                self.visibility.open_create();
                self.draft = Some(TaskForm::create());
                Ok(Outcome::Applied)
            }
            Intent::RequestEdit(task) => {
                self.draft = Some(TaskForm::edit(&task));
                self.visibility.open_edit(task);
                Ok(Outcome::Applied)
            }
            Intent::CancelForm => {
                if let Some(draft) = self.draft.take() {
                    draft.cancel();
                }
                self.visibility.close();
                Ok(Outcome::Applied)
            }
            Intent::SubmitForm => self.submit().await,
            Intent::RequestDelete(id) => self.delete(&id).await,
            Intent::RequestStatusChange(id, status) => {
                let changed = self.store.set_status(&id, status).await;
                if changed {
                    msg_success!(Message::TaskStatusChanged(id, status.label().to_string()));
                }
                Ok(changed.into())
            }
            Intent::RequestFilterChange(filter) => Ok(self.store.set_filter(filter).await.into()),
            Intent::Refresh => Ok(self.store.refresh().await.into()),
        }
    }

    async fn submit(&mut self) -> Result<Outcome> {
        let Some(draft) = self.draft.as_ref() else {
            return Ok(Outcome::Unchanged);
        };

        let submission = match draft.submit() {
            Ok(submission) => submission,
            Err(e) => {
                msg_warning!(e);
                return Ok(Outcome::Unchanged);
            }
        };

        let title = submission.title().to_string();
        let saved = match submission {
            Submission::Create(fields) => {
                let saved = self.store.create(fields).await;
                if saved {
                    msg_success!(Message::TaskCreated(title));
                }
                saved
            }
            Submission::Update { id, patch } => {
                let saved = self.store.update(&id, patch).await;
                if saved {
                    msg_success!(Message::TaskUpdated(title));
                }
                saved
            }
        };

        // A failed submit keeps the form open with the draft intact.
        if saved {
            self.draft = None;
            self.visibility.close();
        }
        Ok(saved.into())
    }

    async fn delete(&mut self, id: &str) -> Result<Outcome> {
        let title = self.store.find(id).map(|t| t.title.clone()).unwrap_or_else(|| id.to_string());
        if !self.confirm.confirm(&Message::ConfirmDeleteTask(title).to_string())? {
            msg_info!(Message::OperationCancelled);
            return Ok(Outcome::Declined);
        }

        let deleted = self.store.delete(id).await;
        if deleted {
            msg_success!(Message::TaskDeleted(id.to_string()));
        }
        Ok(deleted.into())
    }
}
