use crate::domain::models::InputEvent;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Element lookup on whatever surface hosts the search field.
#[cfg_attr(test, mockall::automock)]
pub trait Document: Send + Sync {
    // Subscribe to value changes of an input element. `None` if there is no such element.
    fn subscribe_input(&self, id: &str) -> Option<UnboundedReceiver<InputEvent>>;

    // Current form with this id, if attached.
    fn form(&self, id: &str) -> Option<Arc<dyn Form>>;
}

pub trait Form: Send + Sync {
    fn id(&self) -> &str;

    /// Fire-and-forget; whatever handles the submission is outside this crate.
    fn submit(&self);
}
