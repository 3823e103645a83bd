use crate::domain::debounce::SearchConfig;
use crate::domain::document::{Document, Form};
use crate::domain::models::{FormSubmission, InputEvent};
use anyhow::{anyhow, bail, Result};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub const SEARCH_FIELD: &str = "search";
pub const TAG_INPUT_ID: &str = "tagSelect";
pub const SORT_INPUT_ID: &str = "sortSelect";

struct InputField {
    name: String,
    value: Mutex<String>,
    listeners: Mutex<Vec<UnboundedSender<InputEvent>>>,
}

pub struct PageForm {
    id: String,
    fields: Vec<Arc<InputField>>,
    sink: UnboundedSender<FormSubmission>,
}

impl Form for PageForm {
    fn id(&self) -> &str {
        &self.id
    }

    fn submit(&self) {
        let submission = FormSubmission {
            form_id: self.id.clone(),
            fields: self
                .fields
                .iter()
                .map(|field| (field.name.clone(), field.value.lock().clone()))
                .collect(),
            submitted_at: chrono::Local::now(),
        };
        tracing::info!(%submission, "form submitted");
        // Nobody handling submissions any more is not our problem.
        let _ = self.sink.send(submission);
    }
}

/// In-process page holding named input fields and the forms that own them.
#[derive(Default)]
pub struct Page {
    inputs: RwLock<HashMap<String, Arc<InputField>>>,
    forms: RwLock<HashMap<String, Arc<PageForm>>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with the search field and the filter form that submits it along
    /// with the tag filter (empty: all tags) and the sort order.
    pub fn search(
        config: &SearchConfig,
    ) -> Result<(Arc<Self>, UnboundedReceiver<FormSubmission>)> {
        let (tx, rx) = mpsc::unbounded_channel();
        let page = Self::new();
        page.add_input(&config.input_id, SEARCH_FIELD, "")?;
        page.add_input(TAG_INPUT_ID, "tag", "")?;
        page.add_input(SORT_INPUT_ID, "sort", "asc")?;
        page.add_form(
            &config.form_id,
            &[config.input_id.as_str(), TAG_INPUT_ID, SORT_INPUT_ID],
            tx,
        )?;
        Ok((Arc::new(page), rx))
    }

    /// Registers an input element. `name` is the key it is submitted under.
    /// Ids are unique: forms keep the element they were built with.
    pub fn add_input(&self, id: &str, name: &str, value: &str) -> Result<()> {
        let mut inputs = self.inputs.write();
        if inputs.contains_key(id) {
            bail!("duplicate input id {id:?}");
        }
        let field = InputField {
            name: name.to_string(),
            value: Mutex::new(value.to_string()),
            listeners: Mutex::new(Vec::new()),
        };
        inputs.insert(id.to_string(), Arc::new(field));
        Ok(())
    }

    pub fn add_form(
        &self,
        id: &str,
        field_ids: &[&str],
        sink: UnboundedSender<FormSubmission>,
    ) -> Result<()> {
        let inputs = self.inputs.read();
        let fields = field_ids
            .iter()
            .map(|field_id| {
                inputs
                    .get(*field_id)
                    .cloned()
                    .ok_or_else(|| anyhow!("form {id}: no input with id {field_id:?}"))
            })
            .collect::<Result<Vec<_>>>()?;
        drop(inputs);

        let form = PageForm {
            id: id.to_string(),
            fields,
            sink,
        };
        self.forms.write().insert(id.to_string(), Arc::new(form));
        Ok(())
    }

    pub fn remove_form(&self, id: &str) -> bool {
        self.forms.write().remove(id).is_some()
    }

    /// Sets an input's value and dispatches the change to its listeners.
    /// Returns `false` if there is no such input.
    pub fn set_value(&self, id: &str, value: &str) -> bool {
        let Some(field) = self.inputs.read().get(id).cloned() else {
            return false;
        };

        *field.value.lock() = value.to_string();

        let mut listeners = field.listeners.lock();
        listeners.retain(|listener| {
            listener
                .send(InputEvent {
                    value: value.to_string(),
                })
                .is_ok()
        });
        true
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.inputs
            .read()
            .get(id)
            .map(|field| field.value.lock().clone())
    }
}

impl Document for Page {
    fn subscribe_input(&self, id: &str) -> Option<UnboundedReceiver<InputEvent>> {
        let field = self.inputs.read().get(id).cloned()?;
        let (tx, rx) = mpsc::unbounded_channel();
        field.listeners.lock().push(tx);
        Some(rx)
    }

    fn form(&self, id: &str) -> Option<Arc<dyn Form>> {
        self.forms
            .read()
            .get(id)
            .map(|form| form.clone() as Arc<dyn Form>)
    }
}
