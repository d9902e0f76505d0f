use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ResourceApi,
    error::Error,
    resource::{Resource, ResourceForm},
    store::resource::{ResourceState, SubmitPlan, SubmitTarget},
};

/// Somewhere a [`ResourceState`] lives: owned by a [`ResourceManager`] or held in a view signal
pub trait ResourceStore<R: Resource> {
    fn with_state<T>(&mut self, f: impl FnOnce(&mut ResourceState<R>) -> T) -> T;
}

impl<R: Resource> ResourceStore<R> for ResourceState<R> {
    fn with_state<T>(&mut self, f: impl FnOnce(&mut ResourceState<R>) -> T) -> T {
        f(self)
    }
}

impl<R: Resource> ResourceStore<R> for Signal<ResourceState<R>> {
    fn with_state<T>(&mut self, f: impl FnOnce(&mut ResourceState<R>) -> T) -> T {
        f(&mut *self.write())
    }
}

/// Sends a validated submission: the staged image is uploaded first and its URL stored
/// on the form before the record is created or updated.
pub async fn send_submission<R: Resource>(
    api: &ResourceApi<R>,
    plan: SubmitPlan<R>,
) -> Result<(), Error> {
    let SubmitPlan {
        target,
        mut form,
        image,
    } = plan;

    if let Some(image) = &image {
        let url = api.upload_image(image).await?;
        form.attach_image(url);
    }

    match target {
        SubmitTarget::Create => {
            api.create(&form).await?;
            tracing::info!(resource = R::LABEL, "Created record");
        }
        SubmitTarget::Update(id) => {
            api.update(&id, &form).await?;
            tracing::info!(resource = R::LABEL, id = %id, "Updated record");
        }
    }

    Ok(())
}

pub async fn fetch_all<R: Resource>(api: &ResourceApi<R>, store: &mut impl ResourceStore<R>) {
    store.with_state(|state| state.begin_fetch());

    let result = api.list().await.map_err(Error::from);

    store.with_state(|state| state.finish_fetch(result, Utc::now()));
}

/// Submits the open form; the list is refetched after a successful write.
pub async fn submit<R: Resource>(
    api: &ResourceApi<R>,
    store: &mut impl ResourceStore<R>,
) -> Result<(), Error> {
    let plan = match store.with_state(|state| state.begin_submit(Utc::now())) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::debug!(resource = R::LABEL, "Submit blocked: {}", e);
            return Err(e.into());
        }
    };

    let result = send_submission(api, plan).await;
    store.with_state(|state| state.finish_submit(&result, Utc::now()));

    if result.is_ok() {
        fetch_all(api, store).await;
    }

    result
}

/// Deletes the record awaiting confirmation, if any, then refetches.
pub async fn confirm_delete<R: Resource>(
    api: &ResourceApi<R>,
    store: &mut impl ResourceStore<R>,
) -> Result<(), Error> {
    let Some(id) = store.with_state(|state| state.confirm_delete()) else {
        return Ok(());
    };

    let result = api.delete(&id).await.map_err(Error::from);
    store.with_state(|state| state.finish_delete(&result, Utc::now()));

    match &result {
        Ok(()) => {
            tracing::info!(resource = R::LABEL, id = %id, "Deleted record");
            fetch_all(api, store).await;
        }
        Err(err) => tracing::warn!(resource = R::LABEL, id = %id, "Delete failed: {}", err),
    }

    result
}

/// Drives a [`ResourceState`] against the API outside of any view
pub struct ResourceManager<R: Resource> {
    api: ResourceApi<R>,
    state: ResourceState<R>,
}

impl<R: Resource> ResourceManager<R> {
    pub fn new(api: ResourceApi<R>, state: ResourceState<R>) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &ResourceState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ResourceState<R> {
        &mut self.state
    }

    pub async fn fetch_all(&mut self) {
        fetch_all(&self.api, &mut self.state).await
    }

    pub async fn submit(&mut self) -> Result<(), Error> {
        submit(&self.api, &mut self.state).await
    }

    pub async fn confirm_delete(&mut self) -> Result<(), Error> {
        confirm_delete(&self.api, &mut self.state).await
    }
}
