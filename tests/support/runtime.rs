//! Tokio runtime and Wiremock server shared across scenario steps.

use std::rc::Rc;

use exhibit::WorkflowError;
use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Runtime handle that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct ScenarioRuntime(Rc<Runtime>);

impl ScenarioRuntime {
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

/// Returns the scenario runtime, starting it and the mock server on first use.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] when the runtime cannot be created.
pub fn ensure_server(
    runtime: &Slot<ScenarioRuntime>,
    server: &Slot<MockServer>,
) -> Result<ScenarioRuntime, WorkflowError> {
    if runtime.with_ref(|_| ()).is_none() {
        let created = Runtime::new().map_err(|error| WorkflowError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        })?;
        runtime.set(ScenarioRuntime(Rc::new(created)));
    }

    let shared = runtime.get().ok_or_else(|| WorkflowError::Api {
        message: "runtime not initialised after set".to_owned(),
    })?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared.block_on(MockServer::start()));
    }
    Ok(shared)
}

/// Mounts `mock` on the scenario server.
///
/// # Errors
///
/// Propagates [`ensure_server`] failures.
pub fn mount(
    runtime: &Slot<ScenarioRuntime>,
    server: &Slot<MockServer>,
    mock: Mock,
) -> Result<(), WorkflowError> {
    let shared = ensure_server(runtime, server)?;
    server
        .with_ref(|mock_server| shared.block_on(mock.mount(mock_server)))
        .ok_or_else(|| WorkflowError::Api {
            message: "mock server not initialised".to_owned(),
        })
}
