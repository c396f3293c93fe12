use crate::error::FetchError;
use std::future::Future;

/// Progress of one catalog call, owned by whoever issued it.
///
/// A call moves `Idle -> InFlight -> Succeeded | Failed` and never leaves a
/// terminal state on its own; starting another call replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    InFlight,
    Succeeded(T),
    Failed(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Mark a call as started, dropping any previous outcome
    pub fn begin(&mut self) {
        *self = FetchState::InFlight;
    }

    /// Record the outcome of the call
    pub fn finish(&mut self, result: Result<T, FetchError>) {
        *self = result.into();
    }

    /// Run `call` to completion, moving through every state on the way
    pub async fn track<F>(&mut self, call: F)
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        self.begin();
        let result = call.await;
        self.finish(result);
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, FetchState::InFlight)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Succeeded(_) | FetchState::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchState::Succeeded(value),
            Err(err) => FetchState::Failed(err),
        }
    }
}
