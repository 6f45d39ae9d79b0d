use std::sync::Arc;

use crate::api::client::RequestError;

/// Observable state of a cached read
#[derive(Debug)]
pub enum QueryState<T> {
    /// Never requested, or gated off
    Idle,
    /// First fetch in flight, nothing cached yet
    Loading,
    Success(Arc<T>),
    Failure(RequestError),
}

impl<T> QueryState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryState::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, QueryState::Failure(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RequestError> {
        match self {
            QueryState::Failure(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_result(self) -> Option<Result<Arc<T>, RequestError>> {
        match self {
            QueryState::Success(data) => Some(Ok(data)),
            QueryState::Failure(error) => Some(Err(error)),
            QueryState::Idle | QueryState::Loading => None,
        }
    }
}

// manual impl: `T` itself need not be Clone
impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Success(data) => QueryState::Success(Arc::clone(data)),
            QueryState::Failure(error) => QueryState::Failure(error.clone()),
        }
    }
}
