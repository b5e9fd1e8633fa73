//! Permission check port and runner.
//!
//! A check is an async predicate over the invocation context. The runner
//! evaluates every check of a node as one concurrent batch.

use async_trait::async_trait;
use futures::future::try_join_all;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// Result type for a single check evaluation.
pub type CheckResult = Result<bool, CheckError>;

/// Shared, type-erased check.
pub type SharedCheck<C> = Arc<dyn Check<C>>;

/// Predicate gating whether a handler may run for a context.
///
/// `Ok(false)` denies the invocation; `Err` is a genuine failure that the
/// dispatcher surfaces.
#[async_trait]
pub trait Check<C>: Send + Sync {
    /// Evaluates the predicate.
    async fn check(&self, context: &C) -> CheckResult;
}

/// Errors raised by check predicates.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    /// The predicate failed with a message.
    #[error("check failed: {0}")]
    Failed(String),

    /// The predicate failed with an underlying error.
    #[error("check runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl CheckError {
    /// Creates a failure with a message.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    /// Wraps an underlying error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}

/// Check backed by an async closure over an owned context.
pub struct CheckFn<C, F> {
    func: F,
    _context: PhantomData<fn(C)>,
}

#[async_trait]
impl<C, F, Fut> Check<C> for CheckFn<C, F>
where
    C: Clone + Send + Sync + 'static,
    F: Fn(C) -> Fut + Send + Sync,
    Fut: Future<Output = CheckResult> + Send + 'static,
{
    async fn check(&self, context: &C) -> CheckResult {
        (self.func)(context.clone()).await
    }
}

/// Wraps an async closure as a shared check.
pub fn check_fn<C, F, Fut>(func: F) -> SharedCheck<C>
where
    C: Clone + Send + Sync + 'static,
    F: Fn(C) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = CheckResult> + Send + 'static,
{
    Arc::new(CheckFn {
        func,
        _context: PhantomData,
    })
}

/// Check backed by a synchronous predicate.
pub struct PredicateCheck<C, F> {
    func: F,
    _context: PhantomData<fn(&C)>,
}

#[async_trait]
impl<C, F> Check<C> for PredicateCheck<C, F>
where
    C: Sync,
    F: Fn(&C) -> bool + Send + Sync,
{
    async fn check(&self, context: &C) -> CheckResult {
        Ok((self.func)(context))
    }
}

/// Wraps a synchronous predicate as a shared check.
pub fn predicate<C, F>(func: F) -> SharedCheck<C>
where
    C: Sync + 'static,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Arc::new(PredicateCheck {
        func,
        _context: PhantomData,
    })
}

enum Denial {
    Rejected,
    Failed(CheckError),
}

/// Evaluates checks concurrently and aggregates the outcome.
///
/// An empty list always passes. Otherwise the batch settles on the first
/// rejection or failure; later predicates may still have run.
///
/// # Errors
///
/// Returns the first [`CheckError`] raised by a predicate.
pub async fn run_checks<C>(checks: &[SharedCheck<C>], context: &C) -> CheckResult {
    if checks.is_empty() {
        return Ok(true);
    }

    let batch = checks.iter().map(|check| async move {
        match check.check(context).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(Denial::Rejected),
            Err(error) => Err(Denial::Failed(error)),
        }
    });

    match try_join_all(batch).await {
        Ok(_) => Ok(true),
        Err(Denial::Rejected) => Ok(false),
        Err(Denial::Failed(error)) => Err(error),
    }
}
