//! Execution engines for controlling computation strategy
//!
//! This module provides the execution engine abstraction that unifies
//! primitive selection with execution strategy (sequential vs parallel).
//!
//! Both engines expose the same contract, so an estimator written against
//! `ExecutionEngine` is strategy-agnostic: output slot `i` is always produced
//! by the task for index `i`, and no task shares mutable state with another.
//! The only thing that changes between engines is who runs the tasks.

use crate::primitives::ComputePrimitives;
#[cfg(feature = "parallel")]
use crate::Result;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Marker trait for execution engine mode properties
pub trait ExecutionMode {
    /// Whether this engine executes tasks sequentially
    const IS_SEQUENTIAL: bool;
}

/// Trait for execution engines that control how computations are performed
///
/// An execution engine combines:
/// - Primitive operations (the kernel inner loops)
/// - Execution strategy (sequential vs parallel)
/// - Thread pool selection (shared Rayon pool or a dedicated one)
pub trait ExecutionEngine: Clone + Send + Sync + ExecutionMode {
    /// The type of primitives used by this engine
    type Primitives: ComputePrimitives;

    /// Get the primitives for low-level operations
    fn primitives(&self) -> &Self::Primitives;

    /// Execute a function in the engine's execution context
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send;

    /// Execute one independent task per index, collecting results in index order
    ///
    /// Task `i` owns output slot `i`; the returned vector always has length
    /// `count` with slot `i` holding task `i`'s result, regardless of
    /// strategy.
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(self.strategy(), ExecutionStrategy::Parallel)
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations synchronously in the current thread.
#[derive(Clone, Debug)]
pub struct SequentialEngine<P: ComputePrimitives> {
    primitives: P,
}

impl<P: ComputePrimitives> SequentialEngine<P> {
    /// Create a new sequential engine with the given primitives
    pub fn new(primitives: P) -> Self {
        Self { primitives }
    }
}

impl<P: ComputePrimitives> ExecutionMode for SequentialEngine<P> {
    const IS_SEQUENTIAL: bool = true;
}

impl<P: ComputePrimitives> ExecutionEngine for SequentialEngine<P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        f()
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's thread pool.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug)]
pub struct ParallelEngine<P: ComputePrimitives> {
    primitives: P,
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl<P: ComputePrimitives> ParallelEngine<P> {
    /// Create a new parallel engine with the default thread pool
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            thread_pool: None,
        }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(primitives: P, pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            primitives,
            thread_pool: Some(pool),
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(primitives: P, num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            primitives,
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl<P: ComputePrimitives> ExecutionMode for ParallelEngine<P> {
    const IS_SEQUENTIAL: bool = false;
}

#[cfg(feature = "parallel")]
impl<P: ComputePrimitives> ExecutionEngine for ParallelEngine<P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if let Some(pool) = &self.thread_pool {
            pool.install(f)
        } else {
            rayon::scope(|_| f())
        }
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Create a sequential scalar engine
pub fn scalar_sequential() -> SequentialEngine<crate::primitives::ScalarBackend> {
    SequentialEngine::new(crate::primitives::ScalarBackend)
}

/// Create a parallel scalar engine
#[cfg(feature = "parallel")]
pub fn scalar_parallel() -> ParallelEngine<crate::primitives::ScalarBackend> {
    ParallelEngine::new(crate::primitives::ScalarBackend)
}

/// Create the best engine available with the enabled features
pub fn auto_engine() -> impl ExecutionEngine {
    #[cfg(feature = "parallel")]
    {
        scalar_parallel()
    }
    #[cfg(not(feature = "parallel"))]
    {
        scalar_sequential()
    }
}
