//! Execution contexts for network I/O and callback delivery.
//!
//! Network work and result delivery run on separate executors. The defaults mirror a
//! producer/consumer split: a [`SerialExecutor`] owns one dedicated thread and completes one
//! network task before starting the next, while a [`PoolExecutor`] delivers finished results to
//! application callbacks on `available_parallelism + 1` workers. Callers with their own runtime
//! can pass any [`Executor`], e.g. a [`TokioExecutor`] bound to a runtime handle.

// std
use std::{num::NonZero, thread};
// crates.io
use tokio::{
	runtime::{Builder as RuntimeBuilder, Handle, Runtime},
	sync::mpsc::{self, UnboundedSender},
};
// self
use crate::{_prelude::*, error::ConfigError};

/// Unit of work handed to an [`Executor`].
pub type Task = Pin<Box<dyn Future<Output = ()> + 'static + Send>>;

/// Where a piece of work is scheduled to run.
///
/// Dropping a task without polling it is allowed (for example after shutdown); the service
/// reports such calls as [`Error::Dispatch`].
pub trait Executor
where
	Self: 'static + Send + Sync,
{
	/// Schedules `task` to run to completion.
	fn spawn(&self, task: Task);
}

/// Pair of execution contexts used by the service handle.
#[derive(Clone)]
pub struct Executors {
	/// Context issuing network requests.
	pub network: Arc<dyn Executor>,
	/// Context delivering results to callbacks.
	pub callback: Arc<dyn Executor>,
}
impl Executors {
	/// Bundles caller-supplied executors.
	pub fn new(network: Arc<dyn Executor>, callback: Arc<dyn Executor>) -> Self {
		Self { network, callback }
	}

	/// Starts the default serial network executor and callback pool.
	pub fn with_defaults() -> Result<Self, ConfigError> {
		Ok(Self::new(Arc::new(SerialExecutor::new()?), Arc::new(PoolExecutor::new()?)))
	}
}
impl Debug for Executors {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Executors(..)")
	}
}

/// Single dedicated thread that runs tasks strictly one after another.
#[derive(Clone, Debug)]
pub struct SerialExecutor(UnboundedSender<Task>);
impl SerialExecutor {
	const THREAD_NAME: &'static str = "spotify-api-network";

	/// Spawns the worker thread.
	///
	/// The thread exits once every handle to the executor has been dropped and the queued tasks
	/// have finished.
	pub fn new() -> Result<Self, ConfigError> {
		let runtime = RuntimeBuilder::new_current_thread().enable_all().build()?;
		let (queue, mut pending) = mpsc::unbounded_channel::<Task>();

		thread::Builder::new().name(Self::THREAD_NAME.into()).spawn(move || {
			runtime.block_on(async move {
				while let Some(task) = pending.recv().await {
					task.await;
				}
			});
		})?;

		Ok(Self(queue))
	}
}
impl Executor for SerialExecutor {
	fn spawn(&self, task: Task) {
		// A closed queue drops the task, which the caller observes as a dispatch failure.
		let _ = self.0.send(task);
	}
}

/// Multi-threaded pool used for callback delivery.
#[derive(Debug)]
pub struct PoolExecutor(Option<Runtime>);
impl PoolExecutor {
	const THREAD_NAME: &'static str = "spotify-api-callback";

	/// Starts a pool sized by [`default_callback_pool_size`].
	pub fn new() -> Result<Self, ConfigError> {
		Self::with_workers(default_callback_pool_size())
	}

	/// Starts a pool with `workers` threads (at least one).
	pub fn with_workers(workers: usize) -> Result<Self, ConfigError> {
		let runtime = RuntimeBuilder::new_multi_thread()
			.worker_threads(workers.max(1))
			.thread_name(Self::THREAD_NAME)
			.enable_all()
			.build()?;

		Ok(Self(Some(runtime)))
	}
}
impl Executor for PoolExecutor {
	fn spawn(&self, task: Task) {
		if let Some(runtime) = &self.0 {
			runtime.spawn(task);
		}
	}
}
impl Drop for PoolExecutor {
	fn drop(&mut self) {
		// Blocking shutdown would panic when the last handle is dropped inside async code.
		if let Some(runtime) = self.0.take() {
			runtime.shutdown_background();
		}
	}
}

/// Spawns tasks onto an existing Tokio runtime.
#[derive(Clone, Debug)]
pub struct TokioExecutor(Handle);
impl TokioExecutor {
	/// Binds to the runtime driving the current thread.
	pub fn current() -> Result<Self, ConfigError> {
		Ok(Self(Handle::try_current()?))
	}

	/// Binds to the provided runtime handle.
	pub fn from_handle(handle: Handle) -> Self {
		Self(handle)
	}
}
impl Executor for TokioExecutor {
	fn spawn(&self, task: Task) {
		self.0.spawn(task);
	}
}

/// Default callback pool size: available parallelism plus one.
pub fn default_callback_pool_size() -> usize {
	thread::available_parallelism().map(NonZero::get).unwrap_or(1) + 1
}

#[cfg(test)]
mod tests {
	// std
	use std::{
		sync::{
			atomic::{AtomicUsize, Ordering},
			mpsc as std_mpsc,
		},
		time::Duration as StdDuration,
	};
	// self
	use super::*;

	const WAIT: StdDuration = StdDuration::from_secs(5);

	#[test]
	fn serial_executor_runs_one_task_at_a_time() {
		let executor = SerialExecutor::new().expect("Serial executor should start.");
		let in_flight = Arc::new(AtomicUsize::new(0));
		let peak = Arc::new(AtomicUsize::new(0));
		let (done_tx, done_rx) = std_mpsc::channel();

		for idx in 0..4 {
			let in_flight = in_flight.clone();
			let peak = peak.clone();
			let done_tx = done_tx.clone();

			executor.spawn(Box::pin(async move {
				let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;

				peak.fetch_max(now, Ordering::SeqCst);

				for _ in 0..3 {
					tokio::task::yield_now().await;
				}

				in_flight.fetch_sub(1, Ordering::SeqCst);
				done_tx.send(idx).expect("Test receiver should be alive.");
			}));
		}

		let order = (0..4)
			.map(|_| done_rx.recv_timeout(WAIT).expect("Every task should complete."))
			.collect::<Vec<_>>();

		assert_eq!(order, vec![0, 1, 2, 3]);
		assert_eq!(peak.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn serial_executor_uses_a_dedicated_thread() {
		let executor = SerialExecutor::new().expect("Serial executor should start.");
		let (tx, rx) = std_mpsc::channel();

		executor.spawn(Box::pin(async move {
			let _ = tx.send(thread::current().name().map(ToOwned::to_owned));
		}));

		let name = rx.recv_timeout(WAIT).expect("Task should report its thread.");

		assert_eq!(name.as_deref(), Some("spotify-api-network"));
	}

	#[test]
	fn pool_executor_delivers_on_named_workers() {
		let executor = PoolExecutor::with_workers(2).expect("Pool executor should start.");
		let (tx, rx) = std_mpsc::channel();

		executor.spawn(Box::pin(async move {
			let _ = tx.send(thread::current().name().map(ToOwned::to_owned));
		}));

		let name = rx.recv_timeout(WAIT).expect("Task should report its thread.");

		assert_eq!(name.as_deref(), Some("spotify-api-callback"));
	}

	#[tokio::test]
	async fn pool_executor_drops_inside_async_context() {
		let executor = PoolExecutor::new().expect("Pool executor should start.");

		drop(executor);
	}

	#[test]
	fn callback_pool_is_parallelism_plus_one() {
		let parallelism = thread::available_parallelism().map(NonZero::get).unwrap_or(1);

		assert_eq!(default_callback_pool_size(), parallelism + 1);
	}

	#[test]
	fn tokio_executor_requires_a_runtime() {
		assert!(matches!(TokioExecutor::current(), Err(ConfigError::NoRuntime(_))));
	}
}
