// Single-threaded periodic task scheduler.
//
// Every task runs on one LocalSet, so at most one task body executes at a
// time. Task bodies are synchronous: once started they run to completion
// before any other task can observe shared state.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::LocalSet;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::alerts::FeedError;

type TaskResult = Result<(), FeedError>;

enum Schedule {
    /// First delay, then period
    Every(Duration, Duration, Box<dyn FnMut() -> TaskResult>),
    After(Duration, Box<dyn FnOnce() -> TaskResult>),
}

struct Task {
    name: &'static str,
    schedule: Schedule,
}

#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Run `job` every `period`, first one period after start.
    pub fn every<F>(&mut self, name: &'static str, period: Duration, job: F) -> &mut Self
    where
        F: FnMut() -> TaskResult + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        self.tasks.push(Task {
            name,
            schedule: Schedule::Every(period, period, Box::new(job)),
        });
        self
    }

    /// Like `every`, but also runs `job` once right at start.
    pub fn every_from_start<F>(&mut self, name: &'static str, period: Duration, job: F) -> &mut Self
    where
        F: FnMut() -> TaskResult + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        self.tasks.push(Task {
            name,
            schedule: Schedule::Every(Duration::ZERO, period, Box::new(job)),
        });
        self
    }

    /// Run `job` once, `delay` after start.
    pub fn after<F>(&mut self, name: &'static str, delay: Duration, job: F) -> &mut Self
    where
        F: FnOnce() -> TaskResult + 'static,
    {
        self.tasks.push(Task {
            name,
            schedule: Schedule::After(delay, Box::new(job)),
        });
        self
    }

    pub fn task_names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|t| t.name).collect()
    }

    /// Run all tasks until `shutdown` resolves or a task fails.
    ///
    /// Must be awaited on a current-thread runtime.
    pub async fn run_until<S>(self, shutdown: S) -> TaskResult
    where
        S: Future<Output = ()>,
    {
        let (err_tx, mut err_rx) = mpsc::unbounded_channel::<(&'static str, FeedError)>();
        let local = LocalSet::new();
        let task_count = self.tasks.len();

        for task in self.tasks {
            let err_tx = err_tx.clone();
            let name = task.name;
            match task.schedule {
                Schedule::Every(first, period, mut job) => {
                    local.spawn_local(async move {
                        let mut ticker = time::interval_at(Instant::now() + first, period);
                        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                        loop {
                            ticker.tick().await;
                            if let Err(e) = job() {
                                let _ = err_tx.send((name, e));
                                break;
                            }
                        }
                    });
                }
                Schedule::After(delay, job) => {
                    local.spawn_local(async move {
                        time::sleep(delay).await;
                        if let Err(e) = job() {
                            let _ = err_tx.send((name, e));
                        }
                    });
                }
            }
        }
        drop(err_tx);

        log::info!("Scheduler started with {} tasks", task_count);
        let result = local
            .run_until(async move {
                tokio::select! {
                    _ = shutdown => Ok(()),
                    Some((name, e)) = err_rx.recv() => {
                        log::error!("Task '{}' failed: {}", name, e);
                        Err(e)
                    }
                }
            })
            .await;
        log::info!("Scheduler stopped");
        result
    }
}
