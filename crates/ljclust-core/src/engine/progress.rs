#[derive(Debug, Clone)]
pub enum Progress {
    /// A sweep over `total_runs` (backend, size) combinations is starting.
    SweepStart { total_runs: u64 },
    /// One timed run is starting.
    RunStart {
        backend: &'static str,
        natoms: usize,
    },
    /// The current run finished.
    RunFinish,
    /// The whole sweep finished.
    SweepFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
