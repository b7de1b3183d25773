use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use ljclust::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Bridges engine progress events to a single indicatif bar on stderr.
///
/// The bar stays hidden until a sweep starts, so commands that never report
/// progress produce no terminal noise.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self {
            pb: Arc::new(Mutex::new(ProgressBar::hidden())),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::SweepStart { total_runs } => {
                    pb_guard.set_draw_target(ProgressDrawTarget::stderr());
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_length(total_runs);
                    pb_guard.set_position(0);
                }
                Progress::RunStart { backend, natoms } => {
                    pb_guard.set_message(format!("{backend} n={natoms}"));
                }
                Progress::RunFinish => {
                    pb_guard.inc(1);
                }
                Progress::SweepFinish => {
                    pb_guard.finish_and_clear();
                }
                Progress::Message(msg) => {
                    pb_guard.println(msg);
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})")
            .expect("Failed to create progress bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
