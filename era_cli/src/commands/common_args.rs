use clap::Args;

/// Log options
#[derive(Clone, Args)]
pub struct LogOptions {
    /// Do not print log messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Profiling granularity.
    /// Setting any value restricts logs to profiling information
    #[arg(long)]
    profiling: Option<usize>,
}

impl LogOptions {
    /// Try set up the logger based on the verbosity level
    pub fn try_setup_logger(&self) {
        use tracing_forest::ForestLayer;
        use tracing_subscriber::{
            EnvFilter, Registry,
            filter::{LevelFilter, filter_fn},
            fmt,
            layer::SubscriberExt,
            util::SubscriberInitExt,
        };

        if self.quiet {
            return;
        }

        // default filter
        let default_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        // spans with level i contain the field "profiling_{i}"
        // this restricts statistics to first (args.profiling) levels
        let profiling_level = self.profiling.unwrap_or(1);
        let filter_by_profiling_level = filter_fn(move |metadata| {
            (1..=profiling_level)
                .map(|i| format!("profiling_{i}"))
                .any(|field| metadata.fields().field(&field).is_some())
        });

        let fmt_layer = fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_thread_ids(false)
            .with_thread_names(false)
            .without_time();

        Registry::default()
            .with(self.profiling.is_some().then_some(ForestLayer::default()))
            .with(fmt_layer)
            // if some profiling granularity is specified, use the profiling filter,
            // otherwise use the default
            .with(
                self.profiling
                    .is_some()
                    .then_some(filter_by_profiling_level),
            )
            .with(self.profiling.is_none().then_some(default_filter))
            .try_init()
            .ok();
    }
}
