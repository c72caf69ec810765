use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// `RUST_LOG` wins over `--log-filter` when both are set.
pub fn init_logger(args: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.filter));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
