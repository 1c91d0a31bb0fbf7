use colored::Colorize;
use env_logger::{Builder, Env};
use std::io::Write;

/// Initialize the logger used by the hooks in this crate.
///
/// Should be called once by the host binary before any hook runs. Respects
/// `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(logging_env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                record.target().to_ascii_lowercase().bold().bright_yellow(),
                record.args()
            )
        })
        .init();
}
