use std::io::{self, Write};

use activity_digest::{config::CONFIG, logging, pipeline};

fn main() {
    logging::init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match pipeline::run(&CONFIG, &mut out) {
        Ok(summary) => tracing::info!(
            "wrote {} of {} entries for {} to {}",
            summary.written,
            summary.matched,
            summary.target_date,
            summary.output_path.display()
        ),
        Err(e) => {
            tracing::error!("run failed: {}", e);
            let _ = writeln!(out, "Error: {}", e);
        }
    }
}
