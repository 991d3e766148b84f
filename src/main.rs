//! hangar entry point
//!
//! Delegates to [`hangar::boot::run`]; prints the error and exits non-zero on
//! failure.

#[tokio::main]
async fn main() {
    if let Err(e) = hangar::boot::run().await {
        tracing::error!(error = %e, "fatal startup error");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
