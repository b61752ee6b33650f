//! `ilert-checkmk`: JSON notification plugin for the `checkmk-ext` channel.

use ilert_config::Variant;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = ilert_cli::run(Variant::Extension).await;
    std::process::exit(code.as_i32());
}
