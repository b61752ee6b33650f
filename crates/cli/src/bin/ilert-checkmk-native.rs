//! `ilert-checkmk-native`: XML notification plugin configured through the
//! CheckMK webhook URL parameter.

use ilert_config::Variant;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = ilert_cli::run(Variant::Native).await;
    std::process::exit(code.as_i32());
}
