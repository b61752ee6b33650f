//! `ilert-checkmk-pager`: XML notification plugin reading the API key from
//! the contact's pager address.

use ilert_config::Variant;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = ilert_cli::run(Variant::Pager).await;
    std::process::exit(code.as_i32());
}
