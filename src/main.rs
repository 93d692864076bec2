#[tokio::main]
async fn main() {
    if let Err(e) = zr_express_proxy::run().await {
        eprintln!("zr-express-proxy: {}", e);
        std::process::exit(1);
    }
}
