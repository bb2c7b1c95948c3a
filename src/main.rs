#[tokio::main]
async fn main() {
    studio_backend::run().await;
}
