use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config, info, server::start_api_server, types::PkceToken};

pub async fn serve() {
    let state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    info!("Serving import API on {}", config::server_addr());
    start_api_server(state).await;
}
