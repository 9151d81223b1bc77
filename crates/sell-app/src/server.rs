use salvo::Listener;
use salvo::conn::TcpListener;
use salvo::conn::tcp::TcpAcceptor;

/// ## Summary
/// Binds the HTTP listener on `addr`.
///
/// ## Errors
/// Returns an error if the address cannot be bound, e.g. when it is in use.
pub async fn bind(addr: &str) -> anyhow::Result<TcpAcceptor> {
    let acceptor = TcpListener::new(addr.to_owned()).try_bind().await?;
    tracing::info!("Server listening on {addr}");
    Ok(acceptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_address_in_use() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = taken.local_addr().expect("local addr").to_string();

        assert!(bind(&addr).await.is_err());
    }
}
