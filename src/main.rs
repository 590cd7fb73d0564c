use webframe::config::Config;
use webframe::http::request::Request;
use webframe::http::response::Response;
use webframe::server::Server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();
    let mut server = Server::new(cfg);

    server.static_files("webroot");

    server.get("/hello", |req: &Request, _res: &mut Response| {
        format!("Hello {}", req.get_value("name").unwrap_or("World"))
    });

    server.get("/pi", |_req: &Request, _res: &mut Response| {
        std::f64::consts::PI.to_string()
    });

    server.post("/echo", |req: &Request, _res: &mut Response| {
        format!("Echo: {}", req.body)
    });

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
