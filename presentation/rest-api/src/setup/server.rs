use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Serves until Ctrl-C, then gives in-flight requests
    /// `shutdown_timeout` to finish.
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.item_api),
            "Luxury Inventory API",
            "0.1.0",
        )
        .server(format!("http://{addr}"));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{addr}");
        tracing::info!("Swagger UI at http://{addr}/docs");
        tracing::info!("OpenAPI JSON at http://{addr}/openapi.json");

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    if let Err(err) = tokio::signal::ctrl_c().await {
                        tracing::error!("Failed to listen for shutdown signal: {err}");
                    }
                    tracing::info!("Shutdown signal received, draining connections");
                },
                Some(config.server.shutdown_timeout),
            )
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
