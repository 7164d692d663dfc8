#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::{IntoResponse, Json, Response},
        routing::get,
        Router,
    };
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{info, warn};
    use unitconv::{BatchResult, ConversionError, ConversionResult, Engine, UnitListing};

    type SharedEngine = Arc<Engine>;

    #[derive(Debug, Deserialize)]
    struct ConvertParams {
        value: f64,
        from: String,
        to: String,
    }

    #[derive(Debug, Deserialize)]
    struct BatchParams {
        values: String,
        from: String,
        to: String,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    /// Failure of a single request, rendered as `400 {"error": ...}`
    #[derive(Debug)]
    struct ApiError(String);

    impl From<ConversionError> for ApiError {
        fn from(err: ConversionError) -> Self {
            ApiError(err.to_string())
        }
    }

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: self.0 }),
            )
                .into_response()
        }
    }

    /// Build the application router around a shared engine
    pub fn router(engine: Engine) -> Router {
        let shared_engine: SharedEngine = Arc::new(engine);

        Router::new()
            .route("/healthz", get(health_check))
            .route("/convert", get(convert))
            .route("/units", get(list_units))
            .route("/batch-convert", get(batch_convert))
            .layer(CorsLayer::permissive())
            .with_state(shared_engine)
    }

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "unitconv=info,tower_http=info".into()),
            )
            .init();

        let app = router(engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("unitconv server listening on {}", addr);
        info!("Supported conversions: temperature, distance, speed, pressure");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "healthy",
            "service": "unitconv",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn convert(
        State(engine): State<SharedEngine>,
        Query(params): Query<ConvertParams>,
    ) -> Result<Json<ConversionResult>, ApiError> {
        if !params.value.is_finite() {
            return Err(ApiError(format!(
                "Value must be a finite number, got {}",
                params.value
            )));
        }

        let result = engine
            .convert(params.value, &params.from, &params.to)
            .map_err(|e| {
                warn!("Conversion rejected: {}", e);
                ApiError::from(e)
            })?;

        info!(
            "Conversion: {} {} -> {:.4} {}",
            result.value, result.from, result.result, result.to
        );

        Ok(Json(result))
    }

    async fn list_units(State(engine): State<SharedEngine>) -> Json<UnitListing> {
        Json(engine.list_units())
    }

    async fn batch_convert(
        State(engine): State<SharedEngine>,
        Query(params): Query<BatchParams>,
    ) -> Result<Json<BatchResult>, ApiError> {
        let batch = engine
            .convert_batch_str(&params.values, &params.from, &params.to)
            .map_err(|e| {
                warn!("Batch conversion rejected: {}", e);
                ApiError::from(e)
            })?;

        info!(
            "Batch conversion: {} value(s) {} -> {}",
            batch.count, batch.from, batch.to
        );

        Ok(Json(batch))
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: unitconv::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
