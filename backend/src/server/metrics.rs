//! Optional Prometheus request metrics.
//!
//! [`MetricsLayer`] erases the body type so the app has the same shape with
//! or without a Prometheus registry attached.

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;

/// Namespace prefixed to every exported metric.
const METRICS_NAMESPACE: &str = "outcome_service";
/// Path serving the Prometheus text exposition.
const METRICS_ENDPOINT: &str = "/metrics";

/// Build the Prometheus middleware serving [`METRICS_ENDPOINT`].
pub(crate) fn build_prometheus() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
        .endpoint(METRICS_ENDPOINT)
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}

#[derive(Clone)]
pub(crate) enum MetricsLayer {
    Enabled(Arc<PrometheusMetrics>),
    Disabled,
}

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        metrics.map_or(Self::Disabled, |metrics| Self::Enabled(Arc::new(metrics)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self.clone() {
            MetricsLayer::Enabled(metrics) => {
                let fut = Compat::new((*metrics).clone()).new_transform(service);
                Box::pin(async move { Ok(boxed::service(fut.await?)) })
            }
            MetricsLayer::Disabled => Box::pin(async move {
                let svc = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Ok(boxed::service(svc))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    #[rstest]
    #[case(false, StatusCode::NOT_FOUND)]
    #[case(true, StatusCode::OK)]
    #[actix_web::test]
    async fn metrics_endpoint_exists_only_when_enabled(
        #[case] enabled: bool,
        #[case] expected: StatusCode,
    ) {
        let metrics = if enabled {
            Some(build_prometheus().expect("metrics build"))
        } else {
            None
        };
        let app = test::init_service(
            App::new()
                .wrap(MetricsLayer::from_option(metrics))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let ping = test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;
        assert_eq!(ping.status(), StatusCode::OK);
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri(METRICS_ENDPOINT).to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }
}
