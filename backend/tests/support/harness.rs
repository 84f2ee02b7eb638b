//! Server harness and shared world for the users endpoint scenarios.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. [`WorldFixture`] stops the server even
//! if a scenario panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::{Method, header};
use actix_web::{App, HttpServer, web};
use awc::Client;
use outcome_service::Trace;
use outcome_service::domain::{TRACE_ID_HEADER, User};
use outcome_service::inbound::http::health::{HealthState, live, ready};
use outcome_service::inbound::http::routes::{api_scope, not_found};
use outcome_service::inbound::http::state::{HttpState, PagingPolicy};
use outcome_service::outbound::memory::InMemoryUserRepository;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) struct UsersWorld {
    runtime: Runtime,
    local: LocalSet,
    base_url: Option<String>,
    server: Option<ServerHandle>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) last_cache_control: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<UsersWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        if let Some(server) = ctx.server.clone() {
            ctx.local.block_on(&ctx.runtime, async move {
                server.stop(true).await;
            });
        }
    }
}

pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    WorldFixture {
        world: Rc::new(RefCell::new(UsersWorld {
            runtime,
            local: LocalSet::new(),
            base_url: None,
            server: None,
            last_status: None,
            last_body: None,
            last_trace_id: None,
            last_cache_control: None,
        })),
    }
}

async fn spawn_server(users: Vec<User>) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    let http = web::Data::new(HttpState::new(
        Arc::new(InMemoryUserRepository::with_users(users)),
        PagingPolicy::default(),
    ));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(health.clone())
            .app_data(http.clone())
            .wrap(Trace)
            .service(api_scope())
            .service(ready)
            .service(live)
            .default_service(web::to(not_found))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

pub(crate) fn start_server(world: &SharedWorld, users: Vec<User>) {
    let (base_url, handle) = {
        let ctx = world.borrow();
        ctx.local
            .block_on(&ctx.runtime, spawn_server(users))
            .expect("server starts")
    };
    let mut ctx = world.borrow_mut();
    ctx.base_url = Some(base_url);
    ctx.server = Some(handle);
}

struct CapturedResponse {
    status: u16,
    trace_id: Option<String>,
    cache_control: Option<String>,
    body: Value,
}

pub(crate) fn perform_request(
    world: &SharedWorld,
    method: Method,
    path: &str,
    payload: Option<Value>,
) {
    let captured = {
        let ctx = world.borrow();
        let base_url = ctx.base_url.clone().expect("server started");
        let url = format!("{base_url}{path}");
        ctx.local.block_on(&ctx.runtime, async move {
            let request = Client::default().request(method, url);
            let mut response = match payload {
                Some(payload) => request.send_json(&payload).await.expect("json request"),
                None => request.send().await.expect("request"),
            };
            let header_text = |name: &str| {
                response
                    .headers()
                    .get(name)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned)
            };
            let trace_id = header_text(TRACE_ID_HEADER);
            let cache_control = header_text(header::CACHE_CONTROL.as_str());
            let status = response.status().as_u16();
            let body = response.body().await.expect("body");
            CapturedResponse {
                status,
                trace_id,
                cache_control,
                body: serde_json::from_slice(&body).expect("json body"),
            }
        })
    };

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_trace_id = captured.trace_id;
    ctx.last_cache_control = captured.cache_control;
    ctx.last_body = Some(captured.body);
}
