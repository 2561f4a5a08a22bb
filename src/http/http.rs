use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpResponseBuilder, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::common::common::parse_query;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce")
            .route(web::get().to(http_service_announce))
            .default_service(web::route().to(http_service_invalid_request_type)));
        cfg.service(web::resource("/scrape")
            .route(web::get().to(http_service_scrape))
            .default_service(web::route().to(http_service_invalid_request_type)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Builds the rustls server config from PEM encoded key and certificate chain.
pub fn http_service_tls_config(ssl_key: &str, ssl_cert: &str) -> std::io::Result<rustls::ServerConfig>
{
    let key_file = &mut BufReader::new(File::open(ssl_key)?);
    let certs_file = &mut BufReader::new(File::open(ssl_cert)?);

    let tls_certs = rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>()?;
    let tls_key = rustls_pemfile::private_key(key_file)?.ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, format!("no private key found in {ssl_key}"))
    })?;

    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(std::io::Error::other)
}

/// Binds one listener. The returned future resolves when the server stops;
/// signals are left to the caller, which stops it through the handle.
pub async fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: HttpTrackersConfig
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let threads = http_server_object.threads.max(1) as usize;
    let tls_config = match http_server_object.ssl {
        true => Some(http_service_tls_config(&http_server_object.ssl_key, &http_server_object.ssl_cert)?),
        false => None
    };

    let service_data = Arc::new(HttpServiceData {
        torrent_tracker: data,
        http_trackers_config: Arc::new(http_server_object),
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(threads);

    let server = match tls_config {
        Some(tls_config) => {
            info!("[HTTP] Starting server listener with SSL on {addr}");
            server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        }
        None => {
            info!("[HTTP] Starting server listener on {addr}");
            server.bind((addr.ip(), addr.port()))?
        }
    };

    let server = server.disable_signals().run();
    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(response) => return response
    };
    let tracker = data.torrent_tracker.as_ref();
    http_service_stats_log(tracker, ip, StatsEvent::Tcp4AnnouncesHandled, StatsEvent::Tcp6AnnouncesHandled);

    let query = parse_query(Some(request.query_string()));
    match tracker.announce(ip, &query) {
        Ok(response) => http_service_response(response),
        Err(error) => http_service_error(tracker, ip, error)
    }
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(response) => return response
    };
    let tracker = data.torrent_tracker.as_ref();
    http_service_stats_log(tracker, ip, StatsEvent::Tcp4ScrapesHandled, StatsEvent::Tcp6ScrapesHandled);

    let query = parse_query(Some(request.query_string()));
    match tracker.scrape(&query) {
        Ok(response) => http_service_response(response),
        Err(error) => http_service_error(tracker, ip, error)
    }
}

/// Known path, wrong method.
pub async fn http_service_invalid_request_type(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(response) => return response
    };
    debug!("[HTTP] Request from {ip}: {} {} not allowed", request.method(), request.path());
    http_service_error(data.torrent_tracker.as_ref(), ip, TrackerError::InvalidRequestType)
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(response) => return response
    };
    http_service_stats_log(data.torrent_tracker.as_ref(), ip, StatsEvent::Tcp4NotFound, StatsEvent::Tcp6NotFound);
    debug!("[HTTP] Request from {ip}: 404 Not Found");

    let mut body = BencodeValue::dictionary();
    body.insert("failure reason", "unknown request");
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(body.encode())
}

pub fn http_service_response(body: BencodeValue) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(body.encode())
}

/// Renders a request failure. Only [`TrackerError::Generic`] is a server side
/// status; everything else is the client's fault.
pub fn http_service_error(tracker: &TorrentTracker, ip: IpAddr, error: TrackerError) -> HttpResponse
{
    http_service_stats_log(tracker, ip, StatsEvent::Tcp4Failure, StatsEvent::Tcp6Failure);
    debug!("[HTTP] Request from {ip} failed with {}: {error}", error.code());

    let status = match error {
        TrackerError::Generic => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST
    };
    HttpResponseBuilder::new(status)
        .content_type(ContentType::plaintext())
        .body(error.to_bencode().encode())
}

pub fn http_service_stats_log(tracker: &TorrentTracker, ip: IpAddr, tcp4: StatsEvent, tcp6: StatsEvent)
{
    match ip.is_ipv4() {
        true => tracker.update_stats(tcp4, 1),
        false => tracker.update_stats(tcp6, 1)
    };
}

/// The client address: the configured `real_ip` header when the request
/// carries it, the socket peer otherwise. A header that does not hold an
/// address yields `None` instead of falling back.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, data: &HttpServiceData) -> Option<IpAddr>
{
    let real_ip = data.http_trackers_config.real_ip.as_str();
    if !real_ip.is_empty() && let Some(header) = request.headers().get(real_ip) {
        return header.to_str().ok()
            .and_then(|value| value.split(',').next())
            .and_then(|value| value.trim().parse::<IpAddr>().ok())
            .map(|ip| ip.to_canonical());
    }
    request.peer_addr().map(|addr| addr.ip().to_canonical())
}

pub fn http_validate_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, HttpResponse>
{
    match http_service_retrieve_remote_ip(request, data) {
        Some(ip) => {
            http_service_stats_log(data.torrent_tracker.as_ref(), ip, StatsEvent::Tcp4ConnectionsHandled, StatsEvent::Tcp6ConnectionsHandled);
            Ok(ip)
        }
        None => {
            let mut body = BencodeValue::dictionary();
            body.insert("failure reason", "unknown origin ip");
            Err(HttpResponse::BadRequest().content_type(ContentType::plaintext()).body(body.encode()))
        }
    }
}
