use crate::cli::Args;
use http::Method;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    let allowed_origins = args
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .expect("Failed to parse an allowed CORS origin.")
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([
            "User-Agent".parse().unwrap(),
            "Sec-Fetch-Mode".parse().unwrap(),
            "Referer".parse().unwrap(),
            "Origin".parse().unwrap(),
            "Access-Control-Request-Method".parse().unwrap(),
            "Access-Control-Request-Headers".parse().unwrap(),
            "content-type".parse().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
