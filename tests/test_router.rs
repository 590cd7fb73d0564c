use webframe::http::request::{Method, Request};
use webframe::http::response::Response;
use webframe::server::router::Router;

fn call_get(router: &Router, path: &str, target: &str) -> Option<String> {
    let req = Request::new(Method::GET, target, String::new());
    let mut res = Response::new();
    router
        .lookup_get(path)
        .map(|service| service.execute(&req, &mut res))
}

#[test]
fn test_registered_path_is_prefixed() {
    let mut router = Router::new();
    router.get("/hello", |_req: &Request, _res: &mut Response| {
        "hi".to_string()
    });

    assert!(router.lookup_get("/app/hello").is_some());
    assert!(router.lookup_get("/hello").is_none());
}

#[test]
fn test_lookup_is_exact_match() {
    let mut router = Router::new();
    router.get("/hello", |_req: &Request, _res: &mut Response| {
        "hi".to_string()
    });

    // No trailing-slash normalization, no prefix matching
    assert!(router.lookup_get("/app/hello/").is_none());
    assert!(router.lookup_get("/app/hell").is_none());
    assert!(router.lookup_get("/app/hello/extra").is_none());
}

#[test]
fn test_reregistration_overwrites_silently() {
    let mut router = Router::new();
    router.get("/greet", |_req: &Request, _res: &mut Response| {
        "first".to_string()
    });
    router.get("/greet", |_req: &Request, _res: &mut Response| {
        "second".to_string()
    });

    let body = call_get(&router, "/app/greet", "/app/greet").unwrap();
    assert_eq!(body, "second");
}

#[test]
fn test_get_and_post_tables_are_separate() {
    let mut router = Router::new();
    router.get("/thing", |_req: &Request, _res: &mut Response| {
        "from get".to_string()
    });
    router.post("/thing", |_req: &Request, _res: &mut Response| {
        "from post".to_string()
    });

    assert!(router.lookup_get("/app/thing").is_some());
    assert!(router.lookup_post("/app/thing").is_some());

    let mut router = Router::new();
    router.post("/only-post", |_req: &Request, _res: &mut Response| {
        "post".to_string()
    });
    assert!(router.lookup_get("/app/only-post").is_none());
}

#[test]
fn test_handler_sees_query_params() {
    let mut router = Router::new();
    router.get("/hello", |req: &Request, _res: &mut Response| {
        format!("Hello {}", req.get_value("name").unwrap_or(""))
    });

    let body = call_get(&router, "/app/hello", "/app/hello?name=Sergio").unwrap();
    assert_eq!(body, "Hello Sergio");
}

#[test]
fn test_handler_can_mutate_response() {
    let mut router = Router::new();
    router.get("/json", |_req: &Request, res: &mut Response| {
        res.set_header("Content-Type", "application/json");
        "{}".to_string()
    });

    let req = Request::new(Method::GET, "/app/json", String::new());
    let mut res = Response::new();
    let body = router
        .lookup_get("/app/json")
        .unwrap()
        .execute(&req, &mut res);

    assert_eq!(body, "{}");
    assert_eq!(
        res.headers.get("Content-Type").unwrap(),
        "application/json"
    );
}

#[test]
fn test_static_root_configuration() {
    let mut router = Router::new();
    assert!(router.static_root().is_none());

    router.static_files("webroot");
    assert_eq!(router.static_root().unwrap().to_str().unwrap(), "webroot");
}
