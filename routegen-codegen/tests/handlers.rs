//! End-to-end tests for handler generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{fs, str::FromStr};

use routegen_codegen::{Compat, Error, HandlerGenerator, TemplateStore};
use routegen_core::{Overwrite, Version};
use routegen_spec::ApiSpec;
use tempfile::TempDir;

const ROOT: &str = "github.com/acme/users";

const USERS_API: &str = r#"
    [service]
    name = "users-api"

    [[service.groups]]

    [[service.groups.routes]]
    method = "get"
    path = "/users"
    handler = "listUsers"
    request = "ListReq"
    response = "ListResp"
"#;

fn parse(toml: &str) -> ApiSpec {
    ApiSpec::from_str(toml).expect("Failed to parse API spec")
}

fn read(temp: &TempDir, path: &str) -> String {
    fs::read_to_string(temp.path().join(path)).expect("generated file missing")
}

#[test]
fn test_list_users_modern() {
    let temp = TempDir::new().unwrap();
    let stats = HandlerGenerator::new(temp.path(), ROOT)
        .with_version(&Version::new(2, 0, 0))
        .generate(&parse(USERS_API))
        .unwrap();

    assert_eq!(stats.written, vec!["internal/handler/listusershandler.go"]);
    assert!(stats.skipped.is_empty());

    let content = read(&temp, "internal/handler/listusershandler.go");
    insta::assert_snapshot!("list_users_modern", content);
}

#[test]
fn test_list_users_legacy() {
    let temp = TempDir::new().unwrap();
    HandlerGenerator::new(temp.path(), ROOT)
        .with_version(&Version::new(1, 1, 10))
        .generate(&parse(USERS_API))
        .unwrap();

    let content = read(&temp, "internal/handler/listusershandler.go");
    insta::assert_snapshot!("list_users_legacy", content);
}

#[test]
fn test_httpx_imported_once() {
    for compat in [Compat::Legacy, Compat::Modern] {
        let temp = TempDir::new().unwrap();
        HandlerGenerator::new(temp.path(), ROOT)
            .with_compat(compat)
            .generate(&parse(USERS_API))
            .unwrap();

        let content = read(&temp, "internal/handler/listusershandler.go");
        let count = content
            .matches("\"github.com/tal-tech/go-zero/rest/httpx\"")
            .count();
        assert_eq!(count, 1, "{compat:?}");
    }
}

#[test]
fn test_no_request_no_response() {
    let api = parse(
        r#"
        [service]
        name = "health"

        [[service.groups]]

        [[service.groups.routes]]
        method = "get"
        path = "/ping"
        handler = "pingHandler"
        "#,
    );
    let temp = TempDir::new().unwrap();
    HandlerGenerator::new(temp.path(), ROOT)
        .with_compat(Compat::Modern)
        .generate(&api)
        .unwrap();

    let content = read(&temp, "internal/handler/pinghandler.go");
    assert!(content.contains("func pingHandler(ctx *svc.ServiceContext) http.HandlerFunc {"));
    assert!(content.contains("\t\tl := logic.NewPingLogic(r.Context(), ctx)\n\t\terr := l.Ping()\n"));
    assert!(content.contains("\t\t\thttpx.Ok(w)\n"));
    assert!(!content.contains("var req"));
    assert!(!content.contains("internal/types"));
}

#[test]
fn test_grouped_routes_nested_and_exported() {
    let api = parse(
        r#"
        [service]
        name = "shop"

        [[service.groups]]
        annotation = { group = "orders" }

        [[service.groups.routes]]
        method = "post"
        path = "/orders"
        handler = "createOrder"
        request = "CreateOrderReq"

        [[service.groups.routes]]
        method = "get"
        path = "/orders/refunds"
        handler = "listRefunds"
        response = "RefundList"
        annotation = { group = "/orders/refunds/" }
        "#,
    );
    let temp = TempDir::new().unwrap();
    let stats = HandlerGenerator::new(temp.path(), "github.com/acme/shop")
        .with_naming_format("go_zero")
        .generate(&api)
        .unwrap();

    assert_eq!(
        stats.written,
        vec![
            "internal/handler/orders/create_order_handler.go",
            "internal/handler/orders/refunds/list_refunds_handler.go",
        ]
    );

    let create = read(&temp, "internal/handler/orders/create_order_handler.go");
    assert!(create.contains("func CreateOrderHandler("));
    assert!(create.contains("\"github.com/acme/shop/internal/logic/orders\""));
    assert!(create.contains("err := l.CreateOrder(req)"));

    let refunds = read(&temp, "internal/handler/orders/refunds/list_refunds_handler.go");
    assert!(refunds.contains("func ListRefundsHandler("));
    assert!(refunds.contains("\"github.com/acme/shop/internal/logic/orders/refunds\""));
    assert!(refunds.contains("resp, err := l.ListRefunds()"));
}

#[test]
fn test_existing_handler_kept() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("internal/handler/listusershandler.go");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "// edited by hand\n").unwrap();

    let stats = HandlerGenerator::new(temp.path(), ROOT)
        .generate(&parse(USERS_API))
        .unwrap();

    assert!(stats.written.is_empty());
    assert_eq!(stats.skipped, vec!["internal/handler/listusershandler.go"]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "// edited by hand\n");
}

#[test]
fn test_force_overwrites_existing_handler() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("internal/handler/listusershandler.go");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "// stale\n").unwrap();

    let stats = HandlerGenerator::new(temp.path(), ROOT)
        .with_overwrite(Overwrite::Always)
        .generate(&parse(USERS_API))
        .unwrap();

    assert_eq!(stats.written.len(), 1);
    assert!(fs::read_to_string(&path).unwrap().contains("listUsersHandler"));
}

#[test]
fn test_bad_naming_format_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let err = HandlerGenerator::new(temp.path(), ROOT)
        .with_naming_format("camelCase")
        .generate(&parse(USERS_API))
        .unwrap_err();

    assert!(matches!(err, Error::Naming(_)));
    assert!(!temp.path().join("internal").exists());
}

#[test]
fn test_first_error_aborts_run() {
    let api = parse(
        r#"
        [service]
        name = "users-api"

        [[service.groups]]

        [[service.groups.routes]]
        handler = "first"

        [[service.groups.routes]]
        handler = "second"
        "#,
    );
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("templates");
    fs::create_dir_all(home.join("api")).unwrap();
    fs::write(home.join("api/handler.tpl"), "func {{ HandlerName }}() {{ Missing }}").unwrap();

    let out = temp.path().join("out");
    let err = HandlerGenerator::new(&out, ROOT)
        .with_store(TemplateStore::with_home(&home))
        .generate(&api)
        .unwrap_err();

    assert!(matches!(err, Error::Template { .. }));
    assert!(err.to_string().contains("handlerTemplate"));
    assert!(!out.join("internal/handler/secondhandler.go").exists());
}

#[test]
fn test_override_template() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("templates");
    fs::create_dir_all(home.join("api")).unwrap();
    fs::write(
        home.join("api/handler.tpl"),
        "// {{ HandlerName }} -> {{ LogicType }}.{{ Call }}\n",
    )
    .unwrap();

    let files = HandlerGenerator::new(temp.path().join("out"), ROOT)
        .with_store(TemplateStore::with_home(&home))
        .preview(&parse(USERS_API))
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "internal/handler/listusershandler.go");
    assert_eq!(
        files[0].content,
        "// listUsersHandler -> ListUsersLogic.ListUsers\n"
    );
}

#[test]
fn test_preview_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let files = HandlerGenerator::new(temp.path(), ROOT)
        .preview(&parse(USERS_API))
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].content.starts_with("package handler\n"));
    assert!(!temp.path().join("internal").exists());
}

#[test]
fn test_generation_is_deterministic() {
    let api = parse(USERS_API);
    let first = HandlerGenerator::new("/out", ROOT).preview(&api).unwrap();
    let second = HandlerGenerator::new("/out", ROOT).preview(&api).unwrap();
    assert_eq!(first, second);
}
