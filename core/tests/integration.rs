//! Full lifecycle test against the live server.
//!
//! Starts the server on a random port, then exercises every client operation
//! over real HTTP using ureq.

use todo_core::{
    ApiError, CreateTodoItem, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoListInput,
    UpdateTodoItem,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data and the client does the status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse::new(status, body)
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn todolist_lifecycle() {
    let client = TodoClient::new(&format!("http://{}", start_server()));

    let lists = client
        .parse_list_todolists(execute(client.build_list_todolists()))
        .unwrap();
    assert!(lists.is_empty(), "expected empty list");

    let input = TodoListInput {
        name: "Test List".to_string(),
    };
    let req = client.build_create_todolist(&input).unwrap();
    let created = client.parse_create_todolist(execute(req)).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Test List");

    let fetched = client
        .parse_todolist(execute(client.build_get_todolist(created.id)))
        .unwrap();
    assert_eq!(fetched, created);

    let rename = TodoListInput {
        name: "Renamed".to_string(),
    };
    let req = client.build_update_todolist(created.id, &rename).unwrap();
    let renamed = client.parse_todolist(execute(req)).unwrap();
    assert_eq!(renamed.name, "Renamed");

    client
        .parse_delete(execute(client.build_delete_todolist(created.id)))
        .unwrap();

    let err = client
        .parse_todolist(execute(client.build_get_todolist(999)))
        .unwrap_err();
    assert!(
        matches!(err, ApiError::NotFound(ref m) if m == "Todo list with id 999 not found"),
        "unexpected error: {err:?}"
    );

    let err = client
        .parse_delete(execute(client.build_delete_todolist(created.id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn todo_item_lifecycle() {
    let client = TodoClient::new(&format!("http://{}", start_server()));

    let input = CreateTodoItem {
        list_id: 1,
        description: "x".to_string(),
    };
    let req = client.build_create_item(&input).unwrap();
    let created = client.parse_create_item(execute(req)).unwrap();
    assert!(!created.is_completed);
    let id = created.id;

    let fetched = client.parse_get_item(execute(client.build_get_item(id))).unwrap();
    assert_eq!(fetched, Some(created.clone()));

    let toggled = client
        .parse_toggle_item(execute(client.build_toggle_item(id)))
        .unwrap()
        .unwrap();
    assert!(toggled.is_completed);
    let toggled = client
        .parse_toggle_item(execute(client.build_toggle_item(id)))
        .unwrap()
        .unwrap();
    assert!(!toggled.is_completed);

    let update = UpdateTodoItem {
        description: "updated".to_string(),
    };
    let req = client.build_update_item(id, &update).unwrap();
    let updated = client.parse_update_item(execute(req)).unwrap();
    assert_eq!(updated.description, "updated");
    assert_eq!(updated.list_id, created.list_id);

    let items = client.parse_list_items(execute(client.build_list_items())).unwrap();
    assert_eq!(items, vec![updated]);

    client.parse_delete(execute(client.build_delete_item(id))).unwrap();

    // Silent misses on the read and toggle paths.
    assert!(client.parse_get_item(execute(client.build_get_item(id))).unwrap().is_none());
    assert!(client
        .parse_toggle_item(execute(client.build_toggle_item(id)))
        .unwrap()
        .is_none());

    let req = client.build_update_item(99999, &update).unwrap();
    let err = client.parse_update_item(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let bad = HttpRequest::json(
        HttpMethod::Post,
        client.build_list_items().url,
        "{}".to_string(),
    );
    let err = client.parse_create_item(execute(bad)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}
