//! Full CRUD lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that the core's request
//! building and response parsing work end-to-end with the actual server.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Task, TaskClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start mock server on a random port.
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
            mock_server::run(listener, mock_server::app()).await
        })
        .unwrap();
    });

    let client = TaskClient::new(&format!("http://{addr}"));

    // Step 2: list — should be empty.
    let tasks = client.parse_list_tasks(execute(client.build_list_tasks())).unwrap();
    assert!(tasks.is_empty(), "expected empty list");

    // Step 3: create a task.
    let req = client.build_create_task(&Task::draft("Integration test", false, 5)).unwrap();
    let created = client
        .parse_create_task(execute(req))
        .unwrap()
        .expect("server echoes the created task");
    assert_eq!(created.title(), "Integration test");
    assert!(!created.completed());
    assert_eq!(created.user_id(), 5);
    assert_ne!(created.id(), 0);
    let id = created.id();

    // Step 4: update every field.
    let req = client.build_update_task(&Task::new(id, "Updated title", true, 2)).unwrap();
    client.parse_update_task(execute(req)).unwrap();

    // Step 5: list — should show the replacement.
    let tasks = client.parse_list_tasks(execute(client.build_list_tasks())).unwrap();
    assert_eq!(tasks, vec![Task::new(id, "Updated title", true, 2)]);

    // Step 6: update an id that does not exist.
    let req = client.build_update_task(&Task::new(id + 100, "Nope", false, 1)).unwrap();
    let err = client.parse_update_task(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 7: delete.
    client.parse_delete_task(execute(client.build_delete_task(id))).unwrap();

    // Step 8: delete again — should be NotFound.
    let err = client
        .parse_delete_task(execute(client.build_delete_task(id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 9: list — should be empty again.
    let tasks = client.parse_list_tasks(execute(client.build_list_tasks())).unwrap();
    assert!(tasks.is_empty(), "expected empty list after delete");
}
