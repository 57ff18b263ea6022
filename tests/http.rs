use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct UserResponse {
    email: String,
    avatar: String,
}

#[derive(Debug, Deserialize)]
struct ProgressResponse {
    weeks: u32,
    days: u32,
    trimester: String,
    days_remaining: i64,
    percentage: f64,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    user: UserResponse,
    progress: ProgressResponse,
    upcoming_appointments: usize,
    available_tips: usize,
}

#[derive(Debug, Deserialize, PartialEq)]
struct TipEntry {
    category: String,
    tip: String,
}

#[derive(Debug, Deserialize)]
struct GainRange {
    min: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
struct WeightRecommendation {
    bmi: f64,
    total_recommended: GainRange,
    expected_by_now: f64,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("momaid_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

fn unique_email(label: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{label}_{nanos}@example.com")
}

fn future_due_date() -> String {
    let due = chrono::Local::now().date_naive() + chrono::Duration::days(100);
    due.to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/tips/daily")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_momaid"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .env_remove("GEOAPIFY_API_KEY")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn register_user(client: &Client, base_url: &str, email: &str) {
    let response = client
        .post(format!("{base_url}/api/register"))
        .json(&serde_json::json!({
            "name": "Amina",
            "email": email,
            "password": "secret1",
            "due_date": future_due_date(),
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn http_register_login_dashboard_flow() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let email = unique_email("flow");

    register_user(&client, &server.base_url, &email).await;

    let user: UserResponse = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "email": email, "password": "secret1" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(user.email, email);
    assert_eq!(user.avatar, "A");

    let dashboard: DashboardResponse = client
        .get(format!("{}/api/users/{}/dashboard", server.base_url, email))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Due date is 100 days out: deep into the second trimester.
    assert_eq!(dashboard.user.email, email);
    assert_eq!(dashboard.progress.trimester, "2nd");
    assert!(dashboard.progress.weeks >= 25);
    assert!(dashboard.progress.days <= 6);
    assert!(dashboard.progress.days_remaining <= 100);
    assert!(dashboard.progress.percentage > 0.0 && dashboard.progress.percentage <= 100.0);
    assert_eq!(dashboard.upcoming_appointments, 0);
    assert_eq!(dashboard.available_tips, 4);
}

#[tokio::test]
async fn http_login_with_wrong_password_is_unauthorized() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let email = unique_email("badpass");

    register_user(&client, &server.base_url, &email).await;

    let response = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "email": email, "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn http_register_rejects_past_due_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/register", server.base_url))
        .json(&serde_json::json!({
            "name": "Amina",
            "email": unique_email("pastdue"),
            "password": "secret1",
            "due_date": "2020-01-01",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Due date should be in the future");
}

#[tokio::test]
async fn http_weekly_tips_floor_week_zero_to_week_one() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let week_zero: Vec<TipEntry> = client
        .get(format!("{}/api/tips?week=0", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let week_one: Vec<TipEntry> = client
        .get(format!("{}/api/tips?week=1", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(week_zero, week_one);
    assert_eq!(week_one.len(), 4);
    assert_eq!(week_one[0].category, "Health");
}

#[tokio::test]
async fn http_personalized_tips_top_up_to_three() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let email = unique_email("tips");

    register_user(&client, &server.base_url, &email).await;

    let tips: Vec<TipEntry> = client
        .get(format!(
            "{}/api/users/{}/tips?week=24&categories=nutrition",
            server.base_url, email
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(tips.len(), 3);
    assert_eq!(tips[0].category, "Nutrition");
}

#[tokio::test]
async fn http_search_finds_heartbeat_tip_without_duplicates() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let results: Vec<TipEntry> = client
        .get(format!("{}/api/tips/search?q=heart", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(results
        .iter()
        .any(|entry| entry.category == "Development" && entry.tip.contains("heart is beating")));
    let mut texts: Vec<&str> = results.iter().map(|entry| entry.tip.as_str()).collect();
    texts.sort_unstable();
    let before = texts.len();
    texts.dedup();
    assert_eq!(texts.len(), before);
}

#[tokio::test]
async fn http_weight_endpoint_matches_reference_case() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let rec: WeightRecommendation = client
        .get(format!(
            "{}/api/weight?weight_kg=70&height_cm=170&week=20",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rec.bmi, 24.2);
    assert_eq!(rec.total_recommended.min, 11.5);
    assert_eq!(rec.total_recommended.max, 16.0);
    assert_eq!(rec.expected_by_now, 6.9);

    let response = client
        .get(format!(
            "{}/api/weight?weight_kg=70&height_cm=0&week=20",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_clinics_without_api_key_is_configuration_error() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/clinics?location=Nairobi", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().await.unwrap().contains("GEOAPIFY_API_KEY"));
}
