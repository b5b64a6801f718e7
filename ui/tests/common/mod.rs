use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Must be retained to keep the HTTP endpoint alive during the test.
    #[allow(dead_code)]
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    /// App backed by a mock server serving `members` at `/members.json`.
    pub async fn new_app(members: serde_json::Value) -> TestCtx<'a> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/members.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(members))
            .mount(&mock_server)
            .await;

        let state = State::test(format!("{}/members.json", mock_server.uri()));
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        TestCtx {
            mock_server,
            harness,
        }
    }

    /// Pumps frames until the roster has been installed.
    pub async fn wait_for_load(&mut self) {
        for _ in 0..50 {
            self.harness.step();
            let loaded = self
                .harness
                .state_mut()
                .state
                .ctx
                .state_mut::<roster_business::RosterState>()
                .is_loaded();
            if loaded {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        panic!("roster never finished loading");
    }
}

/// JSON payload with `n` generated members.
#[allow(dead_code)]
pub fn members_json(n: usize) -> serde_json::Value {
    let members: Vec<_> = (1..=n)
        .map(|i| {
            serde_json::json!({
                "id": i.to_string(),
                "name": format!("Member {i:02}"),
                "email": format!("member{i:02}@mailinator.com"),
                "role": if i % 2 == 0 { "admin" } else { "member" },
            })
        })
        .collect();
    serde_json::Value::Array(members)
}
