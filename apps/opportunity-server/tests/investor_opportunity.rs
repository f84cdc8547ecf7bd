use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use grip_ai::{InvestmentAdvisor, StubProvider};
use grip_core::opportunity::OpportunityService;
use grip_opportunity_server::{api::app_router, main_lib::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "grip-test-boundary";

fn router_with_stub(stub: Arc<StubProvider>) -> axum::Router {
    let state = Arc::new(AppState {
        opportunity_service: Arc::new(OpportunityService::new()),
        advisor: Arc::new(InvestmentAdvisor::new(stub)),
    });
    app_router(state)
}

/// Hand-rolled multipart body: `(name, optional filename, content)`.
fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> Body {
    let mut body = String::new();
    for (name, filename, content) in parts {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        match filename {
            Some(filename) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\r\n",
                name, filename
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                name
            )),
        }
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    Body::from(body)
}

async fn post_opportunity(
    app: axum::Router,
    parts: &[(&str, Option<&str>, &str)],
) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/investor_opportunity")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(multipart_body(parts))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn steady_year_csv() -> String {
    let mut csv = String::from("date,revenue,cost\n");
    for month in 1..=12 {
        csv.push_str(&format!("2024-{:02}-15,1000,400\n", month));
    }
    csv
}

#[tokio::test]
async fn full_report_for_steady_year() {
    let stub = Arc::new(StubProvider::with_text(
        "```json\n{\"investment_summary\": \"Yes - steady revenue, fully collected.\", \"confidence\": \"High confidence\"}\n```",
    ));
    let app = router_with_stub(stub.clone());
    let transactions = steady_year_csv();

    let (status, body) = post_opportunity(
        app,
        &[
            ("profile_text", None, "Family-run bakery in Lisbon"),
            ("transactions_file", Some("transactions.csv"), &transactions),
            ("payments_file", Some("payments.csv"), "amount_paid\n11000\n"),
        ],
    )
    .await;

    assert_eq!(status, 200);

    let metrics = &body["metrics"];
    assert_eq!(metrics["total_revenue"], json!(12000.0));
    assert_eq!(metrics["total_cost"], json!(4800.0));
    assert_eq!(metrics["net_profit"], json!(7200.0));
    assert_eq!(metrics["months_of_data"], json!(12));
    assert_eq!(metrics["avg_monthly_revenue"], json!(1000.0));
    assert_eq!(metrics["growth_rate_percent"], json!(0.0));
    assert_eq!(metrics["annualized_net_profit"], json!(7200.0));

    assert_eq!(body["annualized_revenue_estimate"], json!(12000.0));
    // growth 0.0 -> multiple 2.5 on 12000
    assert_eq!(body["valuation_estimate"], json!(30000.0));
    assert_eq!(
        body["recommended_investment_range"],
        json!({"min": 900.0, "max": 3000.0})
    );

    let baseline = &body["roi_projections"]["baseline"];
    assert_eq!(baseline["roi_percent_min_investment"], json!(800.0));
    assert_eq!(baseline["roi_percent_max_investment"], json!(240.0));
    let uplift = &body["roi_projections"]["with_uplift"];
    assert_eq!(uplift["assumption_uplift_low_pct"], json!(10.0));
    assert_eq!(uplift["assumption_uplift_high_pct"], json!(30.0));
    // 7920 / 900 * 100 and 9360 / 3000 * 100
    assert_eq!(uplift["projected_roi_percent_min_investment"], json!(880.0));
    assert_eq!(uplift["projected_roi_percent_max_investment"], json!(312.0));

    assert_eq!(body["risk"]["risk_score"], json!("Low"));
    assert_eq!(body["risk"]["raw_score"], json!(1));

    assert_eq!(
        body["llm_investment_advice"]["investment_summary"],
        json!("Yes - steady revenue, fully collected.")
    );

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'));
    assert!(timestamp.contains('T'));

    let prompt = stub.last_prompt().unwrap();
    assert!(prompt.contains("- profile_text: Family-run bakery in Lisbon"));
    assert!(prompt.contains("- valuation_estimate: 30000"));
}

#[tokio::test]
async fn empty_ledger_yields_null_estimates() {
    let app = router_with_stub(Arc::new(StubProvider::with_text("Too little data to say.")));

    let (status, body) = post_opportunity(
        app,
        &[
            ("profile_text", None, "Brand new kiosk"),
            ("transactions_file", Some("transactions.csv"), "date,revenue,cost\n"),
        ],
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["metrics"]["months_of_data"], json!(0));
    assert_eq!(body["metrics"]["avg_monthly_revenue"], json!(0.0));
    assert_eq!(body["metrics"]["annualized_net_profit"], json!(null));
    assert_eq!(body["annualized_revenue_estimate"], json!(null));
    assert_eq!(body["valuation_estimate"], json!(null));
    assert_eq!(
        body["recommended_investment_range"],
        json!({"min": null, "max": null})
    );
    assert_eq!(body["roi_projections"], json!({}));
    assert_eq!(body["risk"]["risk_score"], json!("High"));
    assert_eq!(body["risk"]["raw_score"], json!(4));

    // Free-text advice degrades to the raw_text wrapper, not an error.
    assert_eq!(
        body["llm_investment_advice"],
        json!({"raw_text": "Too little data to say."})
    );
}

#[tokio::test]
async fn payments_without_amount_paid_leaves_coverage_unknown() {
    let app = router_with_stub(Arc::new(StubProvider::with_text("{}")));
    let transactions = steady_year_csv();

    let (status, body) = post_opportunity(
        app,
        &[
            ("profile_text", None, "Bakery"),
            ("transactions_file", Some("transactions.csv"), &transactions),
            ("payments_file", Some("payments.csv"), "paid_on\n2024-02-01\n"),
        ],
    )
    .await;

    assert_eq!(status, 200);
    // months +0, low growth +1, coverage unknown +1
    assert_eq!(body["risk"]["raw_score"], json!(2));
    assert_eq!(body["risk"]["risk_score"], json!("Medium"));
    let drivers: Vec<String> = body["risk"]["drivers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap().to_string())
        .collect();
    assert!(drivers.contains(&"Payment coverage unknown.".to_string()));
}

#[tokio::test]
async fn missing_cost_column_is_rejected() {
    let app = router_with_stub(Arc::new(StubProvider::with_text("{}")));

    let (status, body) = post_opportunity(
        app,
        &[
            ("profile_text", None, "Bakery"),
            (
                "transactions_file",
                Some("transactions.csv"),
                "date,revenue\n2024-01-05,100\n",
            ),
        ],
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        json!("Transactions file must contain columns: [\"cost\", \"date\", \"revenue\"]")
    );
}

#[tokio::test]
async fn unsupported_upload_extension_is_rejected() {
    let app = router_with_stub(Arc::new(StubProvider::with_text("{}")));

    let (status, body) = post_opportunity(
        app,
        &[
            ("profile_text", None, "Bakery"),
            ("transactions_file", Some("transactions.pdf"), "%PDF-1.4"),
        ],
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        json!("Unsupported file type. Please upload .csv or .xlsx")
    );
}

#[tokio::test]
async fn missing_transactions_part_is_rejected() {
    let app = router_with_stub(Arc::new(StubProvider::with_text("{}")));

    let (status, body) =
        post_opportunity(app, &[("profile_text", None, "Bakery")]).await;

    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        json!("Missing transactions_file in multipart request")
    );
}

#[tokio::test]
async fn missing_profile_text_is_rejected() {
    let app = router_with_stub(Arc::new(StubProvider::with_text("{}")));
    let transactions = steady_year_csv();

    let (status, body) = post_opportunity(
        app,
        &[("transactions_file", Some("transactions.csv"), &transactions)],
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        json!("Missing profile_text in multipart request")
    );
}

#[tokio::test]
async fn non_multipart_body_is_rejected() {
    let app = router_with_stub(Arc::new(StubProvider::with_text("{}")));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/investor_opportunity")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn provider_failure_maps_to_unexpected_error() {
    let app = router_with_stub(Arc::new(StubProvider::failing("quota exceeded")));
    let transactions = steady_year_csv();

    let (status, body) = post_opportunity(
        app,
        &[
            ("profile_text", None, "Bakery"),
            ("transactions_file", Some("transactions.csv"), &transactions),
        ],
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], json!("Unexpected error"));
    assert!(body["detail"].as_str().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn health_probe_reports_service() {
    let app = router_with_stub(Arc::new(StubProvider::with_text("unused")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "grip-opportunity-server");
}
