use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tagmatch_core::{CareerProfile, Catalog, Error, LearningPath, RecommendConfig};
use tagmatch_similarity::{
    recommend, recommend_batch, recommend_with_scores, reverse_recommend, score_breakdown,
    ExplainedResult, SimilarityStats, TagScore,
};
use tracing::{debug, warn};

/// Shared, read-only server state
#[derive(Debug, Clone, Default)]
pub struct ApiState {
    /// Snapshot served by the catalog-backed endpoints
    pub catalog: Option<Catalog>,
    /// Applied to requests that leave a setting out
    pub defaults: RecommendConfig,
}

impl ApiState {
    pub fn new(catalog: Option<Catalog>, defaults: RecommendConfig) -> Self {
        Self { catalog, defaults }
    }

    fn resolve(&self, min_similarity: Option<f32>, max_results: Option<usize>) -> Result<RecommendConfig, Error> {
        let config = RecommendConfig {
            min_similarity: min_similarity.unwrap_or(self.defaults.min_similarity),
            max_results: max_results.unwrap_or(self.defaults.max_results),
        };
        config.validate()?;
        Ok(config)
    }

    fn catalog(&self) -> Result<&Catalog, Error> {
        self.catalog
            .as_ref()
            .ok_or_else(|| Error::EntityNotFound("no catalog loaded".to_string()))
    }
}

#[derive(Deserialize)]
struct ScoreRequest {
    source_tags: Vec<String>,
    target_tags: Vec<String>,
}

#[derive(Deserialize)]
struct RecommendRequest<S, C> {
    source: S,
    pool: Vec<C>,
    min_similarity: Option<f32>,
    max_results: Option<usize>,
}

#[derive(Deserialize)]
struct ExplainRequest<S, C> {
    source: S,
    pool: Vec<C>,
    min_similarity: Option<f32>,
}

#[derive(Deserialize)]
struct BatchRequest {
    sources: Vec<LearningPath>,
    pool: Vec<CareerProfile>,
    min_similarity: Option<f32>,
    max_results: Option<usize>,
}

#[derive(Deserialize)]
struct ConfigQuery {
    min_similarity: Option<f32>,
    max_results: Option<usize>,
}

#[derive(Serialize)]
struct ExplainResponse {
    result: Vec<ExplainedResult>,
    stats: SimilarityStats,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<ApiState>, host: &str, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .configure(configure(state.clone()))
        })
        .bind((host, port))?
        .run()
        .await
    }
}

/// Register all routes and the shared state on an app
pub fn configure(state: Arc<ApiState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state))
            .route("/similarity/score", web::post().to(score_tags))
            .route("/recommendations/careers", web::post().to(recommend_careers))
            .route("/recommendations/careers/explain", web::post().to(explain_careers))
            .route("/recommendations/careers/batch", web::post().to(batch_careers))
            .route("/recommendations/learning-paths", web::post().to(recommend_learning_paths))
            .route("/recommendations/learning-paths/explain", web::post().to(explain_learning_paths))
            .route("/learning-paths/{id}/careers", web::get().to(catalog_careers))
            .route("/learning-paths/{id}/careers/explain", web::get().to(catalog_explain))
            .route("/careers/{id}/learning-paths", web::get().to(catalog_learning_paths));
    }
}

fn error_response(e: Error) -> HttpResponse {
    warn!(error = %e, "request failed");
    let body = serde_json::json!({
        "error": e.to_string()
    });
    match e {
        Error::EntityNotFound(_) => HttpResponse::NotFound().json(body),
        Error::InvalidConfig(_) | Error::Serialization(_) => HttpResponse::BadRequest().json(body),
        Error::Io(_) => HttpResponse::InternalServerError().json(body),
    }
}

async fn score_tags(req: web::Json<ScoreRequest>) -> ActixResult<HttpResponse> {
    let breakdown: TagScore = score_breakdown(&req.source_tags, &req.target_tags);
    debug!(score = breakdown.score, "scored tag pair");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": breakdown
    })))
}

async fn recommend_careers(
    state: web::Data<Arc<ApiState>>,
    req: web::Json<RecommendRequest<LearningPath, CareerProfile>>,
) -> ActixResult<HttpResponse> {
    let config = match state.resolve(req.min_similarity, req.max_results) {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };

    debug!(source = %req.source.id, pool_size = req.pool.len(), "career recommendation request");
    let result = recommend(&req.source, &req.pool, &config);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": result
    })))
}

async fn recommend_learning_paths(
    state: web::Data<Arc<ApiState>>,
    req: web::Json<RecommendRequest<CareerProfile, LearningPath>>,
) -> ActixResult<HttpResponse> {
    let config = match state.resolve(req.min_similarity, req.max_results) {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };

    debug!(source = %req.source.id, pool_size = req.pool.len(), "learning path recommendation request");
    let result = reverse_recommend(&req.source, &req.pool, &config);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": result
    })))
}

async fn explain_careers(
    state: web::Data<Arc<ApiState>>,
    req: web::Json<ExplainRequest<LearningPath, CareerProfile>>,
) -> ActixResult<HttpResponse> {
    let config = match state.resolve(req.min_similarity, None) {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };

    debug!(source = %req.source.id, pool_size = req.pool.len(), "career explain request");
    let results = recommend_with_scores(&req.source, &req.pool);
    Ok(HttpResponse::Ok().json(ExplainResponse {
        stats: SimilarityStats::compute(&results, config.min_similarity),
        result: ExplainedResult::from_results(&results),
    }))
}

async fn explain_learning_paths(
    state: web::Data<Arc<ApiState>>,
    req: web::Json<ExplainRequest<CareerProfile, LearningPath>>,
) -> ActixResult<HttpResponse> {
    let config = match state.resolve(req.min_similarity, None) {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };

    debug!(source = %req.source.id, pool_size = req.pool.len(), "learning path explain request");
    let results = recommend_with_scores(&req.source, &req.pool);
    Ok(HttpResponse::Ok().json(ExplainResponse {
        stats: SimilarityStats::compute(&results, config.min_similarity),
        result: ExplainedResult::from_results(&results),
    }))
}

async fn batch_careers(
    state: web::Data<Arc<ApiState>>,
    req: web::Json<BatchRequest>,
) -> ActixResult<HttpResponse> {
    let config = match state.resolve(req.min_similarity, req.max_results) {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };

    debug!(sources = req.sources.len(), pool_size = req.pool.len(), "batch request");
    let result: HashMap<String, Vec<&CareerProfile>> = recommend_batch(&req.sources, &req.pool, &config);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": result
    })))
}

async fn catalog_careers(
    state: web::Data<Arc<ApiState>>,
    path: web::Path<String>,
    query: web::Query<ConfigQuery>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let config = match state.resolve(query.min_similarity, query.max_results) {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };

    let catalog = match state.catalog() {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };
    let learning_path = match catalog.learning_path(&id) {
        Ok(p) => p,
        Err(e) => return Ok(error_response(e)),
    };

    debug!(source = %id, pool_size = catalog.careers.len(), "catalog career lookup");
    let result = recommend(learning_path, &catalog.careers, &config);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": result
    })))
}

async fn catalog_learning_paths(
    state: web::Data<Arc<ApiState>>,
    path: web::Path<String>,
    query: web::Query<ConfigQuery>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let config = match state.resolve(query.min_similarity, query.max_results) {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };

    let catalog = match state.catalog() {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };
    let career = match catalog.career(&id) {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };

    debug!(source = %id, pool_size = catalog.learning_paths.len(), "catalog learning path lookup");
    let result = reverse_recommend(career, &catalog.learning_paths, &config);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": result
    })))
}

async fn catalog_explain(
    state: web::Data<Arc<ApiState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    let catalog = match state.catalog() {
        Ok(c) => c,
        Err(e) => return Ok(error_response(e)),
    };
    let learning_path = match catalog.learning_path(&id) {
        Ok(p) => p,
        Err(e) => return Ok(error_response(e)),
    };

    debug!(source = %id, pool_size = catalog.careers.len(), "catalog explain lookup");
    let results = recommend_with_scores(learning_path, &catalog.careers);
    Ok(HttpResponse::Ok().json(ExplainResponse {
        stats: SimilarityStats::compute(&results, state.defaults.min_similarity),
        result: ExplainedResult::from_results(&results),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    fn create_test_catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{
                "learningPaths": [
                    {"id": "frontend-react", "title": "Frontend with React", "tags": ["frontend", "react", "javascript"]},
                    {"id": "data-science", "title": "Data Science", "tags": ["python", "statistics"]}
                ],
                "careers": [
                    {"id": "frontend-developer", "title": "Frontend Developer", "tags": ["frontend", "react", "css"]},
                    {"id": "data-scientist", "title": "Data Scientist", "tags": ["python", "statistics", "machine-learning"]}
                ]
            }"#,
        )
        .unwrap()
    }

    fn state_with_catalog() -> Arc<ApiState> {
        Arc::new(ApiState::new(Some(create_test_catalog()), RecommendConfig::default()))
    }

    #[actix_web::test]
    async fn test_score_endpoint() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;

        let req = test::TestRequest::post()
            .uri("/similarity/score")
            .set_json(json!({"source_tags": ["web", "webdev"], "target_tags": ["webdev", "mobile"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["result"]["score"], json!(0.75));
        assert_eq!(body["result"]["exact_matches"], json!(1));
        assert_eq!(body["result"]["partial_matches"], json!(0.5));
    }

    #[actix_web::test]
    async fn test_recommend_careers() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;
        let catalog = create_test_catalog();

        let req = test::TestRequest::post()
            .uri("/recommendations/careers")
            .set_json(json!({
                "source": catalog.learning_paths[0],
                "pool": catalog.careers,
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let result = body["result"].as_array().unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["id"], json!("frontend-developer"));
    }

    #[actix_web::test]
    async fn test_recommend_learning_paths() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;
        let catalog = create_test_catalog();

        let req = test::TestRequest::post()
            .uri("/recommendations/learning-paths")
            .set_json(json!({
                "source": catalog.careers[1],
                "pool": catalog.learning_paths,
                "max_results": 5,
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let result = body["result"].as_array().unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["id"], json!("data-science"));
    }

    #[actix_web::test]
    async fn test_invalid_config_rejected() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;
        let catalog = create_test_catalog();

        let req = test::TestRequest::post()
            .uri("/recommendations/careers")
            .set_json(json!({
                "source": catalog.learning_paths[0],
                "pool": catalog.careers,
                "max_results": 0,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_explain_returns_full_pool() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;
        let catalog = create_test_catalog();

        let req = test::TestRequest::post()
            .uri("/recommendations/careers/explain")
            .set_json(json!({
                "source": catalog.learning_paths[0],
                "pool": catalog.careers,
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let result = body["result"].as_array().unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0]["matching_tags"], json!(["frontend", "react"]));
        assert_eq!(result[1]["score"], json!(0.0));
        assert_eq!(body["stats"]["candidates_count"], json!(2));
        assert_eq!(body["stats"]["above_threshold_count"], json!(1));
    }

    #[actix_web::test]
    async fn test_explain_learning_paths() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;
        let catalog = create_test_catalog();

        let req = test::TestRequest::post()
            .uri("/recommendations/learning-paths/explain")
            .set_json(json!({
                "source": catalog.careers[1],
                "pool": catalog.learning_paths,
                "min_similarity": 0.9,
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let result = body["result"].as_array().unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0]["id"], json!("data-science"));
        assert_eq!(result[0]["matching_tags"], json!(["python", "statistics"]));
        assert_eq!(result[1]["score"], json!(0.0));
        assert_eq!(body["stats"]["candidates_count"], json!(2));
        assert_eq!(body["stats"]["above_threshold_count"], json!(0));
        assert_eq!(body["stats"]["most_common_tag"], json!("python"));
    }

    #[actix_web::test]
    async fn test_batch() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;
        let catalog = create_test_catalog();

        let req = test::TestRequest::post()
            .uri("/recommendations/careers/batch")
            .set_json(json!({
                "sources": catalog.learning_paths,
                "pool": catalog.careers,
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["result"]["frontend-react"][0]["id"], json!("frontend-developer"));
        assert_eq!(body["result"]["data-science"][0]["id"], json!("data-scientist"));
    }

    #[actix_web::test]
    async fn test_catalog_endpoints() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;

        let req = test::TestRequest::get()
            .uri("/learning-paths/data-science/careers?min_similarity=0.5")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"][0]["id"], json!("data-scientist"));

        let req = test::TestRequest::get()
            .uri("/careers/frontend-developer/learning-paths")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"][0]["id"], json!("frontend-react"));

        let req = test::TestRequest::get()
            .uri("/learning-paths/frontend-react/careers/explain")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_catalog_not_found() {
        let app = test::init_service(App::new().configure(configure(state_with_catalog()))).await;

        let req = test::TestRequest::get()
            .uri("/learning-paths/astronomy/careers")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_no_catalog_loaded() {
        let state = Arc::new(ApiState::default());
        let app = test::init_service(App::new().configure(configure(state))).await;

        let req = test::TestRequest::get()
            .uri("/careers/frontend-developer/learning-paths")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
