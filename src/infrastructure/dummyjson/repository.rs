use super::payload::SearchResponse;
use crate::domain::{entities::Recipe, errors::SearchError, repositories::RecipeRepository};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

pub struct DummyJsonRecipeRepository {
    client: Client,
    endpoint: String,
}

impl DummyJsonRecipeRepository {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RecipeRepository for DummyJsonRecipeRepository {
    async fn search_recipes(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        tracing::debug!("GET {}?q={}", self.endpoint, query);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        let recipes = parsed.into_recipes();
        tracing::debug!("Search for '{}' returned {} recipes", query, recipes.len());
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn repository_for(server: &MockServer) -> DummyJsonRecipeRepository {
        DummyJsonRecipeRepository::new(format!("{}/recipes/search", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn chicken_search_returns_named_recipes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/search"))
            .and(query_param("q", "chicken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "recipes": [
                    {"id": 4, "name": "Chicken Alfredo Pasta", "ingredients": ["Fettuccine"]},
                    {"id": 12, "name": "Chicken Biryani", "servings": 6}
                ],
                "total": 2,
                "skip": 0,
                "limit": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let recipes = repository_for(&server).await.search_recipes("chicken").await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(|recipe| !recipe.name.is_empty()));
        assert_eq!(recipes[1].servings, Some(6));
    }

    #[tokio::test]
    async fn empty_object_yields_no_recipes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let recipes = repository_for(&server).await.search_recipes("").await.unwrap();

        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn query_is_passed_as_single_encoded_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/search"))
            .and(query_param("q", "mac & cheese"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": []})))
            .expect(1)
            .mount(&server)
            .await;

        let result = repository_for(&server).await.search_recipes("mac & cheese").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn server_error_is_reported_as_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = repository_for(&server).await.search_recipes("soup").await;

        assert!(matches!(result, Err(SearchError::Status(503))));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = repository_for(&server).await.search_recipes("soup").await;

        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        let repository = DummyJsonRecipeRepository::new("http://127.0.0.1:9/recipes/search").unwrap();

        let result = repository.search_recipes("soup").await;

        assert!(matches!(result, Err(SearchError::Request(_))));
    }
}
