//! reqwest-backed implementation of [`FoodApi`]

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, FoodApi};
use crate::config::ApiConfig;
use crate::models::{CreateFood, Food};

/// HTTP client for the `/foods` resource
#[derive(Debug, Clone)]
pub struct FoodClient {
    client: Client,
    config: ApiConfig,
}

impl FoodClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn foods_url(&self) -> String {
        self.config.url("foods")
    }

    fn food_url(&self, id: u32) -> String {
        self.config.url(&format!("foods/{}", id))
    }

    /// Fail on non-success status, keeping the response body for the log
    async fn check_status(method: &'static str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            method,
            url,
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(method: &'static str, response: Response) -> ApiResult<T> {
        let response = Self::check_status(method, response).await?;
        response.json().await.map_err(Into::into)
    }
}

#[async_trait(?Send)]
impl FoodApi for FoodClient {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        let url = self.foods_url();
        log::debug!("[API] GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode("GET", response).await
    }

    async fn create_food(&self, body: &CreateFood) -> ApiResult<Food> {
        let url = self.foods_url();
        log::debug!("[API] POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode("POST", response).await
    }

    async fn update_food(&self, id: u32, body: &Food) -> ApiResult<Food> {
        let url = self.food_url(id);
        log::debug!("[API] PUT {}", url);
        let response = self.client.put(&url).json(body).send().await?;
        Self::decode("PUT", response).await
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        let url = self.food_url(id);
        log::debug!("[API] DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::check_status("DELETE", response).await?;
        Ok(())
    }
}
