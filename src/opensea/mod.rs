use self::types::Asset;

use anyhow::Result;
use async_trait::async_trait;

pub mod types;

static API_BASE: &str = "https://api.opensea.io/api";

static ASSET_PATH: &str = "/v1/asset/";

#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch_asset(&self, wallet_address: &str, token_id: u64) -> Result<String>;
}

pub struct OpenseaAPIClient {
    client: reqwest::Client,
}

impl Default for OpenseaAPIClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenseaAPIClient {
    pub fn new() -> Self {
        let client = reqwest::Client::new();
        Self { client }
    }
}

#[async_trait]
impl AssetFetcher for OpenseaAPIClient {
    async fn fetch_asset(&self, wallet_address: &str, token_id: u64) -> Result<String> {
        let mut builder = self
            .client
            .get(API_BASE.to_string() + ASSET_PATH + wallet_address + "/" + &token_id.to_string())
            .header("Accept-Encoding", "application/json");
        if let Ok(key) = dotenv::var("OPENSEA_API_KEY") {
            builder = builder.header("x-api-key", key);
        }
        let reqw = builder.build()?;
        let resp = self.client.execute(reqw).await?;
        // non-2xx bodies fail decode downstream and the token is skipped
        Ok(resp.text().await?)
    }
}

pub fn decode_asset(raw: &str) -> Option<Asset> {
    serde_json::from_str(raw).ok()
}
