#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct Owner {
    pub address: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct Order {
    pub created_date: String,
    #[serde(default)]
    pub closing_date: Option<String>,
    pub current_price: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct Asset {
    pub token_id: String,
    pub owner: Owner,
    // the v1 asset endpoint returns null as well as [] for never-listed tokens
    #[serde(default)]
    pub orders: Option<Vec<Order>>,
}
