use floorcheck::analyzers::wallet::scan_wallet;
use floorcheck::opensea::OpenseaAPIClient;

use anyhow::Result;
use chrono::NaiveDate;
use dotenv::dotenv;

// Earliest date by which a listing must be gone or priced at the floor,
// YYYY-MM-DD. The floor is in ETH, to two decimal places.
static CUTOFF_DATE: &str = "2021-10-07";
static MIN_ETH: f64 = 2.00;

static KILLAZ_WALLET_ADDRESS: &str = "0x21850dCFe24874382B12d05c5B189F5A2ACF0E5b";

#[tokio::main]
pub async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let cutoff_date = NaiveDate::parse_from_str(CUTOFF_DATE, "%Y-%m-%d")?;

    let client = OpenseaAPIClient::new();

    let valid_users = scan_wallet(
        &client,
        KILLAZ_WALLET_ADDRESS,
        cutoff_date,
        MIN_ETH,
        1..=500,
        true,
    )
    .await;

    println!("{:?}", valid_users);
    println!();
    println!("{}", valid_users.len());

    Ok(())
}
