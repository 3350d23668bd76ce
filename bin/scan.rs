use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{App, Arg};
use dotenv::dotenv;
use floorcheck::analyzers::wallet::scan_wallet;
use floorcheck::opensea::OpenseaAPIClient;

static KILLAZ_WALLET_ADDRESS: &str = "0x21850dCFe24874382B12d05c5B189F5A2ACF0E5b";
static LADY_KILLAZ_WALLET_ADDRESS: &str = "0xE4D0E33021476Ca05aB22C8BF992D3b013752B80";

#[tokio::main]
pub async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let matches = App::new("floorcheck")
        .version("1.0")
        .about("Snapshots wallet addresses by listing-policy compliance")
        .arg(
            Arg::with_name("collection")
                .short("-c")
                .long("collection")
                .value_name("COLLECTION")
                .help("Collection to scan: killaz or ladiez")
                .takes_value(true)
                .default_value("killaz"),
        )
        .arg(
            Arg::with_name("address")
                .short("-a")
                .long("address")
                .value_name("ADDRESS")
                .help("Scan an explicit asset contract address instead")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("cutoff")
                .short("-d")
                .long("cutoff")
                .value_name("DATE")
                .help("Cutoff date, YYYY-MM-DD")
                .takes_value(true)
                .default_value("2021-10-07"),
        )
        .arg(
            Arg::with_name("min-eth")
                .short("-m")
                .long("min-eth")
                .value_name("ETH")
                .help("Price floor in ETH, two decimal places")
                .takes_value(true)
                .default_value("2.00"),
        )
        .arg(
            Arg::with_name("max-id")
                .short("-n")
                .long("max-id")
                .value_name("TOKEN_ID")
                .help("Highest token id to scan (500 by default, 9971 with --invalid)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("invalid")
                .short("-i")
                .long("invalid")
                .help("Collect wallets violating the policy instead of compliant ones"),
        )
        .get_matches();

    let want_valid = !matches.is_present("invalid");

    let wallet_address = match matches.value_of("address") {
        Some(address) => address,
        None => match matches.value_of("collection") {
            Some("killaz") => KILLAZ_WALLET_ADDRESS,
            Some("ladiez") => LADY_KILLAZ_WALLET_ADDRESS,
            _ => return Err(anyhow!("unknown collection, expected killaz or ladiez")),
        },
    };

    let cutoff_date = NaiveDate::parse_from_str(matches.value_of("cutoff").unwrap(), "%Y-%m-%d")?;

    let min_eth = matches
        .value_of("min-eth")
        .unwrap()
        .parse::<f64>()
        .expect("ETH was not a number");

    let max_id = match matches.value_of("max-id") {
        Some(n) => n.parse::<u64>().expect("TOKEN_ID was not a number"),
        None if want_valid => 500,
        None => 9971,
    };

    let client = OpenseaAPIClient::new();

    let users = scan_wallet(
        &client,
        wallet_address,
        cutoff_date,
        min_eth,
        1..=max_id,
        want_valid,
    )
    .await;

    println!("{:?}", users);
    println!();
    println!("{}", users.len());

    Ok(())
}
