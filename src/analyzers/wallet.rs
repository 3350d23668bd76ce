use crate::analyzers::listings::is_valid_listing;
use crate::opensea::{decode_asset, AssetFetcher};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::ops::RangeInclusive;

// Walks token_ids in order and collects the owner addresses whose listing
// verdict matches want_valid. Fetch and decode failures skip the token; the
// scan always runs the full range.
pub async fn scan_wallet(
    fetcher: &impl AssetFetcher,
    wallet_address: &str,
    cutoff_date: NaiveDate,
    min_eth: f64,
    token_ids: RangeInclusive<u64>,
    want_valid: bool,
) -> HashSet<String> {
    let mut wallets = HashSet::new();

    for token_id in token_ids {
        let raw = match fetcher.fetch_asset(wallet_address, token_id).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("fetch failed for token {}: {}", token_id, e);
                continue;
            }
        };

        // malformed bodies contribute nothing
        let asset = match decode_asset(&raw) {
            Some(asset) => asset,
            None => continue,
        };

        log::info!("validating listing history for token {}", asset.token_id);

        match is_valid_listing(&asset, cutoff_date, min_eth) {
            Ok(valid) if valid == want_valid => {
                wallets.insert(asset.owner.address);
            }
            Ok(_) => {}
            Err(e) => log::warn!("skipping token {}: {}", asset.token_id, e),
        }
    }

    wallets
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct ScriptedFetcher {
        bodies: HashMap<u64, String>,
    }

    #[async_trait]
    impl AssetFetcher for ScriptedFetcher {
        async fn fetch_asset(&self, _wallet_address: &str, token_id: u64) -> anyhow::Result<String> {
            self.bodies
                .get(&token_id)
                .cloned()
                .ok_or_else(|| anyhow!("no response scripted for token {}", token_id))
        }
    }

    fn cutoff() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 10, 7).unwrap()
    }

    fn body(token_id: u64, owner: &str, orders: &str) -> String {
        format!(
            r#"{{"token_id": "{}", "owner": {{"address": "{}"}}, "orders": {}}}"#,
            token_id, owner, orders
        )
    }

    static NEVER_LISTED: &str = "[]";
    static CHEAP_OPEN_ORDER: &str = r#"[{"created_date": "2021-10-08T10:00:00", "closing_date": null, "current_price": "1000000000000000000"}]"#;

    #[tokio::test]
    async fn test_malformed_bodies_are_skipped() {
        let fetcher = ScriptedFetcher {
            bodies: HashMap::from([
                (1, body(1, "0xaaa", NEVER_LISTED)),
                (2, body(2, "0xbbb", NEVER_LISTED)),
                (3, String::from("<html>504 Gateway Time-out</html>")),
                (4, String::from(r#"{"detail": "Request was throttled."}"#)),
            ]),
        };

        let users = scan_wallet(&fetcher, "0xcontract", cutoff(), 2.0, 1..=4, true).await;

        assert_eq!(users, HashSet::from([String::from("0xaaa"), String::from("0xbbb")]));
    }

    #[tokio::test]
    async fn test_polarity_selects_which_owners_accumulate() {
        let fetcher = ScriptedFetcher {
            bodies: HashMap::from([
                (1, body(1, "0xgood", NEVER_LISTED)),
                (2, body(2, "0xbad", CHEAP_OPEN_ORDER)),
            ]),
        };

        let valid = scan_wallet(&fetcher, "0xcontract", cutoff(), 2.0, 1..=2, true).await;
        assert_eq!(valid, HashSet::from([String::from("0xgood")]));

        let invalid = scan_wallet(&fetcher, "0xcontract", cutoff(), 2.0, 1..=2, false).await;
        assert_eq!(invalid, HashSet::from([String::from("0xbad")]));
    }

    #[tokio::test]
    async fn test_duplicate_owners_collapse() {
        let fetcher = ScriptedFetcher {
            bodies: HashMap::from([
                (1, body(1, "0xwhale", NEVER_LISTED)),
                (2, body(2, "0xwhale", NEVER_LISTED)),
            ]),
        };

        let users = scan_wallet(&fetcher, "0xcontract", cutoff(), 2.0, 1..=2, true).await;

        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_errors_do_not_abort_the_scan() {
        // only token 3 answers; 1 and 2 error out of the fetcher
        let fetcher = ScriptedFetcher {
            bodies: HashMap::from([(3, body(3, "0xccc", NEVER_LISTED))]),
        };

        let users = scan_wallet(&fetcher, "0xcontract", cutoff(), 2.0, 1..=3, true).await;

        assert_eq!(users, HashSet::from([String::from("0xccc")]));
    }

    #[tokio::test]
    async fn test_unparseable_order_dates_skip_the_token() {
        let bad_order = r#"[{"created_date": "soon", "closing_date": null, "current_price": "1000000000000000000"}]"#;
        let fetcher = ScriptedFetcher {
            bodies: HashMap::from([
                (1, body(1, "0xaaa", bad_order)),
                (2, body(2, "0xbbb", NEVER_LISTED)),
            ]),
        };

        let users = scan_wallet(&fetcher, "0xcontract", cutoff(), 2.0, 1..=2, true).await;

        assert_eq!(users, HashSet::from([String::from("0xbbb")]));
    }
}
