//! Command output shapes for JSON and table rendering.

mod common;

use common::FakeTransport;
use futcli::cli::{evolutions_cmd, sbc_cmd, OutputFormat};
use futcli::evolutions::EvolutionsScraper;
use futcli::sbc::SbcFetcher;
use serde_json::{json, Value};

const API: &str = "https://www.fut.gg/api/fut/sbc/";

fn catalog() -> String {
    json!({
        "data": [
            {"name": "Gold Upgrade", "category": {"slug": "upgrades"}, "cost": 5000},
            {"name": "Icon Pick", "category": {"slug": "icons"}, "cost": 250000}
        ],
        "next": null
    })
    .to_string()
}

fn evolutions_page() -> String {
    concat!(
        r#"<script>{id:1,game:"26",eaId:100,url:"/evolutions/test-evo","#,
        r#"name:"Tester",coinsCost:0,pointsCost:0,"#,
        "requirements:$R[5]={maxOverall:88},",
        r#"totalUpgradesText:$R[10]=[label:"PAC",value:"3",maxValue:"5"]}</script>"#
    )
    .to_string()
}

#[tokio::test]
async fn test_sbc_all_categories_json() {
    let mut fetcher = SbcFetcher::new(FakeTransport::always(catalog()), API);
    let out = sbc_cmd::run(&mut fetcher, None, OutputFormat::Json).await.unwrap();
    let parsed: Vec<Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["Name"], "Gold Upgrade");
    assert_eq!(parsed[1]["Price"], "250,000");
}

#[tokio::test]
async fn test_sbc_one_category_json() {
    let mut fetcher = SbcFetcher::new(FakeTransport::always(catalog()), API);
    let out = sbc_cmd::run(&mut fetcher, Some("upgrades"), OutputFormat::Json)
        .await
        .unwrap();
    let parsed: Vec<Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["Name"], "Gold Upgrade");
}

#[tokio::test]
async fn test_sbc_unknown_category_is_error() {
    let mut fetcher = SbcFetcher::new(FakeTransport::always(catalog()), API);
    let err = sbc_cmd::run(&mut fetcher, Some("nonexistent"), OutputFormat::Json)
        .await
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Invalid SBC option"));
    assert!(msg.contains("upgrades, icons"));
}

#[tokio::test]
async fn test_sbc_failed_fetch_renders_empty() {
    let mut fetcher = SbcFetcher::new(FakeTransport::failing(), API);
    let out = sbc_cmd::run(&mut fetcher, None, OutputFormat::Json).await.unwrap();
    assert_eq!(out, "[]");
}

#[tokio::test]
async fn test_sbc_types() {
    let mut fetcher = SbcFetcher::new(FakeTransport::always(catalog()), API);
    let out = sbc_cmd::run_types(&mut fetcher, OutputFormat::Table).await.unwrap();
    assert_eq!(out, "icons\nupgrades");
}

#[tokio::test]
async fn test_evolutions_json_not_double_encoded() {
    let scraper = EvolutionsScraper::new(
        FakeTransport::always(evolutions_page()),
        "https://www.fut.gg/evolutions/",
        "26",
    );
    let out = evolutions_cmd::run(&scraper, OutputFormat::Json).await.unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert!(parsed[0]["Requirements"].is_object());
    assert!(parsed[0]["Upgrades"].is_object());
    assert_eq!(parsed[0]["Requirements"]["Max Overall"], "88");
    assert_eq!(parsed[0]["Upgrades"]["PAC"], "5");
    assert_eq!(parsed[0]["Price"], "FREE");
}

#[tokio::test]
async fn test_evolutions_table_has_name() {
    let scraper = EvolutionsScraper::new(
        FakeTransport::always(evolutions_page()),
        "https://www.fut.gg/evolutions/",
        "26",
    );
    let out = evolutions_cmd::run(&scraper, OutputFormat::Table).await.unwrap();
    assert!(out.contains("Tester"));
    assert!(out.contains("Name"));
}

#[tokio::test]
async fn test_sbc_category_lookup_sweeps_once() {
    let mut fetcher = SbcFetcher::new(FakeTransport::always(catalog()), API);
    assert!(sbc_cmd::run(&mut fetcher, Some("nonexistent"), OutputFormat::Json)
        .await
        .is_err());
    assert!(sbc_cmd::run(&mut fetcher, Some("icons"), OutputFormat::Json)
        .await
        .is_ok());
    assert_eq!(fetcher.transport().call_count(), 1);
}
