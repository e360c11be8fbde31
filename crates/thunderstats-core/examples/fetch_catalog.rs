use thunderstats_core::api::{ApiClient, CatalogQuery};
use thunderstats_core::filter::CatalogFilter;
use thunderstats_core::resolve::{resolve_image, resolve_speed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let query = std::env::args().nth(1).unwrap_or_default();

    let client = ApiClient::new();
    let catalog = client.fetch_catalog(&CatalogQuery::default()).await;
    println!("Fetched {} vehicles", catalog.len());

    let filter = CatalogFilter {
        search: query.clone(),
        ..Default::default()
    };
    let matches = filter.apply(&catalog);
    println!("{} vehicles match \"{}\"", matches.len(), query);

    for vehicle in matches.iter().take(10) {
        let detail = client.fetch_detail(&vehicle.identifier, None).await;
        println!(
            "  - {} ({}) speed={} image={}",
            vehicle.identifier,
            vehicle.country.as_deref().unwrap_or("?"),
            resolve_speed(detail.as_ref()),
            resolve_image(detail.as_ref()),
        );
    }

    Ok(())
}
