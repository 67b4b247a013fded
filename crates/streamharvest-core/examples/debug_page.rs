//! Debug script to inspect iframes on a source page

use streamharvest_core::{AggregatorConfig, PageClient, parse_iframe_sources};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AggregatorConfig::default();
    let client = PageClient::new()?;

    for source in &config.sources {
        println!("Fetching {} ({})...\n", source.name, source.url);

        let html = client.fetch(&source.url).await?;
        std::fs::write("debug_page.html", &html)?;
        println!("HTML saved to debug_page.html");

        let iframes = parse_iframe_sources(&html)?;
        println!("Found {} iframe(s):", iframes.len());
        for src in iframes {
            println!("  {}", src);
        }
        println!();
    }

    Ok(())
}
